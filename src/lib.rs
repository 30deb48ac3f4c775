//! # dimfft - one-dimensional DFTs along any axis of an N-d tensor
//!
//! Six transform variants share a single argument contract: an optional
//! signal length `n`, an axis `dim` (negative values count from the end) and
//! an optional normalization mode.
//!
//! | Variant | Input | Output | Output length along `dim` |
//! |---------|-------|--------|---------------------------|
//! | [`fft`]   | complex | complex | `n` |
//! | [`ifft`]  | complex | complex | `n` |
//! | [`rfft`]  | real | complex | `n/2 + 1` |
//! | [`irfft`] | onesided complex | real | `n` |
//! | [`hfft`]  | onesided complex | real | `n` |
//! | [`ihfft`] | real | onesided complex | `n/2 + 1` |
//!
//! Complex-input variants accept real tensors and promote them. `norm` is
//! `"backward"` (default, `1/n` on the inverse), `"forward"` (`1/n` on the
//! forward transform) or `"ortho"` (`1/sqrt(n)` on both).
//!
//! ```
//! use dimfft::{irfft, rfft, Tensor};
//!
//! let signal: Vec<f64> = (0..128).map(|i| (i as f64 * 0.1).sin()).collect();
//! let x = Tensor::from_real(&[1, 128], signal.clone()).unwrap();
//! let spectrum = rfft(&x, None, -1, None).unwrap();
//! assert_eq!(spectrum.shape(), &[1, 65]);
//! let back = irfft(&spectrum, None, -1, None).unwrap();
//! assert_eq!(back.shape(), &[1, 128]);
//! for (a, b) in back.as_real().unwrap().iter().zip(&signal) {
//!     assert!((a - b).abs() < 1e-9);
//! }
//! ```
//!
//! ## Engines
//!
//! The dispatcher validates and normalizes arguments, then calls a
//! [`DftEngine`]. [`ScalarEngine`] is the built-in engine: Stockham radix-2
//! for power-of-two lengths, Bluestein for every other length and a packed
//! half-length FFT for even real transforms. Plug in another engine with
//! [`Dispatcher::new`].
//!
//! ## Cargo Features
//!
//! - `std` (default): `std::error::Error` for [`FftError`]
//! - `parallel`: transform lanes on a Rayon pool, see [`parallel`]
//! - `verbose-logging`: emit `log` records for argument resolution and plan
//!   selection
//! - `internal-tests`: expose hidden hooks used by integration tests

#![no_std]
extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

/// Scalar and complex element types.
pub mod num;

/// Error taxonomy shared by every operation.
pub mod error;

/// Normalization modes and transform direction.
pub mod norm;

/// Row-major N-d array used for inputs and outputs.
pub mod tensor;

/// Complex FFT plans and the per-call planner.
pub mod plan;

/// Real-to-complex and complex-to-real kernels.
pub mod real;

/// Engine interface and the default scalar engine.
pub mod engine;

/// Lane-parallel execution settings.
#[cfg(feature = "parallel")]
pub mod parallel;

/// Argument resolution and the six transform entry points.
pub mod dispatch;

/// Sample frequencies and zero-frequency shifts.
pub mod freq;

pub use dispatch::{
    fft, hfft, ifft, ihfft, irfft, rfft, Dispatcher, Domain, ResolvedArgs, TransformConfig,
    Variant, DEFAULT_DIM,
};
pub use engine::{DftEngine, ScalarEngine};
pub use error::{ErrorKind, FftError};
pub use freq::{fftfreq, fftshift, ifftshift, rfftfreq};
pub use norm::{Direction, Norm};
pub use num::{Complex, Complex32, Complex64, Float};
pub use plan::{FftPlan, FftPlanner};
pub use tensor::{DType, Storage, Tensor};

#[cfg(feature = "parallel")]
pub use parallel::{parallel_threads, parallel_threshold, set_parallel_threads, set_parallel_threshold};
