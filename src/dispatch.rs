//! The six transform entry points and their shared argument resolution.
//!
//! Every variant runs through the same routine: check the element kind,
//! resolve `dim`, resolve `n`, pad or truncate the input along `dim`,
//! parse the normalization mode, then hand the resized input to a
//! [`DftEngine`] with a fixed [`TransformConfig`]. All validation happens
//! before the engine is called, so an error never leaves partial output.
//!
//! ```
//! use dimfft::{fft, ifft, Complex64, Tensor};
//!
//! let x = Tensor::complex_vector(vec![
//!     Complex64::new(1.0, 0.0),
//!     Complex64::new(2.0, -1.0),
//!     Complex64::new(0.0, 3.0),
//! ]);
//! let spectrum = fft(&x, None, -1, None).unwrap();
//! let back = ifft(&spectrum, None, -1, None).unwrap();
//! for (a, b) in back.as_complex().unwrap().iter().zip(x.as_complex().unwrap()) {
//!     assert!((*a - *b).abs() < 1e-12);
//! }
//! ```

use alloc::borrow::Cow;
use core::fmt;

use crate::engine::{DftEngine, ScalarEngine};
use crate::error::FftError;
use crate::norm::{Direction, Norm};
use crate::num::Float;
use crate::real::onesided_len;
use crate::tensor::{DType, Tensor};

/// Axis used when the caller does not name one: the last.
pub const DEFAULT_DIM: i64 = -1;

/// Which primitive transform an engine runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Domain {
    /// Complex in, complex out, full length.
    C2C,
    /// Real in, onesided complex out.
    R2C,
    /// Onesided Hermitian complex in, real out.
    C2R,
}

/// Engine configuration a variant is bound to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TransformConfig {
    pub direction: Direction,
    pub domain: Domain,
    /// Whether one side of the transform is the `n/2 + 1` half spectrum.
    pub onesided: bool,
}

/// The six user-visible transform variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Variant {
    Fft,
    Ifft,
    Rfft,
    Irfft,
    Hfft,
    Ihfft,
}

impl Variant {
    pub const ALL: [Variant; 6] = [
        Variant::Fft,
        Variant::Ifft,
        Variant::Rfft,
        Variant::Irfft,
        Variant::Hfft,
        Variant::Ihfft,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Variant::Fft => "fft",
            Variant::Ifft => "ifft",
            Variant::Rfft => "rfft",
            Variant::Irfft => "irfft",
            Variant::Hfft => "hfft",
            Variant::Ihfft => "ihfft",
        }
    }

    pub fn config(self) -> TransformConfig {
        let (direction, domain) = match self {
            Variant::Fft => (Direction::Forward, Domain::C2C),
            Variant::Ifft => (Direction::Inverse, Domain::C2C),
            Variant::Rfft => (Direction::Forward, Domain::R2C),
            Variant::Irfft => (Direction::Inverse, Domain::C2R),
            Variant::Hfft => (Direction::Forward, Domain::C2R),
            Variant::Ihfft => (Direction::Inverse, Domain::R2C),
        };
        TransformConfig {
            direction,
            domain,
            onesided: domain != Domain::C2C,
        }
    }

    /// Element kind handed to the engine. Complex-domain variants promote
    /// real input, so only the real-domain ones constrain what callers pass.
    pub fn input_dtype(self) -> DType {
        match self.config().domain {
            Domain::R2C => DType::Real,
            Domain::C2C | Domain::C2R => DType::Complex,
        }
    }

    pub fn output_dtype(self) -> DType {
        match self.config().domain {
            Domain::C2R => DType::Real,
            Domain::C2C | Domain::R2C => DType::Complex,
        }
    }

    /// Extent along `dim` the engine expects for a logical length `n`.
    pub fn input_len(self, n: usize) -> usize {
        match self.config().domain {
            Domain::C2R => onesided_len(n),
            Domain::C2C | Domain::R2C => n,
        }
    }

    /// Extent along `dim` of the result for a logical length `n`.
    pub fn output_len(self, n: usize) -> usize {
        match self.config().domain {
            Domain::R2C => onesided_len(n),
            Domain::C2C | Domain::C2R => n,
        }
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Fully validated arguments of one call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolvedArgs {
    /// Logical signal length.
    pub n: usize,
    /// Non-negative axis index.
    pub dim: usize,
    pub norm: Norm,
    /// Extent along `dim` after padding or truncation.
    pub input_len: usize,
    /// Extent along `dim` of the output.
    pub output_len: usize,
}

fn resolve_n(variant: Variant, extent: usize, n: Option<i64>) -> Result<usize, FftError> {
    if let Some(n) = n {
        if n <= 0 {
            return Err(FftError::NonPositiveLength { n });
        }
        return usize::try_from(n).map_err(|_| FftError::Overflow);
    }
    let n = match variant.config().domain {
        Domain::C2R => extent
            .checked_sub(1)
            .map(|m| m.checked_mul(2).ok_or(FftError::Overflow))
            .transpose()?
            .unwrap_or(0),
        Domain::C2C | Domain::R2C => extent,
    };
    if n == 0 {
        let reason = match variant.config().domain {
            Domain::C2R => "a onesided input needs at least 2 elements along dim to infer n",
            Domain::C2C | Domain::R2C => "the input has no elements along dim",
        };
        return Err(FftError::InvalidLength { n, reason });
    }
    Ok(n)
}

/// Runs the six variants against an engine.
#[derive(Debug, Clone, Copy, Default)]
pub struct Dispatcher<E> {
    engine: E,
}

impl<E> Dispatcher<E> {
    pub fn new(engine: E) -> Self {
        Self { engine }
    }

    pub fn engine(&self) -> &E {
        &self.engine
    }

    /// Validate and normalize the arguments of `variant` without running it.
    pub fn resolve<T: Float>(
        &self,
        variant: Variant,
        input: &Tensor<T>,
        n: Option<i64>,
        dim: i64,
        norm: Option<&str>,
    ) -> Result<ResolvedArgs, FftError> {
        if variant.input_dtype() == DType::Real && input.is_complex() {
            return Err(FftError::DTypeMismatch {
                op: variant.name(),
                expected: DType::Real,
                found: DType::Complex,
            });
        }
        let dim = input.resolve_dim(dim)?;
        let n = resolve_n(variant, input.shape()[dim], n)?;
        let input_len = variant.input_len(n);
        let output_len = variant.output_len(n);
        input.check_extent(dim, input_len)?;
        input.check_extent(dim, output_len)?;
        let norm = Norm::resolve(norm)?;
        Ok(ResolvedArgs {
            n,
            dim,
            norm,
            input_len,
            output_len,
        })
    }

    /// Resolve the arguments of `variant`, resize the input and run it.
    pub fn transform<T: Float>(
        &self,
        variant: Variant,
        input: &Tensor<T>,
        n: Option<i64>,
        dim: i64,
        norm: Option<&str>,
    ) -> Result<Tensor<T>, FftError>
    where
        E: DftEngine<T>,
    {
        let args = self.resolve(variant, input, n, dim, norm)?;
        let config = variant.config();
        #[cfg(feature = "verbose-logging")]
        log::debug!(
            "{variant}: n={} dim={} norm={} input_len={} (extent {})",
            args.n,
            args.dim,
            args.norm,
            args.input_len,
            input.shape()[args.dim]
        );

        let mut x = Cow::Borrowed(input);
        if variant.input_dtype() == DType::Complex && !x.is_complex() {
            x = Cow::Owned(x.to_complex());
        }
        if x.shape()[args.dim] != args.input_len {
            x = Cow::Owned(x.resized_along(args.dim, args.input_len)?);
        }

        match config.domain {
            Domain::C2C => self
                .engine
                .c2c(&x, args.n, args.dim, config.direction, args.norm),
            Domain::R2C => self
                .engine
                .r2c(&x, args.n, args.dim, config.direction, args.norm),
            Domain::C2R => self
                .engine
                .c2r(&x, args.n, args.dim, config.direction, args.norm),
        }
    }

    /// Complex-to-complex forward transform.
    pub fn fft<T: Float>(
        &self,
        input: &Tensor<T>,
        n: Option<i64>,
        dim: i64,
        norm: Option<&str>,
    ) -> Result<Tensor<T>, FftError>
    where
        E: DftEngine<T>,
    {
        self.transform(Variant::Fft, input, n, dim, norm)
    }

    /// Complex-to-complex inverse transform.
    pub fn ifft<T: Float>(
        &self,
        input: &Tensor<T>,
        n: Option<i64>,
        dim: i64,
        norm: Option<&str>,
    ) -> Result<Tensor<T>, FftError>
    where
        E: DftEngine<T>,
    {
        self.transform(Variant::Ifft, input, n, dim, norm)
    }

    /// Forward transform of a real signal, returning the onesided spectrum.
    pub fn rfft<T: Float>(
        &self,
        input: &Tensor<T>,
        n: Option<i64>,
        dim: i64,
        norm: Option<&str>,
    ) -> Result<Tensor<T>, FftError>
    where
        E: DftEngine<T>,
    {
        self.transform(Variant::Rfft, input, n, dim, norm)
    }

    /// Inverse of [`Dispatcher::rfft`]: onesided spectrum to real signal.
    pub fn irfft<T: Float>(
        &self,
        input: &Tensor<T>,
        n: Option<i64>,
        dim: i64,
        norm: Option<&str>,
    ) -> Result<Tensor<T>, FftError>
    where
        E: DftEngine<T>,
    {
        self.transform(Variant::Irfft, input, n, dim, norm)
    }

    /// Forward transform of a Hermitian signal given by its onesided half.
    pub fn hfft<T: Float>(
        &self,
        input: &Tensor<T>,
        n: Option<i64>,
        dim: i64,
        norm: Option<&str>,
    ) -> Result<Tensor<T>, FftError>
    where
        E: DftEngine<T>,
    {
        self.transform(Variant::Hfft, input, n, dim, norm)
    }

    /// Inverse of [`Dispatcher::hfft`]: real signal to onesided half.
    pub fn ihfft<T: Float>(
        &self,
        input: &Tensor<T>,
        n: Option<i64>,
        dim: i64,
        norm: Option<&str>,
    ) -> Result<Tensor<T>, FftError>
    where
        E: DftEngine<T>,
    {
        self.transform(Variant::Ihfft, input, n, dim, norm)
    }
}

/// One-dimensional complex FFT along `dim` using [`ScalarEngine`].
///
/// `n` pads or truncates the input along `dim`; `norm` is one of
/// `"forward"`, `"backward"` (default) or `"ortho"`.
pub fn fft<T: Float>(
    input: &Tensor<T>,
    n: Option<i64>,
    dim: i64,
    norm: Option<&str>,
) -> Result<Tensor<T>, FftError> {
    Dispatcher::new(ScalarEngine).fft(input, n, dim, norm)
}

/// One-dimensional inverse complex FFT along `dim`.
pub fn ifft<T: Float>(
    input: &Tensor<T>,
    n: Option<i64>,
    dim: i64,
    norm: Option<&str>,
) -> Result<Tensor<T>, FftError> {
    Dispatcher::new(ScalarEngine).ifft(input, n, dim, norm)
}

/// Real-input FFT along `dim`; the output holds `n/2 + 1` bins.
pub fn rfft<T: Float>(
    input: &Tensor<T>,
    n: Option<i64>,
    dim: i64,
    norm: Option<&str>,
) -> Result<Tensor<T>, FftError> {
    Dispatcher::new(ScalarEngine).rfft(input, n, dim, norm)
}

/// Inverse of [`rfft`]. Without `n` the output length is `2 * (m - 1)` for
/// an input extent `m`, so odd-length signals need an explicit `n`.
pub fn irfft<T: Float>(
    input: &Tensor<T>,
    n: Option<i64>,
    dim: i64,
    norm: Option<&str>,
) -> Result<Tensor<T>, FftError> {
    Dispatcher::new(ScalarEngine).irfft(input, n, dim, norm)
}

/// FFT of a signal with Hermitian symmetry, given as its onesided half.
/// The output is real with length `n` (default `2 * (m - 1)`).
pub fn hfft<T: Float>(
    input: &Tensor<T>,
    n: Option<i64>,
    dim: i64,
    norm: Option<&str>,
) -> Result<Tensor<T>, FftError> {
    Dispatcher::new(ScalarEngine).hfft(input, n, dim, norm)
}

/// Inverse of [`hfft`]: onesided inverse FFT of a real signal.
pub fn ihfft<T: Float>(
    input: &Tensor<T>,
    n: Option<i64>,
    dim: i64,
    norm: Option<&str>,
) -> Result<Tensor<T>, FftError> {
    Dispatcher::new(ScalarEngine).ihfft(input, n, dim, norm)
}
