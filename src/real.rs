//! Real-to-complex and complex-to-real kernels built on complex plans.
//!
//! Even lengths pack the real signal into a half-length complex buffer,
//! run one complex FFT of length `n/2` and untangle the result with a
//! twiddle post-processing pass. Odd lengths promote the lane to complex
//! and run a full-length plan. Both paths are unscaled.

use alloc::sync::Arc;
use alloc::vec::Vec;

use crate::error::FftError;
use crate::norm::Direction;
use crate::num::{Complex, Float};
use crate::plan::{FftPlan, FftPlanner};

/// Number of real samples that make up a complex pair.
pub const STRIDE: usize = 2;

/// Length of the onesided spectrum of a length-`n` real signal.
#[inline]
pub const fn onesided_len(n: usize) -> usize {
    n / 2 + 1
}

enum RealKind<T: Float> {
    Packed {
        half: Arc<FftPlan<T>>,
        /// `exp(-πi k / m)` for `k = 0..m`, with `m = n / 2`.
        twiddles: Arc<[Complex<T>]>,
    },
    Promoted {
        full: Arc<FftPlan<T>>,
    },
}

/// Unscaled real transform of a fixed length.
pub struct RealPlan<T: Float> {
    len: usize,
    kind: RealKind<T>,
}

impl<T: Float> RealPlan<T> {
    pub fn new(planner: &mut FftPlanner<T>, n: usize) -> Result<Self, FftError> {
        if n == 0 {
            return Err(FftError::EmptyInput);
        }
        let kind = if n % STRIDE == 0 {
            let m = n / STRIDE;
            let twiddles: Vec<Complex<T>> = (0..m)
                .map(|k| {
                    let angle = -core::f64::consts::PI * k as f64 / m as f64;
                    Complex::expi(T::from_f64(angle))
                })
                .collect();
            RealKind::Packed {
                half: planner.plan(m)?,
                twiddles: Arc::from(twiddles),
            }
        } else {
            RealKind::Promoted {
                full: planner.plan(n)?,
            }
        };
        Ok(Self { len: n, kind })
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn is_packed(&self) -> bool {
        matches!(self.kind, RealKind::Packed { .. })
    }

    /// Length of the scratch buffer [`RealPlan::r2c`] and [`RealPlan::c2r`] need.
    pub fn scratch_len(&self) -> usize {
        match &self.kind {
            RealKind::Packed { half, .. } => half.len() + half.scratch_len(),
            RealKind::Promoted { full } => full.len() + full.scratch_len(),
        }
    }

    fn check(&self, input: usize, output: usize, scratch: usize, real_in: bool) -> Result<(), FftError> {
        let (want_in, want_out) = if real_in {
            (self.len, onesided_len(self.len))
        } else {
            (onesided_len(self.len), self.len)
        };
        if input != want_in {
            return Err(FftError::EngineLengthMismatch {
                expected: want_in,
                actual: input,
            });
        }
        if output != want_out {
            return Err(FftError::EngineLengthMismatch {
                expected: want_out,
                actual: output,
            });
        }
        if scratch < self.scratch_len() {
            return Err(FftError::EngineLengthMismatch {
                expected: self.scratch_len(),
                actual: scratch,
            });
        }
        Ok(())
    }

    /// Forward DFT of a real lane, keeping the `n/2 + 1` non-redundant bins.
    pub fn r2c(
        &self,
        input: &[T],
        output: &mut [Complex<T>],
        scratch: &mut [Complex<T>],
    ) -> Result<(), FftError> {
        self.check(input.len(), output.len(), scratch.len(), true)?;
        match &self.kind {
            RealKind::Packed { half, twiddles } => {
                let m = half.len();
                let (work, rest) = scratch.split_at_mut(m);
                for (i, slot) in work.iter_mut().enumerate() {
                    *slot = Complex::new(input[STRIDE * i], input[STRIDE * i + 1]);
                }
                half.process(work, rest, Direction::Forward)?;
                let y0 = work[0];
                output[0] = Complex::from_real(y0.re + y0.im);
                output[m] = Complex::from_real(y0.re - y0.im);
                let half_t = T::from_f64(0.5);
                for k in 1..m {
                    let a = work[k];
                    let b = work[m - k].conj();
                    let t = twiddles[k] * (a - b);
                    output[k] = ((a + b) + t.mul_neg_i()).scale(half_t);
                }
            }
            RealKind::Promoted { full } => {
                let n = self.len;
                let (work, rest) = scratch.split_at_mut(n);
                for (slot, &x) in work.iter_mut().zip(input.iter()) {
                    *slot = Complex::from_real(x);
                }
                full.process(work, rest, Direction::Forward)?;
                output.copy_from_slice(&work[..output.len()]);
            }
        }
        Ok(())
    }

    /// Inverse DFT of a onesided Hermitian lane, producing `n` real samples.
    ///
    /// The imaginary parts of the DC bin and, for even `n`, the Nyquist bin
    /// do not contribute to a real signal and are ignored.
    pub fn c2r(
        &self,
        input: &[Complex<T>],
        output: &mut [T],
        scratch: &mut [Complex<T>],
    ) -> Result<(), FftError> {
        self.check(input.len(), output.len(), scratch.len(), false)?;
        match &self.kind {
            RealKind::Packed { half, twiddles } => {
                let m = half.len();
                let (work, rest) = scratch.split_at_mut(m);
                work[0] = Complex::new(input[0].re + input[m].re, input[0].re - input[m].re);
                for k in 1..m {
                    let a = input[k];
                    let b = input[m - k].conj();
                    let t = twiddles[k].conj() * (a - b);
                    work[k] = (a + b) - t.mul_neg_i();
                }
                half.process(work, rest, Direction::Inverse)?;
                for (i, c) in work.iter().enumerate() {
                    output[STRIDE * i] = c.re;
                    output[STRIDE * i + 1] = c.im;
                }
            }
            RealKind::Promoted { full } => {
                let n = self.len;
                let (work, rest) = scratch.split_at_mut(n);
                // odd n: no Nyquist bin, every other bin has a mirror
                work[0] = Complex::from_real(input[0].re);
                for k in 1..input.len() {
                    work[k] = input[k];
                    work[n - k] = input[k].conj();
                }
                full.process(work, rest, Direction::Inverse)?;
                for (out, c) in output.iter_mut().zip(work.iter()) {
                    *out = c.re;
                }
            }
        }
        Ok(())
    }
}
