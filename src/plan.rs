//! Complex FFT plans used by the default engine.
//!
//! A [`FftPlan`] owns everything needed to transform lanes of one length:
//! power-of-two lengths run a Stockham auto-sort radix-2 pass sequence over
//! a cached twiddle table, every other length goes through Bluestein's
//! chirp-z algorithm on top of a power-of-two plan. Plans are unscaled in
//! both directions; callers apply normalization.

use alloc::sync::Arc;
use alloc::vec;
use alloc::vec::Vec;

use hashbrown::HashMap;

use crate::error::FftError;
use crate::norm::Direction;
use crate::num::{Complex, Float};

/// `exp(-2πi k / n)` computed in `f64` before narrowing to `T`.
fn unit_root<T: Float>(k: usize, n: usize) -> Complex<T> {
    let angle = -2.0 * core::f64::consts::PI * (k as f64) / (n as f64);
    Complex::expi(T::from_f64(angle))
}

enum PlanKind<T: Float> {
    /// Length one: the transform is the identity.
    Identity,
    /// Twiddle table of `n/2` entries holding `exp(-2πi k / n)`.
    Stockham { twiddles: Arc<[Complex<T>]> },
    Bluestein {
        /// `exp(-πi k² / n)` for `k = 0..n`.
        chirp: Arc<[Complex<T>]>,
        /// Forward FFT of the conjugate chirp, pre-scaled by `1/m`.
        kernel: Arc<[Complex<T>]>,
        inner: Arc<FftPlan<T>>,
    },
}

/// Unscaled complex DFT of a fixed length.
pub struct FftPlan<T: Float> {
    len: usize,
    kind: PlanKind<T>,
}

impl<T: Float> FftPlan<T> {
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Name of the algorithm backing this plan.
    pub fn algorithm(&self) -> &'static str {
        match self.kind {
            PlanKind::Identity => "identity",
            PlanKind::Stockham { .. } => "stockham",
            PlanKind::Bluestein { .. } => "bluestein",
        }
    }

    /// Length of the scratch buffer [`FftPlan::process`] needs.
    pub fn scratch_len(&self) -> usize {
        match &self.kind {
            PlanKind::Identity => 0,
            PlanKind::Stockham { .. } => self.len,
            PlanKind::Bluestein { inner, .. } => inner.len() + inner.scratch_len(),
        }
    }

    /// Transform `buf` in place.
    ///
    /// `scratch` must hold at least [`FftPlan::scratch_len`] elements; its
    /// contents on entry are ignored.
    pub fn process(
        &self,
        buf: &mut [Complex<T>],
        scratch: &mut [Complex<T>],
        direction: Direction,
    ) -> Result<(), FftError> {
        if buf.len() != self.len {
            return Err(FftError::EngineLengthMismatch {
                expected: self.len,
                actual: buf.len(),
            });
        }
        if scratch.len() < self.scratch_len() {
            return Err(FftError::EngineLengthMismatch {
                expected: self.scratch_len(),
                actual: scratch.len(),
            });
        }
        match direction {
            Direction::Forward => self.forward(buf, scratch),
            Direction::Inverse => {
                // conj(FFT(conj(x))) is the unscaled inverse transform
                conj_in_place(buf);
                self.forward(buf, scratch);
                conj_in_place(buf);
            }
        }
        Ok(())
    }

    fn forward(&self, buf: &mut [Complex<T>], scratch: &mut [Complex<T>]) {
        match &self.kind {
            PlanKind::Identity => {}
            PlanKind::Stockham { twiddles } => stockham(buf, &mut scratch[..self.len], twiddles),
            PlanKind::Bluestein {
                chirp,
                kernel,
                inner,
            } => {
                let m = inner.len();
                let (work, inner_scratch) = scratch.split_at_mut(m);
                for (slot, (&x, &c)) in work.iter_mut().zip(buf.iter().zip(chirp.iter())) {
                    *slot = x * c;
                }
                for slot in work[self.len..].iter_mut() {
                    *slot = Complex::zero();
                }
                inner.forward(work, inner_scratch);
                for (w, &k) in work.iter_mut().zip(kernel.iter()) {
                    *w = *w * k;
                }
                conj_in_place(work);
                inner.forward(work, inner_scratch);
                for (out, (&w, &c)) in buf.iter_mut().zip(work.iter().zip(chirp.iter())) {
                    *out = w.conj() * c;
                }
            }
        }
    }
}

fn conj_in_place<T: Float>(buf: &mut [Complex<T>]) {
    for c in buf.iter_mut() {
        c.im = -c.im;
    }
}

// Stockham auto-sort FFT using a double-buffered approach.
fn stockham<T: Float>(buf: &mut [Complex<T>], scratch: &mut [Complex<T>], twiddles: &[Complex<T>]) {
    let n = buf.len();
    let passes = n.trailing_zeros();
    {
        let mut src: &mut [Complex<T>] = &mut *buf;
        let mut dst: &mut [Complex<T>] = &mut *scratch;

        // n1 = number of groups, n2 = size of each group in this pass.
        let mut n1 = 1usize;
        let mut n2 = n;
        while n1 < n {
            n2 >>= 1;
            for k in 0..n1 {
                // exp(-2πi * k / (2*n1)) == table[k * n2]
                let w = twiddles[k * n2];
                let base0 = 2 * k * n2;
                let base1 = base0 + n2;
                let out0 = k * n2;
                let out1 = (k + n1) * n2;
                for j in 0..n2 {
                    let u = src[base0 + j];
                    let v = src[base1 + j] * w;
                    dst[out0 + j] = u + v;
                    dst[out1 + j] = u - v;
                }
            }
            core::mem::swap(&mut src, &mut dst);
            n1 <<= 1;
        }
    }
    // An odd number of passes leaves the result in scratch.
    if passes % 2 == 1 {
        buf.copy_from_slice(scratch);
    }
}

/// Cache of plans keyed by transform length.
///
/// A planner lives for the duration of one engine call so lanes of the same
/// length, and Bluestein plans sharing an inner power-of-two length, reuse
/// twiddle tables.
pub struct FftPlanner<T: Float> {
    cache: HashMap<usize, Arc<FftPlan<T>>>,
}

impl<T: Float> Default for FftPlanner<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Float> FftPlanner<T> {
    pub fn new() -> Self {
        Self {
            cache: HashMap::new(),
        }
    }

    /// Number of cached plans.
    pub fn cache_len(&self) -> usize {
        self.cache.len()
    }

    /// Retrieve or build the plan for length `n`.
    pub fn plan(&mut self, n: usize) -> Result<Arc<FftPlan<T>>, FftError> {
        if n == 0 {
            return Err(FftError::EmptyInput);
        }
        if let Some(plan) = self.cache.get(&n) {
            return Ok(Arc::clone(plan));
        }
        let kind = if n == 1 {
            PlanKind::Identity
        } else if n.is_power_of_two() {
            let twiddles: Vec<Complex<T>> = (0..n / 2).map(|k| unit_root(k, n)).collect();
            PlanKind::Stockham {
                twiddles: Arc::from(twiddles),
            }
        } else {
            self.bluestein(n)?
        };
        #[cfg(feature = "verbose-logging")]
        log::trace!("built {} plan for length {}", kind_name(&kind), n);
        let plan = Arc::new(FftPlan { len: n, kind });
        self.cache.insert(n, Arc::clone(&plan));
        Ok(plan)
    }

    fn bluestein(&mut self, n: usize) -> Result<PlanKind<T>, FftError> {
        let m = n
            .checked_mul(2)
            .and_then(|d| (d - 1).checked_next_power_of_two())
            .ok_or(FftError::Overflow)?;
        let inner = self.plan(m)?;
        let two_n = 2 * n as u128;

        // k² is reduced mod 2n so the angle stays small and exact.
        let chirp: Vec<Complex<T>> = (0..n)
            .map(|k| {
                let r = ((k as u128 * k as u128) % two_n) as f64;
                let angle = -core::f64::consts::PI * r / n as f64;
                Complex::expi(T::from_f64(angle))
            })
            .collect();

        let mut kernel = vec![Complex::zero(); m];
        kernel[0] = chirp[0].conj();
        for k in 1..n {
            let c = chirp[k].conj();
            kernel[k] = c;
            kernel[m - k] = c;
        }
        let mut scratch = vec![Complex::zero(); inner.scratch_len()];
        inner.forward(&mut kernel, &mut scratch);
        let inv_m = T::from_f64(1.0 / m as f64);
        for c in kernel.iter_mut() {
            *c = c.scale(inv_m);
        }

        Ok(PlanKind::Bluestein {
            chirp: Arc::from(chirp),
            kernel: Arc::from(kernel),
            inner,
        })
    }
}

#[cfg(feature = "verbose-logging")]
fn kind_name<T: Float>(kind: &PlanKind<T>) -> &'static str {
    match kind {
        PlanKind::Identity => "identity",
        PlanKind::Stockham { .. } => "stockham",
        PlanKind::Bluestein { .. } => "bluestein",
    }
}
