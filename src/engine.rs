//! DFT engines: the interface the dispatcher consumes and the default
//! scalar implementation.
//!
//! An engine receives a tensor whose extent along `dim` already equals the
//! required input length, the logical transform length `n`, the axis, a
//! [`Direction`] and a [`Norm`]. It returns a newly allocated tensor; the
//! input is never modified.

use alloc::vec;
use alloc::vec::Vec;

use crate::error::FftError;
use crate::norm::{Direction, Norm};
use crate::num::{Complex, Float};
use crate::plan::FftPlanner;
use crate::real::{onesided_len, RealPlan};
use crate::tensor::{DType, LaneGeometry, Storage, Tensor};

/// Computation backend for one-dimensional DFTs along an axis.
///
/// Implementations must be shareable across threads; concurrent calls with
/// distinct arguments may not interfere.
pub trait DftEngine<T: Float>: Sync {
    /// Complex-to-complex transform. Input and output extent along `dim`
    /// are both `n`.
    fn c2c(
        &self,
        input: &Tensor<T>,
        n: usize,
        dim: usize,
        direction: Direction,
        norm: Norm,
    ) -> Result<Tensor<T>, FftError>;

    /// Real-to-complex transform. Input extent is `n`, output extent is
    /// `n/2 + 1` (onesided).
    fn r2c(
        &self,
        input: &Tensor<T>,
        n: usize,
        dim: usize,
        direction: Direction,
        norm: Norm,
    ) -> Result<Tensor<T>, FftError>;

    /// Complex-to-real transform of a onesided Hermitian input. Input
    /// extent is `n/2 + 1`, output extent is `n`.
    fn c2r(
        &self,
        input: &Tensor<T>,
        n: usize,
        dim: usize,
        direction: Direction,
        norm: Norm,
    ) -> Result<Tensor<T>, FftError>;
}

/// Default engine: Stockham/Bluestein complex plans and packed real plans,
/// applied lane by lane.
///
/// The engine holds no state; plans are built once per call and shared by
/// every lane of that call.
#[derive(Debug, Clone, Copy, Default)]
pub struct ScalarEngine;

impl ScalarEngine {
    pub fn new() -> Self {
        Self
    }
}

fn check_input<T: Float>(
    op: &'static str,
    input: &Tensor<T>,
    dim: usize,
    expected: DType,
    len: usize,
) -> Result<LaneGeometry, FftError> {
    if input.dtype() != expected {
        return Err(FftError::DTypeMismatch {
            op,
            expected,
            found: input.dtype(),
        });
    }
    if dim >= input.ndim() {
        return Err(FftError::DimOutOfRange {
            dim: dim as i64,
            rank: input.ndim(),
        });
    }
    let geom = input.lanes(dim);
    if geom.len != len {
        return Err(FftError::EngineLengthMismatch {
            expected: len,
            actual: geom.len,
        });
    }
    Ok(geom)
}

fn output_shape<T: Float>(input: &Tensor<T>, dim: usize, len: usize) -> Vec<usize> {
    let mut shape = input.shape().to_vec();
    shape[dim] = len;
    shape
}

/// Per-worker buffers reused across lanes.
struct Workspace<I, O, T: Float> {
    lane_in: Vec<I>,
    lane_out: Vec<O>,
    scratch: Vec<Complex<T>>,
}

impl<I: Copy, O: Copy, T: Float> Workspace<I, O, T> {
    fn new(in_len: usize, out_len: usize, scratch_len: usize, zero_in: I, zero_out: O) -> Self {
        Self {
            lane_in: vec![zero_in; in_len],
            lane_out: vec![zero_out; out_len],
            scratch: vec![Complex::zero(); scratch_len],
        }
    }
}

/// Gather every lane of `data`, run `kernel` on it and scatter the result
/// into a freshly allocated output buffer.
fn map_lanes<T, I, O, F>(
    data: &[I],
    geom: LaneGeometry,
    out_len: usize,
    scratch_len: usize,
    zero_in: I,
    zero_out: O,
    kernel: F,
) -> Result<Vec<O>, FftError>
where
    T: Float,
    I: Copy + Send + Sync,
    O: Copy + Send + Sync,
    F: Fn(&mut [I], &mut [O], &mut [Complex<T>]) -> Result<(), FftError> + Sync,
{
    let out_geom = geom.with_len(out_len);
    let total = geom.lanes().checked_mul(out_len).ok_or(FftError::Overflow)?;
    let mut out = vec![zero_out; total];
    if out.is_empty() {
        return Ok(out);
    }

    #[cfg(feature = "parallel")]
    {
        let work = geom.lanes().saturating_mul(geom.len.max(out_len));
        if crate::parallel::should_parallelize(geom.lanes(), work) {
            use rayon::prelude::*;
            #[cfg(feature = "verbose-logging")]
            log::trace!("transforming {} lanes in parallel", geom.lanes());
            let lanes: Vec<Vec<O>> = crate::parallel::install(|| {
                (0..geom.lanes())
                    .into_par_iter()
                    .map_init(
                        || Workspace::<I, O, T>::new(geom.len, out_len, scratch_len, zero_in, zero_out),
                        |ws, lane| {
                            geom.gather(data, lane, &mut ws.lane_in);
                            kernel(&mut ws.lane_in, &mut ws.lane_out, &mut ws.scratch)?;
                            Ok(ws.lane_out.clone())
                        },
                    )
                    .collect::<Result<Vec<_>, FftError>>()
            })?;
            for (lane, values) in lanes.iter().enumerate() {
                out_geom.scatter(&mut out, lane, values);
            }
            return Ok(out);
        }
    }

    let mut ws = Workspace::<I, O, T>::new(geom.len, out_len, scratch_len, zero_in, zero_out);
    for lane in 0..geom.lanes() {
        geom.gather(data, lane, &mut ws.lane_in);
        kernel(&mut ws.lane_in, &mut ws.lane_out, &mut ws.scratch)?;
        out_geom.scatter(&mut out, lane, &ws.lane_out);
    }
    Ok(out)
}

fn scale_complex<T: Float>(lane: &mut [Complex<T>], scale: Option<T>) {
    if let Some(s) = scale {
        for c in lane.iter_mut() {
            *c = c.scale(s);
        }
    }
}

impl<T: Float> DftEngine<T> for ScalarEngine {
    fn c2c(
        &self,
        input: &Tensor<T>,
        n: usize,
        dim: usize,
        direction: Direction,
        norm: Norm,
    ) -> Result<Tensor<T>, FftError> {
        let geom = check_input("c2c", input, dim, DType::Complex, n)?;
        let data = input.as_complex().unwrap_or(&[]);
        let plan = FftPlanner::new().plan(n)?;
        #[cfg(feature = "verbose-logging")]
        log::debug!("c2c {direction} n={n} dim={dim} via {}", plan.algorithm());
        let scale = norm.scale::<T>(n, direction);
        let out = map_lanes::<T, _, _, _>(
            data,
            geom,
            n,
            plan.scratch_len(),
            Complex::zero(),
            Complex::zero(),
            |lane_in, lane_out, scratch| {
                lane_out.copy_from_slice(lane_in);
                plan.process(lane_out, scratch, direction)?;
                scale_complex(lane_out, scale);
                Ok(())
            },
        )?;
        Ok(Tensor::from_parts(
            output_shape(input, dim, n),
            Storage::Complex(out),
        ))
    }

    fn r2c(
        &self,
        input: &Tensor<T>,
        n: usize,
        dim: usize,
        direction: Direction,
        norm: Norm,
    ) -> Result<Tensor<T>, FftError> {
        let geom = check_input("r2c", input, dim, DType::Real, n)?;
        let data = input.as_real().unwrap_or(&[]);
        let plan = RealPlan::new(&mut FftPlanner::new(), n)?;
        #[cfg(feature = "verbose-logging")]
        log::debug!(
            "r2c {direction} n={n} dim={dim} packed={}",
            plan.is_packed()
        );
        let out_len = onesided_len(n);
        let scale = norm.scale::<T>(n, direction);
        let out = map_lanes::<T, _, _, _>(
            data,
            geom,
            out_len,
            plan.scratch_len(),
            T::zero(),
            Complex::zero(),
            |lane_in, lane_out, scratch| {
                plan.r2c(lane_in, lane_out, scratch)?;
                // a real signal's inverse spectrum is the conjugate of its forward one
                if direction == Direction::Inverse {
                    for c in lane_out.iter_mut() {
                        *c = c.conj();
                    }
                }
                scale_complex(lane_out, scale);
                Ok(())
            },
        )?;
        Ok(Tensor::from_parts(
            output_shape(input, dim, out_len),
            Storage::Complex(out),
        ))
    }

    fn c2r(
        &self,
        input: &Tensor<T>,
        n: usize,
        dim: usize,
        direction: Direction,
        norm: Norm,
    ) -> Result<Tensor<T>, FftError> {
        let geom = check_input("c2r", input, dim, DType::Complex, onesided_len(n))?;
        let data = input.as_complex().unwrap_or(&[]);
        let plan = RealPlan::new(&mut FftPlanner::new(), n)?;
        #[cfg(feature = "verbose-logging")]
        log::debug!(
            "c2r {direction} n={n} dim={dim} packed={}",
            plan.is_packed()
        );
        let scale = norm.scale::<T>(n, direction);
        let out = map_lanes::<T, _, _, _>(
            data,
            geom,
            n,
            plan.scratch_len(),
            Complex::zero(),
            T::zero(),
            |lane_in, lane_out, scratch| {
                // the forward transform of a Hermitian lane is real, so it
                // equals the inverse transform of the conjugated lane
                if direction == Direction::Forward {
                    for c in lane_in.iter_mut() {
                        *c = c.conj();
                    }
                }
                plan.c2r(lane_in, lane_out, scratch)?;
                if let Some(s) = scale {
                    for x in lane_out.iter_mut() {
                        *x = *x * s;
                    }
                }
                Ok(())
            },
        )?;
        Ok(Tensor::from_parts(
            output_shape(input, dim, n),
            Storage::Real(out),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::num::Complex64;

    #[test]
    fn c2c_transforms_every_lane_along_dim0() {
        // two columns: an impulse and a constant
        let data = vec![
            Complex64::new(1.0, 0.0),
            Complex64::new(1.0, 0.0),
            Complex64::zero(),
            Complex64::new(1.0, 0.0),
            Complex64::zero(),
            Complex64::new(1.0, 0.0),
        ];
        let t = Tensor::from_complex(&[3, 2], data).unwrap();
        let out = ScalarEngine
            .c2c(&t, 3, 0, Direction::Forward, Norm::Backward)
            .unwrap();
        assert_eq!(out.shape(), &[3, 2]);
        let v = out.as_complex().unwrap();
        for row in 0..3 {
            assert!((v[row * 2] - Complex64::new(1.0, 0.0)).abs() < 1e-12);
        }
        assert!((v[1] - Complex64::new(3.0, 0.0)).abs() < 1e-12);
        assert!(v[3].abs() < 1e-12);
        assert!(v[5].abs() < 1e-12);
    }

    #[test]
    fn rejects_wrong_dtype() {
        let t = Tensor::<f32>::real_vector(vec![1.0, 2.0]);
        let err = ScalarEngine
            .c2c(&t, 2, 0, Direction::Forward, Norm::Backward)
            .unwrap_err();
        assert!(matches!(err, FftError::DTypeMismatch { op: "c2c", .. }));
    }

    #[test]
    fn rejects_unresized_input() {
        let t = Tensor::<f64>::complex_vector(vec![Complex::zero(); 4]);
        let err = ScalarEngine
            .c2r(&t, 4, 0, Direction::Inverse, Norm::Backward)
            .unwrap_err();
        assert_eq!(
            err,
            FftError::EngineLengthMismatch {
                expected: 3,
                actual: 4
            }
        );
    }

    #[test]
    fn empty_batch_yields_empty_output() {
        let t = Tensor::<f64>::zeros_real(&[0, 4]).unwrap();
        let out = ScalarEngine
            .r2c(&t, 4, 1, Direction::Forward, Norm::Backward)
            .unwrap();
        assert_eq!(out.shape(), &[0, 3]);
        assert_eq!(out.numel(), 0);
    }

    #[test]
    fn inverse_r2c_is_conjugate_of_forward_scaled() {
        let t = Tensor::real_vector(vec![1.0f64, 2.0, -1.0, 0.5, 3.0]);
        let fwd = ScalarEngine
            .r2c(&t, 5, 0, Direction::Forward, Norm::Backward)
            .unwrap();
        let inv = ScalarEngine
            .r2c(&t, 5, 0, Direction::Inverse, Norm::Backward)
            .unwrap();
        for (f, i) in fwd
            .as_complex()
            .unwrap()
            .iter()
            .zip(inv.as_complex().unwrap())
        {
            assert!((f.conj().scale(0.2) - *i).abs() < 1e-12);
        }
    }
}
