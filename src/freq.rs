//! Sample-frequency grids and zero-frequency shifting.

use alloc::vec::Vec;

use crate::error::FftError;
use crate::num::Float;
use crate::tensor::{Storage, Tensor};

fn check_args(n: usize, spacing: f64) -> Result<f64, FftError> {
    if n == 0 {
        return Err(FftError::InvalidLength {
            n,
            reason: "a frequency grid needs at least one sample",
        });
    }
    if !(spacing.is_finite() && spacing > 0.0) {
        return Err(FftError::InvalidSpacing);
    }
    Ok(1.0 / (n as f64 * spacing))
}

/// Frequencies of the bins of a length-`n` [`fft`](crate::fft) with sample
/// spacing `spacing`: `[0, 1, .., ceil(n/2)-1, -floor(n/2), .., -1] / (spacing*n)`.
pub fn fftfreq<T: Float>(n: usize, spacing: f64) -> Result<Tensor<T>, FftError> {
    let scale = check_args(n, spacing)?;
    let split = n.div_ceil(2);
    let freqs: Vec<T> = (0..n)
        .map(|k| {
            let bin = if k < split {
                k as f64
            } else {
                -((n - k) as f64)
            };
            T::from_f64(bin * scale)
        })
        .collect();
    Ok(Tensor::real_vector(freqs))
}

/// Frequencies of the `n/2 + 1` bins of a length-`n` [`rfft`](crate::rfft).
pub fn rfftfreq<T: Float>(n: usize, spacing: f64) -> Result<Tensor<T>, FftError> {
    let scale = check_args(n, spacing)?;
    let freqs: Vec<T> = (0..=n / 2).map(|k| T::from_f64(k as f64 * scale)).collect();
    Ok(Tensor::real_vector(freqs))
}

fn rotate_lanes<E: Copy>(data: &[E], input: &Tensor<impl Float>, dim: usize, left: usize) -> Vec<E> {
    let geom = input.lanes(dim);
    let mut out = data.to_vec();
    if geom.len == 0 {
        return out;
    }
    let left = left % geom.len;
    for lane in 0..geom.lanes() {
        let base = geom.base(lane);
        for k in 0..geom.len {
            let src = (k + left) % geom.len;
            out[base + k * geom.inner] = data[base + src * geom.inner];
        }
    }
    out
}

fn rotate<T: Float>(input: &Tensor<T>, dim: i64, left: impl Fn(usize) -> usize) -> Result<Tensor<T>, FftError> {
    let dim = input.resolve_dim(dim)?;
    let shift = left(input.shape()[dim]);
    let storage = match input.storage() {
        Storage::Real(v) => Storage::Real(rotate_lanes(v, input, dim, shift)),
        Storage::Complex(v) => Storage::Complex(rotate_lanes(v, input, dim, shift)),
    };
    Ok(Tensor::from_parts(input.shape().to_vec(), storage))
}

/// Move the zero-frequency bin to the middle of `dim`.
pub fn fftshift<T: Float>(input: &Tensor<T>, dim: i64) -> Result<Tensor<T>, FftError> {
    rotate(input, dim, |len| len.div_ceil(2))
}

/// Undo [`fftshift`]; the two differ only for odd extents.
pub fn ifftshift<T: Float>(input: &Tensor<T>, dim: i64) -> Result<Tensor<T>, FftError> {
    rotate(input, dim, |len| len / 2)
}
