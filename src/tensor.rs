//! Minimal N-dimensional array used as the transform input and output.
//!
//! Data is stored contiguously in row-major order. A tensor holds either
//! real or complex elements of a single precision `T`; the element kind is
//! what the dispatcher checks against each transform variant.

use alloc::vec;
use alloc::vec::Vec;
use core::fmt;

use crate::error::FftError;
use crate::num::{Complex, Float};

/// Element kind of a tensor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DType {
    Real,
    Complex,
}

impl fmt::Display for DType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DType::Real => f.write_str("real"),
            DType::Complex => f.write_str("complex"),
        }
    }
}

/// Backing buffer of a [`Tensor`].
#[derive(Debug, Clone, PartialEq)]
pub enum Storage<T: Float> {
    Real(Vec<T>),
    Complex(Vec<Complex<T>>),
}

impl<T: Float> Storage<T> {
    fn len(&self) -> usize {
        match self {
            Storage::Real(v) => v.len(),
            Storage::Complex(v) => v.len(),
        }
    }
}

/// Row-major decomposition of a tensor around one axis.
///
/// Element `k` of lane `l` lives at
/// `(l / inner) * len * inner + k * inner + (l % inner)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LaneGeometry {
    /// Product of the extents before the axis.
    pub outer: usize,
    /// Extent of the axis itself.
    pub len: usize,
    /// Product of the extents after the axis; also the stride along it.
    pub inner: usize,
}

impl LaneGeometry {
    /// Number of 1-D lanes along the axis.
    #[inline]
    pub fn lanes(&self) -> usize {
        self.outer * self.inner
    }

    /// Flat offset of the first element of `lane`.
    #[inline]
    pub fn base(&self, lane: usize) -> usize {
        (lane / self.inner) * self.len * self.inner + lane % self.inner
    }

    /// Same decomposition with a different extent along the axis.
    #[inline]
    pub fn with_len(&self, len: usize) -> Self {
        Self { len, ..*self }
    }

    /// Copy lane `lane` of `data` into `out` (`out.len()` must be `self.len`).
    pub fn gather<E: Copy>(&self, data: &[E], lane: usize, out: &mut [E]) {
        let base = self.base(lane);
        for (k, slot) in out.iter_mut().enumerate() {
            *slot = data[base + k * self.inner];
        }
    }

    /// Write `values` into lane `lane` of `data`.
    pub fn scatter<E: Copy>(&self, data: &mut [E], lane: usize, values: &[E]) {
        let base = self.base(lane);
        for (k, &v) in values.iter().enumerate() {
            data[base + k * self.inner] = v;
        }
    }
}

/// N-dimensional array of real or complex elements.
#[derive(Debug, Clone, PartialEq)]
pub struct Tensor<T: Float> {
    shape: Vec<usize>,
    storage: Storage<T>,
}

fn shape_numel(shape: &[usize]) -> Result<usize, FftError> {
    shape
        .iter()
        .try_fold(1usize, |acc, &d| acc.checked_mul(d))
        .ok_or(FftError::Overflow)
}

/// Element count of `shape`, rejecting buffers of `E` that would exceed
/// `isize::MAX` bytes.
fn checked_numel<E>(shape: &[usize]) -> Result<usize, FftError> {
    let n = shape_numel(shape)?;
    match n.checked_mul(core::mem::size_of::<E>()) {
        Some(bytes) if bytes <= isize::MAX as usize => Ok(n),
        _ => Err(FftError::Overflow),
    }
}

impl<T: Float> Tensor<T> {
    fn from_storage(shape: Vec<usize>, storage: Storage<T>) -> Result<Self, FftError> {
        let expected = shape_numel(&shape)?;
        if expected != storage.len() {
            return Err(FftError::ShapeMismatch {
                expected,
                actual: storage.len(),
            });
        }
        Ok(Self { shape, storage })
    }

    /// Real tensor from row-major `data`.
    pub fn from_real(shape: &[usize], data: Vec<T>) -> Result<Self, FftError> {
        Self::from_storage(shape.to_vec(), Storage::Real(data))
    }

    /// Complex tensor from row-major `data`.
    pub fn from_complex(shape: &[usize], data: Vec<Complex<T>>) -> Result<Self, FftError> {
        Self::from_storage(shape.to_vec(), Storage::Complex(data))
    }

    /// 1-D real tensor.
    pub fn real_vector(data: Vec<T>) -> Self {
        Self {
            shape: vec![data.len()],
            storage: Storage::Real(data),
        }
    }

    /// 1-D complex tensor.
    pub fn complex_vector(data: Vec<Complex<T>>) -> Self {
        Self {
            shape: vec![data.len()],
            storage: Storage::Complex(data),
        }
    }

    pub fn zeros_real(shape: &[usize]) -> Result<Self, FftError> {
        let n = checked_numel::<T>(shape)?;
        Ok(Self {
            shape: shape.to_vec(),
            storage: Storage::Real(vec![T::zero(); n]),
        })
    }

    pub fn zeros_complex(shape: &[usize]) -> Result<Self, FftError> {
        let n = checked_numel::<Complex<T>>(shape)?;
        Ok(Self {
            shape: shape.to_vec(),
            storage: Storage::Complex(vec![Complex::zero(); n]),
        })
    }

    #[inline]
    pub fn shape(&self) -> &[usize] {
        &self.shape
    }

    #[inline]
    pub fn ndim(&self) -> usize {
        self.shape.len()
    }

    #[inline]
    pub fn numel(&self) -> usize {
        self.storage.len()
    }

    #[inline]
    pub fn dtype(&self) -> DType {
        match self.storage {
            Storage::Real(_) => DType::Real,
            Storage::Complex(_) => DType::Complex,
        }
    }

    #[inline]
    pub fn is_complex(&self) -> bool {
        self.dtype() == DType::Complex
    }

    pub fn storage(&self) -> &Storage<T> {
        &self.storage
    }

    pub fn as_real(&self) -> Option<&[T]> {
        match &self.storage {
            Storage::Real(v) => Some(v),
            Storage::Complex(_) => None,
        }
    }

    pub fn as_complex(&self) -> Option<&[Complex<T>]> {
        match &self.storage {
            Storage::Complex(v) => Some(v),
            Storage::Real(_) => None,
        }
    }

    /// Map a possibly negative `dim` onto an axis index.
    ///
    /// Negative values count from the last axis, so `-1` is the last axis.
    pub fn resolve_dim(&self, dim: i64) -> Result<usize, FftError> {
        let rank = self.ndim();
        let err = FftError::DimOutOfRange { dim, rank };
        let rank_i = i64::try_from(rank).map_err(|_| FftError::Overflow)?;
        let wrapped = if dim < 0 { dim + rank_i } else { dim };
        if (0..rank_i).contains(&wrapped) {
            Ok(wrapped as usize)
        } else {
            Err(err)
        }
    }

    /// Extent along `dim`, accepting negative indices.
    pub fn size(&self, dim: i64) -> Result<usize, FftError> {
        self.resolve_dim(dim).map(|d| self.shape[d])
    }

    /// Lane decomposition around the already resolved axis `dim`.
    pub fn lanes(&self, dim: usize) -> LaneGeometry {
        LaneGeometry {
            outer: self.shape[..dim].iter().product(),
            len: self.shape[dim],
            inner: self.shape[dim + 1..].iter().product(),
        }
    }

    /// Complex copy of this tensor; real values land on the real axis.
    pub fn to_complex(&self) -> Self {
        let storage = match &self.storage {
            Storage::Real(v) => Storage::Complex(v.iter().map(|&x| Complex::from_real(x)).collect()),
            Storage::Complex(v) => Storage::Complex(v.clone()),
        };
        Self {
            shape: self.shape.clone(),
            storage,
        }
    }

    /// Copy of this tensor with the extent along `dim` changed to `len`.
    ///
    /// Lanes are truncated when `len` is shorter and zero-padded at the end
    /// when it is longer.
    pub fn resized_along(&self, dim: usize, len: usize) -> Result<Self, FftError> {
        let geom = self.lanes(dim);
        let mut shape = self.shape.clone();
        shape[dim] = len;
        match &self.storage {
            Storage::Real(_) => checked_numel::<T>(&shape)?,
            Storage::Complex(_) => checked_numel::<Complex<T>>(&shape)?,
        };
        let storage = match &self.storage {
            Storage::Real(v) => Storage::Real(resize_lanes(v, geom, len, T::zero())),
            Storage::Complex(v) => Storage::Complex(resize_lanes(v, geom, len, Complex::zero())),
        };
        Ok(Self { shape, storage })
    }

    /// Check that a complex copy of this tensor with extent `len` along
    /// `dim` is allocatable.
    pub(crate) fn check_extent(&self, dim: usize, len: usize) -> Result<(), FftError> {
        let mut shape = self.shape.clone();
        shape[dim] = len;
        checked_numel::<Complex<T>>(&shape).map(|_| ())
    }

    /// Build a tensor from parts produced by an engine.
    pub(crate) fn from_parts(shape: Vec<usize>, storage: Storage<T>) -> Self {
        debug_assert_eq!(shape.iter().product::<usize>(), storage.len());
        Self { shape, storage }
    }
}

fn resize_lanes<E: Copy>(data: &[E], geom: LaneGeometry, len: usize, zero: E) -> Vec<E> {
    let out_geom = geom.with_len(len);
    let keep = geom.len.min(len);
    let mut out = vec![zero; geom.lanes() * len];
    for lane in 0..geom.lanes() {
        let src = geom.base(lane);
        let dst = out_geom.base(lane);
        for k in 0..keep {
            out[dst + k * geom.inner] = data[src + k * geom.inner];
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_mismatched_data_length() {
        let err = Tensor::<f32>::from_real(&[2, 3], vec![0.0; 5]).unwrap_err();
        assert_eq!(
            err,
            FftError::ShapeMismatch {
                expected: 6,
                actual: 5
            }
        );
    }

    #[test]
    fn rejects_overflowing_shape() {
        let err = Tensor::<f32>::zeros_real(&[usize::MAX, 2]).unwrap_err();
        assert_eq!(err, FftError::Overflow);
    }

    #[test]
    fn resize_beyond_addressable_memory_is_rejected() {
        let t = Tensor::<f64>::real_vector(vec![1.0]);
        assert_eq!(t.resized_along(0, usize::MAX / 4).unwrap_err(), FftError::Overflow);
        assert_eq!(t.check_extent(0, usize::MAX / 16), Err(FftError::Overflow));
        assert_eq!(
            Tensor::<f32>::zeros_complex(&[usize::MAX / 8]).unwrap_err(),
            FftError::Overflow
        );
        assert!(t.resized_along(0, 3).is_ok());
    }

    #[test]
    fn negative_dims_wrap() {
        let t = Tensor::<f64>::zeros_real(&[2, 3, 4]).unwrap();
        assert_eq!(t.resolve_dim(-1), Ok(2));
        assert_eq!(t.resolve_dim(-3), Ok(0));
        assert_eq!(t.resolve_dim(2), Ok(2));
        assert_eq!(
            t.resolve_dim(3),
            Err(FftError::DimOutOfRange { dim: 3, rank: 3 })
        );
        assert_eq!(
            t.resolve_dim(-4),
            Err(FftError::DimOutOfRange { dim: -4, rank: 3 })
        );
        assert_eq!(t.size(-2), Ok(3));
    }

    #[test]
    fn scalar_tensor_has_no_dims() {
        let t = Tensor::<f32>::from_real(&[], vec![1.0]).unwrap();
        assert_eq!(t.numel(), 1);
        assert!(t.resolve_dim(0).is_err());
        assert!(t.resolve_dim(-1).is_err());
    }

    #[test]
    fn lane_geometry_middle_axis() {
        let t = Tensor::<f32>::zeros_real(&[2, 3, 4]).unwrap();
        let g = t.lanes(1);
        assert_eq!(
            g,
            LaneGeometry {
                outer: 2,
                len: 3,
                inner: 4
            }
        );
        assert_eq!(g.lanes(), 8);
        assert_eq!(g.base(0), 0);
        assert_eq!(g.base(5), 12 + 1);
    }

    #[test]
    fn gather_scatter_roundtrip() {
        let data: Vec<f32> = (0..12).map(|x| x as f32).collect();
        let t = Tensor::from_real(&[3, 4], data.clone()).unwrap();
        let g = t.lanes(0);
        let mut col = [0.0f32; 3];
        g.gather(&data, 2, &mut col);
        assert_eq!(col, [2.0, 6.0, 10.0]);
        let mut copy = vec![0.0f32; 12];
        g.scatter(&mut copy, 2, &col);
        assert_eq!(copy[2], 2.0);
        assert_eq!(copy[10], 10.0);
    }

    #[test]
    fn resize_pads_and_truncates_along_dim() {
        let data: Vec<f64> = (1..=6).map(|x| x as f64).collect();
        let t = Tensor::from_real(&[2, 3], data).unwrap();

        let padded = t.resized_along(1, 5).unwrap();
        assert_eq!(padded.shape(), &[2, 5]);
        assert_eq!(
            padded.as_real().unwrap(),
            &[1.0, 2.0, 3.0, 0.0, 0.0, 4.0, 5.0, 6.0, 0.0, 0.0]
        );

        let cut = t.resized_along(0, 1).unwrap();
        assert_eq!(cut.shape(), &[1, 3]);
        assert_eq!(cut.as_real().unwrap(), &[1.0, 2.0, 3.0]);
    }

    #[test]
    fn to_complex_is_lossless() {
        let t = Tensor::real_vector(vec![1.0f32, -2.0]);
        let c = t.to_complex();
        assert_eq!(c.dtype(), DType::Complex);
        assert_eq!(
            c.as_complex().unwrap(),
            &[Complex::new(1.0, 0.0), Complex::new(-2.0, 0.0)]
        );
    }
}
