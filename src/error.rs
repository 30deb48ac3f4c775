//! Error types returned by the dispatcher, the tensor container and engines.

use alloc::string::String;
use core::fmt;

use crate::tensor::DType;

/// Coarse classification of an [`FftError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// A dimension or shape does not fit the tensor.
    Shape,
    /// A scalar argument (`n`, `norm`, spacing) is out of its domain.
    InvalidArgument,
    /// The element kind of the input does not match the transform.
    Type,
    /// An engine was called outside its contract.
    Engine,
}

/// Errors that can occur while resolving or executing a transform.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FftError {
    /// `dim` does not resolve to an axis of a tensor with `rank` axes.
    DimOutOfRange { dim: i64, rank: usize },
    /// An explicitly supplied transform length was zero or negative.
    NonPositiveLength { n: i64 },
    /// A defaulted transform length is unusable.
    InvalidLength { n: usize, reason: &'static str },
    /// The normalization string is not one of the recognized modes.
    UnknownNorm { given: String },
    /// Sample spacing for the frequency helpers must be finite and positive.
    InvalidSpacing,
    /// The input element kind does not match what the operation requires.
    DTypeMismatch {
        op: &'static str,
        expected: DType,
        found: DType,
    },
    /// Tensor data length does not match the product of its shape.
    ShapeMismatch { expected: usize, actual: usize },
    /// A size computation overflowed `usize`.
    Overflow,
    /// An engine received a lane whose length differs from the plan.
    EngineLengthMismatch { expected: usize, actual: usize },
    /// An engine was asked to transform zero points.
    EmptyInput,
}

impl FftError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            FftError::DimOutOfRange { .. }
            | FftError::ShapeMismatch { .. }
            | FftError::Overflow => ErrorKind::Shape,
            FftError::NonPositiveLength { .. }
            | FftError::InvalidLength { .. }
            | FftError::UnknownNorm { .. }
            | FftError::InvalidSpacing => ErrorKind::InvalidArgument,
            FftError::DTypeMismatch { .. } => ErrorKind::Type,
            FftError::EngineLengthMismatch { .. } | FftError::EmptyInput => ErrorKind::Engine,
        }
    }
}

impl fmt::Display for FftError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FftError::DimOutOfRange { dim, rank } => {
                if *rank == 0 {
                    write!(f, "dimension {dim} is invalid for a tensor with no dimensions")
                } else {
                    write!(
                        f,
                        "dimension out of range (expected to be in range of [{}, {}], but got {dim})",
                        -(*rank as i64),
                        *rank as i64 - 1
                    )
                }
            }
            FftError::NonPositiveLength { n } => {
                write!(f, "invalid number of data points ({n}) specified, must be positive")
            }
            FftError::InvalidLength { n, reason } => {
                write!(f, "invalid number of data points ({n}): {reason}")
            }
            FftError::UnknownNorm { given } => write!(
                f,
                "invalid normalization mode \"{given}\", expected one of \"forward\", \"backward\", \"ortho\""
            ),
            FftError::InvalidSpacing => {
                write!(f, "sample spacing must be finite and greater than zero")
            }
            FftError::DTypeMismatch {
                op,
                expected,
                found,
            } => write!(f, "{op} expects a {expected} input tensor, but got {found}"),
            FftError::ShapeMismatch { expected, actual } => write!(
                f,
                "shape describes {expected} elements but {actual} were provided"
            ),
            FftError::Overflow => write!(f, "size computation overflowed"),
            FftError::EngineLengthMismatch { expected, actual } => write!(
                f,
                "engine expected lanes of length {expected}, got {actual}"
            ),
            FftError::EmptyInput => write!(f, "cannot transform an empty lane"),
        }
    }
}

/// Implement the standard error trait when the `std` feature is enabled so
/// errors can seamlessly integrate with typical Rust error handling.
#[cfg(feature = "std")]
impl std::error::Error for FftError {}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;

    #[test]
    fn dim_message_names_valid_range() {
        let msg = FftError::DimOutOfRange { dim: 5, rank: 2 }.to_string();
        assert!(msg.contains("[-2, 1]"), "{msg}");
        assert!(msg.contains('5'));
    }

    #[test]
    fn norm_message_lists_choices() {
        let msg = FftError::UnknownNorm {
            given: "unitary".into(),
        }
        .to_string();
        assert!(msg.contains("unitary"));
        assert!(msg.contains("ortho"));
    }

    #[test]
    fn kinds_follow_taxonomy() {
        assert_eq!(FftError::DimOutOfRange { dim: 0, rank: 0 }.kind(), ErrorKind::Shape);
        assert_eq!(FftError::NonPositiveLength { n: 0 }.kind(), ErrorKind::InvalidArgument);
        assert_eq!(
            FftError::DTypeMismatch {
                op: "rfft",
                expected: DType::Real,
                found: DType::Complex
            }
            .kind(),
            ErrorKind::Type
        );
        assert_eq!(FftError::EmptyInput.kind(), ErrorKind::Engine);
    }
}
