//! Normalization modes for forward/inverse transform pairs.

use alloc::string::ToString;
use core::fmt;
use core::str::FromStr;

use crate::error::FftError;
use crate::num::Float;

/// Direction of a DFT: sign of the exponent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// `exp(-2πi k t / n)`
    Forward,
    /// `exp(+2πi k t / n)`
    Inverse,
}

/// Where the `1/n` (or `1/√n`) factor of a transform pair is applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Norm {
    /// Scale the forward transform by `1/n`.
    Forward,
    /// Scale the inverse transform by `1/n`.
    #[default]
    Backward,
    /// Scale both directions by `1/√n`.
    Ortho,
}

impl Norm {
    pub const ALL: [Norm; 3] = [Norm::Forward, Norm::Backward, Norm::Ortho];

    pub fn as_str(self) -> &'static str {
        match self {
            Norm::Forward => "forward",
            Norm::Backward => "backward",
            Norm::Ortho => "ortho",
        }
    }

    /// Resolve an optional mode string; `None` selects [`Norm::Backward`].
    pub fn resolve(norm: Option<&str>) -> Result<Self, FftError> {
        match norm {
            None => Ok(Norm::default()),
            Some(s) => s.parse(),
        }
    }

    /// Scale factor applied to the output of a length-`n` transform running
    /// in `direction`. Returns `None` when no scaling is needed.
    pub fn scale<T: Float>(self, n: usize, direction: Direction) -> Option<T> {
        let n = n as f64;
        match (self, direction) {
            (Norm::Backward, Direction::Forward) | (Norm::Forward, Direction::Inverse) => None,
            (Norm::Backward, Direction::Inverse) | (Norm::Forward, Direction::Forward) => {
                Some(T::from_f64(1.0 / n))
            }
            (Norm::Ortho, _) => Some(T::from_f64(1.0 / libm::sqrt(n))),
        }
    }
}

impl FromStr for Norm {
    type Err = FftError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "forward" => Ok(Norm::Forward),
            "backward" => Ok(Norm::Backward),
            "ortho" => Ok(Norm::Ortho),
            other => Err(FftError::UnknownNorm {
                given: other.to_string(),
            }),
        }
    }
}

impl fmt::Display for Norm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::Forward => f.write_str("forward"),
            Direction::Inverse => f.write_str("inverse"),
        }
    }
}
