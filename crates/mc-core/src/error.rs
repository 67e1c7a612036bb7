use core::fmt;

use crate::Coord;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    InvalidGridShape { expected: usize, actual: usize },
    InvalidSeed {
        seed: Coord,
        target: u8,
        found: Option<u8>,
    },
    InvalidStride,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidGridShape { expected, actual } => {
                write!(f, "invalid grid shape: expected {expected}, got {actual}")
            }
            Self::InvalidSeed {
                seed,
                target,
                found: None,
            } => write!(
                f,
                "invalid seed ({}, {}) for intensity {target}: outside grid",
                seed.row, seed.col
            ),
            Self::InvalidSeed {
                seed,
                target,
                found: Some(v),
            } => write!(
                f,
                "invalid seed ({}, {}) for intensity {target}: pixel holds {v}",
                seed.row, seed.col
            ),
            Self::InvalidStride => write!(f, "invalid stride: row pitch below column count"),
        }
    }
}

impl std::error::Error for Error {}
