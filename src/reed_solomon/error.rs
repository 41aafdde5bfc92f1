//! Error types for Reed-Solomon decoding

use thiserror::Error;

/// Why a damaged block could not be corrected
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Uncorrectable {
    /// Berlekamp-Massey ended with a zero leading coefficient
    #[error("error locator has a zero leading coefficient")]
    DegenerateLocator,

    /// More errors than `npar / 2`
    #[error("error locator degree {degree} exceeds correction capacity {capacity}")]
    CapacityExceeded { degree: usize, capacity: usize },

    /// Chien search ran out of positions before finding every root
    #[error("found {found} of {expected} error locations within the block")]
    RootsNotFound { found: usize, expected: usize },

    /// The final root lies beyond the end of the block
    #[error("error location {log} lies outside the {length}-symbol block")]
    RootOutOfRange { log: usize, length: usize },

    /// The final root coincides with one already found
    #[error("error locator has a repeated root")]
    RepeatedRoot,
}

/// Errors returned by the decoder
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeError {
    /// Block length outside `[npar, max]`
    #[error("wrong length: {length} symbols, expected between {npar} and {max}")]
    InvalidLength {
        length: usize,
        npar: usize,
        max: usize,
    },

    /// Byte buffer does not hold a whole number of 16-bit symbols
    #[error("wrong length: {0} bytes is not a whole number of 16-bit symbols")]
    OddByteLength(usize),

    /// Damage beyond what the parity can repair
    #[error("uncorrectable block: {0}")]
    Uncorrectable(#[from] Uncorrectable),
}

impl DecodeError {
    /// True for damage the code cannot repair, false for caller mistakes
    pub fn is_uncorrectable(&self) -> bool {
        matches!(self, DecodeError::Uncorrectable(_))
    }
}

/// Type alias for Result with DecodeError
pub type DecodeResult<T> = std::result::Result<T, DecodeError>;
