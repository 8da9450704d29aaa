#[cfg(feature = "std")]
use thiserror::Error;

/// Errors reported by the checked store operations.
#[cfg_attr(feature = "std", derive(Error))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreError {
    /// Index outside the live prefix `0..len` (or `0..=len` for inserts).
    #[cfg_attr(
        feature = "std",
        error("index {index} out of bounds for length {len}")
    )]
    OutOfBounds { index: usize, len: usize },
}

#[cfg(not(feature = "std"))]
impl core::fmt::Display for StoreError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            StoreError::OutOfBounds { index, len } => {
                write!(f, "index {} out of bounds for length {}", index, len)
            }
        }
    }
}
