//! Error types for LEA key handling.

use thiserror::Error;

/// Result type alias for LEA operations.
pub type Result<T> = core::result::Result<T, LeaError>;

/// Errors reported while preparing a key schedule.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum LeaError {
    /// Key is not 16, 24 or 32 bytes long.
    #[error("invalid key length: {0} bytes (expected 16, 24 or 32)")]
    InvalidKeyLength(usize),

    /// Direction code is neither 0 (encrypt) nor 1 (decrypt).
    #[error("invalid direction code: {0}")]
    InvalidDirection(u8),
}
