//! Error types for the rules engine and its persistence seam.
//!
//! Routine outcomes (no-op moves, full boards, wins, losses) are never errors.
//! These types cover input outside the accepted domain, grids that break the
//! cell invariant, and storage failures.

use thiserror::Error;

/// A grid cell holds a value outside {0, power of two >= 2, BLOCKER}.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GridError {
    #[error("invalid cell value {value} at row {row}, col {col}")]
    InvalidCell { row: usize, col: usize, value: u32 },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GameError {
    /// Direction code outside 0..=3
    #[error("invalid direction code {0} (expected 0..=3)")]
    InvalidDirection(u8),

    #[error("grid invariant violated: {0}")]
    InvalidGrid(#[from] GridError),
}

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("storage I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("malformed value for key {key}: {reason}")]
    Malformed { key: String, reason: String },
}
