//! Error types for MARC lint operations.
//!
//! This module provides the [`LintError`] type and the [`Result`]
//! convenience alias. Only record *input* can fail: the lint engine itself
//! reports every finding as a [`crate::Warning`] and never raises.

use thiserror::Error;

/// Error type for reading MARC records.
#[derive(Error, Debug)]
pub enum LintError {
    /// The leader could not be parsed (bad length fields or base address).
    #[error("Invalid leader: {0}")]
    InvalidLeader(String),

    /// The record's directory or data area is structurally invalid.
    #[error("Invalid record: {0}")]
    InvalidRecord(String),

    /// The input ended in the middle of a record.
    #[error("Truncated record: {0}")]
    TruncatedRecord(String),

    /// IO error from the underlying source.
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

/// Convenience type alias for [`std::result::Result`] with [`LintError`].
pub type Result<T> = std::result::Result<T, LintError>;
