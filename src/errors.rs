/*!
 * Error types for the vttknow application.
 *
 * This module contains custom error types for different parts of the application,
 * using the thiserror crate for ergonomic error definitions.
 */

// Allow dead code - error types are for library consumers
#![allow(dead_code)]

use thiserror::Error;

/// Errors raised when the chunker is called with an invalid configuration.
///
/// These are caller contract violations and fail fast instead of being
/// silently clamped.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ChunkError {
    /// Chunk size must be strictly positive
    #[error("Invalid chunk size: {0} (must be greater than 0)")]
    InvalidChunkSize(usize),

    /// Overlap must stay strictly below the chunk size
    #[error("Invalid overlap: {overlap} (must be less than chunk size {chunk_size})")]
    InvalidOverlap {
        /// Requested overlap in characters
        overlap: usize,
        /// Requested chunk size in characters
        chunk_size: usize,
    },
}

/// Main application error type that wraps all other errors
#[derive(Error, Debug)]
pub enum AppError {
    /// Error from a file operation
    #[error("File error: {0}")]
    File(String),

    /// Error from chunking configuration
    #[error("Chunk error: {0}")]
    Chunk(#[from] ChunkError),

    /// Error from configuration loading or validation
    #[error("Config error: {0}")]
    Config(String),

    /// Any other error
    #[error("Unknown error: {0}")]
    Unknown(String),
}

// Utility functions for error conversion
impl From<anyhow::Error> for AppError {
    fn from(error: anyhow::Error) -> Self {
        Self::Unknown(error.to_string())
    }
}

impl From<std::io::Error> for AppError {
    fn from(error: std::io::Error) -> Self {
        Self::File(error.to_string())
    }
}
