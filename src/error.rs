//! Error types
//!
//! Filling never fails; errors only come from reading edge records and
//! from image file I/O.

use thiserror::Error;

/// Result type alias for grayfill operations
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    /// Reading an edge source or writing an image failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// An edge record is not four integers
    #[error("line {line}: {message}")]
    Parse { line: usize, message: String },

    /// Image encoding or decoding error
    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),
}
