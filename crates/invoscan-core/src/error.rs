//! Error types for the invoscan-core library.

use thiserror::Error;

/// Main error type for the invoscan libraries.
///
/// The extraction pipeline itself is total over its input and never fails;
/// these variants exist for the collaborators around it. `NoData` is kept
/// separate from `Ocr` so callers can tell "the OCR engine was unavailable"
/// apart from "the engine ran but nothing could be extracted".
#[derive(Error, Debug)]
pub enum InvoscanError {
    /// OCR collaborator error.
    #[error("OCR error: {0}")]
    Ocr(#[from] OcrError),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Extraction ran but produced an entirely empty result.
    #[error("extraction produced no data")]
    NoData,
}

/// Errors from the external OCR engine.
#[derive(Error, Debug)]
pub enum OcrError {
    /// The OCR engine could not be started.
    #[error("OCR engine unavailable: {0}")]
    Unavailable(String),

    /// The OCR engine ran but reported a failure.
    #[error("OCR failed: {0}")]
    Failed(String),

    /// The OCR engine did not finish in time.
    #[error("OCR timed out after {0}s")]
    Timeout(u64),

    /// I/O error while handing data to the engine.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for the invoscan libraries.
pub type Result<T> = std::result::Result<T, InvoscanError>;
