//! Error types for the rendering collaborators.

use thiserror::Error;

/// Rendering failures, kept distinct from extraction concerns: the core
/// pipeline never fails, but turning its result into files can.
#[derive(Error, Debug)]
pub enum ExportError {
    /// Excel workbook generation failed.
    #[error("workbook error: {0}")]
    Workbook(#[from] rust_xlsxwriter::XlsxError),

    /// Zip bundling failed.
    #[error("archive error: {0}")]
    Archive(#[from] zip::result::ZipError),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for export operations.
pub type Result<T> = std::result::Result<T, ExportError>;
