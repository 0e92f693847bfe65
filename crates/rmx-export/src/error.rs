//! Error types for the export boundary

use crate::options::ExportFormat;

/// Export errors
#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    /// Writing to the output stream failed
    #[error("export write failed: {0}")]
    Io(#[from] std::io::Error),

    /// The exporter does not render this format
    #[error("format not supported by this exporter: {0}")]
    Unsupported(ExportFormat),
}
