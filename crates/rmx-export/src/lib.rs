//! RMX Export - Matrix export boundary
//!
//! Accepts a matrix, a view filter, and format options and produces a byte
//! stream. CSV is rendered here; PDF and spreadsheet rendering belong to
//! external collaborators that implement the same [`Exporter`] contract.

#![warn(unreachable_pub)]
#![allow(missing_docs)]

pub mod csv;
pub mod error;
pub mod options;

// Re-exports for convenience
pub use csv::CsvExporter;
pub use error::ExportError;
pub use options::{ExportFormat, ExportOptions, ExportSummary};

use rmx_core::ResponsibilityMatrix;
use std::io::Write;

/// Export contract
///
/// Implementations render the filtered matrix view into `out`; content and
/// layout are the implementation's concern, the model stays untouched.
pub trait Exporter {
    /// Format this exporter renders
    fn format(&self) -> ExportFormat;

    /// Render the matrix through the options' filter into `out`
    ///
    /// # Errors
    /// - `ExportError::Unsupported` if the options request a format this
    ///   exporter does not render
    /// - `ExportError::Io` if writing fails
    fn export(
        &self,
        matrix: &ResponsibilityMatrix,
        options: &ExportOptions,
        out: &mut dyn Write,
    ) -> Result<ExportSummary, ExportError>;
}

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
