//! Export formats and options

use rmx_core::ViewFilter;
use serde::{Deserialize, Serialize};

/// Target export format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    /// Portable document (rendered by an external collaborator)
    Pdf,
    /// Spreadsheet (rendered by an external collaborator)
    Excel,
    /// Comma-separated values
    Csv,
}

impl ExportFormat {
    /// Conventional file extension for the format
    #[inline]
    #[must_use]
    pub fn file_extension(&self) -> &'static str {
        match self {
            Self::Pdf => "pdf",
            Self::Excel => "xlsx",
            Self::Csv => "csv",
        }
    }
}

impl std::fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            Self::Pdf => "pdf",
            Self::Excel => "excel",
            Self::Csv => "csv",
        };
        f.write_str(label)
    }
}

/// Options for one export run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportOptions {
    /// Target format
    pub format: ExportFormat,
    /// Whether to include an annotations column
    pub include_annotations: bool,
    /// View filter applied before rendering
    pub filter: ViewFilter,
}

impl ExportOptions {
    /// Create options for a format, exporting the unfiltered matrix
    #[inline]
    #[must_use]
    pub fn new(format: ExportFormat) -> Self {
        Self {
            format,
            include_annotations: false,
            filter: ViewFilter::all(),
        }
    }

    /// Include the annotations column
    #[inline]
    #[must_use]
    pub fn with_annotations(mut self) -> Self {
        self.include_annotations = true;
        self
    }

    /// Apply a view filter before rendering
    #[inline]
    #[must_use]
    pub fn with_filter(mut self, filter: ViewFilter) -> Self {
        self.filter = filter;
        self
    }
}

/// What an export run produced
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExportSummary {
    /// Format rendered
    pub format: ExportFormat,
    /// Data rows written (header excluded)
    pub rows_written: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_extensions() {
        assert_eq!(ExportFormat::Pdf.file_extension(), "pdf");
        assert_eq!(ExportFormat::Excel.file_extension(), "xlsx");
        assert_eq!(ExportFormat::Csv.file_extension(), "csv");
    }

    #[test]
    fn options_builder() {
        let options = ExportOptions::new(ExportFormat::Csv)
            .with_annotations()
            .with_filter(ViewFilter::all().with_search("steel"));

        assert_eq!(options.format, ExportFormat::Csv);
        assert!(options.include_annotations);
        assert_eq!(options.filter.search.as_deref(), Some("steel"));
    }

    #[test]
    fn format_serde_lowercase() {
        let json = serde_json::to_string(&ExportFormat::Excel).unwrap();
        assert_eq!(json, "\"excel\"");
    }
}
