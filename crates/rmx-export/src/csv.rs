//! CSV rendering of the projected matrix view
//!
//! Renders the filtered, grouped view as RFC-4180-style CSV: one header
//! row, then one row per surviving task in group order. Only enabled roles
//! become columns; disabled roles keep their historical state out of the
//! export, matching the assignable-column rule.

use crate::error::ExportError;
use crate::options::{ExportFormat, ExportOptions, ExportSummary};
use crate::Exporter;
use rmx_core::{project, ResponsibilityMatrix, Task};
use std::io::Write;

/// CSV exporter for the responsibility matrix
#[derive(Debug, Clone, Copy, Default)]
pub struct CsvExporter;

impl CsvExporter {
    /// Create a CSV exporter
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    fn annotation_summary(task: &Task) -> String {
        task.annotations
            .iter()
            .map(|a| format!("{}: {}", a.user, a.comment))
            .collect::<Vec<_>>()
            .join("; ")
    }
}

impl Exporter for CsvExporter {
    fn format(&self) -> ExportFormat {
        ExportFormat::Csv
    }

    fn export(
        &self,
        matrix: &ResponsibilityMatrix,
        options: &ExportOptions,
        out: &mut dyn Write,
    ) -> Result<ExportSummary, ExportError> {
        if options.format != ExportFormat::Csv {
            return Err(ExportError::Unsupported(options.format));
        }

        let columns: Vec<_> = matrix.assignable_roles().collect();

        let mut header = vec!["Category".to_string(), "Task".to_string(), "Status".to_string()];
        header.extend(columns.iter().map(|r| r.name.clone()));
        if options.include_annotations {
            header.push("Annotations".to_string());
        }
        write_row(out, &header)?;

        let groups = project(matrix.tasks(), &options.filter);
        let mut rows_written = 0;
        for group in &groups {
            for task in &group.tasks {
                let mut row = vec![
                    group.category.label().to_string(),
                    task.description.clone(),
                    task.status.to_string(),
                ];
                for role in &columns {
                    let state = task.assignment(&role.key).unwrap_or_default();
                    row.push(state.to_string());
                }
                if options.include_annotations {
                    row.push(Self::annotation_summary(task));
                }
                write_row(out, &row)?;
                rows_written += 1;
            }
        }

        tracing::info!("csv export complete: {rows_written} rows");
        Ok(ExportSummary {
            format: ExportFormat::Csv,
            rows_written,
        })
    }
}

/// Write one CSV record with RFC-4180-style quoting.
fn write_row(out: &mut dyn Write, fields: &[String]) -> Result<(), ExportError> {
    let mut first = true;
    for field in fields {
        if !first {
            out.write_all(b",")?;
        }
        first = false;

        if field.contains(',') || field.contains('"') || field.contains('\n') {
            let escaped = field.replace('"', "\"\"");
            write!(out, "\"{escaped}\"")?;
        } else {
            out.write_all(field.as_bytes())?;
        }
    }
    out.write_all(b"\r\n")?;
    Ok(())
}
