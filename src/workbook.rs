//! Read-only workbook analysis.
//!
//! Gathers a handful of workbook properties through the [`WorkbookHost`]
//! seam and renders them as the task pane's analysis panel text.

use serde::Serialize;

use crate::host::{HostError, RangeSize, WorkbookHost};

/// A snapshot of workbook structure at analysis time.
#[derive(Debug, Clone, Serialize)]
pub struct WorkbookAnalysis {
    /// Every sheet name, in tab order
    pub sheet_names: Vec<String>,
    /// Name of the active sheet
    pub active_sheet: String,
    /// Used-range extent of the active sheet
    pub used_range: RangeSize,
}

impl WorkbookAnalysis {
    /// Fetches the analysis from a host.
    ///
    /// Three property reads, no mutation. Any host failure aborts the whole
    /// analysis; there is no partial report.
    pub fn fetch(host: &dyn WorkbookHost) -> Result<Self, HostError> {
        let sheet_names = host.sheet_names()?;
        let active_sheet = host.active_sheet_name()?;
        let used_range = host.used_range_size()?;

        log::debug!(
            "analyzed workbook: {} sheets, active '{}', {}x{}",
            sheet_names.len(),
            active_sheet,
            used_range.rows,
            used_range.columns
        );

        Ok(Self {
            sheet_names,
            active_sheet,
            used_range,
        })
    }

    /// Renders the analysis as the panel text shown to the user.
    ///
    /// # Example
    /// ```
    /// use excelbot::{FixtureHost, WorkbookAnalysis};
    ///
    /// let analysis = WorkbookAnalysis::fetch(&FixtureHost::default()).unwrap();
    /// let report = analysis.render_report();
    /// assert!(report.starts_with("Workbook Information:"));
    /// assert!(report.contains("Total Sheets: 3"));
    /// ```
    pub fn render_report(&self) -> String {
        let mut report = String::new();
        report.push_str("Workbook Information:\n\n");
        report.push_str(&format!("Total Sheets: {}\n", self.sheet_names.len()));
        report.push_str("Sheet Names:\n");
        for (index, name) in self.sheet_names.iter().enumerate() {
            report.push_str(&format!("{}. {}\n", index + 1, name));
        }
        report.push_str("\nActive Sheet Data:\n");
        report.push_str(&format!("Rows: {}\n", self.used_range.rows));
        report.push_str(&format!("Columns: {}\n", self.used_range.columns));
        report
    }
}
