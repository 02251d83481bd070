//! The seam between the task pane and the hosting spreadsheet application.
//!
//! The original surface behind this trait is an object-automation API with a
//! request/sync round trip per operation. Nothing in this crate talks to a
//! real host; implementations are injected by the embedder, and tests use
//! recording mocks.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors surfaced by a workbook host implementation.
#[derive(Debug, Error)]
pub enum HostError {
    /// The host application is not available or the session is gone
    #[error("Host unavailable: {0}")]
    Unavailable(String),
    /// The host rejected or failed an operation
    #[error("Host operation failed: {0}")]
    OperationFailed(String),
}

/// Row and column extent of a sheet's used range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RangeSize {
    pub rows: u32,
    pub columns: u32,
}

/// The four fixed, parameterless operations the task pane can run directly
/// against host state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum QuickAction {
    /// Arial 11 with continuous edge borders on the selected range
    FormatRange,
    /// Clustered column chart over the selected range
    CreateChart,
    /// Ascending sort of the used range by its first column
    SortAscending,
    /// AutoFilter over the used range
    AutoFilter,
}

impl QuickAction {
    pub fn all() -> [QuickAction; 4] {
        [
            QuickAction::FormatRange,
            QuickAction::CreateChart,
            QuickAction::SortAscending,
            QuickAction::AutoFilter,
        ]
    }

    /// Message shown when the action completes.
    pub fn success_message(&self) -> &'static str {
        match self {
            QuickAction::FormatRange => "Range formatted successfully!",
            QuickAction::CreateChart => "Chart created successfully!",
            QuickAction::SortAscending => "Data sorted successfully!",
            QuickAction::AutoFilter => "AutoFilter applied successfully!",
        }
    }

    /// Short label for logs and the CLI.
    pub fn label(&self) -> &'static str {
        match self {
            QuickAction::FormatRange => "format-range",
            QuickAction::CreateChart => "create-chart",
            QuickAction::SortAscending => "sort-data",
            QuickAction::AutoFilter => "filter-data",
        }
    }
}

/// Read and write access to the active workbook.
///
/// Implementations must be safe to share across threads; the task pane holds
/// the host for its whole lifetime.
pub trait WorkbookHost: Send + Sync {
    /// Names of every worksheet in the workbook, in tab order.
    fn sheet_names(&self) -> Result<Vec<String>, HostError>;

    /// Name of the currently active worksheet.
    fn active_sheet_name(&self) -> Result<String, HostError>;

    /// Used-range extent of the active worksheet.
    fn used_range_size(&self) -> Result<RangeSize, HostError>;

    /// Performs one quick action against the workbook.
    fn apply(&self, action: QuickAction) -> Result<(), HostError>;
}

/// A canned in-memory host used by the CLI demo.
///
/// Reports a fixed three-sheet workbook and accepts every quick action
/// without doing anything.
#[derive(Debug, Clone)]
pub struct FixtureHost {
    sheets: Vec<String>,
    active: usize,
    used_range: RangeSize,
}

impl Default for FixtureHost {
    fn default() -> Self {
        Self {
            sheets: vec![
                "Sales".to_string(),
                "Inventory".to_string(),
                "Summary".to_string(),
            ],
            active: 0,
            used_range: RangeSize {
                rows: 120,
                columns: 8,
            },
        }
    }
}

impl WorkbookHost for FixtureHost {
    fn sheet_names(&self) -> Result<Vec<String>, HostError> {
        Ok(self.sheets.clone())
    }

    fn active_sheet_name(&self) -> Result<String, HostError> {
        self.sheets
            .get(self.active)
            .cloned()
            .ok_or_else(|| HostError::Unavailable("no active sheet".into()))
    }

    fn used_range_size(&self) -> Result<RangeSize, HostError> {
        Ok(self.used_range)
    }

    fn apply(&self, action: QuickAction) -> Result<(), HostError> {
        log::info!("fixture host: applying {}", action.label());
        Ok(())
    }
}
