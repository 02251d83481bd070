use serde::{Deserialize, Serialize};

/// The closed set of macro templates the classifier can select.
///
/// Adding a family is a compile-time change: every `match` over this enum is
/// exhaustive, so the template library and the rule table cannot silently
/// fall out of sync with each other.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TemplateFamily {
    /// Conditional cell highlighting based on numeric thresholds
    Highlight,
    /// Single-key ascending sort over the used range
    Sort,
    /// AutoFilter with an example numeric criterion
    Filter,
    /// Clustered column chart over the current selection
    Chart,
    /// Font, border and header-row formatting of the selection
    Format,
    /// Fallback skeleton macro for descriptions with no recognized keyword
    Generic,
}

impl TemplateFamily {
    /// Stable label for logs and serialized output.
    pub fn as_str(&self) -> &'static str {
        match self {
            TemplateFamily::Highlight => "highlight",
            TemplateFamily::Sort => "sort",
            TemplateFamily::Filter => "filter",
            TemplateFamily::Chart => "chart",
            TemplateFamily::Format => "format",
            TemplateFamily::Generic => "generic",
        }
    }

    /// Name of the `Sub` procedure the family's template declares.
    pub fn macro_name(&self) -> &'static str {
        match self {
            TemplateFamily::Highlight => "HighlightCells",
            TemplateFamily::Sort => "SortData",
            TemplateFamily::Filter => "FilterData",
            TemplateFamily::Chart => "CreateChart",
            TemplateFamily::Format => "FormatRange",
            TemplateFamily::Generic => "AutoMacro",
        }
    }

    /// All families, in classification priority order (Generic last).
    pub fn all() -> [TemplateFamily; 6] {
        [
            TemplateFamily::Highlight,
            TemplateFamily::Sort,
            TemplateFamily::Filter,
            TemplateFamily::Chart,
            TemplateFamily::Format,
            TemplateFamily::Generic,
        ]
    }
}

impl std::fmt::Display for TemplateFamily {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
