use lazy_static::lazy_static;

use super::family::TemplateFamily;

/// A keyword predicate that routes a description to one template family.
///
/// Rules are evaluated in table order and the first rule whose keywords
/// match wins. There is no best-match or longest-match scoring; the order of
/// the table is the tie-break policy and is observable behavior.
#[derive(Debug, Clone)]
pub struct KeywordRule {
    /// The family this rule selects
    pub family: TemplateFamily,
    /// Lowercase substrings, any one of which triggers the rule
    pub keywords: Vec<String>,
}

impl KeywordRule {
    /// Creates a rule from a family and its trigger keywords.
    ///
    /// Keywords are lowercased on construction; matching is always performed
    /// against the case-folded description.
    ///
    /// # Example
    /// ```
    /// use excelbot::{KeywordRule, TemplateFamily};
    ///
    /// let rule = KeywordRule::new(TemplateFamily::Sort, vec!["sort", "order"]);
    /// assert!(rule.matches("Please SORT column A"));
    /// ```
    pub fn new(family: TemplateFamily, keywords: Vec<impl Into<String>>) -> Self {
        Self {
            family,
            keywords: keywords
                .into_iter()
                .map(|k| k.into().to_lowercase())
                .collect(),
        }
    }

    /// Returns true if any keyword occurs in the description, ignoring case.
    pub fn matches(&self, description: &str) -> bool {
        let folded = description.to_lowercase();
        self.keywords.iter().any(|k| folded.contains(k.as_str()))
    }
}

lazy_static! {
    /// The fixed routing table. Order matters: a description containing both
    /// "sort" and "chart" resolves to `Sort` because its rule comes first.
    /// `Generic` has no rule; it is the fallback when nothing matches.
    pub static ref DEFAULT_RULES: Vec<KeywordRule> = vec![
        KeywordRule::new(TemplateFamily::Highlight, vec!["highlight", "color"]),
        KeywordRule::new(TemplateFamily::Sort, vec!["sort", "order"]),
        KeywordRule::new(TemplateFamily::Filter, vec!["filter"]),
        KeywordRule::new(TemplateFamily::Chart, vec!["chart", "graph"]),
        KeywordRule::new(TemplateFamily::Format, vec!["format", "style"]),
    ];
}

/// Runs the table against a description, falling back to `Generic`.
pub(crate) fn route(rules: &[KeywordRule], description: &str) -> TemplateFamily {
    rules
        .iter()
        .find(|rule| rule.matches(description))
        .map(|rule| rule.family)
        .unwrap_or(TemplateFamily::Generic)
}
