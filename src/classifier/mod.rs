mod builder;
mod classifier;
mod error;
mod family;
mod rules;

pub use builder::ClassifierBuilder;
pub use classifier::{Classification, Classifier};
pub use error::ClassifierError;
pub use family::TemplateFamily;
pub use rules::{KeywordRule, DEFAULT_RULES};

/// Information about the current state and configuration of a classifier
#[derive(Debug, Clone)]
pub struct ClassifierInfo {
    /// Number of keyword rules in the table
    pub num_rules: usize,
    /// Families with an explicit rule, in priority order
    pub families: Vec<TemplateFamily>,
    /// Every trigger keyword across all rules
    pub keywords: Vec<String>,
}
