use std::sync::Arc;

use log::info;

use super::classifier::Classifier;
use super::error::ClassifierError;
use super::rules::{KeywordRule, DEFAULT_RULES};

/// A builder for constructing a Classifier with a fluent interface.
///
/// Most callers want [`with_default_rules`](Self::with_default_rules), which
/// installs the fixed five-rule table. Custom tables are for embedders that
/// need different keyword routing; rule order is preserved as given and is
/// the tie-break policy at classification time.
#[derive(Default, Debug)]
pub struct ClassifierBuilder {
    rules: Vec<KeywordRule>,
}

impl ClassifierBuilder {
    /// Creates a new empty ClassifierBuilder instance
    ///
    /// # Example
    /// ```
    /// use excelbot::ClassifierBuilder;
    ///
    /// let builder = ClassifierBuilder::new();
    /// ```
    pub fn new() -> Self {
        Self { rules: Vec::new() }
    }

    /// Installs the built-in rule table: highlight/color, sort/order,
    /// filter, chart/graph, format/style, in that priority order.
    ///
    /// # Example
    /// ```
    /// use excelbot::ClassifierBuilder;
    ///
    /// let classifier = ClassifierBuilder::new()
    ///     .with_default_rules()
    ///     .build()
    ///     .unwrap();
    /// ```
    pub fn with_default_rules(mut self) -> Self {
        self.rules = DEFAULT_RULES.clone();
        self
    }

    /// Appends a rule to the table.
    ///
    /// # Arguments
    /// * `rule` - The rule to append; evaluated after every rule already added
    ///
    /// # Returns
    /// * `Result<Self, ClassifierError>` - The builder instance if successful,
    ///   or a validation error if:
    ///   - The rule has no keywords
    ///   - Any keyword is empty
    ///   - A rule for the same family is already present
    ///
    /// # Example
    /// ```
    /// use excelbot::{ClassifierBuilder, KeywordRule, TemplateFamily};
    ///
    /// let builder = ClassifierBuilder::new()
    ///     .add_rule(KeywordRule::new(TemplateFamily::Chart, vec!["plot"]))
    ///     .unwrap();
    /// ```
    pub fn add_rule(mut self, rule: KeywordRule) -> Result<Self, ClassifierError> {
        Self::validate_rule(&rule)?;

        if self.rules.iter().any(|r| r.family == rule.family) {
            return Err(ClassifierError::ValidationError(format!(
                "A rule for family '{}' is already present",
                rule.family
            )));
        }

        self.rules.push(rule);
        Ok(self)
    }

    /// Validates rule data according to the following rules:
    /// - Must have at least one keyword
    /// - No keyword can be empty
    fn validate_rule(rule: &KeywordRule) -> Result<(), ClassifierError> {
        if rule.keywords.is_empty() {
            return Err(ClassifierError::ValidationError(format!(
                "Rule for family '{}' must have at least one keyword",
                rule.family
            )));
        }
        if let Some(pos) = rule.keywords.iter().position(|k| k.is_empty()) {
            return Err(ClassifierError::ValidationError(format!(
                "Keyword {} cannot be empty",
                pos + 1
            )));
        }
        Ok(())
    }

    /// Builds and returns the final Classifier instance
    ///
    /// # Returns
    /// * `Result<Classifier, ClassifierError>` - The constructed Classifier
    ///   if successful, or a build error if no rules have been added.
    pub fn build(self) -> Result<Classifier, ClassifierError> {
        if self.rules.is_empty() {
            return Err(ClassifierError::BuildError(
                "At least one rule must be added".to_string(),
            ));
        }

        info!("built classifier with {} rules", self.rules.len());
        Ok(Classifier {
            rules: Arc::new(self.rules),
        })
    }
}
