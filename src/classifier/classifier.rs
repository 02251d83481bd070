use std::sync::Arc;

use serde::Serialize;

use super::error::ClassifierError;
use super::family::TemplateFamily;
use super::rules::{route, KeywordRule};
use crate::templates;

/// The result of classifying one task description.
#[derive(Debug, Clone, Serialize)]
pub struct Classification {
    /// The template family selected by the rule table
    pub family: TemplateFamily,
    /// The description exactly as classified, preserved verbatim
    pub description: String,
    /// The family's template body with the description spliced in
    pub rendered: String,
}

/// A thread-safe task-description classifier backed by an ordered keyword
/// rule table and a fixed VBA template library.
///
/// Classification is a pure function: no I/O, no interior mutability, and
/// identical output for identical input. The only failure mode is an empty
/// (or whitespace-only) description.
///
/// Single-thread usage:
/// ```rust
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// use excelbot::{Classifier, TemplateFamily};
///
/// let classifier = Classifier::builder().with_default_rules().build()?;
///
/// let result = classifier.classify("highlight cells over 100")?;
/// assert_eq!(result.family, TemplateFamily::Highlight);
/// assert!(result.rendered.contains("highlight cells over 100"));
/// # Ok(())
/// # }
/// ```
///
/// Multi-thread usage:
/// ```rust
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// use excelbot::Classifier;
/// use std::sync::Arc;
/// use std::thread;
///
/// let classifier = Arc::new(Classifier::builder().with_default_rules().build()?);
///
/// let classifier_clone = Arc::clone(&classifier);
/// thread::spawn(move || {
///     classifier_clone.classify("sort column A").unwrap();
/// });
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct Classifier {
    pub(super) rules: Arc<Vec<KeywordRule>>,
}

// Compile-time verification of thread-safety
const _: () = {
    fn assert_send_sync<T: Send + Sync>() {}
    fn verify_thread_safety() {
        assert_send_sync::<Classifier>();
    }
};

impl Classifier {
    /// Creates a new ClassifierBuilder for fluent construction
    pub fn builder() -> super::builder::ClassifierBuilder {
        super::builder::ClassifierBuilder::new()
    }

    /// Returns information about the classifier's current state
    pub fn info(&self) -> super::ClassifierInfo {
        super::ClassifierInfo {
            num_rules: self.rules.len(),
            families: self.rules.iter().map(|r| r.family).collect(),
            keywords: self
                .rules
                .iter()
                .flat_map(|r| r.keywords.iter().cloned())
                .collect(),
        }
    }

    /// Routes a description to its template family without rendering.
    ///
    /// Rules are tried in table order, first match wins; descriptions with
    /// no matching keyword fall through to [`TemplateFamily::Generic`].
    pub fn route(&self, description: &str) -> Result<TemplateFamily, ClassifierError> {
        Self::validate_description(description)?;
        Ok(route(&self.rules, description))
    }

    /// Classifies a description and renders the selected family's template.
    ///
    /// # Arguments
    /// * `description` - The task description to classify; must be non-empty
    ///   after trimming
    ///
    /// # Returns
    /// A [`Classification`] carrying the selected family, the verbatim
    /// description, and the rendered VBA body.
    ///
    /// # Example
    /// ```rust
    /// # fn main() -> Result<(), Box<dyn std::error::Error>> {
    /// use excelbot::{Classifier, TemplateFamily};
    ///
    /// let classifier = Classifier::builder().with_default_rules().build()?;
    /// // "sort" outranks "chart": rule order is the tie-break
    /// let result = classifier.classify("sort and chart the data")?;
    /// assert_eq!(result.family, TemplateFamily::Sort);
    /// # Ok(())
    /// # }
    /// ```
    pub fn classify(&self, description: &str) -> Result<Classification, ClassifierError> {
        Self::validate_description(description)?;

        let family = route(&self.rules, description);
        log::debug!("classified {:?} -> {}", description, family);

        Ok(Classification {
            family,
            description: description.to_string(),
            rendered: templates::render(family, description),
        })
    }

    fn validate_description(description: &str) -> Result<(), ClassifierError> {
        if description.trim().is_empty() {
            return Err(ClassifierError::ValidationError(
                "Task description cannot be empty".into(),
            ));
        }
        Ok(())
    }
}
