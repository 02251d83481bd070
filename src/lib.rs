//! Keyword-driven VBA macro generation for spreadsheet task panes.
//!
//! The core is a small, pure classifier: it routes a free-text task
//! description through an ordered keyword rule table, picks one of six
//! fixed VBA template families, and renders the template with the
//! description spliced in verbatim. Around it sit the task pane pieces:
//! a workbook analysis report, four host quick actions, and the clipboard
//! and notification boundaries, all behind injectable traits.
//!
//! # Basic Usage
//!
//! ```rust
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! use excelbot::{Classifier, TemplateFamily};
//!
//! let classifier = Classifier::builder().with_default_rules().build()?;
//!
//! let result = classifier.classify("highlight cells above budget")?;
//! assert_eq!(result.family, TemplateFamily::Highlight);
//! println!("{}", result.rendered);
//! # Ok(())
//! # }
//! ```
//!
//! # Thread Safety
//!
//! The classifier is stateless and can be shared across threads using `Arc`:
//!
//! ```rust
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! use excelbot::Classifier;
//! use std::sync::Arc;
//! use std::thread;
//!
//! let classifier = Arc::new(Classifier::builder().with_default_rules().build()?);
//!
//! let mut handles = vec![];
//! for _ in 0..3 {
//!     let classifier = Arc::clone(&classifier);
//!     handles.push(thread::spawn(move || {
//!         classifier.classify("sort by the first column").unwrap();
//!     }));
//! }
//!
//! for handle in handles {
//!     handle.join().unwrap();
//! }
//! # Ok(())
//! # }
//! ```

pub mod classifier;
pub mod host;
pub mod taskpane;
pub mod templates;
pub mod workbook;

pub use classifier::{
    Classification, Classifier, ClassifierBuilder, ClassifierError, ClassifierInfo, KeywordRule,
    TemplateFamily,
};
pub use host::{FixtureHost, HostError, QuickAction, RangeSize, WorkbookHost};
pub use taskpane::{
    Clipboard, ClipboardError, Notifier, RemotePushRequest, TaskPane, TaskPaneError,
};
pub use workbook::WorkbookAnalysis;

pub fn init_logger() {
    env_logger::init();
}
