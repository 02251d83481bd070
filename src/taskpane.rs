//! The task pane controller.
//!
//! Owns the classifier and the injected collaborators (workbook host,
//! clipboard, notifier) and sequences the pane's operations: generate a
//! macro, copy it, show insert instructions, analyze the workbook, render
//! the remote-push walkthrough, and run quick actions. All user-input
//! validation lives here; the classifier itself only refuses empty text.

use log::{info, warn};
use thiserror::Error;

use crate::classifier::{Classification, Classifier, ClassifierError};
use crate::host::{HostError, QuickAction, WorkbookHost};
use crate::templates;
use crate::workbook::WorkbookAnalysis;

/// Errors surfaced by the clipboard boundary.
#[derive(Debug, Error)]
pub enum ClipboardError {
    #[error("Clipboard write failed: {0}")]
    WriteFailed(String),
}

/// Write access to the system clipboard.
pub trait Clipboard: Send + Sync {
    fn write_text(&self, text: &str) -> Result<(), ClipboardError>;
}

/// User-facing message channel. The three levels mirror the pane's
/// success/error/info boxes.
pub trait Notifier: Send + Sync {
    fn success(&self, message: &str);
    fn error(&self, message: &str);
    fn info(&self, message: &str);
}

/// Errors surfaced by task pane operations.
#[derive(Debug, Error)]
pub enum TaskPaneError {
    /// The user submitted an empty or whitespace-only description
    #[error("Please enter a task description")]
    EmptyDescription,
    /// An operation needs a generated macro and none exists yet
    #[error("Please generate a macro first")]
    NoMacroGenerated,
    /// A remote-push field was left blank
    #[error("Please fill in all remote push fields")]
    MissingPushField,
    #[error(transparent)]
    Classifier(#[from] ClassifierError),
    #[error(transparent)]
    Host(#[from] HostError),
    #[error(transparent)]
    Clipboard(#[from] ClipboardError),
}

/// Inputs for the remote-push walkthrough.
#[derive(Debug, Clone)]
pub struct RemotePushRequest {
    pub token: String,
    pub repository: String,
    pub file_name: String,
}

impl RemotePushRequest {
    fn validate(&self) -> Result<(), TaskPaneError> {
        let fields = [&self.token, &self.repository, &self.file_name];
        if fields.iter().any(|f| f.trim().is_empty()) {
            return Err(TaskPaneError::MissingPushField);
        }
        Ok(())
    }
}

/// The task pane, with every collaborator injected at construction.
///
/// There is no ambient lookup: the pane knows only the classifier it was
/// given and the three boundary objects. Dropping the pane releases all of
/// them.
pub struct TaskPane<H, C, N>
where
    H: WorkbookHost,
    C: Clipboard,
    N: Notifier,
{
    classifier: Classifier,
    host: H,
    clipboard: C,
    notifier: N,
    current_macro: Option<Classification>,
}

impl<H, C, N> TaskPane<H, C, N>
where
    H: WorkbookHost,
    C: Clipboard,
    N: Notifier,
{
    pub fn new(classifier: Classifier, host: H, clipboard: C, notifier: N) -> Self {
        Self {
            classifier,
            host,
            clipboard,
            notifier,
            current_macro: None,
        }
    }

    /// The most recently generated macro, if any.
    pub fn current_macro(&self) -> Option<&Classification> {
        self.current_macro.as_ref()
    }

    /// Generates a macro from raw user input.
    ///
    /// Trims the input and rejects empty text before the classifier is ever
    /// invoked. On success the rendering becomes the pane's current macro.
    pub fn generate_macro(&mut self, raw_input: &str) -> Result<&Classification, TaskPaneError> {
        let description = raw_input.trim();
        if description.is_empty() {
            warn!("macro generation rejected: empty description");
            self.notifier.error("Please enter a task description");
            return Err(TaskPaneError::EmptyDescription);
        }

        let classification = self.classifier.classify(description)?;
        info!(
            "generated {} macro for {:?}",
            classification.family, description
        );
        Ok(self.current_macro.insert(classification))
    }

    /// Copies the current macro to the clipboard verbatim.
    pub fn copy_macro(&self) -> Result<(), TaskPaneError> {
        let classification = self
            .current_macro
            .as_ref()
            .ok_or(TaskPaneError::NoMacroGenerated)?;

        self.clipboard.write_text(&classification.rendered)?;
        self.notifier.success("Macro copied to clipboard!");
        Ok(())
    }

    /// Shows the manual VBA-editor walkthrough. Informational only; there is
    /// no programmatic insertion path.
    pub fn insert_into_editor(&self) {
        self.notifier.info(templates::INSERT_INSTRUCTIONS);
    }

    /// Fetches and renders the workbook analysis panel.
    pub fn analyze_workbook(&self) -> Result<String, TaskPaneError> {
        let analysis = WorkbookAnalysis::fetch(&self.host)?;
        Ok(analysis.render_report())
    }

    /// Renders the remote-push walkthrough for the current macro.
    ///
    /// Deliberately a no-op toward the network: pushing requires a backend
    /// to hold credentials, so the pane only renders manual instructions.
    /// Errors if any field is blank or no macro has been generated.
    pub fn push_to_remote(&self, request: &RemotePushRequest) -> Result<String, TaskPaneError> {
        request.validate()?;
        if self.current_macro.is_none() {
            return Err(TaskPaneError::NoMacroGenerated);
        }

        let message = format!(
            "Remote Push:\n\n\
             This feature requires a backend service to securely handle authentication. \
             For manual push:\n\n\
             1. Go to github.com/{}\n\
             2. Create a new file: {}\n\
             3. Paste the generated macro code\n\
             4. Commit the changes",
            request.repository, request.file_name
        );
        self.notifier.info(&message);
        Ok(message)
    }

    /// Runs one quick action against the host and reports the outcome.
    pub fn quick_action(&self, action: QuickAction) -> Result<(), TaskPaneError> {
        match self.host.apply(action) {
            Ok(()) => {
                info!("quick action {} succeeded", action.label());
                self.notifier.success(action.success_message());
                Ok(())
            }
            Err(e) => {
                warn!("quick action {} failed: {}", action.label(), e);
                self.notifier.error(&e.to_string());
                Err(e.into())
            }
        }
    }
}
