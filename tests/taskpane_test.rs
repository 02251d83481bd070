use std::sync::{Arc, Mutex};

use excelbot::{
    Classifier, Clipboard, ClipboardError, HostError, Notifier, QuickAction, RangeSize,
    RemotePushRequest, TaskPane, TaskPaneError, TemplateFamily, WorkbookHost,
};

/// In-memory clipboard that records every write. Clones share the buffer so
/// tests can inspect what the pane wrote.
#[derive(Default, Clone)]
struct MockClipboard {
    contents: Arc<Mutex<Vec<String>>>,
}

impl Clipboard for MockClipboard {
    fn write_text(&self, text: &str) -> Result<(), ClipboardError> {
        self.contents.lock().unwrap().push(text.to_string());
        Ok(())
    }
}

/// Notifier that records messages per level.
#[derive(Default, Clone)]
struct MockNotifier {
    successes: Arc<Mutex<Vec<String>>>,
    errors: Arc<Mutex<Vec<String>>>,
    infos: Arc<Mutex<Vec<String>>>,
}

impl Notifier for MockNotifier {
    fn success(&self, message: &str) {
        self.successes.lock().unwrap().push(message.to_string());
    }
    fn error(&self, message: &str) {
        self.errors.lock().unwrap().push(message.to_string());
    }
    fn info(&self, message: &str) {
        self.infos.lock().unwrap().push(message.to_string());
    }
}

/// Host that records applied actions and can be made to fail.
#[derive(Clone)]
struct MockHost {
    applied: Arc<Mutex<Vec<QuickAction>>>,
    fail_actions: bool,
}

impl MockHost {
    fn new() -> Self {
        Self {
            applied: Arc::new(Mutex::new(Vec::new())),
            fail_actions: false,
        }
    }

    fn failing() -> Self {
        Self {
            applied: Arc::new(Mutex::new(Vec::new())),
            fail_actions: true,
        }
    }
}

impl WorkbookHost for MockHost {
    fn sheet_names(&self) -> Result<Vec<String>, HostError> {
        Ok(vec!["Data".to_string(), "Charts".to_string()])
    }

    fn active_sheet_name(&self) -> Result<String, HostError> {
        Ok("Data".to_string())
    }

    fn used_range_size(&self) -> Result<RangeSize, HostError> {
        Ok(RangeSize {
            rows: 42,
            columns: 6,
        })
    }

    fn apply(&self, action: QuickAction) -> Result<(), HostError> {
        if self.fail_actions {
            return Err(HostError::OperationFailed("simulated failure".into()));
        }
        self.applied.lock().unwrap().push(action);
        Ok(())
    }
}

fn setup_classifier() -> Classifier {
    Classifier::builder()
        .with_default_rules()
        .build()
        .expect("Failed to create classifier")
}

fn setup_pane() -> TaskPane<MockHost, MockClipboard, MockNotifier> {
    TaskPane::new(
        setup_classifier(),
        MockHost::new(),
        MockClipboard::default(),
        MockNotifier::default(),
    )
}

#[test]
fn test_generate_macro_trims_and_stores() -> Result<(), Box<dyn std::error::Error>> {
    let mut pane = setup_pane();

    let classification = pane.generate_macro("  sort the invoices  ")?;
    assert_eq!(classification.family, TemplateFamily::Sort);
    assert_eq!(classification.description, "sort the invoices");

    assert!(pane.current_macro().is_some());
    Ok(())
}

#[test]
fn test_generate_macro_rejects_empty_input() {
    let notifier = MockNotifier::default();
    let mut pane = TaskPane::new(
        setup_classifier(),
        MockHost::new(),
        MockClipboard::default(),
        notifier.clone(),
    );

    let result = pane.generate_macro("   \t ");
    assert!(matches!(result, Err(TaskPaneError::EmptyDescription)));
    assert!(pane.current_macro().is_none());
    assert_eq!(
        notifier.errors.lock().unwrap().as_slice(),
        ["Please enter a task description"]
    );
}

#[test]
fn test_copy_requires_generated_macro() {
    let pane = setup_pane();
    assert!(matches!(
        pane.copy_macro(),
        Err(TaskPaneError::NoMacroGenerated)
    ));
}

#[test]
fn test_copy_writes_rendering_verbatim() -> Result<(), Box<dyn std::error::Error>> {
    let clipboard = MockClipboard::default();
    let notifier = MockNotifier::default();
    let mut pane = TaskPane::new(
        setup_classifier(),
        MockHost::new(),
        clipboard.clone(),
        notifier.clone(),
    );

    let rendered = pane.generate_macro("chart the results")?.rendered.clone();
    pane.copy_macro()?;

    assert_eq!(clipboard.contents.lock().unwrap().as_slice(), [rendered]);
    assert_eq!(
        notifier.successes.lock().unwrap().as_slice(),
        ["Macro copied to clipboard!"]
    );
    Ok(())
}

#[test]
fn test_analyze_workbook_report() -> Result<(), Box<dyn std::error::Error>> {
    let pane = setup_pane();

    let report = pane.analyze_workbook()?;
    assert!(report.contains("Total Sheets: 2"));
    assert!(report.contains("1. Data"));
    assert!(report.contains("2. Charts"));
    assert!(report.contains("Rows: 42"));
    assert!(report.contains("Columns: 6"));
    Ok(())
}

#[test]
fn test_push_validates_fields() {
    let mut pane = setup_pane();
    pane.generate_macro("sort it").unwrap();

    let missing_token = RemotePushRequest {
        token: "".to_string(),
        repository: "org/macros".to_string(),
        file_name: "sort.bas".to_string(),
    };
    assert!(matches!(
        pane.push_to_remote(&missing_token),
        Err(TaskPaneError::MissingPushField)
    ));
}

#[test]
fn test_push_requires_generated_macro() {
    let pane = setup_pane();

    let request = RemotePushRequest {
        token: "token".to_string(),
        repository: "org/macros".to_string(),
        file_name: "sort.bas".to_string(),
    };
    assert!(matches!(
        pane.push_to_remote(&request),
        Err(TaskPaneError::NoMacroGenerated)
    ));
}

#[test]
fn test_push_renders_instructions_without_network() -> Result<(), Box<dyn std::error::Error>> {
    let mut pane = setup_pane();
    pane.generate_macro("filter the rows")?;

    let request = RemotePushRequest {
        token: "token".to_string(),
        repository: "org/macros".to_string(),
        file_name: "filter.bas".to_string(),
    };
    let message = pane.push_to_remote(&request)?;

    assert!(message.contains("org/macros"));
    assert!(message.contains("filter.bas"));
    assert!(message.contains("manual push"));
    Ok(())
}

#[test]
fn test_quick_actions_reach_the_host_once() -> Result<(), Box<dyn std::error::Error>> {
    let host = MockHost::new();
    let pane = TaskPane::new(
        setup_classifier(),
        host.clone(),
        MockClipboard::default(),
        MockNotifier::default(),
    );

    for action in QuickAction::all() {
        pane.quick_action(action)?;
    }

    assert_eq!(host.applied.lock().unwrap().as_slice(), QuickAction::all());
    Ok(())
}

#[test]
fn test_quick_action_failure_is_propagated() {
    let notifier = MockNotifier::default();
    let pane = TaskPane::new(
        setup_classifier(),
        MockHost::failing(),
        MockClipboard::default(),
        notifier.clone(),
    );

    let result = pane.quick_action(QuickAction::SortAscending);
    assert!(matches!(result, Err(TaskPaneError::Host(_))));
    assert_eq!(notifier.errors.lock().unwrap().len(), 1);
}

#[test]
fn test_insert_instructions_are_informational() {
    let notifier = MockNotifier::default();
    let pane = TaskPane::new(
        setup_classifier(),
        MockHost::new(),
        MockClipboard::default(),
        notifier.clone(),
    );

    pane.insert_into_editor();
    let infos = notifier.infos.lock().unwrap();
    assert_eq!(infos.len(), 1);
    assert!(infos[0].contains("Alt+F11"));
}
