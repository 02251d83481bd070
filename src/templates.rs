//! The fixed VBA template library.
//!
//! Each [`TemplateFamily`] owns exactly one template body. Bodies are
//! uninterpreted VBA text as far as this crate is concerned; the only
//! processing is the substitution of the user's task description into the
//! `{task}` slot. The description is spliced verbatim, with no escaping —
//! a description containing a VBA quote or comment delimiter will carry it
//! into the output unchanged.

use crate::classifier::TemplateFamily;

/// Slot marker substituted with the user's description at render time.
const TASK_SLOT: &str = "{task}";

const HIGHLIGHT_TEMPLATE: &str = r#"Sub HighlightCells()
    ' Task: {task}
    Dim rng As Range
    Dim cell As Range

    ' Get the selected range or used range
    If Selection.Count > 1 Then
        Set rng = Selection
    Else
        Set rng = ActiveSheet.UsedRange
    End If

    ' Loop through each cell
    For Each cell In rng
        If IsNumeric(cell.Value) Then
            If cell.Value > 100 Then
                cell.Interior.Color = RGB(255, 200, 200) ' Light red
            ElseIf cell.Value > 50 Then
                cell.Interior.Color = RGB(255, 255, 200) ' Light yellow
            End If
        End If
    Next cell

    MsgBox "Highlighting completed!", vbInformation
End Sub"#;

const SORT_TEMPLATE: &str = r#"Sub SortData()
    ' Task: {task}
    Dim ws As Worksheet
    Dim lastRow As Long
    Dim sortRange As Range

    Set ws = ActiveSheet
    lastRow = ws.Cells(ws.Rows.Count, 1).End(xlUp).Row

    ' Define the range to sort
    Set sortRange = ws.Range("A1:Z" & lastRow)

    ' Sort by first column
    sortRange.Sort Key1:=ws.Range("A1"), _
                    Order1:=xlAscending, _
                    Header:=xlYes

    MsgBox "Data sorted successfully!", vbInformation
End Sub"#;

const FILTER_TEMPLATE: &str = r#"Sub FilterData()
    ' Task: {task}
    Dim ws As Worksheet
    Dim lastRow As Long

    Set ws = ActiveSheet
    lastRow = ws.Cells(ws.Rows.Count, 1).End(xlUp).Row

    ' Turn on AutoFilter
    If Not ws.AutoFilterMode Then
        ws.Range("A1").AutoFilter
    End If

    ' Apply filter (example: filter column A for values > 100)
    ws.Range("A1:A" & lastRow).AutoFilter Field:=1, Criteria1:=">100"

    MsgBox "Filter applied!", vbInformation
End Sub"#;

const CHART_TEMPLATE: &str = r#"Sub CreateChart()
    ' Task: {task}
    Dim ws As Worksheet
    Dim chartObj As ChartObject
    Dim dataRange As Range

    Set ws = ActiveSheet
    Set dataRange = Selection

    ' Create a new chart
    Set chartObj = ws.ChartObjects.Add(Left:=300, Top:=50, Width:=400, Height:=300)

    With chartObj.Chart
        .SetSourceData Source:=dataRange
        .ChartType = xlColumnClustered
        .HasTitle = True
        .ChartTitle.Text = "Data Chart"
    End With

    MsgBox "Chart created successfully!", vbInformation
End Sub"#;

const FORMAT_TEMPLATE: &str = r#"Sub FormatRange()
    ' Task: {task}
    Dim rng As Range

    Set rng = Selection

    With rng
        .Font.Name = "Arial"
        .Font.Size = 11
        .Borders.LineStyle = xlContinuous
        .HorizontalAlignment = xlCenter
        .VerticalAlignment = xlCenter

        ' Format header row
        .Rows(1).Font.Bold = True
        .Rows(1).Interior.Color = RGB(68, 114, 196)
        .Rows(1).Font.Color = RGB(255, 255, 255)
    End With

    MsgBox "Formatting applied!", vbInformation
End Sub"#;

/// The fallback body. Interpolates the description twice: once in the task
/// annotation and once in the user-facing `MsgBox` message.
const GENERIC_TEMPLATE: &str = r#"Sub AutoMacro()
    ' Task: {task}
    ' This is a template macro. Customize it based on your needs.

    Dim ws As Worksheet
    Dim rng As Range

    Set ws = ActiveSheet
    Set rng = Selection

    ' Add your custom code here
    MsgBox "Processing: {task}", vbInformation

    ' Example: Loop through selected cells
    Dim cell As Range
    For Each cell In rng
        ' Process each cell
        Debug.Print cell.Address & ": " & cell.Value
    Next cell

    MsgBox "Macro completed!", vbInformation
End Sub"#;

/// Returns the unrendered template body for a family.
pub fn body(family: TemplateFamily) -> &'static str {
    match family {
        TemplateFamily::Highlight => HIGHLIGHT_TEMPLATE,
        TemplateFamily::Sort => SORT_TEMPLATE,
        TemplateFamily::Filter => FILTER_TEMPLATE,
        TemplateFamily::Chart => CHART_TEMPLATE,
        TemplateFamily::Format => FORMAT_TEMPLATE,
        TemplateFamily::Generic => GENERIC_TEMPLATE,
    }
}

/// Renders a family's template by splicing the description into every
/// `{task}` slot. The description itself is never rescanned for slots.
///
/// # Example
/// ```
/// use excelbot::{templates, TemplateFamily};
///
/// let rendered = templates::render(TemplateFamily::Sort, "sort by revenue");
/// assert!(rendered.contains("' Task: sort by revenue"));
/// assert!(rendered.starts_with("Sub SortData()"));
/// ```
pub fn render(family: TemplateFamily, description: &str) -> String {
    body(family).replace(TASK_SLOT, description)
}

/// Manual walkthrough for pasting a generated macro into the VBA editor.
/// Surfaced by the task pane as informational text; there is no programmatic
/// insertion path.
pub const INSERT_INSTRUCTIONS: &str = "To insert this macro into Excel:\n\n\
1. Press Alt+F11 to open VBA Editor\n\
2. Insert > Module\n\
3. Paste the copied macro code\n\
4. Press Alt+F11 to return to Excel\n\
5. Run the macro from Developer > Macros";
