//! # Mark Report Module
//!
//! Projects a [`MarkSheet`] into the two consumer shapes:
//!
//! - [`project_display`]: the aggregated rows unchanged, plus the column headings, for the
//!   interactive marks pages.
//! - [`project_export`]: a flat [`ExportTable`] with a header row, serialized by
//!   [`ExportTable::to_csv`] for download as [`EXPORT_FILENAME`].
//!
//! ## Column contract
//!
//! | Layout         | Columns                                                         |
//! |----------------|-----------------------------------------------------------------|
//! | `TutorialQuiz` | Username, UTORid, Quiz, Tutorial, Group, Mark, `Q<n> [<i>]`...   |
//! | `Course`       | Username, Quiz, Tutorial, Group, Mark                            |
//! | `Student`      | Quiz, Tutorial, Group, Mark                                      |
//!
//! `<n>` is the question number and `<i>` its zero-based position in the quiz.

use crate::aggregate::{MarkRow, MarkSheet, Scope};
use crate::error::MarkerError;
use crate::traits::identity::Identity;
use crate::types::Question;
use serde::Serialize;
use tracing::warn;

/// Attachment filename for every marks export.
pub const EXPORT_FILENAME: &str = "marks.csv";
/// MIME type for every marks export.
pub const EXPORT_CONTENT_TYPE: &str = "text/csv";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportLayout {
    TutorialQuiz,
    Course,
    Student,
}

impl ExportLayout {
    pub fn for_scope(scope: Scope) -> Self {
        match scope {
            Scope::TutorialQuiz => ExportLayout::TutorialQuiz,
            Scope::Course => ExportLayout::Course,
            Scope::Student => ExportLayout::Student,
        }
    }

    /// Header row for this layout. Only the tutorial-quiz layout has question columns.
    pub fn header(&self, questions: &[Question]) -> Vec<String> {
        let fixed: &[&str] = match self {
            ExportLayout::TutorialQuiz => &["Username", "UTORid", "Quiz", "Tutorial", "Group", "Mark"],
            ExportLayout::Course => &["Username", "Quiz", "Tutorial", "Group", "Mark"],
            ExportLayout::Student => &["Quiz", "Tutorial", "Group", "Mark"],
        };
        let mut header: Vec<String> = fixed.iter().map(|s| s.to_string()).collect();
        if *self == ExportLayout::TutorialQuiz {
            header.extend(question_headings(questions));
        }
        header
    }
}

/// A single export cell.
#[derive(Debug, Clone, PartialEq)]
pub enum Cell {
    Text(String),
    Number(f64),
    Empty,
}

impl Cell {
    /// Renders the cell as delimited-text field content. Whole numbers have no decimal point.
    pub fn render(&self) -> String {
        match self {
            Cell::Text(s) => s.clone(),
            Cell::Number(n) if n.is_finite() && n.fract() == 0.0 && n.abs() < 1e15 => {
                format!("{}", *n as i64)
            }
            Cell::Number(n) if n.is_finite() => n.to_string(),
            Cell::Number(_) | Cell::Empty => String::new(),
        }
    }
}

impl From<&str> for Cell {
    fn from(s: &str) -> Self {
        Cell::Text(s.to_string())
    }
}

impl From<String> for Cell {
    fn from(s: String) -> Self {
        Cell::Text(s)
    }
}

impl From<f64> for Cell {
    fn from(n: f64) -> Self {
        Cell::Number(n)
    }
}

impl From<Option<f64>> for Cell {
    fn from(n: Option<f64>) -> Self {
        n.map_or(Cell::Empty, Cell::Number)
    }
}

/// Header plus data rows, every row exactly as wide as the header.
#[derive(Debug, Clone, PartialEq)]
pub struct ExportTable {
    pub header: Vec<String>,
    pub rows: Vec<Vec<Cell>>,
}

impl ExportTable {
    pub fn width(&self) -> usize {
        self.header.len()
    }

    /// Serializes the table, header first, as comma-separated text.
    pub fn to_csv(&self) -> Result<String, MarkerError> {
        let mut writer = csv::Writer::from_writer(Vec::new());
        writer.write_record(&self.header)?;
        for row in &self.rows {
            writer.write_record(row.iter().map(Cell::render))?;
        }
        let bytes = writer
            .into_inner()
            .map_err(|e| MarkerError::Export(e.to_string()))?;
        String::from_utf8(bytes).map_err(|e| MarkerError::Export(e.to_string()))
    }
}

/// `Q<number> [<index>]` for each question, in quiz order.
pub fn question_headings(questions: &[Question]) -> Vec<String> {
    questions
        .iter()
        .enumerate()
        .map(|(i, q)| format!("Q{} [{}]", q.number, i))
        .collect()
}

/// Reads a member's external id, absorbing lookup failures into an empty cell.
fn external_id_or_blank<M: Identity>(member: &M) -> String {
    member.external_id().unwrap_or_else(|e| {
        warn!(username = member.username(), error = %e, "external id unavailable");
        String::new()
    })
}

fn export_row(layout: ExportLayout, row: &MarkRow<'_>) -> Vec<Cell> {
    let mut cells: Vec<Cell> = Vec::new();
    if layout != ExportLayout::Student {
        cells.push(Identity::username(row.member).into());
    }
    if layout == ExportLayout::TutorialQuiz {
        cells.push(external_id_or_blank(row.member).into());
    }
    cells.push(row.quiz.name.as_str().into());
    cells.push(row.tutorial.display_name().into());
    cells.push(row.group.name.as_str().into());
    cells.push(row.score.into());
    if layout == ExportLayout::TutorialQuiz {
        cells.extend(row.group_result.iter().copied().map(Cell::from));
    }
    cells
}

/// Flattens a sheet into an export table using the layout for its scope.
pub fn project_export(sheet: &MarkSheet<'_>) -> ExportTable {
    let layout = ExportLayout::for_scope(sheet.scope);
    ExportTable {
        header: layout.header(sheet.questions.unwrap_or(&[])),
        rows: sheet.rows.iter().map(|row| export_row(layout, row)).collect(),
    }
}

/// Display model for the marks pages: the sheet as aggregated, with its column headings.
#[derive(Debug, Serialize)]
pub struct MarkDisplay<'s, 'a> {
    pub columns: Vec<String>,
    #[serde(flatten)]
    pub sheet: &'s MarkSheet<'a>,
}

pub fn project_display<'s, 'a>(sheet: &'s MarkSheet<'a>) -> MarkDisplay<'s, 'a> {
    MarkDisplay {
        columns: ExportLayout::for_scope(sheet.scope).header(sheet.questions.unwrap_or(&[])),
        sheet,
    }
}
