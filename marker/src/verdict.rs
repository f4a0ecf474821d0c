//! Review-time verdicts.
//!
//! A [`Verdict`] is the explainable breakdown shown when an instructor reviews a group's
//! response. It is always derived on request and never stored on the question.

use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", content = "outcomes", rename_all = "snake_case")]
pub enum Verdict {
    /// One entry per choice, in the question's choice order.
    Choice(Vec<ChoiceOutcome>),
    Scalar(ScalarOutcome),
    /// One entry per expected line.
    Sequence(Vec<LineOutcome>),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChoiceOutcome {
    pub choice: String,
    pub expected: bool,
    pub given: bool,
    /// `Some(true)` when expected and given, `Some(false)` when they disagree, `None` when
    /// the choice was neither expected nor given.
    pub correct: Option<bool>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScalarOutcome {
    pub expected: Vec<String>,
    pub given: Option<String>,
    pub correct: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LineOutcome {
    pub expected: String,
    pub given: Option<String>,
    pub attempts: u32,
    pub correct: bool,
}
