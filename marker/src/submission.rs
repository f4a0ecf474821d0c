//! # Submission Slots
//!
//! A group may or may not have answered a given question. [`ResponseSlot`] makes that
//! explicit, and [`ResponseSlot::normalize`] is the single place where "no response" and
//! "response with missing fields" turn into zero-credit defaults. Comparators and scorers only
//! ever see the normalized [`Submission`] view.

use crate::types::{LineSummary, Response};
use serde::Serialize;

/// Either the response a group submitted for a question, or nothing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ResponseSlot<'a> {
    Submitted(&'a Response),
    Absent,
}

impl<'a> From<Option<&'a Response>> for ResponseSlot<'a> {
    fn from(response: Option<&'a Response>) -> Self {
        match response {
            Some(r) => ResponseSlot::Submitted(r),
            None => ResponseSlot::Absent,
        }
    }
}

impl<'a> ResponseSlot<'a> {
    pub fn is_absent(&self) -> bool {
        matches!(self, ResponseSlot::Absent)
    }

    /// Resolve the slot into a uniform, borrowed view with defaults filled in.
    pub fn normalize(self) -> Submission<'a> {
        match self {
            ResponseSlot::Submitted(r) => Submission {
                response_id: Some(r.id.as_str()),
                answer: &r.answer,
                line_by_line_summary: r.line_by_line_summary.as_deref().unwrap_or(&[]),
                points: r.points_or_zero(),
                correct: r.correct,
                attempts: r.attempts.unwrap_or(0),
                submitted: true,
            },
            ResponseSlot::Absent => Submission::absent(),
        }
    }
}

/// Normalized view of a (possibly absent) response.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Submission<'a> {
    pub response_id: Option<&'a str>,
    pub answer: &'a [String],
    pub line_by_line_summary: &'a [LineSummary],
    pub points: f64,
    pub correct: bool,
    pub attempts: u32,
    /// False when the view stands in for a missing response.
    pub submitted: bool,
}

impl Submission<'_> {
    pub fn absent() -> Self {
        Submission {
            response_id: None,
            answer: &[],
            line_by_line_summary: &[],
            points: 0.0,
            correct: false,
            attempts: 0,
            submitted: false,
        }
    }

    /// Whether `choice` is among the submitted values.
    pub fn selected(&self, choice: &str) -> bool {
        self.answer.iter().any(|a| a == choice)
    }

    /// First submitted value; short-answer responses are list-shaped but single-valued.
    pub fn first_value(&self) -> Option<&str> {
        self.answer.first().map(String::as_str)
    }
}
