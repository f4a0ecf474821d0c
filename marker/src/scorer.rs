//! # Scorer Module
//!
//! This module turns one question and its (possibly absent) response into a
//! [`QuestionResult`]: the normalized submission, the numeric score and the review verdict.
//! It also provides [`sum_points`], the single summation used for every group total.

use crate::comparators::verdict_for;
use crate::submission::{ResponseSlot, Submission};
use crate::types::{Question, Response};
use crate::verdict::Verdict;
use serde::Serialize;

/// The scored view of one question for one group.
///
/// `results` is `None` for question types without a comparator; it serializes as `null` so the
/// raw response can still be rendered.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QuestionResult<'a> {
    pub question: &'a Question,
    pub response: Submission<'a>,
    pub score: f64,
    pub results: Option<Verdict>,
}

/// Scores a single question.
///
/// # Arguments
///
/// * `question` - The question being reviewed.
/// * `slot` - The group's response to it, or [`ResponseSlot::Absent`].
///
/// # Returns
///
/// A [`QuestionResult`] whose `score` is the response's points, or 0 when the response is absent
/// or carries no usable points.
///
/// # Example
///
/// ```
/// use marker::scorer::score_question;
/// use marker::submission::ResponseSlot;
/// use marker::types::{Question, QuestionType};
///
/// let question = Question {
///     id: "q1".to_string(),
///     number: 1,
///     kind: QuestionType::MultipleChoice,
///     question: "Pick one".to_string(),
///     code: None,
///     choices: vec!["A".to_string(), "B".to_string()],
///     answers: vec!["A".to_string()],
///     case_sensitive: false,
///     submitter: None,
///     approved: false,
/// };
///
/// let result = score_question(&question, ResponseSlot::Absent);
/// assert_eq!(result.score, 0.0);
/// assert!(result.results.is_some());
/// ```
pub fn score_question<'a>(question: &'a Question, slot: ResponseSlot<'a>) -> QuestionResult<'a> {
    let response = slot.normalize();
    let results = verdict_for(question, &response);
    QuestionResult {
        question,
        score: response.points,
        response,
        results,
    }
}

/// Sums the points of a set of responses.
///
/// Missing and non-finite point values count as 0, so an empty set sums to 0 and the result is
/// never `NaN`.
pub fn sum_points<'a, I>(responses: I) -> f64
where
    I: IntoIterator<Item = &'a Response>,
{
    responses.into_iter().map(Response::points_or_zero).sum()
}
