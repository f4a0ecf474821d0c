//! # Grader Module
//!
//! Submission-time grading. When a response is added or edited, [`grade`] decides the single
//! `correct` flag that is persisted with it. This is deliberately separate from the review-time
//! verdicts in [`crate::comparators`]: it answers "is the whole response right", with no partial
//! credit, while the verdicts explain each choice or line.
//!
//! | Type              | Rule                                                                 |
//! |-------------------|----------------------------------------------------------------------|
//! | multiple choice/select | sorted expected == sorted given                                 |
//! | short answer      | any given value is an accepted answer (case folded unless sensitive) |
//! | code tracing      | expected lines == traced values, trimmed, in order                   |

use crate::types::{LineSummary, Question, QuestionType, Response};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// The body of an add/edit response request.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResponseBody {
    pub question: String,
    #[serde(default)]
    pub answer: Vec<String>,
    #[serde(default)]
    pub line_by_line_summary: Option<Vec<LineSummary>>,
    #[serde(default)]
    pub points: Option<f64>,
    #[serde(default)]
    pub attempts: Option<u32>,
}

/// Decides whether a submission is correct.
///
/// Returns `None` for unrecognised question types; the caller keeps whatever flag the
/// response already had.
pub fn grade(
    question: &Question,
    answer: &[String],
    line_by_line_summary: Option<&[LineSummary]>,
) -> Option<bool> {
    match &question.kind {
        QuestionType::MultipleChoice | QuestionType::MultipleSelect => {
            Some(sorted(&question.answers) == sorted(answer))
        }
        QuestionType::ShortAnswer => {
            let fold = |s: &String| {
                if question.case_sensitive {
                    s.clone()
                } else {
                    s.to_lowercase()
                }
            };
            let accepted: Vec<String> = question.answers.iter().map(fold).collect();
            Some(answer.iter().map(fold).any(|given| accepted.contains(&given)))
        }
        QuestionType::CodeTracing => {
            let traced = line_by_line_summary.unwrap_or(&[]);
            Some(
                question.answers.len() == traced.len()
                    && question
                        .answers
                        .iter()
                        .zip(traced)
                        .all(|(expected, line)| *expected == line.value.trim()),
            )
        }
        QuestionType::Unrecognized(_) => None,
    }
}

/// Re-grades a stored response against its question.
///
/// Grading the same persisted state twice yields the same flag.
pub fn regrade(question: &Question, response: &mut Response) {
    if let Some(correct) = grade(
        question,
        &response.answer,
        response.line_by_line_summary.as_deref(),
    ) {
        response.correct = correct;
    }
}

/// Points for a correct answer on attempt `attempts` under a score schedule.
///
/// `schedule[i]` is the score for a correct answer on the (i + 1)th attempt. Attempts past the
/// end of the schedule earn the last entry; an attempt count of 0 is treated as the first attempt.
pub fn award_points(schedule: &[f64], attempts: u32, correct: bool) -> f64 {
    if !correct {
        return 0.0;
    }
    let Some(last) = schedule.len().checked_sub(1) else {
        return 0.0;
    };
    let index = (attempts.saturating_sub(1) as usize).min(last);
    schedule[index]
}

/// Builds and grades a new response for `group_id`.
///
/// When the body carries no `points` and `schedule` is non-empty, the points are awarded from
/// the schedule for the body's attempt count.
pub fn new_response(
    id: impl Into<String>,
    question: &Question,
    group_id: &str,
    body: ResponseBody,
    schedule: &[f64],
) -> Response {
    let explicit_points = body.points.is_some();
    let mut response = Response {
        id: id.into(),
        question: body.question.clone(),
        group: Some(group_id.to_string()),
        ..Response::default()
    };
    apply_body(&mut response, question, body);

    if !explicit_points && !schedule.is_empty() {
        response.points = Some(award_points(
            schedule,
            response.attempts.unwrap_or(0),
            response.correct,
        ));
    }
    response
}

/// Applies an edit to an existing response.
///
/// The previous `answer` is always cleared before the body is applied; the line summary,
/// points and attempts are only replaced when the body carries them. The score schedule is
/// never consulted here, so stored points survive an edit that does not set them.
pub fn apply_edit(
    response: &mut Response,
    question: &Question,
    group_id: &str,
    body: ResponseBody,
) {
    response.group = Some(group_id.to_string());
    response.answer.clear();
    apply_body(response, question, body);
}

fn apply_body(response: &mut Response, question: &Question, body: ResponseBody) {
    response.question = body.question;
    response.answer = body.answer;
    if body.line_by_line_summary.is_some() {
        response.line_by_line_summary = body.line_by_line_summary;
    }
    if body.points.is_some() {
        response.points = body.points;
    }
    if body.attempts.is_some() {
        response.attempts = body.attempts;
    }

    regrade(question, response);

    debug!(
        response = %response.id,
        question = %question.id,
        correct = response.correct,
        "graded response"
    );
}

fn sorted(values: &[String]) -> Vec<&str> {
    let mut v: Vec<&str> = values.iter().map(String::as_str).collect();
    v.sort_unstable();
    v
}
