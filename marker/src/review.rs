//! # Review Module
//!
//! Builds the per-group review used for manual adjudication. Every question of the quiz appears
//! exactly once, in quiz order, whether or not the group answered it.

use crate::scorer::{QuestionResult, score_question};
use crate::submission::ResponseSlot;
use crate::types::{Group, Member, Question};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GroupReview<'a> {
    pub group_id: &'a str,
    pub group_name: &'a str,
    pub members: &'a [Member],
    pub questions: Vec<QuestionResult<'a>>,
    /// Sum of the per-question scores.
    pub total: f64,
}

/// Joins a quiz's questions with one group's responses.
///
/// `questions` is expected to be visibility-filtered already. A question with no response gets an
/// [`ResponseSlot::Absent`] entry scoring 0; when several responses reference the same question
/// the first in persisted order is used.
pub fn build_group_review<'a>(questions: &'a [Question], group: &'a Group) -> GroupReview<'a> {
    let questions: Vec<QuestionResult<'a>> = questions
        .iter()
        .map(|q| score_question(q, ResponseSlot::from(group.response_for(&q.id))))
        .collect();
    let total: f64 = questions.iter().map(|r| r.score).sum();

    GroupReview {
        group_id: &group.id,
        group_name: &group.name,
        members: &group.members,
        questions,
        total,
    }
}
