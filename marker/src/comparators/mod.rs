//! # Comparators
//!
//! This module provides the review-time comparators, one per answer shape. Each implements the
//! [`AnswerComparator`] trait and turns a question plus a normalized submission into a
//! [`Verdict`].
//!
//! The available comparators are:
//! - [`choice_comparator`]: per-choice breakdown for multiple choice and multiple select.
//! - [`short_answer_comparator`]: set membership of a single free-text value.
//! - [`code_tracing_comparator`]: per-line breakdown of a traced program.
//!
//! [`verdict_for`] selects the comparator for a question's type.

pub mod choice_comparator;
pub mod code_tracing_comparator;
pub mod short_answer_comparator;

use crate::submission::Submission;
use crate::traits::comparator::AnswerComparator;
use crate::types::{Question, QuestionType};
use crate::verdict::Verdict;
use choice_comparator::ChoiceComparator;
use code_tracing_comparator::CodeTracingComparator;
use short_answer_comparator::ShortAnswerComparator;
use tracing::debug;

/// Returns the comparator for a question type, or `None` when the type is not gradable.
pub fn comparator_for(kind: &QuestionType) -> Option<&'static dyn AnswerComparator> {
    match kind {
        QuestionType::MultipleChoice | QuestionType::MultipleSelect => Some(&ChoiceComparator),
        QuestionType::ShortAnswer => Some(&ShortAnswerComparator),
        QuestionType::CodeTracing => Some(&CodeTracingComparator),
        QuestionType::Unrecognized(_) => None,
    }
}

/// Builds the review verdict for one question.
///
/// Unrecognised question types produce no verdict so the raw response can still be shown.
pub fn verdict_for(question: &Question, submission: &Submission<'_>) -> Option<Verdict> {
    match comparator_for(&question.kind) {
        Some(comparator) => Some(comparator.compare(question, submission)),
        None => {
            debug!(
                question = %question.id,
                kind = question.kind.as_str(),
                "no comparator for question type"
            );
            None
        }
    }
}
