//! A comparator for multiple-choice and multiple-select questions that reports, **per choice**,
//! whether it was expected, whether it was given, and whether the two agree.
//!
//! The breakdown is three-valued: a choice that is neither expected nor given carries no
//! correctness signal and is reported as `None` rather than `false`.

use crate::submission::Submission;
use crate::traits::comparator::AnswerComparator;
use crate::types::Question;
use crate::verdict::{ChoiceOutcome, Verdict};

/// Produces one [`ChoiceOutcome`] per choice, preserving the question's choice order.
pub struct ChoiceComparator;

impl AnswerComparator for ChoiceComparator {
    fn compare(&self, question: &Question, submission: &Submission<'_>) -> Verdict {
        let outcomes = question
            .choices
            .iter()
            .map(|choice| {
                let expected = question.is_answer(choice);
                let given = submission.selected(choice);
                ChoiceOutcome {
                    choice: choice.clone(),
                    expected,
                    given,
                    correct: match (expected, given) {
                        (true, true) => Some(true),
                        (false, false) => None,
                        _ => Some(false),
                    },
                }
            })
            .collect();
        Verdict::Choice(outcomes)
    }
}
