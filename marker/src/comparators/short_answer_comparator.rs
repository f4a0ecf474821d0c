//! A comparator for short-answer questions. The submitted value is compared against the set of
//! accepted answers, folding case unless the question is case sensitive.

use crate::submission::Submission;
use crate::traits::comparator::AnswerComparator;
use crate::types::Question;
use crate::verdict::{ScalarOutcome, Verdict};

/// Set-membership comparison of the first submitted value.
///
/// Short-answer responses are stored list-shaped, but only the first element is meaningful.
pub struct ShortAnswerComparator;

impl AnswerComparator for ShortAnswerComparator {
    fn compare(&self, question: &Question, submission: &Submission<'_>) -> Verdict {
        let given = submission.first_value();
        Verdict::Scalar(ScalarOutcome {
            expected: question.answers.clone(),
            given: given.map(str::to_string),
            correct: given.is_some_and(|g| question.is_answer(g)),
        })
    }
}
