use crate::submission::Submission;
use crate::types::Question;
use crate::verdict::Verdict;

/// AnswerComparator is a strategy trait for review-time comparison.
/// Each implementation handles one answer shape and produces the structured
/// verdict for a single question.
pub trait AnswerComparator: Send + Sync {
    /// Compare a question's expected answers against a normalized submission.
    ///
    /// - `question`: the question, including its choices and expected answers.
    /// - `submission`: the group's response, or the zero-credit stand-in when absent.
    fn compare(&self, question: &Question, submission: &Submission<'_>) -> Verdict;
}
