//! A comparator for code-tracing questions, where **line order matters**.
//!
//! Each expected line is paired with the traced line at the same index. Correctness is read from
//! the `correct` flag recorded on that line when the student traced it; the values are not
//! re-compared here. The submission-time grader in [`crate::grader`] re-compares trimmed values
//! instead, so the two can disagree for the same response.

use crate::submission::Submission;
use crate::traits::comparator::AnswerComparator;
use crate::types::Question;
use crate::verdict::{LineOutcome, Verdict};

/// Produces one [`LineOutcome`] per expected line.
///
/// Traced lines beyond the expected sequence are ignored; missing lines report no value,
/// zero attempts and `correct == false`.
pub struct CodeTracingComparator;

impl AnswerComparator for CodeTracingComparator {
    fn compare(&self, question: &Question, submission: &Submission<'_>) -> Verdict {
        let lines = question
            .answers
            .iter()
            .enumerate()
            .map(|(i, expected)| {
                let traced = submission.line_by_line_summary.get(i);
                LineOutcome {
                    expected: expected.clone(),
                    given: traced.map(|l| l.value.clone()),
                    attempts: traced.map_or(0, |l| l.attempts),
                    correct: traced.is_some_and(|l| l.correct),
                }
            })
            .collect();
        Verdict::Sequence(lines)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::submission::ResponseSlot;
    use crate::types::{LineSummary, QuestionType, Response};

    fn mock_question(lines: &[&str]) -> Question {
        Question {
            id: "q1".to_string(),
            number: 2,
            kind: QuestionType::CodeTracing,
            question: "Trace it".to_string(),
            code: Some("x = 1\ny = 2".to_string()),
            choices: vec![],
            answers: lines.iter().map(|s| s.to_string()).collect(),
            case_sensitive: false,
            submitter: None,
            approved: false,
        }
    }

    fn line(value: &str, attempts: u32, correct: bool) -> LineSummary {
        LineSummary {
            value: value.to_string(),
            attempts,
            correct,
        }
    }

    fn sequence(question: &Question, summary: Option<Vec<LineSummary>>) -> Vec<LineOutcome> {
        let response = Response {
            id: "r1".to_string(),
            question: question.id.clone(),
            line_by_line_summary: summary,
            ..Response::default()
        };
        let view = ResponseSlot::Submitted(&response).normalize();
        match CodeTracingComparator.compare(question, &view) {
            Verdict::Sequence(lines) => lines,
            other => panic!("expected sequence verdict, got {:?}", other),
        }
    }

    #[test]
    fn test_reads_stored_line_flags() {
        let question = mock_question(&["x=1", "y=2"]);
        let lines = sequence(
            &question,
            Some(vec![line("x=1", 1, true), line("y=3", 3, false)]),
        );
        assert_eq!(lines.len(), 2);
        assert!(lines[0].correct);
        assert_eq!(lines[1].given.as_deref(), Some("y=3"));
        assert_eq!(lines[1].attempts, 3);
        assert!(!lines[1].correct);
    }

    #[test]
    fn test_stored_flag_wins_over_value_equality() {
        let question = mock_question(&["x=1"]);
        // value matches but the line was recorded as incorrect
        let lines = sequence(&question, Some(vec![line("x=1", 4, false)]));
        assert!(!lines[0].correct);
        // value differs but the line was recorded as correct
        let lines = sequence(&question, Some(vec![line("x = 1", 1, true)]));
        assert!(lines[0].correct);
    }

    #[test]
    fn test_short_summary_pads_with_absent_lines() {
        let question = mock_question(&["a", "b", "c"]);
        let lines = sequence(&question, Some(vec![line("a", 1, true)]));
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[2].given, None);
        assert_eq!(lines[2].attempts, 0);
        assert!(!lines[2].correct);
    }

    #[test]
    fn test_missing_summary_is_all_absent() {
        let question = mock_question(&["a", "b"]);
        let lines = sequence(&question, None);
        assert!(lines.iter().all(|l| l.given.is_none() && !l.correct));
    }

    #[test]
    fn test_extra_traced_lines_are_ignored() {
        let question = mock_question(&["a"]);
        let lines = sequence(
            &question,
            Some(vec![line("a", 1, true), line("extra", 1, true)]),
        );
        assert_eq!(lines.len(), 1);
    }
}
