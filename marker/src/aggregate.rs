//! # Aggregate Module
//!
//! Folds group responses into mark rows for the three export scopes:
//!
//! - [`by_tutorial_quiz`]: every member of every group in one tutorial-quiz.
//! - [`by_course`]: the same rows, flattened across a caller-selected set of tutorial-quizzes.
//! - [`by_student`]: one row per tutorial-quiz of a course in which the student has a group.
//!
//! Scoring is per group. Every member of a group receives an identical row carrying the shared
//! group score.
//!
//! Rows borrow the hydrated graph; nothing here mutates it.

use crate::scorer::sum_points;
use crate::types::{Group, Member, Question, Quiz, Response, Tutorial, TutorialQuiz};
use serde::{Serialize, Serializer};
use tracing::debug;

/// The aggregation granularity a [`MarkSheet`] was built for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Scope {
    Student,
    TutorialQuiz,
    Course,
}

/// One member's mark for one tutorial-quiz.
#[derive(Debug, Clone, PartialEq)]
pub struct MarkRow<'a> {
    pub tutorial_quiz_id: &'a str,
    pub tutorial: &'a Tutorial,
    pub quiz: &'a Quiz,
    pub group: &'a Group,
    pub member: &'a Member,
    pub score: f64,
    /// Points per question in question order; `None` where the group did not respond.
    pub group_result: Vec<Option<f64>>,
}

#[derive(Serialize)]
struct NamedRef<'a> {
    id: &'a str,
    name: &'a str,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct RowView<'a> {
    tutorial_quiz: &'a str,
    tutorial: NamedRef<'a>,
    quiz: NamedRef<'a>,
    group: NamedRef<'a>,
    member: &'a Member,
    score: f64,
    group_result: &'a [Option<f64>],
}

impl Serialize for MarkRow<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        RowView {
            tutorial_quiz: self.tutorial_quiz_id,
            tutorial: NamedRef {
                id: &self.tutorial.id,
                name: self.tutorial.display_name(),
            },
            quiz: NamedRef {
                id: &self.quiz.id,
                name: &self.quiz.name,
            },
            group: NamedRef {
                id: &self.group.id,
                name: &self.group.name,
            },
            member: self.member,
            score: self.score,
            group_result: &self.group_result,
        }
        .serialize(serializer)
    }
}

/// The result of one aggregation: ordered rows plus their grand total.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MarkSheet<'a> {
    pub scope: Scope,
    /// Question columns, present only for the single tutorial-quiz scope.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub questions: Option<&'a [Question]>,
    pub rows: Vec<MarkRow<'a>>,
    pub total: f64,
}

impl<'a> MarkSheet<'a> {
    fn new(scope: Scope, questions: Option<&'a [Question]>, rows: Vec<MarkRow<'a>>) -> Self {
        let total: f64 = rows.iter().map(|r| r.score).sum();
        debug!(?scope, rows = rows.len(), total, "aggregated marks");
        MarkSheet {
            scope,
            questions,
            rows,
            total,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Sum of the group's response points. Independent of how many questions were answered.
pub fn group_score(group: &Group) -> f64 {
    sum_points(&group.responses)
}

/// Per-question points for a group, one entry per question in question order.
pub fn group_result(questions: &[Question], group: &Group) -> Vec<Option<f64>> {
    questions
        .iter()
        .map(|q| group.response_for(&q.id).map(Response::points_or_zero))
        .collect()
}

fn row<'a>(tq: &'a TutorialQuiz, group: &'a Group, member: &'a Member) -> MarkRow<'a> {
    MarkRow {
        tutorial_quiz_id: &tq.id,
        tutorial: &tq.tutorial,
        quiz: &tq.quiz,
        group,
        member,
        score: group_score(group),
        group_result: group_result(&tq.quiz.questions, group),
    }
}

fn tutorial_quiz_rows<'a>(tq: &'a TutorialQuiz) -> impl Iterator<Item = MarkRow<'a>> + 'a {
    tq.groups.iter().flat_map(move |group| {
        group
            .members
            .iter()
            .map(move |member| row(tq, group, member))
    })
}

/// Marks for every member of every group in one tutorial-quiz.
///
/// A tutorial-quiz with no groups yields an empty sheet; a group with no responses yields rows
/// scored 0.
pub fn by_tutorial_quiz(tq: &TutorialQuiz) -> MarkSheet<'_> {
    MarkSheet::new(
        Scope::TutorialQuiz,
        Some(tq.quiz.questions.as_slice()),
        tutorial_quiz_rows(tq).collect(),
    )
}

/// Marks across a caller-selected set of tutorial-quizzes, in the order supplied.
pub fn by_course<'a, I>(tutorial_quizzes: I) -> MarkSheet<'a>
where
    I: IntoIterator<Item = &'a TutorialQuiz>,
{
    let rows = tutorial_quizzes
        .into_iter()
        .flat_map(tutorial_quiz_rows)
        .collect();
    MarkSheet::new(Scope::Course, None, rows)
}

/// One student's marks across every tutorial-quiz of a course.
///
/// Tutorial-quizzes belonging to other courses, and those where the student is in no group, are
/// skipped. If the student appears in several groups of one tutorial-quiz, the row is labelled
/// with the first of them and scores the points of all of them.
pub fn by_student<'a, I>(course_id: &str, tutorial_quizzes: I, student_id: &str) -> MarkSheet<'a>
where
    I: IntoIterator<Item = &'a TutorialQuiz>,
{
    let rows = tutorial_quizzes
        .into_iter()
        .filter(|tq| tq.tutorial.course == course_id)
        .filter_map(|tq| {
            let mut groups = tq.groups.iter().filter(|g| g.has_member(student_id));
            let first = groups.next()?;
            let member = first.members.iter().find(|m| m.id == student_id)?;
            let mut mark = row(tq, first, member);
            mark.score += groups.map(group_score).sum::<f64>();
            Some(mark)
        })
        .collect();
    MarkSheet::new(Scope::Student, None, rows)
}
