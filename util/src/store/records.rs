//! Flat persisted records.
//!
//! The seed document mirrors how the quiz platform persists its collections: entities reference
//! each other by id and are joined into a [`marker::types::TutorialQuiz`] graph on hydration.
//! Questions, members, tutorials and responses are stored in the same shape the core consumes.

use marker::types::{Member, Question, Response, Tutorial, TutorialQuizSettings};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CourseRecord {
    pub id: String,
    #[serde(default)]
    pub code: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuizRecord {
    pub id: String,
    pub name: String,
    /// Question ids in quiz order.
    #[serde(default)]
    pub questions: Vec<String>,
    #[serde(default)]
    pub score_by_attempt: Vec<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GroupRecord {
    pub id: String,
    pub name: String,
    /// Member ids.
    #[serde(default)]
    pub members: Vec<String>,
    #[serde(default)]
    pub driver: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TutorialQuizRecord {
    pub id: String,
    pub tutorial: String,
    pub quiz: String,
    /// Group ids.
    #[serde(default)]
    pub groups: Vec<String>,
    #[serde(default)]
    pub settings: TutorialQuizSettings,
}

/// Every collection the store holds, in persisted order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeedDocument {
    #[serde(default)]
    pub courses: Vec<CourseRecord>,
    #[serde(default)]
    pub tutorials: Vec<Tutorial>,
    #[serde(default)]
    pub quizzes: Vec<QuizRecord>,
    #[serde(default)]
    pub questions: Vec<Question>,
    #[serde(default)]
    pub groups: Vec<GroupRecord>,
    #[serde(default)]
    pub members: Vec<Member>,
    #[serde(default)]
    pub responses: Vec<Response>,
    #[serde(default)]
    pub tutorial_quizzes: Vec<TutorialQuizRecord>,
}
