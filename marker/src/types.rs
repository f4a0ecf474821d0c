//! # Types Module
//!
//! This module defines the hydrated entity graph the grading core works on:
//! tutorial-quiz → quiz → questions, and tutorial-quiz → groups → members/responses.
//!
//! These types are read-only inputs to grading and aggregation. They are produced by the
//! hydration collaborator (see the `util` crate) and are never mutated by review or
//! aggregation code; only the submission path in [`crate::grader`] edits a [`Response`].

use crate::error::MarkerError;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Attribute key under which the identity provider stores a member's UTORid.
///
/// The value is itself JSON encoded (usually a quoted string).
pub const EXTERNAL_ID_ATTRIBUTE: &str = "urn:oid:1.3.6.1.4.1.15465.3.1.8";

/// The closed set of question types the grader understands.
///
/// Persisted type strings that do not match a known type are carried in
/// [`QuestionType::Unrecognized`] so the raw response can still be rendered.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum QuestionType {
    MultipleChoice,
    MultipleSelect,
    ShortAnswer,
    CodeTracing,
    Unrecognized(String),
}

impl QuestionType {
    pub fn as_str(&self) -> &str {
        match self {
            QuestionType::MultipleChoice => "multiple choice",
            QuestionType::MultipleSelect => "multiple select",
            QuestionType::ShortAnswer => "short answer",
            QuestionType::CodeTracing => "code tracing",
            QuestionType::Unrecognized(raw) => raw,
        }
    }
}

impl From<String> for QuestionType {
    fn from(raw: String) -> Self {
        match raw.as_str() {
            "multiple choice" => QuestionType::MultipleChoice,
            "multiple select" => QuestionType::MultipleSelect,
            "short answer" => QuestionType::ShortAnswer,
            "code tracing" => QuestionType::CodeTracing,
            _ => QuestionType::Unrecognized(raw),
        }
    }
}

impl From<QuestionType> for String {
    fn from(kind: QuestionType) -> Self {
        match kind {
            QuestionType::Unrecognized(raw) => raw,
            known => known.as_str().to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Question {
    pub id: String,
    pub number: u32,
    #[serde(rename = "type")]
    pub kind: QuestionType,
    #[serde(default)]
    pub question: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    #[serde(default)]
    pub choices: Vec<String>,
    /// Expected values. Choice values for choice types, accepted strings for short answer,
    /// one entry per traced line for code tracing.
    #[serde(default)]
    pub answers: Vec<String>,
    #[serde(default)]
    pub case_sensitive: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub submitter: Option<String>,
    #[serde(default)]
    pub approved: bool,
}

impl Question {
    /// Whether `value` is one of this question's expected answers.
    ///
    /// Short-answer questions fold case unless `case_sensitive` is set; every other type
    /// compares exactly.
    pub fn is_answer(&self, value: &str) -> bool {
        match self.kind {
            QuestionType::ShortAnswer if !self.case_sensitive => {
                let folded = value.to_lowercase();
                self.answers.iter().any(|a| a.to_lowercase() == folded)
            }
            _ => self.answers.iter().any(|a| a == value),
        }
    }

    /// Instructor questions are always visible; student-submitted ones only once approved.
    pub fn is_visible(&self) -> bool {
        self.submitter.is_none() || self.approved
    }
}

/// One traced line of a code-tracing response.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LineSummary {
    #[serde(default)]
    pub value: String,
    #[serde(default)]
    pub attempts: u32,
    #[serde(default)]
    pub correct: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Response {
    pub id: String,
    pub question: String,
    #[serde(default)]
    pub group: Option<String>,
    #[serde(default)]
    pub answer: Vec<String>,
    #[serde(default)]
    pub line_by_line_summary: Option<Vec<LineSummary>>,
    #[serde(default)]
    pub points: Option<f64>,
    #[serde(default)]
    pub correct: bool,
    #[serde(default)]
    pub attempts: Option<u32>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Response {
    /// Whether `choice` was selected in this response.
    pub fn is_answer(&self, choice: &str) -> bool {
        self.answer.iter().any(|a| a == choice)
    }

    /// Points awarded, treating a missing or non-finite value as zero.
    pub fn points_or_zero(&self) -> f64 {
        self.points.filter(|p| p.is_finite()).unwrap_or(0.0)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersonName {
    #[serde(default)]
    pub first: String,
    #[serde(default)]
    pub last: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Member {
    pub id: String,
    #[serde(default)]
    pub name: PersonName,
    pub username: String,
    #[serde(default, skip_serializing)]
    pub attributes: Option<HashMap<String, String>>,
}

impl Member {
    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn display_name(&self) -> String {
        format!("{} {}", self.name.first, self.name.last)
            .trim()
            .to_string()
    }

    /// Reads the member's UTORid from the identity attributes.
    ///
    /// A member without attributes has no external id and yields an empty string. When
    /// attributes exist but the key is missing or its value is not valid JSON, an
    /// [`MarkerError::InvalidAttribute`] is returned for the caller to absorb.
    pub fn external_id(&self) -> Result<String, MarkerError> {
        let Some(attributes) = &self.attributes else {
            return Ok(String::new());
        };
        let raw = attributes
            .get(EXTERNAL_ID_ATTRIBUTE)
            .ok_or_else(|| self.invalid_attribute("attribute missing"))?;
        let value: serde_json::Value = serde_json::from_str(raw)
            .map_err(|e| self.invalid_attribute(&format!("not valid JSON ({e})")))?;
        Ok(match value {
            serde_json::Value::String(s) => s,
            serde_json::Value::Null => String::new(),
            other => other.to_string(),
        })
    }

    fn invalid_attribute(&self, reason: &str) -> MarkerError {
        MarkerError::InvalidAttribute {
            member: self.id.clone(),
            key: EXTERNAL_ID_ATTRIBUTE.to_string(),
            reason: reason.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Group {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub members: Vec<Member>,
    #[serde(default)]
    pub responses: Vec<Response>,
    /// Turn-taking only; plays no part in grading.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub driver: Option<String>,
}

impl Group {
    pub fn has_member(&self, member_id: &str) -> bool {
        self.members.iter().any(|m| m.id == member_id)
    }

    /// First response (in persisted order) submitted for `question_id`.
    pub fn response_for(&self, question_id: &str) -> Option<&Response> {
        self.responses.iter().find(|r| r.question == question_id)
    }

    /// Integer value of the group name, used to order groups on the conduct page.
    ///
    /// The name is read as a number and truncated toward zero, so `"3.7"` orders as 3 and
    /// `"1e2"` as 100. Non-numeric names order as 0.
    pub fn ordinal(&self) -> i64 {
        self.name
            .trim()
            .parse::<f64>()
            .ok()
            .filter(|n| n.is_finite())
            .map_or(0, |n| n.trunc() as i64)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tutorial {
    pub id: String,
    pub course: String,
    pub number: String,
}

impl Tutorial {
    pub fn display_name(&self) -> &str {
        &self.number
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Quiz {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub questions: Vec<Question>,
    /// Score for a correct answer on the (i + 1)th attempt.
    #[serde(default)]
    pub score_by_attempt: Vec<f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TutorialQuizSettings {
    #[serde(default)]
    pub published: bool,
    #[serde(default)]
    pub active: bool,
    #[serde(default)]
    pub archived: bool,
    #[serde(default)]
    pub allocate_members: Option<String>,
    #[serde(default)]
    pub max_members_per_group: Option<u32>,
}

/// A settings field that a bulk update may name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SettingsField {
    Published,
    Active,
    Archived,
    AllocateMembers,
    MaxMembersPerGroup,
    /// Any other name; ignored.
    #[serde(other)]
    Unknown,
}

/// A partial settings update applied to several tutorial-quizzes at once.
///
/// Only the fields listed in `update` are written. The status flags are read for truthiness,
/// so a listed flag that is absent, `null`, `false`, `0` or `""` turns it off and anything
/// else turns it on. A listed `allocateMembers` or `maxMembersPerGroup` without a value is left
/// unchanged.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SettingsUpdate {
    #[serde(default)]
    pub update: Vec<SettingsField>,
    #[serde(default)]
    pub published: Option<serde_json::Value>,
    #[serde(default)]
    pub active: Option<serde_json::Value>,
    #[serde(default)]
    pub archived: Option<serde_json::Value>,
    #[serde(default)]
    pub allocate_members: Option<String>,
    #[serde(default)]
    pub max_members_per_group: Option<u32>,
}

impl SettingsUpdate {
    pub fn apply(&self, settings: &mut TutorialQuizSettings) {
        for field in &self.update {
            match field {
                SettingsField::Published => settings.published = truthy(&self.published),
                SettingsField::Active => settings.active = truthy(&self.active),
                SettingsField::Archived => settings.archived = truthy(&self.archived),
                SettingsField::AllocateMembers => {
                    if let Some(value) = &self.allocate_members {
                        settings.allocate_members = Some(value.clone());
                    }
                }
                SettingsField::MaxMembersPerGroup => {
                    if let Some(value) = self.max_members_per_group {
                        settings.max_members_per_group = Some(value);
                    }
                }
                SettingsField::Unknown => {}
            }
        }
    }
}

fn truthy(value: &Option<serde_json::Value>) -> bool {
    match value {
        None | Some(serde_json::Value::Null) => false,
        Some(serde_json::Value::Bool(b)) => *b,
        Some(serde_json::Value::Number(n)) => n.as_f64().is_some_and(|n| n != 0.0),
        Some(serde_json::Value::String(s)) => !s.is_empty(),
        Some(_) => true,
    }
}

/// One scheduled instance of a quiz in a tutorial section, fully hydrated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TutorialQuiz {
    pub id: String,
    pub tutorial: Tutorial,
    pub quiz: Quiz,
    #[serde(default)]
    pub groups: Vec<Group>,
    #[serde(default)]
    pub settings: TutorialQuizSettings,
}
