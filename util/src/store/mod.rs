//! In-memory quiz store and hydration.
//!
//! [`QuizStore`] owns the flat persisted collections and joins them into the
//! [`TutorialQuiz`] graphs the grading core consumes. Hydration applies the platform's
//! pre-conditions so the core never has to:
//!
//! - questions submitted by students are only included once approved;
//! - group members are ordered by first name, then last name;
//! - group responses are restricted to the quiz's visible questions.
//!
//! Any id that cannot be resolved fails the whole request with
//! [`MarkerError::MissingInput`].

pub mod error;
pub mod records;

pub use error::StoreError;
pub use records::{CourseRecord, GroupRecord, QuizRecord, SeedDocument, TutorialQuizRecord};

use chrono::Utc;
use marker::error::MarkerError;
use marker::grader::{self, ResponseBody};
use marker::types::{
    Group, Member, Question, Quiz, Response, SettingsUpdate, Tutorial, TutorialQuiz,
    TutorialQuizSettings,
};
use std::path::Path;
use tokio::sync::RwLock;
use tracing::{debug, info};
use uuid::Uuid;

/// Largest seed document accepted by [`QuizStore::from_seed_file`].
pub const MAX_SEED_BYTES: u64 = 8 * 1024 * 1024;

#[derive(Debug, Default)]
pub struct QuizStore {
    data: RwLock<SeedDocument>,
}

impl QuizStore {
    pub fn new(document: SeedDocument) -> Self {
        Self {
            data: RwLock::new(document),
        }
    }

    /// Loads a store from a JSON seed document on disk.
    pub async fn from_seed_file(path: impl AsRef<Path>) -> Result<Self, StoreError> {
        let path = path.as_ref();
        let size = tokio::fs::metadata(path).await?.len();
        if size > MAX_SEED_BYTES {
            return Err(StoreError::TooLarge {
                size,
                limit: MAX_SEED_BYTES,
            });
        }
        let raw = tokio::fs::read_to_string(path).await?;
        let document: SeedDocument = serde_json::from_str(&raw)?;
        info!(
            path = %path.display(),
            tutorial_quizzes = document.tutorial_quizzes.len(),
            responses = document.responses.len(),
            "loaded seed document"
        );
        Ok(Self::new(document))
    }

    /// A copy of every collection, in persisted order.
    pub async fn snapshot(&self) -> SeedDocument {
        self.data.read().await.clone()
    }

    /// One tutorial-quiz of a course, fully hydrated.
    pub async fn tutorial_quiz(
        &self,
        course_id: &str,
        tutorial_quiz_id: &str,
    ) -> Result<TutorialQuiz, StoreError> {
        let data = self.data.read().await;
        let record = data.tutorial_quiz_record(course_id, tutorial_quiz_id)?;
        Ok(data.hydrate(record)?)
    }

    /// Every tutorial-quiz whose tutorial belongs to `course_id`, in persisted order.
    pub async fn course_tutorial_quizzes(
        &self,
        course_id: &str,
    ) -> Result<Vec<TutorialQuiz>, StoreError> {
        let data = self.data.read().await;
        data.course(course_id)?;
        let hydrated = data
            .tutorial_quizzes
            .iter()
            .filter(|tq| data.belongs_to(tq, course_id))
            .map(|tq| data.hydrate(tq))
            .collect::<Result<Vec<_>, _>>()?;
        debug!(course = course_id, count = hydrated.len(), "hydrated course tutorial-quizzes");
        Ok(hydrated)
    }

    /// The selected tutorial-quizzes of a course, in persisted order.
    ///
    /// Ids that do not name a tutorial-quiz of this course are skipped.
    pub async fn selected_tutorial_quizzes(
        &self,
        course_id: &str,
        ids: &[String],
    ) -> Result<Vec<TutorialQuiz>, StoreError> {
        let data = self.data.read().await;
        data.course(course_id)?;
        let hydrated = data
            .tutorial_quizzes
            .iter()
            .filter(|tq| ids.contains(&tq.id) && data.belongs_to(tq, course_id))
            .map(|tq| data.hydrate(tq))
            .collect::<Result<Vec<_>, _>>()?;
        if hydrated.len() < ids.len() {
            debug!(
                course = course_id,
                requested = ids.len(),
                found = hydrated.len(),
                "some selected tutorial-quizzes were not found"
            );
        }
        Ok(hydrated)
    }

    /// A student of a course. The course must exist.
    pub async fn student(&self, course_id: &str, student_id: &str) -> Result<Member, StoreError> {
        let data = self.data.read().await;
        data.course(course_id)?;
        Ok(data.member(student_id)?.clone())
    }

    /// Creates and grades a response for a group of a tutorial-quiz.
    pub async fn add_response(
        &self,
        course_id: &str,
        tutorial_quiz_id: &str,
        group_id: &str,
        body: ResponseBody,
    ) -> Result<Response, StoreError> {
        let mut data = self.data.write().await;
        let (question, schedule) =
            data.submission_target(course_id, tutorial_quiz_id, group_id, &body.question)?;

        let mut response = grader::new_response(
            Uuid::new_v4().to_string(),
            &question,
            group_id,
            body,
            &schedule,
        );
        response.updated_at = Some(Utc::now());
        data.responses.push(response.clone());

        info!(
            response = %response.id,
            group = group_id,
            question = %question.id,
            correct = response.correct,
            "response added"
        );
        Ok(response)
    }

    /// Applies an edit to an existing response of a group and re-grades it.
    pub async fn edit_response(
        &self,
        course_id: &str,
        tutorial_quiz_id: &str,
        group_id: &str,
        response_id: &str,
        body: ResponseBody,
    ) -> Result<Response, StoreError> {
        let mut data = self.data.write().await;
        let (question, _) =
            data.submission_target(course_id, tutorial_quiz_id, group_id, &body.question)?;

        let response = data
            .responses
            .iter_mut()
            .find(|r| r.id == response_id && r.group.as_deref() == Some(group_id))
            .ok_or_else(|| MarkerError::missing("response", response_id))?;

        grader::apply_edit(response, &question, group_id, body);
        response.updated_at = Some(Utc::now());

        info!(
            response = response_id,
            group = group_id,
            correct = response.correct,
            "response edited"
        );
        Ok(response.clone())
    }

    /// Replaces a tutorial-quiz's settings and returns the hydrated result.
    pub async fn update_settings(
        &self,
        course_id: &str,
        tutorial_quiz_id: &str,
        settings: TutorialQuizSettings,
    ) -> Result<TutorialQuiz, StoreError> {
        let mut data = self.data.write().await;
        data.tutorial_quiz_record(course_id, tutorial_quiz_id)?;

        let record = data
            .tutorial_quizzes
            .iter_mut()
            .find(|tq| tq.id == tutorial_quiz_id)
            .ok_or_else(|| MarkerError::missing("tutorial-quiz", tutorial_quiz_id))?;

        log_status_change(tutorial_quiz_id, &record.settings, &settings);
        record.settings = settings;

        let record = record.clone();
        Ok(data.hydrate(&record)?)
    }

    /// Applies one partial update to several tutorial-quizzes of a course.
    ///
    /// Ids that do not name a tutorial-quiz of this course are skipped. Returns the updated
    /// tutorial-quizzes, hydrated, in persisted order.
    pub async fn update_many_settings(
        &self,
        course_id: &str,
        ids: &[String],
        update: &SettingsUpdate,
    ) -> Result<Vec<TutorialQuiz>, StoreError> {
        let mut data = self.data.write().await;
        data.course(course_id)?;

        let selected: Vec<String> = data
            .tutorial_quizzes
            .iter()
            .filter(|tq| ids.contains(&tq.id) && data.belongs_to(tq, course_id))
            .map(|tq| tq.id.clone())
            .collect();

        for record in data
            .tutorial_quizzes
            .iter_mut()
            .filter(|tq| selected.contains(&tq.id))
        {
            let mut settings = record.settings.clone();
            update.apply(&mut settings);
            log_status_change(&record.id, &record.settings, &settings);
            record.settings = settings;
        }

        info!(
            course = course_id,
            requested = ids.len(),
            updated = selected.len(),
            "bulk tutorial-quiz update"
        );

        let hydrated = data
            .tutorial_quizzes
            .iter()
            .filter(|tq| selected.contains(&tq.id))
            .map(|tq| data.hydrate(tq))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(hydrated)
    }
}

fn log_status_change(
    tutorial_quiz_id: &str,
    before: &TutorialQuizSettings,
    after: &TutorialQuizSettings,
) {
    if before.published != after.published
        || before.active != after.active
        || before.archived != after.archived
    {
        info!(
            tutorial_quiz = tutorial_quiz_id,
            published = after.published,
            active = after.active,
            archived = after.archived,
            "tutorial-quiz status changed"
        );
    }
}

impl SeedDocument {
    fn course(&self, id: &str) -> Result<&CourseRecord, MarkerError> {
        self.courses
            .iter()
            .find(|c| c.id == id)
            .ok_or_else(|| MarkerError::missing("course", id))
    }

    fn tutorial(&self, id: &str) -> Result<&Tutorial, MarkerError> {
        self.tutorials
            .iter()
            .find(|t| t.id == id)
            .ok_or_else(|| MarkerError::missing("tutorial", id))
    }

    fn member(&self, id: &str) -> Result<&Member, MarkerError> {
        self.members
            .iter()
            .find(|m| m.id == id)
            .ok_or_else(|| MarkerError::missing("member", id))
    }

    fn question(&self, id: &str) -> Result<&Question, MarkerError> {
        self.questions
            .iter()
            .find(|q| q.id == id)
            .ok_or_else(|| MarkerError::missing("question", id))
    }

    fn belongs_to(&self, record: &TutorialQuizRecord, course_id: &str) -> bool {
        self.tutorial(&record.tutorial)
            .is_ok_and(|t| t.course == course_id)
    }

    /// A tutorial-quiz record, provided it belongs to `course_id`.
    fn tutorial_quiz_record(
        &self,
        course_id: &str,
        id: &str,
    ) -> Result<&TutorialQuizRecord, MarkerError> {
        self.course(course_id)?;
        self.tutorial_quizzes
            .iter()
            .find(|tq| tq.id == id && self.belongs_to(tq, course_id))
            .ok_or_else(|| MarkerError::missing("tutorial-quiz", id))
    }

    /// The quiz with only visible questions, in quiz order.
    fn quiz(&self, id: &str) -> Result<Quiz, MarkerError> {
        let record = self
            .quizzes
            .iter()
            .find(|q| q.id == id)
            .ok_or_else(|| MarkerError::missing("quiz", id))?;

        let mut questions = Vec::with_capacity(record.questions.len());
        for question_id in &record.questions {
            let question = self.question(question_id)?;
            if question.is_visible() {
                questions.push(question.clone());
            }
        }

        Ok(Quiz {
            id: record.id.clone(),
            name: record.name.clone(),
            questions,
            score_by_attempt: record.score_by_attempt.clone(),
        })
    }

    fn group(&self, id: &str, questions: &[Question]) -> Result<Group, MarkerError> {
        let record = self
            .groups
            .iter()
            .find(|g| g.id == id)
            .ok_or_else(|| MarkerError::missing("group", id))?;

        let mut members = record
            .members
            .iter()
            .map(|m| self.member(m).cloned())
            .collect::<Result<Vec<_>, _>>()?;
        members.sort_by(|a, b| {
            a.name
                .first
                .cmp(&b.name.first)
                .then_with(|| a.name.last.cmp(&b.name.last))
        });

        let responses = self
            .responses
            .iter()
            .filter(|r| r.group.as_deref() == Some(id))
            .filter(|r| questions.iter().any(|q| q.id == r.question))
            .cloned()
            .collect();

        Ok(Group {
            id: record.id.clone(),
            name: record.name.clone(),
            members,
            responses,
            driver: record.driver.clone(),
        })
    }

    fn hydrate(&self, record: &TutorialQuizRecord) -> Result<TutorialQuiz, MarkerError> {
        let tutorial = self.tutorial(&record.tutorial)?.clone();
        let quiz = self.quiz(&record.quiz)?;
        let groups = record
            .groups
            .iter()
            .map(|g| self.group(g, &quiz.questions))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(TutorialQuiz {
            id: record.id.clone(),
            tutorial,
            quiz,
            groups,
            settings: record.settings.clone(),
        })
    }

    /// Resolves the question and score schedule a submission for `group_id` grades against.
    ///
    /// The group must belong to the tutorial-quiz and the question must be a visible question
    /// of its quiz.
    fn submission_target(
        &self,
        course_id: &str,
        tutorial_quiz_id: &str,
        group_id: &str,
        question_id: &str,
    ) -> Result<(Question, Vec<f64>), MarkerError> {
        let record = self.tutorial_quiz_record(course_id, tutorial_quiz_id)?;
        if !record.groups.iter().any(|g| g == group_id) {
            return Err(MarkerError::missing("group", group_id));
        }
        let quiz = self.quiz(&record.quiz)?;
        let question = quiz
            .questions
            .into_iter()
            .find(|q| q.id == question_id)
            .ok_or_else(|| MarkerError::missing("question", question_id))?;
        Ok((question, quiz.score_by_attempt))
    }
}
