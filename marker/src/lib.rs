//! # Marker Library
//!
//! This crate provides the grading and mark-aggregation core of the quiz platform. It takes an
//! already hydrated entity graph (tutorial-quiz → quiz → questions, tutorial-quiz → groups →
//! members/responses) and computes correctness, scores and mark rows from it. Nothing in this
//! crate performs I/O.
//!
//! ## Key Concepts
//! - **Comparators**: one review-time strategy per answer shape, producing an explainable
//!   [`verdict::Verdict`] (per choice, per line, or a single scalar).
//! - **Grader**: the submission-time path that sets the single `correct` flag persisted on a
//!   response. It is independent of the comparators and the two may disagree for code tracing.
//! - **Scorer / Review**: joins questions with a group's responses; absent responses are
//!   normalized to zero credit through [`submission::ResponseSlot`].
//! - **Aggregate**: group, tutorial-quiz, course and student mark sheets.
//! - **Report**: display and CSV export projections sharing one column contract.

pub mod aggregate;
pub mod comparators;
pub mod error;
pub mod grader;
pub mod report;
pub mod review;
pub mod scorer;
pub mod submission;
pub mod traits;
pub mod types;
pub mod verdict;
