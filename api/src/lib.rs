//! HTTP surface of the quiz marks service.
//!
//! Handlers hydrate entity graphs through [`util::store::QuizStore`] and hand them to the
//! `marker` core for review, grading and aggregation.

pub mod middleware;
pub mod response;
pub mod routes;
