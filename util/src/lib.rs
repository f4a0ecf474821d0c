//! Shared infrastructure for the quiz marks service: configuration, the quiz store that
//! hydrates entity graphs for the grading core, and the application state handed to routes.

pub mod config;
pub mod state;
pub mod store;
pub mod test_helpers;
