pub mod health_test;
pub mod marks_test;
pub mod responses_test;
pub mod tutorial_quizzes_test;
