//! Shared fixtures for store and route tests.
//!
//! The sample course `c1` has two tutorial-quizzes:
//!
//! - `tq1` (tutorial `0101`, quiz "Week 1"): visible questions `q1` (multiple choice, expects A)
//!   and `q2` (multiple select, expects B and C); `q3` is an unapproved student question.
//!   Group `g1` (Alan, Ada) answered `q1` for 1 point and `q2` for 2 points, plus a response
//!   to the hidden `q3`. Group `g2` (Grace) has no responses.
//! - `tq2` (tutorial `0102`, quiz "Week 2", schedule `[3, 2, 1]`): code-tracing `q4` and short
//!   answer `q5`. Group `g3` (Ada) answered `q4` for 3 points.
//!
//! Course `c2` holds `tq3`, which reuses "Week 1" and also contains Ada.

use crate::store::{QuizStore, SeedDocument};
use marker::types::EXTERNAL_ID_ATTRIBUTE;
use serde_json::{Value, json};
use std::io::Write;
use tempfile::NamedTempFile;

pub fn sample_seed_json() -> Value {
    json!({
        "courses": [
            { "id": "c1", "code": "CSC108" },
            { "id": "c2", "code": "CSC148" }
        ],
        "tutorials": [
            { "id": "t1", "course": "c1", "number": "0101" },
            { "id": "t2", "course": "c1", "number": "0102" },
            { "id": "t3", "course": "c2", "number": "5101" }
        ],
        "quizzes": [
            { "id": "quiz1", "name": "Week 1", "questions": ["q1", "q2", "q3"] },
            { "id": "quiz2", "name": "Week 2", "questions": ["q4", "q5"], "scoreByAttempt": [3.0, 2.0, 1.0] }
        ],
        "questions": [
            { "id": "q1", "number": 1, "type": "multiple choice", "question": "Pick A",
              "choices": ["A", "B", "C"], "answers": ["A"] },
            { "id": "q2", "number": 2, "type": "multiple select", "question": "Pick B and C",
              "choices": ["A", "B", "C"], "answers": ["B", "C"] },
            { "id": "q3", "number": 3, "type": "short answer", "question": "Capital of France?",
              "answers": ["Paris"], "submitter": "s3", "approved": false },
            { "id": "q4", "number": 1, "type": "code tracing", "question": "Trace it",
              "code": "x = 1\ny = 2", "answers": ["x=1", "y=2"] },
            { "id": "q5", "number": 2, "type": "short answer", "question": "Capital of France?",
              "answers": ["Paris"], "caseSensitive": false }
        ],
        "members": [
            { "id": "s1", "name": { "first": "Ada", "last": "Lovelace" }, "username": "lovelac1",
              "attributes": { (EXTERNAL_ID_ATTRIBUTE): "\"1000001\"" } },
            { "id": "s2", "name": { "first": "Alan", "last": "Turing" }, "username": "turinga2" },
            { "id": "s3", "name": { "first": "Grace", "last": "Hopper" }, "username": "hopperg3",
              "attributes": { "unrelated": "\"x\"" } }
        ],
        "groups": [
            { "id": "g1", "name": "2", "members": ["s2", "s1"], "driver": "s2" },
            { "id": "g2", "name": "1", "members": ["s3"] },
            { "id": "g3", "name": "1", "members": ["s1"] },
            { "id": "g4", "name": "1", "members": ["s1"] }
        ],
        "responses": [
            { "id": "r1", "question": "q1", "group": "g1", "answer": ["A"], "points": 1.0, "correct": true },
            { "id": "r2", "question": "q2", "group": "g1", "answer": ["C", "B"], "points": 2.0, "correct": true },
            { "id": "r3", "question": "q3", "group": "g1", "answer": ["Paris"], "points": 5.0, "correct": true },
            { "id": "r4", "question": "q4", "group": "g3", "answer": [],
              "lineByLineSummary": [
                  { "value": "x=1", "attempts": 1, "correct": true },
                  { "value": "y=2", "attempts": 2, "correct": true }
              ],
              "points": 3.0, "correct": true, "attempts": 1 },
            { "id": "r5", "question": "q1", "group": "g4", "answer": ["B"], "points": 0.0 }
        ],
        "tutorialQuizzes": [
            { "id": "tq1", "tutorial": "t1", "quiz": "quiz1", "groups": ["g1", "g2"],
              "settings": { "published": true, "allocateMembers": "automatically", "maxMembersPerGroup": 3 } },
            { "id": "tq2", "tutorial": "t2", "quiz": "quiz2", "groups": ["g3"] },
            { "id": "tq3", "tutorial": "t3", "quiz": "quiz1", "groups": ["g4"] }
        ]
    })
}

pub fn sample_document() -> SeedDocument {
    serde_json::from_value(sample_seed_json()).expect("sample seed document is valid")
}

pub fn sample_store() -> QuizStore {
    QuizStore::new(sample_document())
}

/// Writes `document` to a temporary file that lives as long as the returned handle.
pub fn write_seed_file(document: &Value) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("failed to create temp seed file");
    file.write_all(document.to_string().as_bytes())
        .expect("failed to write temp seed file");
    file
}
