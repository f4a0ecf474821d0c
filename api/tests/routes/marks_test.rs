#[cfg(test)]
mod tests {
    use crate::helpers::{body_json, body_text, get, json_request, make_test_app};
    use axum::http::{
        StatusCode,
        header::{CONTENT_DISPOSITION, CONTENT_TYPE},
    };
    use serde_json::{Value, json};
    use tower::ServiceExt;

    #[tokio::test]
    async fn tutorial_quiz_marks_one_row_per_member() {
        let response = make_test_app()
            .oneshot(get("/api/courses/c1/tutorial-quizzes/tq1/marks"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let json = body_json(response).await;
        let data = &json["data"];
        assert_eq!(data["scope"], "tutorial_quiz");
        assert_eq!(data["columns"].as_array().unwrap().len(), 8);
        assert_eq!(data["columns"][6], "Q1 [0]");
        assert_eq!(data["total"], 6.0);

        let rows = data["rows"].as_array().unwrap();
        assert_eq!(rows.len(), 3);

        assert_eq!(rows[0]["member"]["username"], "lovelac1");
        assert_eq!(rows[0]["score"], 3.0);
        assert_eq!(rows[0]["groupResult"], json!([1.0, 2.0]));
        assert_eq!(rows[1]["member"]["username"], "turinga2");
        assert_eq!(rows[1]["score"], 3.0);

        assert_eq!(rows[2]["member"]["username"], "hopperg3");
        assert_eq!(rows[2]["group"]["name"], "1");
        assert_eq!(rows[2]["score"], 0.0);
        assert_eq!(rows[2]["groupResult"], json!([Value::Null, Value::Null]));
    }

    #[tokio::test]
    async fn tutorial_quiz_marks_export_is_csv_attachment() {
        let response = make_test_app()
            .oneshot(get("/api/courses/c1/tutorial-quizzes/tq1/marks?export=true"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(response.headers()[CONTENT_TYPE], "text/csv");
        assert_eq!(
            response.headers()[CONTENT_DISPOSITION],
            "attachment; filename=marks.csv"
        );

        let body = body_text(response).await;
        let lines: Vec<&str> = body.lines().collect();
        assert_eq!(
            lines,
            vec![
                "Username,UTORid,Quiz,Tutorial,Group,Mark,Q1 [0],Q2 [1]",
                "lovelac1,1000001,Week 1,0101,2,3,1,2",
                "turinga2,,Week 1,0101,2,3,1,2",
                "hopperg3,,Week 1,0101,1,0,,",
            ]
        );
        for line in &lines {
            assert_eq!(line.split(',').count(), 8);
        }
    }

    #[tokio::test]
    async fn other_export_values_keep_the_json_view() {
        for value in ["1", "TRUE", "false"] {
            let response = make_test_app()
                .oneshot(get(&format!(
                    "/api/courses/c1/tutorial-quizzes/tq1/marks?export={value}"
                )))
                .await
                .unwrap();
            assert_eq!(response.status(), StatusCode::OK);
            let json = body_json(response).await;
            assert_eq!(json["data"]["rows"].as_array().unwrap().len(), 3);
        }
    }

    #[tokio::test]
    async fn tutorial_quiz_marks_for_unknown_id_is_404() {
        let response = make_test_app()
            .oneshot(get("/api/courses/c1/tutorial-quizzes/nope/marks"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn student_marks_span_the_course_only() {
        let response = make_test_app()
            .oneshot(get("/api/courses/c1/students/s1/marks"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let json = body_json(response).await;
        let data = &json["data"];
        assert_eq!(data["student"]["username"], "lovelac1");
        assert_eq!(data["scope"], "student");
        assert!(data.get("questions").is_none());
        assert_eq!(data["total"], 6.0);

        let rows = data["rows"].as_array().unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0]["tutorialQuiz"], "tq1");
        assert_eq!(rows[1]["tutorialQuiz"], "tq2");
        assert_eq!(rows[1]["quiz"]["name"], "Week 2");
    }

    #[tokio::test]
    async fn student_marks_export_has_no_identity_columns() {
        let response = make_test_app()
            .oneshot(get("/api/courses/c1/students/s1/marks?export=true"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body = body_text(response).await;
        let lines: Vec<&str> = body.lines().collect();
        assert_eq!(
            lines,
            vec![
                "Quiz,Tutorial,Group,Mark",
                "Week 1,0101,2,3",
                "Week 2,0102,1,3",
            ]
        );
    }

    #[tokio::test]
    async fn unknown_student_is_404() {
        let response = make_test_app()
            .oneshot(get("/api/courses/c1/students/s9/marks"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let json = body_json(response).await;
        assert_eq!(json["message"], "member not found: s9");
    }

    #[tokio::test]
    async fn course_marks_keep_persisted_order_and_skip_unknown_ids() {
        let body = json!({ "tutorialQuizzes": ["tq2", "tq1", "tq3", "zzz"] });
        let response = make_test_app()
            .oneshot(json_request("POST", "/api/courses/c1/marks", body))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let json = body_json(response).await;
        let data = &json["data"];
        assert_eq!(data["scope"], "course");
        assert_eq!(data["total"], 9.0);

        let rows = data["rows"].as_array().unwrap();
        assert_eq!(rows.len(), 4);
        assert_eq!(rows[0]["tutorialQuiz"], "tq1");
        assert_eq!(rows[3]["tutorialQuiz"], "tq2");
    }

    #[tokio::test]
    async fn course_marks_export_layout() {
        let body = json!({ "tutorialQuizzes": ["tq2"] });
        let response = make_test_app()
            .oneshot(json_request("POST", "/api/courses/c1/marks?export=true", body))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body = body_text(response).await;
        let lines: Vec<&str> = body.lines().collect();
        assert_eq!(
            lines,
            vec!["Username,Quiz,Tutorial,Group,Mark", "lovelac1,Week 2,0102,1,3"]
        );
    }

    #[tokio::test]
    async fn empty_selection_yields_no_rows() {
        let body = json!({ "tutorialQuizzes": [] });
        let response = make_test_app()
            .oneshot(json_request("POST", "/api/courses/c1/marks", body))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let json = body_json(response).await;
        assert_eq!(json["data"]["rows"], json!([]));
        assert_eq!(json["data"]["total"], 0.0);
    }

    #[tokio::test]
    async fn course_marks_for_unknown_course_is_404() {
        let body = json!({ "tutorialQuizzes": ["tq1"] });
        let response = make_test_app()
            .oneshot(json_request("POST", "/api/courses/nope/marks", body))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let json = body_json(response).await;
        assert_eq!(json["message"], "course not found: nope");
    }
}
