#[cfg(test)]
mod tests {
    use crate::helpers::{body_json, get, json_request, make_test_app};
    use axum::http::StatusCode;
    use serde_json::{Value, json};
    use tower::ServiceExt;

    const TQ1: &str = "/api/courses/c1/tutorial-quizzes/tq1";

    #[tokio::test]
    async fn review_lists_every_question_with_verdicts() {
        let response = make_test_app()
            .oneshot(get(&format!("{TQ1}/groups/g1/responses")))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let json = body_json(response).await;
        let data = &json["data"];
        assert_eq!(data["groupId"], "g1");
        assert_eq!(data["total"], 3.0);

        let questions = data["questions"].as_array().unwrap();
        assert_eq!(questions.len(), 2);

        let q1 = &questions[0];
        assert_eq!(q1["score"], 1.0);
        assert_eq!(q1["results"]["kind"], "choice");
        let outcomes = q1["results"]["outcomes"].as_array().unwrap();
        assert_eq!(outcomes[0]["correct"], true);
        assert_eq!(outcomes[1]["correct"], Value::Null);

        let q2 = &questions[1];
        assert_eq!(q2["response"]["responseId"], "r2");
        assert_eq!(q2["score"], 2.0);
    }

    #[tokio::test]
    async fn review_of_group_without_responses_is_complete() {
        let response = make_test_app()
            .oneshot(get(&format!("{TQ1}/groups/g2/responses")))
            .await
            .unwrap();
        let json = body_json(response).await;
        let questions = json["data"]["questions"].as_array().unwrap();
        assert_eq!(questions.len(), 2);
        for q in questions {
            assert_eq!(q["response"]["submitted"], false);
            assert_eq!(q["score"], 0.0);
            assert_eq!(q["response"]["answer"], json!([]));
        }
        assert_eq!(json["data"]["total"], 0.0);
    }

    #[tokio::test]
    async fn review_of_unknown_group_is_404() {
        let response = make_test_app()
            .oneshot(get(&format!("{TQ1}/groups/g9/responses")))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let json = body_json(response).await;
        assert_eq!(json["message"], "group not found: g9");
    }

    #[tokio::test]
    async fn add_response_grades_and_appears_in_review() {
        let app = make_test_app();
        let body = json!({ "question": "q2", "answer": ["C", "B"], "points": 2.0 });
        let response = app
            .clone()
            .oneshot(json_request("POST", &format!("{TQ1}/groups/g2/responses"), body))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::CREATED);

        let json = body_json(response).await;
        assert_eq!(json["data"]["correct"], true);
        assert_eq!(json["data"]["group"], "g2");
        assert!(json["data"]["updatedAt"].is_string());

        let response = app
            .oneshot(get(&format!("{TQ1}/groups/g2/responses")))
            .await
            .unwrap();
        let json = body_json(response).await;
        assert_eq!(json["data"]["total"], 2.0);
        assert_eq!(json["data"]["questions"][1]["response"]["submitted"], true);
    }

    #[tokio::test]
    async fn add_response_without_points_uses_score_schedule() {
        let body = json!({ "question": "q5", "answer": ["PARIS"] });
        let response = make_test_app()
            .oneshot(json_request(
                "POST",
                "/api/courses/c1/tutorial-quizzes/tq2/groups/g3/responses",
                body,
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::CREATED);

        let json = body_json(response).await;
        assert_eq!(json["data"]["correct"], true);
        assert_eq!(json["data"]["points"], 3.0);
        // the stored answer keeps its case
        assert_eq!(json["data"]["answer"], json!(["PARIS"]));
    }

    #[tokio::test]
    async fn add_response_to_hidden_question_is_404() {
        let body = json!({ "question": "q3", "answer": ["Paris"] });
        let response = make_test_app()
            .oneshot(json_request("POST", &format!("{TQ1}/groups/g1/responses"), body))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn edit_response_regrades_and_keeps_points() {
        let body = json!({ "question": "q1", "answer": ["B"] });
        let response = make_test_app()
            .oneshot(json_request("PUT", &format!("{TQ1}/groups/g1/responses/r1"), body))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let json = body_json(response).await;
        assert_eq!(json["data"]["id"], "r1");
        assert_eq!(json["data"]["answer"], json!(["B"]));
        assert_eq!(json["data"]["correct"], false);
        assert_eq!(json["data"]["points"], 1.0);
    }

    #[tokio::test]
    async fn edit_response_of_another_group_is_404() {
        let body = json!({ "question": "q1", "answer": ["A"] });
        let response = make_test_app()
            .oneshot(json_request("PUT", &format!("{TQ1}/groups/g2/responses/r1"), body))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let json = body_json(response).await;
        assert_eq!(json["message"], "response not found: r1");
    }
}
