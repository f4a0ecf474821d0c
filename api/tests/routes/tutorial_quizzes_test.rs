#[cfg(test)]
mod tests {
    use crate::helpers::{body_json, get, json_request, make_test_app};
    use axum::http::StatusCode;
    use serde_json::json;
    use tower::ServiceExt;

    #[tokio::test]
    async fn get_tutorial_quiz_sorts_groups_and_hides_unapproved_questions() {
        let response = make_test_app()
            .oneshot(get("/api/courses/c1/tutorial-quizzes/tq1"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let json = body_json(response).await;
        let data = &json["data"];
        assert_eq!(data["id"], "tq1");
        assert_eq!(data["tutorial"]["number"], "0101");

        let questions = data["quiz"]["questions"].as_array().unwrap();
        assert_eq!(questions.len(), 2);
        assert_eq!(questions[1]["type"], "multiple select");

        let groups = data["groups"].as_array().unwrap();
        assert_eq!(groups[0]["name"], "1");
        assert_eq!(groups[1]["name"], "2");
        assert_eq!(groups[1]["members"][0]["username"], "lovelac1");
        assert!(groups[1]["members"][0].get("attributes").is_none());

        assert_eq!(data["settings"]["published"], true);
        assert_eq!(data["settings"]["maxMembersPerGroup"], 3);
    }

    #[tokio::test]
    async fn get_tutorial_quiz_of_other_course_is_404() {
        let response = make_test_app()
            .oneshot(get("/api/courses/c1/tutorial-quizzes/tq3"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let json = body_json(response).await;
        assert_eq!(json["success"], false);
        assert_eq!(json["message"], "tutorial-quiz not found: tq3");
    }

    #[tokio::test]
    async fn unknown_course_is_404() {
        let response = make_test_app()
            .oneshot(get("/api/courses/nope/tutorial-quizzes/tq1"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn put_settings_updates_and_persists() {
        let app = make_test_app();
        let body = json!({
            "published": true,
            "active": true,
            "archived": true,
            "allocateMembers": "self-selection",
            "maxMembersPerGroup": 4
        });

        let response = app
            .clone()
            .oneshot(json_request("PUT", "/api/courses/c1/tutorial-quizzes/tq1", body))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        assert_eq!(json["data"]["settings"]["archived"], true);

        let response = app
            .oneshot(get("/api/courses/c1/tutorial-quizzes/tq1"))
            .await
            .unwrap();
        let json = body_json(response).await;
        assert_eq!(json["data"]["settings"]["allocateMembers"], "self-selection");
        assert_eq!(json["data"]["settings"]["maxMembersPerGroup"], 4);
    }

    #[tokio::test]
    async fn put_settings_with_malformed_body_is_rejected() {
        let response = make_test_app()
            .oneshot(json_request(
                "PUT",
                "/api/courses/c1/tutorial-quizzes/tq1",
                json!({ "published": "yes" }),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[tokio::test]
    async fn list_tutorial_quizzes_of_course() {
        let response = make_test_app()
            .oneshot(get("/api/courses/c1/tutorial-quizzes"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let json = body_json(response).await;
        let tqs = json["data"].as_array().unwrap();
        let ids: Vec<&str> = tqs.iter().map(|tq| tq["id"].as_str().unwrap()).collect();
        assert_eq!(ids, vec!["tq1", "tq2"]);
        assert_eq!(tqs[0]["groups"][0]["name"], "1");
        assert_eq!(tqs[1]["quiz"]["name"], "Week 2");
    }

    #[tokio::test]
    async fn list_tutorial_quizzes_of_unknown_course_is_404() {
        let response = make_test_app()
            .oneshot(get("/api/courses/nope/tutorial-quizzes"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn bulk_update_writes_named_fields_only() {
        let app = make_test_app();
        let body = json!({
            "tutorialQuizzes": ["tq1", "tq2", "tq3"],
            "update": ["published", "archived", "maxMembersPerGroup"],
            "published": "on",
            "maxMembersPerGroup": 5,
            "active": true
        });
        let response = app
            .clone()
            .oneshot(json_request("PUT", "/api/courses/c1/tutorial-quizzes", body))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let json = body_json(response).await;
        let tqs = json["data"].as_array().unwrap();
        assert_eq!(tqs.len(), 2);
        for tq in tqs {
            assert_eq!(tq["settings"]["published"], true);
            assert_eq!(tq["settings"]["archived"], false);
            assert_eq!(tq["settings"]["active"], false);
            assert_eq!(tq["settings"]["maxMembersPerGroup"], 5);
        }
        assert_eq!(tqs[0]["settings"]["allocateMembers"], "automatically");

        let response = app
            .oneshot(get("/api/courses/c1/tutorial-quizzes/tq2"))
            .await
            .unwrap();
        let json = body_json(response).await;
        assert_eq!(json["data"]["settings"]["published"], true);
    }

    #[tokio::test]
    async fn bulk_update_turns_off_named_flag_missing_from_body() {
        let body = json!({ "tutorialQuizzes": ["tq1"], "update": ["published"] });
        let response = make_test_app()
            .oneshot(json_request("PUT", "/api/courses/c1/tutorial-quizzes", body))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        assert_eq!(json["data"][0]["settings"]["published"], false);
    }
}
