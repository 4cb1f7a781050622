pub mod health;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};

use crate::advice::handlers as advice;
use crate::extract::handlers as extract;
use crate::interview::handlers as interview;
use crate::matching::handlers as matching;
use crate::report::handlers as report;
use crate::state::AppState;

/// Résumé uploads may exceed axum's 2 MB default.
const UPLOAD_LIMIT_BYTES: usize = 10 * 1024 * 1024;

pub fn build_router(state: AppState) -> Router {
    let uploads = Router::new()
        .route("/api/v1/extract/resume", post(extract::handle_extract_resume))
        .route("/api/v1/extract/profile", post(extract::handle_extract_profile))
        .layer(DefaultBodyLimit::max(UPLOAD_LIMIT_BYTES));

    Router::new()
        .route("/health", get(health::health_handler))
        // Matching & advice
        .route("/api/v1/analyze", post(matching::handle_analyze))
        .route("/api/v1/roles", get(matching::handle_list_roles))
        .route("/api/v1/advice", post(advice::handle_advice))
        .route("/api/v1/learning/plan", post(advice::handle_learning_plan))
        .route(
            "/api/v1/learning/resources",
            get(advice::handle_learning_resources),
        )
        // Profile sources
        .merge(uploads)
        .route("/api/v1/extract/github", post(extract::handle_extract_github))
        .route("/api/v1/profiles/samples", get(extract::handle_sample_profiles))
        // Interviews
        .route("/api/v1/interviews", post(interview::handle_start_interview))
        .route(
            "/api/v1/interviews/:id",
            get(interview::handle_get_interview).delete(interview::handle_delete_interview),
        )
        .route(
            "/api/v1/interviews/:id/answers",
            post(interview::handle_answer_interview),
        )
        .route(
            "/api/v1/interviews/:id/retry",
            post(interview::handle_retry_interview),
        )
        // Quizzes
        .route("/api/v1/quizzes", post(interview::handle_start_quiz))
        .route(
            "/api/v1/quizzes/:id",
            get(interview::handle_get_quiz).delete(interview::handle_delete_quiz),
        )
        .route("/api/v1/quizzes/:id/answers", post(interview::handle_answer_quiz))
        .route("/api/v1/quizzes/:id/retry", post(interview::handle_retry_quiz))
        // Report
        .route("/api/v1/report", post(report::handle_report))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        body::{to_bytes, Body},
        http::{header, Method, Request, StatusCode},
    };
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use crate::config::Config;
    use crate::skills::SkillsDatabase;

    fn app() -> Router {
        let state = AppState::new(&Config::default(), SkillsDatabase::bundled().unwrap()).unwrap();
        build_router(state)
    }

    fn json_request(method: Method, uri: &str, body: Value) -> Request<Body> {
        Request::builder()
            .method(method)
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    fn empty_request(method: Method, uri: &str) -> Request<Body> {
        Request::builder()
            .method(method)
            .uri(uri)
            .body(Body::empty())
            .unwrap()
    }

    async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
        let response = app.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
        (status, body)
    }

    #[tokio::test]
    async fn test_health() {
        let (status, body) = send(&app(), empty_request(Method::GET, "/health")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "ok");
        assert_eq!(body["service"], "career-advisor-api");
        assert_eq!(body["live_mode"], false);
    }

    #[tokio::test]
    async fn test_analyze_returns_top_three_with_plans() {
        let app = app();
        let (status, body) = send(
            &app,
            json_request(
                Method::POST,
                "/api/v1/analyze",
                json!({
                    "profile": {"name": "Alice", "age": 24},
                    "skills_input": "Python, SQL , Statistics"
                }),
            ),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["profile"]["skills"], json!(["python", "sql", "statistics"]));
        let matches = body["matches"].as_array().unwrap();
        assert_eq!(matches.len(), 3);
        assert_eq!(matches[0]["role"], "Data Scientist");
        assert_eq!(matches[0]["match"], 75);
        assert_eq!(matches[0]["missing"], json!(["machine learning"]));
        assert_eq!(
            matches[0]["learning_plan"]["steps"][0],
            "Learn Machine learning fundamentals"
        );
        assert_eq!(body["advice"]["source"], "mock");
        assert!(body["advice"]["text"]
            .as_str()
            .unwrap()
            .contains("Name: Alice"));
    }

    #[tokio::test]
    async fn test_analyze_requires_skills() {
        let (status, body) = send(
            &app(),
            json_request(
                Method::POST,
                "/api/v1/analyze",
                json!({"profile": {"name": "Bob"}, "skills_input": " , "}),
            ),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["message"], "Please enter skills to analyze.");
    }

    #[tokio::test]
    async fn test_analyze_rejects_out_of_range_age() {
        let app = app();
        for age in [json!(12), json!(300), json!(-1)] {
            let (status, body) = send(
                &app,
                json_request(
                    Method::POST,
                    "/api/v1/analyze",
                    json!({"profile": {"age": age, "skills": ["python"]}}),
                ),
            )
            .await;
            assert_eq!(status, StatusCode::BAD_REQUEST, "age {age}");
            assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
            assert_eq!(body["error"]["message"], "age must be between 18 and 99");
        }
    }

    #[tokio::test]
    async fn test_roles_and_samples() {
        let app = app();
        let (status, roles) = send(&app, empty_request(Method::GET, "/api/v1/roles")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(roles.as_array().unwrap().len(), 16);

        let (status, samples) =
            send(&app, empty_request(Method::GET, "/api/v1/profiles/samples")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(samples[0]["profile"]["name"], "Alice");
    }

    #[tokio::test]
    async fn test_learning_plan_uses_catalog_gaps() {
        let (status, body) = send(
            &app(),
            json_request(
                Method::POST,
                "/api/v1/learning/plan",
                json!({"skills": ["Python", "SQL"], "target_role": "Data Scientist"}),
            ),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            body["steps"],
            json!([
                "Learn Machine learning fundamentals",
                "Learn Statistics fundamentals",
                "Work on a project relevant to Data Scientist",
                "Build portfolio and practice interview questions"
            ])
        );
    }

    #[tokio::test]
    async fn test_learning_resources_tiers() {
        let app = app();
        let (status, body) = send(
            &app,
            empty_request(
                Method::GET,
                "/api/v1/learning/resources?role=AI%20Engineer&score=85",
            ),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["tier"], "advanced");

        let (_, body) = send(
            &app,
            empty_request(Method::GET, "/api/v1/learning/resources?role=AI%20Engineer"),
        )
        .await;
        assert_eq!(body["tier"], "foundational");

        let (status, body) = send(
            &app,
            empty_request(Method::GET, "/api/v1/learning/resources?role=Game%20Developer"),
        )
        .await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(
            body["error"]["message"],
            "we don't have a learning plan for 'Game Developer' yet"
        );
    }

    #[tokio::test]
    async fn test_interview_flow() {
        let app = app();
        let (status, started) = send(
            &app,
            json_request(
                Method::POST,
                "/api/v1/interviews",
                json!({"role": "Cloud Architect", "difficulty": "easy"}),
            ),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(started["total_questions"], 5);
        assert_eq!(started["current_question"]["number"], 1);
        let id = started["id"].as_str().unwrap().to_string();
        let answers_uri = format!("/api/v1/interviews/{id}/answers");

        let (status, body) = send(
            &app,
            json_request(Method::POST, &answers_uri, json!({"answer": "   "})),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(
            body["error"]["message"],
            "Please provide an answer before submitting."
        );

        let mut last = Value::Null;
        for _ in 0..5 {
            let (status, body) = send(
                &app,
                json_request(Method::POST, &answers_uri, json!({"answer": "My answer"})),
            )
            .await;
            assert_eq!(status, StatusCode::OK);
            assert_eq!(body["evaluation"]["scores"]["correctness"], 8);
            last = body;
        }
        let summary = &last["interview"]["summary"];
        assert_eq!(summary["confidence"], "Medium");
        assert_eq!(summary["score_percent"], 80.0);
        assert_eq!(summary["weak_areas"], json!([]));

        let (status, _) = send(
            &app,
            json_request(Method::POST, &answers_uri, json!({"answer": "one more"})),
        )
        .await;
        assert_eq!(status, StatusCode::CONFLICT);

        let (status, retried) = send(
            &app,
            json_request(
                Method::POST,
                &format!("/api/v1/interviews/{id}/retry"),
                json!({"difficulty": "medium"}),
            ),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(retried["answered"], 0);
        assert_eq!(retried["total_questions"], 10);

        let uri = format!("/api/v1/interviews/{id}");
        let response = app.clone().oneshot(empty_request(Method::DELETE, &uri)).await.unwrap();
        assert_eq!(response.status(), StatusCode::NO_CONTENT);
        let (status, _) = send(&app, empty_request(Method::GET, &uri)).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_unknown_role_interviews_as_data_scientist() {
        let (_, body) = send(
            &app(),
            json_request(Method::POST, "/api/v1/interviews", json!({"role": "Astronaut"})),
        )
        .await;
        assert_eq!(body["role"], "Data Scientist");
        assert_eq!(body["difficulty"], "easy");
    }

    #[tokio::test]
    async fn test_quiz_rejects_unknown_choice() {
        let app = app();
        let (status, quiz) = send(
            &app,
            json_request(Method::POST, "/api/v1/quizzes", json!({"role": "AI Engineer"})),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
        let id = quiz["id"].as_str().unwrap();
        let uri = format!("/api/v1/quizzes/{id}/answers");

        let (status, _) = send(
            &app,
            json_request(Method::POST, &uri, json!({"choice": "42"})),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);

        let option = quiz["current_question"]["options"][0].as_str().unwrap();
        let (status, body) = send(
            &app,
            json_request(Method::POST, &uri, json!({"choice": option})),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["quiz"]["answered"], 1);
    }

    #[tokio::test]
    async fn test_github_username_is_validated() {
        let (status, _) = send(
            &app(),
            json_request(
                Method::POST,
                "/api/v1/extract/github",
                json!({"username": "not a user"}),
            ),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_resume_must_be_pdf() {
        let request = multipart_request(
            "/api/v1/extract/resume",
            Some(("cv.txt", "text/plain", b"Jane Doe".as_slice())),
            &[],
        );
        let (status, _) = send(&app(), request).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    /// `file` is (file name, content type, bytes).
    fn multipart_request(
        uri: &str,
        file: Option<(&str, &str, &[u8])>,
        fields: &[(&str, &str)],
    ) -> Request<Body> {
        let boundary = "XBOUNDARY";
        let mut body = Vec::new();
        if let Some((file_name, content_type, bytes)) = file {
            body.extend_from_slice(
                format!(
                    "--{boundary}\r\nContent-Disposition: form-data; name=\"file\"; \
                     filename=\"{file_name}\"\r\nContent-Type: {content_type}\r\n\r\n"
                )
                .as_bytes(),
            );
            body.extend_from_slice(bytes);
            body.extend_from_slice(b"\r\n");
        }
        for (name, value) in fields {
            body.extend_from_slice(
                format!(
                    "--{boundary}\r\nContent-Disposition: form-data; name=\"{name}\"\r\n\r\n{value}\r\n"
                )
                .as_bytes(),
            );
        }
        body.extend_from_slice(format!("--{boundary}--\r\n").as_bytes());

        Request::builder()
            .method(Method::POST)
            .uri(uri)
            .header(
                header::CONTENT_TYPE,
                format!("multipart/form-data; boundary={boundary}"),
            )
            .body(Body::from(body))
            .unwrap()
    }

    fn resume_pdf() -> Vec<u8> {
        use crate::report::pdf::{Align, PdfWriter, Span};

        let mut pdf = PdfWriter::new();
        pdf.paragraph(&[Span::bold("Jane Doe")], 16.0, 20.0, Align::Left);
        pdf.paragraph(
            &[Span::regular("Backend engineer: Python, SQL and Docker.")],
            10.0,
            13.0,
            Align::Left,
        );
        pdf.finish().unwrap()
    }

    #[tokio::test]
    async fn test_extract_resume_from_pdf() {
        let pdf = resume_pdf();
        let (status, body) = send(
            &app(),
            multipart_request(
                "/api/v1/extract/resume",
                Some(("jane.pdf", "application/pdf", pdf.as_slice())),
                &[],
            ),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["profile"]["name"], "Jane Doe");
        assert_eq!(body["profile"]["skills"], json!(["python", "sql", "docker"]));
        assert_eq!(body["warnings"], json!([]));
    }

    #[tokio::test]
    async fn test_extract_profile_from_resume_only() {
        let pdf = resume_pdf();
        let (status, body) = send(
            &app(),
            multipart_request(
                "/api/v1/extract/profile",
                Some(("jane.pdf", "application/pdf", pdf.as_slice())),
                &[("name", "Ignored Fallback")],
            ),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["profile"]["name"], "Jane Doe");
        assert_eq!(body["profile"]["skills"], json!(["python", "sql", "docker"]));
        assert_eq!(body["profile"]["age"], 25);
        assert_eq!(body["warnings"], json!([]));
    }

    #[tokio::test]
    async fn test_extract_profile_needs_an_input() {
        let (status, _) = send(
            &app(),
            multipart_request("/api/v1/extract/profile", None, &[("name", "Jane")]),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_report_is_a_pdf_attachment() {
        let request = json_request(
            Method::POST,
            "/api/v1/report",
            json!({"profile": {"name": "Alice", "skills": ["python", "sql"]}}),
        );
        let response = app().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(response.headers()[header::CONTENT_TYPE], "application/pdf");
        assert_eq!(
            response.headers()[header::CONTENT_DISPOSITION],
            "attachment; filename=\"career_advisor_report.pdf\""
        );
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        assert!(bytes.starts_with(b"%PDF"));
    }
}
