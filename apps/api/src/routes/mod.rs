pub mod health;

use std::path::Path;

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::services::{ServeDir, ServeFile};

use crate::generation::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    let frontend_dir = Path::new(&state.config.frontend_dir).to_path_buf();

    Router::new()
        .route("/health", get(health::health_handler))
        .route("/generate-post", post(handlers::handle_generate_post))
        // Frontend bundle
        .route_service("/", ServeFile::new(frontend_dir.join("index.html")))
        .nest_service("/static", ServeDir::new(frontend_dir))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use async_trait::async_trait;
    use axum::{
        body::{to_bytes, Body},
        http::{Request, StatusCode},
    };
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use crate::config::Config;
    use crate::llm_client::{CompletionClient, LlmError};

    struct CannedCompletion(Option<&'static str>);

    #[async_trait]
    impl CompletionClient for CannedCompletion {
        async fn complete(&self, _prompt: &str) -> Result<String, LlmError> {
            self.0.map(str::to_string).ok_or(LlmError::EmptyContent)
        }
    }

    fn app(reply: Option<&'static str>, frontend_dir: &Path) -> Router {
        let config = Config {
            groq_api_key: "gsk_test".to_string(),
            huggingface_api_key: None,
            groq_api_url: "http://127.0.0.1:9/unused".to_string(),
            frontend_dir: frontend_dir.to_string_lossy().into_owned(),
            port: 0,
            rust_log: "info".to_string(),
        };
        build_router(AppState {
            llm: Arc::new(CannedCompletion(reply)),
            config,
        })
    }

    fn generate_body(category: &str, forbidden: &[&str]) -> Value {
        json!({
            "profile": {
                "name": "Sunrise Yoga",
                "industry": "Wellness",
                "primary_service": "Morning classes",
                "target_audience": "Busy parents",
                "tone": "Calm",
                "phone": "555-0177",
                "cta": "Join a free class",
                "forbidden_words": forbidden
            },
            "brief": {
                "platform": "Facebook",
                "content_category": category,
                "topic": "Five-minute morning stretch"
            },
            "instructions": {"extra_instructions": "Keep it short."}
        })
    }

    async fn post_json(app: Router, uri: &str, body: &Value) -> (StatusCode, Value) {
        let response = app
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri(uri)
                    .header("content-type", "application/json")
                    .body(Body::from(body.to_string()))
                    .unwrap(),
            )
            .await
            .unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap_or(Value::Null))
    }

    #[tokio::test]
    async fn test_health_reports_ok() {
        let dir = tempfile::tempdir().unwrap();
        let response = app(None, dir.path())
            .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body: Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["status"], "ok");
        assert_eq!(body["service"], "contentgen");
    }

    #[tokio::test]
    async fn test_generate_post_returns_parsed_fields() {
        let dir = tempfile::tempdir().unwrap();
        let reply = "POST TEXT\nHeadline:\nStretch Into Your Day\nCaption:\nFive minutes is all it takes.\nCTA:\nJoin a free class\nHashtags:\n#yoga, #morning\nIMAGE PROMPT\nA sunlit studio with mats";
        let (status, body) = post_json(
            app(Some(reply), dir.path()),
            "/generate-post",
            &generate_body("Educational", &[]),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["headline"], "Stretch Into Your Day");
        assert_eq!(body["caption"], "Five minutes is all it takes.");
        assert_eq!(body["cta"], "Join a free class");
        assert_eq!(body["hashtags"], json!(["yoga", "morning"]));
        assert_eq!(body["design_prompt"], "A sunlit studio with mats");
        assert!(body["image_url"].is_null());
        assert_eq!(body["cost_metadata"]["status"], "logged");
    }

    #[tokio::test]
    async fn test_validation_failure_is_advisory() {
        let dir = tempfile::tempdir().unwrap();
        let reply = "Headline:\nYoga for all\nCaption:\nCheap prices!";
        let (status, body) = post_json(
            app(Some(reply), dir.path()),
            "/generate-post",
            &generate_body("Service Promotion", &["cheap"]),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["caption"], "Cheap prices!");
    }

    #[tokio::test]
    async fn test_upstream_failure_maps_to_server_error() {
        let dir = tempfile::tempdir().unwrap();
        let (status, body) = post_json(
            app(None, dir.path()),
            "/generate-post",
            &generate_body("Festival / Occasion", &[]),
        )
        .await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["error"]["message"], "Failed to generate text content.");
    }

    #[tokio::test]
    async fn test_empty_topic_still_generates() {
        let dir = tempfile::tempdir().unwrap();
        let mut body = generate_body("Educational", &[]);
        body["brief"]["topic"] = json!("");
        let (status, body) = post_json(
            app(Some("Headline:\nMorning Moves\nCaption:\nStart slow."), dir.path()),
            "/generate-post",
            &body,
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["headline"], "Morning Moves");
        assert_eq!(body["caption"], "Start slow.");
    }

    #[tokio::test]
    async fn test_null_cta_enabled_is_accepted() {
        let dir = tempfile::tempdir().unwrap();
        let mut body = generate_body("Festival / Occasion", &[]);
        body["brief"]["cta_enabled"] = Value::Null;
        let (status, _) = post_json(
            app(Some("Headline:\nHappy Holi\nCaption:\nColours and joy."), dir.path()),
            "/generate-post",
            &body,
        )
        .await;

        assert_eq!(status, StatusCode::OK);
    }

    #[tokio::test]
    async fn test_malformed_body_is_client_error() {
        let dir = tempfile::tempdir().unwrap();
        let (status, _) = post_json(
            app(Some("Headline:\nx"), dir.path()),
            "/generate-post",
            &json!({"profile": {"name": "Only a name"}}),
        )
        .await;
        assert!(status.is_client_error());
    }

    #[tokio::test]
    async fn test_serves_index_and_static_assets() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("index.html"), "<h1>Content Engine</h1>").unwrap();
        std::fs::create_dir(dir.path().join("js")).unwrap();
        std::fs::write(dir.path().join("js").join("main.js"), "console.log('hi');").unwrap();

        let index = app(None, dir.path())
            .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(index.status(), StatusCode::OK);
        let bytes = to_bytes(index.into_body(), usize::MAX).await.unwrap();
        assert_eq!(&bytes[..], b"<h1>Content Engine</h1>");

        let script = app(None, dir.path())
            .oneshot(Request::builder().uri("/static/js/main.js").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(script.status(), StatusCode::OK);

        let missing = app(None, dir.path())
            .oneshot(Request::builder().uri("/static/nope.css").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(missing.status(), StatusCode::NOT_FOUND);
    }
}
