//! Compose endpoint integration tests
//!
//! Each test serves the app in-process against its own mocked upstream.

#[cfg(test)]
mod tests {
    use crate::common::assertions::{assert_error_prefix, assert_error_response};
    use crate::common::fixtures::{IMAGE_BASE64, issuer, test_config};
    use crate::common::upstream::composed;
    use crate::common::{MockUpstream, bearer, expired_bearer, other_key_pair, test_app_state};
    use actix_web::http::StatusCode;
    use actix_web::http::header::AUTHORIZATION;
    use actix_web::{test, web};
    use img2haiku_rs::config::{DEFAULT_AUDIENCE, DEFAULT_SUBJECT};
    use img2haiku_rs::server::HttpServer;
    use img2haiku_rs::{Config, Haiku};
    use serde_json::{Value, json};
    use std::time::Duration;

    macro_rules! app {
        ($config:expr) => {
            test::init_service(HttpServer::create_app(web::Data::new(test_app_state(
                $config,
            ))))
            .await
        };
    }

    fn compose_body(tags: Value) -> Value {
        json!({"language": "English", "tags": tags, "base64Image": IMAGE_BASE64})
    }

    fn post(body: Value) -> test::TestRequest {
        test::TestRequest::post()
            .uri("/")
            .insert_header((AUTHORIZATION, bearer()))
            .set_json(body)
    }

    // ==================== Happy path ====================

    #[actix_web::test]
    async fn test_compose_end_to_end() {
        let upstream = MockUpstream::start().await;
        upstream
            .answer_with(
                &composed(
                    "morning fog\\nthe heron lifts\\none grey wing",
                    "A heron rises from a misty lake.",
                ),
                1,
            )
            .await;
        let app = app!(test_config(&upstream.api_base()));

        let req = post(compose_body(json!(["Calm", "Misty"]))).to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::OK);
        let haiku: Haiku = test::read_body_json(resp).await;
        assert_eq!(haiku.haiku, "morning fog\nthe heron lifts\none grey wing");
        assert_eq!(haiku.description, "A heron rises from a misty lake.");

        let bodies = upstream.received_bodies().await;
        assert_eq!(bodies.len(), 1);
        let sent = &bodies[0];
        assert_eq!(sent["model"], "gpt-4o-2024-08-06");
        assert_eq!(sent["max_tokens"], 200);
        assert_eq!(sent["temperature"], 1.0);
        assert_eq!(sent["messages"][0]["role"], "user");

        let content = &sent["messages"][0]["content"];
        assert_eq!(content[0]["type"], "text");
        let prompt = content[0]["text"].as_str().unwrap();
        assert!(prompt.contains("Calm, Misty"));
        assert_eq!(prompt.matches("English").count(), 5);
        assert_eq!(
            content[1],
            json!({"type": "image_url", "image_url": {"url": format!("data:image/jpeg;base64,{}", IMAGE_BASE64)}})
        );
    }

    #[actix_web::test]
    async fn test_compose_without_tags_uses_agnostic_prompt() {
        let upstream = MockUpstream::start().await;
        upstream.answer_with(&composed("a\nb\nc", "d"), 1).await;
        let app = app!(test_config(&upstream.api_base()));

        let req = post(compose_body(Value::Null)).to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let bodies = upstream.received_bodies().await;
        let prompt = bodies[0]["messages"][0]["content"][0]["text"]
            .as_str()
            .unwrap()
            .to_string();
        assert!(prompt.contains("No tags provided"));
    }

    // ==================== Authentication ====================

    #[actix_web::test]
    async fn test_missing_authorization_header() {
        let upstream = MockUpstream::start().await;
        upstream.answer_with(&composed("a", "b"), 0).await;
        let app = app!(test_config(&upstream.api_base()));

        let req = test::TestRequest::post()
            .uri("/")
            .set_json(compose_body(json!([])))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_error_response(resp, 401, "INTERNAL_ERROR", "Authorization header is required")
            .await;
    }

    #[actix_web::test]
    async fn test_basic_auth_rejected() {
        let upstream = MockUpstream::start().await;
        let app = app!(test_config(&upstream.api_base()));

        let req = test::TestRequest::post()
            .uri("/")
            .insert_header((AUTHORIZATION, "Basic dXNlcjpwYXNz"))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_error_response(
            resp,
            401,
            "INTERNAL_ERROR",
            "Authorization header must start with 'Bearer '",
        )
        .await;
    }

    #[actix_web::test]
    async fn test_expired_token() {
        let upstream = MockUpstream::start().await;
        upstream.answer_with(&composed("a", "b"), 0).await;
        let app = app!(test_config(&upstream.api_base()));

        let req = test::TestRequest::post()
            .uri("/")
            .insert_header((AUTHORIZATION, expired_bearer()))
            .set_json(compose_body(json!([])))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_error_response(resp, 401, "AUTH_EXPIRED", "Token is expired").await;
    }

    #[actix_web::test]
    async fn test_token_from_foreign_key() {
        let upstream = MockUpstream::start().await;
        let app = app!(test_config(&upstream.api_base()));

        let token = issuer(other_key_pair())
            .issue_token(DEFAULT_SUBJECT, DEFAULT_AUDIENCE, Duration::from_secs(60))
            .unwrap();
        let req = test::TestRequest::post()
            .uri("/")
            .insert_header((AUTHORIZATION, format!("Bearer {}", token)))
            .set_json(compose_body(json!([])))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_error_response(
            resp,
            401,
            "INTERNAL_ERROR",
            "Invalid JWT token: signature verification failed",
        )
        .await;
    }

    #[actix_web::test]
    async fn test_wrong_audience() {
        let upstream = MockUpstream::start().await;
        let mut config = test_config(&upstream.api_base());
        config.auth.audience = "haiku-internal".to_string();
        let app = app!(config);

        let req = post(compose_body(json!([]))).to_request();
        let resp = test::call_service(&app, req).await;

        assert_error_response(resp, 401, "INTERNAL_ERROR", "Invalid JWT token: invalid audience")
            .await;
    }

    // ==================== Request validation ====================

    #[actix_web::test]
    async fn test_get_with_valid_token() {
        let upstream = MockUpstream::start().await;
        let app = app!(test_config(&upstream.api_base()));

        let req = test::TestRequest::get()
            .uri("/")
            .insert_header((AUTHORIZATION, bearer()))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_error_response(resp, 405, "INTERNAL_ERROR", "Method not allowed").await;
    }

    #[actix_web::test]
    async fn test_empty_body() {
        let upstream = MockUpstream::start().await;
        let app = app!(test_config(&upstream.api_base()));

        let req = test::TestRequest::post()
            .uri("/")
            .insert_header((AUTHORIZATION, bearer()))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_error_prefix(
            resp,
            500,
            "INTERNAL_ERROR",
            "Failed to decode request body: EOF",
        )
        .await;
    }

    #[actix_web::test]
    async fn test_malformed_json_body() {
        let upstream = MockUpstream::start().await;
        let app = app!(test_config(&upstream.api_base()));

        let req = test::TestRequest::post()
            .uri("/")
            .insert_header((AUTHORIZATION, bearer()))
            .set_payload("{\"language\": ")
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_error_prefix(resp, 500, "INTERNAL_ERROR", "Failed to decode request body: ")
            .await;
    }

    #[actix_web::test]
    async fn test_missing_image() {
        let upstream = MockUpstream::start().await;
        upstream.answer_with(&composed("a", "b"), 0).await;
        let app = app!(test_config(&upstream.api_base()));

        let req = post(json!({"language": "English", "tags": ["Calm"]})).to_request();
        let resp = test::call_service(&app, req).await;

        assert_error_response(resp, 500, "INTERNAL_ERROR", "Base64 image is required").await;
    }

    #[actix_web::test]
    async fn test_body_over_limit() {
        let upstream = MockUpstream::start().await;
        let mut config: Config = test_config(&upstream.api_base());
        config.server.max_body_size = 64;
        let app = app!(config);

        let req = post(compose_body(json!(["a".repeat(128)]))).to_request();
        let resp = test::call_service(&app, req).await;

        assert_error_response(
            resp,
            413,
            "INVALID_REQUEST",
            "Request body exceeds the 64 byte limit",
        )
        .await;
    }

    #[actix_web::test]
    async fn test_body_over_limit_without_authorization() {
        let upstream = MockUpstream::start().await;
        let mut config: Config = test_config(&upstream.api_base());
        config.server.max_body_size = 64;
        let app = app!(config);

        let req = test::TestRequest::post()
            .uri("/")
            .set_json(compose_body(json!(["a".repeat(128)])))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_error_response(resp, 401, "INTERNAL_ERROR", "Authorization header is required")
            .await;
    }

    // ==================== Upstream outcomes ====================

    #[actix_web::test]
    async fn test_model_refusal() {
        let upstream = MockUpstream::start().await;
        upstream
            .answer_with(r#"{"error": "This image cannot be used."}"#, 1)
            .await;
        let app = app!(test_config(&upstream.api_base()));

        let resp = test::call_service(&app, post(compose_body(json!([]))).to_request()).await;

        assert_error_response(resp, 400, "INVALID_REQUEST", "This image cannot be used.").await;
    }

    #[actix_web::test]
    async fn test_upstream_status_propagates() {
        let upstream = MockUpstream::start().await;
        upstream.fail_with(429).await;
        let app = app!(test_config(&upstream.api_base()));

        let resp = test::call_service(&app, post(compose_body(json!([]))).to_request()).await;

        assert_error_response(
            resp,
            429,
            "INTERNAL_ERROR",
            "Upstream API returned an error: 429 Too Many Requests",
        )
        .await;
    }

    #[actix_web::test]
    async fn test_upstream_unreachable() {
        let app = app!(test_config("http://127.0.0.1:1/v1"));

        let resp = test::call_service(&app, post(compose_body(json!([]))).to_request()).await;

        assert_error_prefix(resp, 500, "INTERNAL_ERROR", "Failed to call upstream API: ").await;
    }

    #[actix_web::test]
    async fn test_health_is_public() {
        let upstream = MockUpstream::start().await;
        let app = app!(test_config(&upstream.api_base()));

        let req = test::TestRequest::get().uri("/health").to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::OK);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["status"], "healthy");
        assert_eq!(body["version"], img2haiku_rs::VERSION);
    }
}
