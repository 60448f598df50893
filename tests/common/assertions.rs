//! Custom test assertions

use actix_web::body::MessageBody;
use actix_web::dev::ServiceResponse;
use actix_web::http::header::CONTENT_TYPE;
use actix_web::test;
use img2haiku_rs::ErrorResponse;

/// Assert a response is a JSON error with the given status, code and details
pub async fn assert_error_response<B: MessageBody>(
    resp: ServiceResponse<B>,
    status: u16,
    code: &str,
    details: &str,
) {
    assert_eq!(resp.status().as_u16(), status, "unexpected status");
    assert_eq!(
        resp.headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok()),
        Some("application/json")
    );

    let body: ErrorResponse = test::read_body_json(resp).await;
    assert_eq!(body.code.as_str(), code);
    assert_eq!(body.details, details);
}

/// Like [`assert_error_response`], matching only the start of the details
pub async fn assert_error_prefix<B: MessageBody>(
    resp: ServiceResponse<B>,
    status: u16,
    code: &str,
    prefix: &str,
) {
    assert_eq!(resp.status().as_u16(), status, "unexpected status");

    let body: ErrorResponse = test::read_body_json(resp).await;
    assert_eq!(body.code.as_str(), code);
    assert!(
        body.details.starts_with(prefix),
        "details {:?} should start with {:?}",
        body.details,
        prefix
    );
}
