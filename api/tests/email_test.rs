//! Integration tests for the registration and login endpoints.

mod common;

use actix_web::http::header;
use actix_web::test;

use ag_api::app::create_app;

fn register_body() -> serde_json::Value {
    serde_json::json!({
        "email": "user@example.com",
        "password": "password123",
    })
}

#[actix_web::test]
async fn test_register_returns_token_pair() {
    let (state, sessions, _) = common::test_state_with_handles();
    let app = test::init_service(create_app(state.clone())).await;

    let req = test::TestRequest::post()
        .uri("/email/register")
        .set_json(register_body())
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 200);

    let body: serde_json::Value = test::read_body_json(resp).await;
    let object = body.as_object().unwrap();
    assert_eq!(object.len(), 2);

    let claims = state
        .auth
        .verify_access_token(body["access_token"].as_str().unwrap())
        .unwrap();
    assert!(claims.roles.is_empty());

    // Both session records were opened at issuance
    assert_eq!(sessions.len(), 2);
}

#[actix_web::test]
async fn test_register_validation_errors() {
    let app = test::init_service(create_app(common::test_state())).await;

    let bad_email = test::TestRequest::post()
        .uri("/email/register")
        .set_json(serde_json::json!({
            "email": "not-an-email",
            "password": "password123",
        }))
        .to_request();
    let resp = test::call_service(&app, bad_email).await;
    assert_eq!(resp.status(), 422);
    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["errors"]["email"], "has invalid format");

    let short_password = test::TestRequest::post()
        .uri("/email/register")
        .set_json(serde_json::json!({
            "email": "user@example.com",
            "password": "short",
        }))
        .to_request();
    let resp = test::call_service(&app, short_password).await;
    assert_eq!(resp.status(), 422);
    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["errors"]["password"], "minimal length is 8 characters");
}

#[actix_web::test]
async fn test_register_duplicate_email() {
    let app = test::init_service(create_app(common::test_state())).await;

    let first = test::TestRequest::post()
        .uri("/email/register")
        .set_json(register_body())
        .to_request();
    assert_eq!(test::call_service(&app, first).await.status(), 200);

    let second = test::TestRequest::post()
        .uri("/email/register")
        .set_json(register_body())
        .to_request();
    let resp = test::call_service(&app, second).await;
    assert_eq!(resp.status(), 422);
    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["errors"]["email"], "is already taken");
}

#[actix_web::test]
async fn test_register_guards_and_body_handling() {
    let app = test::init_service(create_app(common::test_state())).await;

    // Wrong method
    let wrong_method = test::TestRequest::get()
        .uri("/email/register")
        .insert_header((header::CONTENT_TYPE, "application/json"))
        .to_request();
    assert_eq!(test::call_service(&app, wrong_method).await.status(), 405);

    // Missing content type
    let no_content_type = test::TestRequest::post()
        .uri("/email/register")
        .set_payload(register_body().to_string())
        .to_request();
    assert_eq!(
        test::call_service(&app, no_content_type).await.status(),
        400
    );

    // Undecodable body
    let bad_json = test::TestRequest::post()
        .uri("/email/register")
        .insert_header((header::CONTENT_TYPE, "application/json"))
        .set_payload("{not json")
        .to_request();
    assert_eq!(test::call_service(&app, bad_json).await.status(), 400);
}

#[actix_web::test]
async fn test_login_round_trip() {
    let app = test::init_service(create_app(common::test_state())).await;

    let register = test::TestRequest::post()
        .uri("/email/register")
        .set_json(register_body())
        .to_request();
    assert_eq!(test::call_service(&app, register).await.status(), 200);

    let login = test::TestRequest::post()
        .uri("/email/login")
        .set_json(register_body())
        .to_request();
    let resp = test::call_service(&app, login).await;
    assert_eq!(resp.status(), 200);

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert!(body["access_token"].is_string());
    assert!(body["refresh_token"].is_string());
}

#[actix_web::test]
async fn test_login_failures_are_uniform() {
    let app = test::init_service(create_app(common::test_state())).await;

    let register = test::TestRequest::post()
        .uri("/email/register")
        .set_json(register_body())
        .to_request();
    assert_eq!(test::call_service(&app, register).await.status(), 200);

    let wrong_password = test::TestRequest::post()
        .uri("/email/login")
        .set_json(serde_json::json!({
            "email": "user@example.com",
            "password": "wrong-password",
        }))
        .to_request();
    let wrong_password_resp = test::call_service(&app, wrong_password).await;
    assert_eq!(wrong_password_resp.status(), 401);
    let wrong_password_body: serde_json::Value = test::read_body_json(wrong_password_resp).await;

    let unknown_email = test::TestRequest::post()
        .uri("/email/login")
        .set_json(serde_json::json!({
            "email": "nobody@example.com",
            "password": "password123",
        }))
        .to_request();
    let unknown_email_resp = test::call_service(&app, unknown_email).await;
    assert_eq!(unknown_email_resp.status(), 401);
    let unknown_email_body: serde_json::Value = test::read_body_json(unknown_email_resp).await;

    // Unknown account and wrong password are indistinguishable
    assert_eq!(wrong_password_body, unknown_email_body);
}
