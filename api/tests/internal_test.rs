//! Integration tests for the internal administration endpoints.

mod common;

use actix_web::http::header;
use actix_web::test;

use ag_api::app::create_app;
use ag_core::domain::entities::user::NewUser;
use ag_core::repositories::UserRepository;

#[actix_web::test]
async fn test_role_catalogue_round_trip() {
    let (state, _, users) = common::test_state_with_handles();
    let app = test::init_service(create_app(state)).await;

    let create = test::TestRequest::post()
        .uri("/internal/roles")
        .set_json(serde_json::json!({"roles": ["admin", "editor"]}))
        .to_request();
    let resp = test::call_service(&app, create).await;
    assert_eq!(resp.status(), 200);
    assert!(test::read_body(resp).await.is_empty());
    assert_eq!(users.list_roles().await.unwrap(), vec!["admin", "editor"]);

    let delete = test::TestRequest::delete()
        .uri("/internal/roles/delete?roles=admin,editor")
        .insert_header((header::CONTENT_TYPE, "application/json"))
        .to_request();
    assert_eq!(test::call_service(&app, delete).await.status(), 200);
    assert!(users.list_roles().await.unwrap().is_empty());
}

#[actix_web::test]
async fn test_role_validation() {
    let app = test::init_service(create_app(common::test_state())).await;

    // Empty list
    let empty = test::TestRequest::post()
        .uri("/internal/roles")
        .set_json(serde_json::json!({"roles": []}))
        .to_request();
    let resp = test::call_service(&app, empty).await;
    assert_eq!(resp.status(), 422);
    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["errors"], "Blank Roles");

    // Blank role name
    let blank = test::TestRequest::post()
        .uri("/internal/roles")
        .set_json(serde_json::json!({"roles": ["admin", ""]}))
        .to_request();
    let resp = test::call_service(&app, blank).await;
    assert_eq!(resp.status(), 422);
    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["errors"], "Blank Role Name");

    // Undecodable body
    let bad_json = test::TestRequest::post()
        .uri("/internal/roles")
        .insert_header((header::CONTENT_TYPE, "application/json"))
        .set_payload("{not json")
        .to_request();
    assert_eq!(test::call_service(&app, bad_json).await.status(), 422);
}

#[actix_web::test]
async fn test_delete_missing_roles() {
    let app = test::init_service(create_app(common::test_state())).await;

    let req = test::TestRequest::delete()
        .uri("/internal/roles/delete?roles=ghost")
        .insert_header((header::CONTENT_TYPE, "application/json"))
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), 422);

    let missing_param = test::TestRequest::delete()
        .uri("/internal/roles/delete")
        .insert_header((header::CONTENT_TYPE, "application/json"))
        .to_request();
    let resp = test::call_service(&app, missing_param).await;
    assert_eq!(resp.status(), 422);
    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["errors"], "Blank Roles");
}

#[actix_web::test]
async fn test_delete_user() {
    let (state, _, users) = common::test_state_with_handles();
    let app = test::init_service(create_app(state)).await;

    let user = users
        .create(NewUser {
            email: "user@example.com".to_string(),
            password_hash: "$2b$10$hash".to_string(),
            roles: vec![],
        })
        .await
        .unwrap();

    let req = test::TestRequest::delete()
        .uri(&format!("/internal/users/delete?id={}", user.id))
        .insert_header((header::CONTENT_TYPE, "application/json"))
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), 200);
    assert!(users.find_by_email("user@example.com").await.unwrap().is_none());

    // Deleting again: nothing matches
    let again = test::TestRequest::delete()
        .uri(&format!("/internal/users/delete?id={}", user.id))
        .insert_header((header::CONTENT_TYPE, "application/json"))
        .to_request();
    assert_eq!(test::call_service(&app, again).await.status(), 422);
}

#[actix_web::test]
async fn test_delete_user_invalid_id() {
    let app = test::init_service(create_app(common::test_state())).await;

    for uri in [
        "/internal/users/delete?id=abc",
        "/internal/users/delete",
    ] {
        let req = test::TestRequest::delete()
            .uri(uri)
            .insert_header((header::CONTENT_TYPE, "application/json"))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 422, "uri {}", uri);
        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["errors"], "Invalid User ID");
    }
}

#[actix_web::test]
async fn test_internal_method_guards() {
    let app = test::init_service(create_app(common::test_state())).await;

    let wrong_method = test::TestRequest::get()
        .uri("/internal/roles")
        .insert_header((header::CONTENT_TYPE, "application/json"))
        .to_request();
    assert_eq!(test::call_service(&app, wrong_method).await.status(), 405);

    let wrong_delete = test::TestRequest::post()
        .uri("/internal/users/delete?id=1")
        .insert_header((header::CONTENT_TYPE, "application/json"))
        .to_request();
    assert_eq!(test::call_service(&app, wrong_delete).await.status(), 405);
}
