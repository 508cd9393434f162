//! HTTP-level tests for the `/services` resource.

mod common;

use axum::http::StatusCode;
use common::{body_json, delete, get, post_json, post_raw, put_json};
use sqlx::SqlitePool;
use utalii_db::models::service::CreateService;
use utalii_db::models::user::CreateUser;
use utalii_db::repositories::{ServiceRepo, UserRepo};

/// Insert a service directly and return its id.
async fn create_test_service(pool: &SqlitePool) -> i64 {
    ServiceRepo::create(
        pool,
        &CreateService {
            name: "Dhow Cruise".into(),
            description: "Sunset sail around Lamu".into(),
            image: Some("https://img.example.com/dhow.jpg".into()),
            location: Some("Lamu".into()),
            user_id: None,
        },
    )
    .await
    .unwrap()
    .id
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_list_services_wraps_array(pool: SqlitePool) {
    let id = create_test_service(&pool).await;
    let app = common::build_test_app(pool);

    let response = get(app, "/services").await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    let services = json["services"].as_array().expect("services must be an array");
    assert_eq!(services.len(), 1);
    assert_eq!(services[0]["id"], id);
    assert_eq!(services[0]["name"], "Dhow Cruise");
    assert_eq!(services[0]["location"], "Lamu");
    assert!(services[0]["user_id"].is_null());
    assert!(services[0]["user"].is_null());
}

/// An owned service nests its user, minus the user's own services.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_list_services_nests_owner(pool: SqlitePool) {
    let owner = UserRepo::create(
        &pool,
        &CreateUser {
            name: "Amani".into(),
            email: "amani@example.com".into(),
            phone_number: "0722000000".into(),
            password_hash: "$argon2id$secret".into(),
        },
    )
    .await
    .unwrap();
    ServiceRepo::create(
        &pool,
        &CreateService {
            name: "Bird Walk".into(),
            description: "Morning birding at Naivasha".into(),
            image: None,
            location: Some("Naivasha".into()),
            user_id: Some(owner.id),
        },
    )
    .await
    .unwrap();
    let app = common::build_test_app(pool);

    let json = body_json(get(app, "/services").await).await;
    let user = &json["services"][0]["user"];

    assert_eq!(user["id"], owner.id);
    assert_eq!(user["email"], "amani@example.com");
    assert!(user.get("services").is_none());
    assert!(user.get("password").is_none());
    assert_eq!(user["hotels"], serde_json::json!([]));
    assert_eq!(user["favorites"], serde_json::json!([]));
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_create_service_returns_201(pool: SqlitePool) {
    let app = common::build_test_app(pool.clone());

    let body = serde_json::json!({
        "name": "Hot Air Balloon",
        "description": "Dawn flight over the Mara",
    });
    let response = post_json(app, "/services", body).await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    assert_eq!(json["name"], "Hot Air Balloon");
    assert_eq!(json["description"], "Dawn flight over the Mara");
    assert!(json["image"].is_null());
    assert!(json["location"].is_null());
    assert!(json["user"].is_null());

    let id = json["id"].as_i64().unwrap();
    assert!(ServiceRepo::find_by_id(&pool, id).await.unwrap().is_some());
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_create_service_without_name_returns_400(pool: SqlitePool) {
    create_test_service(&pool).await;
    let app = common::build_test_app(pool.clone());

    let body = serde_json::json!({ "description": "No name given" });
    let response = post_json(app, "/services", body).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["code"], "VALIDATION_ERROR");
    assert_eq!(ServiceRepo::list(&pool).await.unwrap().len(), 1);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_create_service_blank_description_returns_400(pool: SqlitePool) {
    let app = common::build_test_app(pool.clone());

    let body = serde_json::json!({ "name": "Snorkelling", "description": "   " });
    let response = post_json(app, "/services", body).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert!(ServiceRepo::list(&pool).await.unwrap().is_empty());
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_create_service_malformed_json_returns_400(pool: SqlitePool) {
    let app = common::build_test_app(pool.clone());

    let response = post_raw(app, "/services", "{\"name\": ").await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["code"], "BAD_REQUEST");
    assert!(json["error"].is_string());
    assert!(ServiceRepo::list(&pool).await.unwrap().is_empty());
}

/// Only the supplied field changes.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_update_service_description_only(pool: SqlitePool) {
    let id = create_test_service(&pool).await;
    let app = common::build_test_app(pool.clone());

    let body = serde_json::json!({ "description": "X" });
    let response = put_json(app, &format!("/services/{id}"), body).await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["description"], "X");

    let stored = ServiceRepo::find_by_id(&pool, id).await.unwrap().unwrap();
    assert_eq!(stored.description, "X");
    assert_eq!(stored.name, "Dhow Cruise");
    assert_eq!(stored.image.as_deref(), Some("https://img.example.com/dhow.jpg"));
    assert_eq!(stored.location.as_deref(), Some("Lamu"));
}

/// An explicit `null` is treated the same as an absent field.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_update_service_null_keeps_value(pool: SqlitePool) {
    let id = create_test_service(&pool).await;
    let app = common::build_test_app(pool.clone());

    let body = serde_json::json!({ "location": null, "name": "Dhow Safari" });
    let response = put_json(app, &format!("/services/{id}"), body).await;

    assert_eq!(response.status(), StatusCode::OK);
    let stored = ServiceRepo::find_by_id(&pool, id).await.unwrap().unwrap();
    assert_eq!(stored.name, "Dhow Safari");
    assert_eq!(stored.location.as_deref(), Some("Lamu"));
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_update_service_blank_name_returns_400(pool: SqlitePool) {
    let id = create_test_service(&pool).await;
    let app = common::build_test_app(pool.clone());

    let body = serde_json::json!({ "name": "" });
    let response = put_json(app, &format!("/services/{id}"), body).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let stored = ServiceRepo::find_by_id(&pool, id).await.unwrap().unwrap();
    assert_eq!(stored.name, "Dhow Cruise");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_update_missing_service_returns_404(pool: SqlitePool) {
    let app = common::build_test_app(pool);

    let body = serde_json::json!({ "description": "X" });
    let response = put_json(app, "/services/999", body).await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let json = body_json(response).await;
    assert_eq!(json["code"], "NOT_FOUND");
    assert_eq!(json["error"], "Service with id 999 not found");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_delete_service(pool: SqlitePool) {
    let id = create_test_service(&pool).await;
    let app = common::build_test_app(pool.clone());

    let response = delete(app.clone(), &format!("/services/{id}")).await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["message"], "Service deleted successfully!");
    assert!(ServiceRepo::find_by_id(&pool, id).await.unwrap().is_none());

    let response = delete(app, &format!("/services/{id}")).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

/// A non-numeric id is rejected with the JSON error body.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_non_numeric_service_id_returns_json_400(pool: SqlitePool) {
    let app = common::build_test_app(pool);

    let response = delete(app.clone(), "/services/abc").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["code"], "BAD_REQUEST");
    assert!(json["error"].as_str().unwrap().contains("abc"));

    let body = serde_json::json!({ "description": "X" });
    let response = put_json(app, "/services/abc", body).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["code"], "BAD_REQUEST");
}
