//! Router-level tests against an in-memory store

use axum::body::{to_bytes, Body};
use axum::http::{Request, StatusCode};
use axum::Router;
use serde_json::{json, Value};
use sqlx::SqlitePool;
use tower::ServiceExt;

use shop_server::db::{create_memory_pool, UserRepo};
use shop_server::http::extractors::MAX_SEED_COUNT;
use shop_server::password;
use shop_server::{build_router, ServerConfig};

async fn app() -> (Router, SqlitePool) {
    let pool = create_memory_pool().await.expect("memory pool");
    let app = build_router(pool.clone(), &ServerConfig::default());
    (app, pool)
}

async fn send(app: &Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    let body = match body {
        Some(json) => {
            builder = builder.header("content-type", "application/json");
            Body::from(json.to_string())
        }
        None => Body::empty(),
    };

    let response = app
        .clone()
        .oneshot(builder.body(body).unwrap())
        .await
        .unwrap();

    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or(Value::Null)
    };
    (status, json)
}

async fn send_raw(app: &Router, method: &str, uri: &str, body: &str) -> StatusCode {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_owned()))
        .unwrap();
    app.clone().oneshot(request).await.unwrap().status()
}

fn ivan() -> Value {
    json!({
        "name": "Ivan",
        "surname": "Petrov",
        "email": "ivan@example.com",
        "password": "hunter2"
    })
}

#[tokio::test]
async fn health_endpoint() {
    let (app, _) = app().await;
    let (status, body) = send(&app, "GET", "/health", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
}

#[tokio::test]
async fn product_end_to_end() {
    let (app, _) = app().await;

    let widget = json!({"product_name": "Widget", "description": "A widget", "price": 9.99});
    let (status, body) = send(&app, "POST", "/products/", Some(widget)).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(
        body,
        json!({"id": 1, "product_name": "Widget", "description": "A widget", "price": 9.99})
    );

    let (status, list) = send(&app, "GET", "/products/", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(list, json!([body]));
}

#[tokio::test]
async fn non_positive_price_rejected_before_store() {
    let (app, _) = app().await;

    for price in [0.0, -1.5] {
        let product = json!({"product_name": "Bad", "description": "", "price": price});
        let (status, body) = send(&app, "POST", "/products/", Some(product)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "validation_error");
    }

    let (_, list) = send(&app, "GET", "/products/", None).await;
    assert_eq!(list, json!([]));
}

#[tokio::test]
async fn malformed_bodies_are_validation_errors() {
    let (app, _) = app().await;

    // wrong primitive type
    let (status, body) = send(
        &app,
        "POST",
        "/products/",
        Some(json!({"product_name": "Widget", "description": "x", "price": "cheap"})),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "validation_error");

    // missing field
    let (status, _) = send(&app, "POST", "/users/", Some(json!({"name": "Ivan"}))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    // not JSON at all
    assert_eq!(send_raw(&app, "POST", "/orders/", "{oops").await, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn user_create_hides_password_and_hashes_it() {
    let (app, pool) = app().await;

    let (status, body) = send(&app, "POST", "/users/", Some(ivan())).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(
        body,
        json!({"id": 1, "name": "Ivan", "surname": "Petrov", "email": "ivan@example.com"})
    );

    let (_, list) = send(&app, "GET", "/users/", None).await;
    assert_eq!(list, json!([body]));

    let hash = UserRepo::new(&pool).password_hash(1).await.unwrap().unwrap();
    assert_ne!(hash, "hunter2");
    assert!(password::verify("hunter2", &hash));
}

#[tokio::test]
async fn duplicate_email_conflicts_without_new_row() {
    let (app, _) = app().await;

    send(&app, "POST", "/users/", Some(ivan())).await;
    let mut other = ivan();
    other["name"] = json!("Someone");

    let (status, body) = send(&app, "POST", "/users/", Some(other)).await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["error"], "constraint_violation");

    let (_, list) = send(&app, "GET", "/users/", None).await;
    assert_eq!(list.as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn update_to_taken_email_conflicts_and_keeps_row() {
    let (app, _) = app().await;
    send(&app, "GET", "/fake_users/2", None).await;
    let (_, before) = send(&app, "GET", "/users/", None).await;

    let mut clash = ivan();
    clash["email"] = json!("email0@test.ru");
    let (status, body) = send(&app, "PUT", "/users/2", Some(clash)).await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["error"], "constraint_violation");

    let (_, after) = send(&app, "GET", "/users/", None).await;
    assert_eq!(after, before);
    assert_eq!(after[1]["email"], "email1@test.ru");
}

#[tokio::test]
async fn overlong_fields_rejected() {
    let (app, _) = app().await;

    let mut user = ivan();
    user["surname"] = json!("s".repeat(51));
    let (status, body) = send(&app, "POST", "/users/", Some(user)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "surname exceeds maximum length of 50 characters");
}

#[tokio::test]
async fn update_changes_only_target_row() {
    let (app, _) = app().await;
    send(&app, "GET", "/fake_products/3", None).await;

    let replacement = json!({"product_name": "Gadget", "description": "new", "price": 1.5});
    let (status, body) = send(&app, "PUT", "/products/2", Some(replacement)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({"id": 2, "product_name": "Gadget", "description": "new", "price": 1.5})
    );

    let (_, list) = send(&app, "GET", "/products/", None).await;
    let list = list.as_array().unwrap();
    assert_eq!(list[0]["product_name"], "product0");
    assert_eq!(list[1], body);
    assert_eq!(list[2]["product_name"], "product2");
}

#[tokio::test]
async fn update_missing_row_still_succeeds() {
    let (app, _) = app().await;

    let (status, body) = send(&app, "PUT", "/users/77", Some(ivan())).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["id"], 77);

    let (_, list) = send(&app, "GET", "/users/", None).await;
    assert_eq!(list, json!([]));
}

#[tokio::test]
async fn delete_removes_row_and_is_idempotent() {
    let (app, _) = app().await;
    send(&app, "GET", "/fake_users/2", None).await;

    let (status, body) = send(&app, "DELETE", "/users/1", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"message": "user with id 1 deleted"}));

    let (_, list) = send(&app, "GET", "/users/", None).await;
    let ids: Vec<_> = list.as_array().unwrap().iter().map(|u| u["id"].clone()).collect();
    assert_eq!(ids, [json!(2)]);

    let (status, _) = send(&app, "DELETE", "/users/1", None).await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn non_integer_id_rejected() {
    let (app, _) = app().await;
    let (status, body) = send(&app, "DELETE", "/orders/abc", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "id: must be an integer");
}

#[tokio::test]
async fn seed_users() {
    let (app, _) = app().await;

    let (status, body) = send(&app, "GET", "/fake_users/5", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"message": "5 users created"}));

    let (_, list) = send(&app, "GET", "/users/", None).await;
    let list = list.as_array().unwrap();
    assert_eq!(list.len(), 5);
    for (i, user) in list.iter().enumerate() {
        assert_eq!(user["name"], format!("user{i}"));
        assert_eq!(user["email"], format!("email{i}@test.ru"));
    }

    // Same emails again: whole batch rejected
    let (status, _) = send(&app, "GET", "/fake_users/5", None).await;
    assert_eq!(status, StatusCode::CONFLICT);
    let (_, list) = send(&app, "GET", "/users/", None).await;
    assert_eq!(list.as_array().unwrap().len(), 5);
}

#[tokio::test]
async fn seed_orders_and_products() {
    let (app, _) = app().await;

    let (_, body) = send(&app, "GET", "/fake_products/2", None).await;
    assert_eq!(body["message"], "2 products created");
    let (_, body) = send(&app, "GET", "/fake_orders/2", None).await;
    assert_eq!(body["message"], "2 orders created");

    let (_, products) = send(&app, "GET", "/products/", None).await;
    assert_eq!(products[1]["price"], 200.0);

    let (_, orders) = send(&app, "GET", "/orders/", None).await;
    assert_eq!(orders[1]["user_id"], 2);
    assert_eq!(orders[1]["product_id"], 2);
    assert_eq!(orders[1]["status"], "new");
}

#[tokio::test]
async fn seed_count_validated() {
    let (app, _) = app().await;

    let (status, _) = send(&app, "GET", "/fake_users/-1", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = send(&app, "GET", "/fake_products/10001", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, body) = send(&app, "GET", "/fake_orders/0", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "0 orders created");
}

#[tokio::test]
async fn seed_users_at_the_cap() {
    let (app, pool) = app().await;

    let uri = format!("/fake_users/{}", MAX_SEED_COUNT + 1);
    let (status, _) = send(&app, "GET", &uri, None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let uri = format!("/fake_users/{MAX_SEED_COUNT}");
    let (status, body) = send(&app, "GET", &uri, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], format!("{MAX_SEED_COUNT} users created"));

    let (_, list) = send(&app, "GET", "/users/", None).await;
    assert_eq!(list.as_array().unwrap().len(), MAX_SEED_COUNT as usize);

    // Demo accounts still verify against their generated password
    let hash = UserRepo::new(&pool).password_hash(10).await.unwrap().unwrap();
    assert!(password::verify("password9", &hash));
}

#[tokio::test]
async fn order_date_is_server_assigned() {
    let (app, _) = app().await;

    let order = json!({
        "user_id": 1,
        "product_id": 1,
        "order_date": "1999-12-31T00:00:00",
        "status": "paid"
    });
    let (status, created) = send(&app, "POST", "/orders/", Some(order)).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(created["status"], "paid");

    let stamped = created["order_date"].as_str().unwrap();
    assert!(!stamped.starts_with("1999"));

    let (_, list) = send(&app, "GET", "/orders/", None).await;
    assert_eq!(list, json!([created]));

    // Update restamps and keeps the path id
    let update = json!({"user_id": 3, "product_id": 4, "status": "shipped"});
    let (status, updated) = send(&app, "PUT", "/orders/1", Some(update)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["id"], 1);
    assert_eq!(updated["user_id"], 3);
    assert_eq!(updated["status"], "shipped");
}

#[tokio::test]
async fn order_status_required() {
    let (app, _) = app().await;
    let order = json!({"user_id": 1, "product_id": 1, "status": ""});
    let (status, body) = send(&app, "POST", "/orders/", Some(order)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "status cannot be empty");
}

#[tokio::test]
async fn routes_accept_paths_without_trailing_slash() {
    let (app, _) = app().await;
    let (status, _) = send(&app, "GET", "/orders", None).await;
    assert_eq!(status, StatusCode::OK);
}
