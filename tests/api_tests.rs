//! End-to-end tests against a real Postgres. Run with
//! `TEST_DATABASE_URL=postgres://... cargo test -- --ignored`.

use axum::{
  body::Body,
  http::{Request, StatusCode},
  Router,
};
use employee_api::{app::create_app, config::Config, state::SharedAppState};
use http_body_util::BodyExt;
use serde_json::{json, Value};
use serial_test::serial;
use sqlx::PgPool;
use tower::ServiceExt;

async fn setup() -> (Router, PgPool) {
  let database_url = std::env::var("TEST_DATABASE_URL").expect("TEST_DATABASE_URL must be set");
  let config = Config::from_lookup(|key| match key {
    "DATABASE_URL" => Some(database_url.clone()),
    "JWT_SECRET" => Some("integration-secret".to_string()),
    "BCRYPT_COST" => Some("4".to_string()),
    _ => None,
  })
  .unwrap();

  let pool = PgPool::connect(&config.database_url).await.unwrap();
  sqlx::migrate!("./migrations").run(&pool).await.unwrap();
  sqlx::query("TRUNCATE TABLE users, employees")
    .execute(&pool)
    .await
    .unwrap();

  (create_app(SharedAppState::new(pool.clone(), &config)), pool)
}

async fn call(app: &Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
  let builder = Request::builder().method(method).uri(uri);
  let request = match body {
    Some(body) => builder
      .header("content-type", "application/json")
      .body(Body::from(serde_json::to_vec(&body).unwrap()))
      .unwrap(),
    None => builder.body(Body::empty()).unwrap(),
  };

  let response = app.clone().oneshot(request).await.unwrap();
  let status = response.status();
  let bytes = response.into_body().collect().await.unwrap().to_bytes();
  let value = if bytes.is_empty() {
    Value::Null
  } else {
    serde_json::from_slice(&bytes).unwrap()
  };
  (status, value)
}

#[tokio::test]
#[serial]
#[ignore = "requires TEST_DATABASE_URL"]
async fn test_signup_and_login() {
  let (app, pool) = setup().await;
  let payload = json!({ "username": "al", "email": "a@b.com", "password": "secret1" });

  let (status, body) = call(&app, "POST", "/api/v1/user/signup", Some(payload.clone())).await;
  assert_eq!(status, StatusCode::CREATED);
  assert_eq!(body["message"], "User created successfully.");

  let (status, body) = call(&app, "POST", "/api/v1/user/signup", Some(payload)).await;
  assert_eq!(status, StatusCode::BAD_REQUEST);
  assert_eq!(body["message"], "User already exists.");

  let stored: String = sqlx::query_scalar("SELECT password FROM users WHERE email = $1")
    .bind("a@b.com")
    .fetch_one(&pool)
    .await
    .unwrap();
  assert_ne!(stored, "secret1");

  let (status, body) = call(
    &app,
    "POST",
    "/api/v1/user/login",
    Some(json!({ "email": "a@b.com", "password": "secret1" })),
  )
  .await;
  assert_eq!(status, StatusCode::OK);
  assert!(body["jwt_token"].is_string());

  let (status, _) = call(
    &app,
    "POST",
    "/api/v1/user/login",
    Some(json!({ "email": "a@b.com", "password": "wrong-one" })),
  )
  .await;
  assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
#[serial]
#[ignore = "requires TEST_DATABASE_URL"]
async fn test_employee_lifecycle() {
  let (app, _pool) = setup().await;

  let (status, body) = call(
    &app,
    "POST",
    "/api/v1/emp/employees",
    Some(json!({
      "first_name": "Jane",
      "last_name": "Doe",
      "email": "jane@example.com",
      "position": "Engineer",
      "salary": 85000,
      "department": "R&D"
    })),
  )
  .await;
  assert_eq!(status, StatusCode::CREATED);
  let id = body["employee_id"].as_str().unwrap().to_string();

  let (status, body) = call(&app, "GET", "/api/v1/emp/employees", None).await;
  assert_eq!(status, StatusCode::OK);
  assert_eq!(body.as_array().unwrap().len(), 1);

  let (status, _) = call(
    &app,
    "PUT",
    &format!("/api/v1/emp/employees/{}", id),
    Some(json!({ "position": "Lead" })),
  )
  .await;
  assert_eq!(status, StatusCode::OK);

  let (status, body) = call(&app, "GET", &format!("/api/v1/emp/employees/{}", id), None).await;
  assert_eq!(status, StatusCode::OK);
  assert_eq!(body["position"], "Lead");
  assert_eq!(body["first_name"], "Jane");

  let (status, _) = call(&app, "DELETE", &format!("/api/v1/emp/employees?eid={}", id), None).await;
  assert_eq!(status, StatusCode::NO_CONTENT);

  let (status, _) = call(&app, "DELETE", &format!("/api/v1/emp/employees?eid={}", id), None).await;
  assert_eq!(status, StatusCode::NOT_FOUND);

  let (status, _) = call(&app, "GET", &format!("/api/v1/emp/employees/{}", id), None).await;
  assert_eq!(status, StatusCode::NOT_FOUND);
}
