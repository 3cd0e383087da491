use axum::{response::Json, routing::get, Router};
use serde_json::{json, Value};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::{
  domains::{employee::rest::employee_routes, user::rest::user_routes},
  state::SharedAppState,
};

pub fn create_app(state: SharedAppState) -> Router {
  Router::new()
    .route("/health", get(health_handler))
    .nest("/api/v1", user_routes().merge(employee_routes()))
    .layer(TraceLayer::new_for_http())
    .layer(CorsLayer::permissive())
    .with_state(state)
}

pub async fn health_handler() -> Json<Value> {
  Json(json!({ "status": "ok" }))
}
