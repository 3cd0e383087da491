use axum::{
  extract::State,
  http::{HeaderMap, StatusCode},
  response::Json as JsonResponse,
  routing::{get, post, Router},
};

use super::model::{LoginRequest, LoginResponse, SignupRequest, SignupResponse, User};
use crate::{
  middleware::{auth::auth_middleware, json::AppJson},
  state::{AppState, SharedAppState},
  AppError,
};

pub fn user_routes() -> Router<SharedAppState> {
  Router::new()
    .route("/user/signup", post(signup_handler))
    .route("/user/login", post(login_handler))
    .route("/user/me", get(me_handler))
}

pub async fn signup_handler(
  State(state): State<SharedAppState>,
  AppJson(payload): AppJson<SignupRequest>,
) -> Result<(StatusCode, JsonResponse<SignupResponse>), AppError> {
  let user = state.signup(payload).await?;

  Ok((
    StatusCode::CREATED,
    JsonResponse(SignupResponse {
      message: "User created successfully.".to_string(),
      user_id: user.id,
    }),
  ))
}

pub async fn login_handler(
  State(state): State<SharedAppState>,
  AppJson(payload): AppJson<LoginRequest>,
) -> Result<JsonResponse<LoginResponse>, AppError> {
  state.login(payload).await.map(JsonResponse).map_err(Into::into)
}

pub async fn me_handler(State(state): State<SharedAppState>, headers: HeaderMap) -> Result<JsonResponse<User>, AppError> {
  let claims = auth_middleware(&headers, state.jwt())?;

  state
    .get_user_by_id(claims.user_id)
    .await
    .map(JsonResponse)
    .map_err(Into::into)
}
