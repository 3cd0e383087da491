use axum::{
  extract::{Path, State},
  http::StatusCode,
  response::Json as JsonResponse,
  routing::get,
  Router,
};

use super::model::{
  CreateEmployeeRequest, CreateEmployeeResponse, DeleteEmployeeQuery, Employee, ListEmployeesQuery, MessageResponse,
  UpdateEmployeeRequest,
};
use super::service::EMPLOYEE_NOT_FOUND;
use crate::{
  middleware::json::{AppJson, AppQuery},
  state::{AppState, SharedAppState},
  AppError,
};

pub fn employee_routes() -> Router<SharedAppState> {
  Router::new()
    .route(
      "/emp/employees",
      get(list_employees_handler)
        .post(create_employee_handler)
        .delete(delete_employee_handler),
    )
    .route(
      "/emp/employees/{eid}",
      get(get_employee_handler).put(update_employee_handler),
    )
}

pub async fn list_employees_handler(
  State(state): State<SharedAppState>,
  AppQuery(query): AppQuery<ListEmployeesQuery>,
) -> Result<JsonResponse<Vec<Employee>>, AppError> {
  state
    .list_employees(query)
    .await
    .map(JsonResponse)
    .map_err(Into::into)
}

pub async fn create_employee_handler(
  State(state): State<SharedAppState>,
  AppJson(payload): AppJson<CreateEmployeeRequest>,
) -> Result<(StatusCode, JsonResponse<CreateEmployeeResponse>), AppError> {
  let employee = state.create_employee(payload).await?;

  Ok((
    StatusCode::CREATED,
    JsonResponse(CreateEmployeeResponse {
      message: "Employee created successfully.".to_string(),
      employee_id: employee.id,
    }),
  ))
}

pub async fn get_employee_handler(
  State(state): State<SharedAppState>,
  Path(eid): Path<String>,
) -> Result<JsonResponse<Employee>, AppError> {
  state.get_employee(&eid).await.map(JsonResponse).map_err(Into::into)
}

pub async fn update_employee_handler(
  State(state): State<SharedAppState>,
  Path(eid): Path<String>,
  AppJson(payload): AppJson<UpdateEmployeeRequest>,
) -> Result<JsonResponse<MessageResponse>, AppError> {
  state.update_employee(&eid, payload).await?;

  Ok(JsonResponse(MessageResponse {
    message: "Employee details updated successfully.".to_string(),
  }))
}

pub async fn delete_employee_handler(
  State(state): State<SharedAppState>,
  AppQuery(query): AppQuery<DeleteEmployeeQuery>,
) -> Result<StatusCode, AppError> {
  let eid = query.eid.ok_or_else(|| AppError::not_found(EMPLOYEE_NOT_FOUND))?;
  state.delete_employee(&eid).await?;

  Ok(StatusCode::NO_CONTENT)
}
