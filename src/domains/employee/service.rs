use async_trait::async_trait;
use thiserror::Error;
use uuid::Uuid;
use validator::{Validate, ValidationErrors};

use super::{
  model::{CreateEmployeeRequest, Employee, ListEmployeesQuery, UpdateEmployeeRequest},
  repository::EmployeeRepository,
};

pub const EMPLOYEE_NOT_FOUND: &str = "Employee not found.";

#[derive(Debug, Error)]
pub enum EmployeeServiceError {
  #[error("Validation Error: {0}")]
  ValidationError(ValidationErrors),
  #[error("Not Found: {0}")]
  NotFound(String),
  #[error("Bad Request: {0}")]
  BadRequest(String),
  #[error("Internal Server Error: {0}")]
  InternalServerError(String),
}

crate::impl_service_error_conversions!(EmployeeServiceError, InternalServerError, NotFound, BadRequest);

#[async_trait]
pub trait EmployeeService: Send + Sync {
  async fn list_employees(&self, query: ListEmployeesQuery) -> Result<Vec<Employee>, EmployeeServiceError>;
  async fn create_employee(&self, req: CreateEmployeeRequest) -> Result<Employee, EmployeeServiceError>;
  async fn get_employee(&self, employee_id: &str) -> Result<Employee, EmployeeServiceError>;
  async fn update_employee(
    &self,
    employee_id: &str,
    req: UpdateEmployeeRequest,
  ) -> Result<Employee, EmployeeServiceError>;
  async fn delete_employee(&self, employee_id: &str) -> Result<(), EmployeeServiceError>;
}

pub struct EmployeeServiceImpl<R> {
  employee_repository: R,
}

impl<R> EmployeeServiceImpl<R>
where
  R: EmployeeRepository,
{
  pub fn new(employee_repository: R) -> Self {
    Self { employee_repository }
  }
}

/// Ids that are not UUIDs can never resolve, so they are reported as missing.
fn parse_employee_id(employee_id: &str) -> Result<Uuid, EmployeeServiceError> {
  Uuid::parse_str(employee_id).map_err(|_| EmployeeServiceError::NotFound(EMPLOYEE_NOT_FOUND.to_string()))
}

#[async_trait]
impl<R> EmployeeService for EmployeeServiceImpl<R>
where
  R: EmployeeRepository,
{
  async fn list_employees(&self, query: ListEmployeesQuery) -> Result<Vec<Employee>, EmployeeServiceError> {
    query.validate().map_err(EmployeeServiceError::ValidationError)?;

    let employees = self
      .employee_repository
      .find_all(query.limit, query.offset.unwrap_or(0))
      .await?;
    Ok(employees)
  }

  async fn create_employee(&self, req: CreateEmployeeRequest) -> Result<Employee, EmployeeServiceError> {
    let employee = self.employee_repository.create(req).await?;
    tracing::info!(employee_id = %employee.id, "Employee created");
    Ok(employee)
  }

  async fn get_employee(&self, employee_id: &str) -> Result<Employee, EmployeeServiceError> {
    let id = parse_employee_id(employee_id)?;

    self
      .employee_repository
      .find_by_id(id)
      .await?
      .ok_or_else(|| EmployeeServiceError::NotFound(EMPLOYEE_NOT_FOUND.to_string()))
  }

  async fn update_employee(
    &self,
    employee_id: &str,
    req: UpdateEmployeeRequest,
  ) -> Result<Employee, EmployeeServiceError> {
    let id = parse_employee_id(employee_id)?;

    let employee = self
      .employee_repository
      .update(id, req)
      .await?
      .ok_or_else(|| EmployeeServiceError::NotFound(EMPLOYEE_NOT_FOUND.to_string()))?;

    tracing::info!(employee_id = %employee.id, "Employee updated");
    Ok(employee)
  }

  async fn delete_employee(&self, employee_id: &str) -> Result<(), EmployeeServiceError> {
    let id = parse_employee_id(employee_id)?;

    if !self.employee_repository.delete(id).await? {
      return Err(EmployeeServiceError::NotFound(EMPLOYEE_NOT_FOUND.to_string()));
    }

    tracing::info!(employee_id = %id, "Employee deleted");
    Ok(())
  }
}
