use std::sync::Arc;

use sqlx::PgPool;
use uuid::Uuid;

use crate::{
  config::Config,
  domains::{
    employee::{
      model::{CreateEmployeeRequest, Employee, ListEmployeesQuery, UpdateEmployeeRequest},
      repository::SqlxEmployeeRepository,
      service::{EmployeeService, EmployeeServiceError, EmployeeServiceImpl},
    },
    user::{
      model::{LoginRequest, LoginResponse, SignupRequest, User},
      repository::SqlxUserRepository,
      service::{UserService, UserServiceError, UserServiceImpl},
    },
  },
  utils::jwt::JwtService,
};

pub trait AppState: Clone + Send + Sync + 'static {
  fn jwt(&self) -> &JwtService;
  fn signup(&self, req: SignupRequest) -> impl std::future::Future<Output = Result<User, UserServiceError>> + Send;
  fn login(
    &self,
    req: LoginRequest,
  ) -> impl std::future::Future<Output = Result<LoginResponse, UserServiceError>> + Send;
  fn get_user_by_id(&self, user_id: Uuid) -> impl std::future::Future<Output = Result<User, UserServiceError>> + Send;
  fn list_employees(
    &self,
    query: ListEmployeesQuery,
  ) -> impl std::future::Future<Output = Result<Vec<Employee>, EmployeeServiceError>> + Send;
  fn create_employee(
    &self,
    req: CreateEmployeeRequest,
  ) -> impl std::future::Future<Output = Result<Employee, EmployeeServiceError>> + Send;
  fn get_employee(
    &self,
    employee_id: &str,
  ) -> impl std::future::Future<Output = Result<Employee, EmployeeServiceError>> + Send;
  fn update_employee(
    &self,
    employee_id: &str,
    req: UpdateEmployeeRequest,
  ) -> impl std::future::Future<Output = Result<Employee, EmployeeServiceError>> + Send;
  fn delete_employee(&self, employee_id: &str)
    -> impl std::future::Future<Output = Result<(), EmployeeServiceError>> + Send;
}

#[derive(Clone)]
pub struct SharedAppState {
  pub user_service: Arc<dyn UserService>,
  pub employee_service: Arc<dyn EmployeeService>,
  pub jwt: Arc<JwtService>,
}

impl SharedAppState {
  pub fn new(pool: PgPool, config: &Config) -> Self {
    let jwt = Arc::new(JwtService::new(&config.jwt_secret, config.jwt_expires_in_secs));

    let user_repository = SqlxUserRepository::new(pool.clone());
    let user_service = Arc::new(UserServiceImpl::new(user_repository, jwt.clone(), config.bcrypt_cost));

    let employee_repository = SqlxEmployeeRepository::new(pool);
    let employee_service = Arc::new(EmployeeServiceImpl::new(employee_repository));

    Self::from_services(user_service, employee_service, jwt)
  }

  pub fn from_services(
    user_service: Arc<dyn UserService>,
    employee_service: Arc<dyn EmployeeService>,
    jwt: Arc<JwtService>,
  ) -> Self {
    Self {
      user_service,
      employee_service,
      jwt,
    }
  }
}

impl AppState for SharedAppState {
  fn jwt(&self) -> &JwtService {
    &self.jwt
  }

  async fn signup(&self, req: SignupRequest) -> Result<User, UserServiceError> {
    self.user_service.signup(req).await
  }

  async fn login(&self, req: LoginRequest) -> Result<LoginResponse, UserServiceError> {
    self.user_service.login(req).await
  }

  async fn get_user_by_id(&self, user_id: Uuid) -> Result<User, UserServiceError> {
    self.user_service.get_user_by_id(user_id).await
  }

  async fn list_employees(&self, query: ListEmployeesQuery) -> Result<Vec<Employee>, EmployeeServiceError> {
    self.employee_service.list_employees(query).await
  }

  async fn create_employee(&self, req: CreateEmployeeRequest) -> Result<Employee, EmployeeServiceError> {
    self.employee_service.create_employee(req).await
  }

  async fn get_employee(&self, employee_id: &str) -> Result<Employee, EmployeeServiceError> {
    self.employee_service.get_employee(employee_id).await
  }

  async fn update_employee(
    &self,
    employee_id: &str,
    req: UpdateEmployeeRequest,
  ) -> Result<Employee, EmployeeServiceError> {
    self.employee_service.update_employee(employee_id, req).await
  }

  async fn delete_employee(&self, employee_id: &str) -> Result<(), EmployeeServiceError> {
    self.employee_service.delete_employee(employee_id).await
  }
}
