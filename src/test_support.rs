use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::{
  body::{Body, Bytes},
  http::{header, Method, Request, StatusCode},
  Router,
};
use chrono::Utc;
use serde::Serialize;
use tower::ServiceExt;
use uuid::Uuid;

use crate::{
  app::create_app,
  db::RepositoryError,
  domains::{
    employee::{
      model::{Employee, EmployeeFields},
      repository::EmployeeRepository,
      service::EmployeeServiceImpl,
    },
    user::{
      model::{NewUser, User},
      repository::UserRepository,
      service::UserServiceImpl,
    },
  },
  state::SharedAppState,
  utils::jwt::JwtService,
};

#[derive(Clone, Default)]
pub struct InMemoryUserRepository {
  users: Arc<Mutex<Vec<User>>>,
}

impl InMemoryUserRepository {
  pub fn len(&self) -> usize {
    self.users.lock().unwrap().len()
  }

  pub fn contains(&self, id: Uuid) -> bool {
    self.users.lock().unwrap().iter().any(|u| u.id == id)
  }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
  async fn create(&self, new_user: NewUser) -> Result<User, RepositoryError> {
    let mut users = self.users.lock().unwrap();
    if users.iter().any(|u| u.email == new_user.email) {
      return Err(RepositoryError::Conflict("users_email_key".to_string()));
    }

    let now = Utc::now();
    let user = User {
      id: Uuid::new_v4(),
      username: new_user.username,
      email: new_user.email,
      password: new_user.password,
      created_at: now,
      updated_at: now,
    };
    users.push(user.clone());
    Ok(user)
  }

  async fn find_by_email(&self, email: &str) -> Result<Option<User>, RepositoryError> {
    Ok(self.users.lock().unwrap().iter().find(|u| u.email == email).cloned())
  }

  async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, RepositoryError> {
    Ok(self.users.lock().unwrap().iter().find(|u| u.id == id).cloned())
  }
}

/// Keeps insertion order, which stands in for ordering by `created_at`.
#[derive(Clone, Default)]
pub struct InMemoryEmployeeRepository {
  employees: Arc<Mutex<Vec<Employee>>>,
}

impl InMemoryEmployeeRepository {
  pub fn len(&self) -> usize {
    self.employees.lock().unwrap().len()
  }
}

/// Postgres refuses NUL in TEXT columns; mirror that so the 400 path is reachable.
fn reject_nul(fields: &EmployeeFields) -> Result<(), RepositoryError> {
  let text = [
    &fields.first_name,
    &fields.last_name,
    &fields.email,
    &fields.position,
    &fields.department,
  ];
  if text.iter().any(|v| v.as_deref().is_some_and(|s| s.contains('\0'))) {
    return Err(RepositoryError::InvalidInput(
      "invalid byte sequence for encoding \"UTF8\": 0x00".to_string(),
    ));
  }
  Ok(())
}

#[async_trait]
impl EmployeeRepository for InMemoryEmployeeRepository {
  async fn find_all(&self, limit: Option<i64>, offset: i64) -> Result<Vec<Employee>, RepositoryError> {
    let employees = self.employees.lock().unwrap();
    let limit = limit.map(|l| l as usize).unwrap_or(usize::MAX);
    Ok(employees.iter().skip(offset as usize).take(limit).cloned().collect())
  }

  async fn create(&self, fields: EmployeeFields) -> Result<Employee, RepositoryError> {
    reject_nul(&fields)?;
    let now = Utc::now();
    let employee = Employee {
      id: Uuid::new_v4(),
      first_name: fields.first_name,
      last_name: fields.last_name,
      email: fields.email,
      position: fields.position,
      salary: fields.salary,
      date_of_joining: fields.date_of_joining.unwrap_or(now),
      department: fields.department,
      created_at: now,
      updated_at: now,
    };
    self.employees.lock().unwrap().push(employee.clone());
    Ok(employee)
  }

  async fn find_by_id(&self, id: Uuid) -> Result<Option<Employee>, RepositoryError> {
    Ok(self.employees.lock().unwrap().iter().find(|e| e.id == id).cloned())
  }

  async fn update(&self, id: Uuid, fields: EmployeeFields) -> Result<Option<Employee>, RepositoryError> {
    reject_nul(&fields)?;
    let mut employees = self.employees.lock().unwrap();
    let Some(employee) = employees.iter_mut().find(|e| e.id == id) else {
      return Ok(None);
    };

    if fields.first_name.is_some() {
      employee.first_name = fields.first_name;
    }
    if fields.last_name.is_some() {
      employee.last_name = fields.last_name;
    }
    if fields.email.is_some() {
      employee.email = fields.email;
    }
    if fields.position.is_some() {
      employee.position = fields.position;
    }
    if fields.salary.is_some() {
      employee.salary = fields.salary;
    }
    if let Some(date_of_joining) = fields.date_of_joining {
      employee.date_of_joining = date_of_joining;
    }
    if fields.department.is_some() {
      employee.department = fields.department;
    }
    employee.updated_at = Utc::now();

    Ok(Some(employee.clone()))
  }

  async fn delete(&self, id: Uuid) -> Result<bool, RepositoryError> {
    let mut employees = self.employees.lock().unwrap();
    let before = employees.len();
    employees.retain(|e| e.id != id);
    Ok(employees.len() != before)
  }
}

/// Application wired to in-memory repositories, with handles kept for
/// assertions on what reached persistence.
pub struct TestApp {
  pub state: SharedAppState,
  pub users: InMemoryUserRepository,
  pub employees: InMemoryEmployeeRepository,
  pub jwt: Arc<JwtService>,
}

impl TestApp {
  pub fn new() -> Self {
    let jwt = Arc::new(JwtService::new("test-secret", 3600));
    let users = InMemoryUserRepository::default();
    let employees = InMemoryEmployeeRepository::default();

    let state = SharedAppState::from_services(
      Arc::new(UserServiceImpl::new(users.clone(), jwt.clone(), 4)),
      Arc::new(EmployeeServiceImpl::new(employees.clone())),
      jwt.clone(),
    );

    Self {
      state,
      users,
      employees,
      jwt,
    }
  }

  pub fn router(&self) -> Router {
    create_app(self.state.clone())
  }
}

async fn send(app: Router, request: Request<Body>) -> (StatusCode, Bytes) {
  let response = app.oneshot(request).await.expect("handle request");
  let status = response.status();
  let body = axum::body::to_bytes(response.into_body(), usize::MAX)
    .await
    .expect("read response body");
  (status, body)
}

fn json_request<T: Serialize>(method: Method, uri: &str, body: &T) -> Request<Body> {
  Request::builder()
    .method(method)
    .uri(uri)
    .header(header::CONTENT_TYPE, "application/json")
    .body(Body::from(serde_json::to_vec(body).expect("serialize request body")))
    .expect("build request")
}

pub async fn post_json<T: Serialize>(app: Router, uri: &str, body: &T) -> (StatusCode, Bytes) {
  send(app, json_request(Method::POST, uri, body)).await
}

pub async fn put_json<T: Serialize>(app: Router, uri: &str, body: &T) -> (StatusCode, Bytes) {
  send(app, json_request(Method::PUT, uri, body)).await
}

pub async fn get(app: Router, uri: &str) -> (StatusCode, Bytes) {
  let request = Request::builder()
    .method(Method::GET)
    .uri(uri)
    .body(Body::empty())
    .expect("build request");
  send(app, request).await
}

pub async fn get_with_token(app: Router, uri: &str, token: &str) -> (StatusCode, Bytes) {
  let request = Request::builder()
    .method(Method::GET)
    .uri(uri)
    .header(header::AUTHORIZATION, format!("Bearer {}", token))
    .body(Body::empty())
    .expect("build request");
  send(app, request).await
}

pub async fn delete(app: Router, uri: &str) -> (StatusCode, Bytes) {
  let request = Request::builder()
    .method(Method::DELETE)
    .uri(uri)
    .body(Body::empty())
    .expect("build request");
  send(app, request).await
}
