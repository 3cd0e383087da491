use async_trait::async_trait;
use sqlx::{Executor, PgPool, Postgres};
use uuid::Uuid;

use super::model::{Employee, EmployeeFields};
use crate::db::RepositoryError;

const EMPLOYEE_COLUMNS: &str = "id, first_name, last_name, email, position, salary, date_of_joining, department, created_at, updated_at";

#[async_trait]
pub trait EmployeeRepository: Send + Sync {
  async fn find_all(&self, limit: Option<i64>, offset: i64) -> Result<Vec<Employee>, RepositoryError>;
  async fn create(&self, fields: EmployeeFields) -> Result<Employee, RepositoryError>;
  async fn find_by_id(&self, id: Uuid) -> Result<Option<Employee>, RepositoryError>;
  /// Sets only the fields that are present; `None` when the id does not resolve.
  async fn update(&self, id: Uuid, fields: EmployeeFields) -> Result<Option<Employee>, RepositoryError>;
  /// `false` when the id does not resolve.
  async fn delete(&self, id: Uuid) -> Result<bool, RepositoryError>;
}

pub struct SqlxEmployeeRepository {
  pub pool: PgPool,
}

impl SqlxEmployeeRepository {
  pub fn new(pool: PgPool) -> Self {
    Self { pool }
  }
}

#[async_trait]
impl EmployeeRepository for SqlxEmployeeRepository {
  async fn find_all(&self, limit: Option<i64>, offset: i64) -> Result<Vec<Employee>, RepositoryError> {
    Ok(find_all_with_executor(&self.pool, limit, offset).await?)
  }

  async fn create(&self, fields: EmployeeFields) -> Result<Employee, RepositoryError> {
    Ok(create_with_executor(&self.pool, &fields).await?)
  }

  async fn find_by_id(&self, id: Uuid) -> Result<Option<Employee>, RepositoryError> {
    Ok(find_by_id_with_executor(&self.pool, id).await?)
  }

  async fn update(&self, id: Uuid, fields: EmployeeFields) -> Result<Option<Employee>, RepositoryError> {
    Ok(update_with_executor(&self.pool, id, &fields).await?)
  }

  async fn delete(&self, id: Uuid) -> Result<bool, RepositoryError> {
    Ok(delete_with_executor(&self.pool, id).await?)
  }
}

pub async fn find_all_with_executor<'e, E>(
  executor: E,
  limit: Option<i64>,
  offset: i64,
) -> Result<Vec<Employee>, sqlx::Error>
where
  E: Executor<'e, Database = Postgres>,
{
  // LIMIT NULL means no limit in Postgres.
  let sql = format!(
    "SELECT {} FROM employees ORDER BY created_at ASC, id ASC LIMIT $1 OFFSET $2",
    EMPLOYEE_COLUMNS
  );

  sqlx::query_as::<_, Employee>(&sql)
    .bind(limit)
    .bind(offset)
    .fetch_all(executor)
    .await
}

pub async fn create_with_executor<'e, E>(executor: E, fields: &EmployeeFields) -> Result<Employee, sqlx::Error>
where
  E: Executor<'e, Database = Postgres>,
{
  let sql = format!(
    r#"
      INSERT INTO employees (id, first_name, last_name, email, position, salary, date_of_joining, department)
      VALUES ($1, $2, $3, $4, $5, $6, COALESCE($7, NOW()), $8)
      RETURNING {}
    "#,
    EMPLOYEE_COLUMNS
  );

  sqlx::query_as::<_, Employee>(&sql)
    .bind(Uuid::new_v4())
    .bind(&fields.first_name)
    .bind(&fields.last_name)
    .bind(&fields.email)
    .bind(&fields.position)
    .bind(fields.salary)
    .bind(fields.date_of_joining)
    .bind(&fields.department)
    .fetch_one(executor)
    .await
}

pub async fn find_by_id_with_executor<'e, E>(executor: E, id: Uuid) -> Result<Option<Employee>, sqlx::Error>
where
  E: Executor<'e, Database = Postgres>,
{
  let sql = format!("SELECT {} FROM employees WHERE id = $1", EMPLOYEE_COLUMNS);

  sqlx::query_as::<_, Employee>(&sql)
    .bind(id)
    .fetch_optional(executor)
    .await
}

pub async fn update_with_executor<'e, E>(
  executor: E,
  id: Uuid,
  fields: &EmployeeFields,
) -> Result<Option<Employee>, sqlx::Error>
where
  E: Executor<'e, Database = Postgres>,
{
  let sql = format!(
    r#"
      UPDATE employees SET
        first_name = COALESCE($2, first_name),
        last_name = COALESCE($3, last_name),
        email = COALESCE($4, email),
        position = COALESCE($5, position),
        salary = COALESCE($6, salary),
        date_of_joining = COALESCE($7, date_of_joining),
        department = COALESCE($8, department),
        updated_at = NOW()
      WHERE id = $1
      RETURNING {}
    "#,
    EMPLOYEE_COLUMNS
  );

  sqlx::query_as::<_, Employee>(&sql)
    .bind(id)
    .bind(&fields.first_name)
    .bind(&fields.last_name)
    .bind(&fields.email)
    .bind(&fields.position)
    .bind(fields.salary)
    .bind(fields.date_of_joining)
    .bind(&fields.department)
    .fetch_optional(executor)
    .await
}

pub async fn delete_with_executor<'e, E>(executor: E, id: Uuid) -> Result<bool, sqlx::Error>
where
  E: Executor<'e, Database = Postgres>,
{
  let result = sqlx::query("DELETE FROM employees WHERE id = $1")
    .bind(id)
    .execute(executor)
    .await?;

  Ok(result.rows_affected() > 0)
}
