use chrono::{DateTime, NaiveDate, TimeZone, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use sqlx::FromRow;
use uuid::Uuid;
use validator::Validate;

#[derive(Debug, Clone, PartialEq, FromRow, Deserialize, Serialize)]
pub struct Employee {
  pub id: Uuid,
  pub first_name: Option<String>,
  pub last_name: Option<String>,
  pub email: Option<String>,
  pub position: Option<String>,
  pub salary: Option<f64>,
  pub date_of_joining: DateTime<Utc>,
  pub department: Option<String>,
  pub created_at: DateTime<Utc>,
  pub updated_at: DateTime<Utc>,
}

/// Body of both create and update. Every field is optional and free-form;
/// only JSON types are checked. On update an absent field keeps its stored
/// value.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct EmployeeFields {
  pub first_name: Option<String>,
  pub last_name: Option<String>,
  pub email: Option<String>,
  pub position: Option<String>,
  pub salary: Option<f64>,
  #[serde(default, deserialize_with = "deserialize_joining_date")]
  pub date_of_joining: Option<DateTime<Utc>>,
  pub department: Option<String>,
}

/// Accepts an RFC 3339 timestamp or a plain `YYYY-MM-DD` date (midnight UTC).
pub fn parse_joining_date(raw: &str) -> Result<DateTime<Utc>, String> {
  if let Ok(timestamp) = DateTime::parse_from_rfc3339(raw) {
    return Ok(timestamp.with_timezone(&Utc));
  }

  NaiveDate::parse_from_str(raw, "%Y-%m-%d")
    .ok()
    .and_then(|date| date.and_hms_opt(0, 0, 0))
    .map(|midnight| Utc.from_utc_datetime(&midnight))
    .ok_or_else(|| format!("invalid date `{}`, expected YYYY-MM-DD or an RFC 3339 timestamp", raw))
}

fn deserialize_joining_date<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
where
  D: Deserializer<'de>,
{
  let raw: Option<String> = Option::deserialize(deserializer)?;
  raw
    .map(|value| parse_joining_date(&value).map_err(serde::de::Error::custom))
    .transpose()
}

pub type CreateEmployeeRequest = EmployeeFields;
pub type UpdateEmployeeRequest = EmployeeFields;

#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct ListEmployeesQuery {
  #[validate(range(min = 0, message = "limit must not be negative"))]
  pub limit: Option<i64>,
  #[validate(range(min = 0, message = "offset must not be negative"))]
  pub offset: Option<i64>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CreateEmployeeResponse {
  pub message: String,
  pub employee_id: Uuid,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct MessageResponse {
  pub message: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DeleteEmployeeQuery {
  pub eid: Option<String>,
}
