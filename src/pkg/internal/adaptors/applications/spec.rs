use chrono::{DateTime, NaiveDate, Utc};
use serde::{Serialize, Serializer};
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, Serialize, FromRow)]
pub struct ApplicationEntry {
    pub id: Uuid,
    pub user_id: String,
    pub company: String,
    pub role: String,
    pub status: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub applied_date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(serialize_with = "timestamp_utc")]
    pub created_at: DateTime<Utc>,
    #[serde(serialize_with = "timestamp_utc")]
    pub updated_at: DateTime<Utc>,
}

// Boundary format: second precision, literal Z, no offset.
fn timestamp_utc<S>(value: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(&value.format("%Y-%m-%dT%H:%M:%SZ").to_string())
}

/// An id that does not parse can match no row; callers treat that the same
/// as a missing row.
pub fn parse_id(raw: &str) -> Option<Uuid> {
    Uuid::parse_str(raw.trim()).ok()
}
