use sqlx::PgPool;

use crate::prelude::Result;

use super::spec::{parse_id, ApplicationEntry};

pub struct ApplicationSelector<'a> {
    pool: &'a PgPool,
}

impl<'a> ApplicationSelector<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        ApplicationSelector { pool }
    }

    pub async fn get_by_id(&self, user_id: &str, id: &str) -> Result<Option<ApplicationEntry>> {
        let Some(id) = parse_id(id) else {
            return Ok(None);
        };
        let row = sqlx::query_as::<_, ApplicationEntry>(
            "SELECT id, user_id, company, role, status, source, applied_date, notes, created_at, updated_at
             FROM applications WHERE user_id = $1 AND id = $2",
        )
        .bind(user_id)
        .bind(id)
        .fetch_optional(self.pool)
        .await?;
        Ok(row)
    }

    pub async fn get_for_user(&self, user_id: &str) -> Result<Vec<ApplicationEntry>> {
        // id tie-break keeps the order stable for rows created within the
        // same second
        let rows = sqlx::query_as::<_, ApplicationEntry>(
            "SELECT id, user_id, company, role, status, source, applied_date, notes, created_at, updated_at
             FROM applications WHERE user_id = $1 ORDER BY created_at DESC, id",
        )
        .bind(user_id)
        .fetch_all(self.pool)
        .await?;
        Ok(rows)
    }
}
