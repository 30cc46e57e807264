use chrono::NaiveDate;
use sqlx::PgPool;

use crate::errors::Error;
use crate::pkg::server::handlers::applications::{CreateApplicationInput, UpdateApplicationInput};
use crate::prelude::Result;

use super::spec::{parse_id, ApplicationEntry};

pub struct ApplicationMutator<'a> {
    pool: &'a PgPool,
}

impl<'a> ApplicationMutator<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        ApplicationMutator { pool }
    }

    pub async fn create(
        &self,
        user_id: &str,
        input: CreateApplicationInput,
    ) -> Result<ApplicationEntry> {
        if input.company.trim().is_empty() {
            return Err(Error::Validation("company is required".into()));
        }
        if input.role.trim().is_empty() {
            return Err(Error::Validation("role is required".into()));
        }
        let status = if input.status.trim().is_empty() {
            "applied".to_string()
        } else {
            input.status.clone()
        };
        let applied_date = parse_applied_date(&input.applied_date)?;

        let row = sqlx::query_as::<_, ApplicationEntry>(
            r#"
            INSERT INTO applications (user_id, company, role, status, source, applied_date, notes)
            VALUES ($1, $2, $3, $4, NULLIF($5, ''), $6, NULLIF($7, ''))
            RETURNING id, user_id, company, role, status, source, applied_date, notes, created_at, updated_at
            "#,
        )
        .bind(user_id)
        .bind(&input.company)
        .bind(&input.role)
        .bind(&status)
        .bind(&input.source)
        .bind(applied_date)
        .bind(&input.notes)
        .fetch_one(self.pool)
        .await?;
        Ok(row)
    }

    /// Merge-style update: blank fields keep their stored value, updated_at
    /// always advances. None means no row matched user_id + id.
    pub async fn update(
        &self,
        user_id: &str,
        id: &str,
        input: UpdateApplicationInput,
    ) -> Result<Option<ApplicationEntry>> {
        let applied_date = parse_applied_date(&input.applied_date)?;
        let Some(id) = parse_id(id) else {
            return Ok(None);
        };

        let row = sqlx::query_as::<_, ApplicationEntry>(
            r#"
            UPDATE applications
            SET
                status = COALESCE(NULLIF($3, ''), status),
                notes = COALESCE(NULLIF($4, ''), notes),
                applied_date = COALESCE($5, applied_date),
                updated_at = date_trunc('second', now())
            WHERE user_id = $1 AND id = $2
            RETURNING id, user_id, company, role, status, source, applied_date, notes, created_at, updated_at
            "#,
        )
        .bind(user_id)
        .bind(id)
        .bind(&input.status)
        .bind(&input.notes)
        .bind(applied_date)
        .fetch_optional(self.pool)
        .await?;
        Ok(row)
    }

    pub async fn delete(&self, user_id: &str, id: &str) -> Result<bool> {
        let Some(id) = parse_id(id) else {
            return Ok(false);
        };
        let result = sqlx::query("DELETE FROM applications WHERE user_id = $1 AND id = $2")
            .bind(user_id)
            .bind(id)
            .execute(self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}

fn parse_applied_date(raw: &str) -> Result<Option<NaiveDate>> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Ok(None);
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .map(Some)
        .map_err(|_| Error::Validation("applied_date must be YYYY-MM-DD".into()))
}
