use async_trait::async_trait;
use sqlx::PgPool;
use time::Date;
use uuid::Uuid;

use super::repo_types::{HoroscopeRecord, HoroscopeSummary, NewHoroscope};
use crate::db::StoreError;

const RECORD_COLUMNS: &str = "id, user_id, zodiac_sign, content, day, created_at, updated_at";

#[async_trait]
pub trait HoroscopeStore: Send + Sync {
    async fn find_for_day(&self, user_id: Uuid, day: Date)
        -> Result<Option<HoroscopeRecord>, StoreError>;

    /// Fails with `StoreError::Conflict` if (user_id, day) already exists.
    async fn insert(&self, new: NewHoroscope) -> Result<HoroscopeRecord, StoreError>;

    /// Records with `from <= day <= to`, newest first.
    async fn list_between(
        &self,
        user_id: Uuid,
        from: Date,
        to: Date,
    ) -> Result<Vec<HoroscopeRecord>, StoreError>;

    /// Days with a record on or before `until`, newest first.
    async fn days_until(&self, user_id: Uuid, until: Date) -> Result<Vec<Date>, StoreError>;

    async fn summary(&self, user_id: Uuid) -> Result<HoroscopeSummary, StoreError>;
}

#[derive(Clone)]
pub struct PgHoroscopeStore {
    db: PgPool,
}

impl PgHoroscopeStore {
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl HoroscopeStore for PgHoroscopeStore {
    async fn find_for_day(
        &self,
        user_id: Uuid,
        day: Date,
    ) -> Result<Option<HoroscopeRecord>, StoreError> {
        let row = sqlx::query_as::<_, HoroscopeRecord>(&format!(
            "SELECT {RECORD_COLUMNS} FROM horoscopes WHERE user_id = $1 AND day = $2"
        ))
        .bind(user_id)
        .bind(day)
        .fetch_optional(&self.db)
        .await?;
        Ok(row)
    }

    async fn insert(&self, new: NewHoroscope) -> Result<HoroscopeRecord, StoreError> {
        // Plain INSERT: the (user_id, day) unique index rejects a second writer.
        sqlx::query_as::<_, HoroscopeRecord>(&format!(
            r#"
            INSERT INTO horoscopes (user_id, zodiac_sign, content, day)
            VALUES ($1, $2, $3, $4)
            RETURNING {RECORD_COLUMNS}
            "#
        ))
        .bind(new.user_id)
        .bind(new.zodiac_sign)
        .bind(&new.content)
        .bind(new.day)
        .fetch_one(&self.db)
        .await
        .map_err(StoreError::from_write)
    }

    async fn list_between(
        &self,
        user_id: Uuid,
        from: Date,
        to: Date,
    ) -> Result<Vec<HoroscopeRecord>, StoreError> {
        let rows = sqlx::query_as::<_, HoroscopeRecord>(&format!(
            r#"
            SELECT {RECORD_COLUMNS}
              FROM horoscopes
             WHERE user_id = $1 AND day BETWEEN $2 AND $3
             ORDER BY day DESC
            "#
        ))
        .bind(user_id)
        .bind(from)
        .bind(to)
        .fetch_all(&self.db)
        .await?;
        Ok(rows)
    }

    async fn days_until(&self, user_id: Uuid, until: Date) -> Result<Vec<Date>, StoreError> {
        let days = sqlx::query_scalar::<_, Date>(
            r#"
            SELECT day
              FROM horoscopes
             WHERE user_id = $1 AND day <= $2
             ORDER BY day DESC
            "#,
        )
        .bind(user_id)
        .bind(until)
        .fetch_all(&self.db)
        .await?;
        Ok(days)
    }

    async fn summary(&self, user_id: Uuid) -> Result<HoroscopeSummary, StoreError> {
        let summary = sqlx::query_as::<_, HoroscopeSummary>(
            r#"
            SELECT COUNT(*) AS total, MIN(day) AS first_day, MAX(day) AS latest_day
              FROM horoscopes
             WHERE user_id = $1
            "#,
        )
        .bind(user_id)
        .fetch_one(&self.db)
        .await?;
        Ok(summary)
    }
}
