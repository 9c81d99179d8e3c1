use sqlx::FromRow;
use time::{Date, OffsetDateTime};
use uuid::Uuid;

use crate::zodiac::ZodiacSign;

/// One persisted horoscope; unique per (user_id, day).
#[derive(Debug, Clone, FromRow)]
pub struct HoroscopeRecord {
    pub id: Uuid,
    pub user_id: Uuid,
    pub zodiac_sign: String, // copy of the user's sign at creation time
    pub content: String,
    pub day: Date,
    pub created_at: OffsetDateTime,
    pub updated_at: OffsetDateTime,
}

#[derive(Debug, Clone)]
pub struct NewHoroscope {
    pub user_id: Uuid,
    pub zodiac_sign: ZodiacSign,
    pub content: String,
    pub day: Date,
}

/// Aggregate over all of a user's records.
#[derive(Debug, Clone, Default, PartialEq, Eq, FromRow)]
pub struct HoroscopeSummary {
    pub total: i64,
    pub first_day: Option<Date>,
    pub latest_day: Option<Date>,
}
