use serde::{Deserialize, Serialize};
use time::{Date, OffsetDateTime};

use super::{generator, repo_types::HoroscopeRecord};
use crate::zodiac::ZodiacSign;

/// One day's horoscope as returned to clients, persisted or not.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HoroscopeEntry {
    pub zodiac_sign: String,
    pub content: String,
    pub date: Date,
    pub affirmation: String,
    pub lucky_numbers: [u32; 4],
    #[serde(
        with = "time::serde::rfc3339::option",
        skip_serializing_if = "Option::is_none"
    )]
    pub created_at: Option<OffsetDateTime>,
    pub saved: bool,
}

impl HoroscopeEntry {
    pub fn from_record(record: HoroscopeRecord) -> Self {
        Self {
            affirmation: generator::affirmation_for_label(&record.zodiac_sign).to_string(),
            lucky_numbers: generator::lucky_numbers_for_label(&record.zodiac_sign, record.day),
            zodiac_sign: record.zodiac_sign,
            content: record.content,
            date: record.day,
            created_at: Some(record.created_at),
            saved: true,
        }
    }

    /// An entry generated on the fly and never stored.
    pub fn unsaved(sign: ZodiacSign, content: String, date: Date) -> Self {
        Self {
            zodiac_sign: sign.to_string(),
            content,
            date,
            affirmation: generator::affirmation(sign).to_string(),
            lucky_numbers: generator::lucky_numbers(sign, date),
            created_at: None,
            saved: false,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct SingleHoroscopeResponse {
    pub horoscope: HoroscopeEntry,
}

#[derive(Debug, Default, Deserialize)]
pub struct HistoryQuery {
    pub days: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryResponse {
    pub horoscopes: Vec<HoroscopeEntry>,
    pub total_days: u32,
    pub saved_count: usize,
    pub generated_count: usize,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Stats {
    pub total_horoscopes: i64,
    pub first_horoscope: Option<Date>,
    pub latest_horoscope: Option<Date>,
    pub current_streak: u32,
    pub zodiac_sign: ZodiacSign,
    #[serde(with = "time::serde::rfc3339")]
    pub member_since: OffsetDateTime,
}

#[derive(Debug, Serialize)]
pub struct StatsResponse {
    pub stats: Stats,
}
