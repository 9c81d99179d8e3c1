use time::{Date, Duration};
use tracing::{debug, info};
use uuid::Uuid;

use super::{
    dto::{HistoryResponse, HoroscopeEntry, Stats},
    generator,
    repo::HoroscopeStore,
    repo_types::{HoroscopeRecord, NewHoroscope},
};
use crate::{auth::repo_types::User, db::StoreError, error::AppError};

pub const DEFAULT_HISTORY_DAYS: u32 = 7;
pub const MAX_HISTORY_DAYS: u32 = 30;

fn generate_content(user: &User) -> String {
    generator::personalized_text(user.zodiac_sign, &user.name, &mut rand::thread_rng())
}

/// Return the user's record for `day`, creating it if there is none.
///
/// Two requests can both miss the lookup; the storage-level unique index lets
/// only one insert through and the loser reads back the winner's record.
pub async fn get_or_create(
    store: &dyn HoroscopeStore,
    user: &User,
    day: Date,
) -> Result<HoroscopeRecord, StoreError> {
    if let Some(existing) = store.find_for_day(user.id, day).await? {
        return Ok(existing);
    }

    let new = NewHoroscope {
        user_id: user.id,
        zodiac_sign: user.zodiac_sign,
        content: generate_content(user),
        day,
    };
    match store.insert(new).await {
        Ok(record) => {
            info!(user_id = %user.id, %day, "horoscope created");
            Ok(record)
        }
        Err(StoreError::Conflict(constraint)) => {
            debug!(user_id = %user.id, %day, %constraint, "concurrent insert lost; reading winner");
            store
                .find_for_day(user.id, day)
                .await?
                .ok_or(StoreError::Conflict(constraint))
        }
        Err(e) => Err(e),
    }
}

/// Entries for every day from `to` back to `from`, newest first. Days without a
/// record get a freshly generated entry that is not persisted.
pub async fn history(
    store: &dyn HoroscopeStore,
    user: &User,
    from: Date,
    to: Date,
) -> Result<Vec<HoroscopeEntry>, StoreError> {
    let mut records = store.list_between(user.id, from, to).await?.into_iter().peekable();

    let mut entries = Vec::new();
    let mut day = to;
    while day >= from {
        // skip anything the store returned outside the walk
        while records.next_if(|r| r.day > day).is_some() {}
        let entry = match records.next_if(|r| r.day == day) {
            Some(record) => HoroscopeEntry::from_record(record),
            None => HoroscopeEntry::unsaved(user.zodiac_sign, generate_content(user), day),
        };
        entries.push(entry);
        match day.previous_day() {
            Some(prev) => day = prev,
            None => break,
        }
    }
    Ok(entries)
}

/// History window of `days` days ending on `today`, with counts.
pub async fn recent_history(
    store: &dyn HoroscopeStore,
    user: &User,
    today: Date,
    days: u32,
) -> Result<HistoryResponse, StoreError> {
    let days = days.clamp(1, MAX_HISTORY_DAYS);
    let from = today - Duration::days(i64::from(days) - 1);
    let horoscopes = history(store, user, from, today).await?;
    let saved_count = horoscopes.iter().filter(|e| e.saved).count();
    Ok(HistoryResponse {
        total_days: days,
        saved_count,
        generated_count: horoscopes.len() - saved_count,
        horoscopes,
    })
}

/// Parse the `days` query parameter from its leading integer, so `"3abc"` and
/// `"3.5"` both mean 3. No digits or zero use the default; everything else is
/// clamped to 1..=30.
pub fn parse_history_days(raw: Option<&str>) -> u32 {
    match raw.and_then(leading_int) {
        None | Some(0) => DEFAULT_HISTORY_DAYS,
        Some(n) => n.clamp(1, i64::from(MAX_HISTORY_DAYS)) as u32,
    }
}

fn leading_int(raw: &str) -> Option<i64> {
    let s = raw.trim_start();
    let (negative, rest) = match s.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, s.strip_prefix('+').unwrap_or(s)),
    };
    let end = rest.find(|c: char| !c.is_ascii_digit()).unwrap_or(rest.len());
    let digits = &rest[..end];
    if digits.is_empty() {
        return None;
    }
    // too many digits still means "a lot"
    let n = digits.parse::<i64>().unwrap_or(i64::MAX);
    Some(if negative { -n } else { n })
}

/// Count consecutive days ending at `today` given record days sorted newest
/// first.
pub fn count_streak(days_desc: &[Date], today: Date) -> u32 {
    let mut streak = 0;
    let mut expected = Some(today);
    for day in days_desc.iter().copied().skip_while(|d| *d > today) {
        if Some(day) != expected {
            break;
        }
        streak += 1;
        expected = day.previous_day();
    }
    streak
}

pub async fn streak(
    store: &dyn HoroscopeStore,
    user_id: Uuid,
    today: Date,
) -> Result<u32, StoreError> {
    let days = store.days_until(user_id, today).await?;
    Ok(count_streak(&days, today))
}

pub async fn stats(store: &dyn HoroscopeStore, user: &User, today: Date) -> Result<Stats, StoreError> {
    let summary = store.summary(user.id).await?;
    let current_streak = streak(store, user.id, today).await?;
    Ok(Stats {
        total_horoscopes: summary.total,
        first_horoscope: summary.first_day,
        latest_horoscope: summary.latest_day,
        current_streak,
        zodiac_sign: user.zodiac_sign,
        member_since: user.created_at,
    })
}

/// Horoscope for an arbitrary past day or today. Only today's entry is
/// persisted; missing past days are generated without saving.
pub async fn entry_for_date(
    store: &dyn HoroscopeStore,
    user: &User,
    day: Date,
    today: Date,
) -> Result<HoroscopeEntry, AppError> {
    if day > today {
        return Err(AppError::validation("Cannot fetch horoscope for future dates."));
    }
    if day == today {
        let record = get_or_create(store, user, day).await?;
        return Ok(HoroscopeEntry::from_record(record));
    }
    let entry = match store.find_for_day(user.id, day).await? {
        Some(record) => HoroscopeEntry::from_record(record),
        None => HoroscopeEntry::unsaved(user.zodiac_sign, generate_content(user), day),
    };
    Ok(entry)
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicBool, Ordering};

    use async_trait::async_trait;
    use time::macros::date;

    use super::*;
    use crate::horoscope::repo_types::HoroscopeSummary;
    use crate::test_support::{sample_user, MemoryHoroscopeStore};
    use crate::zodiac::ZodiacSign;

    const TODAY: Date = date!(2024 - 06 - 15);

    async fn seed(store: &MemoryHoroscopeStore, user: &User, day: Date, content: &str) {
        store
            .insert(NewHoroscope {
                user_id: user.id,
                zodiac_sign: user.zodiac_sign,
                content: content.into(),
                day,
            })
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn get_or_create_is_idempotent_per_day() {
        let store = MemoryHoroscopeStore::default();
        let user = sample_user(ZodiacSign::Leo);

        let first = get_or_create(&store, &user, TODAY).await.unwrap();
        let second = get_or_create(&store, &user, TODAY).await.unwrap();
        assert_eq!(first.id, second.id);
        assert_eq!(first.content, second.content);
        assert_eq!(first.zodiac_sign, "Leo");
        assert!(first.content.contains(&user.name));

        let tomorrow = get_or_create(&store, &user, TODAY.next_day().unwrap()).await.unwrap();
        assert_ne!(first.id, tomorrow.id);
    }

    #[tokio::test]
    async fn second_insert_for_same_day_conflicts() {
        let store = MemoryHoroscopeStore::default();
        let user = sample_user(ZodiacSign::Leo);
        seed(&store, &user, TODAY, "The first writer wins today.").await;

        let err = store
            .insert(NewHoroscope {
                user_id: user.id,
                zodiac_sign: user.zodiac_sign,
                content: "A second writer must not overwrite.".into(),
                day: TODAY,
            })
            .await
            .unwrap_err();
        assert!(matches!(err, StoreError::Conflict(_)));

        let kept = store.find_for_day(user.id, TODAY).await.unwrap().unwrap();
        assert_eq!(kept.content, "The first writer wins today.");
    }

    /// Hides existing rows from the first lookup, as if another request
    /// inserted between our read and our write.
    struct RacingStore {
        inner: MemoryHoroscopeStore,
        hidden_once: AtomicBool,
    }

    #[async_trait]
    impl HoroscopeStore for RacingStore {
        async fn find_for_day(
            &self,
            user_id: Uuid,
            day: Date,
        ) -> Result<Option<HoroscopeRecord>, StoreError> {
            if !self.hidden_once.swap(true, Ordering::SeqCst) {
                return Ok(None);
            }
            self.inner.find_for_day(user_id, day).await
        }

        async fn insert(&self, new: NewHoroscope) -> Result<HoroscopeRecord, StoreError> {
            self.inner.insert(new).await
        }

        async fn list_between(
            &self,
            user_id: Uuid,
            from: Date,
            to: Date,
        ) -> Result<Vec<HoroscopeRecord>, StoreError> {
            self.inner.list_between(user_id, from, to).await
        }

        async fn days_until(&self, user_id: Uuid, until: Date) -> Result<Vec<Date>, StoreError> {
            self.inner.days_until(user_id, until).await
        }

        async fn summary(&self, user_id: Uuid) -> Result<HoroscopeSummary, StoreError> {
            self.inner.summary(user_id).await
        }
    }

    #[tokio::test]
    async fn get_or_create_returns_winner_after_conflict() {
        let user = sample_user(ZodiacSign::Virgo);
        let inner = MemoryHoroscopeStore::default();
        seed(&inner, &user, TODAY, "Written by the other request.").await;
        let store = RacingStore {
            inner,
            hidden_once: AtomicBool::new(false),
        };

        let record = get_or_create(&store, &user, TODAY).await.unwrap();
        assert_eq!(record.content, "Written by the other request.");
        assert_eq!(store.summary(user.id).await.unwrap().total, 1);
    }

    #[tokio::test]
    async fn history_without_records_is_all_unsaved() {
        let store = MemoryHoroscopeStore::default();
        let user = sample_user(ZodiacSign::Aries);

        let response = recent_history(&store, &user, TODAY, 3).await.unwrap();
        assert_eq!(response.total_days, 3);
        assert_eq!(response.saved_count, 0);
        assert_eq!(response.generated_count, 3);
        let dates: Vec<Date> = response.horoscopes.iter().map(|e| e.date).collect();
        assert_eq!(dates, vec![date!(2024 - 06 - 15), date!(2024 - 06 - 14), date!(2024 - 06 - 13)]);
        assert!(response.horoscopes.iter().all(|e| !e.saved && e.created_at.is_none()));
        // nothing was written
        assert_eq!(store.summary(user.id).await.unwrap().total, 0);
    }

    #[tokio::test]
    async fn history_merges_saved_records_newest_first() {
        let store = MemoryHoroscopeStore::default();
        let user = sample_user(ZodiacSign::Aries);
        seed(&store, &user, date!(2024 - 06 - 14), "Saved yesterday for the test.").await;
        // outside the window
        seed(&store, &user, date!(2024 - 06 - 01), "Saved long ago for the test.").await;

        let entries = history(&store, &user, date!(2024 - 06 - 12), TODAY).await.unwrap();
        assert_eq!(entries.len(), 4);
        assert_eq!(
            entries.iter().map(|e| e.saved).collect::<Vec<_>>(),
            vec![false, true, false, false]
        );
        assert_eq!(entries[1].content, "Saved yesterday for the test.");
        assert_eq!(entries[1].lucky_numbers, generator::lucky_numbers(ZodiacSign::Aries, date!(2024 - 06 - 14)));
    }

    #[test]
    fn history_days_parameter() {
        assert_eq!(parse_history_days(None), 7);
        assert_eq!(parse_history_days(Some("abc")), 7);
        assert_eq!(parse_history_days(Some("0")), 7);
        assert_eq!(parse_history_days(Some("3")), 3);
        assert_eq!(parse_history_days(Some("-4")), 1);
        assert_eq!(parse_history_days(Some("90")), 30);
        assert_eq!(parse_history_days(Some("3abc")), 3);
        assert_eq!(parse_history_days(Some("3.5")), 3);
        assert_eq!(parse_history_days(Some(" 12")), 12);
        assert_eq!(parse_history_days(Some("+5")), 5);
        assert_eq!(parse_history_days(Some("-")), 7);
        assert_eq!(parse_history_days(Some("")), 7);
        assert_eq!(parse_history_days(Some("99999999999999999999999")), 30);
    }

    #[test]
    fn streak_stops_at_first_gap() {
        let days = [
            date!(2024 - 06 - 15),
            date!(2024 - 06 - 14),
            date!(2024 - 06 - 13),
            date!(2024 - 06 - 11),
            date!(2024 - 06 - 10),
        ];
        assert_eq!(count_streak(&days, TODAY), 3);
        assert_eq!(count_streak(&days[3..], TODAY), 0);
        assert_eq!(count_streak(&[], TODAY), 0);
    }

    #[test]
    fn streak_ignores_days_after_today() {
        let days = [date!(2024 - 06 - 16), date!(2024 - 06 - 15), date!(2024 - 06 - 14)];
        assert_eq!(count_streak(&days, TODAY), 2);
    }

    #[test]
    fn streak_spans_month_boundaries() {
        let days = [date!(2024 - 03 - 01), date!(2024 - 02 - 29), date!(2024 - 02 - 28)];
        assert_eq!(count_streak(&days, date!(2024 - 03 - 01)), 3);
    }

    #[tokio::test]
    async fn stats_reports_totals_and_streak() {
        let store = MemoryHoroscopeStore::default();
        let user = sample_user(ZodiacSign::Pisces);
        seed(&store, &user, date!(2024 - 06 - 15), "Saved today for the stats test.").await;
        seed(&store, &user, date!(2024 - 06 - 14), "Saved yesterday for the stats.").await;
        seed(&store, &user, date!(2024 - 06 - 10), "Saved earlier for the stats.").await;

        let stats = stats(&store, &user, TODAY).await.unwrap();
        assert_eq!(stats.total_horoscopes, 3);
        assert_eq!(stats.first_horoscope, Some(date!(2024 - 06 - 10)));
        assert_eq!(stats.latest_horoscope, Some(date!(2024 - 06 - 15)));
        assert_eq!(stats.current_streak, 2);
        assert_eq!(stats.zodiac_sign, ZodiacSign::Pisces);
    }

    #[tokio::test]
    async fn entry_for_date_rules() {
        let store = MemoryHoroscopeStore::default();
        let user = sample_user(ZodiacSign::Libra);

        let future = entry_for_date(&store, &user, TODAY.next_day().unwrap(), TODAY).await;
        assert!(matches!(future, Err(AppError::Validation { .. })));

        let past = entry_for_date(&store, &user, date!(2024 - 06 - 01), TODAY).await.unwrap();
        assert!(!past.saved);
        assert_eq!(store.summary(user.id).await.unwrap().total, 0);

        let today = entry_for_date(&store, &user, TODAY, TODAY).await.unwrap();
        assert!(today.saved);
        let again = entry_for_date(&store, &user, TODAY, TODAY).await.unwrap();
        assert_eq!(today.content, again.content);
        assert_eq!(store.summary(user.id).await.unwrap().total, 1);
    }
}
