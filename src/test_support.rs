//! In-memory stores and request helpers shared by the unit tests.

use std::sync::Mutex;

use async_trait::async_trait;
use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
    Router,
};
use serde_json::{json, Value};
use time::{macros::date, Date, OffsetDateTime};
use tower::ServiceExt;
use uuid::Uuid;

use crate::{
    app::build_app,
    auth::{
        repo::UserStore,
        repo_types::{NewUser, User},
    },
    db::StoreError,
    horoscope::{
        repo::HoroscopeStore,
        repo_types::{HoroscopeRecord, HoroscopeSummary, NewHoroscope},
    },
    state::AppState,
    zodiac::ZodiacSign,
};

#[derive(Default)]
pub struct MemoryUserStore {
    users: Mutex<Vec<User>>,
}

#[async_trait]
impl UserStore for MemoryUserStore {
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, StoreError> {
        let users = self.users.lock().unwrap();
        Ok(users.iter().find(|u| u.email == email).cloned())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, StoreError> {
        let users = self.users.lock().unwrap();
        Ok(users.iter().find(|u| u.id == id).cloned())
    }

    async fn create(&self, new: NewUser) -> Result<User, StoreError> {
        let mut users = self.users.lock().unwrap();
        if users.iter().any(|u| u.email == new.email) {
            return Err(StoreError::Conflict("users_email_key".into()));
        }
        let now = OffsetDateTime::now_utc();
        let user = User {
            id: Uuid::new_v4(),
            name: new.name,
            email: new.email,
            password_hash: new.password_hash,
            birthdate: new.birthdate,
            zodiac_sign: new.zodiac_sign,
            created_at: now,
            updated_at: now,
        };
        users.push(user.clone());
        Ok(user)
    }
}

#[derive(Default)]
pub struct MemoryHoroscopeStore {
    records: Mutex<Vec<HoroscopeRecord>>,
}

#[async_trait]
impl HoroscopeStore for MemoryHoroscopeStore {
    async fn find_for_day(
        &self,
        user_id: Uuid,
        day: Date,
    ) -> Result<Option<HoroscopeRecord>, StoreError> {
        let records = self.records.lock().unwrap();
        Ok(records
            .iter()
            .find(|r| r.user_id == user_id && r.day == day)
            .cloned())
    }

    async fn insert(&self, new: NewHoroscope) -> Result<HoroscopeRecord, StoreError> {
        let mut records = self.records.lock().unwrap();
        if records
            .iter()
            .any(|r| r.user_id == new.user_id && r.day == new.day)
        {
            return Err(StoreError::Conflict("horoscopes_user_id_day_key".into()));
        }
        let now = OffsetDateTime::now_utc();
        let record = HoroscopeRecord {
            id: Uuid::new_v4(),
            user_id: new.user_id,
            zodiac_sign: new.zodiac_sign.to_string(),
            content: new.content,
            day: new.day,
            created_at: now,
            updated_at: now,
        };
        records.push(record.clone());
        Ok(record)
    }

    async fn list_between(
        &self,
        user_id: Uuid,
        from: Date,
        to: Date,
    ) -> Result<Vec<HoroscopeRecord>, StoreError> {
        let records = self.records.lock().unwrap();
        let mut found: Vec<_> = records
            .iter()
            .filter(|r| r.user_id == user_id && r.day >= from && r.day <= to)
            .cloned()
            .collect();
        found.sort_by(|a, b| b.day.cmp(&a.day));
        Ok(found)
    }

    async fn days_until(&self, user_id: Uuid, until: Date) -> Result<Vec<Date>, StoreError> {
        let records = self.records.lock().unwrap();
        let mut days: Vec<_> = records
            .iter()
            .filter(|r| r.user_id == user_id && r.day <= until)
            .map(|r| r.day)
            .collect();
        days.sort_by(|a, b| b.cmp(a));
        Ok(days)
    }

    async fn summary(&self, user_id: Uuid) -> Result<HoroscopeSummary, StoreError> {
        let records = self.records.lock().unwrap();
        let days = records.iter().filter(|r| r.user_id == user_id).map(|r| r.day);
        Ok(HoroscopeSummary {
            total: records.iter().filter(|r| r.user_id == user_id).count() as i64,
            first_day: days.clone().min(),
            latest_day: days.max(),
        })
    }
}

pub fn sample_user(sign: ZodiacSign) -> User {
    let now = OffsetDateTime::now_utc();
    User {
        id: Uuid::new_v4(),
        name: "Jane Roe".into(),
        email: "jane@example.com".into(),
        password_hash: String::new(),
        birthdate: date!(1990 - 01 - 01),
        zodiac_sign: sign,
        created_at: now,
        updated_at: now,
    }
}

pub fn test_app() -> (Router, AppState) {
    let state = AppState::fake();
    (build_app(state.clone()), state)
}

async fn read_json(res: axum::response::Response) -> (StatusCode, Value) {
    let status = res.status();
    let bytes = axum::body::to_bytes(res.into_body(), usize::MAX).await.unwrap();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or(Value::Null)
    };
    (status, body)
}

pub async fn send(
    app: &Router,
    method: Method,
    uri: &str,
    token: Option<&str>,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let mut req = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        req = req.header(header::AUTHORIZATION, format!("Bearer {token}"));
    }
    let req = match body {
        Some(body) => req
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => req.body(Body::empty()).unwrap(),
    };
    read_json(app.clone().oneshot(req).await.unwrap()).await
}

pub async fn send_raw(app: &Router, method: Method, uri: &str, body: &str) -> (StatusCode, Value) {
    let req = Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_owned()))
        .unwrap();
    read_json(app.clone().oneshot(req).await.unwrap()).await
}

/// Register a user named John Doe and return its token and id.
pub async fn register(app: &Router, email: &str, birthdate: &str) -> (String, String) {
    let payload = json!({
        "name": "John Doe",
        "email": email,
        "password": "Password123",
        "birthdate": birthdate,
    });
    let (status, body) = send(app, Method::POST, "/api/auth/register", None, Some(payload)).await;
    assert_eq!(status, StatusCode::CREATED, "{body}");
    let token = body["data"]["token"].as_str().unwrap().to_string();
    let id = body["data"]["user"]["id"].as_str().unwrap().to_string();
    (token, id)
}
