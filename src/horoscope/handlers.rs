use axum::{
    extract::{
        rejection::{PathRejection, QueryRejection},
        Path, Query, State,
    },
    routing::get,
    Json, Router,
};
use time::OffsetDateTime;
use tracing::instrument;

use crate::{
    auth::extractors::CurrentUser,
    error::AppError,
    horoscope::{
        dto::{HistoryQuery, HistoryResponse, HoroscopeEntry, SingleHoroscopeResponse, StatsResponse},
        services,
    },
    response::ApiResponse,
    state::AppState,
    zodiac,
};

pub fn horoscope_routes() -> Router<AppState> {
    Router::new()
        .route("/horoscope/today", get(today))
        .route("/horoscope/history", get(history))
        .route("/horoscope/date/:date", get(by_date))
        .route("/horoscope/stats", get(stats))
}

fn utc_today() -> time::Date {
    OffsetDateTime::now_utc().date()
}

#[instrument(skip_all)]
pub async fn today(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
) -> Result<Json<ApiResponse<SingleHoroscopeResponse>>, AppError> {
    let record = services::get_or_create(state.horoscopes.as_ref(), &user, utc_today()).await?;
    Ok(ApiResponse::ok(SingleHoroscopeResponse {
        horoscope: HoroscopeEntry::from_record(record),
    }))
}

#[instrument(skip_all)]
pub async fn history(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    query: Result<Query<HistoryQuery>, QueryRejection>,
) -> Result<Json<ApiResponse<HistoryResponse>>, AppError> {
    let Query(query) = query?;
    let days = services::parse_history_days(query.days.as_deref());
    let response =
        services::recent_history(state.horoscopes.as_ref(), &user, utc_today(), days).await?;
    Ok(ApiResponse::ok(response))
}

#[instrument(skip_all)]
pub async fn by_date(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    raw: Result<Path<String>, PathRejection>,
) -> Result<Json<ApiResponse<SingleHoroscopeResponse>>, AppError> {
    let Path(raw) = raw?;
    let day = zodiac::parse_date(&raw).map_err(|_| {
        AppError::validation("Invalid date format. Please use YYYY-MM-DD format.")
    })?;
    let horoscope =
        services::entry_for_date(state.horoscopes.as_ref(), &user, day, utc_today()).await?;
    Ok(ApiResponse::ok(SingleHoroscopeResponse { horoscope }))
}

#[instrument(skip_all)]
pub async fn stats(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
) -> Result<Json<ApiResponse<StatsResponse>>, AppError> {
    let stats = services::stats(state.horoscopes.as_ref(), &user, utc_today()).await?;
    Ok(ApiResponse::ok(StatsResponse { stats }))
}
