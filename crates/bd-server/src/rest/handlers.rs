//! Request handlers.
//!
//! Query strings are read as a raw map so the settlement endpoint can echo
//! them back unchanged; each value is then parsed into a typed parameter.

use std::collections::BTreeMap;

use axum::{
    extract::{Query, State},
    Json,
};
use bd_settlement::{ParsedDate, ParsedDelay};

use super::dto::{BusinessDayResponse, HealthResponse, SettlementResponse};
use super::error::ApiError;
use super::AppState;

type RawQuery = BTreeMap<String, String>;

/// `GET /health`
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse { ok: true })
}

/// `GET /isBusinessDay?date=…&country=…`
pub async fn is_business_day(
    State(state): State<AppState>,
    Query(query): Query<RawQuery>,
) -> Result<Json<BusinessDayResponse>, ApiError> {
    let date = param(&query, "date").ok_or(ApiError::DateRequired)?;
    let country = country(&query, &state);
    let results = bd_settlement::business_day(&ParsedDate::parse(date), country);
    Ok(Json(BusinessDayResponse { ok: true, results }))
}

/// `GET /settlementDate?initialDate=…&delay=…&country=…`
pub async fn settlement_date(
    State(state): State<AppState>,
    Query(query): Query<RawQuery>,
) -> Json<SettlementResponse> {
    let initial = ParsedDate::parse(param(&query, "initialDate").unwrap_or_default());
    let delay = ParsedDelay::parse(param(&query, "delay").unwrap_or_default());
    let outcome = bd_settlement::settlement_date(&initial, delay, country(&query, &state));
    Json(SettlementResponse {
        ok: true,
        results: outcome.into(),
        initial_query: query,
    })
}

/// A non-blank parameter.
fn param<'a>(query: &'a RawQuery, name: &str) -> Option<&'a str> {
    query
        .get(name)
        .map(String::as_str)
        .filter(|v| !v.trim().is_empty())
}

fn country<'a>(query: &'a RawQuery, state: &'a AppState) -> &'a str {
    param(query, "country").unwrap_or(&*state.default_country)
}
