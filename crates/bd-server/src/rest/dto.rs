//! Response bodies.

use std::collections::BTreeMap;

use bd_settlement::{format_utc, SettlementOutcome};
use serde::{Deserialize, Serialize};

/// `GET /health`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Always `true`.
    pub ok: bool,
}

/// `GET /isBusinessDay`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BusinessDayResponse {
    /// Always `true`.
    pub ok: bool,
    /// `null` when the country has no calendar.
    pub results: Option<bool>,
}

/// `GET /settlementDate`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SettlementResponse {
    /// Always `true`.
    pub ok: bool,
    /// The query parameters as received.
    pub initial_query: BTreeMap<String, String>,
    /// The computed settlement.
    pub results: SettlementResults,
}

/// Settlement details. Every field is `null` when the inputs were unusable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SettlementResults {
    /// `YYYY-MM-DDTHH:MM:SSZ`
    pub business_date: Option<String>,
    /// Weekday holidays skipped.
    pub holiday_days: Option<u32>,
    /// Calendar days spanned.
    pub total_days: Option<u32>,
    /// Weekend days skipped.
    pub weekend_days: Option<u32>,
}

impl From<SettlementOutcome> for SettlementResults {
    fn from(outcome: SettlementOutcome) -> Self {
        Self {
            business_date: outcome.business_date.as_ref().map(format_utc),
            holiday_days: outcome.holiday_days,
            total_days: outcome.total_days,
            weekend_days: outcome.weekend_days,
        }
    }
}

/// Body of a refused request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorResponse {
    /// Always `false`.
    pub ok: bool,
    /// Human-readable reason.
    pub error_message: String,
}
