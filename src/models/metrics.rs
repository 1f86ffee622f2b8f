//! Metrics query options shared by the click/referrer/country endpoints.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::query::Params;

/// Default `limit` for per-link metrics.
pub const LINK_METRICS_LIMIT: u32 = 100;

/// Default `limit` for per-user metrics.
pub const USER_METRICS_LIMIT: u32 = 1000;

/// Default reporting timezone.
pub const DEFAULT_TIMEZONE: &str = "America/New_York";

/// Time bucket for metrics.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Unit {
    Minute,
    Hour,
    #[default]
    Day,
    Week,
    Month,
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Minute => "minute",
            Self::Hour => "hour",
            Self::Day => "day",
            Self::Week => "week",
            Self::Month => "month",
        })
    }
}

/// Window and shape of a metrics request.
///
/// Unset fields fall back to the service defaults the client documents:
/// `unit=day`, `units=-1` (all time), `timezone=America/New_York`, and a
/// per-endpoint `limit`. `rollup` and `unit_reference_ts` are only sent when
/// set.
///
/// # Example
///
/// ```
/// use bitlyapi::{MetricsQuery, Unit};
///
/// let query = MetricsQuery {
///     unit: Some(Unit::Hour),
///     units: Some(24),
///     rollup: Some(true),
///     ..Default::default()
/// };
/// assert_eq!(query.unit, Some(Unit::Hour));
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MetricsQuery {
    pub unit: Option<Unit>,
    pub units: Option<i64>,
    pub timezone: Option<String>,
    pub rollup: Option<bool>,
    pub limit: Option<u32>,
    pub unit_reference_ts: Option<DateTime<Utc>>,
}

impl MetricsQuery {
    pub(crate) fn apply(&self, params: &mut Params, default_limit: u32) {
        params.insert("unit", self.unit.unwrap_or_default().to_string());
        params.insert("units", self.units.unwrap_or(-1));
        params.insert(
            "timezone",
            self.timezone.as_deref().unwrap_or(DEFAULT_TIMEZONE),
        );
        params.insert_opt("rollup", self.rollup);
        params.insert("limit", self.limit.unwrap_or(default_limit));
        params.insert_opt(
            "unit_reference_ts",
            self.unit_reference_ts.map(|ts| ts.timestamp()),
        );
    }
}
