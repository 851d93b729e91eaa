//! Typed readings and the envelope parsers for the three telemetry endpoints.
//!
//! Every endpoint wraps its payload in an `{ "ok": bool, ... }` envelope.
//! A body is only accepted when it decodes to a JSON object whose `ok` field
//! is boolean `true`; anything else is a [`ParseFailure`]. Field reads inside
//! an accepted envelope are lenient: a missing or non-numeric field reads as
//! zero, the same way the service's other clients treat it.

use serde_json::{Map, Value};
use thiserror::Error;

/// Why a response body was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseFailure {
    /// The body is not valid JSON.
    #[error("malformed JSON: {0}")]
    Malformed(String),

    /// The body is valid JSON but the top-level value is not an object.
    #[error("response is not a JSON object")]
    NotObject,

    /// The envelope's `ok` field is missing, false, or not a boolean.
    #[error("response envelope is not ok")]
    NotOk,
}

/// The latest single reading from `/api/current`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CurrentReading {
    pub value: f64,
    /// Unix seconds.
    pub timestamp: i64,
}

/// Aggregate statistics over a window from `/api/stats`.
///
/// `count == 0` is a valid "no data in window" answer, distinct from a
/// parse failure.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StatsSummary {
    pub count: i64,
    pub min: f64,
    pub max: f64,
    pub avg: f64,
}

/// One point of a time series.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SeriesPoint {
    /// Unix seconds, possibly fractional.
    pub timestamp: f64,
    pub value: f64,
}

/// Points in the order the service sent them.
pub type TimeSeries = Vec<SeriesPoint>;

/// Decode `body` and return its fields if it is an `ok` envelope.
fn open_envelope(body: &[u8]) -> Result<Map<String, Value>, ParseFailure> {
    let value: Value =
        serde_json::from_slice(body).map_err(|e| ParseFailure::Malformed(e.to_string()))?;

    let Value::Object(fields) = value else {
        return Err(ParseFailure::NotObject);
    };

    match fields.get("ok") {
        Some(Value::Bool(true)) => Ok(fields),
        _ => Err(ParseFailure::NotOk),
    }
}

/// Read a numeric field, treating absence or a non-number as zero.
fn number(fields: &Map<String, Value>, key: &str) -> f64 {
    fields.get(key).and_then(Value::as_f64).unwrap_or(0.0)
}

/// Parse a `/api/current` response.
pub fn parse_current(body: &[u8]) -> Result<CurrentReading, ParseFailure> {
    let fields = open_envelope(body)?;
    Ok(CurrentReading {
        value: number(&fields, "value"),
        timestamp: number(&fields, "ts") as i64,
    })
}

/// Parse a `/api/stats` response.
pub fn parse_stats(body: &[u8]) -> Result<StatsSummary, ParseFailure> {
    let fields = open_envelope(body)?;
    Ok(StatsSummary {
        count: number(&fields, "count") as i64,
        min: number(&fields, "min"),
        max: number(&fields, "max"),
        avg: number(&fields, "avg"),
    })
}

/// Parse a `/api/series` response.
///
/// A missing or non-array `points` field yields an empty series. Elements that
/// are not objects still contribute a point at `(0, 0)`.
pub fn parse_series(body: &[u8]) -> Result<TimeSeries, ParseFailure> {
    let fields = open_envelope(body)?;

    let Some(Value::Array(points)) = fields.get("points") else {
        return Ok(Vec::new());
    };

    let empty = Map::new();
    Ok(points
        .iter()
        .map(|p| {
            let point = p.as_object().unwrap_or(&empty);
            SeriesPoint {
                timestamp: number(point, "ts"),
                value: number(point, "value"),
            }
        })
        .collect())
}
