//! Parsing of the upstream metrics response.
//!
//! The performance tracker answers with `{"ok": true, "data": {...}}` using
//! camelCase keys. Values arrive as numbers or numeric strings, and any
//! field that is missing or unreadable counts as zero.

use std::str::FromStr;

use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use serde_json::Value;

use crate::error::{EngineError, EngineResult};
use crate::models::PerformanceMetrics;

/// Parses a metrics envelope into a [`PerformanceMetrics`] snapshot.
///
/// # Errors
///
/// Returns [`EngineError::MetricsUnavailable`] when `ok` is not `true`, using
/// the envelope's `error` text when present.
///
/// # Examples
///
/// ```
/// use commission_engine::metrics::parse_metrics_envelope;
/// use serde_json::json;
///
/// let metrics = parse_metrics_envelope(&json!({
///     "ok": true,
///     "data": { "totalApps": "42", "placementRate": 81.5 }
/// })).unwrap();
///
/// assert_eq!(metrics.total_apps, 42);
/// assert_eq!(metrics.placement_rate.to_string(), "81.5");
/// assert_eq!(metrics.compliance_rate.to_string(), "0");
/// ```
pub fn parse_metrics_envelope(envelope: &Value) -> EngineResult<PerformanceMetrics> {
    if envelope.get("ok").and_then(Value::as_bool) != Some(true) {
        let message = envelope
            .get("error")
            .and_then(Value::as_str)
            .filter(|e| !e.is_empty())
            .unwrap_or("Bad metrics");
        return Err(EngineError::MetricsUnavailable {
            message: message.to_string(),
        });
    }

    let field = |name: &str| {
        envelope
            .get("data")
            .and_then(|data| data.get(name))
            .and_then(decimal_value)
            .unwrap_or(Decimal::ZERO)
    };

    Ok(PerformanceMetrics {
        total_apps: field("totalApps").trunc().to_u32().unwrap_or(0),
        ancillary_attach: field("ancillaryAttach"),
        closing_rate: field("closingRate"),
        placement_rate: field("placementRate"),
        compliance_rate: field("complianceRate"),
    })
}

fn decimal_value(value: &Value) -> Option<Decimal> {
    match value {
        Value::Number(n) => Decimal::from_str(&n.to_string())
            .or_else(|_| Decimal::from_scientific(&n.to_string()))
            .ok(),
        Value::String(s) => Decimal::from_str(s.trim()).ok(),
        _ => None,
    }
}
