use serde_json::{Map, Number, Value};
use tracing::{debug, warn};

use crate::dom::FormKind;

/// Request body sent for a JSON-encoded form.
pub type FormPayload = Map<String, Value>;

/// Field carrying the market price history as JSON text.
pub const HISTORICAL_DATA_FIELD: &str = "historical_data";

/// One entry read from a browser form.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Text(String),
    File { name: String, size: u64 },
}

/// Generic key → string extraction over every entry of a form.
///
/// Later entries with the same key overwrite earlier ones. File entries
/// have no JSON representation and are left out.
pub fn serialize_form<I>(entries: I) -> FormPayload
where
    I: IntoIterator<Item = (String, FieldValue)>,
{
    let mut payload = FormPayload::new();
    for (key, value) in entries {
        match value {
            FieldValue::Text(text) => {
                payload.insert(key, Value::String(text));
            }
            FieldValue::File { name, .. } => {
                debug!("Skipping file entry {} ({}) in JSON payload", key, name);
            }
        }
    }
    payload
}

/// Build the request payload for `kind` from raw form entries.
pub fn build_payload<I>(kind: FormKind, entries: I) -> FormPayload
where
    I: IntoIterator<Item = (String, FieldValue)>,
{
    let mut payload = serialize_form(entries);
    match kind {
        FormKind::CropYield | FormKind::SoilHealth => {
            coerce_numeric(&mut payload, kind.numeric_fields());
        }
        FormKind::MarketPrice => coerce_historical_data(&mut payload),
        FormKind::PestDetection => {}
    }
    debug!("Built {:?} payload with {} fields", kind, payload.len());
    payload
}

/// Force each named field to a JSON number.
///
/// Values without a numeric prefix, and absent fields, become `null`,
/// which is what a browser sends for `NaN`.
pub fn coerce_numeric(payload: &mut FormPayload, fields: &[&str]) {
    for field in fields {
        let parsed = payload
            .get(*field)
            .and_then(Value::as_str)
            .and_then(parse_float);
        let value = parsed
            .and_then(Number::from_f64)
            .map(Value::Number)
            .unwrap_or(Value::Null);
        payload.insert((*field).to_string(), value);
    }
}

/// Replace the `historical_data` text with its parsed JSON value.
///
/// Empty or missing text counts as `[]`; text that is not valid JSON is
/// replaced by `[]` as well.
pub fn coerce_historical_data(payload: &mut FormPayload) {
    let text = payload
        .get(HISTORICAL_DATA_FIELD)
        .and_then(Value::as_str)
        .filter(|text| !text.is_empty())
        .unwrap_or("[]");

    let parsed = match serde_json::from_str::<Value>(text) {
        Ok(value) => value,
        Err(e) => {
            warn!("historical_data is not valid JSON, sending []: {}", e);
            Value::Array(Vec::new())
        }
    };
    payload.insert(HISTORICAL_DATA_FIELD.to_string(), parsed);
}

/// Lenient float parse over the longest numeric prefix of `text`.
///
/// Accepts leading whitespace, a sign, digits with an optional fraction and
/// exponent, or `Infinity`. Trailing garbage is ignored: `"12.5kg"` is 12.5.
pub fn parse_float(text: &str) -> Option<f64> {
    let trimmed = text.trim_start();
    let bytes = trimmed.as_bytes();
    let mut end = 0;

    if matches!(bytes.first(), Some(b'+') | Some(b'-')) {
        end += 1;
    }

    let unsigned = &trimmed[end..];
    if unsigned.starts_with("Infinity") {
        return Some(if trimmed.starts_with('-') {
            f64::NEG_INFINITY
        } else {
            f64::INFINITY
        });
    }

    let int_start = end;
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
    }
    let mut digits = end - int_start;

    if end < bytes.len() && bytes[end] == b'.' {
        let frac_start = end + 1;
        let mut frac_end = frac_start;
        while frac_end < bytes.len() && bytes[frac_end].is_ascii_digit() {
            frac_end += 1;
        }
        digits += frac_end - frac_start;
        end = frac_end;
    }

    if digits == 0 {
        return None;
    }

    if end < bytes.len() && matches!(bytes[end], b'e' | b'E') {
        let mut exp_end = end + 1;
        if exp_end < bytes.len() && matches!(bytes[exp_end], b'+' | b'-') {
            exp_end += 1;
        }
        let exp_digits_start = exp_end;
        while exp_end < bytes.len() && bytes[exp_end].is_ascii_digit() {
            exp_end += 1;
        }
        if exp_end > exp_digits_start {
            end = exp_end;
        }
    }

    trimmed[..end].parse::<f64>().ok()
}
