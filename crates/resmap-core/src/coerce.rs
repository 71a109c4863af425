//! Temporal value rendering rules.

use crate::catalog::ValueKind;
use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use resmap_proto::Value;

/// Render format for date-only values.
pub const DATE_FORMAT: &str = "%Y-%m-%d";
/// Render format for time-only values.
pub const TIME_FORMAT: &str = "%H:%M:%S";
/// Render format for datetime values.
pub const DATE_TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Coerce a raw field value into its canonical wire form.
///
/// Timestamps render according to the declared kind; an unannotated or
/// non-temporal kind renders the full datetime. Every other value passes
/// through unchanged. Total over the whole value domain.
pub fn coerce(value: &Value, kind: ValueKind) -> Value {
    match value {
        Value::Timestamp(ts) => Value::String(format_timestamp(*ts, kind)),
        other => other.clone(),
    }
}

fn format_timestamp(ts: NaiveDateTime, kind: ValueKind) -> String {
    let format = match kind {
        ValueKind::Date => DATE_FORMAT,
        ValueKind::Time => TIME_FORMAT,
        ValueKind::DateTime | ValueKind::Plain => DATE_TIME_FORMAT,
    };
    ts.format(format).to_string()
}

/// Parse an inbound wire value according to the declared kind.
///
/// Strings for temporally annotated fields become timestamps; a string
/// that does not parse in the declared form passes through as given.
/// Time-only values anchor to the epoch date, date-only values to
/// midnight.
pub fn parse_wire_value(value: Value, kind: ValueKind) -> Value {
    let Value::String(text) = &value else {
        return value;
    };

    let parsed = match kind {
        ValueKind::Date => NaiveDate::parse_from_str(text, DATE_FORMAT)
            .ok()
            .map(|date| date.and_time(NaiveTime::default())),
        ValueKind::Time => NaiveTime::parse_from_str(text, TIME_FORMAT)
            .ok()
            .map(|time| NaiveDate::default().and_time(time)),
        ValueKind::DateTime => NaiveDateTime::parse_from_str(text, DATE_TIME_FORMAT).ok(),
        ValueKind::Plain => None,
    };

    match parsed {
        Some(ts) => Value::Timestamp(ts),
        None => value,
    }
}
