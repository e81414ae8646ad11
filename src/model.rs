use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// A single expense as stored by the remote service.
///
/// Decoding is lenient: a record with a missing or garbled field still
/// decodes, with the field falling back to an empty value (`0` for the
/// amount, `None` for the date) so aggregation never has to fail.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ExpenseRecord {
    #[serde(default, deserialize_with = "opaque_id")]
    pub id: Option<String>,
    #[serde(default, deserialize_with = "lenient_amount")]
    pub amount: f64,
    #[serde(default, deserialize_with = "lenient_text")]
    pub category: String,
    #[serde(default, deserialize_with = "lenient_text")]
    pub description: String,
    #[serde(default, deserialize_with = "lenient_timestamp")]
    pub date: Option<NaiveDateTime>,
}

impl ExpenseRecord {
    pub fn new(amount: f64, category: impl Into<String>) -> Self {
        Self {
            id: None,
            amount,
            category: category.into(),
            description: String::new(),
            date: None,
        }
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_date(mut self, date: NaiveDateTime) -> Self {
        self.date = Some(date);
        self
    }

    pub fn description_or_placeholder(&self) -> &str {
        if self.description.trim().is_empty() {
            "No description"
        } else {
            &self.description
        }
    }
}

/// Body of `POST /expense`. The service assigns `id` and `date`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewExpense {
    pub amount: f64,
    pub category: String,
    pub description: String,
}

/// Body of `PUT /expense/{id}`; unset fields are left out of the JSON.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ExpensePatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategorySummary {
    #[serde(default, deserialize_with = "lenient_text")]
    pub category: String,
    #[serde(default, deserialize_with = "lenient_amount")]
    pub total_amount: f64,
    #[serde(default, deserialize_with = "lenient_count")]
    pub count: u32,
    #[serde(default, deserialize_with = "lenient_amount")]
    pub average_amount: f64,
}

/// Parses the timestamp shapes the expense service is known to emit.
///
/// Offsets are kept as written: `2024-05-31T23:30:00-05:00` is May 31st.
pub fn parse_timestamp(raw: &str) -> Option<NaiveDateTime> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.naive_local());
    }

    NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f")
        .or_else(|_| NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S%.f"))
        .ok()
        .or_else(|| {
            NaiveDate::parse_from_str(raw, "%Y-%m-%d")
                .ok()
                .and_then(|date| date.and_hms_opt(0, 0, 0))
        })
}

// Jackson without JavaTimeModule writes LocalDateTime as [y, m, d, h, min, s, nanos].
fn timestamp_from_parts(parts: &[Value]) -> Option<NaiveDateTime> {
    let mut numbers = parts.iter().map(|part| part.as_i64());
    let year = i32::try_from(numbers.next()??).ok()?;
    let month = u32::try_from(numbers.next()??).ok()?;
    let day = u32::try_from(numbers.next()??).ok()?;
    let mut time = [0u32; 4];
    for slot in time.iter_mut() {
        match numbers.next() {
            Some(Some(value)) => *slot = u32::try_from(value).ok()?,
            Some(None) => return None,
            None => break,
        }
    }
    NaiveDate::from_ymd_opt(year, month, day)?.and_hms_nano_opt(time[0], time[1], time[2], time[3])
}

fn opaque_id<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(id) if !id.trim().is_empty() => Some(id),
        Value::Number(id) => Some(id.to_string()),
        _ => None,
    })
}

fn lenient_amount<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let amount = match Value::deserialize(deserializer)? {
        Value::Number(n) => n.as_f64().unwrap_or(0.0),
        Value::String(s) => s.trim().parse::<f64>().unwrap_or(0.0),
        _ => 0.0,
    };
    Ok(if amount.is_finite() { amount } else { 0.0 })
}

fn lenient_count<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    let count = match Value::deserialize(deserializer)? {
        Value::Number(n) => n.as_u64().unwrap_or(0),
        Value::String(s) => s.trim().parse::<u64>().unwrap_or(0),
        _ => 0,
    };
    Ok(u32::try_from(count).unwrap_or(u32::MAX))
}

fn lenient_text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(text) => text,
        Value::Null => String::new(),
        other => other.to_string(),
    })
}

fn lenient_timestamp<'de, D>(deserializer: D) -> Result<Option<NaiveDateTime>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(raw) => parse_timestamp(&raw),
        Value::Array(parts) => timestamp_from_parts(&parts),
        Value::Number(millis) => millis
            .as_i64()
            .and_then(DateTime::from_timestamp_millis)
            .map(|dt| dt.naive_utc()),
        _ => None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Datelike, Timelike};
    use serde_json::json;

    #[test]
    fn parses_rfc3339_with_offset_keeping_local_components() {
        let dt = parse_timestamp("2024-05-31T23:30:00-05:00").unwrap();
        assert_eq!((dt.year(), dt.month(), dt.day()), (2024, 5, 31));
        assert_eq!(dt.hour(), 23);
    }

    #[test]
    fn parses_naive_datetime_with_and_without_fraction() {
        let plain = parse_timestamp("2024-03-05T08:15:00").unwrap();
        let fractional = parse_timestamp("2024-03-05T08:15:00.123456").unwrap();
        assert_eq!(plain.date(), fractional.date());
        assert_eq!(plain.minute(), 15);
    }

    #[test]
    fn parses_plain_date_as_midnight() {
        let dt = parse_timestamp("2024-12-01").unwrap();
        assert_eq!(dt.day(), 1);
        assert_eq!(dt.hour(), 0);
    }

    #[test]
    fn rejects_garbage_timestamps() {
        assert!(parse_timestamp("yesterday").is_none());
        assert!(parse_timestamp("   ").is_none());
    }

    #[test]
    fn decodes_array_timestamp() {
        let record: ExpenseRecord = serde_json::from_value(json!({
            "id": 4,
            "amount": 12.0,
            "category": "Travel",
            "date": [2024, 2, 29, 18, 5, 7, 0]
        }))
        .unwrap();
        let date = record.date.unwrap();
        assert_eq!((date.month(), date.day(), date.hour()), (2, 29, 18));
    }

    #[test]
    fn decodes_epoch_millis_timestamp() {
        let record: ExpenseRecord =
            serde_json::from_value(json!({ "amount": 1, "date": 1_704_067_200_000i64 })).unwrap();
        assert_eq!(record.date.unwrap().year(), 2024);
    }

    #[test]
    fn placeholder_description_for_blank_text() {
        let record = ExpenseRecord::new(3.0, "Other").with_description("  ");
        assert_eq!(record.description_or_placeholder(), "No description");
    }

    #[test]
    fn empty_patch_serializes_to_empty_object() {
        let patch = ExpensePatch::default();
        assert_eq!(serde_json::to_value(&patch).unwrap(), json!({}));
    }
}
