//! Message records as returned by the Tinyhost listing API.
//!
//! The proxy relays upstream JSON untouched; these types are only used by the
//! page controller. Decoding is lenient: text fields accept any scalar,
//! unusable values read as absent, and a record that still fails to decode is
//! dropped from the listing instead of failing it.

use std::fmt;

use chrono::{DateTime, FixedOffset, NaiveDateTime};
use serde::{de::Error as _, Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::CoreError;

/// Identifier of a message. Tinyhost normally sends a string or an integer;
/// any other scalar is kept as its JSON text.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(untagged)]
pub enum MessageId {
    Number(i64),
    Text(String),
}

impl<'de> Deserialize<'de> for MessageId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        match Value::deserialize(deserializer)? {
            Value::Number(n) => Ok(n.as_i64().map_or_else(|| Self::Text(n.to_string()), Self::Number)),
            Value::String(s) => Ok(Self::Text(s)),
            Value::Bool(b) => Ok(Self::Text(b.to_string())),
            other => Err(D::Error::custom(format!("unsupported message id: {other}"))),
        }
    }
}

impl fmt::Display for MessageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::Text(s) => f.write_str(s),
        }
    }
}

impl MessageId {
    /// Whether this ID renders to `raw`, e.g. when echoed back in a URL.
    #[must_use]
    pub fn matches(&self, raw: &str) -> bool {
        match self {
            Self::Number(n) => raw.parse::<i64>().is_ok_and(|r| r == *n),
            Self::Text(s) => s == raw,
        }
    }
}

/// When a message was received: a date string, or epoch milliseconds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum MessageDate {
    EpochMillis(i64),
    Text(String),
}

impl fmt::Display for MessageDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EpochMillis(ms) => write!(f, "{ms}"),
            Self::Text(s) => f.write_str(s),
        }
    }
}

impl MessageDate {
    /// Parse as epoch milliseconds, RFC 3339, RFC 2822, or a naive
    /// `YYYY-MM-DDTHH:MM:SS` (taken as UTC).
    #[must_use]
    pub fn parse(&self) -> Option<DateTime<FixedOffset>> {
        let raw = match self {
            Self::EpochMillis(ms) => {
                return DateTime::from_timestamp_millis(*ms).map(|d| d.fixed_offset());
            }
            Self::Text(s) => s.trim(),
        };
        DateTime::parse_from_rfc3339(raw)
            .or_else(|_| DateTime::parse_from_rfc2822(raw))
            .ok()
            .or_else(|| {
                NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f")
                    .ok()
                    .map(|naive| naive.and_utc().fixed_offset())
            })
    }
}

#[expect(clippy::cast_possible_truncation, reason = "fractional milliseconds are dropped")]
fn lenient_date<'de, D: Deserializer<'de>>(d: D) -> Result<Option<MessageDate>, D::Error> {
    Ok(match Value::deserialize(d)? {
        Value::String(s) => Some(MessageDate::Text(s)),
        Value::Number(n) => n
            .as_i64()
            .or_else(|| n.as_f64().filter(|f| f.is_finite()).map(|f| f as i64))
            .map(MessageDate::EpochMillis),
        _ => None,
    })
}

fn lenient_text<'de, D: Deserializer<'de>>(d: D) -> Result<Option<String>, D::Error> {
    Ok(match Value::deserialize(d)? {
        Value::String(s) => Some(s),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    })
}

/// One received message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Message {
    pub id: MessageId,
    #[serde(default, deserialize_with = "lenient_text")]
    pub subject: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub sender: Option<String>,
    #[serde(default, deserialize_with = "lenient_date")]
    pub date: Option<MessageDate>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub body: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub body_preview: Option<String>,
}

impl Message {
    /// Subject, body and preview joined by single spaces; absent parts are empty.
    #[must_use]
    pub fn searchable_text(&self) -> String {
        [&self.subject, &self.body, &self.body_preview]
            .map(|part| part.as_deref().unwrap_or_default())
            .join(" ")
    }

    #[must_use]
    pub fn parsed_date(&self) -> Option<DateTime<FixedOffset>> {
        self.date.as_ref()?.parse()
    }
}

/// Body of a successful listing response.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct InboxListing {
    pub emails: Vec<Message>,
}

impl InboxListing {
    /// Decode a listing body record by record.
    ///
    /// A missing or `null` `emails` field is an empty listing. Records without
    /// a usable `id` get a positional one (`#0`, `#1`, ...); records that are
    /// not objects are skipped.
    ///
    /// # Errors
    /// Returns [`CoreError::MalformedListing`] if the body is not an object or
    /// `emails` is not an array.
    pub fn from_json(body: Value) -> Result<Self, CoreError> {
        let Value::Object(mut body) = body else {
            return Err(CoreError::MalformedListing("body is not an object".to_owned()));
        };
        let records = match body.remove("emails") {
            None | Some(Value::Null) => Vec::new(),
            Some(Value::Array(records)) => records,
            Some(_) => {
                return Err(CoreError::MalformedListing("`emails` is not an array".to_owned()))
            }
        };

        let emails = records
            .into_iter()
            .enumerate()
            .filter_map(|(i, record)| {
                let Value::Object(mut record) = record else {
                    return None;
                };
                let id_usable = record
                    .get("id")
                    .is_some_and(|id| id.is_string() || id.is_number() || id.is_boolean());
                if !id_usable {
                    record.insert("id".to_owned(), Value::String(format!("#{i}")));
                }
                serde_json::from_value(Value::Object(record)).ok()
            })
            .collect();
        Ok(Self { emails })
    }
}
