//! Serialization and deserialization implementations for roster records
//!
//! Status and frequency are stored as their display labels, and unknown
//! labels are preserved rather than rejected. Dates are read leniently
//! and truncated to the calendar date.

use super::record::{Frequency, SiteStatus};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

impl Serialize for SiteStatus {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for SiteStatus {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let label = String::deserialize(deserializer)?;
        Ok(SiteStatus::from(label.as_str()))
    }
}

impl Serialize for Frequency {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Frequency {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let label = String::deserialize(deserializer)?;
        Ok(Frequency::from(label.as_str()))
    }
}

/// `#[serde(with = ...)]` adapter for optional calendar dates
///
/// Reads `YYYY-MM-DD` or a date-time string and keeps the date part.
/// TOML's own date and date-time values (unquoted) are read the same way.
/// An empty string reads as `None`. Writes `YYYY-MM-DD`.
pub(crate) mod lenient_date {
    use crate::calendar::normalize_date;
    use chrono::NaiveDate;
    use serde::de::Error as _;
    use serde::{Deserialize, Deserializer, Serializer};
    use toml::value::Datetime;

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawDate {
        Text(String),
        Toml(Datetime),
    }

    pub fn serialize<S>(date: &Option<NaiveDate>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match date {
            Some(d) => serializer.serialize_str(&d.format("%Y-%m-%d").to_string()),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<NaiveDate>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = Option::<RawDate>::deserialize(deserializer)?;
        match raw {
            None => Ok(None),
            Some(RawDate::Text(s)) if s.trim().is_empty() => Ok(None),
            Some(RawDate::Text(s)) => normalize_date(&s).map(Some).ok_or_else(|| {
                D::Error::custom(format!(
                    "invalid date '{}'. Use YYYY-MM-DD (e.g., '2025-03-15')",
                    s
                ))
            }),
            Some(RawDate::Toml(datetime)) => {
                // A time-only value has no date part
                let date = datetime.date.and_then(|d| {
                    NaiveDate::from_ymd_opt(i32::from(d.year), u32::from(d.month), u32::from(d.day))
                });
                date.map(Some).ok_or_else(|| {
                    D::Error::custom(format!(
                        "invalid date '{}'. Use YYYY-MM-DD (e.g., '2025-03-15')",
                        datetime
                    ))
                })
            }
        }
    }
}
