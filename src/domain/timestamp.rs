//! ISO-8601 timestamps with a fixed-width, lexically sortable encoding.

use chrono::{DateTime, Duration, Local, NaiveDateTime, SecondsFormat, SubsecRound, TimeZone, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A point in time recorded on a note.
///
/// Always written as RFC 3339 in UTC with microsecond precision
/// (`2024-01-15T10:30:00.000000Z`), so string order and time order agree.
/// Reading also accepts any RFC 3339 offset and naive ISO-8601 values
/// (`2024-01-15T10:30:00.123456`), the latter interpreted in local time.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Timestamp(DateTime<Utc>);

impl Timestamp {
    /// Returns the current time, truncated to microseconds.
    pub fn now() -> Self {
        Self(Utc::now().trunc_subsecs(6))
    }

    /// Returns the current time, or one microsecond past `previous` if the
    /// clock has not moved beyond it.
    pub fn now_after(previous: Timestamp) -> Self {
        let now = Self::now();
        if now > previous {
            now
        } else {
            Self(previous.0 + Duration::microseconds(1))
        }
    }

    /// Wraps an existing datetime, truncated to microseconds.
    pub fn from_datetime(datetime: DateTime<Utc>) -> Self {
        Self(datetime.trunc_subsecs(6))
    }

    /// Returns the underlying UTC datetime.
    pub fn as_datetime(&self) -> DateTime<Utc> {
        self.0
    }

    /// Returns the timestamp converted to the local timezone.
    pub fn local(&self) -> DateTime<Local> {
        self.0.with_timezone(&Local)
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0.to_rfc3339_opts(SecondsFormat::Micros, true))
    }
}

impl fmt::Debug for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Timestamp({})", self)
    }
}

/// Error returned when a string is not a recognized ISO-8601 timestamp.
#[derive(Debug, Clone)]
pub struct ParseTimestampError(String);

impl fmt::Display for ParseTimestampError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid timestamp '{}'", self.0)
    }
}

impl std::error::Error for ParseTimestampError {}

impl FromStr for Timestamp {
    type Err = ParseTimestampError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
            return Ok(Self::from_datetime(dt.with_timezone(&Utc)));
        }

        let naive = NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S%.f")
            .map_err(|_| ParseTimestampError(s.to_string()))?;
        let utc = Local
            .from_local_datetime(&naive)
            .earliest()
            .map(|dt| dt.with_timezone(&Utc))
            .unwrap_or_else(|| Utc.from_utc_datetime(&naive));
        Ok(Self::from_datetime(utc))
    }
}

impl Serialize for Timestamp {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Timestamp {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
