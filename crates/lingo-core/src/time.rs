//! Timestamp codec for the API's date format.
//!
//! The API emits timestamps like `2018-01-02T03:04:05` with no zone
//! designator; all values are UTC by contract.

use chrono::NaiveDateTime;
use serde::de::{self, Deserialize, Deserializer};
use serde::ser::{Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

const FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

/// A timestamp in the API's `%Y-%m-%dT%H:%M:%S` wire format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Timestamp(pub NaiveDateTime);

impl Timestamp {
    /// The underlying naive datetime.
    #[must_use]
    pub const fn as_naive(&self) -> NaiveDateTime {
        self.0
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(FORMAT))
    }
}

impl FromStr for Timestamp {
    type Err = chrono::ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        NaiveDateTime::parse_from_str(s, FORMAT).map(Timestamp)
    }
}

impl From<NaiveDateTime> for Timestamp {
    fn from(value: NaiveDateTime) -> Self {
        Self(value)
    }
}

impl Serialize for Timestamp {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(&self.0.format(FORMAT))
    }
}

impl<'de> Deserialize<'de> for Timestamp {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trips_wire_format() {
        let json = "\"2018-01-02T03:04:05\"";
        let ts: Timestamp = serde_json::from_str(json).unwrap();
        assert_eq!(serde_json::to_string(&ts).unwrap(), json);
    }

    #[test]
    fn rejects_zoned_timestamps() {
        let result = serde_json::from_str::<Timestamp>("\"2018-01-02T03:04:05Z\"");
        assert!(result.is_err());
    }

    #[test]
    fn display_matches_wire_format() {
        let ts: Timestamp = "2020-12-31T23:59:59".parse().unwrap();
        assert_eq!(ts.to_string(), "2020-12-31T23:59:59");
    }
}
