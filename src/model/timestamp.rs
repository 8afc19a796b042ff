//! Minute-precision local timestamps, stored as `2024 - Mar 05 | 14:07`.

use chrono::{Local, NaiveDateTime, Timelike};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use tracing::debug;

pub const FORMAT: &str = "%Y - %b %d | %H:%M";

/// A task timestamp as found in the task file.
///
/// Files written under another locale carry month names chrono cannot read
/// (`2024 - Mär 05 | 14:07`). Those are kept as `Raw` and written back verbatim.
/// Ordering is only meaningful between two `At` values.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub enum Timestamp {
    At(NaiveDateTime),
    Raw(String),
}

impl Timestamp {
    /// Current local time, truncated to the minute so it survives a save/load cycle unchanged.
    pub fn now() -> Self {
        let now = Local::now().naive_local();
        Timestamp::At(
            now.date()
                .and_hms_opt(now.hour(), now.minute(), 0)
                .unwrap_or(now),
        )
    }

    pub fn parse(s: &str) -> Self {
        match NaiveDateTime::parse_from_str(s, FORMAT) {
            Ok(at) => Timestamp::At(at),
            Err(err) => {
                debug!(value = s, reason = %err, "keeping unrecognised timestamp as is");
                Timestamp::Raw(s.to_string())
            }
        }
    }
}

impl From<NaiveDateTime> for Timestamp {
    fn from(at: NaiveDateTime) -> Self {
        Timestamp::At(at)
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Timestamp::At(at) => write!(f, "{}", at.format(FORMAT)),
            Timestamp::Raw(raw) => f.write_str(raw),
        }
    }
}

impl Serialize for Timestamp {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Timestamp {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Ok(Timestamp::parse(&s))
    }
}
