//! Departure windows and per-weekday service patterns.
//!
//! A departure window is a preferred span of the day, written as
//! `"HH:MM-HH:MM"` in data files. Candidate departures are proposed at
//! every whole hour inside the window; ferries depart on the hour.

use std::fmt;
use std::str::FromStr;

use chrono::{NaiveTime, Timelike};
use serde::de::{Deserializer, Error as _};
use serde::ser::Serializer;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::hm;

/// Error parsing a `"HH:MM-HH:MM"` window string.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WindowParseError {
    /// The string has no `-` separating start and end.
    #[error("window '{0}' is missing the '-' separator")]
    MissingSeparator(String),
    /// A component is not a valid `HH:MM` time.
    #[error("'{0}' is not a valid HH:MM time")]
    BadTime(String),
    /// The window ends at or before it starts.
    #[error("window '{0}' ends before it starts")]
    Inverted(String),
}

/// A preferred departure span within a day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DepartureWindow {
    /// Earliest preferred departure time.
    pub start: NaiveTime,
    /// Latest preferred departure time.
    pub end: NaiveTime,
}

impl DepartureWindow {
    /// Creates a window from start and end times.
    pub fn new(start: NaiveTime, end: NaiveTime) -> Self {
        Self { start, end }
    }

    /// Fallback window used when a route defines no usable windows.
    pub fn default_window() -> Self {
        Self::new(hm(8, 0), hm(16, 0))
    }

    /// Candidate departure hours: every whole hour in
    /// `[start.hour(), end.hour()]` inclusive, minute fixed at 0.
    pub fn candidate_hours(&self) -> impl Iterator<Item = u32> {
        self.start.hour()..=self.end.hour()
    }
}

impl FromStr for DepartureWindow {
    type Err = WindowParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (start_raw, end_raw) = s
            .split_once('-')
            .ok_or_else(|| WindowParseError::MissingSeparator(s.to_string()))?;
        let start = parse_hhmm(start_raw.trim())?;
        let end = parse_hhmm(end_raw.trim())?;
        if end <= start {
            return Err(WindowParseError::Inverted(s.to_string()));
        }
        Ok(Self { start, end })
    }
}

fn parse_hhmm(s: &str) -> Result<NaiveTime, WindowParseError> {
    NaiveTime::parse_from_str(s, "%H:%M").map_err(|_| WindowParseError::BadTime(s.to_string()))
}

impl fmt::Display for DepartureWindow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}-{}",
            self.start.format("%H:%M"),
            self.end.format("%H:%M")
        )
    }
}

impl Serialize for DepartureWindow {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for DepartureWindow {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(D::Error::custom)
    }
}

/// Deserializes a list of window strings leniently: malformed entries are
/// logged and dropped rather than failing the whole snapshot load.
pub(crate) fn windows_lenient<'de, D>(deserializer: D) -> Result<Vec<DepartureWindow>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Vec::<String>::deserialize(deserializer)?;
    Ok(raw
        .iter()
        .filter_map(|s| match s.parse::<DepartureWindow>() {
            Ok(w) => Some(w),
            Err(e) => {
                tracing::warn!(window = %s, error = %e, "dropping malformed departure window");
                None
            }
        })
        .collect())
}

/// Per-weekday override of a route's preferred departure windows.
///
/// When a pattern exists for (route, weekday), its windows replace the
/// route's defaults for generation on that weekday.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServicePattern {
    /// Route the pattern applies to.
    pub route_id: String,
    /// Weekday, 0 = Monday through 6 = Sunday.
    pub weekday: u8,
    /// Replacement windows for that weekday.
    #[serde(default, deserialize_with = "windows_lenient")]
    pub windows: Vec<DepartureWindow>,
}

impl ServicePattern {
    /// Creates a pattern for a route and weekday.
    pub fn new(route_id: impl Into<String>, weekday: u8, windows: Vec<DepartureWindow>) -> Self {
        Self {
            route_id: route_id.into(),
            weekday,
            windows,
        }
    }
}
