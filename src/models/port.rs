//! Port model.
//!
//! A port's operating hours define its curfew: no departures or arrivals
//! outside the window unless the port allows night operations. Berths cap
//! how many vessels can be alongside at the same minute.

use chrono::NaiveTime;
use serde::{Deserialize, Serialize};

use super::hm;

/// A port (wharf/jetty) in the network.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Port {
    /// Unique port identifier.
    pub id: String,
    /// Display name, also the key for known crossing durations.
    pub name: String,
    /// Latitude (degrees).
    pub latitude: f64,
    /// Longitude (degrees).
    pub longitude: f64,
    /// Start of the operational day (inclusive).
    #[serde(default = "default_operating_start")]
    pub operating_start: NaiveTime,
    /// End of the operational day (exclusive).
    #[serde(default = "default_operating_end")]
    pub operating_end: NaiveTime,
    /// Simultaneous vessels the port can take alongside.
    #[serde(default = "default_berths")]
    pub berths: u32,
    /// Whether approaches depend on the tide (larger safety buffer).
    #[serde(default)]
    pub tide_sensitive: bool,
    /// Whether movements outside operating hours are permitted.
    #[serde(default)]
    pub allows_night_ops: bool,
}

fn default_operating_start() -> NaiveTime {
    hm(6, 0)
}

fn default_operating_end() -> NaiveTime {
    hm(20, 0)
}

fn default_berths() -> u32 {
    1
}

impl Port {
    /// Creates a single-berth port with 06:00–20:00 operating hours.
    pub fn new(id: impl Into<String>, name: impl Into<String>, latitude: f64, longitude: f64) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            latitude,
            longitude,
            operating_start: default_operating_start(),
            operating_end: default_operating_end(),
            berths: default_berths(),
            tide_sensitive: false,
            allows_night_ops: false,
        }
    }

    /// Sets the operational day.
    pub fn with_operating_hours(mut self, start: NaiveTime, end: NaiveTime) -> Self {
        self.operating_start = start;
        self.operating_end = end;
        self
    }

    /// Sets the berth count.
    pub fn with_berths(mut self, berths: u32) -> Self {
        self.berths = berths;
        self
    }

    /// Marks the port's approaches as tide-dependent.
    pub fn tide_sensitive(mut self) -> Self {
        self.tide_sensitive = true;
        self
    }

    /// Permits movements outside operating hours.
    pub fn with_night_ops(mut self) -> Self {
        self.allows_night_ops = true;
        self
    }

    /// Whether a movement at `time` is within the port's curfew rules.
    ///
    /// Half-open on the operational day: the start minute is open, the
    /// end minute is not. Hours that wrap midnight are supported.
    pub fn is_open_at(&self, time: NaiveTime) -> bool {
        if self.allows_night_ops {
            return true;
        }
        if self.operating_start <= self.operating_end {
            time >= self.operating_start && time < self.operating_end
        } else {
            time >= self.operating_start || time < self.operating_end
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let p = Port::new("suva", "Suva", -18.1416, 178.4419);
        assert_eq!(p.berths, 1);
        assert_eq!(p.operating_start, hm(6, 0));
        assert!(!p.tide_sensitive);
    }

    #[test]
    fn test_open_interval_is_half_open() {
        let p = Port::new("p", "P", 0.0, 0.0).with_operating_hours(hm(6, 0), hm(20, 0));
        assert!(p.is_open_at(hm(6, 0)));
        assert!(p.is_open_at(hm(19, 59)));
        assert!(!p.is_open_at(hm(20, 0)));
        assert!(!p.is_open_at(hm(5, 59)));
    }

    #[test]
    fn test_midnight_wrap() {
        let p = Port::new("p", "P", 0.0, 0.0).with_operating_hours(hm(20, 0), hm(4, 0));
        assert!(p.is_open_at(hm(22, 0)));
        assert!(p.is_open_at(hm(2, 0)));
        assert!(!p.is_open_at(hm(4, 0)));
        assert!(!p.is_open_at(hm(12, 0)));
    }

    #[test]
    fn test_night_ops_bypass_curfew() {
        let p = Port::new("p", "P", 0.0, 0.0).with_night_ops();
        assert!(p.is_open_at(hm(3, 0)));
    }

    #[test]
    fn test_serde_defaults() {
        let p: Port =
            serde_json::from_str(r#"{"id":"p","name":"P","latitude":0.0,"longitude":0.0}"#).unwrap();
        assert_eq!(p.berths, 1);
        assert!(p.is_open_at(hm(12, 0)));
        assert!(!p.allows_night_ops);
    }
}
