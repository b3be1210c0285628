//! Ferry (vessel) model.

use chrono::Duration;
use serde::{Deserialize, Serialize};

/// A ferry in the fleet.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ferry {
    /// Unique ferry identifier.
    pub id: String,
    /// Vessel name.
    pub name: String,
    /// Operating company.
    #[serde(default)]
    pub operator: String,
    /// Passenger capacity.
    pub capacity: u32,
    /// Cruise speed (knots).
    pub speed_knots: f64,
    /// Minimum gap between an arrival and the next departure (minutes).
    #[serde(default = "default_turnaround_min")]
    pub turnaround_min: i64,
    /// Maximum summed trip duration per operational day (hours).
    #[serde(default = "default_max_daily_hours")]
    pub max_daily_hours: f64,
    /// Home port id; ferries without one roam the whole network.
    #[serde(default)]
    pub home_port: Option<String>,
    /// Whether the ferry is in service.
    #[serde(default = "default_true")]
    pub active: bool,
    /// Whether the ferry may sail overnight legs.
    #[serde(default)]
    pub overnight_allowed: bool,
}

fn default_turnaround_min() -> i64 {
    60
}

fn default_max_daily_hours() -> f64 {
    16.0
}

fn default_true() -> bool {
    true
}

impl Ferry {
    /// Creates an active ferry with a 60-minute turnaround and a
    /// 16-hour daily cap.
    pub fn new(id: impl Into<String>, name: impl Into<String>, capacity: u32) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            operator: String::new(),
            capacity,
            speed_knots: 15.0,
            turnaround_min: default_turnaround_min(),
            max_daily_hours: default_max_daily_hours(),
            home_port: None,
            active: true,
            overnight_allowed: false,
        }
    }

    /// Sets the operator.
    pub fn with_operator(mut self, operator: impl Into<String>) -> Self {
        self.operator = operator.into();
        self
    }

    /// Sets the cruise speed (knots).
    pub fn with_speed(mut self, knots: f64) -> Self {
        self.speed_knots = knots;
        self
    }

    /// Sets the turnaround time (minutes).
    pub fn with_turnaround(mut self, minutes: i64) -> Self {
        self.turnaround_min = minutes;
        self
    }

    /// Sets the daily operating cap (hours).
    pub fn with_max_daily_hours(mut self, hours: f64) -> Self {
        self.max_daily_hours = hours;
        self
    }

    /// Sets the home port.
    pub fn with_home_port(mut self, port_id: impl Into<String>) -> Self {
        self.home_port = Some(port_id.into());
        self
    }

    /// Takes the ferry out of service.
    pub fn inactive(mut self) -> Self {
        self.active = false;
        self
    }

    /// Permits overnight legs.
    pub fn with_overnight(mut self) -> Self {
        self.overnight_allowed = true;
        self
    }

    /// Turnaround time as a duration.
    #[inline]
    pub fn turnaround(&self) -> Duration {
        Duration::minutes(self.turnaround_min)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let f = Ferry::new("f1", "MV Test", 200);
        assert!(f.active);
        assert_eq!(f.turnaround_min, 60);
        assert_eq!(f.turnaround(), Duration::minutes(60));
        assert!(f.home_port.is_none());
    }

    #[test]
    fn test_builder_chain() {
        let f = Ferry::new("f1", "MV Test", 200)
            .with_operator("Goundar Shipping")
            .with_home_port("suva")
            .with_turnaround(90)
            .inactive();
        assert_eq!(f.operator, "Goundar Shipping");
        assert_eq!(f.home_port.as_deref(), Some("suva"));
        assert_eq!(f.turnaround_min, 90);
        assert!(!f.active);
    }

    #[test]
    fn test_serde_active_default() {
        let f: Ferry = serde_json::from_str(
            r#"{"id":"f1","name":"MV Test","capacity":100,"speed_knots":12.0}"#,
        )
        .unwrap();
        assert!(f.active);
        assert_eq!(f.max_daily_hours, 16.0);
    }
}
