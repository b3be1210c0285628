//! Weather condition model.
//!
//! Readings are refreshed periodically by an external collaborator and
//! read-only to the engine. Only unexpired readings are consulted;
//! latest-by-update-time wins.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// A weather reading for a route.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeatherCondition {
    /// Route the reading applies to.
    pub route_id: String,
    /// Port the reading was taken at.
    pub port_id: String,
    /// Sustained wind speed (km/h).
    pub wind_speed_kmh: f64,
    /// Precipitation probability (percent).
    #[serde(default)]
    pub precipitation_pct: f64,
    /// Free-text condition summary.
    #[serde(default)]
    pub condition: String,
    /// When the reading was taken.
    pub updated_at: NaiveDateTime,
    /// When the reading stops being trustworthy.
    pub expires_at: NaiveDateTime,
}

impl WeatherCondition {
    /// Creates a reading.
    pub fn new(
        route_id: impl Into<String>,
        port_id: impl Into<String>,
        wind_speed_kmh: f64,
        updated_at: NaiveDateTime,
        expires_at: NaiveDateTime,
    ) -> Self {
        Self {
            route_id: route_id.into(),
            port_id: port_id.into(),
            wind_speed_kmh,
            precipitation_pct: 0.0,
            condition: String::new(),
            updated_at,
            expires_at,
        }
    }

    /// Sets the condition text.
    pub fn with_condition(mut self, text: impl Into<String>) -> Self {
        self.condition = text.into();
        self
    }

    /// Whether the reading has expired as of `now`.
    #[inline]
    pub fn is_expired(&self, now: NaiveDateTime) -> bool {
        now >= self.expires_at
    }
}
