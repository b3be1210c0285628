//! Schedule (sailing) model.
//!
//! A schedule is one committed sailing: a ferry on a route at a departure
//! slot. The engine creates them; booking and ticketing flows mutate seats
//! and status later, outside this crate.

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// Lifecycle status of a sailing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScheduleStatus {
    /// On the timetable as planned.
    #[default]
    Scheduled,
    /// Expected to run late (e.g. weather downgrade at creation).
    Delayed,
    /// Will not run.
    Cancelled,
    /// Has left the departure port.
    Departed,
}

impl ScheduleStatus {
    /// Stable lowercase name, matching the serialized form.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Scheduled => "scheduled",
            Self::Delayed => "delayed",
            Self::Cancelled => "cancelled",
            Self::Departed => "departed",
        }
    }
}

impl std::fmt::Display for ScheduleStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A committed sailing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Schedule {
    /// Ferry operating the sailing.
    pub ferry_id: String,
    /// Route being sailed.
    pub route_id: String,
    /// Departure timestamp.
    pub departure: NaiveDateTime,
    /// Arrival timestamp (departure + crossing + safety buffer).
    pub arrival: NaiveDateTime,
    /// Seats open for sale (ferry capacity at creation).
    pub available_seats: u32,
    /// Lifecycle status.
    #[serde(default)]
    pub status: ScheduleStatus,
    /// Operational day the sailing is attributed to.
    pub day: NaiveDate,
    /// Whether the engine created this sailing (vs. manual entry).
    #[serde(default)]
    pub auto_generated: bool,
}

impl Schedule {
    /// Creates a scheduled sailing; the operational day is the departure date.
    pub fn new(
        ferry_id: impl Into<String>,
        route_id: impl Into<String>,
        departure: NaiveDateTime,
        arrival: NaiveDateTime,
        available_seats: u32,
    ) -> Self {
        Self {
            ferry_id: ferry_id.into(),
            route_id: route_id.into(),
            departure,
            arrival,
            available_seats,
            status: ScheduleStatus::Scheduled,
            day: departure.date(),
            auto_generated: false,
        }
    }

    /// Sets the status.
    pub fn with_status(mut self, status: ScheduleStatus) -> Self {
        self.status = status;
        self
    }

    /// Marks the sailing as engine-generated.
    pub fn auto_generated(mut self) -> Self {
        self.auto_generated = true;
        self
    }

    /// Trip duration in hours (arrival − departure, buffer included).
    #[inline]
    pub fn trip_hours(&self) -> f64 {
        (self.arrival - self.departure).num_minutes() as f64 / 60.0
    }
}
