//! Maintenance log model.
//!
//! A logged entry takes the ferry out of scheduling for that calendar
//! date. The interval override only affects when the next service is
//! projected to fall due.

use chrono::{Duration, NaiveDate};
use serde::{Deserialize, Serialize};

/// Default days between routine maintenance services.
pub const DEFAULT_MAINTENANCE_INTERVAL_DAYS: u32 = 14;

/// A maintenance service record for a ferry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MaintenanceLog {
    /// Ferry being serviced.
    pub ferry_id: String,
    /// Date of the service; the ferry is unschedulable on this date.
    pub date: NaiveDate,
    /// Override of the routine interval (days) for this ferry.
    #[serde(default)]
    pub interval_days: Option<u32>,
}

impl MaintenanceLog {
    /// Creates a log entry with the default interval.
    pub fn new(ferry_id: impl Into<String>, date: NaiveDate) -> Self {
        Self {
            ferry_id: ferry_id.into(),
            date,
            interval_days: None,
        }
    }

    /// Sets a custom maintenance interval (days).
    pub fn with_interval(mut self, days: u32) -> Self {
        self.interval_days = Some(days);
        self
    }

    /// Date the next routine service falls due.
    pub fn next_due(&self) -> NaiveDate {
        let interval = self.interval_days.unwrap_or(DEFAULT_MAINTENANCE_INTERVAL_DAYS);
        self.date + Duration::days(i64::from(interval))
    }
}
