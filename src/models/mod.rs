//! Ferry network domain models.
//!
//! Configuration entities (`Port`, `Ferry`, `Route`, `ServicePattern`,
//! `MaintenanceLog`) are created out-of-band and read-only to the engine.
//! `WeatherCondition` is refreshed by an external collaborator. `Schedule`
//! is the engine's sole write target.
//!
//! # Time Model
//!
//! All times are naive local times (`chrono::Naive*`): curfews and
//! operational days are defined in port-local wall-clock terms, and the
//! network operates in a single zone.

mod ferry;
mod maintenance;
mod port;
mod route;
mod schedule;
mod weather;
mod window;

pub use ferry::Ferry;
pub use maintenance::{MaintenanceLog, DEFAULT_MAINTENANCE_INTERVAL_DAYS};
pub use port::Port;
pub use route::{Route, ServiceTier};
pub use schedule::{Schedule, ScheduleStatus};
pub use weather::WeatherCondition;
pub use window::{DepartureWindow, ServicePattern, WindowParseError};

use chrono::NaiveTime;

/// Builds a `NaiveTime` from hour and minute literals.
///
/// Out-of-range components clamp to midnight rather than panic; callers
/// pass compile-time-known values.
pub(crate) fn hm(hour: u32, minute: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(hour, minute, 0).unwrap_or(NaiveTime::MIN)
}
