//! Automatic timetable generation for inter-island ferry networks.
//!
//! Builds conflict-free sailing schedules over a bounded horizon using a
//! constrained greedy scan: candidate slots are enumerated per route from
//! preferred departure windows, offered to a proximity-ranked fleet, and
//! committed only when every operational constraint holds (maintenance,
//! turnaround, berth capacity, curfews, daily-hours caps, spacing, and
//! per-route service quotas). A relaxed backfill pass tops up routes that
//! fall short of their minimum weekly service.
//!
//! # Modules
//!
//! - **`models`**: Domain types — `Port`, `Ferry`, `Route`, `Schedule`,
//!   `ServicePattern`, `MaintenanceLog`, `WeatherCondition`
//! - **`snapshot`**: Pre-loaded, immutable input set for one run
//! - **`engine`**: Candidate enumeration, constraint chain, resource
//!   tracking, weather adjustment, and the synthesizer itself
//! - **`validation`**: Input integrity checks and timetable auditing
//! - **`geo`**: Great-circle distances between port coordinates
//! - **`demo`**: A seeded Fiji-style demo network
//!
//! # Determinism
//!
//! A run is a pure function of its snapshot, horizon, and configuration:
//! iteration orders are fixed, ties break on IDs, and the reference time
//! for weather expiry is passed in explicitly. Re-running over the same
//! horizon with the previous output in the snapshot creates nothing new.
//!
//! # References
//!
//! - Pinedo (2016), "Scheduling: Theory, Algorithms, and Systems"
//! - Ceder (2016), "Public Transit Planning and Operation"

pub mod demo;
pub mod engine;
pub mod geo;
pub mod models;
pub mod snapshot;
pub mod validation;
