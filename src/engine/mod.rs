//! Schedule generation engine.
//!
//! A single-threaded, synchronous batch computation over a bounded horizon.
//! The scan is a deterministic sequential pass: constraint checks at step N
//! depend on commits from steps 1..N-1 (turnaround, daily hours, and berth
//! occupancy are cumulative), so the inner loops must not be parallelized.
//!
//! # Pipeline
//!
//! 1. [`candidates`] enumerates eligible hours and proximity-ranked ferries.
//! 2. [`constraints`] tests each candidate against the operational rules.
//! 3. [`tracker::ResourceTracker`] carries the occupancy state commits feed.
//! 4. [`weather`] downgrades fresh sailings to delayed in high wind.
//! 5. [`synthesizer::Synthesizer`] orchestrates the scan plus a relaxed
//!    backfill pass, and emits a [`report::GenerationReport`].

pub mod candidates;
pub mod constraints;
pub mod report;
pub mod synthesizer;
pub mod tracker;
pub mod weather;

pub use constraints::SkipReason;
pub use report::{GenerationReport, RouteCoverage};
pub use synthesizer::{GenerationError, Horizon, Synthesizer};
pub use tracker::ResourceTracker;

use chrono::NaiveDateTime;

/// Tunables for one generation run.
///
/// An explicit value passed through every call; the engine keeps no global
/// state, so concurrent runs over different snapshots cannot interfere.
#[derive(Debug, Clone)]
pub struct EngineConfig {
    /// Minimum gap between same-route, same-day departures (minutes).
    pub spacing_min: i64,
    /// Wind speed above which new sailings start out delayed (km/h).
    pub wind_delay_threshold_kmh: f64,
    /// Speed assumed when estimating duration from distance (km/h).
    pub fallback_speed_kmh: f64,
    /// Default departure hour for the backfill pass.
    pub backfill_hour: u32,
    /// Suppress curfew and spacing checks in the primary pass.
    pub relaxed: bool,
    /// Reference time for weather-reading expiry.
    pub now: NaiveDateTime,
}

impl EngineConfig {
    /// Default tunables with the given weather-expiry reference time.
    pub fn at(now: NaiveDateTime) -> Self {
        Self {
            spacing_min: 180,
            wind_delay_threshold_kmh: 30.0,
            fallback_speed_kmh: 25.0,
            backfill_hour: 8,
            relaxed: false,
            now,
        }
    }

    /// Sets relaxed mode for the primary pass.
    pub fn relaxed(mut self, relaxed: bool) -> Self {
        self.relaxed = relaxed;
        self
    }

    /// Sets the same-route spacing window (minutes).
    pub fn with_spacing_min(mut self, minutes: i64) -> Self {
        self.spacing_min = minutes;
        self
    }

    /// Sets the wind delay threshold (km/h).
    pub fn with_wind_threshold(mut self, kmh: f64) -> Self {
        self.wind_delay_threshold_kmh = kmh;
        self
    }
}
