//! Weather-driven status adjustment for fresh sailings.
//!
//! Weather never blocks creation; a strong-wind reading only downgrades a
//! new sailing's initial status to delayed. Missing or expired readings
//! mean "no weather data" and the default scheduled status.

use chrono::NaiveDateTime;

use super::EngineConfig;
use crate::models::{ScheduleStatus, WeatherCondition};

/// Most recently updated, unexpired reading for a route.
pub fn latest_for_route<'a>(
    route_id: &str,
    readings: &'a [WeatherCondition],
    now: NaiveDateTime,
) -> Option<&'a WeatherCondition> {
    readings
        .iter()
        .filter(|w| w.route_id == route_id && !w.is_expired(now))
        .max_by_key(|w| w.updated_at)
}

/// Initial status for a sailing being created on a route.
pub fn initial_status(
    route_id: &str,
    readings: &[WeatherCondition],
    config: &EngineConfig,
) -> ScheduleStatus {
    match latest_for_route(route_id, readings, config.now) {
        Some(w) if w.wind_speed_kmh > config.wind_delay_threshold_kmh => ScheduleStatus::Delayed,
        _ => ScheduleStatus::Scheduled,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, NaiveDate};

    fn t0() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2026, 3, 1)
            .unwrap()
            .and_hms_opt(6, 0, 0)
            .unwrap()
    }

    fn reading(wind: f64, updated: NaiveDateTime, expires: NaiveDateTime) -> WeatherCondition {
        WeatherCondition::new("r1", "suva", wind, updated, expires)
    }

    #[test]
    fn test_calm_weather_keeps_scheduled() {
        let readings = vec![reading(20.0, t0(), t0() + Duration::hours(6))];
        let config = EngineConfig::at(t0());
        assert_eq!(initial_status("r1", &readings, &config), ScheduleStatus::Scheduled);
    }

    #[test]
    fn test_high_wind_delays() {
        let readings = vec![reading(35.0, t0(), t0() + Duration::hours(6))];
        let config = EngineConfig::at(t0());
        assert_eq!(initial_status("r1", &readings, &config), ScheduleStatus::Delayed);
    }

    #[test]
    fn test_expired_reading_ignored() {
        let readings = vec![reading(50.0, t0() - Duration::hours(12), t0() - Duration::hours(6))];
        let config = EngineConfig::at(t0());
        assert_eq!(initial_status("r1", &readings, &config), ScheduleStatus::Scheduled);
    }

    #[test]
    fn test_latest_by_update_wins() {
        let readings = vec![
            reading(50.0, t0() - Duration::hours(3), t0() + Duration::hours(6)),
            reading(10.0, t0() - Duration::hours(1), t0() + Duration::hours(6)),
        ];
        let config = EngineConfig::at(t0());
        // The fresher, calmer reading wins over the older gale.
        assert_eq!(initial_status("r1", &readings, &config), ScheduleStatus::Scheduled);
    }

    #[test]
    fn test_other_route_reading_ignored() {
        let mut other = reading(50.0, t0(), t0() + Duration::hours(6));
        other.route_id = "r2".into();
        let config = EngineConfig::at(t0());
        assert_eq!(initial_status("r1", &[other], &config), ScheduleStatus::Scheduled);
    }

    #[test]
    fn test_threshold_is_exclusive() {
        let readings = vec![reading(30.0, t0(), t0() + Duration::hours(6))];
        let config = EngineConfig::at(t0());
        // Exactly 30 km/h does not trigger the downgrade.
        assert_eq!(initial_status("r1", &readings, &config), ScheduleStatus::Scheduled);
    }
}
