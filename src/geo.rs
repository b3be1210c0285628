//! Great-circle distance between geographic coordinates.
//!
//! Haversine formula over a spherical Earth of radius 6371 km. The ~0.5%
//! error against the true ellipsoid is negligible for voyage-duration
//! estimates and ferry ranking.

/// Mean Earth radius (km).
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Great-circle distance between two (latitude, longitude) points, in km.
///
/// Coordinates are in degrees. Pure function; symmetric in its arguments.
pub fn haversine_km(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    let d_lat = (lat2 - lat1).to_radians();
    let d_lon = (lon2 - lon1).to_radians();

    let a = (d_lat / 2.0).sin().powi(2)
        + lat1.to_radians().cos() * lat2.to_radians().cos() * (d_lon / 2.0).sin().powi(2);

    2.0 * EARTH_RADIUS_KM * a.sqrt().asin()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_distance() {
        assert_eq!(haversine_km(-18.14, 178.44, -18.14, 178.44), 0.0);
    }

    #[test]
    fn test_known_distance() {
        // Paris → London, ~343.5 km
        let d = haversine_km(48.8566, 2.3522, 51.5074, -0.1278);
        assert!((d - 343.5).abs() < 2.0, "got {d}");
    }

    #[test]
    fn test_symmetric() {
        let ab = haversine_km(-18.1416, 178.4419, -17.6836, 178.8333);
        let ba = haversine_km(-17.6836, 178.8333, -18.1416, 178.4419);
        assert!((ab - ba).abs() < 1e-9);
    }

    #[test]
    fn test_one_degree_longitude_at_equator() {
        // One degree of longitude at the equator ≈ 111.19 km
        let d = haversine_km(0.0, 0.0, 0.0, 1.0);
        assert!((d - 111.19).abs() < 0.1, "got {d}");
    }

    #[test]
    fn test_antimeridian_crossing() {
        // Taveuni-area points straddling 180°: short hop, not a
        // round-the-world trip.
        let d = haversine_km(-16.84, 179.95, -16.84, -179.95);
        assert!(d < 25.0, "got {d}");
    }
}
