/// Earth's radius in kilometers
const EARTH_RADIUS_KM: f64 = 6371.0;

/// Calculate the Haversine distance between two points in kilometers
///
/// # Arguments
/// * `lat1` - Latitude of first point in degrees
/// * `lon1` - Longitude of first point in degrees
/// * `lat2` - Latitude of second point in degrees
/// * `lon2` - Longitude of second point in degrees
///
/// # Returns
/// Distance in kilometers
#[inline]
pub fn haversine_distance(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    let lat1_rad = lat1.to_radians();
    let lat2_rad = lat2.to_radians();
    let delta_lat = (lat2 - lat1).to_radians();
    let delta_lon = (lon2 - lon1).to_radians();

    let a = (delta_lat / 2.0).sin().powi(2)
        + lat1_rad.cos() * lat2_rad.cos() * (delta_lon / 2.0).sin().powi(2);
    // Rounding can push `a` a hair past 1.0 for antipodal points
    let a = a.clamp(0.0, 1.0);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

    EARTH_RADIUS_KM * c
}

/// Linear falloff from 1.0 at zero distance to 0.0 at `max_km` and beyond
#[inline]
pub fn linear_falloff(distance_km: f64, max_km: f64) -> f64 {
    (1.0 - distance_km / max_km).max(0.0)
}

/// Round to two decimal places, the precision every score is reported at
#[inline]
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_haversine_distance() {
        // Distance from London to Paris (approximately 344 km)
        let london_lat = 51.5074;
        let london_lon = -0.1278;
        let paris_lat = 48.8566;
        let paris_lon = 2.3522;

        let distance = haversine_distance(london_lat, london_lon, paris_lat, paris_lon);
        assert!((distance - 344.0).abs() < 10.0, "Distance should be ~344km, got {}", distance);
    }

    #[test]
    fn test_identical_points() {
        assert_eq!(haversine_distance(40.7580, -73.9855, 40.7580, -73.9855), 0.0);
    }

    #[test]
    fn test_symmetry() {
        let there = haversine_distance(40.7580, -73.9855, 40.7520, -73.9900);
        let back = haversine_distance(40.7520, -73.9900, 40.7580, -73.9855);
        assert!((there - back).abs() < 1e-12);
    }

    #[test]
    fn test_antipodal_points_stay_finite() {
        let distance = haversine_distance(0.0, 0.0, 0.0, 180.0);
        assert!(distance.is_finite());
        assert!((distance - std::f64::consts::PI * EARTH_RADIUS_KM).abs() < 1e-6);
    }

    #[test]
    fn test_linear_falloff() {
        assert_eq!(linear_falloff(0.0, 5.0), 1.0);
        assert_eq!(linear_falloff(2.5, 5.0), 0.5);
        assert_eq!(linear_falloff(5.0, 5.0), 0.0);
        assert_eq!(linear_falloff(12.0, 5.0), 0.0);
    }

    #[test]
    fn test_round2() {
        assert_eq!(round2(76.254_9), 76.25);
        assert_eq!(round2(59.999_9), 60.0);
        assert_eq!(round2(0.0), 0.0);
    }
}
