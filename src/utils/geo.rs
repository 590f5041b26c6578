/// Calculate great-circle distance between two coordinates using the
/// Haversine formula. Returns distance in kilometers.
pub fn haversine_distance(lat1: f64, lng1: f64, lat2: f64, lng2: f64) -> f64 {
    const EARTH_RADIUS_M: f64 = 6_371_000.0;
    const KM: f64 = 1_000.0;

    let delta_lat = (lat2 - lat1).abs().to_radians();
    let delta_lng = (lng2 - lng1).abs().to_radians();

    let a = (delta_lat / 2.0).sin().powi(2)
        + lat1.to_radians().cos() * lat2.to_radians().cos() * (delta_lng / 2.0).sin().powi(2);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

    (EARTH_RADIUS_M * c) / KM
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_haversine_skopje_paris() {
        // Skopje
        let skopje = (42.00, 21.43);
        // Paris
        let paris = (48.86, 2.35);

        let distance = haversine_distance(skopje.0, skopje.1, paris.0, paris.1);
        // Should be approximately 1,500-1,600 km
        assert!(distance > 1_400.0 && distance < 1_700.0);
    }

    #[test]
    fn test_identical_points_have_zero_distance() {
        let distance = haversine_distance(42.00, 21.43, 42.00, 21.43);
        assert_eq!(distance, 0.0);
    }

    #[test]
    fn test_distance_is_symmetric() {
        let there = haversine_distance(42.00, 21.43, 48.86, 2.35);
        let back = haversine_distance(48.86, 2.35, 42.00, 21.43);
        assert_eq!(there, back);
    }
}
