//! Geographic points and great-circle distance.

/// Mean Earth radius in kilometres (IUGG).
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// A point on the globe, in decimal degrees.
///
/// Equality is plain field equality; two points with identical
/// coordinates are still distinct cities when passed to the solver.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GeoPoint {
    /// Latitude in degrees, positive north.
    pub latitude: f64,
    /// Longitude in degrees, positive east.
    pub longitude: f64,
}

impl GeoPoint {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }
}

impl From<(f64, f64)> for GeoPoint {
    fn from((latitude, longitude): (f64, f64)) -> Self {
        Self::new(latitude, longitude)
    }
}

/// Great-circle distance between two points, in kilometres.
///
/// Haversine formula on a sphere of radius [`EARTH_RADIUS_KM`]. Coordinates
/// are not range-checked; NaN input yields NaN.
///
/// # Examples
///
/// ```
/// use u_tour::geo::{haversine_km, GeoPoint};
///
/// let p = GeoPoint::new(51.5074, -0.1278);
/// assert_eq!(haversine_km(&p, &p), 0.0);
/// ```
pub fn haversine_km(a: &GeoPoint, b: &GeoPoint) -> f64 {
    let lat1 = a.latitude.to_radians();
    let lat2 = b.latitude.to_radians();
    let dlat = lat2 - lat1;
    let dlon = (b.longitude - a.longitude).to_radians();

    let h = (dlat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (dlon / 2.0).sin().powi(2);
    // Rounding can push h a hair above 1 for antipodal points. `f64::min`
    // would turn NaN into 1, so NaN is passed through explicitly.
    let s = h.sqrt();
    let s = if s.is_nan() { s } else { s.min(1.0) };
    2.0 * EARTH_RADIUS_KM * s.asin()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_haversine_zero_for_same_point() {
        let p = GeoPoint::new(40.7128, -74.006);
        assert_eq!(haversine_km(&p, &p), 0.0);
    }

    #[test]
    fn test_haversine_new_york_to_los_angeles() {
        let ny = GeoPoint::new(40.7128, -74.006);
        let la = GeoPoint::new(34.0522, -118.2437);
        let d = haversine_km(&ny, &la);
        // Published great-circle distance is about 3936 km.
        assert!((d - 3936.0).abs() < 10.0, "got {d}");
    }

    #[test]
    fn test_haversine_one_degree_on_equator() {
        let a = GeoPoint::new(0.0, 0.0);
        let b = GeoPoint::new(0.0, 1.0);
        let expected = EARTH_RADIUS_KM * 1f64.to_radians();
        assert!((haversine_km(&a, &b) - expected).abs() < 1e-9);
    }

    #[test]
    fn test_haversine_antipodal_is_half_circumference() {
        let a = GeoPoint::new(0.0, 0.0);
        let b = GeoPoint::new(0.0, 180.0);
        let expected = std::f64::consts::PI * EARTH_RADIUS_KM;
        assert!((haversine_km(&a, &b) - expected).abs() < 1e-6);
    }

    #[test]
    fn test_haversine_nan_propagates() {
        let a = GeoPoint::new(f64::NAN, 0.0);
        let b = GeoPoint::new(0.0, 0.0);
        assert!(haversine_km(&a, &b).is_nan());
    }

    #[test]
    fn test_from_tuple() {
        let p: GeoPoint = (1.5, -2.5).into();
        assert_eq!(p, GeoPoint::new(1.5, -2.5));
    }
}
