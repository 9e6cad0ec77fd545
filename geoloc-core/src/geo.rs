//! Spherical geometry on top of [`Coordinate`]s.
//!
//! The earth is approximated by a sphere whose radius depends on
//! the selected [`Units`].

use crate::entities::{BoundingBox, Coordinate, Units};

/// Calculate the destination reached from a starting point
/// when travelling `distance` along the given `bearing` (degrees).
pub fn destination(lat: f64, lng: f64, bearing: f64, distance: f64, units: Units) -> Coordinate {
    let radius = units.earth_radius();
    let (lat_rad, lng_rad) = Coordinate::new(lat, lng).to_lat_lng_rad();
    let bearing_rad = bearing.to_radians();
    let ang_dist = distance / radius;

    let (lat_sin, lat_cos) = (lat_rad.sin(), lat_rad.cos());
    let (ang_dist_sin, ang_dist_cos) = (ang_dist.sin(), ang_dist.cos());

    let dest_lat_rad = (lat_sin * ang_dist_cos + lat_cos * ang_dist_sin * bearing_rad.cos()).asin();
    let dest_lng_rad = lng_rad
        + (bearing_rad.sin() * ang_dist_sin * lat_cos)
            .atan2(ang_dist_cos - lat_sin * dest_lat_rad.sin());

    Coordinate::from_lat_lng_rad(dest_lat_rad, dest_lng_rad)
}

/// Calculate the points at `distance` around a center
/// in all four cardinal directions.
pub fn bounding_box(lat: f64, lng: f64, distance: f64, units: Units) -> BoundingBox {
    BoundingBox {
        north: destination(lat, lng, 0.0, distance, units),
        east: destination(lat, lng, 90.0, distance, units),
        south: destination(lat, lng, 180.0, distance, units),
        west: destination(lat, lng, 270.0, distance, units),
    }
}

/// Calculate the great-circle distance between two
/// points with the haversine formula.
/// Reference: https://en.wikipedia.org/wiki/Haversine_formula
pub fn distance(lat_a: f64, lng_a: f64, lat_b: f64, lng_b: f64, units: Units) -> f64 {
    let radius = units.earth_radius();
    let lat_a_rad = lat_a.to_radians();
    let lat_b_rad = lat_b.to_radians();
    let half_dlat_rad = ((lat_b - lat_a) / 2.0).to_radians();
    let half_dlng_rad = ((lng_b - lng_a) / 2.0).to_radians();

    let h = half_dlat_rad.sin().powi(2)
        + lat_a_rad.cos() * lat_b_rad.cos() * half_dlng_rad.sin().powi(2);

    2.0 * radius * h.sqrt().asin()
}

#[cfg(test)]
mod tests {

    use super::*;

    const EPSILON: f64 = 1e-9;

    fn assert_close(expected: Coordinate, actual: Coordinate) {
        assert!(
            (expected.lat - actual.lat).abs() < EPSILON
                && (expected.lng - actual.lng).abs() < EPSILON,
            "expected {expected} but got {actual}"
        );
    }

    #[test]
    fn zero_distance_is_a_fixed_point() {
        for (lat, lng) in [(0.0, 0.0), (48.7755, 9.1827), (-33.867138, 151.207108)] {
            for bearing in [0.0, 45.0, 90.0, 180.0, 270.0] {
                for units in [Units::Kilometers, Units::Miles] {
                    let dest = destination(lat, lng, bearing, 0.0, units);
                    assert_close(Coordinate::new(lat, lng), dest);
                }
            }
        }
    }

    #[test]
    fn destination_along_the_equator() {
        let quarter = std::f64::consts::PI * Units::Kilometers.earth_radius() / 2.0;
        let dest = destination(0.0, 0.0, 90.0, quarter, Units::Kilometers);
        assert_close(Coordinate::new(0.0, 90.0), dest);
    }

    #[test]
    fn destination_to_the_north() {
        let one_degree = std::f64::consts::PI * Units::Kilometers.earth_radius() / 180.0;
        let dest = destination(0.0, 0.0, 0.0, one_degree, Units::Kilometers);
        assert_close(Coordinate::new(1.0, 0.0), dest);
    }

    #[test]
    fn bounding_box_around_stuttgart() {
        let (lat, lng) = (48.7755, 9.1827);
        let bbox = bounding_box(lat, lng, 10.0, Units::Kilometers);
        assert!(bbox.north.lat > lat);
        assert!(bbox.south.lat < lat);
        assert!(bbox.east.lng > lng);
        assert!(bbox.west.lng < lng);
        assert!((bbox.north.lng - lng).abs() < EPSILON);
        assert!((bbox.south.lng - lng).abs() < EPSILON);
        assert!((bbox.north.lat - 48.865_331_5).abs() < 1e-6);
        assert!((bbox.south.lat - 48.685_668_5).abs() < 1e-6);
        assert!((bbox.east.lng - 9.319_012_5).abs() < 1e-6);
        assert!((bbox.west.lng - 9.046_387_5).abs() < 1e-6);
    }

    #[test]
    fn bounding_box_in_miles_is_larger() {
        let km = bounding_box(10.0, 10.0, 5.0, Units::Kilometers);
        let mi = bounding_box(10.0, 10.0, 5.0, Units::Miles);
        assert!(mi.north.lat > km.north.lat);
        assert!(mi.south.lat < km.south.lat);
    }

    #[test]
    fn no_distance() {
        assert_eq!(0.0, distance(0.0, 0.0, 0.0, 0.0, Units::Kilometers));
        assert_eq!(0.0, distance(-25.0, 55.0, -25.0, 55.0, Units::Kilometers));
        assert_eq!(0.0, distance(48.7755, 9.1827, 48.7755, 9.1827, Units::Miles));
        assert!(distance(-15.0, -180.0, -15.0, 180.0, Units::Kilometers) < 0.000_001);
    }

    #[test]
    fn real_distance() {
        let stuttgart_mannheim = distance(48.7755, 9.1827, 49.4836, 8.4630, Units::Kilometers);
        assert!(stuttgart_mannheim > 94.6);
        assert!(stuttgart_mannheim < 94.7);

        let stuttgart_mannheim = distance(48.7755, 9.1827, 49.4836, 8.4630, Units::Miles);
        assert!(stuttgart_mannheim > 58.8);
        assert!(stuttgart_mannheim < 58.9);

        let new_york_sidney = distance(
            40.714268,
            -74.005974,
            -33.867138,
            151.207108,
            Units::Kilometers,
        );
        assert!(new_york_sidney > 16_000.0);
        assert!(new_york_sidney < 16_010.0);
    }

    #[test]
    fn symmetric_distance() {
        let pairs = [
            ((80.0, 0.0), (90.0, 20.0)),
            ((-81.2281041784343, 77.75747775927069), (40.92116510538438, -93.33303223984923)),
            ((67.01568147028595, 122.10276824520099), (-87.84709362678561, 132.71691422570353)),
        ];
        for ((lat_a, lng_a), (lat_b, lng_b)) in pairs {
            assert_eq!(
                distance(lat_a, lng_a, lat_b, lng_b, Units::Kilometers),
                distance(lat_b, lng_b, lat_a, lng_a, Units::Kilometers)
            );
        }
    }
}
