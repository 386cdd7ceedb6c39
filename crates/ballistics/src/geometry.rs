//! Ground-plane geometry between launch and target.

use mortar_core::Point3;

/// Compass bearing from `launch` to `target` in degrees, within `[0, 360)`.
///
/// Zero points along +z and the angle grows towards -x, i.e. the mathematical angle from +x
/// rotated back by 90°. A target directly above or below the launch point yields 270°.
/// Non-finite coordinates propagate as NaN.
pub fn bearing_deg(launch: &Point3, target: &Point3) -> f64 {
    let (dx, dz) = launch.horizontal_delta(target);
    let mut bearing = dz.atan2(dx).to_degrees() - 90.0;
    if bearing < 0.0 {
        bearing += 360.0;
    }
    // -ε + 360 can round to 360 exactly
    if bearing >= 360.0 {
        bearing -= 360.0;
    }
    bearing
}

/// Distance between `launch` and `target` projected onto the ground plane.
#[inline]
pub fn horizontal_range(launch: &Point3, target: &Point3) -> f64 {
    let (dx, dz) = launch.horizontal_delta(target);
    dx.hypot(dz)
}

#[cfg(test)]
mod tests {
    use super::*;

    const ORIGIN: Point3 = Point3::new(0.0, 0.0, 0.0);

    #[test]
    fn bearing_along_positive_x_is_270() {
        let b = bearing_deg(&ORIGIN, &Point3::new(10.0, 0.0, 0.0));
        assert!((b - 270.0).abs() < 1e-12, "bearing = {b}");
    }

    #[test]
    fn bearing_along_positive_z_is_zero() {
        let b = bearing_deg(&ORIGIN, &Point3::new(0.0, 0.0, 10.0));
        assert!(b.abs() < 1e-12, "bearing = {b}");
    }

    #[test]
    fn bearing_quadrants() {
        let cases = [
            (Point3::new(-10.0, 0.0, 0.0), 90.0),
            (Point3::new(0.0, 0.0, -10.0), 180.0),
            (Point3::new(10.0, 0.0, 10.0), 315.0),
            (Point3::new(-10.0, 0.0, -10.0), 135.0),
        ];
        for (target, expected) in cases {
            let b = bearing_deg(&ORIGIN, &target);
            assert!((b - expected).abs() < 1e-9, "{target:?}: {b} != {expected}");
        }
    }

    #[test]
    fn coincident_points_give_defined_bearing() {
        let b = bearing_deg(&ORIGIN, &Point3::new(0.0, 25.0, 0.0));
        assert_eq!(b, 270.0);
    }

    #[test]
    fn bearing_propagates_nan() {
        assert!(bearing_deg(&ORIGIN, &Point3::new(f64::NAN, 0.0, 1.0)).is_nan());
    }

    #[test]
    fn range_propagates_nan() {
        assert!(horizontal_range(&ORIGIN, &Point3::new(f64::NAN, 0.0, 1.0)).is_nan());
        assert!(horizontal_range(&ORIGIN, &Point3::new(1.0, 0.0, f64::NAN)).is_nan());
    }

    #[test]
    fn range_ignores_height() {
        let r = horizontal_range(&ORIGIN, &Point3::new(3.0, 5.0, 4.0));
        assert!((r - 5.0).abs() < 1e-12);
        let r = horizontal_range(&ORIGIN, &Point3::new(3.0, -500.0, 4.0));
        assert!((r - 5.0).abs() < 1e-12);
    }

    #[test]
    fn range_is_zero_only_for_shared_ground_position() {
        assert_eq!(horizontal_range(&ORIGIN, &Point3::new(0.0, 80.0, 0.0)), 0.0);
        assert!(horizontal_range(&ORIGIN, &Point3::new(0.0, 80.0, 1e-6)) > 0.0);
    }
}
