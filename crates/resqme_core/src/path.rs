use crate::geopoint::GeoPoint;

/// Evenly spaced points on the straight segment from `start` to `target`,
/// both ends included. Returns `steps + 1` points.
///
/// This ignores hazards entirely and is only meant as a stand-in path when no
/// real route can be computed.
pub fn straight_line_path(start: GeoPoint, target: GeoPoint, steps: usize) -> Vec<GeoPoint> {
    let steps = steps.max(1);
    let mut points = Vec::with_capacity(steps + 1);

    for i in 0..steps {
        let fraction = i as f64 / steps as f64;

        points.push(GeoPoint::new(
            start.lon() + fraction * (target.lon() - start.lon()),
            start.lat() + fraction * (target.lat() - start.lat()),
        ));
    }

    points.push(target);
    points
}
