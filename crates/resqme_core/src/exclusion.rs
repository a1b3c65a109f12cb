use geo::Contains;

use crate::{bounding_box::BoundingBox, geopoint::GeoPoint, polygon::Polygon};

/// Turns hazard rectangles into closed rings the routing provider can avoid.
///
/// Every box yields five points in a fixed rotation:
/// `(lon1, lat1) -> (lon2, lat1) -> (lon2, lat2) -> (lon1, lat2) -> (lon1, lat1)`.
/// Corners are used as given, so a box with swapped corners produces the same
/// rectangle walked in the other direction. Degenerate boxes are passed through.
pub fn build_exclusion_polygons(boxes: &[BoundingBox]) -> Vec<Polygon> {
    boxes.iter().map(exclusion_polygon).collect()
}

pub fn exclusion_polygon(bbox: &BoundingBox) -> Polygon {
    Polygon::new(vec![
        GeoPoint::new(bbox.lon1, bbox.lat1),
        GeoPoint::new(bbox.lon2, bbox.lat1),
        GeoPoint::new(bbox.lon2, bbox.lat2),
        GeoPoint::new(bbox.lon1, bbox.lat2),
        GeoPoint::new(bbox.lon1, bbox.lat1),
    ])
}

/// Indices of the zones whose interior contains `point`.
pub fn zones_containing(point: &GeoPoint, zones: &[Polygon]) -> Vec<usize> {
    let point: geo_types::Point = point.into();

    zones
        .iter()
        .enumerate()
        .filter(|(_, zone)| geo_types::Polygon::from(*zone).contains(&point))
        .map(|(index, _)| index)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ring(points: &[[f64; 2]]) -> Vec<GeoPoint> {
        points.iter().map(|&p| GeoPoint::from(p)).collect()
    }

    #[test]
    fn test_single_box() {
        let polygons = build_exclusion_polygons(&[BoundingBox::new(17.0, 50.0, 17.1, 50.1)]);

        assert_eq!(polygons.len(), 1);
        assert_eq!(
            polygons[0].points(),
            ring(&[
                [17.0, 50.0],
                [17.1, 50.0],
                [17.1, 50.1],
                [17.0, 50.1],
                [17.0, 50.0]
            ])
        );
    }

    #[test]
    fn test_ring_is_closed_on_first_corner() {
        let boxes = [
            BoundingBox::new(1.0, 2.0, 3.0, 4.0),
            BoundingBox::new(3.0, 4.0, 1.0, 2.0),
            BoundingBox::new(-10.5, 45.25, 10.5, -45.25),
            BoundingBox::new(0.0, 0.0, 0.0, 0.0),
        ];

        for (bbox, polygon) in boxes.iter().zip(build_exclusion_polygons(&boxes)) {
            assert_eq!(polygon.len(), 5);
            assert!(polygon.is_closed());
            assert_eq!(polygon.points()[0], bbox.first_corner());
            assert_eq!(polygon.points()[2], bbox.opposite_corner());
        }
    }

    #[test]
    fn test_corners_are_not_normalized() {
        let polygon = exclusion_polygon(&BoundingBox::new(17.1, 50.1, 17.0, 50.0));

        assert_eq!(
            polygon.points(),
            ring(&[
                [17.1, 50.1],
                [17.0, 50.1],
                [17.0, 50.0],
                [17.1, 50.0],
                [17.1, 50.1]
            ])
        );
    }

    #[test]
    fn test_degenerate_box_is_kept() {
        let polygon = exclusion_polygon(&BoundingBox::new(5.0, 5.0, 5.0, 6.0));

        assert_eq!(polygon.len(), 5);
        assert_eq!(polygon.points()[0], polygon.points()[1]);
    }

    #[test]
    fn test_preserves_count_and_order() {
        let boxes: Vec<BoundingBox> = (0..7)
            .map(|i| {
                let offset = i as f64;
                BoundingBox::new(offset, offset, offset + 0.5, offset + 0.5)
            })
            .collect();

        let polygons = build_exclusion_polygons(&boxes);

        assert_eq!(polygons.len(), boxes.len());
        for (bbox, polygon) in boxes.iter().zip(&polygons) {
            assert_eq!(polygon.points()[0], bbox.first_corner());
        }
    }

    #[test]
    fn test_empty_input() {
        assert!(build_exclusion_polygons(&[]).is_empty());
    }

    #[test]
    fn test_deterministic() {
        let boxes = [
            BoundingBox::new(17.0, 50.0, 17.1, 50.1),
            BoundingBox::new(18.0, 51.0, 18.2, 51.3),
        ];

        assert_eq!(
            build_exclusion_polygons(&boxes),
            build_exclusion_polygons(&boxes)
        );
    }

    #[test]
    fn test_zones_containing() {
        let zones = build_exclusion_polygons(&[
            BoundingBox::new(17.0, 50.0, 17.1, 50.1),
            BoundingBox::new(17.6, 50.7, 17.7, 50.8),
            BoundingBox::new(17.7, 50.8, 17.6, 50.7),
        ]);

        let start = GeoPoint::new(17.62018, 50.75666);
        assert_eq!(zones_containing(&start, &zones), vec![1, 2]);

        let outside = GeoPoint::new(0.0, 0.0);
        assert!(zones_containing(&outside, &zones).is_empty());
    }
}
