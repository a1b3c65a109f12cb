use serde::{Deserialize, Serialize};

use crate::geopoint::GeoPoint;

/// A closed ring: the first and the last point are the same.
///
/// Serialized as a plain array of `[lon, lat]` pairs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Polygon {
    points: Vec<GeoPoint>,
}

impl Polygon {
    /// Builds a ring from `points`, appending the first point when the input
    /// is not already closed.
    pub fn new(mut points: Vec<GeoPoint>) -> Self {
        if let (Some(&first), Some(&last)) = (points.first(), points.last()) {
            if first != last {
                points.push(first);
            }
        }

        Self { points }
    }

    pub fn points(&self) -> &[GeoPoint] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn is_closed(&self) -> bool {
        match (self.points.first(), self.points.last()) {
            (Some(first), Some(last)) => first == last,
            _ => false,
        }
    }
}

impl From<&Polygon> for geo_types::Polygon {
    fn from(polygon: &Polygon) -> Self {
        let exterior: geo_types::LineString = polygon
            .points
            .iter()
            .map(|&point| geo_types::Coord::from(point))
            .collect();

        geo_types::Polygon::new(exterior, vec![])
    }
}
