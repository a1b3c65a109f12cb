use serde::{Deserialize, Serialize};

use crate::geopoint::GeoPoint;

/// Two opposite corners of an axis-aligned hazard rectangle.
///
/// The corners are kept in the order they were given; nothing here assumes
/// `lon1 < lon2` or `lat1 < lat2`.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "[f64; 4]", into = "[f64; 4]")]
pub struct BoundingBox {
    pub lon1: f64,
    pub lat1: f64,
    pub lon2: f64,
    pub lat2: f64,
}

impl BoundingBox {
    pub fn new(lon1: f64, lat1: f64, lon2: f64, lat2: f64) -> Self {
        Self {
            lon1,
            lat1,
            lon2,
            lat2,
        }
    }

    pub fn first_corner(&self) -> GeoPoint {
        GeoPoint::new(self.lon1, self.lat1)
    }

    pub fn opposite_corner(&self) -> GeoPoint {
        GeoPoint::new(self.lon2, self.lat2)
    }

    pub fn is_degenerate(&self) -> bool {
        self.lon1 == self.lon2 || self.lat1 == self.lat2
    }
}

impl From<[f64; 4]> for BoundingBox {
    fn from([lon1, lat1, lon2, lat2]: [f64; 4]) -> Self {
        Self::new(lon1, lat1, lon2, lat2)
    }
}

impl From<BoundingBox> for [f64; 4] {
    fn from(bbox: BoundingBox) -> Self {
        [bbox.lon1, bbox.lat1, bbox.lon2, bbox.lat2]
    }
}
