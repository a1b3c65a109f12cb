use resqme_core::{geopoint::GeoPoint, polygon::Polygon};
use serde::Serialize;

/// A walking route query: two endpoints and the zones to route around.
#[derive(Debug, Clone, PartialEq)]
pub struct RouteRequest {
    origin: GeoPoint,
    destination: GeoPoint,
    exclusions: Vec<Polygon>,
}

pub fn compose_request(
    origin: GeoPoint,
    destination: GeoPoint,
    exclusions: Vec<Polygon>,
) -> RouteRequest {
    RouteRequest {
        origin,
        destination,
        exclusions,
    }
}

impl RouteRequest {
    pub fn origin(&self) -> GeoPoint {
        self.origin
    }

    pub fn destination(&self) -> GeoPoint {
        self.destination
    }

    pub fn exclusions(&self) -> &[Polygon] {
        &self.exclusions
    }

    pub fn into_exclusions(self) -> Vec<Polygon> {
        self.exclusions
    }

    /// The JSON body expected by the openrouteservice directions endpoint.
    pub fn body(&self) -> DirectionsRequestBody<'_> {
        DirectionsRequestBody {
            coordinates: [self.origin, self.destination],
            options: DirectionsOptions {
                avoid_polygons: AvoidPolygons {
                    kind: "MultiPolygon",
                    coordinates: self.exclusions.iter().map(|ring| [ring]).collect(),
                },
            },
        }
    }
}

#[derive(Debug, Serialize)]
pub struct DirectionsRequestBody<'a> {
    pub coordinates: [GeoPoint; 2],
    pub options: DirectionsOptions<'a>,
}

#[derive(Debug, Serialize)]
pub struct DirectionsOptions<'a> {
    pub avoid_polygons: AvoidPolygons<'a>,
}

/// GeoJSON MultiPolygon: each exclusion ring is the single (outer) ring of
/// its own polygon.
#[derive(Debug, Serialize)]
pub struct AvoidPolygons<'a> {
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub coordinates: Vec<[&'a Polygon; 1]>,
}
