use jiff::SignedDuration;
use resqme_core::{geopoint::GeoPoint, polyline::decode_geometry};
use serde::Deserialize;

use crate::error::OrsError;

#[derive(Deserialize)]
struct DirectionsResponse {
    #[serde(default)]
    routes: Vec<DirectionsRoute>,
}

#[derive(Deserialize)]
struct DirectionsRoute {
    geometry: Option<String>,
    summary: Option<DirectionsSummary>,
}

#[derive(Deserialize)]
struct DirectionsSummary {
    /// Meters
    #[serde(default)]
    distance: f64,

    /// Seconds
    #[serde(default)]
    duration: f64,
}

/// The decoded walking route.
#[derive(Debug, Clone, PartialEq)]
pub struct RouteResponse {
    pub path: Vec<GeoPoint>,
    pub summary: Option<RouteSummary>,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RouteSummary {
    pub distance_meters: f64,
    pub duration: SignedDuration,
}

/// Extracts and decodes `routes[0].geometry` from a directions response body.
pub fn parse_directions_response(text: &str) -> Result<RouteResponse, OrsError> {
    let response: DirectionsResponse = serde_json::from_str(text)
        .map_err(|error| OrsError::MalformedResponse(error.to_string()))?;

    let route = response
        .routes
        .into_iter()
        .next()
        .ok_or_else(|| OrsError::MalformedResponse("response has no routes".to_string()))?;

    let geometry = route.geometry.ok_or_else(|| {
        OrsError::MalformedResponse("routes[0] has no geometry".to_string())
    })?;

    let path = decode_geometry(&geometry)?;

    let summary = route.summary.and_then(|summary| {
        SignedDuration::try_from_secs_f64(summary.duration)
            .ok()
            .map(|duration| RouteSummary {
                distance_meters: summary.distance,
                duration,
            })
    });

    Ok(RouteResponse { path, summary })
}
