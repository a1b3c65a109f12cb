use crate::error::ApiError;
use crate::navigate::navigate_params::{NavigateBody, NavigateQuery};
use crate::state::AppState;
use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use resqme_core::exclusion::{build_exclusion_polygons, zones_containing};
use resqme_core::geopoint::GeoPoint;
use resqme_core::polygon::Polygon;
use resqme_ors::compose_request;
use serde::Serialize;
use std::sync::Arc;
use tracing::{error, info, warn};

#[derive(Serialize)]
pub struct NavigateResponse {
    path: Vec<GeoPoint>,
    danger_zone: Vec<Polygon>,
}

impl IntoResponse for NavigateResponse {
    fn into_response(self) -> Response {
        (StatusCode::OK, Json(self)).into_response()
    }
}

pub async fn get_navigate_handler(
    State(state): State<Arc<AppState>>,
    Query(query): Query<NavigateQuery>,
) -> Result<NavigateResponse, ApiError> {
    let (start, target) = query.into_endpoints()?;

    navigate(&state, start, target).await
}

pub async fn post_navigate_handler(
    State(state): State<Arc<AppState>>,
    body: Result<Json<NavigateBody>, JsonRejection>,
) -> Result<NavigateResponse, ApiError> {
    let Json(body) = body.map_err(|rejection| ApiError::BadRequest(rejection.body_text()))?;
    let (start, target) = body.into_endpoints()?;

    navigate(&state, start, target).await
}

async fn navigate(
    state: &AppState,
    start: GeoPoint,
    target: GeoPoint,
) -> Result<NavigateResponse, ApiError> {
    let hazards = state.hazards.fetch_hazards()?;
    let danger_zone = build_exclusion_polygons(&hazards);

    for (name, point) in [("start", start), ("target", target)] {
        let zones = zones_containing(&point, &danger_zone);
        if !zones.is_empty() {
            warn!("Navigation {} {:?} lies inside danger zones {:?}", name, point, zones);
        }
    }

    let request = compose_request(start, target, danger_zone);

    match state.ors_client.fetch_route(&request).await {
        Ok(route) => {
            match route.summary {
                Some(summary) => info!(
                    "Found route with {} points, {:.0} m, {}",
                    route.path.len(),
                    summary.distance_meters,
                    summary.duration
                ),
                None => info!("Found route with {} points", route.path.len()),
            }

            Ok(NavigateResponse {
                path: route.path,
                danger_zone: request.into_exclusions(),
            })
        }
        Err(err) => match state.fallback.fallback_path(&err, start, target) {
            Some(path) => Ok(NavigateResponse {
                path,
                danger_zone: request.into_exclusions(),
            }),
            None => {
                error!("Routing from {:?} to {:?} failed: {}", start, target, err);
                Err(err.into())
            }
        },
    }
}
