use std::path::PathBuf;

use clap::Args;
use resqme_core::{
    exclusion::build_exclusion_polygons,
    geopoint::GeoPoint,
    hazards::{FileHazardSource, HazardSource},
    polygon::Polygon,
};
use resqme_ors::{
    ApiKey, OrsClientParams, OrsDirectionsClient, compose_request,
    directions_client::ORS_API_URL,
};
use serde::Serialize;
use tracing::info;

use crate::parsers;

#[derive(Args)]
pub struct NavigateArgs {
    /// Start position as "longitude,latitude"
    #[arg(short, long, value_parser = parsers::parse_geopoint, allow_hyphen_values = true)]
    start: GeoPoint,

    /// Target position as "longitude,latitude"
    #[arg(short, long, value_parser = parsers::parse_geopoint, allow_hyphen_values = true)]
    target: GeoPoint,

    /// JSON file of [lon1, lat1, lon2, lat2] hazard boxes to avoid
    #[arg(long)]
    hazards: Option<PathBuf>,

    /// Timeout for the routing provider (e.g., "15s", "PT1M")
    #[arg(long, value_parser = parsers::parse_duration, default_value = "15s")]
    timeout: jiff::SignedDuration,

    #[arg(long, default_value = ORS_API_URL)]
    base_url: String,
}

#[derive(Serialize)]
struct NavigateOutput {
    path: Vec<GeoPoint>,
    danger_zone: Vec<Polygon>,
}

pub async fn run(args: NavigateArgs) -> Result<(), anyhow::Error> {
    let api_key = std::env::var("API_KEY")
        .map_err(|_| anyhow::anyhow!("API_KEY is not set (environment or .env.local)"))?;

    let hazards = match &args.hazards {
        Some(path) => FileHazardSource::new(path).fetch_hazards()?,
        None => Vec::new(),
    };
    let danger_zone = build_exclusion_polygons(&hazards);
    info!("Avoiding {} danger zones", danger_zone.len());

    let client = OrsDirectionsClient::new(OrsClientParams {
        api_key: ApiKey::new(api_key),
        base_url: args.base_url,
        timeout: args.timeout.try_into()?,
    })?;

    let request = compose_request(args.start, args.target, danger_zone);
    let route = client.fetch_route(&request).await?;

    if let Some(summary) = route.summary {
        info!(
            "Route is {:.0} m long and takes {}",
            summary.distance_meters, summary.duration
        );
    }

    let output = NavigateOutput {
        path: route.path,
        danger_zone: request.into_exclusions(),
    };
    println!("{}", serde_json::to_string_pretty(&output)?);

    Ok(())
}
