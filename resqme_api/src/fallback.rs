use std::str::FromStr;

use resqme_core::{geopoint::GeoPoint, path::straight_line_path};
use resqme_ors::OrsError;
use tracing::warn;

const STRAIGHT_LINE_STEPS: usize = 100;

/// What to answer when the routing provider cannot produce a route.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FallbackPolicy {
    /// Surface the failure.
    #[default]
    None,
    /// Answer with a straight line between start and target. Only transport
    /// and provider-side route failures are masked; rejected credentials and
    /// unreadable responses are always surfaced.
    StraightLine,
}

impl FallbackPolicy {
    pub fn fallback_path(
        &self,
        error: &OrsError,
        start: GeoPoint,
        target: GeoPoint,
    ) -> Option<Vec<GeoPoint>> {
        match self {
            FallbackPolicy::StraightLine
                if matches!(error, OrsError::Network(_) | OrsError::Provider { .. }) =>
            {
                warn!(
                    "Routing failed ({}), answering with a {:.0} m straight line instead",
                    error,
                    start.haversine_distance(&target)
                );
                Some(straight_line_path(start, target, STRAIGHT_LINE_STEPS))
            }
            _ => None,
        }
    }
}

impl FromStr for FallbackPolicy {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "" | "none" => Ok(FallbackPolicy::None),
            "straight-line" | "straight_line" => Ok(FallbackPolicy::StraightLine),
            other => Err(format!(
                "unknown fallback policy '{other}', expected 'none' or 'straight-line'"
            )),
        }
    }
}
