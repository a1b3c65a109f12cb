use std::sync::Arc;

use resqme_core::hazards::HazardSource;
use resqme_ors::OrsDirectionsClient;

use crate::fallback::FallbackPolicy;

pub struct AppState {
    pub ors_client: OrsDirectionsClient,
    pub hazards: Arc<dyn HazardSource>,
    pub fallback: FallbackPolicy,
}
