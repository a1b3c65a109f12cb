use std::sync::Arc;
use std::time::Duration;

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use resqme_core::bounding_box::BoundingBox;
use resqme_core::hazards::{HazardSource, StaticHazardSource};
use resqme_ors::stub_provider::{StubProvider, StubReply};
use resqme_ors::{ApiKey, OrsClientParams, OrsDirectionsClient};
use serde_json::Value;
use tower::ServiceExt;

use crate::fallback::FallbackPolicy;
use crate::routes::router;
use crate::state::AppState;

/// The API wired to a stub routing provider.
pub struct TestApp {
    pub provider: StubProvider,
    state: Arc<AppState>,
}

impl TestApp {
    pub async fn start(reply: StubReply, hazards: Vec<BoundingBox>) -> Self {
        Self::start_with_timeout(reply, hazards, Duration::from_secs(5)).await
    }

    pub async fn start_with_timeout(
        reply: StubReply,
        hazards: Vec<BoundingBox>,
        timeout: Duration,
    ) -> Self {
        let provider = StubProvider::start(reply).await;

        let ors_client = OrsDirectionsClient::new(OrsClientParams {
            api_key: ApiKey::new("test-key"),
            base_url: provider.base_url().to_string(),
            timeout,
        })
        .unwrap();

        let state = Arc::new(AppState {
            ors_client,
            hazards: Arc::new(StaticHazardSource::new(hazards)),
            fallback: FallbackPolicy::None,
        });

        Self { provider, state }
    }

    pub fn with_fallback(mut self, fallback: FallbackPolicy) -> Self {
        Arc::get_mut(&mut self.state).unwrap().fallback = fallback;
        self
    }

    pub fn with_hazards(mut self, hazards: Arc<dyn HazardSource>) -> Self {
        Arc::get_mut(&mut self.state).unwrap().hazards = hazards;
        self
    }

    pub fn router(&self) -> Router {
        router(self.state.clone())
    }
}

pub async fn send_raw(app: Router, request: Request<Body>) -> (StatusCode, Vec<u8>) {
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();

    (status, bytes.to_vec())
}

/// Sends `request` and parses the answer as JSON (`Null` when it is not).
pub async fn send(app: Router, request: Request<Body>) -> (StatusCode, Value) {
    let (status, bytes) = send_raw(app, request).await;

    (status, serde_json::from_slice(&bytes).unwrap_or(Value::Null))
}
