//! In-process stand-in for the openrouteservice directions endpoint.

use std::{sync::Arc, time::Duration};

use axum::{
    Json, Router,
    extract::State,
    http::{HeaderMap, StatusCode, header},
    response::{IntoResponse, Response},
    routing::post,
};
use parking_lot::Mutex;
use resqme_core::{geopoint::GeoPoint, polyline::encode_geometry};
use serde_json::{Value, json};
use tokio::net::TcpListener;

use crate::directions_client::ORS_FOOT_WALKING_PATH;

#[derive(Clone)]
enum StubBody {
    Json(Value),
    Text(String),
}

/// What the stub answers to every directions request.
#[derive(Clone)]
pub struct StubReply {
    status: StatusCode,
    body: StubBody,
    delay: Duration,
}

impl StubReply {
    pub fn json(status: u16, body: Value) -> Self {
        Self {
            status: StatusCode::from_u16(status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR),
            body: StubBody::Json(body),
            delay: Duration::ZERO,
        }
    }

    pub fn text(status: u16, body: impl Into<String>) -> Self {
        Self {
            status: StatusCode::from_u16(status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR),
            body: StubBody::Text(body.into()),
            delay: Duration::ZERO,
        }
    }

    /// A successful response whose geometry encodes `path`.
    pub fn route(path: &[GeoPoint]) -> Self {
        Self::json(
            200,
            json!({
                "routes": [{
                    "summary": { "distance": 7108.2, "duration": 5117.9 },
                    "geometry": encode_geometry(path)
                }]
            }),
        )
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }
}

/// A request as seen by the stub.
#[derive(Debug, Clone)]
pub struct ReceivedRequest {
    pub authorization: Option<String>,
    pub content_type: Option<String>,
    pub body: Value,
}

#[derive(Clone)]
struct StubState {
    reply: StubReply,
    received: Arc<Mutex<Vec<ReceivedRequest>>>,
}

pub struct StubProvider {
    base_url: String,
    received: Arc<Mutex<Vec<ReceivedRequest>>>,
}

impl StubProvider {
    /// Binds to an ephemeral local port and serves `reply` until the runtime
    /// shuts down.
    pub async fn start(reply: StubReply) -> Self {
        let received = Arc::new(Mutex::new(Vec::new()));
        let state = StubState {
            reply,
            received: received.clone(),
        };

        let app = Router::new()
            .route(ORS_FOOT_WALKING_PATH, post(directions_handler))
            .with_state(state);

        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("stub provider failed to bind");
        let address = listener
            .local_addr()
            .expect("stub provider has no local address");

        tokio::spawn(async move {
            axum::serve(listener, app).await.ok();
        });

        Self {
            base_url: format!("http://{address}"),
            received,
        }
    }

    /// A base URL nothing is listening on.
    pub async fn unused_base_url() -> String {
        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("failed to bind");
        let address = listener.local_addr().expect("no local address");
        drop(listener);

        format!("http://{address}")
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn received(&self) -> Vec<ReceivedRequest> {
        self.received.lock().clone()
    }
}

async fn directions_handler(
    State(state): State<StubState>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> Response {
    let header_value = |name: header::HeaderName| {
        headers
            .get(name)
            .and_then(|value| value.to_str().ok())
            .map(str::to_string)
    };

    state.received.lock().push(ReceivedRequest {
        authorization: header_value(header::AUTHORIZATION),
        content_type: header_value(header::CONTENT_TYPE),
        body,
    });

    if !state.reply.delay.is_zero() {
        tokio::time::sleep(state.reply.delay).await;
    }

    match state.reply.body {
        StubBody::Json(value) => (state.reply.status, Json(value)).into_response(),
        StubBody::Text(text) => (state.reply.status, text).into_response(),
    }
}
