pub mod directions_client;
pub mod directions_request;
pub mod directions_response;
pub mod error;

#[cfg(any(test, feature = "stub-provider"))]
pub mod stub_provider;

pub use directions_client::{ApiKey, OrsClientParams, OrsDirectionsClient};
pub use directions_request::{RouteRequest, compose_request};
pub use directions_response::{RouteResponse, RouteSummary};
pub use error::OrsError;
