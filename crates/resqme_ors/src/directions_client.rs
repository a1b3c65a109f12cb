use std::{fmt, time::Duration};

use reqwest::{
    StatusCode,
    header::{ACCEPT, AUTHORIZATION, CONTENT_TYPE, HeaderMap, HeaderValue},
};
use tracing::{debug, error};

use crate::{
    directions_request::RouteRequest,
    directions_response::{RouteResponse, parse_directions_response},
    error::OrsError,
};

pub const ORS_API_URL: &str = "https://api.openrouteservice.org";
pub const ORS_FOOT_WALKING_PATH: &str = "/v2/directions/foot-walking";

const ACCEPT_VALUE: &str =
    "application/json, application/geo+json, application/gpx+xml, img/png; charset=utf-8";
const CONTENT_TYPE_VALUE: &str = "application/json; charset=utf-8";

/// openrouteservice API key. Sent as-is in the `Authorization` header.
#[derive(Clone)]
pub struct ApiKey(String);

impl ApiKey {
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }
}

impl fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ApiKey(***)")
    }
}

#[derive(Debug, Clone)]
pub struct OrsClientParams {
    pub api_key: ApiKey,
    pub base_url: String,
    /// Upper bound for a whole request, connect to last body byte.
    pub timeout: Duration,
}

pub struct OrsDirectionsClient {
    client: reqwest::Client,
    url: String,
}

impl OrsDirectionsClient {
    pub fn new(params: OrsClientParams) -> Result<Self, OrsError> {
        let mut authorization =
            HeaderValue::from_str(&params.api_key.0).map_err(|_| OrsError::InvalidApiKey)?;
        authorization.set_sensitive(true);

        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, authorization);
        headers.insert(ACCEPT, HeaderValue::from_static(ACCEPT_VALUE));

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(params.timeout)
            .build()
            .map_err(OrsError::Client)?;

        let url = format!(
            "{}{}",
            params.base_url.trim_end_matches('/'),
            ORS_FOOT_WALKING_PATH
        );

        Ok(Self { client, url })
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    /// Asks the provider for a walking route. A single attempt is made;
    /// dropping the returned future aborts the request.
    pub async fn fetch_route(&self, request: &RouteRequest) -> Result<RouteResponse, OrsError> {
        debug!(
            "OrsApi: Requesting route from {:?} to {:?} avoiding {} zones",
            request.origin(),
            request.destination(),
            request.exclusions().len()
        );

        let response = self
            .client
            .post(&self.url)
            .header(CONTENT_TYPE, CONTENT_TYPE_VALUE)
            .json(&request.body())
            .send()
            .await
            .map_err(OrsError::Network)?;

        let status = response.status();
        let message = response.text().await.map_err(OrsError::Network)?;

        match status {
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => {
                error!("OrsApi: Credentials rejected with status {}", status);
                Err(OrsError::Auth {
                    status: status.as_u16(),
                    message,
                })
            }
            status if !status.is_success() => {
                debug!("OrsApi: Provider answered {}: {}", status, message);
                Err(OrsError::Provider {
                    status: status.as_u16(),
                    message,
                })
            }
            _ => {
                let route = parse_directions_response(&message)?;
                debug!("OrsApi: Received route with {} points", route.path.len());
                Ok(route)
            }
        }
    }
}
