use resqme_core::geopoint::GeoPoint;
use serde::Deserialize;
use serde_json::Value;

use crate::error::ApiError;

pub const MISSING_QUERY_ENDPOINTS: &str = "Missing 'start' or 'target'";
pub const MISSING_BODY_ENDPOINTS: &str = "Missing 'start' or 'target' in the request";
pub const INVALID_ENDPOINT_FORMAT: &str = "Invalid 'start' or 'target' format";
pub const INVALID_ENDPOINT_SHAPE: &str =
    "'start' and 'target' must be lists of two coordinates [longitude, latitude]";

/// `?start=lon,lat&target=lon,lat`
#[derive(Deserialize)]
pub struct NavigateQuery {
    start: Option<String>,
    target: Option<String>,
}

impl NavigateQuery {
    pub fn into_endpoints(self) -> Result<(GeoPoint, GeoPoint), ApiError> {
        let non_empty = |value: Option<String>| value.filter(|value| !value.trim().is_empty());

        let (Some(start), Some(target)) = (non_empty(self.start), non_empty(self.target)) else {
            return Err(ApiError::BadRequest(MISSING_QUERY_ENDPOINTS.to_string()));
        };

        let start = parse_coordinate_list(&start)?;
        let target = parse_coordinate_list(&target)?;

        Ok((coordinate_pair(&start)?, coordinate_pair(&target)?))
    }
}

/// `{"start": [lon, lat], "target": [lon, lat]}`
///
/// Values are kept untyped so shape errors get a descriptive message instead
/// of a deserializer rejection.
#[derive(Deserialize)]
pub struct NavigateBody {
    start: Option<Value>,
    target: Option<Value>,
}

impl NavigateBody {
    pub fn into_endpoints(self) -> Result<(GeoPoint, GeoPoint), ApiError> {
        let (Some(start), Some(target)) = (self.start, self.target) else {
            return Err(ApiError::BadRequest(MISSING_BODY_ENDPOINTS.to_string()));
        };

        Ok((json_coordinate_pair(&start)?, json_coordinate_pair(&target)?))
    }
}

fn parse_coordinate_list(raw: &str) -> Result<Vec<f64>, ApiError> {
    raw.split(',')
        .map(|value| value.trim().parse::<f64>())
        .collect::<Result<Vec<_>, _>>()
        .map_err(|_| ApiError::BadRequest(INVALID_ENDPOINT_FORMAT.to_string()))
}

fn json_coordinate_pair(value: &Value) -> Result<GeoPoint, ApiError> {
    let values = value
        .as_array()
        .and_then(|values| values.iter().map(Value::as_f64).collect::<Option<Vec<_>>>())
        .ok_or_else(|| ApiError::BadRequest(INVALID_ENDPOINT_SHAPE.to_string()))?;

    coordinate_pair(&values)
}

fn coordinate_pair(values: &[f64]) -> Result<GeoPoint, ApiError> {
    match values {
        [lon, lat] if lon.is_finite() && lat.is_finite() => Ok(GeoPoint::new(*lon, *lat)),
        _ => Err(ApiError::BadRequest(INVALID_ENDPOINT_SHAPE.to_string())),
    }
}
