use jiff::SpanRelativeTo;
use resqme_core::geopoint::GeoPoint;

pub fn parse_duration(input: &str) -> Result<jiff::SignedDuration, String> {
    if let Ok(duration) = input.parse::<jiff::SignedDuration>() {
        return Ok(duration);
    }

    if let Ok(duration) = input
        .parse::<jiff::Span>()
        .and_then(|span| span.to_duration(SpanRelativeTo::days_are_24_hours()))
    {
        return Ok(duration);
    }

    if let Ok(seconds) = input.parse::<i64>() {
        return Ok(jiff::SignedDuration::from_secs(seconds.abs()));
    }

    Err(String::from("Invalid duration"))
}

/// `"lon,lat"`
pub fn parse_geopoint(input: &str) -> Result<GeoPoint, String> {
    let values = input
        .split(',')
        .map(|value| value.trim().parse::<f64>())
        .collect::<Result<Vec<_>, _>>()
        .map_err(|error| format!("Invalid coordinate: {error}"))?;

    match values[..] {
        [lon, lat] if lon.is_finite() && lat.is_finite() => Ok(GeoPoint::new(lon, lat)),
        _ => Err(String::from("Expected two coordinates: longitude,latitude")),
    }
}
