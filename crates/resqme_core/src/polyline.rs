//! Encoded polyline codec.
//!
//! openrouteservice returns route geometries in the encoded polyline format:
//! every coordinate is scaled by [`PRECISION`], delta encoded against the
//! previous point, zig-zag signed and written as 5-bit chunks offset by 63.
//! Pairs are encoded latitude first; decoded points are [`GeoPoint`]s, which
//! are longitude first.

use thiserror::Error;

use crate::geopoint::GeoPoint;

pub const PRECISION: f64 = 1e5;

const CHUNK_BITS: u32 = 5;
const CHUNK_MASK: u64 = 0x1f;
const CONTINUATION_BIT: u64 = 0x20;
const CHAR_OFFSET: u8 = 63;
const MAX_CHAR: u8 = b'~';

#[derive(Debug, Error, PartialEq, Eq)]
pub enum DecodeError {
    #[error("invalid byte 0x{byte:02x} at position {position}")]
    InvalidByte { byte: u8, position: usize },

    #[error("value starting at position {position} is not terminated")]
    Truncated { position: usize },

    #[error("latitude at position {position} has no matching longitude")]
    MissingLongitude { position: usize },

    #[error("value starting at position {position} overflows")]
    Overflow { position: usize },
}

pub fn decode_geometry(encoded: &str) -> Result<Vec<GeoPoint>, DecodeError> {
    let bytes = encoded.as_bytes();
    let mut points = Vec::new();

    let mut index = 0;
    let mut lat: i64 = 0;
    let mut lon: i64 = 0;

    while index < bytes.len() {
        let pair_start = index;
        let (delta_lat, next) = decode_value(bytes, index)?;
        if next >= bytes.len() {
            return Err(DecodeError::MissingLongitude {
                position: pair_start,
            });
        }
        let (delta_lon, next) = decode_value(bytes, next)?;

        lat = lat
            .checked_add(delta_lat)
            .ok_or(DecodeError::Overflow { position: pair_start })?;
        lon = lon
            .checked_add(delta_lon)
            .ok_or(DecodeError::Overflow { position: pair_start })?;

        points.push(GeoPoint::new(lon as f64 / PRECISION, lat as f64 / PRECISION));
        index = next;
    }

    Ok(points)
}

/// Reads one zig-zag encoded value starting at `start`, returning it with the
/// index of the first byte after it.
fn decode_value(bytes: &[u8], start: usize) -> Result<(i64, usize), DecodeError> {
    let mut result: u64 = 0;
    let mut shift: u32 = 0;
    let mut index = start;

    loop {
        let byte = *bytes
            .get(index)
            .ok_or(DecodeError::Truncated { position: start })?;

        if !(CHAR_OFFSET..=MAX_CHAR).contains(&byte) {
            return Err(DecodeError::InvalidByte {
                byte,
                position: index,
            });
        }

        let chunk = u64::from(byte - CHAR_OFFSET);
        let bits = chunk & CHUNK_MASK;

        if shift >= u64::BITS || (shift > u64::BITS - CHUNK_BITS && bits >> (u64::BITS - shift) != 0)
        {
            return Err(DecodeError::Overflow { position: start });
        }

        result |= bits << shift;
        shift += CHUNK_BITS;
        index += 1;

        if chunk & CONTINUATION_BIT == 0 {
            break;
        }
    }

    let value = ((result >> 1) as i64) ^ -((result & 1) as i64);

    Ok((value, index))
}

pub fn encode_geometry(points: &[GeoPoint]) -> String {
    let mut encoded = String::new();
    let mut previous_lat: i64 = 0;
    let mut previous_lon: i64 = 0;

    for point in points {
        let lat = (point.lat() * PRECISION).round() as i64;
        let lon = (point.lon() * PRECISION).round() as i64;

        encode_value(lat - previous_lat, &mut encoded);
        encode_value(lon - previous_lon, &mut encoded);

        previous_lat = lat;
        previous_lon = lon;
    }

    encoded
}

fn encode_value(value: i64, encoded: &mut String) {
    let mut remaining = ((value << 1) ^ (value >> 63)) as u64;

    while remaining >= CONTINUATION_BIT {
        let chunk = (remaining & CHUNK_MASK) | CONTINUATION_BIT;
        encoded.push(char::from(chunk as u8 + CHAR_OFFSET));
        remaining >>= CHUNK_BITS;
    }

    encoded.push(char::from(remaining as u8 + CHAR_OFFSET));
}

#[cfg(test)]
mod tests {
    use super::*;

    const REFERENCE: &str = "_p~iF~ps|U_ulLnnqC_mqNvxq`@";

    fn reference_points() -> Vec<GeoPoint> {
        vec![
            GeoPoint::new(-120.2, 38.5),
            GeoPoint::new(-120.95, 40.7),
            GeoPoint::new(-126.453, 43.252),
        ]
    }

    fn assert_close(actual: &[GeoPoint], expected: &[GeoPoint]) {
        assert_eq!(actual.len(), expected.len());
        for (a, e) in actual.iter().zip(expected) {
            assert!((a.lon() - e.lon()).abs() < 1e-5, "{a:?} != {e:?}");
            assert!((a.lat() - e.lat()).abs() < 1e-5, "{a:?} != {e:?}");
        }
    }

    #[test]
    fn test_decode_reference() {
        let points = decode_geometry(REFERENCE).unwrap();
        assert_close(&points, &reference_points());
    }

    #[test]
    fn test_encode_reference() {
        assert_eq!(encode_geometry(&reference_points()), REFERENCE);
    }

    #[test]
    fn test_encode_then_decode() {
        let path = vec![
            GeoPoint::new(17.62018, 50.75666),
            GeoPoint::new(17.61983, 50.75638),
            GeoPoint::new(17.61958, 50.7565),
            GeoPoint::new(17.61826, 50.75737),
            GeoPoint::new(17.62067, 50.69274),
        ];

        let decoded = decode_geometry(&encode_geometry(&path)).unwrap();
        assert_close(&decoded, &path);
    }

    #[test]
    fn test_empty() {
        assert_eq!(decode_geometry("").unwrap(), vec![]);
        assert_eq!(encode_geometry(&[]), "");
    }

    #[test]
    fn test_single_point_at_origin() {
        assert_eq!(decode_geometry("??").unwrap(), vec![GeoPoint::new(0.0, 0.0)]);
    }

    #[test]
    fn test_truncated_value() {
        // '~' carries the continuation bit, so the value never ends.
        assert_eq!(
            decode_geometry("_p~iF~ps|U_ulLnnqC_mqNvxq"),
            Err(DecodeError::Truncated { position: 22 })
        );
        assert_eq!(
            decode_geometry("_p~"),
            Err(DecodeError::Truncated { position: 0 })
        );
    }

    #[test]
    fn test_missing_longitude() {
        assert_eq!(
            decode_geometry("_p~iF"),
            Err(DecodeError::MissingLongitude { position: 0 })
        );
        assert_eq!(
            decode_geometry("_p~iF~ps|U_ulL"),
            Err(DecodeError::MissingLongitude { position: 10 })
        );
    }

    #[test]
    fn test_invalid_byte() {
        assert_eq!(
            decode_geometry("_p~iF ps|U"),
            Err(DecodeError::InvalidByte {
                byte: b' ',
                position: 5
            })
        );
        assert!(matches!(
            decode_geometry("_p~iF~ps|Ué"),
            Err(DecodeError::InvalidByte { position: 10, .. })
        ));
    }

    #[test]
    fn test_overflow() {
        let endless = "~".repeat(13) + "?";
        assert_eq!(
            decode_geometry(&endless),
            Err(DecodeError::Overflow { position: 0 })
        );
    }
}
