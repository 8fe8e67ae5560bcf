//! Reading user-supplied location sets.
//!
//! Two formats are accepted: whitespace-separated `lat,lon` tokens, and a JSON
//! array of `{"lat": .., "lon": ..}` objects.

use std::fs;
use std::io::Read;
use std::path::Path;

use crate::error::{Error, Result};
use crate::models::Point;

/// Parses whitespace-separated `lat,lon` tokens.
///
/// # Errors
///
/// Reports the 1-based token number of the first malformed entry, and
/// [`Error::EmptyLocations`] when no token is present.
///
/// # Examples
///
/// ```
/// use delivery_route::input::parse_points;
///
/// let points = parse_points("51.50,-0.12\n51.52,-0.10").unwrap();
/// assert_eq!(points.len(), 2);
/// assert!(parse_points("51.50").is_err());
/// ```
pub fn parse_points(input: &str) -> Result<Vec<Point>> {
    let mut points = Vec::new();
    for (idx, tok) in input.split_whitespace().enumerate() {
        let mut it = tok.split(',');
        let lat_s = it
            .next()
            .filter(|s| !s.is_empty())
            .ok_or_else(|| Error::invalid_input(format!("token {}: missing latitude", idx + 1)))?;
        let lon_s = it
            .next()
            .ok_or_else(|| Error::invalid_input(format!("token {}: missing longitude", idx + 1)))?;

        if it.next().is_some() {
            return Err(Error::invalid_input(format!(
                "token {}: expected 'lat,lon' but got extra fields: {tok}",
                idx + 1
            )));
        }

        let lat = parse_coordinate(lat_s, -90.0, 90.0).ok_or_else(|| {
            Error::invalid_input(format!("token {}: invalid latitude: {lat_s}", idx + 1))
        })?;
        let lon = parse_coordinate(lon_s, -180.0, 180.0).ok_or_else(|| {
            Error::invalid_input(format!("token {}: invalid longitude: {lon_s}", idx + 1))
        })?;

        points.push(Point::new(lat, lon));
    }

    if points.is_empty() {
        return Err(Error::EmptyLocations);
    }
    Ok(points)
}

fn parse_coordinate(raw: &str, min: f64, max: f64) -> Option<f64> {
    raw.parse::<f64>()
        .ok()
        .filter(|v| v.is_finite() && (min..=max).contains(v))
}

/// Parses a JSON array of points.
pub fn parse_points_json(input: &str) -> Result<Vec<Point>> {
    let points: Vec<Point> = serde_json::from_str(input)?;
    if points.is_empty() {
        return Err(Error::EmptyLocations);
    }
    Ok(points)
}

/// Parses either format, picking JSON when the text starts with `[`.
pub fn parse_any(input: &str) -> Result<Vec<Point>> {
    if input.trim_start().starts_with('[') {
        parse_points_json(input)
    } else {
        parse_points(input)
    }
}

/// Reads points from a file, or from stdin when `path` is `-`.
pub fn read_points(path: &Path) -> Result<Vec<Point>> {
    let text = if path == Path::new("-") {
        let mut buf = String::new();
        std::io::stdin().read_to_string(&mut buf)?;
        buf
    } else {
        fs::read_to_string(path)?
    };
    parse_any(&text)
}
