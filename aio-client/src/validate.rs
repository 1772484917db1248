use crate::errors::{Error, Result};
use crate::model::DataPoint;

const LAT_MIN: f64 = -90.0;
const LAT_MAX: f64 = 90.0;
const LON_MIN: f64 = -180.0;
const LON_MAX: f64 = 180.0;

/// Validates a feed key before it is spliced into a request path.
pub(crate) fn feed_key(key: &str) -> Result<()> {
    segment(key, "Feed key")
}

/// Validates a data point id before it is spliced into a request path.
pub(crate) fn data_id(id: &str) -> Result<()> {
    segment(id, "Data point id")
}

fn segment(value: &str, label: &str) -> Result<()> {
    if value.is_empty() {
        return Err(Error::Validation(format!("{} cannot be empty", label)));
    }

    if value.contains('/') || value.chars().any(char::is_whitespace) {
        return Err(Error::Validation(format!(
            "{} '{}' contains path-breaking characters",
            label, value
        )));
    }

    Ok(())
}

/// Validates the optional coordinates on a data point.
pub(crate) fn data_point(point: &DataPoint) -> Result<()> {
    // Validate latitude
    if let Some(lat) = point.lat {
        if lat < LAT_MIN || lat > LAT_MAX {
            return Err(Error::Validation(format!(
                "Latitude {} out of range [{}, {}]",
                lat, LAT_MIN, LAT_MAX
            )));
        }
    }

    // Validate longitude
    if let Some(lon) = point.lon {
        if lon < LON_MIN || lon > LON_MAX {
            return Err(Error::Validation(format!(
                "Longitude {} out of range [{}, {}]",
                lon, LON_MIN, LON_MAX
            )));
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_point() {
        let point = DataPoint::new(25.0).with_location(51.5, -0.12);

        assert!(data_point(&point).is_ok());
    }

    #[test]
    fn test_point_without_location() {
        let point = DataPoint::new(25.0);

        assert!(data_point(&point).is_ok());
    }

    #[test]
    fn test_invalid_latitude() {
        let point = DataPoint::new(25.0).with_location(200.0, 0.0); // Out of range

        assert!(data_point(&point).is_err());
    }

    #[test]
    fn test_invalid_longitude() {
        let point = DataPoint::new(25.0).with_location(0.0, -300.0); // Out of range

        assert!(data_point(&point).is_err());
    }

    #[test]
    fn test_valid_feed_key() {
        assert!(feed_key("temperature").is_ok());
        assert!(feed_key("dev-0.temperature").is_ok());
    }

    #[test]
    fn test_empty_feed_key() {
        assert!(feed_key("").is_err());
    }

    #[test]
    fn test_feed_key_with_slash() {
        assert!(feed_key("weather/indoor").is_err());
    }

    #[test]
    fn test_feed_key_with_whitespace() {
        assert!(feed_key("indoor temp").is_err());
    }

    #[test]
    fn test_empty_data_id() {
        assert!(data_id("").is_err());
    }
}
