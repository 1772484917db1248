use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One telemetry sample sent to or read from a feed.
///
/// Omitted optional fields serialize as explicit `null`. Unknown fields in
/// server responses (such as the server-assigned `id`) are ignored on
/// decode.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DataPoint {
    pub value: Value,
    pub lat: Option<f64>,
    pub lon: Option<f64>,
    pub ele: Option<f64>,
    pub created_at: Option<DateTime<Utc>>,
}

impl DataPoint {
    pub fn new(value: impl Into<Value>) -> Self {
        Self {
            value: value.into(),
            lat: None,
            lon: None,
            ele: None,
            created_at: None,
        }
    }

    pub fn with_location(mut self, lat: f64, lon: f64) -> Self {
        self.lat = Some(lat);
        self.lon = Some(lon);
        self
    }

    pub fn with_elevation(mut self, ele: f64) -> Self {
        self.ele = Some(ele);
        self
    }

    pub fn with_created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = Some(created_at);
        self
    }
}

/// Request body for group creation.
#[derive(Debug, Clone, Serialize)]
pub struct NewGroup {
    pub name: String,
    pub description: String,
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_omitted_fields_serialize_as_null() {
        let point = DataPoint::new(72.5);
        let body = serde_json::to_value(&point).unwrap();

        assert_eq!(
            body,
            json!({"value": 72.5, "lat": null, "lon": null, "ele": null, "created_at": null})
        );
    }

    #[test]
    fn test_decode_tolerates_server_assigned_id() {
        let point: DataPoint = serde_json::from_value(json!({
            "id": "0FXQ4",
            "value": "21.4",
            "lat": 51.5,
            "lon": -0.12,
            "ele": null,
            "created_at": "2026-08-07T10:00:00Z"
        }))
        .unwrap();

        assert_eq!(point.value, json!("21.4"));
        assert_eq!(point.lat, Some(51.5));
        assert_eq!(point.lon, Some(-0.12));
        assert_eq!(point.ele, None);
        assert!(point.created_at.is_some());
    }

    #[test]
    fn test_builder_sets_optional_fields() {
        let point = DataPoint::new("on").with_location(40.7, -74.0).with_elevation(10.0);

        assert_eq!(point.value, json!("on"));
        assert_eq!(point.lat, Some(40.7));
        assert_eq!(point.lon, Some(-74.0));
        assert_eq!(point.ele, Some(10.0));
        assert!(point.created_at.is_none());
    }
}
