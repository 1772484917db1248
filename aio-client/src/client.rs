use std::sync::Arc;

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use tracing::debug;

use crate::errors::{Error, Result};
use crate::model::{DataPoint, NewGroup};
use crate::transport::{RawResponse, Transport};
use crate::validate;

/// Default REST endpoint of the telemetry service.
pub const DEFAULT_BASE_URL: &str = "https://io.adafruit.com/api";

const DEFAULT_API_VERSION: &str = "v2";

const AUTH_HEADER: &str = "X-AIO-KEY";
const CONTENT_TYPE_JSON: &str = "application/json";

/// REST API client for feed, data point and group resources.
///
/// Holds credentials and endpoint configuration, composes resource paths
/// and delegates every HTTP round trip to the injected [`Transport`]. All
/// state is immutable after construction; no network call is made until an
/// operation is invoked.
pub struct Client {
    username: String,
    key: String,
    base_url: String,
    api_version: String,
    transport: Arc<dyn Transport>,
}

impl Client {
    /// Creates a client for `username` authenticating with `key`.
    pub fn new(
        username: impl Into<String>,
        key: impl Into<String>,
        transport: Arc<dyn Transport>,
    ) -> Result<Self> {
        let username = username.into();
        let key = key.into();

        if username.is_empty() {
            return Err(Error::Configuration("Username cannot be empty".to_string()));
        }
        if key.is_empty() {
            return Err(Error::Configuration("API key cannot be empty".to_string()));
        }

        debug!("Client configured for user {}", username);

        Ok(Self {
            username,
            key,
            base_url: DEFAULT_BASE_URL.to_string(),
            api_version: DEFAULT_API_VERSION.to_string(),
            transport,
        })
    }

    /// Overrides the REST endpoint, e.g. for a self-hosted instance.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    /// Overrides the API version path segment (default `v2`).
    pub fn with_api_version(mut self, api_version: impl Into<String>) -> Self {
        self.api_version = api_version.into();
        self
    }

    fn compose_path(&self, path: &str) -> String {
        format!("{}/{}/{}/{}", self.base_url, self.api_version, self.username, path)
    }

    fn auth_headers(&self) -> Vec<(&'static str, String)> {
        vec![(AUTH_HEADER, self.key.clone())]
    }

    fn write_headers(&self) -> Vec<(&'static str, String)> {
        vec![
            (AUTH_HEADER, self.key.clone()),
            ("Content-Type", CONTENT_TYPE_JSON.to_string()),
        ]
    }

    fn decode<T: DeserializeOwned>(response: RawResponse) -> Result<T> {
        if !response.is_success() {
            return Err(Error::Api {
                status: response.status,
                body: String::from_utf8_lossy(&response.body).into_owned(),
            });
        }

        Ok(serde_json::from_slice(&response.body)?)
    }

    async fn request_get<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let url = self.compose_path(path);
        debug!("GET {}", url);

        let response = self.transport.get(&url, &self.auth_headers()).await?;
        Self::decode(response)
    }

    async fn request_post<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T> {
        let url = self.compose_path(path);
        debug!("POST {}", url);

        let payload = serde_json::to_vec(body)?;
        let response = self.transport.post(&url, payload, &self.write_headers()).await?;
        Self::decode(response)
    }

    async fn request_delete<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let url = self.compose_path(path);
        debug!("DELETE {}", url);

        let response = self.transport.delete(&url, &self.auth_headers()).await?;
        Self::decode(response)
    }

    // Data

    /// Sends a bare value to the feed and returns the created data point.
    pub async fn send_data(&self, feed_key: &str, value: impl Into<Value>) -> Result<DataPoint> {
        self.send_data_point(feed_key, &DataPoint::new(value)).await
    }

    /// Sends a full data point (value plus optional geotag and timestamp).
    pub async fn send_data_point(&self, feed_key: &str, point: &DataPoint) -> Result<DataPoint> {
        validate::feed_key(feed_key)?;
        validate::data_point(point)?;

        self.request_post(&format!("feeds/{}/data", feed_key), point).await
    }

    /// Returns the most recent data point on the feed.
    pub async fn receive_data(&self, feed_key: &str) -> Result<DataPoint> {
        validate::feed_key(feed_key)?;

        self.request_get(&format!("feeds/{}/data/last", feed_key)).await
    }

    /// Deletes one data point from a feed and returns the server
    /// acknowledgment.
    pub async fn delete_data(&self, feed_key: &str, data_id: &str) -> Result<Value> {
        validate::feed_key(feed_key)?;
        validate::data_id(data_id)?;

        self.request_delete(&format!("feeds/{}/data/{}", feed_key, data_id)).await
    }

    // Feeds

    /// Returns the feed representation for the given key.
    pub async fn get_feed(&self, feed_key: &str) -> Result<Value> {
        validate::feed_key(feed_key)?;

        self.request_get(&format!("feeds/{}", feed_key)).await
    }

    /// Returns all feeds, in server order.
    pub async fn get_all_feeds(&self) -> Result<Vec<Value>> {
        self.request_get("feeds").await
    }

    /// Deletes a feed and returns the server acknowledgment.
    pub async fn delete_feed(&self, feed_key: &str) -> Result<Value> {
        validate::feed_key(feed_key)?;

        self.request_delete(&format!("feeds/{}", feed_key)).await
    }

    // Groups

    /// Returns all groups, in server order.
    pub async fn get_all_groups(&self) -> Result<Vec<Value>> {
        self.request_get("groups").await
    }

    /// Creates a group and returns the created representation.
    pub async fn create_new_group(&self, name: &str, description: &str) -> Result<Value> {
        let group = NewGroup {
            name: name.to_string(),
            description: description.to_string(),
        };

        self.request_post("groups", &group).await
    }
}
