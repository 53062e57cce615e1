// Sensor feed client
//
// One GET against the AireLibre backend, which answers with a bare JSON
// array of sensors and their current AQI reading. No envelope, no auth.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};
use tracing::debug;
use url::Url;

use crate::error::Error;
use crate::transport::TransportConfig;

/// One sensor as reported by the feed.
///
/// Only `sensor`, `source` and `quality.index` are required. The optional
/// fields fall back to an empty/zero value when missing, `null`, or of the
/// wrong type, so one sloppy record never fails the whole feed.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SensorRecord {
    #[serde(rename = "sensor")]
    pub sensor_id: String,
    pub source: String,
    #[serde(default, deserialize_with = "lenient")]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub longitude: f64,
    #[serde(default, deserialize_with = "lenient")]
    pub latitude: f64,
    pub quality: AirQuality,
}

/// Nested `quality` object of a feed record.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct AirQuality {
    /// Category name as computed by the backend (informational only).
    #[serde(default, deserialize_with = "lenient")]
    pub category: String,
    pub index: i64,
}

/// Decode an optional field, falling back to `T::default()` on `null` or a
/// type mismatch instead of failing the record.
fn lenient<'de, D, T>(de: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned + Default,
{
    let value = serde_json::Value::deserialize(de)?;
    Ok(serde_json::from_value(value).unwrap_or_default())
}

impl SensorRecord {
    /// The description, or `""` when the feed omitted it.
    pub fn description(&self) -> &str {
        self.description.as_deref().unwrap_or_default()
    }

    pub fn quality_index(&self) -> i64 {
        self.quality.index
    }

    pub fn quality_category(&self) -> &str {
        &self.quality.category
    }
}

/// Raw HTTP client for the sensor feed.
pub struct FeedClient {
    http: reqwest::Client,
}

impl FeedClient {
    pub fn new(transport: &TransportConfig) -> Result<Self, Error> {
        Ok(Self {
            http: transport.build_client()?,
        })
    }

    /// Create a feed client with a pre-built `reqwest::Client`.
    pub fn with_client(http: reqwest::Client) -> Self {
        Self { http }
    }

    /// Fetch and decode the current sensor list.
    ///
    /// A single attempt: transport failures and non-success statuses come
    /// back as network errors, a body that is not a JSON array of sensors
    /// as [`Error::Deserialization`].
    pub async fn fetch(&self, url: &Url) -> Result<Vec<SensorRecord>, Error> {
        debug!("GET {}", url);

        let resp = self
            .http
            .get(url.clone())
            .send()
            .await
            .map_err(Error::Transport)?;

        let status = resp.status();
        if !status.is_success() {
            return Err(Error::FeedStatus {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        let body = resp.text().await.map_err(Error::Transport)?;
        let records = decode_records(&body)?;

        debug!(count = records.len(), "decoded sensor feed");
        Ok(records)
    }
}

/// Decode a feed body into sensor records.
pub fn decode_records(body: &str) -> Result<Vec<SensorRecord>, Error> {
    serde_json::from_str(body).map_err(|e| Error::Deserialization {
        message: e.to_string(),
        body: body.to_owned(),
    })
}
