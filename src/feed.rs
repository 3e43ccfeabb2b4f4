//! USGS GeoJSON feed client and feature decoding.

use serde::{Deserialize, Serialize};
use std::time::{Duration, Instant};
use thiserror::Error;
use tracing::{debug, error, info, warn};

pub const UNKNOWN_PLACE: &str = "Unknown location";

#[derive(Debug, Error)]
pub enum FeedError {
    #[error("feed request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("feed returned HTTP {0}")]
    Status(reqwest::StatusCode),

    #[error("feed payload is not a GeoJSON FeatureCollection: {0}")]
    Decode(#[from] serde_json::Error),
}

/// A single earthquake taken from the feed.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EarthquakeFeature {
    pub id: Option<String>,
    pub place: String,
    /// Longitude, latitude, depth in kilometers (negative above sea level).
    pub coordinates: [f64; 3],
    pub magnitude: f64,
    /// Origin time in milliseconds since the Unix epoch.
    pub time: Option<i64>,
}

impl EarthquakeFeature {
    pub fn longitude(&self) -> f64 {
        self.coordinates[0]
    }

    pub fn latitude(&self) -> f64 {
        self.coordinates[1]
    }

    pub fn depth(&self) -> f64 {
        self.coordinates[2]
    }
}

/// Decoded feed contents.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct FeatureCollection {
    pub title: Option<String>,
    pub features: Vec<EarthquakeFeature>,
    /// Features dropped because they were mistyped or missing coordinates
    /// or magnitude.
    pub skipped: usize,
}

// Wire format. Features stay untyped here and are decoded one by one so a
// single bad record doesn't sink the batch.
#[derive(Debug, Deserialize)]
struct RawCollection {
    #[serde(default)]
    metadata: Option<serde_json::Value>,
    #[serde(default)]
    features: Vec<serde_json::Value>,
}

#[derive(Debug, Deserialize)]
struct RawFeature {
    id: Option<String>,
    geometry: Option<RawGeometry>,
    properties: Option<RawProperties>,
}

#[derive(Debug, Deserialize)]
struct RawGeometry {
    #[serde(default)]
    coordinates: Vec<Option<f64>>,
}

#[derive(Debug, Deserialize)]
struct RawProperties {
    place: Option<String>,
    mag: Option<f64>,
    time: Option<i64>,
}

impl RawFeature {
    fn into_feature(self) -> Option<EarthquakeFeature> {
        let coordinates = self.geometry?.coordinates;
        let (longitude, latitude, depth) = match coordinates.as_slice() {
            [Some(lon), Some(lat), Some(depth), ..] => (*lon, *lat, *depth),
            _ => return None,
        };
        let properties = self.properties?;
        let magnitude = properties.mag?;

        Some(EarthquakeFeature {
            id: self.id,
            place: properties.place.unwrap_or_else(|| UNKNOWN_PLACE.to_string()),
            coordinates: [longitude, latitude, depth],
            magnitude,
            time: properties.time,
        })
    }
}

/// Decode a FeatureCollection body, skipping records that are mistyped or
/// lack a usable position, depth or magnitude.
pub fn parse_feature_collection(body: &[u8]) -> Result<FeatureCollection, FeedError> {
    let raw: RawCollection = serde_json::from_slice(body)?;
    let total = raw.features.len();

    let mut features = Vec::with_capacity(total);
    for (index, value) in raw.features.into_iter().enumerate() {
        let raw_feature = match serde_json::from_value::<RawFeature>(value) {
            Ok(raw_feature) => raw_feature,
            Err(e) => {
                debug!(index, error = %e, "skipping undecodable feature");
                continue;
            }
        };
        let id = raw_feature.id.clone();
        match raw_feature.into_feature() {
            Some(feature) => features.push(feature),
            None => debug!(index, ?id, "skipping incomplete feature"),
        }
    }

    let skipped = total - features.len();
    if skipped > 0 {
        warn!(skipped, total, "feed contained malformed features");
    }

    Ok(FeatureCollection {
        title: raw
            .metadata
            .as_ref()
            .and_then(|m| m.get("title"))
            .and_then(|t| t.as_str())
            .map(str::to_string),
        features,
        skipped,
    })
}

/// HTTP client bound to one feed URL.
#[derive(Clone, Debug)]
pub struct FeedClient {
    client: reqwest::Client,
    url: String,
}

impl FeedClient {
    pub fn new(url: impl Into<String>, timeout: Duration) -> Result<Self, FeedError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self {
            client,
            url: url.into(),
        })
    }

    /// One GET, no retry.
    pub async fn fetch(&self) -> Result<FeatureCollection, FeedError> {
        let start = Instant::now();
        let response = self.client.get(&self.url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(FeedError::Status(status));
        }

        let body = response.bytes().await?;
        let collection = parse_feature_collection(&body)?;
        info!(
            url = %self.url,
            features = collection.features.len(),
            bytes = body.len(),
            elapsed_ms = start.elapsed().as_millis() as u64,
            "fetched earthquake feed"
        );
        Ok(collection)
    }

    /// Fetch, or log the failure and fall back to an empty collection.
    /// The second value is a short message suitable for showing to the user.
    pub async fn fetch_or_empty(&self) -> (FeatureCollection, Option<String>) {
        match self.fetch().await {
            Ok(collection) => (collection, None),
            Err(e) => {
                error!(url = %self.url, error = %e, "failed to load earthquake feed");
                (
                    FeatureCollection::default(),
                    Some(format!("Earthquake data unavailable: {e}")),
                )
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"{
        "type": "FeatureCollection",
        "metadata": {"title": "USGS All Earthquakes, Past Week", "count": 3},
        "features": [
            {"type": "Feature", "id": "nc1",
             "properties": {"mag": 3.5, "place": "10km NE of X", "time": 1700000000000},
             "geometry": {"type": "Point", "coordinates": [-100.0, 40.0, 15.0]}},
            {"type": "Feature", "id": "ak2",
             "properties": {"mag": null, "place": "Somewhere", "time": 1700000000000},
             "geometry": {"type": "Point", "coordinates": [-150.0, 61.0, 30.0]}},
            {"type": "Feature", "id": "hv3",
             "properties": {"mag": 1.2, "place": null},
             "geometry": {"type": "Point", "coordinates": [-155.2, 19.4, -1.5]}}
        ]
    }"#;

    #[test]
    fn decodes_valid_features_and_skips_missing_magnitude() {
        let collection = parse_feature_collection(SAMPLE.as_bytes()).unwrap();
        assert_eq!(collection.title.as_deref(), Some("USGS All Earthquakes, Past Week"));
        assert_eq!(collection.features.len(), 2);
        assert_eq!(collection.skipped, 1);

        let first = &collection.features[0];
        assert_eq!(first.id.as_deref(), Some("nc1"));
        assert_eq!(first.place, "10km NE of X");
        assert_eq!(first.longitude(), -100.0);
        assert_eq!(first.latitude(), 40.0);
        assert_eq!(first.depth(), 15.0);
        assert_eq!(first.magnitude, 3.5);
        assert_eq!(first.time, Some(1_700_000_000_000));
    }

    #[test]
    fn missing_place_gets_placeholder_and_negative_depth_survives() {
        let collection = parse_feature_collection(SAMPLE.as_bytes()).unwrap();
        let last = &collection.features[1];
        assert_eq!(last.place, UNKNOWN_PLACE);
        assert_eq!(last.depth(), -1.5);
        assert_eq!(last.time, None);
    }

    #[test]
    fn short_or_null_coordinates_are_skipped() {
        let raw = r#"{"features": [
            {"properties": {"mag": 2.0, "place": "a"}, "geometry": {"coordinates": [1.0, 2.0]}},
            {"properties": {"mag": 2.0, "place": "b"}, "geometry": {"coordinates": [1.0, null, 3.0]}},
            {"properties": {"mag": 2.0, "place": "c"}, "geometry": null},
            {"properties": null, "geometry": {"coordinates": [1.0, 2.0, 3.0]}}
        ]}"#;
        let collection = parse_feature_collection(raw.as_bytes()).unwrap();
        assert!(collection.features.is_empty());
        assert_eq!(collection.skipped, 4);
    }

    #[test]
    fn mistyped_record_is_skipped_not_fatal() {
        let raw = r#"{"features": [
            {"id": "ok", "properties": {"mag": 3.5, "place": "good"}, "geometry": {"coordinates": [-100.0, 40.0, 15.0]}},
            {"id": "s1", "properties": {"mag": "2.1", "place": "string mag"}, "geometry": {"coordinates": [1.0, 2.0, 3.0]}},
            {"id": "s2", "properties": {"mag": 2.1, "place": "string coord"}, "geometry": {"coordinates": ["1.0", 2.0, 3.0]}},
            {"id": 42, "properties": {"mag": 2.1, "place": "numeric id"}, "geometry": {"coordinates": [1.0, 2.0, 3.0]}},
            {"id": "t", "properties": {"mag": 2.1, "place": "float time", "time": 1.5}, "geometry": {"coordinates": [1.0, 2.0, 3.0]}},
            "not an object"
        ]}"#;
        let collection = parse_feature_collection(raw.as_bytes()).unwrap();
        assert_eq!(collection.features.len(), 1);
        assert_eq!(collection.features[0].place, "good");
        assert_eq!(collection.skipped, 5);
    }

    #[test]
    fn mistyped_metadata_title_is_ignored() {
        let raw = br#"{"metadata": {"title": 7}, "features": []}"#;
        let collection = parse_feature_collection(raw).unwrap();
        assert_eq!(collection.title, None);
    }

    #[test]
    fn empty_collection_is_fine() {
        let collection =
            parse_feature_collection(br#"{"type":"FeatureCollection","features":[]}"#).unwrap();
        assert!(collection.features.is_empty());
        assert_eq!(collection.skipped, 0);
        assert_eq!(collection.title, None);
    }

    #[test]
    fn non_json_body_is_decode_error() {
        let err = parse_feature_collection(b"<html>502 Bad Gateway</html>").unwrap_err();
        assert!(matches!(err, FeedError::Decode(_)));
    }

    #[tokio::test]
    async fn unreachable_feed_falls_back_to_empty() {
        // Grab a free port, then release it so nothing is listening there.
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let url = format!("http://{}/feed.geojson", addr);
        let client = FeedClient::new(url, Duration::from_secs(2)).unwrap();
        let (collection, notice) = client.fetch_or_empty().await;
        assert!(collection.features.is_empty());
        assert!(notice.unwrap().starts_with("Earthquake data unavailable"));
    }
}
