// HTTP feed repository implementation
use crate::application::feed_repository::FeedRepository;
use crate::domain::earthquake::{EarthquakeRecord, PlateBoundaryRecord};
use crate::infrastructure::geojson::{earthquakes_from_feed, plates_from_feed, EarthquakeFeed, PlateFeed};
use async_trait::async_trait;
use serde::de::DeserializeOwned;

#[derive(Debug, thiserror::Error)]
pub enum FeedError {
    #[error("request to {url} failed: {source}")]
    Http {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("{url} answered with status {status}")]
    Status { url: String, status: reqwest::StatusCode },

    #[error("malformed GeoJSON from {url}: {source}")]
    Decode {
        url: String,
        #[source]
        source: serde_json::Error,
    },
}

#[derive(Debug, Clone)]
pub struct HttpFeedRepository {
    client: reqwest::Client,
    earthquakes_url: String,
    plates_url: String,
}

impl HttpFeedRepository {
    pub fn new(earthquakes_url: String, plates_url: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            earthquakes_url,
            plates_url,
        }
    }

    async fn fetch_json<T: DeserializeOwned>(&self, url: &str) -> Result<T, FeedError> {
        tracing::debug!("Fetching feed {}", url);

        let response = self
            .client
            .get(url)
            .header("Accept", "application/json")
            .send()
            .await
            .map_err(|source| FeedError::Http {
                url: url.to_string(),
                source,
            })?;

        if !response.status().is_success() {
            return Err(FeedError::Status {
                url: url.to_string(),
                status: response.status(),
            });
        }

        let body = response.bytes().await.map_err(|source| FeedError::Http {
            url: url.to_string(),
            source,
        })?;
        tracing::debug!("Received {} bytes from {}", body.len(), url);

        serde_json::from_slice(&body).map_err(|source| FeedError::Decode {
            url: url.to_string(),
            source,
        })
    }
}

#[async_trait]
impl FeedRepository for HttpFeedRepository {
    async fn fetch_earthquakes(&self) -> anyhow::Result<Vec<EarthquakeRecord>> {
        let feed: EarthquakeFeed = self.fetch_json(&self.earthquakes_url).await?;
        let records = earthquakes_from_feed(feed);
        tracing::debug!("Decoded {} earthquakes", records.len());
        Ok(records)
    }

    async fn fetch_plate_boundaries(&self) -> anyhow::Result<Vec<PlateBoundaryRecord>> {
        let feed: PlateFeed = self.fetch_json(&self.plates_url).await?;
        let records = plates_from_feed(feed);
        tracing::debug!("Decoded {} plate boundaries", records.len());
        Ok(records)
    }
}
