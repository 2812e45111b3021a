// Repository trait for the earthquake and plate boundary feeds
use crate::domain::earthquake::{EarthquakeRecord, PlateBoundaryRecord};
use async_trait::async_trait;

#[async_trait]
pub trait FeedRepository: Send + Sync {
    /// Fetch and decode every usable feature of the earthquake feed
    async fn fetch_earthquakes(&self) -> anyhow::Result<Vec<EarthquakeRecord>>;

    /// Fetch and decode every usable feature of the plate boundary feed
    async fn fetch_plate_boundaries(&self) -> anyhow::Result<Vec<PlateBoundaryRecord>>;
}
