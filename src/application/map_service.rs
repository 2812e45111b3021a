// Map service - Use case for fetching both feeds and composing the map view
use crate::application::feed_repository::FeedRepository;
use crate::domain::color_scale::ColorScale;
use crate::domain::earthquake::MagnitudeRange;
use crate::domain::features::FeatureRenderer;
use crate::domain::map_view::{MapOptions, MapView};
use anyhow::Context;
use std::sync::Arc;

/// Outcome of the most recent load.
#[derive(Debug, Clone)]
pub enum MapState {
    Loading,
    Ready(MapView),
    Failed(String),
}

#[derive(Clone)]
pub struct MapService {
    repository: Arc<dyn FeedRepository>,
    options: MapOptions,
    renderer: FeatureRenderer,
}

impl MapService {
    pub fn new(repository: Arc<dyn FeedRepository>, options: MapOptions, renderer: FeatureRenderer) -> Self {
        Self {
            repository,
            options,
            renderer,
        }
    }

    /// Fetch earthquakes, then plates, then scale, render and compose.
    pub async fn load(&self) -> anyhow::Result<MapView> {
        let earthquakes = self
            .repository
            .fetch_earthquakes()
            .await
            .context("Failed to load earthquake feed")?;

        // Plates are only requested once the earthquake feed has arrived
        let plates = self
            .repository
            .fetch_plate_boundaries()
            .await
            .context("Failed to load plate boundary feed")?;

        let range = match MagnitudeRange::from_records(&earthquakes) {
            Some(range) => range,
            None => {
                tracing::warn!("Earthquake feed is empty, using fallback magnitude range");
                MagnitudeRange::FALLBACK
            }
        };
        tracing::info!("Magnitude range: min {} max {}", range.min, range.max);

        let scale = ColorScale::for_magnitudes(range);
        let markers = self.renderer.render_earthquakes(&earthquakes, &scale);
        let lines = self.renderer.render_plates(&plates);

        let view = MapView::compose(self.options.clone(), scale, markers, lines);
        for overlay in &view.overlays {
            tracing::info!("Overlay {}: {} features", overlay.name, overlay.content.len());
        }

        Ok(view)
    }

    /// Like [`MapService::load`], but records a failure as `MapState::Failed`.
    pub async fn load_state(&self) -> MapState {
        match self.load().await {
            Ok(view) => MapState::Ready(view),
            Err(e) => {
                tracing::error!("Map load failed: {:#}", e);
                MapState::Failed(format!("{:#}", e))
            }
        }
    }
}
