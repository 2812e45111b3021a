use crate::domain::features::DEFAULT_RADIUS_SCALE;
use crate::domain::map_view::{
    BaseLayer, MapOptions, DEFAULT_BASEMAP_ATTRIBUTION, DEFAULT_BASEMAP_NAME, DEFAULT_BASEMAP_URL,
    DEFAULT_CENTER, DEFAULT_CONTAINER, DEFAULT_MAX_ZOOM, DEFAULT_ZOOM,
};
use config::builder::DefaultState;
use config::{ConfigBuilder, Environment, File};
use serde::Deserialize;

pub const DEFAULT_EARTHQUAKES_URL: &str =
    "https://earthquake.usgs.gov/earthquakes/feed/v1.0/summary/all_month.geojson";
pub const DEFAULT_PLATES_URL: &str =
    "https://raw.githubusercontent.com/fraxen/tectonicplates/master/GeoJSON/PB2002_boundaries.json";
pub const DEFAULT_BIND: &str = "0.0.0.0:8080";

#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    pub server: ServerSettings,
    pub feeds: FeedSettings,
    pub map: MapSettings,
    pub basemap: BasemapSettings,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerSettings {
    pub bind: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct FeedSettings {
    pub earthquakes_url: String,
    pub plates_url: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct MapSettings {
    pub center_lat: f64,
    pub center_lon: f64,
    pub zoom: u8,
    pub radius_scale: f64,
}

#[derive(Debug, Deserialize, Clone)]
pub struct BasemapSettings {
    pub name: String,
    pub url: String,
    pub attribution: String,
    pub max_zoom: u8,
}

impl AppConfig {
    pub fn map_options(&self) -> MapOptions {
        MapOptions {
            container: DEFAULT_CONTAINER.to_string(),
            center: (self.map.center_lat, self.map.center_lon),
            zoom: self.map.zoom,
            base_layer: BaseLayer {
                name: self.basemap.name.clone(),
                url_template: self.basemap.url.clone(),
                attribution: self.basemap.attribution.clone(),
                max_zoom: self.basemap.max_zoom,
            },
        }
    }
}

/// Built-in values matching the fixed constants of the map page
fn defaults() -> Result<ConfigBuilder<DefaultState>, config::ConfigError> {
    config::Config::builder()
        .set_default("server.bind", DEFAULT_BIND)?
        .set_default("feeds.earthquakes_url", DEFAULT_EARTHQUAKES_URL)?
        .set_default("feeds.plates_url", DEFAULT_PLATES_URL)?
        .set_default("map.center_lat", DEFAULT_CENTER.0)?
        .set_default("map.center_lon", DEFAULT_CENTER.1)?
        .set_default("map.zoom", DEFAULT_ZOOM as i64)?
        .set_default("map.radius_scale", DEFAULT_RADIUS_SCALE)?
        .set_default("basemap.name", DEFAULT_BASEMAP_NAME)?
        .set_default("basemap.url", DEFAULT_BASEMAP_URL)?
        .set_default("basemap.attribution", DEFAULT_BASEMAP_ATTRIBUTION)?
        .set_default("basemap.max_zoom", DEFAULT_MAX_ZOOM as i64)
}

/// Defaults, then `config/quakemap.*` if present, then `QUAKEMAP__*` variables
pub fn load_app_config() -> anyhow::Result<AppConfig> {
    let settings = defaults()?
        .add_source(File::with_name("config/quakemap").required(false))
        .add_source(
            Environment::with_prefix("QUAKEMAP")
                .separator("__")
                .try_parsing(true),
        )
        .build()?;

    Ok(settings.try_deserialize()?)
}
