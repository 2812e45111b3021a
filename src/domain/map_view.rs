// Map view domain model - Base layer, overlays, legend and layer control
use super::color_scale::ColorScale;
use super::features::{CircleMarker, PlateLine};
use super::legend::Legend;

pub const EARTHQUAKES_OVERLAY: &str = "Earthquakes";
pub const PLATES_OVERLAY: &str = "Plate boundaries";

pub const DEFAULT_CONTAINER: &str = "map";
pub const DEFAULT_CENTER: (f64, f64) = (37.09, -95.71);
pub const DEFAULT_ZOOM: u8 = 4;

pub const DEFAULT_BASEMAP_NAME: &str = "Gray Scale";
pub const DEFAULT_BASEMAP_URL: &str =
    "https://server.arcgisonline.com/ArcGIS/rest/services/Canvas/World_Light_Gray_Base/MapServer/tile/{z}/{y}/{x}";
pub const DEFAULT_BASEMAP_ATTRIBUTION: &str = "Tiles &copy; Esri &mdash; Esri, DeLorme, NAVTEQ";
pub const DEFAULT_MAX_ZOOM: u8 = 18;

#[derive(Debug, Clone, PartialEq)]
pub struct BaseLayer {
    pub name: String,
    pub url_template: String,
    pub attribution: String,
    pub max_zoom: u8,
}

impl Default for BaseLayer {
    fn default() -> Self {
        Self {
            name: DEFAULT_BASEMAP_NAME.to_string(),
            url_template: DEFAULT_BASEMAP_URL.to_string(),
            attribution: DEFAULT_BASEMAP_ATTRIBUTION.to_string(),
            max_zoom: DEFAULT_MAX_ZOOM,
        }
    }
}

/// Fixed view parameters applied when composing a map.
#[derive(Debug, Clone, PartialEq)]
pub struct MapOptions {
    pub container: String,
    /// (latitude, longitude)
    pub center: (f64, f64),
    pub zoom: u8,
    pub base_layer: BaseLayer,
}

impl Default for MapOptions {
    fn default() -> Self {
        Self {
            container: DEFAULT_CONTAINER.to_string(),
            center: DEFAULT_CENTER,
            zoom: DEFAULT_ZOOM,
            base_layer: BaseLayer::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum OverlayContent {
    Markers(Vec<CircleMarker>),
    Lines(Vec<PlateLine>),
}

impl OverlayContent {
    pub fn len(&self) -> usize {
        match self {
            OverlayContent::Markers(markers) => markers.len(),
            OverlayContent::Lines(lines) => lines.len(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Overlay {
    pub name: String,
    pub visible: bool,
    pub content: OverlayContent,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LegendVisibility {
    Shown,
    Hidden,
}

#[derive(Debug, Clone, PartialEq)]
pub struct LegendControl {
    pub legend: Legend,
    pub visibility: LegendVisibility,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LayerControl {
    pub collapsed: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OverlayEvent {
    Add(String),
    Remove(String),
}

impl OverlayEvent {
    pub fn overlay_name(&self) -> &str {
        match self {
            OverlayEvent::Add(name) | OverlayEvent::Remove(name) => name,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown overlay: {0}")]
pub struct UnknownOverlay(pub String);

#[derive(Debug, Clone, PartialEq)]
pub struct MapView {
    pub options: MapOptions,
    pub scale: ColorScale,
    pub overlays: Vec<Overlay>,
    pub legend: LegendControl,
    pub layer_control: LayerControl,
}

impl MapView {
    /// Assemble the view with both overlays and the legend visible.
    pub fn compose(
        options: MapOptions,
        scale: ColorScale,
        markers: Vec<CircleMarker>,
        lines: Vec<PlateLine>,
    ) -> Self {
        let overlays = vec![
            Overlay {
                name: EARTHQUAKES_OVERLAY.to_string(),
                visible: true,
                content: OverlayContent::Markers(markers),
            },
            Overlay {
                name: PLATES_OVERLAY.to_string(),
                visible: true,
                content: OverlayContent::Lines(lines),
            },
        ];

        Self {
            options,
            legend: LegendControl {
                legend: Legend::new(&scale),
                visibility: LegendVisibility::Shown,
            },
            scale,
            overlays,
            layer_control: LayerControl { collapsed: false },
        }
    }

    pub fn overlay(&self, name: &str) -> Option<&Overlay> {
        self.overlays.iter().find(|o| o.name == name)
    }

    pub fn legend_visible(&self) -> bool {
        self.legend.visibility == LegendVisibility::Shown
    }

    /// Apply an overlay toggle. Only the earthquake overlay drives the legend.
    pub fn handle(&mut self, event: &OverlayEvent) -> Result<(), UnknownOverlay> {
        let name = event.overlay_name();
        let overlay = self
            .overlays
            .iter_mut()
            .find(|o| o.name == name)
            .ok_or_else(|| UnknownOverlay(name.to_string()))?;

        let visible = matches!(event, OverlayEvent::Add(_));
        overlay.visible = visible;

        if name == EARTHQUAKES_OVERLAY {
            self.legend.visibility = if visible {
                LegendVisibility::Shown
            } else {
                LegendVisibility::Hidden
            };
        }

        Ok(())
    }
}
