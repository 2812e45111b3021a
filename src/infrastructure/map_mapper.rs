// Mapper to convert the domain map view into JSON/GeoJSON transfer types
use crate::domain::color_scale::Rgb;
use crate::domain::features::{CircleMarker, PlateLine};
use crate::domain::legend::LegendEntry;
use crate::domain::map_view::{BaseLayer, MapView, Overlay, OverlayContent};
use crate::infrastructure::geojson::Geometry;
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct MapViewDto {
    pub container: String,
    /// [latitude, longitude]
    pub center: [f64; 2],
    pub zoom: u8,
    pub magnitude_range: RangeDto,
    pub base_layers: Vec<BaseLayerDto>,
    pub overlays: Vec<OverlayDto>,
    pub legend: LegendDto,
    pub layer_control: LayerControlDto,
}

#[derive(Debug, Serialize)]
pub struct RangeDto {
    pub min: f64,
    pub max: f64,
}

#[derive(Debug, Serialize)]
pub struct BaseLayerDto {
    pub name: String,
    pub url: String,
    pub attribution: String,
    pub max_zoom: u8,
}

#[derive(Debug, Serialize)]
pub struct OverlayDto {
    pub name: String,
    pub visible: bool,
    pub data: FeatureCollectionDto,
}

#[derive(Debug, Serialize)]
pub struct FeatureCollectionDto {
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub features: Vec<FeatureDto>,
}

#[derive(Debug, Serialize)]
pub struct FeatureDto {
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub geometry: Geometry,
    pub properties: FeatureProperties,
}

#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum FeatureProperties {
    Marker(MarkerProperties),
    Line(LineProperties),
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MarkerProperties {
    pub magnitude: f64,
    pub radius: f64,
    pub color: Rgb,
    pub fill_color: Rgb,
    pub weight: u32,
    pub opacity: f64,
    pub fill_opacity: f64,
    pub popup: String,
}

#[derive(Debug, Serialize)]
pub struct LineProperties {
    pub color: Rgb,
    pub weight: u32,
}

#[derive(Debug, Serialize)]
pub struct LegendDto {
    pub position: &'static str,
    pub visible: bool,
    pub html: String,
    pub entries: Vec<LegendEntryDto>,
}

#[derive(Debug, Serialize)]
pub struct LegendEntryDto {
    pub lower_bound: f64,
    pub label: String,
    pub color: Rgb,
}

#[derive(Debug, Serialize)]
pub struct LayerControlDto {
    pub collapsed: bool,
}

pub fn map_view_to_dto(view: &MapView) -> MapViewDto {
    let range = view.scale.range();

    MapViewDto {
        container: view.options.container.clone(),
        center: [view.options.center.0, view.options.center.1],
        zoom: view.options.zoom,
        magnitude_range: RangeDto {
            min: range.min,
            max: range.max,
        },
        base_layers: vec![base_layer_to_dto(&view.options.base_layer)],
        overlays: view.overlays.iter().map(overlay_to_dto).collect(),
        legend: LegendDto {
            position: view.legend.legend.position,
            visible: view.legend_visible(),
            html: view.legend.legend.to_html(),
            entries: view.legend.legend.entries.iter().map(legend_entry_to_dto).collect(),
        },
        layer_control: LayerControlDto {
            collapsed: view.layer_control.collapsed,
        },
    }
}

fn base_layer_to_dto(layer: &BaseLayer) -> BaseLayerDto {
    BaseLayerDto {
        name: layer.name.clone(),
        url: layer.url_template.clone(),
        attribution: layer.attribution.clone(),
        max_zoom: layer.max_zoom,
    }
}

fn overlay_to_dto(overlay: &Overlay) -> OverlayDto {
    let features = match &overlay.content {
        OverlayContent::Markers(markers) => markers.iter().map(marker_to_feature).collect(),
        OverlayContent::Lines(lines) => lines.iter().map(line_to_feature).collect(),
    };

    OverlayDto {
        name: overlay.name.clone(),
        visible: overlay.visible,
        data: FeatureCollectionDto {
            kind: "FeatureCollection",
            features,
        },
    }
}

fn marker_to_feature(marker: &CircleMarker) -> FeatureDto {
    FeatureDto {
        kind: "Feature",
        geometry: Geometry::Point {
            coordinates: vec![marker.longitude, marker.latitude],
        },
        properties: FeatureProperties::Marker(MarkerProperties {
            magnitude: marker.magnitude,
            radius: marker.radius,
            color: marker.color,
            fill_color: marker.fill_color,
            weight: marker.weight,
            opacity: marker.opacity,
            fill_opacity: marker.fill_opacity,
            popup: marker.popup.clone(),
        }),
    }
}

fn line_to_feature(line: &PlateLine) -> FeatureDto {
    FeatureDto {
        kind: "Feature",
        geometry: Geometry::LineString {
            coordinates: line.coordinates.iter().map(|(lon, lat)| vec![*lon, *lat]).collect(),
        },
        properties: FeatureProperties::Line(LineProperties {
            color: line.color,
            weight: line.weight,
        }),
    }
}

fn legend_entry_to_dto(entry: &LegendEntry) -> LegendEntryDto {
    LegendEntryDto {
        lower_bound: entry.lower_bound,
        label: entry.label.clone(),
        color: entry.color,
    }
}
