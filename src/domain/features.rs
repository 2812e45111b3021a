// Feature rendering - Earthquake markers and plate boundary lines
use super::color_scale::{ColorScale, Rgb};
use super::earthquake::{EarthquakeRecord, PlateBoundaryRecord};
use chrono::{DateTime, Utc};

/// Meters of marker radius per unit of magnitude.
pub const DEFAULT_RADIUS_SCALE: f64 = 10_000.0;

pub const MARKER_WEIGHT: u32 = 1;
pub const MARKER_OPACITY: f64 = 0.75;
pub const MARKER_FILL_OPACITY: f64 = 0.75;

pub const PLATE_COLOR: Rgb = Rgb::RED;
pub const PLATE_WEIGHT: u32 = 1;

#[derive(Debug, Clone, PartialEq)]
pub struct CircleMarker {
    pub latitude: f64,
    pub longitude: f64,
    pub magnitude: f64,
    /// Radius in meters.
    pub radius: f64,
    pub color: Rgb,
    pub fill_color: Rgb,
    pub weight: u32,
    pub opacity: f64,
    pub fill_opacity: f64,
    pub popup: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PlateLine {
    pub coordinates: Vec<(f64, f64)>,
    pub color: Rgb,
    pub weight: u32,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FeatureRenderer {
    radius_scale: f64,
}

impl Default for FeatureRenderer {
    fn default() -> Self {
        Self::new(DEFAULT_RADIUS_SCALE)
    }
}

impl FeatureRenderer {
    pub fn new(radius_scale: f64) -> Self {
        Self { radius_scale }
    }

    /// Linear in magnitude, unclamped: zero or negative magnitudes give a
    /// zero or negative radius.
    pub fn radius(&self, magnitude: f64) -> f64 {
        self.radius_scale * magnitude
    }

    pub fn render_earthquake(&self, record: &EarthquakeRecord, scale: &ColorScale) -> CircleMarker {
        let color = scale.color(record.magnitude);
        CircleMarker {
            latitude: record.latitude,
            longitude: record.longitude,
            magnitude: record.magnitude,
            radius: self.radius(record.magnitude),
            color,
            fill_color: color,
            weight: MARKER_WEIGHT,
            opacity: MARKER_OPACITY,
            fill_opacity: MARKER_FILL_OPACITY,
            popup: popup_html(record),
        }
    }

    pub fn render_earthquakes(&self, records: &[EarthquakeRecord], scale: &ColorScale) -> Vec<CircleMarker> {
        records
            .iter()
            .map(|record| self.render_earthquake(record, scale))
            .collect()
    }

    pub fn render_plate(&self, record: &PlateBoundaryRecord) -> PlateLine {
        PlateLine {
            coordinates: record.geometry.clone(),
            color: PLATE_COLOR,
            weight: PLATE_WEIGHT,
        }
    }

    pub fn render_plates(&self, records: &[PlateBoundaryRecord]) -> Vec<PlateLine> {
        records.iter().map(|record| self.render_plate(record)).collect()
    }
}

fn popup_html(record: &EarthquakeRecord) -> String {
    format!(
        "<h4> Magnitude: {}<br>Location:  {}</h4><hr><p>{}</p>",
        record.magnitude,
        escape_html(&record.place),
        format_event_time(record.time_millis)
    )
}

/// Human-readable UTC timestamp for an epoch-millisecond event time.
pub fn format_event_time(time_millis: i64) -> String {
    match DateTime::<Utc>::from_timestamp_millis(time_millis) {
        Some(time) => time.format("%a %b %d %Y %H:%M:%S UTC").to_string(),
        None => "Unknown time".to_string(),
    }
}

pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::earthquake::MagnitudeRange;

    fn quake(magnitude: f64, place: &str) -> EarthquakeRecord {
        EarthquakeRecord::new(magnitude, place.to_string(), 1_700_000_000_000, -117.5, 35.7)
    }

    #[test]
    fn test_radius_is_linear() {
        let renderer = FeatureRenderer::default();
        for magnitude in [-1.0, 0.0, 0.5, 2.0, 5.5, 9.1] {
            assert_eq!(renderer.radius(magnitude), DEFAULT_RADIUS_SCALE * magnitude);
        }
        assert_eq!(renderer.radius(0.0), 0.0);
        assert!(renderer.radius(-1.0) < 0.0);
    }

    #[test]
    fn test_marker_style() {
        let scale = ColorScale::for_magnitudes(MagnitudeRange::new(2.0, 5.5));
        let marker = FeatureRenderer::default().render_earthquake(&quake(5.5, "Ridgecrest, CA"), &scale);

        assert_eq!(marker.radius, 55_000.0);
        assert_eq!(marker.color, Rgb::DARK_GREEN);
        assert_eq!(marker.fill_color, Rgb::DARK_GREEN);
        assert_eq!(marker.weight, 1);
        assert_eq!(marker.opacity, 0.75);
        assert_eq!(marker.fill_opacity, 0.75);
        assert_eq!((marker.latitude, marker.longitude), (35.7, -117.5));
    }

    #[test]
    fn test_popup_contents() {
        let scale = ColorScale::for_magnitudes(MagnitudeRange::new(2.0, 5.5));
        let marker = FeatureRenderer::default().render_earthquake(&quake(2.0, "10km SW of Anza, CA"), &scale);

        assert_eq!(
            marker.popup,
            "<h4> Magnitude: 2<br>Location:  10km SW of Anza, CA</h4><hr><p>Tue Nov 14 2023 22:13:20 UTC</p>"
        );
    }

    #[test]
    fn test_popup_escapes_place() {
        let scale = ColorScale::for_magnitudes(MagnitudeRange::FALLBACK);
        let marker = FeatureRenderer::default().render_earthquake(&quake(0.5, "<b>Cook & Co</b>"), &scale);
        assert!(marker.popup.contains("&lt;b&gt;Cook &amp; Co&lt;/b&gt;"));
    }

    #[test]
    fn test_plate_line_style() {
        let renderer = FeatureRenderer::default();
        let lines = renderer.render_plates(&[PlateBoundaryRecord::new(vec![(-0.4, -54.8), (0.1, -54.5)])]);

        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0].color, Rgb::RED);
        assert_eq!(lines[0].weight, 1);
        assert_eq!(lines[0].coordinates, vec![(-0.4, -54.8), (0.1, -54.5)]);
    }

    #[test]
    fn test_format_event_time() {
        assert_eq!(format_event_time(0), "Thu Jan 01 1970 00:00:00 UTC");
        assert_eq!(format_event_time(i64::MAX), "Unknown time");
    }
}
