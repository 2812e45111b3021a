// GeoJSON wire types and mapping into domain records
use crate::domain::earthquake::{EarthquakeRecord, PlateBoundaryRecord};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Geometry {
    Point { coordinates: Vec<f64> },
    LineString { coordinates: Vec<Vec<f64>> },
    #[serde(other)]
    Unsupported,
}

#[derive(Debug, Deserialize)]
pub struct FeatureCollection<P> {
    pub features: Vec<Feature<P>>,
}

#[derive(Debug, Deserialize)]
pub struct Feature<P> {
    #[serde(default)]
    pub geometry: Option<Geometry>,
    pub properties: Option<P>,
}

/// The subset of USGS summary feed properties the map uses.
#[derive(Debug, Deserialize)]
pub struct EarthquakeProperties {
    pub mag: Option<f64>,
    pub place: Option<String>,
    pub time: Option<i64>,
}

pub type EarthquakeFeed = FeatureCollection<EarthquakeProperties>;
pub type PlateFeed = FeatureCollection<serde_json::Value>;

pub fn earthquakes_from_feed(feed: EarthquakeFeed) -> Vec<EarthquakeRecord> {
    let total = feed.features.len();
    let records: Vec<EarthquakeRecord> = feed.features.into_iter().filter_map(earthquake_record).collect();

    if records.len() < total {
        tracing::debug!(
            "Skipped {} of {} earthquake features without magnitude, time or point geometry",
            total - records.len(),
            total
        );
    }
    records
}

fn earthquake_record(feature: Feature<EarthquakeProperties>) -> Option<EarthquakeRecord> {
    let properties = feature.properties?;
    let magnitude = properties.mag?;
    let time_millis = properties.time?;

    let (longitude, latitude) = match feature.geometry? {
        Geometry::Point { coordinates } if coordinates.len() >= 2 => (coordinates[0], coordinates[1]),
        _ => return None,
    };

    Some(EarthquakeRecord::new(
        magnitude,
        properties.place.unwrap_or_default(),
        time_millis,
        longitude,
        latitude,
    ))
}

pub fn plates_from_feed(feed: PlateFeed) -> Vec<PlateBoundaryRecord> {
    let total = feed.features.len();
    let records: Vec<PlateBoundaryRecord> = feed
        .features
        .into_iter()
        .filter_map(|feature| match feature.geometry? {
            Geometry::LineString { coordinates } => line_coordinates(&coordinates).map(PlateBoundaryRecord::new),
            _ => None,
        })
        .collect();

    if records.len() < total {
        tracing::debug!(
            "Skipped {} of {} plate features without a usable line geometry",
            total - records.len(),
            total
        );
    }
    records
}

/// Every position needs a longitude and latitude, and a line needs two positions.
fn line_coordinates(positions: &[Vec<f64>]) -> Option<Vec<(f64, f64)>> {
    if positions.len() < 2 {
        return None;
    }
    positions
        .iter()
        .map(|p| if p.len() >= 2 { Some((p[0], p[1])) } else { None })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const EARTHQUAKES: &str = r#"{
        "type": "FeatureCollection",
        "metadata": {"title": "USGS All Earthquakes, Past Month"},
        "features": [
            {"type": "Feature",
             "properties": {"mag": 2.0, "place": "10km SW of Anza, CA", "time": 1700000000000},
             "geometry": {"type": "Point", "coordinates": [-116.7, 33.5, 12.1]},
             "id": "ci1"},
            {"type": "Feature",
             "properties": {"mag": 5.5, "place": "Off the coast of Honshu", "time": 1700000100000},
             "geometry": {"type": "Point", "coordinates": [142.3, 38.1, 30.0]},
             "id": "us2"},
            {"type": "Feature",
             "properties": {"mag": null, "place": "Unknown", "time": 1700000200000},
             "geometry": {"type": "Point", "coordinates": [0.0, 0.0, 0.0]},
             "id": "xx3"},
            {"type": "Feature",
             "properties": {"mag": 1.1, "place": "5km N of Volcano, Hawaii"},
             "geometry": {"type": "Point", "coordinates": [-155.2, 19.4, 1.0]},
             "id": "hv4"}
        ]
    }"#;

    const PLATES: &str = r#"{
        "type": "FeatureCollection",
        "features": [
            {"type": "Feature",
             "properties": {"LAYER": "plate boundary", "Name": "AF-AN", "PlateA": "AF", "PlateB": "AN", "Type": ""},
             "geometry": {"type": "LineString", "coordinates": [[-0.4379, -54.8518], [-0.0388, -54.6772], [0.0455, -54.6317]]}},
            {"type": "Feature",
             "properties": {"Name": "broken"},
             "geometry": {"type": "LineString", "coordinates": [[1.0]]}},
            {"type": "Feature",
             "properties": {"Name": "polygon"},
             "geometry": {"type": "Polygon", "coordinates": [[[0, 0], [1, 0], [1, 1], [0, 0]]]}}
        ]
    }"#;

    #[test]
    fn test_earthquake_feed_mapping() {
        let feed: EarthquakeFeed = serde_json::from_str(EARTHQUAKES).unwrap();
        let records = earthquakes_from_feed(feed);

        assert_eq!(records.len(), 2);
        assert_eq!(
            records[0],
            EarthquakeRecord::new(2.0, "10km SW of Anza, CA".to_string(), 1_700_000_000_000, -116.7, 33.5)
        );
        assert_eq!(records[1].magnitude, 5.5);
        assert_eq!((records[1].longitude, records[1].latitude), (142.3, 38.1));
    }

    #[test]
    fn test_feature_without_time_is_skipped() {
        let feed: EarthquakeFeed = serde_json::from_str(EARTHQUAKES).unwrap();
        let records = earthquakes_from_feed(feed);

        assert!(records.iter().all(|r| r.place != "5km N of Volcano, Hawaii"));
        assert!(records.iter().all(|r| r.time_millis != 0));
    }

    #[test]
    fn test_plate_feed_mapping() {
        let feed: PlateFeed = serde_json::from_str(PLATES).unwrap();
        let records = plates_from_feed(feed);

        assert_eq!(records.len(), 1);
        assert_eq!(records[0].geometry.len(), 3);
        assert_eq!(records[0].geometry[0], (-0.4379, -54.8518));
    }

    #[test]
    fn test_empty_feed() {
        let feed: EarthquakeFeed = serde_json::from_str(r#"{"type": "FeatureCollection", "features": []}"#).unwrap();
        assert!(earthquakes_from_feed(feed).is_empty());
    }

    #[test]
    fn test_malformed_payload_is_an_error() {
        assert!(serde_json::from_str::<EarthquakeFeed>(r#"{"type": "FeatureCollection"}"#).is_err());
        assert!(serde_json::from_str::<PlateFeed>("<html>502 Bad Gateway</html>").is_err());
    }
}
