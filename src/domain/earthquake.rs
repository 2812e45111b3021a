// Earthquake and plate boundary domain models

#[derive(Debug, Clone, PartialEq)]
pub struct EarthquakeRecord {
    pub magnitude: f64,
    pub place: String,
    pub time_millis: i64,
    pub longitude: f64,
    pub latitude: f64,
}

impl EarthquakeRecord {
    pub fn new(magnitude: f64, place: String, time_millis: i64, longitude: f64, latitude: f64) -> Self {
        Self {
            magnitude,
            place,
            time_millis,
            longitude,
            latitude,
        }
    }
}

/// One boundary segment as an ordered list of (longitude, latitude) pairs.
#[derive(Debug, Clone, PartialEq)]
pub struct PlateBoundaryRecord {
    pub geometry: Vec<(f64, f64)>,
}

impl PlateBoundaryRecord {
    pub fn new(geometry: Vec<(f64, f64)>) -> Self {
        Self { geometry }
    }
}

/// Observed magnitude bounds. Always satisfies `min <= max`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MagnitudeRange {
    pub min: f64,
    pub max: f64,
}

impl MagnitudeRange {
    /// Range used when the feed carries no earthquakes.
    pub const FALLBACK: MagnitudeRange = MagnitudeRange { min: 0.0, max: 1.0 };

    pub fn new(min: f64, max: f64) -> Self {
        if min <= max {
            Self { min, max }
        } else {
            Self { min: max, max: min }
        }
    }

    /// Bounds over all records, or `None` for an empty feed.
    pub fn from_records(records: &[EarthquakeRecord]) -> Option<Self> {
        let mut magnitudes = records.iter().map(|r| r.magnitude).filter(|m| !m.is_nan());
        let first = magnitudes.next()?;
        let (min, max) = magnitudes.fold((first, first), |(lo, hi), m| (lo.min(m), hi.max(m)));
        Some(Self::new(min, max))
    }

    pub fn span(&self) -> f64 {
        self.max - self.min
    }

    pub fn is_degenerate(&self) -> bool {
        self.span() == 0.0
    }
}
