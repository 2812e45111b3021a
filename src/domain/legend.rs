// Legend domain model - Fixed magnitude buckets colored by the shared scale
use super::color_scale::{ColorScale, Rgb};

/// Lower bound and label of each legend entry. These are fixed and do not
/// follow the observed magnitude range used for marker colors.
pub const LEGEND_BUCKETS: [(f64, &str); 6] = [
    (0.0, "0-1"),
    (1.0, "1-2"),
    (2.0, "2-3"),
    (3.0, "3-4"),
    (4.0, "4-5"),
    (5.0, "5+"),
];

pub const LEGEND_POSITION: &str = "bottomright";

#[derive(Debug, Clone, PartialEq)]
pub struct LegendEntry {
    pub lower_bound: f64,
    pub label: String,
    pub color: Rgb,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Legend {
    pub position: &'static str,
    pub entries: Vec<LegendEntry>,
}

impl Legend {
    pub fn new(scale: &ColorScale) -> Self {
        let entries = LEGEND_BUCKETS
            .iter()
            .map(|(lower_bound, label)| LegendEntry {
                lower_bound: *lower_bound,
                label: label.to_string(),
                color: scale.color(*lower_bound),
            })
            .collect();

        Self {
            position: LEGEND_POSITION,
            entries,
        }
    }

    /// Legend markup: one swatch plus range label per line.
    pub fn to_html(&self) -> String {
        let mut html = String::from("<div class=\"info legend\">");
        for entry in &self.entries {
            html.push_str(&format!(
                "<i style=\"background:{}\"></i> {}<br>",
                entry.color, entry.label
            ));
        }
        html.push_str("</div>");
        html
    }
}
