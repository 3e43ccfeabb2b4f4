use chrono::DateTime;
use rayon::prelude::*;
use serde::Serialize;

use crate::constants::RADIUS_SCALE;
use crate::depth::classify;
use crate::feed::EarthquakeFeature;

/// Circle marker descriptor handed to the front end.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Marker {
    pub lat: f64,
    pub lng: f64,
    pub radius: f64,
    pub color: &'static str,
    pub opacity: f64,
    pub fill_opacity: f64,
    /// Popup body, already escaped.
    pub popup: String,
}

/// Radius in pixels. Not clamped: zero or negative magnitudes give zero or
/// negative radii and Leaflet draws nothing.
pub fn radius(magnitude: f64) -> f64 {
    magnitude * RADIUS_SCALE
}

pub fn build_marker(feature: &EarthquakeFeature) -> Marker {
    Marker {
        lat: feature.latitude(),
        lng: feature.longitude(),
        radius: radius(feature.magnitude),
        color: classify(feature.depth()),
        opacity: 1.0,
        fill_opacity: 1.0,
        popup: popup_html(feature),
    }
}

/// Order of `features` is preserved.
pub fn build_markers(features: &[EarthquakeFeature]) -> Vec<Marker> {
    features.par_iter().map(build_marker).collect()
}

pub fn popup_html(feature: &EarthquakeFeature) -> String {
    let mut html = format!(
        "<h3>{}</h3><hr><p>Depth: {}</p><hr><p>Magnitude: {}</p>",
        escape_html(&feature.place),
        feature.depth(),
        feature.magnitude
    );
    if let Some(time) = feature.time.and_then(format_event_time) {
        html.push_str(&format!("<hr><p>Time: {}</p>", time));
    }
    html
}

fn format_event_time(millis: i64) -> Option<String> {
    DateTime::from_timestamp_millis(millis).map(|t| t.format("%Y-%m-%d %H:%M:%S UTC").to_string())
}

pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}
