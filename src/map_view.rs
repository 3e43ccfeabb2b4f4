//! Composes tile layers, the earthquake overlay and controls into one view.

use serde::Serialize;

use crate::constants::{
    MAP_CENTER, MAP_CONTAINER_ID, MAP_ZOOM, STREET_TILES_ATTRIBUTION, STREET_TILES_URL,
    TOPO_TILES_ATTRIBUTION, TOPO_TILES_URL,
};
use crate::feed::FeatureCollection;
use crate::legend::{build_legend, Legend};
use crate::marker::{build_markers, Marker};

pub const DEFAULT_TITLE: &str = "Recent Earthquakes";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TileLayer {
    pub name: &'static str,
    pub url: &'static str,
    pub attribution: &'static str,
    pub visible: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Overlay {
    pub name: &'static str,
    pub visible: bool,
    pub markers: Vec<Marker>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LayerControl {
    pub collapsed: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MapView {
    pub container_id: &'static str,
    pub title: String,
    pub center: [f64; 2],
    pub zoom: u8,
    pub base_layers: Vec<TileLayer>,
    pub overlays: Vec<Overlay>,
    pub layer_control: LayerControl,
    pub legend: Legend,
    /// Inner HTML of the legend control.
    pub legend_html: String,
    pub earthquake_count: usize,
    pub skipped_count: usize,
    /// Shown in a banner above the map, e.g. when the feed could not be loaded.
    pub notice: Option<String>,
}

pub fn base_layers() -> Vec<TileLayer> {
    vec![
        TileLayer {
            name: "Street Map",
            url: STREET_TILES_URL,
            attribution: STREET_TILES_ATTRIBUTION,
            visible: true,
        },
        TileLayer {
            name: "Topographic Map",
            url: TOPO_TILES_URL,
            attribution: TOPO_TILES_ATTRIBUTION,
            visible: false,
        },
    ]
}

pub fn render_map(collection: &FeatureCollection, notice: Option<String>) -> MapView {
    let markers = build_markers(&collection.features);
    let legend = build_legend();

    MapView {
        container_id: MAP_CONTAINER_ID,
        title: collection
            .title
            .clone()
            .unwrap_or_else(|| DEFAULT_TITLE.to_string()),
        center: [MAP_CENTER.0, MAP_CENTER.1],
        zoom: MAP_ZOOM,
        base_layers: base_layers(),
        overlays: vec![Overlay {
            name: "Earthquakes",
            visible: true,
            markers,
        }],
        layer_control: LayerControl { collapsed: false },
        legend_html: legend.to_html(),
        legend,
        earthquake_count: collection.features.len(),
        skipped_count: collection.skipped,
        notice,
    }
}
