//! Earthquake map: fetch the USGS GeoJSON feed, turn events into depth-colored
//! circle markers and serve them as a Leaflet map.

pub mod constants;
pub mod depth;
pub mod feed;
pub mod html_template;
pub mod legend;
pub mod map_view;
pub mod marker;
pub mod server;
pub mod settings;
pub mod utils;
