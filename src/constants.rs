// Port configuration
pub const DEFAULT_PORT: u16 = 3011;
pub const ALTERNATIVE_PORT: u16 = 3012;

// USGS summary feed, all magnitudes over the past seven days
pub const DEFAULT_FEED_URL: &str =
    "https://earthquake.usgs.gov/earthquakes/feed/v1.0/summary/all_week.geojson";
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

// Initial map view
pub const MAP_CONTAINER_ID: &str = "map";
pub const MAP_CENTER: (f64, f64) = (37.09, -95.71);
pub const MAP_ZOOM: u8 = 5;

// Marker radius in pixels per unit of magnitude
pub const RADIUS_SCALE: f64 = 4.0;

// Base tile layers
pub const STREET_TILES_URL: &str = "https://{s}.tile.openstreetmap.org/{z}/{x}/{y}.png";
pub const STREET_TILES_ATTRIBUTION: &str =
    "&copy; <a href=\"https://www.openstreetmap.org/copyright\">OpenStreetMap</a> contributors";
pub const TOPO_TILES_URL: &str = "https://{s}.tile.opentopomap.org/{z}/{x}/{y}.png";
pub const TOPO_TILES_ATTRIBUTION: &str = "Map data: &copy; <a href=\"https://www.openstreetmap.org/copyright\">OpenStreetMap</a> contributors, <a href=\"http://viewfinderpanoramas.org\">SRTM</a> | Map style: &copy; <a href=\"https://opentopomap.org\">OpenTopoMap</a> (<a href=\"https://creativecommons.org/licenses/by-sa/3.0/\">CC-BY-SA</a>)";
