use axum::{
    extract::State,
    http::{header, StatusCode},
    response::{Html, IntoResponse, Json, Response},
};
use tracing::{error, info};

use super::state::AppState;
use crate::html_template::Asset;
use crate::legend::{build_legend, Legend};
use crate::map_view::{render_map, MapView};
use crate::settings::Settings;

fn embedded(path: &str, content_type: &'static str) -> Result<Response, StatusCode> {
    let asset = Asset::get(path).ok_or_else(|| {
        error!(path, "embedded asset missing");
        StatusCode::NOT_FOUND
    })?;
    Ok(([(header::CONTENT_TYPE, content_type)], asset.data.into_owned()).into_response())
}

pub async fn index_html() -> Result<Html<Vec<u8>>, StatusCode> {
    let asset = Asset::get("index.html").ok_or(StatusCode::NOT_FOUND)?;
    Ok(Html(asset.data.into_owned()))
}

pub async fn style_css() -> Result<Response, StatusCode> {
    embedded("style.css", "text/css")
}

pub async fn script_js() -> Result<Response, StatusCode> {
    embedded("script.js", "application/javascript")
}

// One feed fetch per page load. A failed fetch still answers 200 with an
// empty overlay so the page shows base tiles and the notice.
pub async fn get_map_view(State(state): State<AppState>) -> Json<MapView> {
    let (collection, notice) = state.feed.fetch_or_empty().await;
    let view = render_map(&collection, notice);
    info!(
        earthquakes = view.earthquake_count,
        skipped = view.skipped_count,
        "map view rendered"
    );
    Json(view)
}

pub async fn get_legend() -> Json<Legend> {
    Json(build_legend())
}

pub async fn get_settings(State(state): State<AppState>) -> Json<Settings> {
    Json(state.settings.as_ref().clone())
}
