use anyhow::{Context, Result};
use rust_embed::RustEmbed;
use std::path::Path;

use crate::map_view::MapView;

#[derive(RustEmbed)]
#[folder = "frontend/"]
pub struct Asset;

const STYLE_LINK: &str = r#"<link rel="stylesheet" href="/style.css" />"#;
const SCRIPT_TAG: &str = r#"<script src="/script.js"></script>"#;
const VIEW_PLACEHOLDER: &str = "<!-- MAP_VIEW_PLACEHOLDER -->";

fn asset_text(path: &str) -> Result<String> {
    let asset = Asset::get(path).with_context(|| format!("Embedded asset {} missing", path))?;
    String::from_utf8(asset.data.into_owned()).with_context(|| format!("{} is not UTF-8", path))
}

/// JSON that is safe to drop inside a `<script>` element.
fn script_safe_json(view: &MapView) -> Result<String> {
    let json = serde_json::to_string(view).context("Failed to serialize map view")?;
    Ok(json.replace('<', "\\u003c"))
}

/// Self-contained page: stylesheet, script and view data inlined.
pub fn render_static_page(view: &MapView) -> Result<String> {
    let index = asset_text("index.html")?;
    let style = asset_text("style.css")?;
    let script = asset_text("script.js")?;

    let view_script = format!(
        "<script>window.QUAKEMAP_VIEW = {};</script>",
        script_safe_json(view)?
    );

    Ok(index
        .replace(STYLE_LINK, &format!("<style>\n{}\n</style>", style))
        .replace(VIEW_PLACEHOLDER, &view_script)
        .replace(SCRIPT_TAG, &format!("<script>\n{}\n</script>", script)))
}

pub fn export_static_page(view: &MapView, output: &Path) -> Result<()> {
    let html = render_static_page(view)?;
    if let Some(parent) = output.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Creating {}", parent.display()))?;
    }
    std::fs::write(output, html).with_context(|| format!("Writing {}", output.display()))?;
    Ok(())
}
