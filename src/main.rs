use anyhow::{bail, Context, Result};
use std::path::PathBuf;
use tracing::{info, warn};

use quakemap::feed::FeedClient;
use quakemap::html_template::export_static_page;
use quakemap::map_view::render_map;
use quakemap::server::{bind_listener, serve, AppState};
use quakemap::settings::Settings;
use quakemap::utils::{init_logging, open_browser};

#[derive(Debug, PartialEq)]
enum Mode {
    Serve,
    Export(PathBuf),
}

/// `args` excludes the program name.
fn parse_args<I>(args: I) -> Result<Mode>
where
    I: IntoIterator<Item = String>,
{
    let mut args = args.into_iter();
    match args.next().as_deref() {
        None => Ok(Mode::Serve),
        Some("--export") => {
            let path = args.next().context("--export needs an output file")?;
            Ok(Mode::Export(PathBuf::from(path)))
        }
        Some(other) => bail!("unknown argument: {} (usage: quakemap [--export <file>])", other),
    }
}

/// Fetch once and write a self-contained page.
async fn export(feed: &FeedClient, output: PathBuf) -> Result<()> {
    let (collection, notice) = feed.fetch_or_empty().await;
    if notice.is_some() {
        warn!("exporting a map without earthquake data");
    }
    let view = render_map(&collection, notice);
    export_static_page(&view, &output)?;
    info!(
        path = %output.display(),
        earthquakes = view.earthquake_count,
        "static map written"
    );
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    init_logging();
    let mode = parse_args(std::env::args().skip(1))?;

    let settings = Settings::load().context("Failed to load settings")?;
    info!(
        config = %Settings::config_path().display(),
        feed = %settings.feed_url,
        "QuakeMap {} starting",
        env!("CARGO_PKG_VERSION")
    );

    let feed = FeedClient::new(settings.feed_url.clone(), settings.request_timeout())
        .context("Failed to build HTTP client")?;

    match mode {
        Mode::Export(output) => export(&feed, output).await,
        Mode::Serve => {
            let listener = bind_listener(settings.port).await?;
            let url = format!("http://{}", listener.local_addr()?);
            info!(%url, "map available");
            if settings.auto_open_browser {
                open_browser(&url);
            }
            serve(listener, AppState::new(settings, feed)).await
        }
    }
}
