use std::env;
use std::process::Command;
use tracing::{info, warn};
use tracing_subscriber::{fmt, EnvFilter};

/// Initialize `tracing` with `RUST_LOG`, defaulting to `info`.
pub fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt::Subscriber::builder()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}

/// Opener command for the current OS.
fn opener_command(url: &str) -> Option<Command> {
    match env::consts::OS {
        "macos" => {
            let mut cmd = Command::new("open");
            cmd.arg(url);
            Some(cmd)
        }
        "windows" => {
            // The empty argument is the window title consumed by `start`.
            let mut cmd = Command::new("cmd");
            cmd.args(["/C", "start", "", url]);
            Some(cmd)
        }
        "linux" | "freebsd" | "openbsd" | "netbsd" => {
            let mut cmd = Command::new("xdg-open");
            cmd.arg(url);
            Some(cmd)
        }
        _ => None,
    }
}

/// Opens `url` in the default browser. Failures are logged, not returned.
pub fn open_browser(url: &str) {
    let Some(mut cmd) = opener_command(url) else {
        warn!(os = env::consts::OS, "don't know how to open a browser here");
        return;
    };

    match cmd.spawn() {
        Ok(_) => info!(%url, "opened browser"),
        Err(e) => warn!(%url, error = %e, "failed to open browser"),
    }
}
