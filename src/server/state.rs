use std::sync::Arc;

use crate::feed::FeedClient;
use crate::settings::Settings;

// Shared by all handlers. Settings are read once at startup and never change.
#[derive(Clone)]
pub struct AppState {
    pub settings: Arc<Settings>,
    pub feed: FeedClient,
}

impl AppState {
    pub fn new(settings: Settings, feed: FeedClient) -> Self {
        Self {
            settings: Arc::new(settings),
            feed,
        }
    }
}
