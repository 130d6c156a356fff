// Application state module
// Process-wide, read-only state shared by every connection

use std::sync::atomic::{AtomicUsize, Ordering};

use super::types::Config;
use crate::handler::StaticResponder;

/// Application state
///
/// Built once at startup and shared behind an `Arc`. Only the connection
/// counter changes after construction.
#[derive(Debug)]
pub struct AppState {
    pub config: Config,
    pub responder: StaticResponder,
    pub active_connections: AtomicUsize,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        let responder = StaticResponder::new(config.assets.clone());
        Self {
            config,
            responder,
            active_connections: AtomicUsize::new(0),
        }
    }

    pub fn connection_count(&self) -> usize {
        self.active_connections.load(Ordering::SeqCst)
    }
}
