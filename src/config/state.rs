// Application state module
// Read-only process-wide state shared by every request task

use std::path::PathBuf;

use super::types::Config;

/// Application state
///
/// Initialized once at startup and never mutated afterwards, so request
/// tasks share it through a plain `Arc` with no locking.
pub struct AppState {
    pub config: Config,
    /// Base directory for all resolved file paths
    pub root: PathBuf,
}

impl AppState {
    pub fn new(config: &Config) -> Self {
        Self {
            root: PathBuf::from(&config.combine.root),
            config: config.clone(),
        }
    }
}
