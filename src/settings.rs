//! User settings stored as settings.json in the app data directory

use crate::constants::*;
use crate::orchestrator::RunConfig;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;
use tracing::{debug, warn};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // Window geometry
    pub window_x: Option<f32>,
    pub window_y: Option<f32>,
    pub window_w: Option<f32>,
    pub window_h: Option<f32>,

    // Run
    pub request_url: String,
    pub square_size: f32,
    pub distance: f32,
    pub duration_ms: u64,
    pub start_delay_ms: u64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            window_x: None,
            window_y: None,
            window_w: None,
            window_h: None,
            request_url: REQUEST_URL.to_string(),
            square_size: DEFAULT_SQUARE_SIZE,
            distance: DEFAULT_DISTANCE,
            duration_ms: DEFAULT_DURATION.as_millis() as u64,
            start_delay_ms: DEFAULT_START_DELAY.as_millis() as u64,
        }
    }
}

impl Settings {
    pub fn load(data_dir: &Path) -> Self {
        let path = data_dir.join("settings.json");
        match std::fs::read_to_string(&path) {
            Ok(s) => match serde_json::from_str(&s) {
                Ok(settings) => {
                    debug!(path = %path.display(), "Settings loaded");
                    settings
                }
                Err(e) => {
                    warn!(error = %e, "Failed to parse settings, using defaults");
                    Self::default()
                }
            },
            Err(_) => {
                debug!("No settings file found, using defaults");
                Self::default()
            }
        }
    }

    pub fn save(&self, data_dir: &Path) {
        let path = data_dir.join("settings.json");
        match serde_json::to_string_pretty(self) {
            Ok(json) => {
                if let Err(e) = std::fs::write(&path, json) {
                    warn!(error = %e, "Failed to save settings");
                }
            }
            Err(e) => warn!(error = %e, "Failed to serialize settings"),
        }
    }

    pub fn run_config(&self) -> RunConfig {
        RunConfig {
            url: self.request_url.clone(),
            size: self.square_size,
            distance: self.distance,
            duration: Duration::from_millis(self.duration_ms),
            start_delay: Duration::from_millis(self.start_delay_ms),
        }
    }
}
