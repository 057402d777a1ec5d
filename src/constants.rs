//! Application constants and configuration

use std::time::Duration;

pub const REQUEST_URL: &str = "https://slowpoke.keev.me/slowpoke.php";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");
pub const APP_NAME: &str = "Slowpoke Square";

pub const DEFAULT_SQUARE_SIZE: f32 = 100.0;
pub const DEFAULT_DISTANCE: f32 = 100.0;
pub const DEFAULT_DURATION: Duration = Duration::from_millis(1000);
/// Delay between creating the square and starting its movement
pub const DEFAULT_START_DELAY: Duration = Duration::from_millis(1000);

/// Sentinel the request client resolves with on any failure
pub const ERROR_SENTINEL: &str = "error";
