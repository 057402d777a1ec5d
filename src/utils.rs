//! Utility functions

use crate::constants::APP_NAME;
use std::path::PathBuf;

/// Get the app data directory (settings and logs)
pub fn get_data_dir() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(APP_NAME)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn data_dir_is_named_after_app() {
        assert!(get_data_dir().ends_with("Slowpoke Square"));
    }
}
