//! App module - contains the main application state and logic

mod views;

use crate::orchestrator::{move_and_fetch, RunConfig};
use crate::settings::Settings;
use crate::surface::Surface;
use crate::theme;
use crate::types::RunState;
use eframe::egui;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};
use tracing::info;

// ============================================================================
// APP STATE
// ============================================================================

pub struct App {
    pub(crate) surface: Surface,
    pub(crate) run_state: Arc<Mutex<RunState>>,
    pub(crate) run_config: RunConfig,
    pub(crate) run_started: bool,
    pub(crate) runtime: tokio::runtime::Runtime,
    pub(crate) settings: Settings,
    pub(crate) data_dir: PathBuf,
    pub(crate) window_pos: Option<egui::Pos2>,
    pub(crate) window_size: Option<egui::Vec2>,
}

// ============================================================================
// APP INITIALIZATION & HELPERS
// ============================================================================

impl App {
    pub fn new(cc: &eframe::CreationContext<'_>, settings: Settings, data_dir: PathBuf) -> Self {
        let mut fonts = egui::FontDefinitions::default();
        egui_phosphor::add_to_fonts(&mut fonts, egui_phosphor::Variant::Regular);
        cc.egui_ctx.set_fonts(fonts);

        theme::apply_visuals(&cc.egui_ctx);

        Self {
            surface: Surface::new(cc.egui_ctx.clone()),
            run_state: Arc::new(Mutex::new(RunState::default())),
            run_config: settings.run_config(),
            run_started: false,
            runtime: tokio::runtime::Runtime::new().unwrap(),
            settings,
            data_dir,
            window_pos: None,
            window_size: None,
        }
    }

    /// Kick off the single run. Later calls do nothing.
    pub fn start_run(&mut self) {
        if self.run_started {
            return;
        }
        self.run_started = true;

        info!(url = %self.run_config.url, "Starting run");

        let surface = self.surface.clone();
        let config = self.run_config.clone();
        let state = self.run_state.clone();
        self.runtime.spawn(async move {
            let client = reqwest::Client::new();
            move_and_fetch(&surface, &client, &config, state).await;
        });
    }

    pub fn save_settings(&self) {
        let settings = Settings {
            window_x: self.window_pos.map(|p| p.x),
            window_y: self.window_pos.map(|p| p.y),
            window_w: self.window_size.map(|s| s.x),
            window_h: self.window_size.map(|s| s.y),
            ..self.settings.clone()
        };
        settings.save(&self.data_dir);
    }
}
