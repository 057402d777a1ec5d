//! Surface and status bar rendering

use super::App;
use crate::theme;
use crate::ui::components::{color_swatch, paint_square, phase_label, request_label, status_item};
use eframe::egui;
use tokio::time::Instant;

impl App {
    /// Paint every square on the surface. Keeps repainting while one is moving.
    pub fn render_surface(&self, ctx: &egui::Context) {
        egui::CentralPanel::default()
            .frame(egui::Frame::NONE.fill(theme::SURFACE_BG))
            .show(ctx, |ui| {
                let origin = ui.max_rect().min;
                let painter = ui.painter();
                let now = Instant::now();
                let mut animating = false;

                for square in self.surface.snapshot() {
                    paint_square(painter, origin, &square, now);
                    animating |= square.is_animating(now);
                }

                if animating {
                    ctx.request_repaint();
                }
            });
    }

    pub fn render_status_bar(&self, ctx: &egui::Context) {
        let state = self.run_state.lock().unwrap().clone();
        let square = self.surface.snapshot().into_iter().next();

        egui::TopBottomPanel::bottom("status_bar")
            .exact_height(theme::STATUS_BAR_HEIGHT)
            .frame(
                egui::Frame::NONE
                    .fill(theme::BG_STATUS)
                    .inner_margin(egui::Margin::symmetric(theme::SPACING_MD as i8, 0)),
            )
            .show(ctx, |ui| {
                ui.horizontal_centered(|ui| {
                    let (icon, text, color) = phase_label(state.phase);
                    status_item(ui, icon, text, color);
                    ui.add_space(theme::SPACING_MD);

                    let (icon, text, color) = request_label(&state.request);
                    status_item(ui, icon, &text, color);

                    if let Some(square) = square {
                        ui.add_space(theme::SPACING_MD);
                        color_swatch(ui, theme::square_fill(square.color));
                        ui.label(
                            egui::RichText::new(square.color.name())
                                .size(theme::FONT_LABEL)
                                .color(theme::TEXT_MUTED),
                        );
                    }
                });
            });
    }
}
