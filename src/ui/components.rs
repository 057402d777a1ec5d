//! Reusable UI components
//!
//! Painting of the surface squares and the pieces of the status bar.

use crate::constants::ERROR_SENTINEL;
use crate::theme;
use crate::types::{RequestStatus, RunPhase, Square};
use eframe::egui;
use egui_phosphor::regular as icons;
use tokio::time::Instant;

/// Paint a square relative to the surface origin
pub fn paint_square(painter: &egui::Painter, origin: egui::Pos2, square: &Square, now: Instant) {
    let min = origin + egui::vec2(square.rendered_left(now), square.top);
    let rect = egui::Rect::from_min_size(min, egui::vec2(square.size, square.size));
    painter.rect_filled(rect, 0.0, theme::square_fill(square.color));
}

/// Icon, label and color describing the run phase
pub fn phase_label(phase: RunPhase) -> (&'static str, &'static str, egui::Color32) {
    match phase {
        RunPhase::Waiting => (icons::HOURGLASS, "Waiting", theme::TEXT_MUTED),
        RunPhase::Moving => (icons::ARROW_RIGHT, "Moving", theme::STATUS_PENDING),
        RunPhase::Settled => (icons::CHECK_CIRCLE, "Done", theme::STATUS_SUCCESS),
    }
}

/// Icon, label and color describing the request
pub fn request_label(request: &RequestStatus) -> (&'static str, String, egui::Color32) {
    match request {
        RequestStatus::Pending => (
            icons::CIRCLE_NOTCH,
            "Request pending".to_string(),
            theme::STATUS_PENDING,
        ),
        RequestStatus::Resolved(result) if result == ERROR_SENTINEL => (
            icons::X_CIRCLE,
            "Request failed".to_string(),
            theme::STATUS_ERROR,
        ),
        RequestStatus::Resolved(result) => (
            icons::GLOBE,
            format!("Response: {:?}", result),
            theme::STATUS_SUCCESS,
        ),
    }
}

/// Icon followed by a colored label
pub fn status_item(ui: &mut egui::Ui, icon: &str, text: &str, color: egui::Color32) {
    ui.label(
        egui::RichText::new(format!("{} {}", icon, text))
            .size(theme::FONT_LABEL)
            .color(color),
    );
}

/// Small filled swatch of the current square color
pub fn color_swatch(ui: &mut egui::Ui, fill: egui::Color32) -> egui::Response {
    let size = theme::SWATCH_SIZE;
    let (rect, response) = ui.allocate_exact_size(egui::vec2(size, size), egui::Sense::hover());
    if ui.is_rect_visible(rect) {
        ui.painter().rect_filled(rect, 2.0, fill);
        ui.painter().rect_stroke(
            rect,
            2.0,
            egui::Stroke::new(1.0, theme::BORDER_SUBTLE),
            egui::StrokeKind::Inside,
        );
    }
    response
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_sentinel_reads_as_failure() {
        let (icon, text, color) = request_label(&RequestStatus::Resolved("error".into()));
        assert_eq!(icon, icons::X_CIRCLE);
        assert_eq!(text, "Request failed");
        assert_eq!(color, theme::STATUS_ERROR);
    }

    #[test]
    fn response_body_is_quoted() {
        let (_, text, _) = request_label(&RequestStatus::Resolved("1".into()));
        assert_eq!(text, "Response: \"1\"");
    }

    #[test]
    fn settled_phase_is_done() {
        assert_eq!(phase_label(RunPhase::Settled).1, "Done");
        assert_eq!(phase_label(RunPhase::Waiting).1, "Waiting");
    }
}
