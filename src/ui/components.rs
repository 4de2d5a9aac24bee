//! Reusable UI components

use crate::app::state::{Notice, NoticeKind};
use crate::theme;
use crate::types::DeviceType;
use eframe::egui;

/// Custom checkbox widget with consistent styling
pub fn styled_checkbox(ui: &mut egui::Ui, selected: bool, size: f32) -> egui::Response {
    let (rect, response) = ui.allocate_exact_size(egui::vec2(size, size), egui::Sense::click());

    if ui.is_rect_visible(rect) {
        let painter = ui.painter();
        let rounding = 3.0;

        if selected {
            painter.rect_filled(rect, rounding, theme::ACCENT);
            painter.text(
                rect.center(),
                egui::Align2::CENTER_CENTER,
                egui_phosphor::regular::CHECK,
                egui::FontId::proportional(size * 0.7),
                egui::Color32::WHITE,
            );
        } else {
            painter.rect_stroke(
                rect,
                rounding,
                egui::Stroke::new(theme::STROKE_MEDIUM, theme::BORDER_DEFAULT),
                egui::StrokeKind::Inside,
            );
        }
    }

    response
}

/// Uppercase USB / WIRELESS pill
pub fn type_badge(ui: &mut egui::Ui, device_type: DeviceType) {
    let (bg, fg) = theme::device_type_colors(device_type);
    let (rect, _) = ui.allocate_exact_size(
        egui::vec2(theme::BADGE_WIDTH, theme::BADGE_HEIGHT),
        egui::Sense::hover(),
    );
    let painter = ui.painter();
    painter.rect_filled(rect, theme::BADGE_HEIGHT / 2.0, bg);
    painter.text(
        rect.center(),
        egui::Align2::CENTER_CENTER,
        device_type.badge(),
        egui::FontId::proportional(theme::FONT_SECTION),
        fg,
    );
}

/// Small dimmed caption above a sidebar section
pub fn section_header(ui: &mut egui::Ui, text: &str) {
    ui.add(
        egui::Label::new(
            egui::RichText::new(text)
                .color(theme::TEXT_DIM)
                .size(theme::FONT_SECTION),
        )
        .selectable(false),
    );
}

/// Status line. `prefixed` adds the "Error: " / "Success: " lead-in used by the banner.
pub fn notice_label(ui: &mut egui::Ui, notice: &Notice, prefixed: bool) {
    let (icon, prefix) = match notice.kind {
        NoticeKind::Status => (egui_phosphor::regular::INFO, ""),
        NoticeKind::Success => (egui_phosphor::regular::CHECK_CIRCLE, "Success: "),
        NoticeKind::Error => (egui_phosphor::regular::WARNING_CIRCLE, "Error: "),
    };
    let prefix = if prefixed { prefix } else { "" };
    ui.add(
        egui::Label::new(
            egui::RichText::new(format!("{icon}  {prefix}{}", notice.text))
                .color(theme::notice_color(notice.kind))
                .size(theme::FONT_LABEL),
        )
        .wrap()
        .selectable(true),
    );
}
