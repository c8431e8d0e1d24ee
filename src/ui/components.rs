//! Reusable UI components

use crate::theme;
use eframe::egui;

/// Full-width accent button with hover/press feedback. Painted dimmed and
/// inert when disabled. Returns true on click.
pub fn primary_button(ui: &mut egui::Ui, width: f32, label: &str, enabled: bool) -> bool {
    let (rect, response) = ui.allocate_exact_size(egui::vec2(width, 36.0), egui::Sense::click());
    if response.hovered() {
        ui.ctx().set_cursor_icon(if enabled {
            egui::CursorIcon::PointingHand
        } else {
            egui::CursorIcon::NotAllowed
        });
    }

    let base = if enabled {
        theme::BTN_ACCENT
    } else {
        theme::BTN_DISABLED
    };
    let (fill, draw_rect) = if enabled {
        theme::button_visual(&response, base, rect)
    } else {
        (base, rect)
    };
    ui.painter().rect_filled(draw_rect, theme::RADIUS_DEFAULT, fill);

    let text_color = if enabled {
        theme::BTN_ACCENT_TEXT
    } else {
        theme::BTN_DISABLED_TEXT
    };
    ui.painter().text(
        draw_rect.center(),
        egui::Align2::CENTER_CENTER,
        label,
        egui::FontId::proportional(14.0),
        text_color,
    );

    enabled && response.clicked()
}

/// Compact gray button with a leading icon, sized to its label. Used for the
/// export links. Returns true on click.
pub fn icon_button(ui: &mut egui::Ui, icon: &str, label: &str) -> bool {
    let text = format!("{}  {}", icon, label);
    let galley = ui.painter().layout_no_wrap(
        text.clone(),
        egui::FontId::proportional(13.0),
        egui::Color32::WHITE,
    );
    let size = egui::vec2(galley.size().x + 24.0, 28.0);

    let (rect, response) = ui.allocate_exact_size(size, egui::Sense::click());
    if response.hovered() {
        ui.ctx().set_cursor_icon(egui::CursorIcon::PointingHand);
    }
    let (fill, draw_rect) = theme::button_visual(&response, theme::BTN_DEFAULT, rect);
    ui.painter().rect_filled(draw_rect, theme::RADIUS_DEFAULT, fill);
    ui.painter().text(
        draw_rect.center(),
        egui::Align2::CENTER_CENTER,
        text,
        egui::FontId::proportional(13.0),
        egui::Color32::WHITE,
    );

    response.clicked()
}
