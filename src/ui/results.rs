//! Read-only rendering of the generated priority list

use crate::app::App;
use crate::theme;
use crate::ui::components::icon_button;
use eframe::egui;
use tracing::warn;

/// Card heading, numbered by display position (1-based), not by any field of
/// the result itself.
pub fn priority_heading(position: usize, label: &str) -> String {
    format!("Priority {}: {}", position + 1, label)
}

/// One initiative line: title joined with its description.
pub fn initiative_line(title: &str, description: &str) -> String {
    format!("{} — {}", title, description)
}

/// Render the priority cards and export links, or nothing at all when no
/// result set exists.
pub fn render(app: &App, ui: &mut egui::Ui) {
    if !app.state.has_results() {
        return;
    }

    ui.add_space(theme::SPACING_LG);
    ui.label(
        egui::RichText::new("Generated Strategic Priorities")
            .size(18.0)
            .strong()
            .color(theme::TEXT_PRIMARY),
    );
    ui.add_space(theme::SPACING_SM);

    // Export actions: fixed URLs handed to the system browser, never fetched
    // by the client itself.
    ui.horizontal(|ui| {
        if icon_button(ui, egui_phosphor::regular::FILE_DOC, "Download as Word") {
            open_export(&app.client.word_export_url());
        }
        if icon_button(ui, egui_phosphor::regular::FILE_XLS, "Download as Excel") {
            open_export(&app.client.excel_export_url());
        }
    });
    ui.add_space(theme::SPACING_MD);

    for (index, priority) in app.state.priorities.iter().enumerate() {
        theme::section_frame().show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.label(
                egui::RichText::new(priority_heading(index, &priority.priority))
                    .size(15.0)
                    .strong()
                    .color(theme::ACCENT),
            );
            ui.add_space(2.0);
            ui.label(egui::RichText::new(&priority.description).color(theme::TEXT_SECONDARY));

            ui.add_space(theme::SPACING_SM);
            ui.label(
                egui::RichText::new("KEY INITIATIVES")
                    .size(11.0)
                    .color(theme::TEXT_DIM),
            );
            for definition in &priority.definitions {
                ui.horizontal_wrapped(|ui| {
                    ui.label(egui::RichText::new("•").color(theme::TEXT_DIM));
                    ui.label(
                        egui::RichText::new(initiative_line(
                            &definition.title,
                            &definition.description,
                        ))
                        .color(theme::TEXT_SECONDARY),
                    );
                });
            }
        });
        ui.add_space(theme::SPACING_SM);
    }
}

fn open_export(url: &str) {
    if let Err(e) = open::that(url) {
        warn!(error = %e, url, "Failed to hand export link to the browser");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn headings_are_numbered_by_position() {
        assert_eq!(priority_heading(0, "Expand Market"), "Priority 1: Expand Market");
        assert_eq!(priority_heading(4, "Governance"), "Priority 5: Governance");
    }

    #[test]
    fn initiative_joins_title_and_description() {
        assert_eq!(
            initiative_line("Launch EU", "Open EU office"),
            "Launch EU — Open EU office"
        );
    }
}
