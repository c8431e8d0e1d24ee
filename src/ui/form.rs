//! Organization input form

use crate::app::App;
use crate::store::{Event, Field, Status};
use crate::theme;
use crate::ui::components::primary_button;
use eframe::egui;

/// Render the input form. Field edits and the submit click are dispatched as
/// events so every state change flows through the reducer.
pub fn render(app: &mut App, ui: &mut egui::Ui, ctx: &egui::Context) {
    theme::card_frame().show(ui, |ui| {
        ui.set_width(ui.available_width());

        text_input(app, ui, ctx, Field::OrgName, "Organization Name");
        ui.add_space(theme::SPACING_SM);
        text_input(app, ui, ctx, Field::OrgWebsite, "Organization Website");
        ui.add_space(theme::SPACING_MD);

        let submitting = app.state.status == Status::Submitting;
        let enabled = !submitting && !app.state.form.org_name.trim().is_empty();
        if primary_button(ui, ui.available_width(), "Generate", enabled) {
            app.dispatch(ctx, Event::SubmitRequested);
        }

        if submitting {
            ui.add_space(theme::SPACING_SM);
            ui.horizontal(|ui| {
                ui.add(egui::Spinner::new().color(theme::ACCENT));
                ui.label(
                    egui::RichText::new("Generating priorities...").color(theme::TEXT_MUTED),
                );
            });
        } else if app.state.status == Status::Failed {
            ui.add_space(theme::SPACING_SM);
            ui.label(
                egui::RichText::new("Generation failed. Check the service and try again.")
                    .size(12.0)
                    .color(theme::STATUS_ERROR),
            );
        }
    });
}

/// Single-line input styled like the rest of the app. Edits a per-frame copy
/// and dispatches the changed value, keeping the update cycle unidirectional.
fn text_input(app: &mut App, ui: &mut egui::Ui, ctx: &egui::Context, field: Field, hint: &str) {
    let mut value = match field {
        Field::OrgName => app.state.form.org_name.clone(),
        Field::OrgWebsite => app.state.form.org_website.clone(),
    };

    let response = egui::Frame::new()
        .fill(theme::BG_INPUT)
        .stroke(egui::Stroke::new(theme::STROKE_DEFAULT, theme::BORDER_SUBTLE))
        .corner_radius(theme::RADIUS_DEFAULT)
        .inner_margin(egui::Margin::symmetric(8, 8))
        .show(ui, |ui| {
            ui.add(
                egui::TextEdit::singleline(&mut value)
                    .hint_text(hint)
                    .frame(false)
                    .desired_width(ui.available_width()),
            )
        })
        .inner;

    if response.changed() {
        app.dispatch(ctx, Event::FieldChanged(field, value));
    }
}
