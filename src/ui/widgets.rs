// src/ui/widgets.rs

use eframe::egui;
use haptic_survey_lib::view::DimensionText;

pub const TOUCHED: egui::Color32 = egui::Color32::from_rgb(0, 200, 120);
pub const UNTOUCHED: egui::Color32 = egui::Color32::from_rgb(255, 170, 0);

pub fn stage_title(ui: &mut egui::Ui, title: &str) {
    ui.label(egui::RichText::new(title).strong().size(24.0));
    ui.add_space(6.0);
}

pub fn muted(ui: &mut egui::Ui, text: &str) {
    if !text.trim().is_empty() {
        ui.label(egui::RichText::new(text).weak());
    }
}

/// Highlighted info box.
pub fn ui_notice(ui: &mut egui::Ui, body: &str) {
    if body.trim().is_empty() {
        return;
    }

    let accent = egui::Color32::from_rgb(90, 160, 255);
    let stroke = egui::Stroke::new(1.0, accent);
    let fill = egui::Color32::from_rgba_unmultiplied(accent.r(), accent.g(), accent.b(), 32);

    egui::Frame::group(ui.style())
        .inner_margin(egui::Margin::same(12))
        .stroke(stroke)
        .fill(fill)
        .corner_radius(egui::CornerRadius::same(8))
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.label(body);
        });
}

pub fn required_hint(ui: &mut egui::Ui, text: &str) {
    ui.add_space(8.0);
    ui.colored_label(egui::Color32::from_rgb(255, 90, 90), text);
}

/// Label + definition + examples, as on the definitions page.
pub fn dimension_card(ui: &mut egui::Ui, text: &DimensionText) {
    egui::Frame::group(ui.style())
        .inner_margin(egui::Margin::same(10))
        .corner_radius(egui::CornerRadius::same(8))
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            dimension_body(ui, text, true);
        });
}

fn dimension_body(ui: &mut egui::Ui, text: &DimensionText, with_label: bool) {
    if with_label {
        ui.label(egui::RichText::new(&text.label).strong().size(16.0));
    }
    muted(ui, &text.definition);
    ui.add_space(4.0);
    ui.label(egui::RichText::new(&text.example_title).strong().small());
    muted(ui, &text.example);
}

/// "?" affordance next to a slider. Returns true when clicked.
pub fn info_dot(ui: &mut egui::Ui, text: &DimensionText) -> bool {
    ui.small_button("?")
        .on_hover_text(&text.definition)
        .clicked()
}

/// Definition dialog for the slider help affordance. Closing clears `open`.
pub fn definition_dialog(
    ctx: &egui::Context,
    open: &mut Option<DimensionText>,
    close_label: &str,
) {
    let Some(text) = open.as_ref() else {
        return;
    };

    let mut keep_open = true;
    let mut close_clicked = false;

    egui::Window::new(egui::RichText::new(&text.label).strong())
        .id(egui::Id::new("definition_dialog"))
        .open(&mut keep_open)
        .collapsible(false)
        .resizable(false)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .show(ctx, |ui| {
            ui.set_max_width(420.0);
            dimension_body(ui, text, false);
            ui.add_space(8.0);
            if ui.button(close_label).clicked() {
                close_clicked = true;
            }
        });

    if !keep_open || close_clicked {
        *open = None;
    }
}
