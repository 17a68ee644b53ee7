// src/ui/panel_final.rs

use eframe::egui;
use haptic_survey_lib::view::{FinalView, SubmittedView};

use crate::ui::widgets::{stage_title, ui_notice};

pub fn ui(ui: &mut egui::Ui, view: &FinalView) {
    stage_title(ui, &view.title);
    ui.label(&view.text);
    ui.add_space(12.0);
    ui_notice(ui, &view.instructions);
}

pub fn ui_submitted(ui: &mut egui::Ui, view: &SubmittedView) {
    ui.add_space(24.0);
    ui.vertical_centered(|ui| {
        ui.label(
            egui::RichText::new(&view.title)
                .strong()
                .size(24.0)
                .color(egui::Color32::from_rgb(0, 200, 120)),
        );
        ui.add_space(8.0);
        ui.label(&view.text);
    });
}
