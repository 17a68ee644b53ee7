// src/ui/panel_definitions.rs

use eframe::egui;
use haptic_survey_lib::view::DefinitionsView;

use crate::ui::widgets::{dimension_card, muted, stage_title, ui_notice};

pub fn ui(ui: &mut egui::Ui, view: &DefinitionsView) {
    stage_title(ui, &view.title);
    muted(ui, &view.intro);
    ui.add_space(8.0);
    ui_notice(ui, &view.how_to_use);
    ui.add_space(10.0);

    for d in &view.dimensions {
        dimension_card(ui, d);
        ui.add_space(6.0);
    }
}
