// src/ui/panel_background.rs

use eframe::egui;
use haptic_survey_lib::survey::{BackgroundField, UiEvent};
use haptic_survey_lib::view::BackgroundView;

use crate::ui::widgets::{muted, stage_title};

pub fn ui(ui: &mut egui::Ui, view: &BackgroundView, events: &mut Vec<UiEvent>) {
    stage_title(ui, &view.title);
    muted(ui, &view.intro);
    ui.add_space(10.0);

    // Edits go through events; the buffers are rebuilt from state every frame.
    let mut age = view.values.age.clone();
    ui.label(&view.age_label);
    let resp = ui.add(egui::TextEdit::singleline(&mut age).desired_width(120.0));
    if resp.changed() {
        events.push(UiEvent::SetBackground(BackgroundField::Age, age));
    }
    ui.add_space(8.0);

    choice(
        ui,
        "bg_gender",
        &view.gender_label,
        &view.select_placeholder,
        &view.gender_options,
        &view.values.gender,
        BackgroundField::Gender,
        events,
    );

    let mut country = view.values.country.clone();
    ui.label(&view.country_label);
    let resp = ui.add(
        egui::TextEdit::singleline(&mut country)
            .hint_text(&view.country_placeholder)
            .desired_width(320.0),
    );
    if resp.changed() {
        events.push(UiEvent::SetBackground(BackgroundField::Country, country));
    }
    ui.add_space(8.0);

    choice(
        ui,
        "bg_education",
        &view.education_label,
        &view.select_placeholder,
        &view.education_options,
        &view.values.education,
        BackgroundField::Education,
        events,
    );
    choice(
        ui,
        "bg_familiarity",
        &view.familiarity_label,
        &view.select_placeholder,
        &view.familiarity_options,
        &view.values.materials_familiarity,
        BackgroundField::MaterialsFamiliarity,
        events,
    );
    choice(
        ui,
        "bg_related",
        &view.related_label,
        &view.select_placeholder,
        &view.related_options,
        &view.values.related_background,
        BackgroundField::RelatedBackground,
        events,
    );
}

#[allow(clippy::too_many_arguments)]
fn choice(
    ui: &mut egui::Ui,
    id: &str,
    label: &str,
    placeholder: &str,
    options: &[(String, String)],
    current: &str,
    field: BackgroundField,
    events: &mut Vec<UiEvent>,
) {
    ui.label(label);

    let selected_text = options
        .iter()
        .find(|(k, _)| k == current)
        .map(|(_, v)| v.as_str())
        .unwrap_or(placeholder);

    egui::ComboBox::from_id_salt(id)
        .selected_text(selected_text)
        .width(320.0)
        .show_ui(ui, |ui| {
            if ui.selectable_label(current.is_empty(), placeholder).clicked() && !current.is_empty()
            {
                events.push(UiEvent::SetBackground(field, String::new()));
            }
            for (key, text) in options {
                if ui.selectable_label(key == current, text).clicked() && key != current {
                    events.push(UiEvent::SetBackground(field, key.clone()));
                }
            }
        });

    ui.add_space(8.0);
}
