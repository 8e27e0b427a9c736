// src/gui/components/compare_panel.rs
//
// Two single-selects over the selected companies + the analyze button.
// Charts render below once a comparison exists.

use eframe::egui;

use crate::config::consts::ANALYSIS_HEADING;
use crate::gui::app::App;

use super::charts;

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    ui.heading(ANALYSIS_HEADING);

    let choices: Vec<String> = app.state.gui.selection.companies.iter().cloned().collect();
    if choices.is_empty() {
        ui.label("Select at least one company to compare.");
        return;
    }

    let mut changed = false;
    ui.horizontal(|ui| {
        changed |= pick(ui, "Stock 1", &choices, &mut app.state.gui.stock1);
        changed |= pick(ui, "Stock 2", &choices, &mut app.state.gui.stock2);
    });
    if changed {
        app.state.gui.comparison = None;
    }

    if ui.button("Analyze and Compare").clicked() {
        app.analyze();
    }

    match &app.state.gui.comparison {
        Some(Ok(cmp)) => charts::draw(ui, cmp),
        Some(Err(msg)) => {
            ui.colored_label(egui::Color32::from_rgb(220, 30, 30), msg);
        }
        None => {}
    }
}

fn pick(ui: &mut egui::Ui, label: &str, choices: &[String], slot: &mut Option<String>) -> bool {
    let before = slot.clone();
    egui::ComboBox::from_label(label)
        .selected_text(slot.as_deref().unwrap_or("—"))
        .width(200.0)
        .show_ui(ui, |ui| {
            for c in choices {
                ui.selectable_value(slot, Some(c.clone()), c.as_str());
            }
        });
    *slot != before
}
