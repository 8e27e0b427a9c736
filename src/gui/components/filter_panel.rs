// src/gui/components/filter_panel.rs
//
// Sidebar: three multi-selects (Company, Sector, AnalystRating).
// All values start selected; any change refilters the view.

use std::collections::BTreeSet;

use eframe::egui;
use tracing::debug;

use crate::gui::app::App;

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    ui.heading("User Input Features");
    ui.separator();

    let mut changed = false;
    let sel = &mut app.state.gui.selection;

    egui::ScrollArea::vertical()
        .id_salt("filter_scroll")
        .show(ui, |ui| {
            changed |= multiselect(ui, "Company", &app.companies, &mut sel.companies);
            changed |= multiselect(ui, "Sector", &app.sectors, &mut sel.sectors);
            changed |= multiselect(ui, "AnalystRating", &app.ratings, &mut sel.ratings);
        });

    if changed {
        debug!(
            "UI: selection → companies={}, sectors={}, ratings={}",
            sel.companies.len(),
            sel.sectors.len(),
            sel.ratings.len()
        );
        app.rebuild_view();
    }
}

/// Collapsible checkbox list with All/None shortcuts. Returns true on change.
fn multiselect(
    ui: &mut egui::Ui,
    label: &str,
    choices: &[String],
    picked: &mut BTreeSet<String>,
) -> bool {
    let mut changed = false;
    let header = format!("{label} ({}/{})", picked.len(), choices.len());

    egui::CollapsingHeader::new(header)
        .id_salt(label)
        .default_open(label != "Company")
        .show(ui, |ui| {
            ui.horizontal(|ui| {
                if ui.small_button("All").clicked() && picked.len() != choices.len() {
                    picked.extend(choices.iter().cloned());
                    changed = true;
                }
                if ui.small_button("None").clicked() && !picked.is_empty() {
                    picked.clear();
                    changed = true;
                }
            });

            for choice in choices {
                let mut on = picked.contains(choice);
                if ui.checkbox(&mut on, choice.as_str()).changed() {
                    if on {
                        picked.insert(choice.clone());
                    } else {
                        picked.remove(choice);
                    }
                    changed = true;
                }
            }
        });

    changed
}
