// src/gui/components/data_table.rs
//
// Filtered constituents, canonical column order. Text columns left-aligned,
// numbers centered.

use eframe::egui::{self, Align, Layout, RichText, TextWrapMode};
use egui_extras::{Column, TableBuilder};

use crate::gui::app::App;
use crate::specs::constituents::{CANONICAL_COLUMNS, COMPANY, is_text_column};

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    let Some(view) = app.view() else { return };

    ui.label(RichText::new(format!("Nifty 50 Results: {} rows found", view.len())).strong());

    let mut table = TableBuilder::new(ui)
        .striped(true)
        .resizable(true)
        .min_scrolled_height(0.0)
        .max_scroll_height(360.0)
        .id_salt("constituents");
    for &col in CANONICAL_COLUMNS.iter() {
        let w = if col == COMPANY { 180.0 } else { 100.0 };
        table = table.column(Column::initial(w).at_least(40.0).clip(true));
    }

    table
        .header(24.0, |mut header| {
            for &col in CANONICAL_COLUMNS.iter() {
                header.col(|ui| {
                    ui.style_mut().wrap_mode = Some(TextWrapMode::Extend);
                    ui.add(egui::Label::new(RichText::new(col).strong()).selectable(false));
                });
            }
        })
        .body(|body| {
            body.rows(20.0, view.len(), |mut row| {
                let Some(rec) = view.row(row.index()) else { return };
                for &col in CANONICAL_COLUMNS.iter() {
                    let text = rec.cell(col);
                    row.col(|ui| {
                        ui.style_mut().wrap_mode = Some(TextWrapMode::Extend);
                        if is_text_column(col) {
                            ui.with_layout(Layout::left_to_right(Align::Center), |ui| {
                                ui.label(text);
                            });
                        } else {
                            ui.centered_and_justified(|ui| {
                                ui.label(text);
                            });
                        }
                    });
                }
            });
        });
}
