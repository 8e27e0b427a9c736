// src/gui/app.rs
use std::sync::{Arc, Mutex};

use eframe::egui;
use tracing::{error, info};

use crate::{
    compare,
    config::{
        consts::{APP_TITLE, INTRO_TEXT},
        state::AppState,
    },
    data::{Selection, SelectionView},
    error::Error,
    specs::constituents::{ANALYST_RATING, COMPANY, SECTOR},
    store::{self, RecordTable},
};

use super::{components, progress::GuiProgress};

pub fn run(options: eframe::NativeOptions, state: AppState) -> Result<(), Box<dyn std::error::Error>> {
    eframe::run_native(
        APP_TITLE,
        options,
        Box::new(|_cc| Ok(Box::new(App::new(state)))),
    )?;
    Ok(())
}

pub struct App {
    // single source of truth (UI thread only)
    pub state: AppState,

    // shared table; None when the load failed
    pub table: Option<Arc<RecordTable>>,
    pub load_error: Option<String>,

    // sidebar choices (sorted distinct values)
    pub companies: Vec<String>,
    pub sectors: Vec<String>,
    pub ratings: Vec<String>,

    // current filtered view
    pub row_ix: Vec<usize>,

    pub status: Arc<Mutex<String>>,
}

impl App {
    pub fn new(mut state: AppState) -> Self {
        // The load blocks before the first frame, so only the final
        // status ("Ready" or the failed stage) is ever painted.
        let status = Arc::new(Mutex::new(String::new()));
        let mut prog = GuiProgress::new(status.clone());

        let (table, load_error) = match store::shared_table(&state.options.fetch, Some(&mut prog)) {
            Ok(t) => (Some(t), None),
            Err(e) => {
                error!("Init: load failed: {e}");
                (None, Some(e.to_string()))
            }
        };

        let (companies, sectors, ratings) = match &table {
            Some(t) => {
                // Default selection: all
                state.gui.selection = Selection::all(t);
                (
                    t.distinct(COMPANY).into_iter().collect(),
                    t.distinct(SECTOR).into_iter().collect(),
                    t.distinct(ANALYST_RATING).into_iter().collect(),
                )
            }
            None => Default::default(),
        };

        let mut app = Self {
            state,
            table,
            load_error,
            companies,
            sectors,
            ratings,
            row_ix: Vec::new(),
            status,
        };
        app.rebuild_view();
        info!(
            "Init: companies={}, sectors={}, ratings={}",
            app.companies.len(),
            app.sectors.len(),
            app.ratings.len()
        );
        app
    }

    #[inline]
    pub fn status<T: Into<String>>(&self, msg: T) {
        if let Ok(mut s) = self.status.lock() {
            *s = msg.into();
        }
    }

    pub fn status_text(&self) -> String {
        self.status.lock().map(|s| s.clone()).unwrap_or_default()
    }

    /// Filtered view over the shared table.
    pub fn view(&self) -> Option<SelectionView<'_>> {
        self.table
            .as_deref()
            .map(|t| SelectionView::from_indices(t, self.row_ix.clone()))
    }

    /// Selection changed → refilter, reset stale picks, drop old charts.
    pub fn rebuild_view(&mut self) {
        let Some(table) = self.table.clone() else { return };
        self.row_ix = crate::data::filter(&table, &self.state.gui.selection);

        let gui = &mut self.state.gui;
        let picks = &gui.selection.companies;
        if !gui.stock1.as_ref().is_some_and(|s| picks.contains(s)) {
            gui.stock1 = picks.iter().next().cloned();
        }
        if !gui.stock2.as_ref().is_some_and(|s| picks.contains(s)) {
            gui.stock2 = picks.iter().next_back().cloned();
        }
        gui.comparison = None;
    }

    /// "Analyze and Compare"
    pub fn analyze(&mut self) {
        let gui = &self.state.gui;
        let result = match self.view() {
            Some(view) => compare::compare_picks(&view, gui.stock1.as_deref(), gui.stock2.as_deref()),
            None => Err(Error::NotLoaded),
        };

        match &result {
            Ok(c) => info!("Compare: {} vs {}", c.pair.first(), c.pair.second()),
            Err(e) => info!("Compare: rejected: {e}"),
        }
        self.state.gui.comparison = Some(result.map_err(|e| e.to_string()));
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if let Some(err) = &self.load_error {
            egui::CentralPanel::default().show(ctx, |ui| {
                ui.heading(APP_TITLE);
                ui.separator();
                ui.colored_label(egui::Color32::from_rgb(220, 30, 30), format!("Load failed: {err}"));
            });
            return;
        }

        egui::SidePanel::left("filters")
            .resizable(true)
            .default_width(240.0)
            .show(ctx, |ui| {
                components::filter_panel::draw(ui, self);
            });

        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical()
                .id_salt("main_scroll")
                .show(ui, |ui| {
                    ui.heading(APP_TITLE);
                    ui.label(INTRO_TEXT);

                    components::data_table::draw(ui, self);

                    ui.separator();

                    components::export_bar::draw(ui, self);

                    ui.separator();

                    components::compare_panel::draw(ui, self);
                });
        });
    }
}
