// src/gui/components/mod.rs
pub mod charts;
pub mod compare_panel;
pub mod data_table;
pub mod export_bar;
pub mod filter_panel;
