// src/lib.rs
#[cfg(feature = "cli")]
pub mod cli;
pub mod compare;
pub mod config;
pub mod core;
pub mod data;
pub mod error;
pub mod export;
pub mod gui;
pub mod log;
pub mod pipeline;
pub mod progress;
pub mod specs;
pub mod store;
