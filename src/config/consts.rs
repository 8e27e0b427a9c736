// src/config/consts.rs

// Net config
pub const SOURCE_URL: &str = "https://in.tradingview.com/symbols/NSE-NIFTY/components/";
pub const USER_AGENT: &str = "nifty_stats/0.1";

// Export
pub const DEFAULT_OUT_DIR: &str = "out";
pub const EXPORT_FILE_NAME: &str = "nifty50_data_stats.csv";
pub const EXPORT_LINK_TEXT: &str = " Download CSV File ";

// Window
pub const APP_TITLE: &str = "Nifty 50 Finance Stats Explorer";
pub const INTRO_TEXT: &str = "The Nifty 50 Index constituents can be found in the table below. \
Sort NIFTY stock components by various financial metrics and data such as performance";
pub const ANALYSIS_HEADING: &str = "Nifty Stocks Analysis/Comparison";
pub const WINDOW_W: f32 = 1400.0;
pub const WINDOW_H: f32 = 900.0;
