// tests/common/mod.rs
//
// Shared helpers: the saved page and a quick row builder.
#![allow(dead_code)]

use nifty_stats::store::{Constituent, RecordTable};

pub const FIXTURE: &str = include_str!("../fixtures/components.html");

pub fn fixture_table() -> RecordTable {
    nifty_stats::pipeline::build_table(FIXTURE).expect("fixture builds")
}

/// Row with the three text fields set and every number zero.
pub fn row(company: &str, sector: &str, rating: &str) -> Constituent {
    Constituent {
        company: company.into(),
        sector: sector.into(),
        analyst_rating: rating.into(),
        market_cap: 0.0,
        price: 0.0,
        change: 0.0,
        volume: 0.0,
        rel_volume: 0.0,
        pe: 0.0,
        eps_dil_ttm: 0.0,
        eps_dil_growth: 0.0,
        div_yield_ttm: 0.0,
    }
}
