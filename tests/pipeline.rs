// tests/pipeline.rs
//
// Saved page → typed table, plus the failure modes that must stay fatal.

mod common;

use nifty_stats::core::{FirstTable, TableExtractor};
use nifty_stats::error::Error;
use nifty_stats::pipeline::{build_table, coerce_cell, normalize_headers, type_table};
use nifty_stats::specs::constituents::*;
use nifty_stats::store::RecordTable;

use common::{FIXTURE, fixture_table};

#[test]
fn fixture_types_every_row() {
    let t = fixture_table();
    assert_eq!(t.len(), 5);

    let companies: Vec<&str> = t.rows().iter().map(|r| r.company.as_str()).collect();
    assert_eq!(companies, ["RELIANCE", "TCS", "HDFCBANK", "ADANIENT", "INFY"]);

    let rel = &t.rows()[0];
    assert_eq!(rel.market_cap, 238.45);
    assert_eq!(rel.price, 2950.1);
    assert_eq!(rel.change, 1.52);
    assert_eq!(rel.volume, 4.21);
    assert_eq!(rel.eps_dil_growth, 1204.55);
    assert_eq!(rel.div_yield_ttm, 0.34);
    assert_eq!(rel.sector, "Energy Minerals");
    assert_eq!(rel.analyst_rating, "Buy");

    let tcs = &t.rows()[1];
    assert_eq!(tcs.change, -0.84);
    assert_eq!(tcs.volume, 812.3);
    assert_eq!(tcs.eps_dil_growth, -2.1);

    // em dash reads as zero
    let adani = &t.rows()[3];
    assert_eq!((adani.pe, adani.eps_dil_ttm, adani.eps_dil_growth), (0.0, 0.0, 0.0));
    assert_eq!(adani.analyst_rating, "Neutral");

    assert_eq!(t.rows()[4].eps_dil_ttm, -1.2);

    for r in t.rows() {
        for col in CANONICAL_COLUMNS.iter().filter(|c| !is_text_column(c)) {
            assert!(r.number(col).is_some_and(f64::is_finite), "{} {col}", r.company);
        }
    }
}

#[test]
fn extractor_reads_site_labels() {
    let raw = FirstTable.extract(FIXTURE).unwrap();
    assert_eq!(raw.headers.len(), 12);
    assert_eq!(raw.headers[0], "Symbol");
    assert_eq!(raw.headers[3], "Change %");
    assert!(raw.rows.iter().all(|r| r.len() == raw.headers.len()));
}

#[test]
fn normalize_is_idempotent() {
    let mut h: Vec<String> = ["Symbol", "Change %", "Div yield %TTM", "Analyst Rating", "Price", "Other"]
        .map(String::from)
        .to_vec();
    normalize_headers(&mut h);
    let once = h.clone();
    normalize_headers(&mut h);
    assert_eq!(h, once);
    assert_eq!(once, [COMPANY, CHANGE, DIV_YIELD_TTM, ANALYST_RATING, PRICE, "Other"]);
}

#[test]
fn headers_come_out_canonical() {
    assert_eq!(
        RecordTable::headers(),
        [
            "Company", "Market cap", "Price", "Change", "Volume", "Rel Volume", "P/E",
            "EPS dilTTM", "EPS dil growthTTM YoY", "DivyieldTTM", "Sector", "AnalystRating",
        ]
    );
}

#[test]
fn decorated_numbers_parse_back() {
    // Numbers written the way the page decorates them.
    let samples = [0.0, 0.5, 1.0, 12.34, 999.99, 1234.5, 98765.43];
    for v in samples {
        let grouped = nifty_stats::core::sanitize::group_thousands(v, 2);
        for (col, text) in [
            (MARKET_CAP, format!("{grouped} BUSD")),
            (PRICE, format!("{grouped}INR")),
            (CHANGE, format!("−{v}%")),
            (VOLUME, format!("{v}\u{202F}M")),
            (EPS_DIL_GROWTH, format!("+{grouped}%")),
            (DIV_YIELD_TTM, format!("{v}%")),
        ] {
            let got = coerce_cell(col, 1, &text).unwrap();
            let want = if col == CHANGE { -v } else { v };
            assert!((got - want).abs() < 1e-9, "{col}: {text} → {got}");
        }
    }
}

#[test]
fn leftover_units_are_errors() {
    assert!(coerce_cell(PRICE, 1, "12.0 USD").is_err());
    assert!(coerce_cell(REL_VOLUME, 1, "").is_err());
    assert!(coerce_cell(MARKET_CAP, 1, "—").is_err());
}

#[test]
fn bad_cell_names_row_and_column() {
    let html = FIXTURE.replace("0.95", "high");
    match build_table(&html) {
        Err(Error::Coerce { column, row, raw }) => {
            assert_eq!(column, REL_VOLUME);
            assert_eq!(row, 3);
            assert_eq!(raw, "high");
        }
        other => panic!("unexpected: {other:?}"),
    }
}

#[test]
fn missing_column_is_fatal() {
    let mut raw = FirstTable.extract(FIXTURE).unwrap();
    normalize_headers(&mut raw.headers);
    raw.headers[10] = "Industry".into();
    match type_table(&raw) {
        Err(Error::MissingColumn(c)) => assert_eq!(c, SECTOR),
        other => panic!("unexpected: {other:?}"),
    }
}

#[test]
fn extra_columns_are_dropped() {
    let mut raw = FirstTable.extract(FIXTURE).unwrap();
    normalize_headers(&mut raw.headers);
    raw.headers.push("Employees".into());
    for r in raw.rows.iter_mut() {
        r.push("1000".into());
    }
    let t = type_table(&raw).unwrap();
    assert_eq!(t.len(), 5);
    assert_eq!(t.rows()[0].to_record().len(), CANONICAL_COLUMNS.len());
}

#[test]
fn typing_rejects_short_rows() {
    let mut raw = FirstTable.extract(FIXTURE).unwrap();
    normalize_headers(&mut raw.headers);
    raw.rows[0].truncate(10);
    assert!(matches!(
        type_table(&raw),
        Err(Error::RowShape { row: 1, got: 10, expected: 12 })
    ));
}

#[test]
fn page_without_table() {
    assert!(matches!(build_table("<html><body>maintenance</body></html>"), Err(Error::NoTable)));
}

#[test]
fn table_without_headers() {
    let html = "<table><tr><td>RELIANCE</td></tr></table>";
    assert!(matches!(build_table(html), Err(Error::NoHeaders)));
}

#[test]
fn short_row_is_fatal() {
    let html = FIXTURE.replacen("<td>0.87</td>", "", 1);
    assert!(matches!(
        build_table(&html),
        Err(Error::RowShape { row: 1, got: 11, expected: 12 })
    ));
}
