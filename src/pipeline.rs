// src/pipeline.rs
//
// fetch → extract → normalize → type
//
// `load_table` is the network entry point; `build_table` does the rest and is
// what tests and `--html` use on saved pages.

use tracing::{debug, error, info};

use crate::{
    config::options::FetchOptions,
    core::{
        html::{FirstTable, TableExtractor},
        net,
    },
    error::{Error, Result},
    progress::{NullProgress, Progress, Stage},
    specs::constituents::{self, *},
    store::{Constituent, RawTable, RecordTable},
};

/// Fetch the page and build the typed table.
pub fn load_table(opts: &FetchOptions, progress: Option<&mut dyn Progress>) -> Result<RecordTable> {
    let mut null = NullProgress;
    let p: &mut dyn Progress = match progress {
        Some(p) => p,
        None => &mut null,
    };

    p.begin(Stage::ALL.len());
    p.log("Fetching constituents…");

    let res = net::http_get(opts).and_then(|html| {
        p.stage_done(Stage::Fetch);
        build_table_with(&FirstTable, &html, &mut *p)
    });

    if let Err(e) = &res {
        error!("Load: {e}");
    }
    p.finish();
    res
}

/// Build from already-fetched markup with the default extractor.
pub fn build_table(html: &str) -> Result<RecordTable> {
    build_table_with(&FirstTable, html, &mut NullProgress)
}

pub fn build_table_with(
    extractor: &dyn TableExtractor,
    html: &str,
    progress: &mut dyn Progress,
) -> Result<RecordTable> {
    let mut raw = extractor.extract(html)?;
    progress.stage_done(Stage::Extract);

    normalize_headers(&mut raw.headers);
    progress.stage_done(Stage::Normalize);

    let table = type_table(&raw)?;
    progress.stage_done(Stage::Type);

    info!(rows = table.len(), "Load: table ready");
    Ok(table)
}

/// Rename site labels to canonical names, in place. Idempotent.
pub fn normalize_headers(headers: &mut [String]) {
    for h in headers.iter_mut() {
        if let Some(canon) = constituents::rename_for(h) {
            debug!("Normalize: '{}' → '{}'", h, canon);
            *h = canon.to_string();
        }
    }
}

/// Coerce one raw cell of a numeric column. `row` is 1-based, for messages.
pub fn coerce_cell(column: &str, row: usize, raw: &str) -> Result<f64> {
    constituents::rule_for(column)
        .and_then(|rule| rule.coerce(raw))
        .ok_or_else(|| Error::Coerce {
            column: column.to_string(),
            row,
            raw: raw.to_string(),
        })
}

/// Apply the typing rules to a normalized raw table.
pub fn type_table(raw: &RawTable) -> Result<RecordTable> {
    let mut ix = [0usize; CANONICAL_COLUMNS.len()];
    for (slot, col) in ix.iter_mut().zip(CANONICAL_COLUMNS) {
        *slot = raw
            .column_index(col)
            .ok_or_else(|| Error::MissingColumn(col.to_string()))?;
    }

    for h in &raw.headers {
        if !CANONICAL_COLUMNS.contains(&h.as_str()) {
            debug!("Type: dropping unknown column '{}'", h);
        }
    }

    // Any extractor can feed this; shape is checked here too.
    for (i, cells) in raw.rows.iter().enumerate() {
        if cells.len() != raw.headers.len() {
            return Err(Error::RowShape {
                row: i + 1,
                got: cells.len(),
                expected: raw.headers.len(),
            });
        }
    }

    let mut rows = Vec::with_capacity(raw.row_count());
    for (i, cells) in raw.rows.iter().enumerate() {
        let row = i + 1;
        let num = |col: &str| coerce_cell(col, row, cell_at(cells, &ix, col));

        rows.push(Constituent {
            company: cell_at(cells, &ix, COMPANY).to_string(),
            sector: cell_at(cells, &ix, SECTOR).to_string(),
            analyst_rating: cell_at(cells, &ix, ANALYST_RATING).to_string(),
            market_cap: num(MARKET_CAP)?,
            price: num(PRICE)?,
            change: num(CHANGE)?,
            volume: num(VOLUME)?,
            rel_volume: num(REL_VOLUME)?,
            pe: num(PE)?,
            eps_dil_ttm: num(EPS_DIL_TTM)?,
            eps_dil_growth: num(EPS_DIL_GROWTH)?,
            div_yield_ttm: num(DIV_YIELD_TTM)?,
        });
    }

    Ok(RecordTable::new(rows))
}

/// Cell for canonical column `col`, via the resolved column positions.
/// Rows are shape-checked and `col` is canonical, so both indexes hold.
fn cell_at<'r>(cells: &'r [String], ix: &[usize; CANONICAL_COLUMNS.len()], col: &str) -> &'r str {
    let pos = CANONICAL_COLUMNS
        .iter()
        .position(|c| *c == col)
        .unwrap_or_default();
    &cells[ix[pos]]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn concrete_cells() {
        assert_eq!(coerce_cell(MARKET_CAP, 1, "1,234.5 BUSD").unwrap(), 1234.5);
        assert_eq!(coerce_cell(CHANGE, 1, "−3.2%").unwrap(), -3.2);
        assert_eq!(coerce_cell(PE, 1, "—").unwrap(), 0.0);
        assert_eq!(coerce_cell(EPS_DIL_TTM, 1, "12.3 USD").unwrap(), 12.3);
        assert_eq!(coerce_cell(PRICE, 1, "2,950.10INR").unwrap(), 2950.1);
    }

    #[test]
    fn residual_text_is_an_error() {
        let err = coerce_cell(REL_VOLUME, 7, "n/a").unwrap_err();
        match err {
            Error::Coerce { column, row, raw } => {
                assert_eq!(column, REL_VOLUME);
                assert_eq!(row, 7);
                assert_eq!(raw, "n/a");
            }
            other => panic!("unexpected: {other:?}"),
        }
        assert!(coerce_cell(PE, 1, "inf").is_err());
        assert!(coerce_cell(DIV_YIELD_TTM, 1, "NaN%").is_err());
    }

    #[test]
    fn text_columns_have_no_numeric_rule() {
        assert!(coerce_cell(COMPANY, 1, "1").is_err());
    }
}
