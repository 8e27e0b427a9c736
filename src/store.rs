// src/store.rs
//
// Table types and the process-wide table cache.
//
// - RawTable:    header labels + text cells, straight out of the extractor.
// - RecordTable: typed constituents, one per row. Immutable once built.
// - TableCache:  one-shot cell holding the shared RecordTable.

use std::collections::BTreeSet;
use std::sync::Arc;

use once_cell::sync::OnceCell;
use tracing::info;

use crate::config::options::FetchOptions;
use crate::error::Result;
use crate::progress::Progress;
use crate::specs::constituents::*;

/// Headers + text rows. Every row has `headers.len()` cells.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RawTable {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl RawTable {
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.headers.iter().position(|h| h == name)
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }
}

/// One index constituent.
#[derive(Clone, Debug, PartialEq)]
pub struct Constituent {
    pub company: String,
    pub sector: String,
    pub analyst_rating: String,
    pub market_cap: f64,
    pub price: f64,
    pub change: f64,
    pub volume: f64,
    pub rel_volume: f64,
    pub pe: f64,
    pub eps_dil_ttm: f64,
    pub eps_dil_growth: f64,
    pub div_yield_ttm: f64,
}

impl Constituent {
    /// Numeric field by canonical column name.
    pub fn number(&self, column: &str) -> Option<f64> {
        let v = match column {
            MARKET_CAP => self.market_cap,
            PRICE => self.price,
            CHANGE => self.change,
            VOLUME => self.volume,
            REL_VOLUME => self.rel_volume,
            PE => self.pe,
            EPS_DIL_TTM => self.eps_dil_ttm,
            EPS_DIL_GROWTH => self.eps_dil_growth,
            DIV_YIELD_TTM => self.div_yield_ttm,
            _ => return None,
        };
        Some(v)
    }

    /// Text field by canonical column name.
    pub fn text(&self, column: &str) -> Option<&str> {
        match column {
            COMPANY => Some(&self.company),
            SECTOR => Some(&self.sector),
            ANALYST_RATING => Some(&self.analyst_rating),
            _ => None,
        }
    }

    /// Display/export form of any canonical column.
    pub fn cell(&self, column: &str) -> String {
        self.text(column)
            .map(str::to_string)
            .or_else(|| self.number(column).map(|v| v.to_string()))
            .unwrap_or_default()
    }

    /// All cells in `CANONICAL_COLUMNS` order.
    pub fn to_record(&self) -> Vec<String> {
        CANONICAL_COLUMNS.iter().map(|c| self.cell(c)).collect()
    }
}

/// The canonical typed table. Rows keep page order.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RecordTable {
    rows: Vec<Constituent>,
}

impl RecordTable {
    pub fn new(rows: Vec<Constituent>) -> Self {
        Self { rows }
    }

    pub fn rows(&self) -> &[Constituent] {
        &self.rows
    }

    pub fn row(&self, ix: usize) -> Option<&Constituent> {
        self.rows.get(ix)
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn headers() -> &'static [&'static str] {
        &CANONICAL_COLUMNS
    }

    /// Sorted distinct values of a text column.
    pub fn distinct(&self, column: &str) -> BTreeSet<String> {
        self.rows
            .iter()
            .filter_map(|r| r.text(column))
            .map(str::to_string)
            .collect()
    }
}

/// Lazily built, shared, read-only table.
/// The loader runs at most once at a time; a failed load leaves the cell
/// empty so the error reaches the caller that triggered it.
pub struct TableCache {
    cell: OnceCell<Arc<RecordTable>>,
}

impl TableCache {
    pub const fn new() -> Self {
        Self { cell: OnceCell::new() }
    }

    pub fn get(&self) -> Option<Arc<RecordTable>> {
        self.cell.get().cloned()
    }

    pub fn get_or_load<F>(&self, load: F) -> Result<Arc<RecordTable>>
    where
        F: FnOnce() -> Result<RecordTable>,
    {
        self.cell
            .get_or_try_init(|| {
                let table = load()?;
                info!(rows = table.len(), "Cache: table stored");
                Ok(Arc::new(table))
            })
            .cloned()
    }
}

impl Default for TableCache {
    fn default() -> Self {
        Self::new()
    }
}

static SHARED: TableCache = TableCache::new();

/// Process-wide table: fetched and typed on first call, shared afterwards.
pub fn shared_table(
    opts: &FetchOptions,
    progress: Option<&mut dyn Progress>,
) -> Result<Arc<RecordTable>> {
    SHARED.get_or_load(|| crate::pipeline::load_table(opts, progress))
}
