// src/data.rs
//
// Filter engine.
//
// - Selection:     the three user-chosen value sets (companies, sectors, ratings).
// - SelectionView: row indices into the shared RecordTable that pass the
//                  selection. Borrowed, no row cloning.

use std::collections::BTreeSet;

use crate::specs::constituents::{ANALYST_RATING, COMPANY, SECTOR};
use crate::store::{Constituent, RecordTable};

/// User filter. A row is kept iff all three memberships hold.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Selection {
    pub companies: BTreeSet<String>,
    pub sectors: BTreeSet<String>,
    pub ratings: BTreeSet<String>,
}

impl Selection {
    /// Every distinct value of every axis: the identity filter.
    pub fn all(table: &RecordTable) -> Self {
        Self {
            companies: table.distinct(COMPANY),
            sectors: table.distinct(SECTOR),
            ratings: table.distinct(ANALYST_RATING),
        }
    }

    pub fn keeps(&self, row: &Constituent) -> bool {
        self.companies.contains(&row.company)
            && self.sectors.contains(&row.sector)
            && self.ratings.contains(&row.analyst_rating)
    }
}

/// Indices of kept rows, in table order.
pub fn filter(table: &RecordTable, sel: &Selection) -> Vec<usize> {
    table
        .rows()
        .iter()
        .enumerate()
        .filter(|(_, r)| sel.keeps(r))
        .map(|(ix, _)| ix)
        .collect()
}

/// Zero-copy filtered view over the shared table.
#[derive(Clone, Debug)]
pub struct SelectionView<'a> {
    /// Positions of kept rows in the table
    pub row_ix: Vec<usize>,
    table: &'a RecordTable,
}

impl<'a> SelectionView<'a> {
    pub fn new(table: &'a RecordTable, sel: &Selection) -> Self {
        Self { row_ix: filter(table, sel), table }
    }

    /// The whole table, unfiltered.
    pub fn full(table: &'a RecordTable) -> Self {
        Self { row_ix: (0..table.len()).collect(), table }
    }

    /// Rebuild a view from indices computed earlier (GUI keeps these per frame).
    pub fn from_indices(table: &'a RecordTable, row_ix: Vec<usize>) -> Self {
        Self { row_ix, table }
    }

    pub fn len(&self) -> usize {
        self.row_ix.len()
    }

    pub fn is_empty(&self) -> bool {
        self.row_ix.is_empty()
    }

    /// Borrow a row by projected index.
    pub fn row(&self, i: usize) -> Option<&'a Constituent> {
        self.row_ix.get(i).and_then(|&ix| self.table.row(ix))
    }

    pub fn rows(&self) -> impl Iterator<Item = &'a Constituent> + '_ {
        self.row_ix.iter().filter_map(move |&ix| self.table.row(ix))
    }

    /// Every kept row whose Company equals `company`.
    pub fn find_company(&self, company: &str) -> Vec<&'a Constituent> {
        self.rows().filter(|r| r.company == company).collect()
    }
}
