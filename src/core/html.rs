// src/core/html.rs
//
// Table extraction. The cell heuristic is tied to one page layout, so it sits
// behind `TableExtractor`; the typing and filtering code only see `RawTable`.

use once_cell::sync::Lazy;
use scraper::{ElementRef, Html, Selector};
use tracing::debug;

use super::sanitize::{first_token, join_stripped};
use crate::error::{Error, Result};
use crate::store::RawTable;

static TABLE: Lazy<Selector> = Lazy::new(|| Selector::parse("table").expect("table selector"));
static TH: Lazy<Selector> = Lazy::new(|| Selector::parse("th").expect("th selector"));
static TR: Lazy<Selector> = Lazy::new(|| Selector::parse("tr").expect("tr selector"));
static TD: Lazy<Selector> = Lazy::new(|| Selector::parse("td").expect("td selector"));
static A: Lazy<Selector> = Lazy::new(|| Selector::parse("a").expect("a selector"));

/// Turns a page into header labels + raw text rows.
pub trait TableExtractor {
    fn extract(&self, html: &str) -> Result<RawTable>;
}

/// First `<table>` in the document.
/// - headers: every `<th>`, in document order
/// - rows: every `<tr>` after the first
/// - cell: link text if the cell has an `<a>`, otherwise the visible text
///   (without `<sup>`) cut at the first space
#[derive(Clone, Copy, Debug, Default)]
pub struct FirstTable;

impl TableExtractor for FirstTable {
    fn extract(&self, html: &str) -> Result<RawTable> {
        let doc = Html::parse_document(html);
        let table = doc.select(&TABLE).next().ok_or(Error::NoTable)?;

        let headers: Vec<String> = table
            .select(&TH)
            .map(|th| th.text().collect::<String>().trim().to_string())
            .collect();
        if headers.is_empty() {
            return Err(Error::NoHeaders);
        }

        let mut rows = Vec::new();
        for (i, tr) in table.select(&TR).skip(1).enumerate() {
            let cells: Vec<String> = tr.select(&TD).map(cell_text).collect();
            if cells.len() != headers.len() {
                return Err(Error::RowShape {
                    row: i + 1,
                    got: cells.len(),
                    expected: headers.len(),
                });
            }
            rows.push(cells);
        }

        debug!(headers = headers.len(), rows = rows.len(), "Extract: table read");
        Ok(RawTable { headers, rows })
    }
}

fn cell_text(td: ElementRef<'_>) -> String {
    if let Some(a) = td.select(&A).next() {
        return a.text().collect::<String>().trim().to_string();
    }
    let visible = join_stripped(visible_fragments(td));
    first_token(&visible).to_string()
}

/// Text nodes under `el`, skipping anything inside `<sup>`.
fn visible_fragments<'a>(el: ElementRef<'a>) -> impl Iterator<Item = &'a str> + 'a {
    el.descendants().filter_map(move |node| {
        let text = node.value().as_text()?;
        let in_sup = node
            .ancestors()
            .take_while(|anc| anc.id() != el.id())
            .any(|anc| anc.value().as_element().is_some_and(|e| e.name() == "sup"));
        (!in_sup).then_some(&**text)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn one_cell(td: &str) -> String {
        let html = format!("<table><tr><th>X</th></tr><tr>{td}</tr></table>");
        let t = FirstTable.extract(&html).unwrap();
        t.rows[0][0].clone()
    }

    #[test]
    fn link_text_wins() {
        assert_eq!(one_cell("<td><a href='/x'>RELIANCE</a> Reliance Industries</td>"), "RELIANCE");
    }

    #[test]
    fn sup_is_ignored_and_annotation_cut() {
        assert_eq!(one_cell("<td>1,234.5 <sup>1</sup>BUSD</td>"), "1,234.5BUSD");
        assert_eq!(one_cell("<td><span>12.3 USD</span></td>"), "12.3");
        assert_eq!(one_cell("<td>Finance<sup>*</sup></td>"), "Finance");
    }

    #[test]
    fn missing_table() {
        assert!(matches!(FirstTable.extract("<p>nothing</p>"), Err(Error::NoTable)));
    }

    #[test]
    fn shape_mismatch_is_fatal() {
        let html = "<table><tr><th>A</th><th>B</th></tr><tr><td>1</td></tr></table>";
        match FirstTable.extract(html) {
            Err(Error::RowShape { row, got, expected }) => {
                assert_eq!((row, got, expected), (1, 1, 2));
            }
            other => panic!("unexpected: {other:?}"),
        }
    }
}
