// src/specs/constituents.rs
//
// NIFTY 50 components table on in.tradingview.com.
//
// Site headers (in page order):
//   Symbol, Market cap, Price, Change %, Volume, Rel Volume, P/E,
//   EPS dilTTM, EPS dil growthTTM YoY, Div yield %TTM, Sector, Analyst Rating
//
// Cells arrive already reduced to one token by the extractor, e.g.
//   "1,234.5 BUSD" (Market cap), "−3.2%" (Change), "4.21\u{202F}M" (Volume), "—" (P/E)

use super::{ColumnRule, Subst};

pub const COMPANY: &str = "Company";
pub const SECTOR: &str = "Sector";
pub const ANALYST_RATING: &str = "AnalystRating";

pub const PRICE: &str = "Price";
pub const CHANGE: &str = "Change";
pub const MARKET_CAP: &str = "Market cap";
pub const VOLUME: &str = "Volume";
pub const REL_VOLUME: &str = "Rel Volume";
pub const PE: &str = "P/E";
pub const EPS_DIL_TTM: &str = "EPS dilTTM";
pub const EPS_DIL_GROWTH: &str = "EPS dil growthTTM YoY";
pub const DIV_YIELD_TTM: &str = "DivyieldTTM";

/// Site label → canonical name. Exact match only.
pub const RENAMES: &[(&str, &str)] = &[
    ("Symbol", COMPANY),
    ("Analyst Rating", ANALYST_RATING),
    ("Change %", CHANGE),
    ("Div yield %TTM", DIV_YIELD_TTM),
];

/// Canonical column order for the typed table and for CSV export.
pub const CANONICAL_COLUMNS: [&str; 12] = [
    COMPANY,
    MARKET_CAP,
    PRICE,
    CHANGE,
    VOLUME,
    REL_VOLUME,
    PE,
    EPS_DIL_TTM,
    EPS_DIL_GROWTH,
    DIV_YIELD_TTM,
    SECTOR,
    ANALYST_RATING,
];

pub const TEXT_COLUMNS: [&str; 3] = [COMPANY, SECTOR, ANALYST_RATING];

const EM_DASH: &str = "—";
const MINUS: &str = "−";

/// Numeric columns and how to read them.
pub const TYPING_RULES: &[ColumnRule] = &[
    ColumnRule {
        column: EPS_DIL_GROWTH,
        substs: &[
            Subst::replace(EM_DASH, "0"),
            Subst::remove("%"),
            Subst::replace(MINUS, "-"),
            Subst::remove("+"),
            Subst::remove(","),
        ],
    },
    ColumnRule {
        column: MARKET_CAP,
        substs: &[
            Subst::remove("BUSD"),
            Subst::StripWhitespace,
            Subst::remove(","),
        ],
    },
    ColumnRule {
        column: PRICE,
        substs: &[Subst::remove("INR"), Subst::remove(",")],
    },
    ColumnRule {
        column: CHANGE,
        substs: &[Subst::remove("%"), Subst::replace(MINUS, "-")],
    },
    ColumnRule {
        column: VOLUME,
        substs: &[
            Subst::remove("\u{202F}K"),
            Subst::remove("M"),
            Subst::StripWhitespace,
        ],
    },
    ColumnRule {
        column: REL_VOLUME,
        substs: &[],
    },
    ColumnRule {
        column: PE,
        substs: &[Subst::replace(EM_DASH, "0")],
    },
    ColumnRule {
        column: EPS_DIL_TTM,
        substs: &[
            Subst::replace(EM_DASH, "0"),
            Subst::remove("USD"),
            Subst::replace(MINUS, "-"),
        ],
    },
    ColumnRule {
        column: DIV_YIELD_TTM,
        substs: &[Subst::remove("%")],
    },
];

pub fn rule_for(column: &str) -> Option<&'static ColumnRule> {
    TYPING_RULES.iter().find(|r| r.column == column)
}

/// Canonical name for a site header label, if it is one of the renamed ones.
pub fn rename_for(label: &str) -> Option<&'static str> {
    RENAMES
        .iter()
        .find(|(from, _)| *from == label)
        .map(|(_, to)| *to)
}

/// Canonical name for a site header label. Unknown labels pass through.
pub fn canonical_name(label: &str) -> &str {
    rename_for(label).unwrap_or(label)
}

pub fn is_text_column(name: &str) -> bool {
    TEXT_COLUMNS.contains(&name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_non_text_canonical_column_has_a_rule() {
        for c in CANONICAL_COLUMNS {
            assert!(is_text_column(c) ^ rule_for(c).is_some(), "{c}");
        }
        assert_eq!(TYPING_RULES.len(), CANONICAL_COLUMNS.len() - TEXT_COLUMNS.len());
    }

    #[test]
    fn renames_are_case_sensitive() {
        assert_eq!(canonical_name("Symbol"), "Company");
        assert_eq!(canonical_name("symbol"), "symbol");
        assert_eq!(canonical_name("Sector"), "Sector");
    }

    #[test]
    fn eps_growth_rule_order() {
        let r = rule_for(EPS_DIL_GROWTH).unwrap();
        assert_eq!(r.clean("+1,204.55%"), "1204.55");
        assert_eq!(r.clean("−12.3%"), "-12.3");
        assert_eq!(r.clean("—"), "0");
    }

    #[test]
    fn volume_drops_thousand_marker_and_millions_suffix() {
        let r = rule_for(VOLUME).unwrap();
        assert_eq!(r.coerce("4.21\u{202F}M"), Some(4.21));
        assert_eq!(r.coerce("812.3\u{202F}K"), Some(812.3));
    }
}
