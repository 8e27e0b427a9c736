// src/compare.rs
//
// Side-by-side comparison of two constituents.
// Pure: takes the filtered view + a pair of companies, returns four two-bar
// chart models. Drawing is the front end's job.

use crate::core::sanitize::group_thousands;
use crate::data::SelectionView;
use crate::error::{Error, Result};
use crate::specs::constituents::{CHANGE, DIV_YIELD_TTM, MARKET_CAP, VOLUME};
use crate::store::Constituent;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

pub const GREEN: Rgb = Rgb(0x00, 0x80, 0x00);
pub const RED: Rgb = Rgb(0xFF, 0x00, 0x00);
/// Two-step viridis.
pub const VIRIDIS: [Rgb; 2] = [Rgb(0x31, 0x68, 0x8E), Rgb(0x35, 0xB7, 0x79)];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Metric {
    MarketCap,
    Change,
    Volume,
    DivYield,
}

impl Metric {
    /// Grid order: row-major 2×2.
    pub const ALL: [Metric; 4] = [Metric::MarketCap, Metric::Change, Metric::Volume, Metric::DivYield];

    pub fn column(self) -> &'static str {
        match self {
            Metric::MarketCap => MARKET_CAP,
            Metric::Change => CHANGE,
            Metric::Volume => VOLUME,
            Metric::DivYield => DIV_YIELD_TTM,
        }
    }

    fn heading_name(self) -> &'static str {
        match self {
            Metric::MarketCap => "Market Cap",
            Metric::Change => "Change %",
            Metric::Volume => "Volume",
            Metric::DivYield => "Dividend Yield %",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Metric::MarketCap => "Market Capitalization of Companies",
            Metric::Change => "Change Percentage of Companies",
            Metric::Volume => "Stock Volume of Companies",
            Metric::DivYield => "Dividend Yield of Companies",
        }
    }

    pub fn y_label(self) -> &'static str {
        match self {
            Metric::MarketCap => "Market Cap (in Billion USD)",
            Metric::Change => "Change %",
            Metric::Volume => "Volume (in Million)",
            Metric::DivYield => "Div yield% TTM",
        }
    }

    /// Display multiplier applied before plotting.
    pub fn scale(self) -> f64 {
        match self {
            Metric::DivYield => 100.0,
            _ => 1.0,
        }
    }

    /// Charts that can dip below zero get a baseline.
    pub fn zero_line(self) -> bool {
        matches!(self, Metric::Change | Metric::DivYield)
    }

    /// Bar annotation for an already-scaled value.
    pub fn format(self, v: f64) -> String {
        match self {
            Metric::MarketCap | Metric::Volume => format!("{}M", group_thousands(v, 0)),
            Metric::Change => format!("{v:+.2}%"),
            Metric::DivYield => format!("{}%", group_thousands(v, 0)),
        }
    }

    fn color(self, slot: usize, v: f64) -> Rgb {
        match self {
            Metric::Change if v > 0.0 => GREEN,
            Metric::Change => RED,
            _ => VIRIDIS[slot % VIRIDIS.len()],
        }
    }
}

/// Two distinct companies, in the order picked.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ComparisonPair {
    first: String,
    second: String,
}

impl ComparisonPair {
    /// Picking the same company twice is rejected.
    pub fn new(first: impl Into<String>, second: impl Into<String>) -> Result<Self> {
        let (first, second) = (first.into(), second.into());
        if first == second {
            return Err(Error::SameCompany(first));
        }
        Ok(Self { first, second })
    }

    pub fn first(&self) -> &str {
        &self.first
    }

    pub fn second(&self) -> &str {
        &self.second
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Bar {
    pub company: String,
    pub value: f64,
    pub label: String,
    pub color: Rgb,
}

#[derive(Clone, Debug, PartialEq)]
pub struct BarChart {
    pub metric: Metric,
    pub heading: String,
    pub title: &'static str,
    pub x_label: &'static str,
    pub y_label: &'static str,
    pub bars: [Bar; 2],
    pub zero_line: bool,
}

impl BarChart {
    pub fn build(metric: Metric, a: &Constituent, b: &Constituent) -> Self {
        let bar = |slot: usize, row: &Constituent| {
            let value = row.number(metric.column()).unwrap_or_default() * metric.scale();
            Bar {
                company: row.company.clone(),
                value,
                label: metric.format(value),
                color: metric.color(slot, value),
            }
        };
        Self {
            metric,
            heading: format!(
                "Comparison of {} ({} vs {})",
                metric.heading_name(),
                a.company,
                b.company
            ),
            title: metric.title(),
            x_label: "Company",
            y_label: metric.y_label(),
            bars: [bar(0, a), bar(1, b)],
            zero_line: metric.zero_line(),
        }
    }

    /// (min, max) of the value axis, always including zero.
    pub fn value_range(&self) -> (f64, f64) {
        self.bars
            .iter()
            .fold((0.0_f64, 0.0_f64), |(lo, hi), b| (lo.min(b.value), hi.max(b.value)))
    }
}

/// Four charts for one pair, in `Metric::ALL` order.
#[derive(Clone, Debug, PartialEq)]
pub struct Comparison {
    pub pair: ComparisonPair,
    pub charts: Vec<BarChart>,
}

/// The single row for `company` in the view.
pub fn lookup<'a>(view: &SelectionView<'a>, company: &str) -> Result<&'a Constituent> {
    let hits = view.find_company(company);
    match hits.as_slice() {
        [one] => Ok(*one),
        [] => Err(Error::NoMatchingRow(company.to_string())),
        many => Err(Error::AmbiguousCompany {
            company: company.to_string(),
            count: many.len(),
        }),
    }
}

pub fn compare(view: &SelectionView<'_>, pair: &ComparisonPair) -> Result<Comparison> {
    let a = lookup(view, pair.first())?;
    let b = lookup(view, pair.second())?;
    let charts = Metric::ALL
        .iter()
        .map(|&m| BarChart::build(m, a, b))
        .collect();
    Ok(Comparison { pair: pair.clone(), charts })
}

/// Comparison from the two single-selects. Either may still be empty.
pub fn compare_picks(
    view: &SelectionView<'_>,
    first: Option<&str>,
    second: Option<&str>,
) -> Result<Comparison> {
    let (Some(a), Some(b)) = (first, second) else {
        return Err(Error::NoPick);
    };
    compare(view, &ComparisonPair::new(a, b)?)
}
