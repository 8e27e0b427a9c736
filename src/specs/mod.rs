//! # Page specs
//!
//! Knowledge about the *shape* of the scraped page lives here, as data:
//!
//! - which header labels get renamed to canonical column names,
//! - which canonical columns are text and which are numeric,
//! - the ordered text substitutions that turn a numeric cell into an `f64`.
//!
//! Nothing in this module touches the network or the HTML parser. The
//! extractor (`core::html`) hands over raw header labels and cells; the
//! pipeline looks up the rules here by canonical column name.
//!
//! ## Conventions
//! - Renames are **exact and case-sensitive**. Unknown labels pass through.
//! - Substitutions run **in list order**. Order matters when one cell could
//!   contain several symbols (e.g. `−` before `+` removal).
//! - After substitution the remainder is trimmed and parsed; anything left over
//!   that is not a number is an error, never a silent zero.

pub mod constituents;

/// One text rewrite step in a column rule.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Subst {
    /// Replace every occurrence of `from` with `to`.
    Replace { from: &'static str, to: &'static str },
    /// Drop every Unicode whitespace char (ASCII space, NBSP, U+202F, …).
    StripWhitespace,
}

impl Subst {
    pub const fn remove(from: &'static str) -> Self {
        Subst::Replace { from, to: "" }
    }

    pub const fn replace(from: &'static str, to: &'static str) -> Self {
        Subst::Replace { from, to }
    }

    pub fn apply(&self, s: &str) -> String {
        match *self {
            Subst::Replace { from, to } => s.replace(from, to),
            Subst::StripWhitespace => s.chars().filter(|c| !c.is_whitespace()).collect(),
        }
    }
}

/// Typing rule for one numeric column: canonical name + ordered substitutions.
#[derive(Clone, Copy, Debug)]
pub struct ColumnRule {
    pub column: &'static str,
    pub substs: &'static [Subst],
}

impl ColumnRule {
    /// Run the substitutions in order. Does not parse.
    pub fn clean(&self, raw: &str) -> String {
        self.substs
            .iter()
            .fold(raw.to_string(), |acc, step| step.apply(&acc))
    }

    /// Clean, then parse as a finite float.
    /// Surrounding whitespace is ignored; `inf`/`NaN` are rejected.
    pub fn coerce(&self, raw: &str) -> Option<f64> {
        let cleaned = self.clean(raw);
        let v: f64 = cleaned.trim().parse().ok()?;
        v.is_finite().then_some(v)
    }
}
