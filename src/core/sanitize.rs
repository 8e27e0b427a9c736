// src/core/sanitize.rs

/// Join text fragments the way the cell reads on screen, minus layout noise:
/// each fragment trimmed, empty fragments dropped, no separator.
pub fn join_stripped<'a, I>(fragments: I) -> String
where
    I: IntoIterator<Item = &'a str>,
{
    fragments
        .into_iter()
        .map(str::trim)
        .filter(|f| !f.is_empty())
        .collect()
}

/// Leading token up to the first ASCII space.
/// Only U+0020 splits: the site separates units with U+202F, and the column
/// rules rely on seeing those.
pub fn first_token(s: &str) -> &str {
    s.split(' ').next().unwrap_or("")
}

/// Group the integer part with commas: 1234567.0 → "1,234,567".
pub fn group_thousands(v: f64, decimals: usize) -> String {
    let formatted = format!("{:.*}", decimals, v.abs());
    let (int_part, frac_part) = match formatted.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (formatted.as_str(), None),
    };

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3 + 2);
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    let mut out = String::new();
    if v.is_sign_negative() && formatted.chars().any(|c| c != '0' && c != '.') {
        out.push('-');
    }
    out.push_str(&grouped);
    if let Some(f) = frac_part {
        out.push('.');
        out.push_str(f);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_token_keeps_narrow_nbsp() {
        assert_eq!(first_token("1,234.5 BUSD"), "1,234.5");
        assert_eq!(first_token("4.21\u{202F}M"), "4.21\u{202F}M");
        assert_eq!(first_token(""), "");
    }

    #[test]
    fn join_drops_blank_fragments() {
        assert_eq!(join_stripped(["  12.3 ", "\n", "USD"]), "12.3USD");
    }

    #[test]
    fn grouping() {
        assert_eq!(group_thousands(100.0, 0), "100");
        assert_eq!(group_thousands(1234.4, 0), "1,234");
        assert_eq!(group_thousands(1234567.891, 2), "1,234,567.89");
        assert_eq!(group_thousands(-9876.0, 0), "-9,876");
        assert_eq!(group_thousands(-0.2, 0), "0");
    }
}
