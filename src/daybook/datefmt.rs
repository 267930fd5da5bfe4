//! Date-heading label formatting.
//!
//! Heading patterns use Moment-style tokens (`YYYY-MM-DD (ddd)` by
//! default) because that is what journal users configure elsewhere; the
//! tokens are translated to strftime and rendered through chrono's
//! localized formatter. Unknown characters pass through as literals and
//! `%` is escaped, so formatting is total: no pattern can make it fail.

use crate::config::JournalSettings;
use chrono::{Local, Locale, NaiveDate};

/// Longest-match token table, ordered so prefixes never shadow longer
/// tokens (e.g. `MMMM` before `MM` before `M`).
const TOKENS: &[(&str, &str)] = &[
    ("YYYY", "%Y"),
    ("YY", "%y"),
    ("MMMM", "%B"),
    ("MMM", "%b"),
    ("MM", "%m"),
    ("M", "%-m"),
    ("dddd", "%A"),
    ("ddd", "%a"),
    ("DD", "%d"),
    ("D", "%-d"),
    ("HH", "%H"),
    ("mm", "%M"),
    ("ss", "%S"),
];

/// Translates a Moment-style pattern into a strftime pattern.
pub fn to_strftime(pattern: &str) -> String {
    let mut out = String::with_capacity(pattern.len());
    let mut rest = pattern;

    'outer: while !rest.is_empty() {
        for (token, strftime) in TOKENS {
            if let Some(tail) = rest.strip_prefix(token) {
                out.push_str(strftime);
                rest = tail;
                continue 'outer;
            }
        }
        let ch = rest.chars().next().unwrap();
        if ch == '%' {
            out.push_str("%%");
        } else {
            out.push(ch);
        }
        rest = &rest[ch.len_utf8()..];
    }

    out
}

/// Formats a date with the given Moment-style pattern and locale.
pub fn format_label(date: NaiveDate, pattern: &str, locale: Locale) -> String {
    date.format_localized(&to_strftime(pattern), locale)
        .to_string()
}

/// The heading label for today, per the configured format and locale.
pub fn today_label(settings: &JournalSettings) -> String {
    format_label(
        Local::now().date_naive(),
        &settings.heading_date_format,
        resolve_locale(settings.locale.as_deref()),
    )
}

/// Resolves the formatting locale: the explicit setting when present,
/// else the ambient system locale, else en-US. Unrecognized tags fall
/// back rather than erroring.
pub fn resolve_locale(explicit: Option<&str>) -> Locale {
    explicit
        .map(str::to_owned)
        .or_else(ambient_locale_tag)
        .and_then(|tag| parse_locale(&tag))
        .unwrap_or(Locale::en_US)
}

fn ambient_locale_tag() -> Option<String> {
    ["LC_ALL", "LC_TIME", "LANG"]
        .iter()
        .find_map(|key| std::env::var(key).ok().filter(|v| !v.is_empty()))
}

fn parse_locale(tag: &str) -> Option<Locale> {
    // Accept both "fr-FR" and "fr_FR.UTF-8" spellings.
    let tag = tag.split('.').next().unwrap_or(tag).replace('-', "_");
    Locale::try_from(tag.as_str()).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()
    }

    #[test]
    fn test_default_pattern_translation() {
        assert_eq!(to_strftime("YYYY-MM-DD (ddd)"), "%Y-%m-%d (%a)");
    }

    #[test]
    fn test_percent_is_escaped() {
        assert_eq!(to_strftime("100% D"), "100%% %-d");
    }

    #[test]
    fn test_default_pattern_rendering() {
        let label = format_label(date(), "YYYY-MM-DD (ddd)", Locale::en_US);
        assert_eq!(label, "2024-01-01 (Mon)");
    }

    #[test]
    fn test_unpadded_tokens() {
        assert_eq!(format_label(date(), "D/M/YYYY", Locale::en_US), "1/1/2024");
    }

    #[test]
    fn test_month_and_weekday_names() {
        assert_eq!(
            format_label(date(), "dddd, MMMM D", Locale::en_US),
            "Monday, January 1"
        );
    }

    #[test]
    fn test_localized_month_name() {
        assert_eq!(format_label(date(), "MMMM", Locale::fr_FR), "janvier");
    }

    #[test]
    fn test_explicit_locale_with_region_dash() {
        // BCP 47 spelling is normalized to the POSIX one.
        assert_eq!(resolve_locale(Some("fr-FR")), Locale::fr_FR);
    }

    #[test]
    fn test_unknown_locale_falls_back() {
        assert_eq!(resolve_locale(Some("zz-ZZ")), Locale::en_US);
    }
}
