//! Minute parsing for natural-language preparation times.
//!
//! Catalog items carry `time_to_make` as display text ("20 minutes",
//! "~20-25 minutes", "2-3 hours (includes chilling)", "Ready to use").
//! Ranking needs a comparable lower bound in minutes, parsed on demand.

use std::sync::LazyLock;

use regex::Regex;

/// A number adjacent to a "min" unit, tolerating a trailing range
/// ("30-35 minutes" → 30) and hyphenated forms ("20-minute").
static MINUTES_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(\d+)\s*(?:-\s*\d+)?\s*-?\s*min").expect("minutes pattern is valid")
});

/// Same shape for an "hour" unit ("2-3 hours" → 2).
static HOURS_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(\d+)\s*(?:-\s*\d+)?\s*-?\s*hour").expect("hours pattern is valid")
});

/// Parse a natural-language preparation time into a lower-bound minute
/// count.
///
/// Minutes are preferred; failing that, hours are matched and multiplied
/// by 60. Ranges always contribute their first (lowest) number. Text with
/// no recognizable duration ("Ready to use") yields `None`, which search
/// treats as unconstrained by time filters.
///
/// ```rust
/// use sous_retrieval::parse_minutes;
///
/// assert_eq!(parse_minutes("30-35 minutes"), Some(30));
/// assert_eq!(parse_minutes("2-3 hours (includes chilling)"), Some(120));
/// assert_eq!(parse_minutes("Ready to use"), None);
/// ```
pub fn parse_minutes(text: &str) -> Option<u32> {
    let lower = text.to_lowercase();
    if let Some(captures) = MINUTES_RE.captures(&lower) {
        return captures[1].parse().ok();
    }
    HOURS_RE.captures(&lower).and_then(|c| c[1].parse().ok())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_plain_minutes() {
        assert_eq!(parse_minutes("20 minutes"), Some(20));
        assert_eq!(parse_minutes("5 minutes"), Some(5));
    }

    #[test]
    fn ranges_yield_the_lower_bound() {
        assert_eq!(parse_minutes("30-35 minutes"), Some(30));
        assert_eq!(parse_minutes("~20-25 minutes"), Some(20));
        assert_eq!(parse_minutes("5-10 minutes"), Some(5));
        assert_eq!(parse_minutes("45-50 minutes + chilling"), Some(45));
    }

    #[test]
    fn hours_convert_to_minutes() {
        assert_eq!(parse_minutes("2-3 hours (includes chilling)"), Some(120));
        assert_eq!(parse_minutes("1 hour"), Some(60));
    }

    #[test]
    fn minutes_win_over_hours_when_both_appear() {
        assert_eq!(parse_minutes("90 minutes (about 2 hours with chilling)"), Some(90));
    }

    #[test]
    fn unparseable_text_is_unconstrained() {
        assert_eq!(parse_minutes("Ready to use"), None);
        assert_eq!(parse_minutes(""), None);
        assert_eq!(parse_minutes("overnight"), None);
    }
}
