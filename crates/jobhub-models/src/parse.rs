//! Tolerant parsers for the free-text job fields.
//!
//! Job postings carry experience, salary and location as the employer typed
//! them. Filtering needs numbers and a canonical city, so these parsers turn
//! the text into values and fall back to a fixed default instead of failing:
//! - experience: `0` when unparseable
//! - salary: `[0, 0]` when unparseable

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

/// One lakh: salary figures are divided by this to get LPA.
pub const LPA_UNIT: f64 = 100_000.0;

static EXPERIENCE_RANGE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([0-9]+)-([0-9]+)").expect("valid experience regex"));

static SALARY_RANGE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"₹([0-9,]+)\s*-\s*₹([0-9,]+)").expect("valid salary regex"));

/// Salary bounds in lakhs per annum.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct SalaryRange {
    pub min_lpa: f64,
    pub max_lpa: f64,
}

impl SalaryRange {
    pub const fn new(min_lpa: f64, max_lpa: f64) -> Self {
        Self { min_lpa, max_lpa }
    }

    /// True when the two closed ranges share at least one point.
    pub fn overlaps(&self, min: f64, max: f64) -> bool {
        !(self.min_lpa > max || self.max_lpa < min)
    }
}

/// Reduce an experience requirement to one representative number of years.
///
/// - `"5+"`, `"5+ years"` → `5`
/// - `"2-5 years"` → `3.5` (mean of the bounds)
/// - anything else → `0`
///
/// # Examples
/// ```
/// use jobhub_models::parse_experience;
/// assert_eq!(parse_experience("5+"), 5.0);
/// assert_eq!(parse_experience("2-5"), 3.5);
/// assert_eq!(parse_experience("garbage"), 0.0);
/// ```
pub fn parse_experience(experience: &str) -> f64 {
    if experience.is_empty() {
        return 0.0;
    }

    if experience.contains('+') {
        return leading_integer(experience).map(|n| n as f64).unwrap_or(0.0);
    }

    EXPERIENCE_RANGE
        .captures(experience)
        .and_then(|caps| {
            let min: f64 = caps[1].parse().ok()?;
            let max: f64 = caps[2].parse().ok()?;
            Some((min + max) / 2.0)
        })
        .unwrap_or(0.0)
}

/// Parse `"₹6,00,000 - ₹10,00,000"` into LPA bounds (`[6, 10]`).
///
/// Digit grouping commas are ignored. Unparseable input yields `[0, 0]`.
pub fn parse_salary(salary: &str) -> SalaryRange {
    SALARY_RANGE
        .captures(salary)
        .map(|caps| SalaryRange::new(rupees_to_lpa(&caps[1]), rupees_to_lpa(&caps[2])))
        .unwrap_or_default()
}

/// City part of a `"City, Region"` location: text before the first comma, trimmed.
pub fn canonical_city(location: &str) -> &str {
    location.split(',').next().unwrap_or_default().trim()
}

/// Split comma-separated skill input into trimmed, non-empty entries.
pub fn normalize_skills(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

/// Lower-case and drop all whitespace, for search comparisons.
pub fn normalize_search(text: &str) -> String {
    text.chars()
        .filter(|c| !c.is_whitespace())
        .flat_map(char::to_lowercase)
        .collect()
}

fn rupees_to_lpa(grouped: &str) -> f64 {
    let digits: String = grouped.chars().filter(|c| *c != ',').collect();
    if digits.is_empty() {
        return 0.0;
    }
    digits.parse::<f64>().map(|v| v / LPA_UNIT).unwrap_or(0.0)
}

/// Integer prefix after optional whitespace and sign, like `"5+ years"` → 5.
///
/// Reads the way a browser's `parseInt` does: digits stop at the first
/// non-digit, and a prefix too large for `i64` saturates.
pub fn leading_integer(s: &str) -> Option<i64> {
    let s = s.trim_start();
    let (negative, rest) = match s.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, s.strip_prefix('+').unwrap_or(s)),
    };
    let mut value: Option<i64> = None;
    for d in rest.bytes().take_while(u8::is_ascii_digit) {
        let acc = value.unwrap_or(0);
        value = Some(acc.saturating_mul(10).saturating_add(i64::from(d - b'0')));
    }
    value.map(|n| if negative { -n } else { n })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_experience() {
        assert_eq!(parse_experience("5+"), 5.0);
        assert_eq!(parse_experience("5+ years"), 5.0);
        assert_eq!(parse_experience("10+ yrs"), 10.0);
        assert_eq!(parse_experience("2-5"), 3.5);
        assert_eq!(parse_experience("2-5 years"), 3.5);
        assert_eq!(parse_experience("0-2 years"), 1.0);
        assert_eq!(parse_experience(""), 0.0);
        assert_eq!(parse_experience("garbage"), 0.0);
        assert_eq!(parse_experience("3 years"), 0.0);
        assert_eq!(parse_experience("senior+"), 0.0);
    }

    #[test]
    fn test_only_ascii_digits_count() {
        assert_eq!(parse_experience("٢2-5 years"), 3.5);
        assert_eq!(parse_experience("٢-٥ years"), 0.0);
        assert_eq!(
            parse_salary("₹٦,00,000 - ₹10,00,000"),
            SalaryRange::new(0.0, 0.0)
        );
    }

    #[test]
    fn test_leading_integer() {
        assert_eq!(leading_integer("  +3 years"), Some(3));
        assert_eq!(leading_integer("-2"), Some(-2));
        assert_eq!(leading_integer("10+"), Some(10));
        assert_eq!(leading_integer("99999999999999999999"), Some(i64::MAX));
        assert_eq!(leading_integer("+"), None);
        assert_eq!(leading_integer("years"), None);
    }

    #[test]
    fn test_parse_salary() {
        assert_eq!(
            parse_salary("₹6,00,000 - ₹10,00,000"),
            SalaryRange::new(6.0, 10.0)
        );
        assert_eq!(parse_salary("₹450000-₹900000"), SalaryRange::new(4.5, 9.0));
        assert_eq!(parse_salary(""), SalaryRange::new(0.0, 0.0));
        assert_eq!(parse_salary("negotiable"), SalaryRange::new(0.0, 0.0));
        assert_eq!(parse_salary("6,00,000 - 10,00,000"), SalaryRange::new(0.0, 0.0));
    }

    #[test]
    fn test_salary_overlap_includes_touching_bounds() {
        let job = SalaryRange::new(5.0, 8.0);
        assert!(job.overlaps(0.0, 6.0));
        assert!(job.overlaps(7.0, 20.0));
        assert!(job.overlaps(8.0, 20.0));
        assert!(job.overlaps(0.0, 5.0));
        assert!(!job.overlaps(9.0, 20.0));
        assert!(!job.overlaps(0.0, 4.0));
    }

    #[test]
    fn test_canonical_city() {
        assert_eq!(canonical_city("Chennai, Tamil Nadu"), "Chennai");
        assert_eq!(canonical_city("  Pune ,MH"), "Pune");
        assert_eq!(canonical_city("Remote"), "Remote");
        assert_eq!(canonical_city(""), "");
    }

    #[test]
    fn test_normalize_skills() {
        assert_eq!(
            normalize_skills(" React,JavaScript , ,HTML,"),
            vec!["React", "JavaScript", "HTML"]
        );
        assert!(normalize_skills("").is_empty());
    }

    #[test]
    fn test_normalize_search() {
        assert_eq!(normalize_search("  Front End\tDev "), "frontenddev");
        assert_eq!(normalize_search("TCS"), "tcs");
    }
}
