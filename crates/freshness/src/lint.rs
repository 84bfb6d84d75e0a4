//! Advisory lint checks for parsed freshness rules.
//!
//! Cron strings and timezones are accepted verbatim by the schema, so
//! questionable values never block construction; they surface here as
//! warnings the caller can log or display.

use std::str::FromStr;

use cron::Schedule;
use serde::Serialize;

use crate::schema::FreshnessAssertion;

/// A non-blocking advisory warning.
#[derive(Debug, Clone, Serialize)]
pub struct LintWarning {
    /// JSON-path-like location, e.g. `"timezone"`.
    pub path: String,
    pub message: String,
}

impl LintWarning {
    fn new(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            message: message.into(),
        }
    }
}

/// Lint a parsed rule. An empty vector means nothing looked suspicious.
pub fn lint(assertion: &FreshnessAssertion) -> Vec<LintWarning> {
    let mut warnings = Vec::new();
    match assertion {
        FreshnessAssertion::Cron(c) => {
            lint_cron(&c.cron, &mut warnings);
            lint_timezone(&c.timezone, &mut warnings);
        }
        FreshnessAssertion::Interval(i) => {
            if i.interval.as_secs() == 0 {
                warnings.push(LintWarning::new(
                    "interval",
                    "interval truncates to zero whole seconds; the generated \
                     schedule will have multiple = 0",
                ));
            }
        }
    }
    warnings
}

// ── Cron helpers ────────────────────────────────────────────────────

fn lint_cron(expr: &str, warnings: &mut Vec<LintWarning>) {
    let field_count = expr.trim().split_whitespace().count();
    if !(5..=6).contains(&field_count) {
        warnings.push(LintWarning::new(
            "cron",
            format!(
                "expected 5 fields (min hour dom month dow), got {field_count}: '{expr}'"
            ),
        ));
        return;
    }
    if let Err(e) = Schedule::from_str(&normalize_cron(expr)) {
        warnings.push(LintWarning::new(
            "cron",
            format!("cron expression '{expr}' does not parse: {e}"),
        ));
    }
}

/// Normalize a 5-field cron expression to 6-field by prepending "0" for
/// seconds. The `cron` crate wants `sec min hour dom month dow`; standard
/// configuration uses 5-field cron.
fn normalize_cron(expr: &str) -> String {
    let trimmed = expr.trim();
    if trimmed.split_whitespace().count() == 5 {
        format!("0 {trimmed}")
    } else {
        trimmed.to_string()
    }
}

// ── Timezone helpers ────────────────────────────────────────────────

fn lint_timezone(tz: &str, warnings: &mut Vec<LintWarning>) {
    if tz == "UTC" || tz == "GMT" {
        return;
    }
    if !looks_like_iana(tz) {
        warnings.push(LintWarning::new(
            "timezone",
            format!("timezone '{tz}' does not look like an IANA name (e.g. 'Asia/Manila')"),
        ));
    }
}

/// Heuristic IANA check: `Area/Location` segments, each starting uppercase.
fn looks_like_iana(tz: &str) -> bool {
    let parts: Vec<&str> = tz.split('/').collect();
    if parts.len() < 2 {
        return false;
    }
    for part in &parts {
        let mut chars = part.chars();
        match chars.next() {
            Some(first) if first.is_ascii_uppercase() => {}
            _ => return false,
        }
        if !part
            .chars()
            .all(|c| c.is_ascii_alphabetic() || c == '_' || c == '-')
        {
            return false;
        }
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cron_rule(cron: &str, timezone: &str) -> FreshnessAssertion {
        FreshnessAssertion::from_yaml_str(&format!(
            "type: cron\ncron: \"{cron}\"\ntimezone: {timezone}\n"
        ))
        .unwrap()
    }

    fn interval_rule(interval: &str) -> FreshnessAssertion {
        FreshnessAssertion::from_yaml_str(&format!("type: interval\ninterval: {interval}\n"))
            .unwrap()
    }

    #[test]
    fn clean_cron_rule_has_no_warnings() {
        assert!(lint(&cron_rule("0 0 * * *", "UTC")).is_empty());
        assert!(lint(&cron_rule("*/15 * * * *", "Asia/Manila")).is_empty());
    }

    #[test]
    fn clean_interval_rule_has_no_warnings() {
        assert!(lint(&interval_rule("90s")).is_empty());
    }

    #[test]
    fn short_cron_warns() {
        let warnings = lint(&cron_rule("0 0 * *", "UTC"));
        assert_eq!(warnings.len(), 1);
        assert_eq!(warnings[0].path, "cron");
    }

    #[test]
    fn out_of_range_cron_field_warns() {
        let warnings = lint(&cron_rule("61 * * * *", "UTC"));
        assert_eq!(warnings.len(), 1);
        assert!(warnings[0].message.contains("does not parse"));
    }

    #[test]
    fn six_field_cron_is_accepted() {
        assert!(lint(&cron_rule("0 */15 * * * *", "UTC")).is_empty());
    }

    #[test]
    fn bad_timezone_warns() {
        let warnings = lint(&cron_rule("0 0 * * *", "utc+8"));
        assert_eq!(warnings.len(), 1);
        assert_eq!(warnings[0].path, "timezone");
    }

    #[test]
    fn bad_cron_and_timezone_both_warn() {
        let warnings = lint(&cron_rule("whenever", "nowhere"));
        assert_eq!(warnings.len(), 2);
    }

    #[test]
    fn subsecond_interval_warns() {
        let warnings = lint(&interval_rule("500ms"));
        assert_eq!(warnings.len(), 1);
        assert_eq!(warnings[0].path, "interval");
    }

    #[test]
    fn normalize_cron_prepends_seconds() {
        assert_eq!(normalize_cron("*/15 * * * *"), "0 */15 * * * *");
        assert_eq!(normalize_cron("0 */15 * * * *"), "0 */15 * * * *");
        assert_eq!(normalize_cron("  0 6 * * 1-5  "), "0 0 6 * * 1-5");
    }

    #[test]
    fn iana_heuristic() {
        assert!(looks_like_iana("Asia/Manila"));
        assert!(looks_like_iana("America/Port-au-Prince"));
        assert!(looks_like_iana("America/Argentina/Buenos_Aires"));
        assert!(!looks_like_iana("manila"));
        assert!(!looks_like_iana("asia/manila"));
        assert!(!looks_like_iana("UTC+8"));
    }
}
