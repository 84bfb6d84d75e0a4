//! Compact duration strings for interval schedules.
//!
//! Grammar: one or more `<number><unit>` components, e.g. "30m", "1h30m",
//! "1d2h30m15s", "250ms". Fractional numbers are allowed ("1.5s"). A bare
//! digit string is read as whole seconds. Numeric scalars in YAML/JSON are
//! also accepted as seconds, matching what upstream config producers emit.
//!
//! The serde functions here plug into field attributes via
//! `#[serde(with = "crate::duration")]`.

use std::fmt;
use std::time::Duration;

use serde::de::{self, Visitor};
use serde::{Deserializer, Serializer};

/// Parse a duration string into a [`Duration`].
///
/// Supported units: `d` (days), `h` (hours), `m` (minutes), `s` (seconds),
/// `ms` (milliseconds). Components combine without separators: "2h30m".
/// Returns `None` for empty input, unknown units, or trailing numbers
/// without a unit ("30m15" is ambiguous and rejected).
pub fn parse_duration(s: &str) -> Option<Duration> {
    let s = s.trim();
    if s.is_empty() {
        return None;
    }

    // Bare digits = whole seconds.
    if s.bytes().all(|b| b.is_ascii_digit()) {
        return s.parse().ok().map(Duration::from_secs);
    }

    let mut total_secs = 0f64;
    let mut rest = s;
    while !rest.is_empty() {
        let num_end = rest
            .find(|c: char| !(c.is_ascii_digit() || c == '.'))
            .unwrap_or(rest.len());
        if num_end == 0 {
            // Unit with no number, or an unexpected character.
            return None;
        }
        let value: f64 = rest[..num_end].parse().ok()?;
        rest = &rest[num_end..];

        let unit_end = rest
            .find(|c: char| !c.is_ascii_alphabetic())
            .unwrap_or(rest.len());
        if unit_end == 0 {
            // Trailing number without a unit.
            return None;
        }
        let factor = match &rest[..unit_end] {
            "d" => 86_400.0,
            "h" => 3_600.0,
            "m" => 60.0,
            "s" => 1.0,
            "ms" => 0.001,
            _ => return None,
        };
        rest = &rest[unit_end..];
        total_secs += value * factor;
    }

    Duration::try_from_secs_f64(total_secs).ok()
}

/// Render a [`Duration`] in the compact string form.
///
/// Sub-millisecond precision is not representable and is dropped.
pub fn format_duration(d: &Duration) -> String {
    let mut secs = d.as_secs();
    let millis = d.subsec_millis();
    if secs == 0 && millis == 0 {
        return "0s".to_string();
    }

    let days = secs / 86_400;
    secs %= 86_400;
    let hours = secs / 3_600;
    secs %= 3_600;
    let minutes = secs / 60;
    secs %= 60;

    let mut out = String::new();
    if days > 0 {
        out.push_str(&format!("{days}d"));
    }
    if hours > 0 {
        out.push_str(&format!("{hours}h"));
    }
    if minutes > 0 {
        out.push_str(&format!("{minutes}m"));
    }
    if secs > 0 {
        out.push_str(&format!("{secs}s"));
    }
    if millis > 0 {
        out.push_str(&format!("{millis}ms"));
    }
    out
}

pub fn serialize<S>(interval: &Duration, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(&format_duration(interval))
}

pub fn deserialize<'de, D>(deserializer: D) -> Result<Duration, D::Error>
where
    D: Deserializer<'de>,
{
    deserializer.deserialize_any(DurationVisitor)
}

struct DurationVisitor;

impl<'de> Visitor<'de> for DurationVisitor {
    type Value = Duration;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "a duration string like \"1h30m\" or a number of seconds")
    }

    fn visit_str<E>(self, v: &str) -> Result<Duration, E>
    where
        E: de::Error,
    {
        parse_duration(v).ok_or_else(|| {
            E::custom(format!(
                "invalid duration '{v}', expected e.g. '30m', '1h30m', '90s'"
            ))
        })
    }

    fn visit_u64<E>(self, v: u64) -> Result<Duration, E>
    where
        E: de::Error,
    {
        Ok(Duration::from_secs(v))
    }

    fn visit_i64<E>(self, v: i64) -> Result<Duration, E>
    where
        E: de::Error,
    {
        u64::try_from(v)
            .map(Duration::from_secs)
            .map_err(|_| E::custom("duration must be non-negative"))
    }

    fn visit_f64<E>(self, v: f64) -> Result<Duration, E>
    where
        E: de::Error,
    {
        Duration::try_from_secs_f64(v)
            .map_err(|_| E::custom("duration must be a finite, non-negative number of seconds"))
    }
}
