//! Display formatting for salaries and posting dates.
//!
//! All helpers are pure except [`time_ago`] and [`now_nanos`], which read the
//! wall clock through `chrono`.

use serde::{Deserialize, Serialize};

const NANOS_PER_MILLI: i64 = 1_000_000;
const NANOS_PER_DAY: i64 = 86_400 * 1_000 * NANOS_PER_MILLI;

/// How large salary figures are abbreviated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SalaryNotation {
    /// `8000` → `8k`.
    #[default]
    Thousands,
    /// Like [`SalaryNotation::Thousands`], but figures of one lakh (100 000)
    /// or more render as lakh with one decimal: `120000` → `1.2L`.
    Lakh,
}

/// Abbreviates one salary figure.
fn format_amount(amount: u64, notation: SalaryNotation) -> String {
    let n = u128::from(amount);

    if notation == SalaryNotation::Lakh && n >= 100_000 {
        let tenths = (n + 5_000) / 10_000;
        return format!("{}.{}L", tenths / 10, tenths % 10);
    }

    if n >= 1_000 {
        format!("{}k", (n + 500) / 1_000)
    } else {
        n.to_string()
    }
}

/// Formats a salary range as `"<CUR> <min> – <max>"` (en dash).
///
/// # Example
///
/// ```
/// use jobfinder::domain::{format_salary, SalaryNotation};
///
/// assert_eq!(format_salary(8000, 14000, "MYR", SalaryNotation::Thousands), "MYR 8k – 14k");
/// assert_eq!(format_salary(120000, 200000, "INR", SalaryNotation::Lakh), "INR 1.2L – 2.0L");
/// assert_eq!(format_salary(0, 900, "MYR", SalaryNotation::Thousands), "MYR 0 – 900");
/// ```
#[must_use]
pub fn format_salary(min: u64, max: u64, currency: &str, notation: SalaryNotation) -> String {
    format!(
        "{currency} {} \u{2013} {}",
        format_amount(min, notation),
        format_amount(max, notation)
    )
}

/// Current wall-clock time in nanoseconds since the Unix epoch.
#[must_use]
pub fn now_nanos() -> i64 {
    chrono::Utc::now()
        .timestamp_millis()
        .saturating_mul(NANOS_PER_MILLI)
}

/// Relative age of a posting against `now_nanos`.
///
/// Elapsed whole days are floored. Timestamps in the future read as `"Today"`.
///
/// | days    | output           |
/// |---------|------------------|
/// | 0       | `Today`          |
/// | 1       | `1 day ago`      |
/// | 2..=29  | `N days ago`     |
/// | 30..=59 | `1 month ago`    |
/// | 60..    | `N months ago`   |
///
/// # Example
///
/// ```
/// use jobfinder::domain::time_ago_at;
///
/// let day = 86_400_000_000_000_i64;
/// let now = 400 * day;
/// assert_eq!(time_ago_at(now, now), "Today");
/// assert_eq!(time_ago_at(now - day, now), "1 day ago");
/// assert_eq!(time_ago_at(now - 35 * day, now), "1 month ago");
/// ```
#[must_use]
pub fn time_ago_at(posted_nanos: i64, now_nanos: i64) -> String {
    let elapsed = now_nanos.saturating_sub(posted_nanos).max(0);
    let days = elapsed / NANOS_PER_DAY;

    match days {
        0 => "Today".to_string(),
        1 => "1 day ago".to_string(),
        2..=29 => format!("{days} days ago"),
        _ => {
            let months = days / 30;
            if months == 1 {
                "1 month ago".to_string()
            } else {
                format!("{months} months ago")
            }
        }
    }
}

/// Relative age of a posting against the wall clock.
#[must_use]
pub fn time_ago(posted_nanos: i64) -> String {
    time_ago_at(posted_nanos, now_nanos())
}

/// Nanosecond timestamp `days` whole days before `now_nanos`.
#[must_use]
pub const fn days_before(now_nanos: i64, days: i64) -> i64 {
    now_nanos - days * NANOS_PER_DAY
}

#[cfg(test)]
mod tests {
    use super::*;

    const DAY: i64 = NANOS_PER_DAY;
    const NOW: i64 = 1_700_000_000_000 * NANOS_PER_MILLI;

    #[test]
    fn thousands_notation() {
        assert_eq!(format_salary(8000, 14000, "MYR", SalaryNotation::Thousands), "MYR 8k – 14k");
        assert_eq!(format_salary(2500, 4000, "MYR", SalaryNotation::Thousands), "MYR 3k – 4k");
        assert_eq!(format_salary(999, 1000, "MYR", SalaryNotation::Thousands), "MYR 999 – 1k");
    }

    #[test]
    fn thousands_notation_never_uses_lakh() {
        assert_eq!(
            format_salary(120_000, 200_000, "MYR", SalaryNotation::Thousands),
            "MYR 120k – 200k"
        );
    }

    #[test]
    fn lakh_notation() {
        assert_eq!(format_salary(120_000, 200_000, "INR", SalaryNotation::Lakh), "INR 1.2L – 2.0L");
        assert_eq!(format_salary(45_000, 99_999, "INR", SalaryNotation::Lakh), "INR 45k – 100k");
        assert_eq!(format_salary(1_250_000, 1_800_000, "INR", SalaryNotation::Lakh), "INR 12.5L – 18.0L");
    }

    #[test]
    fn amount_does_not_overflow() {
        assert_eq!(format_amount(u64::MAX, SalaryNotation::Thousands), "18446744073709552k");
    }

    #[test]
    fn time_ago_buckets() {
        assert_eq!(time_ago_at(NOW, NOW), "Today");
        assert_eq!(time_ago_at(NOW - DAY + 1, NOW), "Today");
        assert_eq!(time_ago_at(NOW - DAY, NOW), "1 day ago");
        assert_eq!(time_ago_at(NOW - 2 * DAY, NOW), "2 days ago");
        assert_eq!(time_ago_at(NOW - 29 * DAY, NOW), "29 days ago");
        assert_eq!(time_ago_at(NOW - 30 * DAY, NOW), "1 month ago");
        assert_eq!(time_ago_at(NOW - 35 * DAY, NOW), "1 month ago");
        assert_eq!(time_ago_at(NOW - 60 * DAY, NOW), "2 months ago");
        assert_eq!(time_ago_at(NOW - 400 * DAY, NOW), "13 months ago");
    }

    #[test]
    fn future_timestamps_read_as_today() {
        assert_eq!(time_ago_at(NOW + 5 * DAY, NOW), "Today");
    }

    #[test]
    fn wall_clock_variant_agrees_for_recent_posts() {
        assert_eq!(time_ago(now_nanos()), "Today");
        assert_eq!(time_ago(days_before(now_nanos(), 3)), "3 days ago");
    }
}
