//! Duration formatting helpers.

/// Render fractional hours as a clock-style `HH:MM` string.
///
/// `1.5` → `"01:30"`, `0.75` → `"00:45"`.  Sub-minute remainders are
/// truncated.
pub fn format_clock_hours(hours: f64) -> String {
    let whole = hours.trunc() as i64;
    let minutes = ((hours - hours.trunc()) * 60.0) as i64;
    format!("{whole:02}:{minutes:02}")
}

/// Render a minute count as fixed-width day/hour/minute columns.
///
/// Zero components are blanked (not printed as `00`), keeping columns
/// aligned when stacked in a table:
///
/// ```text
///   1 days       01 min
///          12 hr
/// ```
pub fn format_minutes_dhm(total_minutes: i64) -> String {
    let days = total_minutes / (24 * 60);
    let remainder = total_minutes % (24 * 60);
    let hours = remainder / 60;
    let minutes = remainder % 60;

    let days_col = if days != 0 {
        format!("{days: >3} days")
    } else {
        " ".repeat(8)
    };
    let hours_col = if hours != 0 {
        format!("{hours:02} hr")
    } else {
        " ".repeat(5)
    };
    let minutes_col = if minutes != 0 {
        format!("{minutes:02} min")
    } else {
        " ".repeat(6)
    };

    format!("{days_col} {hours_col} {minutes_col}")
}
