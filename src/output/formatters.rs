//! Reusable formatting utilities for CLI output
//!
//! Timestamps, durations, severities, and job statuses as they appear in
//! tables and detail views.

use chrono::{DateTime, Local, Utc};
use colored::{ColoredString, Colorize};

use crate::client::models::{SeverityCounts, severity_label};
use crate::client::poll::JobState;

/// Format an optional UTC timestamp in local time.
///
/// # Example output
/// `2025-01-15 14:30`
pub fn format_datetime(dt: Option<&DateTime<Utc>>) -> String {
    match dt {
        Some(dt) => dt.with_timezone(&Local).format("%Y-%m-%d %H:%M").to_string(),
        None => "--".to_string(),
    }
}

/// Format how long ago `dt` was, relative to `now`.
///
/// # Example output
/// `just now`, `5m ago`, `3h ago`, `12d ago`
pub fn format_relative_time(dt: &DateTime<Utc>, now: DateTime<Utc>) -> String {
    let secs = now.signed_duration_since(*dt).num_seconds();
    if secs < 60 {
        "just now".to_string()
    } else if secs < 3600 {
        format!("{}m ago", secs / 60)
    } else if secs < 86_400 {
        format!("{}h ago", secs / 3600)
    } else {
        format!("{}d ago", secs / 86_400)
    }
}

/// Format a duration in seconds.
///
/// # Example output
/// - `2h 15m 30s`
/// - `5m 10s`
/// - `45s`
pub fn format_duration_secs(secs: i64) -> String {
    if secs <= 0 {
        return "--".to_string();
    }

    let hours = secs / 3600;
    let mins = (secs % 3600) / 60;
    let secs = secs % 60;

    if hours > 0 {
        format!("{}h {}m {}s", hours, mins, secs)
    } else if mins > 0 {
        format!("{}m {}s", mins, secs)
    } else {
        format!("{}s", secs)
    }
}

/// Time between `start` and `end`, `--` if either is missing.
pub fn format_elapsed(start: Option<&DateTime<Utc>>, end: Option<&DateTime<Utc>>) -> String {
    match (start, end) {
        (Some(start), Some(end)) => format_duration_secs(end.signed_duration_since(*start).num_seconds()),
        _ => "--".to_string(),
    }
}

/// Compact severity summary: `2C 3H 1M 0L 4I`
pub fn format_severity_counts(counts: Option<&SeverityCounts>) -> String {
    match counts {
        Some(c) => format!(
            "{}C {}H {}M {}L {}I",
            c.critical, c.high, c.medium, c.low, c.info
        ),
        None => "--".to_string(),
    }
}

/// Severity label coloured by level, for pretty output
pub fn colorize_severity(severity: i32) -> ColoredString {
    let label = severity_label(severity);
    match severity {
        4 => label.red().bold(),
        3 => label.red(),
        2 => label.yellow(),
        1 => label.blue(),
        _ => label.dimmed(),
    }
}

/// Job status coloured by state, for pretty output
pub fn colorize_status(status: &str) -> ColoredString {
    match JobState::from_status(status) {
        JobState::Completed => status.green(),
        JobState::Failed | JobState::Aborted => status.red(),
        JobState::Processing => status.cyan(),
        JobState::Pending => status.normal(),
    }
}

/// Resolve a server-relative download path against the server root.
pub fn download_url(server_root: &str, path: &str) -> String {
    if path.starts_with("http://") || path.starts_with("https://") {
        return path.to_string();
    }
    format!(
        "{}/{}",
        server_root.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_format_datetime_none() {
        assert_eq!(format_datetime(None), "--");
    }

    #[test]
    fn test_format_datetime_some() {
        let dt = Utc.with_ymd_and_hms(2025, 1, 15, 12, 0, 0).unwrap();
        let out = format_datetime(Some(&dt));
        assert!(out.starts_with("2025-01-1"));
        assert_eq!(out.len(), "2025-01-15 12:00".len());
    }

    #[test]
    fn test_format_relative_time() {
        let now = Utc.with_ymd_and_hms(2025, 1, 15, 12, 0, 0).unwrap();
        assert_eq!(format_relative_time(&now, now), "just now");
        assert_eq!(
            format_relative_time(&(now - chrono::Duration::minutes(5)), now),
            "5m ago"
        );
        assert_eq!(
            format_relative_time(&(now - chrono::Duration::hours(3)), now),
            "3h ago"
        );
        assert_eq!(
            format_relative_time(&(now - chrono::Duration::days(12)), now),
            "12d ago"
        );
    }

    #[test]
    fn test_format_duration_secs() {
        assert_eq!(format_duration_secs(3661), "1h 1m 1s");
        assert_eq!(format_duration_secs(125), "2m 5s");
        assert_eq!(format_duration_secs(45), "45s");
        assert_eq!(format_duration_secs(0), "--");
        assert_eq!(format_duration_secs(-5), "--");
    }

    #[test]
    fn test_format_elapsed() {
        let start = Utc.with_ymd_and_hms(2025, 1, 15, 12, 0, 0).unwrap();
        let end = Utc.with_ymd_and_hms(2025, 1, 15, 12, 12, 34).unwrap();
        assert_eq!(format_elapsed(Some(&start), Some(&end)), "12m 34s");
        assert_eq!(format_elapsed(Some(&start), None), "--");
    }

    #[test]
    fn test_format_severity_counts() {
        let counts = SeverityCounts {
            critical: 1,
            high: 2,
            medium: 3,
            low: 0,
            info: 7,
        };
        assert_eq!(format_severity_counts(Some(&counts)), "1C 2H 3M 0L 7I");
        assert_eq!(format_severity_counts(None), "--");
    }

    #[test]
    fn test_colorize_keeps_text() {
        assert!(colorize_severity(3).to_string().contains("High"));
        assert!(colorize_status("completed").to_string().contains("completed"));
    }

    #[test]
    fn test_download_url() {
        assert_eq!(
            download_url("https://scanner.local:3443", "/api/v1/reports/download/r1.pdf"),
            "https://scanner.local:3443/api/v1/reports/download/r1.pdf"
        );
        assert_eq!(
            download_url("https://scanner.local:3443/", "reports/r1.html"),
            "https://scanner.local:3443/reports/r1.html"
        );
        assert_eq!(download_url("https://x", "https://cdn/r.pdf"), "https://cdn/r.pdf");
    }
}
