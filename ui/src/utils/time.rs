use jiff::{Timestamp, tz};

/// Format a timestamp for display in the viewer's timezone.
pub fn format_timestamp(timestamp: Timestamp) -> String {
    timestamp
        .to_zoned(tz::TimeZone::system())
        .strftime("%d %b %Y")
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_day_month_year() {
        // Mid-month noon UTC keeps the month stable in any system timezone.
        let ts: Timestamp = "2026-06-15T12:00:00Z".parse().unwrap();
        let formatted = format_timestamp(ts);
        assert!(formatted.contains("Jun 2026"), "got {formatted}");
    }
}
