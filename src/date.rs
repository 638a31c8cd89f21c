use time::{OffsetDateTime, UtcOffset};

use crate::countdown::now_ms;

fn india_offset() -> UtcOffset {
    UtcOffset::from_hms(5, 30, 0).unwrap_or(UtcOffset::UTC)
}

fn instant(unix_ms: i64) -> OffsetDateTime {
    OffsetDateTime::from_unix_timestamp_nanos(unix_ms as i128 * 1_000_000)
        .unwrap_or(OffsetDateTime::UNIX_EPOCH)
}

/// `en-IN` 12-hour time in Asia/Kolkata, e.g. `3:04:05 pm`.
pub fn india_time_at(unix_ms: i64) -> String {
    let local = instant(unix_ms).to_offset(india_offset());
    let (hour, minute, second) = (local.hour(), local.minute(), local.second());
    let suffix = if hour < 12 { "am" } else { "pm" };
    let hour = match hour % 12 {
        0 => 12,
        other => other,
    };
    format!("{hour}:{minute:02}:{second:02} {suffix}")
}

pub fn year_at(unix_ms: i64) -> i32 {
    instant(unix_ms).year()
}

pub fn india_time_now() -> String {
    india_time_at(now_ms())
}

pub fn current_year() -> i32 {
    year_at(now_ms())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::parse_instant_ms;
    use pretty_assertions::assert_eq;

    #[test]
    fn shifts_utc_into_india_standard_time() {
        let noon_utc = parse_instant_ms("2025-06-01T12:00:00Z").unwrap();
        assert_eq!(india_time_at(noon_utc), "5:30:00 pm");
    }

    #[test]
    fn midnight_reads_as_twelve() {
        let midnight_ist = parse_instant_ms("2025-06-01T18:30:05Z").unwrap();
        assert_eq!(india_time_at(midnight_ist), "12:00:05 am");
    }

    #[test]
    fn year_uses_utc_calendar() {
        let instant = parse_instant_ms("2024-02-29T08:00:00Z").unwrap();
        assert_eq!(year_at(instant), 2024);
    }
}
