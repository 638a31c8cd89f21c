use std::fmt;

const SECOND_MS: i64 = 1000;
const MINUTE_MS: i64 = 60 * SECOND_MS;
const HOUR_MS: i64 = 60 * MINUTE_MS;
const DAY_MS: i64 = 24 * HOUR_MS;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Remaining {
    pub days: i64,
    pub hours: i64,
    pub minutes: i64,
    pub seconds: i64,
}

impl Remaining {
    /// Time left until `target_ms`, floored at zero once the target passes.
    pub fn between(target_ms: i64, now_ms: i64) -> Self {
        let mut diff = target_ms.saturating_sub(now_ms).max(0);
        let days = diff / DAY_MS;
        diff -= days * DAY_MS;
        let hours = diff / HOUR_MS;
        diff -= hours * HOUR_MS;
        let minutes = diff / MINUTE_MS;
        diff -= minutes * MINUTE_MS;
        let seconds = diff / SECOND_MS;
        Self {
            days,
            hours,
            minutes,
            seconds,
        }
    }

    #[cfg(test)]
    pub fn is_zero(&self) -> bool {
        *self == Self::default()
    }

    pub fn parts(&self) -> [String; 4] {
        [
            pad(self.days),
            pad(self.hours),
            pad(self.minutes),
            pad(self.seconds),
        ]
    }
}

impl fmt::Display for Remaining {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [dd, hh, mm, ss] = self.parts();
        write!(f, "{dd}:{hh}:{mm}:{ss}")
    }
}

pub fn pad(value: i64) -> String {
    format!("{value:02}")
}

pub fn now_ms() -> i64 {
    #[cfg(target_arch = "wasm32")]
    {
        js_sys::Date::now() as i64
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        (time::OffsetDateTime::now_utc().unix_timestamp_nanos() / 1_000_000) as i64
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::parse_instant_ms;
    use pretty_assertions::assert_eq;

    #[test]
    fn one_hour_before_target() {
        let target = parse_instant_ms("2025-12-31T00:00:00Z").unwrap();
        let now = parse_instant_ms("2025-12-30T23:00:00Z").unwrap();
        assert_eq!(Remaining::between(target, now).to_string(), "00:01:00:00");
    }

    #[test]
    fn floors_at_zero_after_target() {
        let target = parse_instant_ms("2025-12-31T00:00:00Z").unwrap();
        let later = parse_instant_ms("2026-03-01T12:30:00Z").unwrap();
        let remaining = Remaining::between(target, later);
        assert!(remaining.is_zero());
        assert_eq!(remaining.to_string(), "00:00:00:00");
    }

    #[test]
    fn decomposes_each_unit_from_the_remainder() {
        let now = 0;
        let target = 3 * DAY_MS + 4 * HOUR_MS + 5 * MINUTE_MS + 6 * SECOND_MS + 999;
        assert_eq!(
            Remaining::between(target, now),
            Remaining {
                days: 3,
                hours: 4,
                minutes: 5,
                seconds: 6,
            }
        );
    }

    #[test]
    fn long_countdowns_keep_every_day_digit() {
        let remaining = Remaining::between(120 * DAY_MS, 0);
        assert_eq!(remaining.to_string(), "120:00:00:00");
    }
}
