use chrono::{Local, NaiveDateTime};
use std::time::Instant;

use crate::constants::CLOCK_TICK;
use crate::settings::ClockFormat;
use crate::timer::Interval;

pub fn format_time(at: &NaiveDateTime, format: ClockFormat) -> String {
    match format {
        ClockFormat::TwelveHour => at.format("%I:%M %p").to_string(),
        ClockFormat::TwentyFourHour => at.format("%H:%M").to_string(),
    }
}

pub fn format_date(at: &NaiveDateTime) -> String {
    at.format("%A, %b %-d").to_string()
}

/// Header clock, refreshed once a second.
pub struct Clock {
    tick: Interval,
    now: NaiveDateTime,
}

impl Clock {
    pub fn new(now: Instant) -> Self {
        Self {
            tick: Interval::new(CLOCK_TICK, now),
            now: Local::now().naive_local(),
        }
    }

    pub fn update(&mut self, now: Instant) {
        if self.tick.due(now) {
            self.now = Local::now().naive_local();
        }
    }

    pub fn time(&self, format: ClockFormat) -> String {
        format_time(&self.now, format)
    }

    pub fn date(&self) -> String {
        format_date(&self.now)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn at(h: u32, m: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2026, 10, 19).unwrap().and_hms_opt(h, m, 0).unwrap()
    }

    #[test]
    fn twelve_hour_clock() {
        assert_eq!(format_time(&at(9, 5), ClockFormat::TwelveHour), "09:05 AM");
        assert_eq!(format_time(&at(21, 30), ClockFormat::TwelveHour), "09:30 PM");
    }

    #[test]
    fn twenty_four_hour_clock() {
        assert_eq!(format_time(&at(21, 30), ClockFormat::TwentyFourHour), "21:30");
    }

    #[test]
    fn date_line() {
        assert_eq!(format_date(&at(8, 0)), "Monday, Oct 19");
    }
}
