use chrono::{Datelike, NaiveDate, NaiveDateTime, NaiveTime, Timelike, Weekday};

/// A single tracked observation: what I was doing and how I felt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub date: NaiveDate,
    pub day: Weekday,
    pub time: NaiveTime,
    pub task: String,
    pub alertness: u8,
    pub energy: u8,
}

impl Entry {
    /// Builds an entry stamped at `at`. The weekday is derived from the date and
    /// the time is truncated to whole minutes.
    pub fn new(at: NaiveDateTime, task: impl Into<String>, alertness: u8, energy: u8) -> Self {
        let time = NaiveTime::from_hms_opt(at.hour(), at.minute(), 0).unwrap_or(at.time());
        Self {
            date: at.date(),
            day: at.date().weekday(),
            time,
            task: task.into(),
            alertness,
            energy,
        }
    }

    /// Alertness plus energy.
    pub fn total(&self) -> u32 {
        u32::from(self.alertness) + u32::from(self.energy)
    }

    /// `2025-08-15`
    pub fn date_label(&self) -> String {
        self.date.format("%Y-%m-%d").to_string()
    }

    /// `Friday`
    pub fn day_label(&self) -> &'static str {
        weekday_name(self.day)
    }

    /// `09:30`
    pub fn time_label(&self) -> String {
        self.time.format("%H:%M").to_string()
    }
}

/// Full English weekday name, as written to the data file.
pub fn weekday_name(day: Weekday) -> &'static str {
    match day {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_derives_weekday_and_drops_seconds() {
        let at = NaiveDate::from_ymd_opt(2025, 8, 15)
            .unwrap()
            .and_hms_opt(9, 30, 42)
            .unwrap();
        let e = Entry::new(at, "Read", 5, 6);

        assert_eq!(e.day, Weekday::Fri);
        assert_eq!(e.day_label(), "Friday");
        assert_eq!(e.time_label(), "09:30");
        assert_eq!(e.time, NaiveTime::from_hms_opt(9, 30, 0).unwrap());
        assert_eq!(e.date_label(), "2025-08-15");
        assert_eq!(e.total(), 11);
    }

    #[test]
    fn weekday_names_parse_back() {
        for day in [
            Weekday::Mon,
            Weekday::Tue,
            Weekday::Wed,
            Weekday::Thu,
            Weekday::Fri,
            Weekday::Sat,
            Weekday::Sun,
        ] {
            assert_eq!(weekday_name(day).parse::<Weekday>().unwrap(), day);
        }
    }
}
