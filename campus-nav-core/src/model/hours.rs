//! Opening hours in the `Mon-Fri: 8:00 AM - 5:00 PM, Sat: 9:00 AM - 1:00 PM` notation

use chrono::{Datelike, NaiveDateTime, NaiveTime, Weekday};
use serde::Serialize;

use crate::Error;

/// One comma-separated segment: a day range with a single open interval
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct HoursSegment {
    pub first_day: Weekday,
    pub last_day: Weekday,
    pub opens: NaiveTime,
    pub closes: NaiveTime,
}

impl HoursSegment {
    /// Day ranges may wrap around the week (`Sat-Mon`)
    pub fn covers(&self, day: Weekday) -> bool {
        let start = self.first_day.num_days_from_monday();
        let end = self.last_day.num_days_from_monday();
        let day = day.num_days_from_monday();
        if start <= end {
            (start..=end).contains(&day)
        } else {
            day >= start || day <= end
        }
    }

    pub fn is_open_at(&self, time: NaiveTime) -> bool {
        self.opens <= time && time < self.closes
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OpeningHours {
    segments: Vec<HoursSegment>,
}

impl OpeningHours {
    /// # Errors
    ///
    /// Returns `Error::InvalidHours` if any segment is malformed or the text is empty
    pub fn parse(text: &str) -> Result<Self, Error> {
        let segments = text
            .split(',')
            .map(str::trim)
            .filter(|segment| !segment.is_empty())
            .map(|segment| parse_segment(segment).ok_or_else(|| Error::InvalidHours(text.to_string())))
            .collect::<Result<Vec<_>, _>>()?;

        if segments.is_empty() {
            return Err(Error::InvalidHours(text.to_string()));
        }

        Ok(Self { segments })
    }

    pub fn segments(&self) -> &[HoursSegment] {
        &self.segments
    }

    /// First segment covering `day`
    pub fn hours_on(&self, day: Weekday) -> Option<&HoursSegment> {
        self.segments.iter().find(|segment| segment.covers(day))
    }

    pub fn is_open_at(&self, at: NaiveDateTime) -> bool {
        self.hours_on(at.weekday())
            .is_some_and(|segment| segment.is_open_at(at.time()))
    }
}

fn parse_segment(segment: &str) -> Option<HoursSegment> {
    // Day names never contain ':', so the first one ends the day range
    let (days, times) = segment.split_once(':')?;

    let (first_day, last_day) = match days.split_once('-') {
        Some((first, last)) => (parse_weekday(first)?, parse_weekday(last)?),
        None => {
            let day = parse_weekday(days)?;
            (day, day)
        }
    };

    let (opens, closes) = times.split_once(" - ")?;

    Some(HoursSegment {
        first_day,
        last_day,
        opens: parse_clock(opens)?,
        closes: parse_clock(closes)?,
    })
}

fn parse_weekday(name: &str) -> Option<Weekday> {
    match name.trim().to_ascii_lowercase().as_str() {
        "mon" | "monday" => Some(Weekday::Mon),
        "tue" | "tues" | "tuesday" => Some(Weekday::Tue),
        "wed" | "wednesday" => Some(Weekday::Wed),
        "thu" | "thur" | "thurs" | "thursday" => Some(Weekday::Thu),
        "fri" | "friday" => Some(Weekday::Fri),
        "sat" | "saturday" => Some(Weekday::Sat),
        "sun" | "sunday" => Some(Weekday::Sun),
        _ => None,
    }
}

/// Parse a 12-hour clock time such as `7:30 AM`
fn parse_clock(text: &str) -> Option<NaiveTime> {
    let (clock, meridiem) = text.trim().split_once(' ')?;
    let (hour, minute) = clock.split_once(':')?;
    let hour: u32 = hour.parse().ok()?;
    let minute: u32 = minute.parse().ok()?;

    if !(1..=12).contains(&hour) {
        return None;
    }

    let hour = match meridiem.trim().to_ascii_uppercase().as_str() {
        "AM" => hour % 12,
        "PM" => hour % 12 + 12,
        _ => return None,
    };

    NaiveTime::from_hms_opt(hour, minute, 0)
}
