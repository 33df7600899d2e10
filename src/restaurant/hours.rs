//! Operating hours types.
//!
//! Times live on a 30-minute grid, so a `TimeOfDay` is stored as minutes since
//! midnight and always renders as zero-padded `HH:MM`. Ordering by minutes is
//! the same as ordering by the rendered string.

use serde::{Serialize, Serializer};
use std::{fmt, str::FromStr};

/// Specifying the day a slot applies to.
///
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DayOfWeek {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl DayOfWeek {
    pub const ALL: [DayOfWeek; 7] = [
        DayOfWeek::Monday,
        DayOfWeek::Tuesday,
        DayOfWeek::Wednesday,
        DayOfWeek::Thursday,
        DayOfWeek::Friday,
        DayOfWeek::Saturday,
        DayOfWeek::Sunday,
    ];

    /// Return the lowercase wire value of the day.
    ///
    pub fn as_str(&self) -> &'static str {
        match self {
            DayOfWeek::Monday => "monday",
            DayOfWeek::Tuesday => "tuesday",
            DayOfWeek::Wednesday => "wednesday",
            DayOfWeek::Thursday => "thursday",
            DayOfWeek::Friday => "friday",
            DayOfWeek::Saturday => "saturday",
            DayOfWeek::Sunday => "sunday",
        }
    }

    /// Return the display label of the day.
    ///
    pub fn label(&self) -> &'static str {
        match self {
            DayOfWeek::Monday => "Monday",
            DayOfWeek::Tuesday => "Tuesday",
            DayOfWeek::Wednesday => "Wednesday",
            DayOfWeek::Thursday => "Thursday",
            DayOfWeek::Friday => "Friday",
            DayOfWeek::Saturday => "Saturday",
            DayOfWeek::Sunday => "Sunday",
        }
    }
}

impl fmt::Display for DayOfWeek {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Errors returned when parsing a `TimeOfDay` from text.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseTimeError {
    /// Text is not shaped like HH:MM
    #[error("Expected time as HH:MM, got '{0}'")]
    Format(String),

    /// Hour or minute is outside the half-hour grid
    #[error("Time '{0}' is not on the half-hour grid")]
    OffGrid(String),
}

/// A time of day on the form's half-hour grid.
///
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TimeOfDay(u16);

impl TimeOfDay {
    pub const STEP_MINUTES: u16 = 30;
    pub const COUNT: usize = 48;

    /// Return the time for the hour and minute, or None when it is not on the
    /// half-hour grid.
    ///
    pub fn new(hour: u8, minute: u8) -> Option<Self> {
        if hour >= 24 || (minute != 0 && minute != 30) {
            return None;
        }
        Some(TimeOfDay(hour as u16 * 60 + minute as u16))
    }

    /// Return every selectable time from 00:00 to 23:30.
    ///
    pub fn options() -> Vec<TimeOfDay> {
        (0..Self::COUNT as u16)
            .map(|i| TimeOfDay(i * Self::STEP_MINUTES))
            .collect()
    }

    pub fn hour(&self) -> u8 {
        (self.0 / 60) as u8
    }

    pub fn minute(&self) -> u8 {
        (self.0 % 60) as u8
    }
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour(), self.minute())
    }
}

impl FromStr for TimeOfDay {
    type Err = ParseTimeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (hour, minute) = s
            .split_once(':')
            .filter(|(h, m)| h.len() == 2 && m.len() == 2)
            .ok_or_else(|| ParseTimeError::Format(s.to_string()))?;
        let hour: u8 = hour
            .parse()
            .map_err(|_| ParseTimeError::Format(s.to_string()))?;
        let minute: u8 = minute
            .parse()
            .map_err(|_| ParseTimeError::Format(s.to_string()))?;
        TimeOfDay::new(hour, minute).ok_or_else(|| ParseTimeError::OffGrid(s.to_string()))
    }
}

impl Serialize for TimeOfDay {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Defines one operating hours entry. Unselected values are None.
///
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct OperatingHoursSlot {
    pub day_of_week: Option<DayOfWeek>,
    pub opening_time: Option<TimeOfDay>,
    pub closing_time: Option<TimeOfDay>,
}

impl OperatingHoursSlot {
    /// Return a complete slot.
    ///
    pub fn new(day: DayOfWeek, opening: TimeOfDay, closing: TimeOfDay) -> Self {
        OperatingHoursSlot {
            day_of_week: Some(day),
            opening_time: Some(opening),
            closing_time: Some(closing),
        }
    }

    /// Return the day and both times when all three are selected.
    ///
    pub fn complete(&self) -> Option<(DayOfWeek, TimeOfDay, TimeOfDay)> {
        match (self.day_of_week, self.opening_time, self.closing_time) {
            (Some(day), Some(opening), Some(closing)) => Some((day, opening, closing)),
            _ => None,
        }
    }
}
