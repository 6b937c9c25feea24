use std::fmt;

use chrono::{NaiveTime, Weekday};
use uuid::Uuid;

use crate::error::{StaffingError, StaffingResult};

/// Grid column order.
pub const WEEKDAYS: [Weekday; 7] = [
    Weekday::Mon,
    Weekday::Tue,
    Weekday::Wed,
    Weekday::Thu,
    Weekday::Fri,
    Weekday::Sat,
    Weekday::Sun,
];

pub fn day_label(day: Weekday) -> &'static str {
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

/// How a person's listed days are read.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DayMode {
    /// The listed days are the days worked.
    WorkingDays,
    /// The listed days are not worked; every other day is.
    DaysOff,
}

impl DayMode {
    pub fn label(self) -> &'static str {
        match self {
            DayMode::WorkingDays => "Working days",
            DayMode::DaysOff => "Days off",
        }
    }
}

impl fmt::Display for DayMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Set of weekdays packed into the low 7 bits, bit 0 = Monday.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct DaySet(u8);

impl DaySet {
    const MASK: u8 = 0b111_1111;

    pub const fn empty() -> Self {
        Self(0)
    }

    pub const fn all() -> Self {
        Self(Self::MASK)
    }

    pub fn insert(&mut self, day: Weekday) {
        self.0 |= 1 << day.num_days_from_monday();
    }

    pub fn contains(self, day: Weekday) -> bool {
        (self.0 >> day.num_days_from_monday()) & 1 != 0
    }

    pub const fn complement(self) -> Self {
        Self(!self.0 & Self::MASK)
    }

    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    pub fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    /// Members in Monday-first order.
    pub fn iter(self) -> impl Iterator<Item = Weekday> {
        WEEKDAYS.into_iter().filter(move |day| self.contains(*day))
    }
}

impl FromIterator<Weekday> for DaySet {
    fn from_iter<I: IntoIterator<Item = Weekday>>(iter: I) -> Self {
        let mut set = DaySet::empty();
        for day in iter {
            set.insert(day);
        }
        set
    }
}

/// A daily shift template. `end <= start` means the shift runs past midnight.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShiftWindow {
    start: NaiveTime,
    end: NaiveTime,
}

impl ShiftWindow {
    pub fn new(start: NaiveTime, end: NaiveTime) -> StaffingResult<Self> {
        if start == end {
            return Err(StaffingError::DegenerateShift { start });
        }
        Ok(Self { start, end })
    }

    pub fn start(&self) -> NaiveTime {
        self.start
    }

    pub fn end(&self) -> NaiveTime {
        self.end
    }

    pub fn is_overnight(&self) -> bool {
        self.end <= self.start
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersonSchedule {
    pub id: Uuid,
    pub name: String,
    pub mode: DayMode,
    pub days: DaySet,
    pub shift: ShiftWindow,
}

impl PersonSchedule {
    pub fn new(
        id: Uuid,
        name: &str,
        mode: DayMode,
        days: DaySet,
        shift: ShiftWindow,
    ) -> StaffingResult<Self> {
        let name = name.trim();
        if name.is_empty() {
            return Err(StaffingError::EmptyName);
        }

        Ok(Self {
            id,
            name: name.to_string(),
            mode,
            days,
            shift,
        })
    }
}
