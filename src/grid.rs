use chrono::{NaiveTime, Timelike, Weekday};
use serde::{Serialize, Serializer};

use crate::error::{StaffingError, StaffingResult};
use crate::models::{day_label, WEEKDAYS};

const MINUTES_PER_DAY: u32 = 24 * 60;

/// Slot width in minutes. Always a positive divisor of 1440.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Interval(u32);

impl Interval {
    /// Widths offered to users.
    pub const PRESETS: [u32; 3] = [15, 30, 60];

    pub fn new(minutes: u32) -> StaffingResult<Self> {
        if minutes == 0 || MINUTES_PER_DAY % minutes != 0 {
            return Err(StaffingError::InvalidConfig(format!(
                "interval of {minutes} minutes does not evenly divide a day"
            )));
        }
        Ok(Self(minutes))
    }

    /// Like [`Interval::new`] but limited to [`Interval::PRESETS`].
    pub fn preset(minutes: u32) -> StaffingResult<Self> {
        if !Self::PRESETS.contains(&minutes) {
            return Err(StaffingError::UnsupportedInterval(minutes));
        }
        Self::new(minutes)
    }

    pub fn minutes(self) -> u32 {
        self.0
    }

    pub fn step(self) -> chrono::Duration {
        chrono::Duration::minutes(i64::from(self.0))
    }

    pub fn slots_per_day(self) -> usize {
        (MINUTES_PER_DAY / self.0) as usize
    }
}

/// Headcount per (time slot, weekday). Rows run from midnight, columns from Monday.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OccupancyGrid {
    interval: Interval,
    counts: Vec<[u32; 7]>,
}

impl OccupancyGrid {
    /// An all-zero grid covering `[00:00, 24:00)`.
    pub fn new(interval: Interval) -> Self {
        Self {
            interval,
            counts: vec![[0; 7]; interval.slots_per_day()],
        }
    }

    pub fn interval(&self) -> Interval {
        self.interval
    }

    pub fn row_count(&self) -> usize {
        self.counts.len()
    }

    /// Slot start time of `row`.
    pub fn row_time(&self, row: usize) -> NaiveTime {
        let secs = row as u32 * self.interval.minutes() * 60;
        NaiveTime::from_num_seconds_from_midnight_opt(secs, 0).unwrap_or_default()
    }

    /// Row labels in order.
    pub fn rows(&self) -> impl Iterator<Item = NaiveTime> + '_ {
        (0..self.row_count()).map(|row| self.row_time(row))
    }

    pub fn row_counts(&self, row: usize) -> [u32; 7] {
        self.counts[row]
    }

    pub fn get(&self, row: usize, day: Weekday) -> u32 {
        self.counts[row][day.num_days_from_monday() as usize]
    }

    /// Row whose label is exactly `time`, if any.
    pub fn slot_index(&self, time: NaiveTime) -> Option<usize> {
        if time.nanosecond() != 0 {
            return None;
        }
        let secs = time.num_seconds_from_midnight();
        let step = self.interval.minutes() * 60;
        (secs % step == 0).then_some((secs / step) as usize)
    }

    pub fn count_at(&self, time: NaiveTime, day: Weekday) -> Option<u32> {
        self.slot_index(time).map(|row| self.get(row, day))
    }

    /// Adds one to the cell labelled `time` on `day`. Returns `false` when no
    /// row carries that exact label.
    pub fn increment(&mut self, time: NaiveTime, day: Weekday) -> bool {
        match self.slot_index(time) {
            Some(row) => {
                self.counts[row][day.num_days_from_monday() as usize] += 1;
                true
            }
            None => false,
        }
    }

    /// Cell-wise sum. Both grids must share an interval.
    pub fn add(&mut self, other: &OccupancyGrid) -> StaffingResult<()> {
        if self.interval != other.interval {
            return Err(StaffingError::InvalidConfig(format!(
                "cannot add a {}-minute grid to a {}-minute grid",
                other.interval.minutes(),
                self.interval.minutes()
            )));
        }

        for (mine, theirs) in self.counts.iter_mut().zip(&other.counts) {
            for (a, b) in mine.iter_mut().zip(theirs) {
                *a += b;
            }
        }
        Ok(())
    }

    pub fn max_count(&self) -> u32 {
        self.counts.iter().flatten().copied().max().unwrap_or(0)
    }

    pub fn total(&self) -> u64 {
        self.counts.iter().flatten().map(|&c| u64::from(c)).sum()
    }
}

#[derive(Serialize)]
struct GridRecord {
    interval_minutes: u32,
    days: [&'static str; 7],
    rows: Vec<RowRecord>,
}

#[derive(Serialize)]
struct RowRecord {
    time: String,
    counts: [u32; 7],
}

impl Serialize for OccupancyGrid {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let record = GridRecord {
            interval_minutes: self.interval.minutes(),
            days: WEEKDAYS.map(day_label),
            rows: self
                .rows()
                .zip(&self.counts)
                .map(|(time, counts)| RowRecord {
                    time: time.format("%H:%M").to_string(),
                    counts: *counts,
                })
                .collect(),
        };
        record.serialize(serializer)
    }
}
