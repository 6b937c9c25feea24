use chrono::{Duration, NaiveTime, Weekday};

use crate::grid::OccupancyGrid;
use crate::models::{DayMode, DaySet, ShiftWindow};

/// Days on which a person's shift template applies.
pub fn resolve_working_days(mode: DayMode, days: DaySet) -> DaySet {
    match mode {
        DayMode::WorkingDays => days,
        DayMode::DaysOff => days.complement(),
    }
}

#[derive(Debug, Clone, Copy)]
enum Limit {
    Before(NaiveTime),
    UpTo(NaiveTime),
}

/// Times from `from` in `step` increments until `limit`, never crossing midnight.
struct Ticks {
    next: Option<NaiveTime>,
    step: Duration,
    limit: Limit,
}

impl Ticks {
    fn new(from: NaiveTime, step: Duration, limit: Limit) -> Self {
        Self { next: Some(from), step, limit }
    }
}

impl Iterator for Ticks {
    type Item = NaiveTime;

    fn next(&mut self) -> Option<NaiveTime> {
        let current = self.next?;
        let within = match self.limit {
            Limit::Before(end) => current < end,
            Limit::UpTo(last) => current <= last,
        };
        if !within {
            self.next = None;
            return None;
        }

        let (following, wrapped_secs) = current.overflowing_add_signed(self.step);
        self.next = (wrapped_secs == 0).then_some(following);
        Some(current)
    }
}

fn last_second_of_day() -> NaiveTime {
    NaiveTime::from_hms_opt(23, 59, 59).unwrap_or_default()
}

/// Adds one on-duty person to every slot `shift` covers on each of `days`.
///
/// Ticks are generated from the shift's own start, so a start that is not on
/// a slot boundary produces ticks with no matching row; those are skipped.
/// Overnight shifts put `[start, 23:59:59]` on the day itself and
/// `[00:00, end)` on the day after, with Sunday wrapping to Monday.
///
/// Returns the number of cells incremented.
pub fn project(grid: &mut OccupancyGrid, days: DaySet, shift: &ShiftWindow) -> usize {
    let step = grid.interval().step();
    let mut applied = 0;

    for day in days.iter() {
        if shift.is_overnight() {
            let evening = Ticks::new(shift.start(), step, Limit::UpTo(last_second_of_day()));
            applied += apply(grid, evening, day);

            let morning = Ticks::new(NaiveTime::default(), step, Limit::Before(shift.end()));
            applied += apply(grid, morning, day.succ());
        } else {
            let ticks = Ticks::new(shift.start(), step, Limit::Before(shift.end()));
            applied += apply(grid, ticks, day);
        }
    }

    applied
}

fn apply(grid: &mut OccupancyGrid, ticks: Ticks, day: Weekday) -> usize {
    ticks.filter(|&time| grid.increment(time, day)).count()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::Interval;

    fn hm(hour: u32, minute: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(hour, minute, 0).unwrap()
    }

    fn grid(minutes: u32) -> OccupancyGrid {
        OccupancyGrid::new(Interval::new(minutes).unwrap())
    }

    fn only(day: Weekday) -> DaySet {
        [day].into_iter().collect()
    }

    #[test]
    fn days_off_resolves_to_the_complement() {
        let weekend: DaySet = [Weekday::Sat, Weekday::Sun].into_iter().collect();
        let weekdays: DaySet = [Weekday::Mon, Weekday::Tue, Weekday::Wed, Weekday::Thu, Weekday::Fri]
            .into_iter()
            .collect();

        assert_eq!(resolve_working_days(DayMode::DaysOff, weekend), weekdays);
        assert_eq!(resolve_working_days(DayMode::WorkingDays, weekend), weekend);
        assert_eq!(resolve_working_days(DayMode::DaysOff, DaySet::empty()), DaySet::all());
        assert!(resolve_working_days(DayMode::WorkingDays, DaySet::empty()).is_empty());
    }

    #[test]
    fn same_day_shift_covers_start_through_last_slot_before_end() {
        let mut grid = grid(60);
        let shift = ShiftWindow::new(hm(9, 0), hm(17, 0)).unwrap();

        assert_eq!(project(&mut grid, only(Weekday::Mon), &shift), 8);
        for hour in 0..24 {
            let expected = u32::from((9..17).contains(&hour));
            assert_eq!(grid.count_at(hm(hour, 0), Weekday::Mon), Some(expected), "hour {hour}");
        }
        assert_eq!(grid.total(), 8);
    }

    #[test]
    fn overnight_shift_splits_across_midnight() {
        let mut grid = grid(60);
        let shift = ShiftWindow::new(hm(22, 0), hm(6, 0)).unwrap();

        assert_eq!(project(&mut grid, only(Weekday::Mon), &shift), 8);
        assert_eq!(grid.count_at(hm(22, 0), Weekday::Mon), Some(1));
        assert_eq!(grid.count_at(hm(23, 0), Weekday::Mon), Some(1));
        for hour in 0..6 {
            assert_eq!(grid.count_at(hm(hour, 0), Weekday::Tue), Some(1));
        }
        assert_eq!(grid.count_at(hm(6, 0), Weekday::Tue), Some(0));
        assert_eq!(grid.total(), 8);
    }

    #[test]
    fn half_hour_overnight_boundary_yields_two_slots() {
        let mut grid = grid(30);
        let shift = ShiftWindow::new(hm(23, 30), hm(0, 30)).unwrap();

        assert_eq!(project(&mut grid, only(Weekday::Thu), &shift), 2);
        assert_eq!(grid.count_at(hm(23, 30), Weekday::Thu), Some(1));
        assert_eq!(grid.count_at(hm(0, 0), Weekday::Fri), Some(1));
        assert_eq!(grid.count_at(hm(0, 30), Weekday::Fri), Some(0));
        assert_eq!(grid.total(), 2);
    }

    #[test]
    fn sunday_overnight_wraps_to_monday() {
        let mut grid = grid(60);
        let shift = ShiftWindow::new(hm(23, 0), hm(2, 0)).unwrap();

        project(&mut grid, only(Weekday::Sun), &shift);
        assert_eq!(grid.count_at(hm(23, 0), Weekday::Sun), Some(1));
        assert_eq!(grid.count_at(hm(0, 0), Weekday::Mon), Some(1));
        assert_eq!(grid.count_at(hm(1, 0), Weekday::Mon), Some(1));
        assert_eq!(grid.total(), 3);
    }

    #[test]
    fn shift_ending_at_midnight_stays_on_its_day() {
        let mut grid = grid(60);
        let shift = ShiftWindow::new(hm(20, 0), hm(0, 0)).unwrap();

        assert_eq!(project(&mut grid, only(Weekday::Fri), &shift), 4);
        assert_eq!(grid.count_at(hm(23, 0), Weekday::Fri), Some(1));
        assert_eq!(grid.count_at(hm(0, 0), Weekday::Sat), Some(0));
    }

    #[test]
    fn misaligned_start_is_skipped_silently() {
        let mut grid = grid(60);
        let shift = ShiftWindow::new(hm(9, 30), hm(12, 0)).unwrap();

        assert_eq!(project(&mut grid, only(Weekday::Wed), &shift), 0);
        assert_eq!(grid.total(), 0);
    }

    #[test]
    fn start_with_seconds_never_matches_a_row() {
        let mut grid = grid(15);
        let start = NaiveTime::from_hms_opt(8, 0, 30).unwrap();
        let shift = ShiftWindow::new(start, hm(9, 0)).unwrap();

        assert_eq!(project(&mut grid, DaySet::all(), &shift), 0);
    }

    #[test]
    fn coarse_interval_keeps_only_aligned_ticks() {
        // 15-minute shift boundaries on an hourly grid.
        let mut grid = grid(60);
        let shift = ShiftWindow::new(hm(8, 0), hm(10, 45)).unwrap();

        assert_eq!(project(&mut grid, only(Weekday::Tue), &shift), 3);
        assert_eq!(grid.count_at(hm(10, 0), Weekday::Tue), Some(1));
    }

    #[test]
    fn empty_day_set_projects_nothing() {
        let mut grid = grid(30);
        let shift = ShiftWindow::new(hm(9, 0), hm(17, 0)).unwrap();
        assert_eq!(project(&mut grid, DaySet::empty(), &shift), 0);
    }
}
