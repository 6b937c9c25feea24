use tracing::{debug, info};

use crate::grid::{Interval, OccupancyGrid};
use crate::models::PersonSchedule;
use crate::projection::{project, resolve_working_days};

/// Builds a fresh grid and projects every person onto it once.
pub fn compute_occupancy(people: &[PersonSchedule], interval: Interval) -> OccupancyGrid {
    let mut grid = OccupancyGrid::new(interval);

    for person in people {
        let days = resolve_working_days(person.mode, person.days);
        let applied = project(&mut grid, days, &person.shift);
        debug!(
            person = %person.name,
            id = %person.id,
            working_days = days.len(),
            cells = applied,
            "projected shift"
        );
    }

    info!(
        people = people.len(),
        interval_minutes = interval.minutes(),
        peak = grid.max_count(),
        "occupancy grid computed"
    );
    grid
}
