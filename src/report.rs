use std::fmt::Write;

use chrono::NaiveTime;

use crate::error::StaffingResult;
use crate::grid::OccupancyGrid;
use crate::models::{day_label, WEEKDAYS};
use crate::roster::Roster;

const SHADES: [char; 5] = [' ', '░', '▒', '▓', '█'];

/// Display form of a slot label, e.g. `09:30 PM`.
pub fn twelve_hour_label(time: NaiveTime) -> String {
    time.format("%I:%M %p").to_string()
}

pub fn render_people(roster: &Roster) -> String {
    let mut output = String::new();

    if roster.is_empty() {
        let _ = writeln!(output, "No people added yet.");
        return output;
    }

    let _ = writeln!(output, "## Current People");
    for person in roster.people() {
        let days = if person.days.is_empty() {
            "(none)".to_string()
        } else {
            person.days.iter().map(day_label).collect::<Vec<_>>().join(", ")
        };
        let _ = writeln!(
            output,
            "- {} [{}] {}: {} to {} ({})",
            person.name,
            person.mode,
            days,
            twelve_hour_label(person.shift.start()),
            twelve_hour_label(person.shift.end()),
            person.id
        );
    }

    output
}

pub fn render_table(grid: &OccupancyGrid) -> String {
    let mut output = String::new();

    let _ = write!(output, "{:<8}", "Time");
    for day in WEEKDAYS {
        let _ = write!(output, " {:>9}", day_label(day));
    }
    let _ = writeln!(output);

    for (row, time) in grid.rows().enumerate() {
        let _ = write!(output, "{:<8}", twelve_hour_label(time));
        for count in grid.row_counts(row) {
            let _ = write!(output, " {count:>9}");
        }
        let _ = writeln!(output);
    }

    output
}

/// Shade for `count`, scaled so the busiest cell is solid.
fn shade(count: u32, peak: u32) -> char {
    if count == 0 || peak == 0 {
        return SHADES[0];
    }
    let top = (SHADES.len() - 1) as u32;
    let level = (count * top).div_ceil(peak).clamp(1, top);
    SHADES[level as usize]
}

pub fn render_heatmap(grid: &OccupancyGrid, annotate: bool) -> String {
    let peak = grid.max_count();
    let width = if annotate { 5 } else { 3 };
    let mut output = String::new();

    let _ = write!(output, "{:<8}", "");
    for day in WEEKDAYS {
        let _ = write!(output, " {:^width$}", &day_label(day)[..3]);
    }
    let _ = writeln!(output);

    for (row, time) in grid.rows().enumerate() {
        let _ = write!(output, "{:<8}", twelve_hour_label(time));
        for count in grid.row_counts(row) {
            let cell = shade(count, peak);
            if annotate {
                let _ = write!(output, " {}{:<3}", cell.to_string().repeat(2), count);
            } else {
                let _ = write!(output, " {}", cell.to_string().repeat(width));
            }
        }
        let _ = writeln!(output);
    }

    let _ = writeln!(output);
    let _ = writeln!(output, "Peak staffing: {peak}");
    output
}

pub fn write_grid_csv<W: std::io::Write>(grid: &OccupancyGrid, writer: W) -> StaffingResult<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);

    let mut header = vec!["time"];
    header.extend(WEEKDAYS.map(day_label));
    csv_writer.write_record(&header)?;

    for (row, time) in grid.rows().enumerate() {
        let mut record = vec![time.format("%H:%M").to_string()];
        record.extend(grid.row_counts(row).iter().map(u32::to_string));
        csv_writer.write_record(&record)?;
    }

    csv_writer.flush()?;
    Ok(())
}
