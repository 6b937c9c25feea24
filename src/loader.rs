//! CSV roster loading.
//!
//! ```csv
//! id,name,mode,days,start,end
//! ,Avery Lee,working_days,Mon;Tue;Wed;Thu;Fri,09:00,17:00
//! 0c22f1f1-9184-4fd4-9b21-28c68a6a89dc,Jules Moreno,days_off,Sat;Sun,22:00,06:00
//! ```
//!
//! A blank `id` gets a fresh one. A repeated `id` replaces the earlier row in
//! place, the same way editing a person does.

use std::io::Read;
use std::path::Path;

use tracing::{debug, warn};

use crate::error::{StaffingError, StaffingResult};
use crate::roster::{PersonInput, Roster};

pub fn load_roster_csv(path: &Path) -> StaffingResult<Roster> {
    let file = std::fs::File::open(path)?;
    load_roster_reader(file)
}

pub fn load_roster_reader<R: Read>(reader: R) -> StaffingResult<Roster> {
    let mut csv_reader = csv::ReaderBuilder::new().trim(csv::Trim::Headers).from_reader(reader);
    let mut roster = Roster::new();

    for (index, result) in csv_reader.deserialize::<PersonInput>().enumerate() {
        let record = index + 1;
        let person = result
            .map_err(StaffingError::from)
            .and_then(|row| row.validate())
            .map_err(|e| StaffingError::Record {
                record,
                source: Box::new(e),
            })?;

        debug!(record, name = %person.name, id = %person.id, "loaded person");
        let name = person.name.clone();
        if roster.add(person) {
            warn!(record, name = %name, "duplicate id replaced an earlier roster entry");
        }
    }

    Ok(roster)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::DayMode;
    use chrono::Weekday;
    use std::io::{Cursor, Write};

    const ROSTER: &str = "\
id,name,mode,days,start,end
,Avery Lee,working_days,Mon;Tue;Wed;Thu;Fri,09:00,17:00
0c22f1f1-9184-4fd4-9b21-28c68a6a89dc,Jules Moreno,days_off,Sat;Sun,22:00,06:00
,Kiara Patel,Working days,,07:30,15:30
";

    #[test]
    fn loads_rows_in_file_order() {
        let roster = load_roster_reader(Cursor::new(ROSTER)).unwrap();
        let people = roster.people();

        assert_eq!(people.len(), 3);
        assert_eq!(people[0].name, "Avery Lee");
        assert_eq!(people[0].days.len(), 5);
        assert_eq!(people[1].mode, DayMode::DaysOff);
        assert!(people[1].days.contains(Weekday::Sun));
        assert_eq!(people[1].id.to_string(), "0c22f1f1-9184-4fd4-9b21-28c68a6a89dc");
        assert!(people[2].days.is_empty());
    }

    #[test]
    fn repeated_id_updates_the_earlier_row() {
        let csv = format!(
            "{ROSTER}0c22f1f1-9184-4fd4-9b21-28c68a6a89dc,Jules M.,working_days,Mon,08:00,12:00\n"
        );
        let roster = load_roster_reader(Cursor::new(csv)).unwrap();

        assert_eq!(roster.len(), 3);
        assert_eq!(roster.people()[1].name, "Jules M.");
        assert_eq!(roster.people()[1].mode, DayMode::WorkingDays);
    }

    #[test]
    fn bad_row_reports_its_record_number() {
        let csv = "\
id,name,mode,days,start,end
,Avery Lee,working_days,Mon,09:00,17:00
,Jules Moreno,working_days,Mon,09:00,09:00
";
        let err = load_roster_reader(Cursor::new(csv)).unwrap_err();
        match err {
            StaffingError::Record { record, source } => {
                assert_eq!(record, 2);
                assert!(matches!(*source, StaffingError::DegenerateShift { .. }));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn missing_column_is_a_csv_error() {
        let csv = "name,mode,days,start\nAvery,working_days,Mon,09:00\n";
        let err = load_roster_reader(Cursor::new(csv)).unwrap_err();
        assert!(matches!(err, StaffingError::Record { record: 1, .. }));
    }

    #[test]
    fn loads_from_a_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(ROSTER.as_bytes()).unwrap();

        let roster = load_roster_csv(file.path()).unwrap();
        assert_eq!(roster.len(), 3);
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_roster_csv(&dir.path().join("absent.csv")).unwrap_err();
        assert!(matches!(err, StaffingError::Io(_)));
    }
}
