use chrono::{NaiveTime, Weekday};
use serde::Deserialize;
use uuid::Uuid;

use crate::error::{StaffingError, StaffingResult};
use crate::models::{DayMode, DaySet, PersonSchedule, ShiftWindow};

/// A person as typed into a form or read from a roster file, before validation.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PersonInput {
    #[serde(default)]
    pub id: Option<String>,
    pub name: String,
    pub mode: String,
    #[serde(default)]
    pub days: String,
    pub start: String,
    pub end: String,
}

impl PersonInput {
    pub fn validate(&self) -> StaffingResult<PersonSchedule> {
        let id = match self.id.as_deref().map(str::trim) {
            Some(raw) if !raw.is_empty() => Uuid::parse_str(raw)
                .map_err(|e| StaffingError::InvalidConfig(format!("invalid id {raw:?}: {e}")))?,
            _ => Uuid::new_v4(),
        };
        let mode = parse_mode(&self.mode)?;
        let days = parse_days(&self.days)?;
        let shift = ShiftWindow::new(parse_time(&self.start)?, parse_time(&self.end)?)?;

        PersonSchedule::new(id, &self.name, mode, days, shift)
    }
}

pub fn parse_mode(raw: &str) -> StaffingResult<DayMode> {
    let normalized = raw.trim().to_ascii_lowercase().replace([' ', '-'], "_");
    match normalized.as_str() {
        "working_days" | "working" => Ok(DayMode::WorkingDays),
        "days_off" | "off" => Ok(DayMode::DaysOff),
        _ => Err(StaffingError::UnknownMode(raw.to_string())),
    }
}

/// Accepts full or three-letter weekday names separated by `;`, `,` or `|`.
pub fn parse_days(raw: &str) -> StaffingResult<DaySet> {
    raw.split([';', ',', '|'])
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .map(|part| {
            part.parse::<Weekday>()
                .map_err(|_| StaffingError::UnknownDay(part.to_string()))
        })
        .collect()
}

pub fn parse_time(raw: &str) -> StaffingResult<NaiveTime> {
    let raw = raw.trim();
    NaiveTime::parse_from_str(raw, "%H:%M:%S")
        .or_else(|_| NaiveTime::parse_from_str(raw, "%H:%M"))
        .map_err(|_| StaffingError::InvalidTime(raw.to_string()))
}

/// Ordered list of people the grid is computed from.
#[derive(Debug, Clone, Default)]
pub struct Roster {
    people: Vec<PersonSchedule>,
}

impl Roster {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn people(&self) -> &[PersonSchedule] {
        &self.people
    }

    pub fn len(&self) -> usize {
        self.people.len()
    }

    pub fn is_empty(&self) -> bool {
        self.people.is_empty()
    }

    pub fn get(&self, id: Uuid) -> Option<&PersonSchedule> {
        self.people.iter().find(|p| p.id == id)
    }

    /// Appends `person`, or replaces in place an entry with the same id.
    /// Returns `true` if an existing entry was replaced.
    pub fn add(&mut self, person: PersonSchedule) -> bool {
        match self.position(person.id) {
            Some(index) => {
                self.people[index] = person;
                true
            }
            None => {
                self.people.push(person);
                false
            }
        }
    }

    /// Replaces the entry `id`, keeping `id` regardless of `person.id`.
    pub fn update(&mut self, id: Uuid, mut person: PersonSchedule) -> StaffingResult<()> {
        let index = self.position(id).ok_or(StaffingError::PersonNotFound(id))?;
        person.id = id;
        self.people[index] = person;
        Ok(())
    }

    pub fn remove(&mut self, id: Uuid) -> StaffingResult<PersonSchedule> {
        let index = self.position(id).ok_or(StaffingError::PersonNotFound(id))?;
        Ok(self.people.remove(index))
    }

    pub fn reset(&mut self) {
        self.people.clear();
    }

    fn position(&self, id: Uuid) -> Option<usize> {
        self.people.iter().position(|p| p.id == id)
    }
}
