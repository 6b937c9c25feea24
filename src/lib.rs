//! Weekly staffing occupancy: how many people are on duty in every time slot
//! of a repeating Monday-to-Sunday week.
//!
//! [`compute_occupancy`] is a pure function of a person list and an
//! [`Interval`]. Rosters, CSV loading and rendering sit around it for the
//! command-line front end.

pub mod config;
pub mod error;
pub mod grid;
pub mod loader;
pub mod models;
pub mod occupancy;
pub mod projection;
pub mod report;
pub mod roster;

pub use error::{StaffingError, StaffingResult};
pub use grid::{Interval, OccupancyGrid};
pub use models::{DayMode, DaySet, PersonSchedule, ShiftWindow};
pub use occupancy::compute_occupancy;
pub use projection::{project, resolve_working_days};
pub use roster::{PersonInput, Roster};
