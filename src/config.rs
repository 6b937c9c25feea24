//! Environment-driven defaults. Command-line flags take precedence.

use std::env;
use std::path::PathBuf;

use crate::error::{StaffingError, StaffingResult};
use crate::grid::Interval;

#[derive(Debug, Clone)]
pub struct Config {
    /// Slot width used when `--interval` is not given.
    pub interval: Interval,
    /// Roster used when `--roster` is not given.
    pub roster_path: Option<PathBuf>,
    /// Log filter used when `RUST_LOG` is unset.
    pub log_level: String,
}

impl Config {
    pub fn from_env() -> StaffingResult<Self> {
        dotenvy::dotenv().ok();

        let interval = match env::var("STAFFING_INTERVAL") {
            Ok(raw) => Interval::preset(parse_minutes(&raw)?)?,
            Err(_) => Interval::preset(30)?,
        };
        let roster_path = env::var("STAFFING_ROSTER").ok().map(PathBuf::from);
        let log_level = env::var("STAFFING_LOG_LEVEL").unwrap_or_else(|_| "warn".to_string());

        Ok(Self {
            interval,
            roster_path,
            log_level,
        })
    }
}

fn parse_minutes(raw: &str) -> StaffingResult<u32> {
    raw.trim().parse().map_err(|_| {
        StaffingError::InvalidConfig(format!(
            "STAFFING_INTERVAL must be a whole number of minutes, got {raw:?}"
        ))
    })
}
