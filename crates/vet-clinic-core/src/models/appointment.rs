//! Appointment models.

use std::fmt;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use super::patient::Species;

/// Display format for scheduled times, e.g. `2024-05-01 10:00 AM`.
pub const SCHEDULE_FORMAT: &str = "%Y-%m-%d %I:%M %p";

/// The single active appointment for a pet.
///
/// Species and owner are copies of the patient's fields, kept in step by the
/// registry whenever the patient is updated.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Appointment {
    /// Species of the patient at booking or last update
    pub species: Species,
    /// Owner of the patient at booking or last update
    pub owner: String,
    /// Combined date and time of the visit
    pub scheduled_at: NaiveDateTime,
}

impl Appointment {
    /// Create a new appointment.
    pub fn new(species: Species, owner: String, scheduled_at: NaiveDateTime) -> Self {
        Self {
            species,
            owner,
            scheduled_at,
        }
    }

    /// Scheduled time in display format.
    pub fn scheduled_display(&self) -> String {
        self.scheduled_at.format(SCHEDULE_FORMAT).to_string()
    }
}

/// Appointment column of a report row.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "status", content = "scheduled_at", rename_all = "snake_case")]
pub enum AppointmentSummary {
    Scheduled(NaiveDateTime),
    NoAppointment,
}

impl AppointmentSummary {
    pub fn is_scheduled(&self) -> bool {
        matches!(self, AppointmentSummary::Scheduled(_))
    }
}

impl From<Option<&Appointment>> for AppointmentSummary {
    fn from(appointment: Option<&Appointment>) -> Self {
        match appointment {
            Some(a) => AppointmentSummary::Scheduled(a.scheduled_at),
            None => AppointmentSummary::NoAppointment,
        }
    }
}

impl fmt::Display for AppointmentSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppointmentSummary::Scheduled(at) => write!(f, "{}", at.format(SCHEDULE_FORMAT)),
            AppointmentSummary::NoAppointment => f.write_str("No appointment"),
        }
    }
}
