//! In-memory clinic registry.
//!
//! Owns the patient list and the appointment book. Appointments are keyed by
//! the patient's *current* pet name, so every patient write goes through the
//! registry to keep the two in step.

mod appointments;
mod book;
mod lookup;
mod patients;
mod report;

pub use lookup::SUGGESTION_THRESHOLD;

use thiserror::Error;

use crate::models::{Patient, PatientId};
use book::AppointmentBook;

/// Registry errors. A failed operation never mutates the registry.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RegistryError {
    #[error("Patient record for {0} already exists")]
    DuplicatePatient(String),

    #[error("Patient with ID {0} not found")]
    PatientIdNotFound(PatientId),

    #[error("Patient {0} not found")]
    PatientNotFound(String),

    #[error("{0} already has an appointment")]
    AlreadyBooked(String),

    #[error("No appointment found for {0}")]
    NoAppointment(String),
}

impl RegistryError {
    /// The pet name the failed lookup used, for name-keyed misses.
    pub fn missed_name(&self) -> Option<&str> {
        match self {
            RegistryError::PatientNotFound(name) | RegistryError::NoAppointment(name) => {
                Some(name)
            }
            _ => None,
        }
    }
}

pub type RegistryResult<T> = Result<T, RegistryError>;

/// Patients and their active appointments for one clinic session.
#[derive(Debug, Clone)]
pub struct ClinicRegistry {
    patients: Vec<Patient>,
    appointments: AppointmentBook,
    next_id: PatientId,
}

impl Default for ClinicRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl ClinicRegistry {
    /// Create an empty registry. The first patient gets ID 1.
    pub fn new() -> Self {
        Self {
            patients: Vec::new(),
            appointments: AppointmentBook::new(),
            next_id: 1,
        }
    }

    pub fn patient_count(&self) -> usize {
        self.patients.len()
    }

    pub fn appointment_count(&self) -> usize {
        self.appointments.len()
    }
}
