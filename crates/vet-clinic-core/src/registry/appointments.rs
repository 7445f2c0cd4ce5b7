//! Appointment operations.

use chrono::{NaiveDate, NaiveTime};
use tracing::{debug, info};

use super::{ClinicRegistry, RegistryError, RegistryResult};
use crate::models::{Appointment, PatientId};

impl ClinicRegistry {
    /// Book the single active appointment for a patient.
    ///
    /// The entry is keyed by the patient's current pet name and copies its
    /// species and owner.
    pub fn book_appointment(
        &mut self,
        patient_id: PatientId,
        date: NaiveDate,
        time: NaiveTime,
    ) -> RegistryResult<Appointment> {
        let patient = self
            .patients
            .iter()
            .find(|p| p.id == patient_id)
            .ok_or(RegistryError::PatientIdNotFound(patient_id))?;

        if self.appointments.contains(&patient.pet_name) {
            debug!(patient_id, pet_name = %patient.pet_name, "patient already booked");
            return Err(RegistryError::AlreadyBooked(patient.pet_name.clone()));
        }

        let appointment = Appointment::new(
            patient.species,
            patient.owner.clone(),
            date.and_time(time),
        );
        self.appointments
            .insert(patient.pet_name.clone(), appointment.clone());

        info!(
            patient_id,
            pet_name = %patient.pet_name,
            scheduled_at = %appointment.scheduled_display(),
            "appointment booked"
        );
        Ok(appointment)
    }

    /// All appointments as `(pet_name, appointment)` in book order.
    pub fn list_appointments(&self) -> Vec<(&str, &Appointment)> {
        self.appointments.iter().collect()
    }

    /// Get the appointment stored under a pet name.
    pub fn appointment(&self, pet_name: &str) -> Option<&Appointment> {
        self.appointments.get(pet_name)
    }

    /// Cancel the appointment stored under `pet_name`.
    ///
    /// The name is used as the key directly, without a patient lookup, so a
    /// name from before a rename reports [`RegistryError::NoAppointment`].
    pub fn cancel_appointment(&mut self, pet_name: &str) -> RegistryResult<Appointment> {
        match self.appointments.remove(pet_name) {
            Some(appointment) => {
                info!(pet_name, "appointment canceled");
                Ok(appointment)
            }
            None => {
                debug!(pet_name, "no appointment to cancel");
                Err(RegistryError::NoAppointment(pet_name.to_string()))
            }
        }
    }
}
