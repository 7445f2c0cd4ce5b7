//! Report generation.

use super::ClinicRegistry;
use crate::export::{ClinicReport, ReportRow};
use crate::models::AppointmentSummary;

impl ClinicRegistry {
    /// One row per patient, joined to the appointment under its current name.
    ///
    /// With no patients the report is empty, whatever the appointment book holds.
    pub fn generate_report(&self) -> ClinicReport {
        let rows = self
            .patients
            .iter()
            .map(|patient| {
                let summary = AppointmentSummary::from(self.appointments.get(&patient.pet_name));
                ReportRow::new(patient, summary)
            })
            .collect();

        ClinicReport::new(rows)
    }
}
