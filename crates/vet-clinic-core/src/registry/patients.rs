//! Patient operations.

use tracing::{debug, info};

use super::{ClinicRegistry, RegistryError, RegistryResult};
use crate::models::{Patient, PatientId, PatientUpdate, Species};

impl ClinicRegistry {
    /// Register a new patient.
    ///
    /// Fails with [`RegistryError::DuplicatePatient`] if any patient already has
    /// exactly this pet name (case-sensitive).
    pub fn add_patient(
        &mut self,
        pet_name: impl Into<String>,
        species: Species,
        owner: impl Into<String>,
    ) -> RegistryResult<Patient> {
        let pet_name = pet_name.into();

        if self.patients.iter().any(|p| p.pet_name == pet_name) {
            debug!(pet_name = %pet_name, "rejected duplicate patient");
            return Err(RegistryError::DuplicatePatient(pet_name));
        }

        let patient = Patient::new(self.next_id, pet_name, species, owner.into());
        self.patients.push(patient.clone());
        self.next_id += 1;

        info!(patient_id = patient.id, pet_name = %patient.pet_name, "patient added");
        Ok(patient)
    }

    /// All patients in registration order.
    pub fn list_patients(&self) -> &[Patient] {
        &self.patients
    }

    /// Get a patient by ID.
    pub fn patient(&self, id: PatientId) -> Option<&Patient> {
        self.patients.iter().find(|p| p.id == id)
    }

    /// Get the first patient whose current name matches exactly.
    pub fn patient_by_name(&self, pet_name: &str) -> Option<&Patient> {
        self.patients.iter().find(|p| p.pet_name == pet_name)
    }

    /// Apply a partial update to the patient currently named `pet_name`.
    ///
    /// Steps run in a fixed order: rename (re-keying any appointment), then
    /// species, then owner. The species and owner steps sync the appointment
    /// found under the patient's name *after* the rename. Blank fields are
    /// skipped. Name uniqueness is not re-checked here.
    pub fn update_patient_info(
        &mut self,
        pet_name: &str,
        update: PatientUpdate,
    ) -> RegistryResult<Patient> {
        let Some(idx) = self.patients.iter().position(|p| p.pet_name == pet_name) else {
            debug!(pet_name, "update for unknown patient");
            return Err(RegistryError::PatientNotFound(pet_name.to_string()));
        };

        if update.is_noop() {
            debug!(pet_name, "update carries no changes");
        }

        let PatientUpdate {
            name,
            species,
            owner,
        } = update;
        let patient = &mut self.patients[idx];

        if let Some(new_name) = name.into_value() {
            let old_name = std::mem::replace(&mut patient.pet_name, new_name);
            if self.appointments.rekey(&old_name, &patient.pet_name) {
                debug!(from = %old_name, to = %patient.pet_name, "appointment re-keyed");
            }
        }

        if let Some(new_species) = species.into_value() {
            patient.species = new_species;
            if let Some(appt) = self.appointments.get_mut(&patient.pet_name) {
                appt.species = new_species;
            }
        }

        if let Some(new_owner) = owner.into_value() {
            if let Some(appt) = self.appointments.get_mut(&patient.pet_name) {
                appt.owner = new_owner.clone();
            }
            patient.owner = new_owner;
        }

        info!(patient_id = patient.id, pet_name = %patient.pet_name, "patient updated");
        Ok(patient.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::FieldUpdate;
    use chrono::{NaiveDate, NaiveTime};

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 5, 1).unwrap()
    }

    fn time() -> NaiveTime {
        NaiveTime::from_hms_opt(10, 0, 0).unwrap()
    }

    #[test]
    fn test_add_assigns_sequential_ids() {
        let mut registry = ClinicRegistry::new();

        let rex = registry.add_patient("Rex", Species::Dog, "Alice").unwrap();
        let tom = registry.add_patient("Tom", Species::Cat, "Bob").unwrap();

        assert_eq!(rex.id, 1);
        assert_eq!(tom.id, 2);
        assert_eq!(registry.list_patients().len(), 2);
        assert_eq!(registry.list_patients()[0].pet_name, "Rex");
    }

    #[test]
    fn test_add_duplicate_rejected() {
        let mut registry = ClinicRegistry::new();
        registry.add_patient("Rex", Species::Dog, "Alice").unwrap();

        let err = registry.add_patient("Rex", Species::Cat, "Bob").unwrap_err();

        assert_eq!(err, RegistryError::DuplicatePatient("Rex".into()));
        assert_eq!(registry.patient_count(), 1);
        assert_eq!(registry.list_patients()[0].owner, "Alice");
    }

    #[test]
    fn test_duplicate_check_is_case_sensitive() {
        let mut registry = ClinicRegistry::new();
        registry.add_patient("Rex", Species::Dog, "Alice").unwrap();

        assert!(registry.add_patient("rex", Species::Dog, "Alice").is_ok());
        assert!(registry.add_patient("Rex ", Species::Dog, "Alice").is_ok());
        assert_eq!(registry.patient_count(), 3);
    }

    #[test]
    fn test_rejected_add_does_not_consume_id() {
        let mut registry = ClinicRegistry::new();
        registry.add_patient("Rex", Species::Dog, "Alice").unwrap();
        registry.add_patient("Rex", Species::Dog, "Alice").unwrap_err();

        let tom = registry.add_patient("Tom", Species::Cat, "Bob").unwrap();
        assert_eq!(tom.id, 2);
    }

    #[test]
    fn test_lookup_by_id_and_name() {
        let mut registry = ClinicRegistry::new();
        registry.add_patient("Rex", Species::Dog, "Alice").unwrap();

        assert_eq!(registry.patient(1).unwrap().pet_name, "Rex");
        assert!(registry.patient(2).is_none());
        assert_eq!(registry.patient_by_name("Rex").unwrap().id, 1);
        assert!(registry.patient_by_name("rex").is_none());
    }

    #[test]
    fn test_update_unknown_patient() {
        let mut registry = ClinicRegistry::new();
        registry.add_patient("Rex", Species::Dog, "Alice").unwrap();

        let err = registry
            .update_patient_info("Max", PatientUpdate::new().owner("Bob"))
            .unwrap_err();

        assert_eq!(err, RegistryError::PatientNotFound("Max".into()));
        assert_eq!(registry.list_patients()[0].owner, "Alice");
    }

    #[test]
    fn test_update_without_changes_succeeds() {
        let mut registry = ClinicRegistry::new();
        registry.add_patient("Rex", Species::Dog, "Alice").unwrap();

        let update = PatientUpdate {
            name: FieldUpdate::Empty,
            species: FieldUpdate::Empty,
            owner: FieldUpdate::Unset,
        };
        assert!(update.is_noop());
        let patient = registry.update_patient_info("Rex", update).unwrap();

        assert_eq!(patient.pet_name, "Rex");
        assert_eq!(patient.owner, "Alice");
    }

    #[test]
    fn test_rename_rekeys_appointment() {
        let mut registry = ClinicRegistry::new();
        registry.add_patient("Rex", Species::Dog, "Alice").unwrap();
        let booked = registry.book_appointment(1, date(), time()).unwrap();

        registry
            .update_patient_info("Rex", PatientUpdate::new().name("Max"))
            .unwrap();

        let appts = registry.list_appointments();
        assert_eq!(appts.len(), 1);
        assert_eq!(appts[0].0, "Max");
        assert_eq!(appts[0].1, &booked);
        assert!(registry.appointment("Rex").is_none());
    }

    #[test]
    fn test_rename_to_same_name_moves_appointment_last() {
        let mut registry = ClinicRegistry::new();
        registry.add_patient("Rex", Species::Dog, "Alice").unwrap();
        registry.add_patient("Tom", Species::Cat, "Bob").unwrap();
        registry.book_appointment(1, date(), time()).unwrap();
        registry.book_appointment(2, date(), time()).unwrap();

        registry
            .update_patient_info("Rex", PatientUpdate::new().name("Rex"))
            .unwrap();

        let keys: Vec<&str> = registry
            .list_appointments()
            .into_iter()
            .map(|(name, _)| name)
            .collect();
        assert_eq!(keys, vec!["Tom", "Rex"]);
        assert_eq!(registry.appointment("Rex").unwrap().owner, "Alice");
    }

    #[test]
    fn test_rename_with_species_and_owner_syncs_under_new_name() {
        let mut registry = ClinicRegistry::new();
        registry.add_patient("Rex", Species::Dog, "Alice").unwrap();
        registry.book_appointment(1, date(), time()).unwrap();

        let update = PatientUpdate::new()
            .name("Max")
            .species(Species::Cat)
            .owner("Bob");
        let patient = registry.update_patient_info("Rex", update).unwrap();

        assert_eq!(patient.id, 1);
        assert_eq!(patient.pet_name, "Max");
        let appt = registry.appointment("Max").unwrap();
        assert_eq!(appt.species, Species::Cat);
        assert_eq!(appt.owner, "Bob");
        assert_eq!(appt.scheduled_at, date().and_time(time()));
    }

    #[test]
    fn test_update_without_appointment_only_touches_patient() {
        let mut registry = ClinicRegistry::new();
        registry.add_patient("Rex", Species::Dog, "Alice").unwrap();

        registry
            .update_patient_info("Rex", PatientUpdate::new().species(Species::Cat))
            .unwrap();

        assert_eq!(registry.patient(1).unwrap().species, Species::Cat);
        assert_eq!(registry.appointment_count(), 0);
    }

    #[test]
    fn test_rename_does_not_recheck_uniqueness() {
        let mut registry = ClinicRegistry::new();
        registry.add_patient("Rex", Species::Dog, "Alice").unwrap();
        registry.add_patient("Tom", Species::Cat, "Bob").unwrap();

        registry
            .update_patient_info("Tom", PatientUpdate::new().name("Rex"))
            .unwrap();

        let names: Vec<&str> = registry
            .list_patients()
            .iter()
            .map(|p| p.pet_name.as_str())
            .collect();
        assert_eq!(names, vec!["Rex", "Rex"]);
        // Name lookups hit the first registered match
        assert_eq!(registry.patient_by_name("Rex").unwrap().id, 1);
    }
}
