//! Interactive menu session.
//!
//! Reads a menu choice, gathers validated input, calls into the registry and
//! prints the outcome. Business-rule failures are reported and the loop
//! continues; only option 8 or closed input ends the session.

use std::io::{BufRead, Write};

use anyhow::{Context, Result};
use tracing::{debug, info};
use vet_clinic_core::{ClinicRegistry, FieldUpdate, PatientId, PatientUpdate, RegistryError};

use crate::config::{Config, ReportFormat};
use crate::input::{is_eof, Prompter};
use crate::menu::{render_menu, MenuChoice};
use crate::table::{appointments_table, patients_table, report_table};

/// Whether the loop keeps going after an action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit,
}

/// One interactive run over a fresh registry.
pub struct Session<R, W> {
    registry: ClinicRegistry,
    prompter: Prompter<R, W>,
    config: Config,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(config: Config, prompter: Prompter<R, W>) -> Self {
        Self {
            registry: ClinicRegistry::new(),
            prompter,
            config,
        }
    }

    /// Consume the session, returning the final registry and the output sink.
    pub fn into_parts(self) -> (ClinicRegistry, W) {
        (self.registry, self.prompter.into_output())
    }

    /// Run until the user exits or input closes.
    pub fn run(&mut self) -> Result<()> {
        info!(clinic = %self.config.clinic_name, "session started");

        loop {
            match self.step() {
                Ok(Flow::Continue) => {}
                Ok(Flow::Exit) => break,
                Err(e) if is_eof(&e) => {
                    info!("input closed, ending session");
                    break;
                }
                Err(e) => return Err(e),
            }
        }

        info!(
            patients = self.registry.patient_count(),
            appointments = self.registry.appointment_count(),
            "session ended"
        );
        Ok(())
    }

    /// Show the menu and handle one selection.
    fn step(&mut self) -> Result<Flow> {
        self.prompter.say(render_menu(&self.config.clinic_name))?;
        let number = self.prompter.integer("Select an option: ")?;

        match MenuChoice::from_number(number) {
            Some(choice) => self.dispatch(choice),
            None => {
                self.prompter
                    .say("Invalid choice. Please select a valid option.")?;
                Ok(Flow::Continue)
            }
        }
    }

    /// Perform a single menu action.
    pub fn dispatch(&mut self, choice: MenuChoice) -> Result<Flow> {
        debug!(?choice, "menu selection");

        match choice {
            MenuChoice::AddPatient => self.add_patient()?,
            MenuChoice::ListPatients => self.list_patients()?,
            MenuChoice::BookAppointment => self.book_appointment()?,
            MenuChoice::ViewAppointments => self.list_appointments()?,
            MenuChoice::UpdatePatient => self.update_patient()?,
            MenuChoice::CancelAppointment => self.cancel_appointment()?,
            MenuChoice::GenerateReport => self.generate_report()?,
            MenuChoice::Exit => {
                self.prompter
                    .say(format!("Exiting the {} Management System.", self.config.clinic_name))?;
                return Ok(Flow::Exit);
            }
        }

        Ok(Flow::Continue)
    }

    fn add_patient(&mut self) -> Result<()> {
        let pet_name = self.prompter.line("Enter pet's name: ")?;
        let species = self
            .prompter
            .species("Enter pet's species (dog or cat): ")?;
        let owner = self.prompter.line("Enter owner's name: ")?;

        match self.registry.add_patient(pet_name, species, owner) {
            Ok(patient) => self.prompter.say(format!(
                "Patient {} added successfully with ID {}.",
                patient.pet_name, patient.id
            ))?,
            Err(e) => self.report_error(&e)?,
        }
        Ok(())
    }

    fn list_patients(&mut self) -> Result<()> {
        let patients = self.registry.list_patients();
        if patients.is_empty() {
            self.prompter.say("No patients available.")?;
        } else {
            let rendered = patients_table(patients).render();
            self.prompter.say(rendered.trim_end())?;
        }
        Ok(())
    }

    fn book_appointment(&mut self) -> Result<()> {
        self.list_patients()?;
        let raw_id = self
            .prompter
            .integer("Enter patient ID to book an appointment: ")?;
        let date = self
            .prompter
            .date("Enter appointment date (YYYY-MM-DD): ")?;
        let time = self
            .prompter
            .time("Enter appointment time (HH:MM AM/PM): ")?;

        // Negative or oversized IDs can never match a registered patient
        let Ok(patient_id) = PatientId::try_from(raw_id) else {
            self.prompter
                .say(format!("Patient with ID {} not found.", raw_id))?;
            return Ok(());
        };

        match self.registry.book_appointment(patient_id, date, time) {
            Ok(appt) => {
                let pet_name = self
                    .registry
                    .patient(patient_id)
                    .map(|p| p.pet_name.clone())
                    .unwrap_or_default();
                self.prompter.say(format!(
                    "Appointment booked for {} ({}) owned by {} on {}.",
                    pet_name,
                    appt.species,
                    appt.owner,
                    appt.scheduled_display()
                ))?;
            }
            Err(e) => self.report_error(&e)?,
        }
        Ok(())
    }

    fn list_appointments(&mut self) -> Result<()> {
        let appointments = self.registry.list_appointments();
        if appointments.is_empty() {
            self.prompter.say("No appointments available.")?;
        } else {
            let rendered = appointments_table(&appointments).render();
            self.prompter.say(rendered.trim_end())?;
        }
        Ok(())
    }

    fn update_patient(&mut self) -> Result<()> {
        let pet_name = self.prompter.line("Enter pet's name: ")?;
        let new_name = self
            .prompter
            .line("Enter new name (leave empty for no change): ")?;
        let new_species = self
            .prompter
            .optional_species("Enter new species (leave empty for no change): ")?;
        let new_owner = self
            .prompter
            .line("Enter new owner's name (leave empty for no change): ")?;

        let update = PatientUpdate {
            name: FieldUpdate::from_input(&new_name),
            species: new_species,
            owner: FieldUpdate::from_input(&new_owner),
        };

        match self.registry.update_patient_info(&pet_name, update) {
            Ok(_) => self
                .prompter
                .say(format!("Patient information updated for {}.", pet_name))?,
            Err(e) => self.report_error(&e)?,
        }
        Ok(())
    }

    fn cancel_appointment(&mut self) -> Result<()> {
        let pet_name = self
            .prompter
            .line("Enter pet's name to cancel appointment: ")?;

        match self.registry.cancel_appointment(&pet_name) {
            Ok(_) => self
                .prompter
                .say(format!("Appointment for {} canceled.", pet_name))?,
            Err(e) => self.report_error(&e)?,
        }
        Ok(())
    }

    fn generate_report(&mut self) -> Result<()> {
        let report = self
            .registry
            .generate_report()
            .with_clinic_name(self.config.clinic_name.clone());

        if report.is_empty() {
            self.prompter.say("No patients to generate a report.")?;
            return Ok(());
        }

        let rendered = match self.config.report_format {
            ReportFormat::Grid => report_table(&report).render(),
            ReportFormat::Csv => report.to_csv(),
            ReportFormat::Json => report.to_json().context("Failed to serialize report")?,
        };
        self.prompter.say(rendered.trim_end())?;
        Ok(())
    }

    /// Print a business-rule failure, with a name suggestion for misses.
    fn report_error(&mut self, err: &RegistryError) -> Result<()> {
        match err {
            RegistryError::DuplicatePatient(_) => self.prompter.say(format!("Invalid! {}.", err))?,
            _ => self.prompter.say(format!("{}.", err))?,
        }

        let suggestion = err
            .missed_name()
            .and_then(|name| self.registry.suggest_pet_name(name))
            .map(str::to_string);
        if let Some(name) = suggestion {
            self.prompter.say(format!("Did you mean '{}'?", name))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session(input: &str) -> Session<&[u8], Vec<u8>> {
        Session::new(Config::default(), Prompter::new(input.as_bytes(), Vec::new()))
    }

    fn run(input: &str) -> (ClinicRegistry, String) {
        let mut s = session(input);
        s.run().unwrap();
        let (registry, out) = s.into_parts();
        (registry, String::from_utf8(out).unwrap())
    }

    #[test]
    fn test_exit_option() {
        let (_, out) = run("8\n");
        assert!(out.contains("Exiting the Vet Clinic Management System."));
    }

    #[test]
    fn test_eof_ends_session() {
        let (registry, out) = run("1\nRex\n");
        assert!(out.contains("Enter pet's species"));
        assert_eq!(registry.patient_count(), 0);
    }

    #[test]
    fn test_invalid_choice_loops() {
        let (_, out) = run("12\nabc\n8\n");
        assert!(out.contains("Invalid choice. Please select a valid option."));
        assert!(out.contains("Invalid input. Please enter a valid integer."));
        assert!(out.contains("Exiting"));
    }

    #[test]
    fn test_book_negative_id() {
        let (registry, out) = run("3\n-1\n2024-05-01\n10:00 AM\n8\n");
        assert!(out.contains("No patients available."));
        assert!(out.contains("Patient with ID -1 not found."));
        assert_eq!(registry.appointment_count(), 0);
    }

    #[test]
    fn test_cancel_miss_suggests_name() {
        let (_, out) = run("1\nRex\ndog\nAlice\n6\nrex\n8\n");
        assert!(out.contains("No appointment found for rex."));
        assert!(out.contains("Did you mean 'Rex'?"));
    }

    #[test]
    fn test_dispatch_report_empty() {
        let mut s = session("");
        assert_eq!(s.dispatch(MenuChoice::GenerateReport).unwrap(), Flow::Continue);
        let (_, out) = s.into_parts();
        assert!(String::from_utf8(out)
            .unwrap()
            .contains("No patients to generate a report."));
    }
}
