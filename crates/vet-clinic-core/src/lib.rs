//! Vet Clinic Core Library
//!
//! In-memory patient and appointment records for a small veterinary clinic.
//!
//! # Data Model
//!
//! ```text
//!   patients (Vec, registration order)        appointment book (ordered)
//!   ┌────┬──────────┬─────────┬───────┐       ┌──────────┬──────────────────────┐
//!   │ id │ pet_name │ species │ owner │──────▶│ pet_name │ species, owner, when │
//!   └────┴──────────┴─────────┴───────┘       └──────────┴──────────────────────┘
//!                       keyed by the patient's *current* name
//! ```
//!
//! # Core Principle
//!
//! **The appointment book follows the patient.** Renames re-key the entry and
//! species/owner edits are copied into it at write time. A failed operation
//! leaves both collections untouched.
//!
//! # Modules
//!
//! - [`models`]: Domain types (Patient, Species, Appointment, PatientUpdate)
//! - [`registry`]: The owning `ClinicRegistry` and its operations
//! - [`export`]: Report rows and CSV/JSON export

pub mod export;
pub mod models;
pub mod registry;

// Re-export commonly used types
pub use export::{ClinicReport, ReportRow};
pub use models::{
    Appointment, AppointmentSummary, FieldUpdate, ParseSpeciesError, Patient, PatientId,
    PatientUpdate, Species,
};
pub use registry::{ClinicRegistry, RegistryError, RegistryResult};
