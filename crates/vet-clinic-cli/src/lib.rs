//! Console front end for the vet clinic registry.
//!
//! This crate provides the interactive numbered menu, input validation with
//! reprompting, and grid/CSV/JSON rendering over [`vet_clinic_core`].

pub mod config;
pub mod input;
pub mod menu;
pub mod session;
pub mod table;

pub use config::{Config, ReportFormat};
pub use input::Prompter;
pub use menu::MenuChoice;
pub use session::{Flow, Session};
