//! Domain models for the clinic registry.

mod appointment;
mod patient;
mod update;

pub use appointment::*;
pub use patient::*;
pub use update::*;
