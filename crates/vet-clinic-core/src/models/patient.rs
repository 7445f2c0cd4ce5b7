//! Patient models.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Registry-assigned patient identifier. Starts at 1, never reused.
pub type PatientId = u32;

/// Species the clinic treats.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Species {
    Dog,
    Cat,
}

impl Species {
    /// Lowercase name as typed and displayed.
    pub fn as_str(&self) -> &'static str {
        match self {
            Species::Dog => "dog",
            Species::Cat => "cat",
        }
    }
}

impl fmt::Display for Species {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when text is neither `dog` nor `cat`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Invalid species '{0}': expected 'dog' or 'cat'")]
pub struct ParseSpeciesError(pub String);

impl FromStr for Species {
    type Err = ParseSpeciesError;

    /// Case-insensitive; surrounding whitespace is not stripped.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "dog" => Ok(Species::Dog),
            "cat" => Ok(Species::Cat),
            _ => Err(ParseSpeciesError(s.to_string())),
        }
    }
}

/// A registered pet.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Patient {
    /// Registry ID, immutable after creation
    pub id: PatientId,
    /// Current pet name; also the appointment key
    pub pet_name: String,
    /// Species
    pub species: Species,
    /// Owner/client name
    pub owner: String,
}

impl Patient {
    /// Create a patient record with an already-assigned ID.
    pub fn new(id: PatientId, pet_name: String, species: Species, owner: String) -> Self {
        Self {
            id,
            pet_name,
            species,
            owner,
        }
    }
}
