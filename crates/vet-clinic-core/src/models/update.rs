//! Partial-update inputs for patient edits.

use serde::{Deserialize, Serialize};

use super::patient::Species;

/// One optional field of an update request.
///
/// `Empty` records that the user submitted a blank value. The registry treats
/// it exactly like `Unset`: blank input never clears a field.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub enum FieldUpdate<T> {
    Unset,
    Empty,
    Value(T),
}

impl<T> Default for FieldUpdate<T> {
    fn default() -> Self {
        FieldUpdate::Unset
    }
}

impl<T> FieldUpdate<T> {
    /// The new value, if one was actually given.
    pub fn value(&self) -> Option<&T> {
        match self {
            FieldUpdate::Value(v) => Some(v),
            FieldUpdate::Unset | FieldUpdate::Empty => None,
        }
    }

    pub fn into_value(self) -> Option<T> {
        match self {
            FieldUpdate::Value(v) => Some(v),
            FieldUpdate::Unset | FieldUpdate::Empty => None,
        }
    }

    pub fn is_change(&self) -> bool {
        matches!(self, FieldUpdate::Value(_))
    }
}

impl FieldUpdate<String> {
    /// Map raw console text: blank becomes `Empty`.
    pub fn from_input(input: &str) -> Self {
        if input.is_empty() {
            FieldUpdate::Empty
        } else {
            FieldUpdate::Value(input.to_string())
        }
    }
}

impl<T> From<Option<T>> for FieldUpdate<T> {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(v) => FieldUpdate::Value(v),
            None => FieldUpdate::Unset,
        }
    }
}

/// Requested changes to a patient. Fields are applied name, species, owner.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct PatientUpdate {
    pub name: FieldUpdate<String>,
    pub species: FieldUpdate<Species>,
    pub owner: FieldUpdate<String>,
}

impl PatientUpdate {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = FieldUpdate::Value(name.into());
        self
    }

    pub fn species(mut self, species: Species) -> Self {
        self.species = FieldUpdate::Value(species);
        self
    }

    pub fn owner(mut self, owner: impl Into<String>) -> Self {
        self.owner = FieldUpdate::Value(owner.into());
        self
    }

    /// True when no field would change.
    pub fn is_noop(&self) -> bool {
        !self.name.is_change() && !self.species.is_change() && !self.owner.is_change()
    }
}
