//! Insertion-ordered appointment index keyed by pet name.

use crate::models::Appointment;

/// Appointment entries in booking order.
///
/// Collections are small, so lookups are linear scans. Keys are unique.
#[derive(Debug, Clone, Default)]
pub(crate) struct AppointmentBook {
    entries: Vec<(String, Appointment)>,
}

impl AppointmentBook {
    pub fn new() -> Self {
        Self::default()
    }

    fn position(&self, pet_name: &str) -> Option<usize> {
        self.entries.iter().position(|(key, _)| key == pet_name)
    }

    pub fn contains(&self, pet_name: &str) -> bool {
        self.position(pet_name).is_some()
    }

    pub fn get(&self, pet_name: &str) -> Option<&Appointment> {
        self.entries
            .iter()
            .find(|(key, _)| key == pet_name)
            .map(|(_, appt)| appt)
    }

    pub fn get_mut(&mut self, pet_name: &str) -> Option<&mut Appointment> {
        self.entries
            .iter_mut()
            .find(|(key, _)| key == pet_name)
            .map(|(_, appt)| appt)
    }

    /// Append an entry. Returns false, leaving the book untouched, if the key exists.
    pub fn insert(&mut self, pet_name: String, appointment: Appointment) -> bool {
        if self.contains(&pet_name) {
            return false;
        }
        self.entries.push((pet_name, appointment));
        true
    }

    pub fn remove(&mut self, pet_name: &str) -> Option<Appointment> {
        let idx = self.position(pet_name)?;
        Some(self.entries.remove(idx).1)
    }

    /// Move the entry under `old` to `new`, appending it at the end.
    ///
    /// The entry moves to the end even when `old == new`. An entry already
    /// stored under a different `new` key is overwritten in place, so at most
    /// one entry carries the key afterwards. Returns false when `old` has no entry.
    pub fn rekey(&mut self, old: &str, new: &str) -> bool {
        let Some(appointment) = self.remove(old) else {
            return false;
        };
        match self.get_mut(new) {
            Some(existing) => *existing = appointment,
            None => self.entries.push((new.to_string(), appointment)),
        }
        true
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Appointment)> {
        self.entries.iter().map(|(key, appt)| (key.as_str(), appt))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }
}
