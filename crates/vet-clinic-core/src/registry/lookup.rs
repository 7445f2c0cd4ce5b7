//! "Did you mean" suggestions for name-keyed misses.

use strsim::jaro_winkler;

use super::ClinicRegistry;

/// Minimum similarity for a name to be offered as a suggestion.
pub const SUGGESTION_THRESHOLD: f64 = 0.80;

impl ClinicRegistry {
    /// Closest current pet name to `query`, if any is similar enough.
    ///
    /// Only a hint for the console. Registry operations always match names
    /// exactly.
    pub fn suggest_pet_name(&self, query: &str) -> Option<&str> {
        let query_lower = query.to_lowercase();

        self.patients
            .iter()
            .map(|p| p.pet_name.as_str())
            .filter(|name| *name != query)
            .map(|name| (name, jaro_winkler(&query_lower, &name.to_lowercase())))
            .filter(|(_, score)| *score >= SUGGESTION_THRESHOLD)
            .max_by(|a, b| a.1.partial_cmp(&b.1).unwrap_or(std::cmp::Ordering::Equal))
            .map(|(name, _)| name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Species;

    fn setup_registry() -> ClinicRegistry {
        let mut registry = ClinicRegistry::new();
        registry.add_patient("Rex", Species::Dog, "Alice").unwrap();
        registry.add_patient("Whiskers", Species::Cat, "Bob").unwrap();
        registry
    }

    #[test]
    fn test_suggests_case_variant() {
        let registry = setup_registry();
        assert_eq!(registry.suggest_pet_name("rex"), Some("Rex"));
    }

    #[test]
    fn test_suggests_typo() {
        let registry = setup_registry();
        assert_eq!(registry.suggest_pet_name("Whiskrs"), Some("Whiskers"));
    }

    #[test]
    fn test_no_suggestion_for_unrelated() {
        let registry = setup_registry();
        assert_eq!(registry.suggest_pet_name("Bella"), None);
    }

    #[test]
    fn test_no_suggestion_when_empty() {
        let registry = ClinicRegistry::new();
        assert_eq!(registry.suggest_pet_name("Rex"), None);
    }
}
