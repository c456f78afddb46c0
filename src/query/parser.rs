//! # Query Parameter Parser
//!
//! Turns URL query pairs into an [`AnimalQuery`].
//!
//! - `personalityTraits` (or `personalityTraits[]`) may repeat; each
//!   occurrence adds one trait, empty ones included
//! - a single empty `personalityTraits=` is no constraint
//! - `diet`, `species`, `name`: last occurrence wins, empty is ignored
//! - unknown keys are ignored
//!
//! Parsing never fails.

use super::filter::{AnimalFilter, FilterSet};

const TRAITS_KEY: &str = "personalityTraits";
const TRAITS_ARRAY_KEY: &str = "personalityTraits[]";

/// Parsed animal query. `None` / empty means "no constraint".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AnimalQuery {
    pub personality_traits: Vec<String>,
    pub diet: Option<String>,
    pub species: Option<String>,
    pub name: Option<String>,
}

impl AnimalQuery {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse query pairs in the order they appeared in the URL.
    pub fn parse<K, V>(pairs: &[(K, V)]) -> Self
    where
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let mut query = AnimalQuery::new();
        let mut traits_as_array = false;

        for (key, value) in pairs {
            let value = value.as_ref();

            match key.as_ref() {
                TRAITS_KEY => query.personality_traits.push(value.to_string()),
                TRAITS_ARRAY_KEY => {
                    traits_as_array = true;
                    query.personality_traits.push(value.to_string());
                }
                _ if value.is_empty() => {}
                "diet" => query.diet = Some(value.to_string()),
                "species" => query.species = Some(value.to_string()),
                "name" => query.name = Some(value.to_string()),
                _ => {}
            }
        }

        // A lone `personalityTraits=` is no constraint. Once the key repeats
        // the value is a list, and an empty element is a trait nobody has.
        if !traits_as_array
            && query.personality_traits.len() == 1
            && query.personality_traits[0].is_empty()
        {
            query.personality_traits.clear();
        }

        query
    }

    pub fn with_trait(mut self, trait_name: impl Into<String>) -> Self {
        self.personality_traits.push(trait_name.into());
        self
    }

    pub fn with_diet(mut self, diet: impl Into<String>) -> Self {
        self.diet = Some(diet.into());
        self
    }

    pub fn with_species(mut self, species: impl Into<String>) -> Self {
        self.species = Some(species.into());
        self
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn is_empty(&self) -> bool {
        self.personality_traits.is_empty()
            && self.diet.is_none()
            && self.species.is_none()
            && self.name.is_none()
    }

    /// Build the equivalent AND-combined filter set.
    pub fn to_filters(&self) -> FilterSet {
        let mut set = FilterSet::new();
        for t in &self.personality_traits {
            set = set.and(AnimalFilter::HasTrait(t.clone()));
        }
        if let Some(diet) = &self.diet {
            set = set.and(AnimalFilter::Diet(diet.clone()));
        }
        if let Some(species) = &self.species {
            set = set.and(AnimalFilter::Species(species.clone()));
        }
        if let Some(name) = &self.name {
            set = set.and(AnimalFilter::Name(name.clone()));
        }
        set
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_trait_becomes_sequence() {
        let query = AnimalQuery::parse(&[("personalityTraits", "loyal")]);
        assert_eq!(query.personality_traits, vec!["loyal"]);
    }

    #[test]
    fn test_repeated_traits_accumulate() {
        let query = AnimalQuery::parse(&[
            ("personalityTraits", "loyal"),
            ("personalityTraits[]", "sassy"),
            ("personalityTraits", "brave"),
        ]);
        assert_eq!(query.personality_traits, vec!["loyal", "sassy", "brave"]);
    }

    #[test]
    fn test_scalar_fields_last_wins() {
        let query = AnimalQuery::parse(&[("diet", "herbivore"), ("diet", "carnivore")]);
        assert_eq!(query.diet.as_deref(), Some("carnivore"));
    }

    #[test]
    fn test_empty_values_and_unknown_keys_ignored() {
        let query = AnimalQuery::parse(&[("diet", ""), ("color", "red"), ("personalityTraits", "")]);
        assert!(query.is_empty());
        assert!(query.to_filters().is_empty());
    }

    #[test]
    fn test_repeated_traits_keep_empty_elements() {
        let query = AnimalQuery::parse(&[("personalityTraits", ""), ("personalityTraits", "loyal")]);
        assert_eq!(query.personality_traits, vec!["", "loyal"]);

        let query = AnimalQuery::parse(&[("personalityTraits[]", "")]);
        assert_eq!(query.personality_traits, vec![""]);
    }

    #[test]
    fn test_full_query() {
        let query = AnimalQuery::parse(&[
            ("name", "Erica"),
            ("species", "gorilla"),
            ("diet", "omnivore"),
            ("personalityTraits", "quirky"),
        ]);

        assert_eq!(
            query,
            AnimalQuery::new()
                .with_name("Erica")
                .with_species("gorilla")
                .with_diet("omnivore")
                .with_trait("quirky")
        );
        assert_eq!(query.to_filters().filters.len(), 4);
    }
}
