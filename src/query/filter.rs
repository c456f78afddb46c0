//! # Animal Filters
//!
//! Predicates over animal records, combined with AND logic.

use crate::storage::Animal;

/// A single predicate on an animal record
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnimalFilter {
    /// The animal's traits include this trait
    HasTrait(String),

    /// Exact match on `diet`
    Diet(String),

    /// Exact match on `species`
    Species(String),

    /// Exact match on `name`
    Name(String),
}

impl AnimalFilter {
    /// Check if an animal matches this filter
    pub fn matches(&self, animal: &Animal) -> bool {
        match self {
            AnimalFilter::HasTrait(t) => animal.has_trait(t),
            AnimalFilter::Diet(d) => animal.diet == *d,
            AnimalFilter::Species(s) => animal.species == *s,
            AnimalFilter::Name(n) => animal.name == *n,
        }
    }

    /// The query key this filter came from
    pub fn field(&self) -> &'static str {
        match self {
            AnimalFilter::HasTrait(_) => "personalityTraits",
            AnimalFilter::Diet(_) => "diet",
            AnimalFilter::Species(_) => "species",
            AnimalFilter::Name(_) => "name",
        }
    }
}

/// A set of filters combined with AND logic. Empty matches everything.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterSet {
    pub filters: Vec<AnimalFilter>,
}

impl FilterSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn and(mut self, filter: AnimalFilter) -> Self {
        self.filters.push(filter);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.filters.is_empty()
    }

    /// Check if an animal matches all filters
    pub fn matches(&self, animal: &Animal) -> bool {
        self.filters.iter().all(|f| f.matches(animal))
    }

    /// Stable subsequence of `animals` matching every filter.
    ///
    /// The input is never modified; with no filters the result is the input
    /// in its original order.
    pub fn apply<'a>(&self, animals: &'a [Animal]) -> Vec<&'a Animal> {
        animals.iter().filter(|a| self.matches(a)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::NewAnimal;

    fn animal(id: &str, name: &str, diet: &str, traits: &[&str]) -> Animal {
        NewAnimal::new(
            name,
            "bear",
            diet,
            traits.iter().map(|t| t.to_string()).collect(),
        )
        .with_id(id)
    }

    fn zoo() -> Vec<Animal> {
        vec![
            animal("0", "Novak", "omnivore", &["hungry", "loyal"]),
            animal("1", "Erica", "herbivore", &["loyal"]),
            animal("2", "Noel", "herbivore", &["impish", "sassy", "loyal"]),
            animal("3", "Sunny", "carnivore", &["brave"]),
        ]
    }

    fn ids(found: &[&Animal]) -> Vec<String> {
        found.iter().map(|a| a.id.clone()).collect()
    }

    #[test]
    fn test_diet_filter() {
        let filter = AnimalFilter::Diet("herbivore".to_string());
        let zoo = zoo();

        assert!(!filter.matches(&zoo[0]));
        assert!(filter.matches(&zoo[1]));
    }

    #[test]
    fn test_exact_match_is_case_sensitive() {
        let filter = AnimalFilter::Name("novak".to_string());
        assert!(!filter.matches(&zoo()[0]));
    }

    #[test]
    fn test_empty_set_returns_input_in_order() {
        let zoo = zoo();
        let found = FilterSet::new().apply(&zoo);
        assert_eq!(ids(&found), vec!["0", "1", "2", "3"]);
    }

    #[test]
    fn test_traits_are_anded() {
        let zoo = zoo();
        let found = FilterSet::new()
            .and(AnimalFilter::HasTrait("loyal".to_string()))
            .and(AnimalFilter::HasTrait("sassy".to_string()))
            .apply(&zoo);
        assert_eq!(ids(&found), vec!["2"]);
    }

    #[test]
    fn test_fields_are_anded_and_order_is_stable() {
        let zoo = zoo();
        let found = FilterSet::new()
            .and(AnimalFilter::Diet("herbivore".to_string()))
            .and(AnimalFilter::HasTrait("loyal".to_string()))
            .apply(&zoo);
        assert_eq!(ids(&found), vec!["1", "2"]);
    }

    #[test]
    fn test_no_match() {
        let zoo = zoo();
        let found = FilterSet::new()
            .and(AnimalFilter::Species("penguin".to_string()))
            .apply(&zoo);
        assert!(found.is_empty());
    }
}
