//! Animal record types
//!
//! On disk and on the wire a record looks like:
//!
//! ```text
//! {
//!   "id": "3",
//!   "name": "Erica",
//!   "species": "gorilla",
//!   "diet": "omnivore",
//!   "personalityTraits": ["quirky", "rash"]
//! }
//! ```

use serde::{Deserialize, Serialize};

/// A stored animal. `id` is assigned by the store and never changes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Animal {
    pub id: String,
    pub name: String,
    pub species: String,
    pub diet: String,
    pub personality_traits: Vec<String>,
}

impl Animal {
    /// Returns true if every trait in `traits` is one of this animal's traits.
    pub fn has_traits<S: AsRef<str>>(&self, traits: &[S]) -> bool {
        traits.iter().all(|t| self.has_trait(t.as_ref()))
    }

    pub fn has_trait(&self, trait_name: &str) -> bool {
        self.personality_traits.iter().any(|t| t == trait_name)
    }
}

/// A validated animal that has not been assigned an id yet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewAnimal {
    pub name: String,
    pub species: String,
    pub diet: String,
    pub personality_traits: Vec<String>,
}

impl NewAnimal {
    pub fn new(
        name: impl Into<String>,
        species: impl Into<String>,
        diet: impl Into<String>,
        personality_traits: Vec<String>,
    ) -> Self {
        Self {
            name: name.into(),
            species: species.into(),
            diet: diet.into(),
            personality_traits,
        }
    }

    /// Attach the store-assigned id.
    pub fn with_id(self, id: impl Into<String>) -> Animal {
        Animal {
            id: id.into(),
            name: self.name,
            species: self.species,
            diet: self.diet,
            personality_traits: self.personality_traits,
        }
    }
}

/// The backing document: the whole collection under one named field.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnimalDocument {
    pub animals: Vec<Animal>,
}
