//! # Animal Queries
//!
//! Pure read operations over a slice of animals: query filtering and
//! lookup by id. Neither mutates its input.

pub mod filter;
pub mod parser;

pub use filter::{AnimalFilter, FilterSet};
pub use parser::AnimalQuery;

use crate::storage::Animal;

/// Records satisfying every criterion in `query`, in their original order.
pub fn filter_by_query<'a>(query: &AnimalQuery, animals: &'a [Animal]) -> Vec<&'a Animal> {
    query.to_filters().apply(animals)
}

/// First record whose id equals `id`. Absence is `None`, not an error.
pub fn find_by_id<'a>(id: &str, animals: &'a [Animal]) -> Option<&'a Animal> {
    animals.iter().find(|a| a.id == id)
}
