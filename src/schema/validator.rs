//! Animal validator
//!
//! A candidate passes when:
//! - it is a JSON object
//! - `name`, `species`, `diet` are present and are strings
//! - `personalityTraits` is present and is an array of strings
//!
//! An empty `personalityTraits` array is accepted. Any `id` in the candidate
//! is ignored; the store assigns ids. Unknown fields are dropped.
//!
//! Validation is pure and deterministic, and never mutates the candidate.

use serde_json::{Map, Value};

use super::errors::{ValidationError, ValidationResult};
use crate::storage::NewAnimal;

const STRING_FIELDS: [&str; 3] = ["name", "species", "diet"];
const TRAITS_FIELD: &str = "personalityTraits";

/// Validate a candidate body, producing the typed record on success.
pub fn validate_animal(candidate: &Value) -> ValidationResult<NewAnimal> {
    let obj = candidate.as_object().ok_or(ValidationError::NotAnObject {
        found: json_type_name(candidate),
    })?;

    let [name, species, diet] = STRING_FIELDS.map(|field| require_string(obj, field));
    let (name, species, diet) = (name?, species?, diet?);
    let personality_traits = require_string_array(obj, TRAITS_FIELD)?;

    Ok(NewAnimal::new(name, species, diet, personality_traits))
}

/// Pass/fail form of [`validate_animal`].
pub fn is_valid_animal(candidate: &Value) -> bool {
    validate_animal(candidate).is_ok()
}

fn require<'a>(obj: &'a Map<String, Value>, field: &str) -> ValidationResult<&'a Value> {
    obj.get(field)
        .ok_or_else(|| ValidationError::missing_field(field))
}

fn require_string(obj: &Map<String, Value>, field: &str) -> ValidationResult<String> {
    let value = require(obj, field)?;
    value
        .as_str()
        .map(str::to_string)
        .ok_or_else(|| ValidationError::wrong_type(field, "string", json_type_name(value)))
}

fn require_string_array(obj: &Map<String, Value>, field: &str) -> ValidationResult<Vec<String>> {
    let value = require(obj, field)?;
    let items = value
        .as_array()
        .ok_or_else(|| ValidationError::wrong_type(field, "array", json_type_name(value)))?;

    items
        .iter()
        .enumerate()
        .map(|(i, item)| {
            item.as_str().map(str::to_string).ok_or_else(|| {
                ValidationError::wrong_type(format!("{}[{}]", field, i), "string", json_type_name(item))
            })
        })
        .collect()
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn rex() -> Value {
        json!({
            "name": "Rex",
            "species": "dog",
            "diet": "omnivore",
            "personalityTraits": ["loyal", "active"]
        })
    }

    #[test]
    fn test_valid_animal() {
        let animal = validate_animal(&rex()).unwrap();
        assert_eq!(animal.name, "Rex");
        assert_eq!(animal.personality_traits, vec!["loyal", "active"]);
    }

    #[test]
    fn test_missing_required_fields_rejected() {
        for field in ["name", "species", "diet", "personalityTraits"] {
            let mut candidate = rex();
            candidate.as_object_mut().unwrap().remove(field);

            let err = validate_animal(&candidate).unwrap_err();
            assert_eq!(err, ValidationError::missing_field(field));
        }
    }

    #[test]
    fn test_non_string_fields_rejected() {
        for field in ["name", "species", "diet"] {
            let mut candidate = rex();
            candidate[field] = json!(42);

            let err = validate_animal(&candidate).unwrap_err();
            assert_eq!(err, ValidationError::wrong_type(field, "string", "number"));
        }
    }

    #[test]
    fn test_traits_must_be_array() {
        let mut candidate = rex();
        candidate["personalityTraits"] = json!("loyal");

        assert_eq!(
            validate_animal(&candidate).unwrap_err(),
            ValidationError::wrong_type("personalityTraits", "array", "string")
        );
    }

    #[test]
    fn test_trait_elements_must_be_strings() {
        let mut candidate = rex();
        candidate["personalityTraits"] = json!(["loyal", 7]);

        assert_eq!(validate_animal(&candidate).unwrap_err().field(), "personalityTraits[1]");
    }

    #[test]
    fn test_empty_traits_accepted() {
        let mut candidate = rex();
        candidate["personalityTraits"] = json!([]);

        let animal = validate_animal(&candidate).unwrap();
        assert!(animal.personality_traits.is_empty());
    }

    #[test]
    fn test_null_field_rejected() {
        let mut candidate = rex();
        candidate["diet"] = Value::Null;
        assert!(!is_valid_animal(&candidate));
    }

    #[test]
    fn test_non_object_rejected() {
        assert_eq!(
            validate_animal(&json!(["Rex"])).unwrap_err(),
            ValidationError::NotAnObject { found: "array" }
        );
    }

    #[test]
    fn test_client_id_and_extra_fields_ignored() {
        let mut candidate = rex();
        candidate["id"] = json!("42");
        candidate["color"] = json!("brown");

        let animal = validate_animal(&candidate).unwrap();
        assert_eq!(animal.with_id("5").id, "5");
    }
}
