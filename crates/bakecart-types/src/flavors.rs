//! Comma-delimited flavor lists.
//!
//! Flavor options travel as a single string (`"Chocolate, Baunilha"`) in the
//! persisted format. In memory they are an ordered `Vec<String>`.

use serde::{Deserialize, Deserializer, Serializer};

/// Separator used when writing a flavor list back out.
pub const SEPARATOR: &str = ", ";

/// Split a comma-delimited flavor list, trimming entries and dropping empties.
pub fn parse_flavors(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

/// Join flavor options into the persisted form.
pub fn join_flavors(flavors: &[String]) -> String {
    flavors.join(SEPARATOR)
}

/// Serde adapter for `Vec<String>` fields persisted as one delimited string.
pub mod delimited {
    use super::*;

    pub fn serialize<S: Serializer>(flavors: &[String], serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&join_flavors(flavors))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<String>, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Ok(parse_flavors(&raw))
    }
}
