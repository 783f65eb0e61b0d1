// ABOUTME: Ingredient identity by exact key string, with name and unit parsed for display
// ABOUTME: The ingredient is the join key across recipes, package sizes, and store categories
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Event Beverage Planner Contributors

use regex::Regex;
use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::LazyLock;

/// Matches `"<name> (<unit>)"`, with optional whitespace before the parenthesis
static KEY_PATTERN: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"^(.+?)\s*\((.+?)\)$").ok());

/// An ingredient identified by its exact key string
///
/// The key is the identity: `"Milk (l)"` and `"Milk(l)"` are two distinct
/// ingredients even though both parse to name `Milk` and unit `l`. Units
/// are never converted, so `"g"` and `"kg"` of the same name are distinct
/// too. Name and unit are derived from the key for display only.
#[derive(Debug, Clone)]
pub struct Ingredient {
    key: String,
    name: String,
    unit: String,
}

impl Ingredient {
    /// Create an ingredient from its parts with the canonical `"name (unit)"` key
    #[must_use]
    pub fn new(name: impl Into<String>, unit: impl Into<String>) -> Self {
        let name = name.into();
        let unit = unit.into();
        let key = if unit.is_empty() {
            name.clone()
        } else {
            format!("{name} ({unit})")
        };
        Self { key, name, unit }
    }

    /// Parse a display key such as `"Ginger (g)"`
    ///
    /// The key is kept verbatim. A key without a trailing parenthesized unit
    /// keeps the whole key as its name and gets an empty unit.
    #[must_use]
    pub fn parse(key: &str) -> Self {
        let captures = KEY_PATTERN
            .as_ref()
            .and_then(|pattern| pattern.captures(key));

        let (name, unit) = match captures {
            Some(caps) => (caps[1].to_owned(), caps[2].to_owned()),
            None => (key.to_owned(), String::new()),
        };
        Self {
            key: key.to_owned(),
            name,
            unit,
        }
    }

    /// Display name without the unit
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Unit label, empty when the ingredient has none
    #[must_use]
    pub fn unit(&self) -> &str {
        &self.unit
    }

    /// Exact key used in persisted tables
    #[must_use]
    pub fn key(&self) -> String {
        self.key.clone()
    }
}

impl PartialEq for Ingredient {
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key
    }
}

impl Eq for Ingredient {}

impl Hash for Ingredient {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.key.hash(state);
    }
}

impl PartialOrd for Ingredient {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Ingredient {
    fn cmp(&self, other: &Self) -> Ordering {
        self.key.cmp(&other.key)
    }
}

impl fmt::Display for Ingredient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.key)
    }
}

impl From<&str> for Ingredient {
    fn from(key: &str) -> Self {
        Self::parse(key)
    }
}

impl Serialize for Ingredient {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.key)
    }
}

impl<'de> Deserialize<'de> for Ingredient {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct IngredientVisitor;

        impl Visitor<'_> for IngredientVisitor {
            type Value = Ingredient;

            fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
                formatter.write_str("an ingredient key like \"Sugar (g)\"")
            }

            fn visit_str<E>(self, value: &str) -> Result<Self::Value, E>
            where
                E: de::Error,
            {
                Ok(Ingredient::parse(value))
            }
        }

        deserializer.deserialize_str(IngredientVisitor)
    }
}
