// ABOUTME: Per-batch beverage recipes as insertion-ordered ingredient amount tables
// ABOUTME: Serialized as JSON objects keyed by ingredient display key, preserving order
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Event Beverage Planner Contributors

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

use super::beverage::Beverage;
use super::ingredient::Ingredient;

/// Ingredient amounts needed for one batch of a beverage
///
/// Entries keep the order in which they were first added. Shopping list
/// output order follows this order, so it is part of the observable contract.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Recipe {
    entries: Vec<(Ingredient, f64)>,
}

impl Recipe {
    /// Create an empty recipe
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Amount per batch for an ingredient
    #[must_use]
    pub fn get(&self, ingredient: &Ingredient) -> Option<f64> {
        self.position(ingredient).map(|idx| self.entries[idx].1)
    }

    /// Set the amount for an ingredient
    ///
    /// An existing ingredient keeps its position; a new one is appended.
    pub fn set(&mut self, ingredient: Ingredient, amount: f64) {
        match self.position(&ingredient) {
            Some(idx) => self.entries[idx].1 = amount,
            None => self.entries.push((ingredient, amount)),
        }
    }

    /// Remove an ingredient, returning its amount
    pub fn remove(&mut self, ingredient: &Ingredient) -> Option<f64> {
        self.position(ingredient)
            .map(|idx| self.entries.remove(idx).1)
    }

    /// Iterate over `(ingredient, amount)` in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (&Ingredient, f64)> {
        self.entries.iter().map(|(ingredient, amount)| (ingredient, *amount))
    }

    /// Ingredients in insertion order
    pub fn ingredients(&self) -> impl Iterator<Item = &Ingredient> {
        self.entries.iter().map(|(ingredient, _)| ingredient)
    }

    /// Check whether the recipe lists an ingredient
    #[must_use]
    pub fn contains(&self, ingredient: &Ingredient) -> bool {
        self.position(ingredient).is_some()
    }

    /// Number of ingredients
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when the recipe lists no ingredients
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Index of an ingredient in insertion order
    #[must_use]
    pub fn position(&self, ingredient: &Ingredient) -> Option<usize> {
        self.entries.iter().position(|(existing, _)| existing == ingredient)
    }
}

impl FromIterator<(Ingredient, f64)> for Recipe {
    fn from_iter<T: IntoIterator<Item = (Ingredient, f64)>>(iter: T) -> Self {
        let mut recipe = Self::new();
        for (ingredient, amount) in iter {
            recipe.set(ingredient, amount);
        }
        recipe
    }
}

impl Serialize for Recipe {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (ingredient, amount) in &self.entries {
            map.serialize_entry(ingredient, amount)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for Recipe {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct RecipeVisitor;

        impl<'de> Visitor<'de> for RecipeVisitor {
            type Value = Recipe;

            fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
                formatter.write_str("a map of ingredient keys to per-batch amounts")
            }

            fn visit_map<A>(self, mut access: A) -> Result<Self::Value, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut recipe = Recipe::new();
                while let Some((ingredient, amount)) = access.next_entry::<Ingredient, f64>()? {
                    recipe.set(ingredient, amount);
                }
                Ok(recipe)
            }
        }

        deserializer.deserialize_map(RecipeVisitor)
    }
}

/// Recipes for every beverage
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Recipes {
    /// Coffee recipe
    #[serde(rename = "Coffee")]
    pub coffee: Recipe,
    /// Tea recipe
    #[serde(rename = "Tea")]
    pub tea: Recipe,
}

impl Recipes {
    /// Recipe for one beverage
    #[must_use]
    pub const fn get(&self, beverage: Beverage) -> &Recipe {
        match beverage {
            Beverage::Coffee => &self.coffee,
            Beverage::Tea => &self.tea,
        }
    }

    /// Mutable recipe for one beverage
    pub fn get_mut(&mut self, beverage: Beverage) -> &mut Recipe {
        match beverage {
            Beverage::Coffee => &mut self.coffee,
            Beverage::Tea => &mut self.tea,
        }
    }

    /// Every ingredient referenced by any recipe, coffee first, without duplicates
    #[must_use]
    pub fn all_ingredients(&self) -> Vec<&Ingredient> {
        let mut seen: Vec<&Ingredient> = Vec::new();
        for beverage in Beverage::ALL {
            for ingredient in self.get(beverage).ingredients() {
                if !seen.contains(&ingredient) {
                    seen.push(ingredient);
                }
            }
        }
        seen
    }
}
