// ABOUTME: Store categories grouping purchases by destination store and preparation phase
// ABOUTME: Closed set of six labels with decomposition into store and prep step
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Event Beverage Planner Contributors

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::AppError;

/// Purchasing bucket for an ingredient
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum StoreCategory {
    /// Bought at Costco, used in the decoction
    CostcoDecoction,
    /// Bought at Costco, used during prep
    CostcoPrep,
    /// Bought at the Indian store, used in the decoction
    IndianStoreDecoction,
    /// Bought at the Indian store, used during prep
    IndianStorePrep,
    /// Ordered from Amazon, used during prep
    AmazonPrep,
    /// Anything without an assignment
    #[default]
    Other,
}

impl StoreCategory {
    /// All categories in display order
    pub const ALL: [Self; 6] = [
        Self::CostcoDecoction,
        Self::CostcoPrep,
        Self::IndianStoreDecoction,
        Self::IndianStorePrep,
        Self::AmazonPrep,
        Self::Other,
    ];

    /// Persisted label
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::CostcoDecoction => "costcoDecoction",
            Self::CostcoPrep => "costcoPrep",
            Self::IndianStoreDecoction => "indianStoreDecoction",
            Self::IndianStorePrep => "indianStorePrep",
            Self::AmazonPrep => "amazonPrep",
            Self::Other => "other",
        }
    }

    /// Heading shown above the category's shopping list
    #[must_use]
    pub const fn title(&self) -> &'static str {
        match self {
            Self::CostcoDecoction => "Costco - For Decoction",
            Self::CostcoPrep => "Costco - For Prep",
            Self::IndianStoreDecoction => "Indian Store - For Decoction",
            Self::IndianStorePrep => "Indian Store - For Prep",
            Self::AmazonPrep => "Amazon - For Prep",
            Self::Other => "Other",
        }
    }

    /// Store this category buys from
    #[must_use]
    pub const fn store(&self) -> Store {
        match self {
            Self::CostcoDecoction | Self::CostcoPrep => Store::Costco,
            Self::IndianStoreDecoction | Self::IndianStorePrep => Store::IndianStore,
            Self::AmazonPrep => Store::Amazon,
            Self::Other => Store::Other,
        }
    }

    /// Preparation phase this category feeds
    #[must_use]
    pub const fn prep_step(&self) -> PrepStep {
        match self {
            Self::CostcoDecoction | Self::IndianStoreDecoction => PrepStep::Decoction,
            Self::CostcoPrep | Self::IndianStorePrep | Self::AmazonPrep => PrepStep::Prep,
            Self::Other => PrepStep::NotApplicable,
        }
    }

    /// Combine a store and prep step into a category
    ///
    /// Amazon purchases are always prep; unsupported combinations fall back to `Other`.
    #[must_use]
    pub const fn from_parts(store: Store, step: PrepStep) -> Self {
        match (store, step) {
            (Store::Costco, PrepStep::Decoction) => Self::CostcoDecoction,
            (Store::Costco, PrepStep::Prep) => Self::CostcoPrep,
            (Store::IndianStore, PrepStep::Decoction) => Self::IndianStoreDecoction,
            (Store::IndianStore, PrepStep::Prep) => Self::IndianStorePrep,
            (Store::Amazon, _) => Self::AmazonPrep,
            _ => Self::Other,
        }
    }
}

impl fmt::Display for StoreCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for StoreCategory {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|category| category.as_str() == s)
            .ok_or_else(|| AppError::invalid_input(format!("Unknown store category '{s}'")))
    }
}

/// Where an ingredient is bought
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Store {
    /// Costco
    Costco,
    /// Indian grocery store
    #[serde(rename = "Indian Store")]
    IndianStore,
    /// Amazon
    Amazon,
    /// Unassigned
    #[default]
    Other,
}

impl Store {
    /// Display label
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Costco => "Costco",
            Self::IndianStore => "Indian Store",
            Self::Amazon => "Amazon",
            Self::Other => "Other",
        }
    }
}

impl fmt::Display for Store {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Store {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().replace(['-', '_', ' '], "").as_str() {
            "costco" => Ok(Self::Costco),
            "indianstore" | "indian" => Ok(Self::IndianStore),
            "amazon" => Ok(Self::Amazon),
            "other" => Ok(Self::Other),
            _ => Err(AppError::invalid_input(format!("Unknown store '{s}'"))),
        }
    }
}

/// Preparation phase an ingredient is used in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum PrepStep {
    /// Brewing the concentrate
    Decoction,
    /// Final preparation and serving
    Prep,
    /// No specific phase
    #[default]
    #[serde(rename = "N/A")]
    NotApplicable,
}

impl PrepStep {
    /// Display label
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Decoction => "Decoction",
            Self::Prep => "Prep",
            Self::NotApplicable => "N/A",
        }
    }
}

impl fmt::Display for PrepStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for PrepStep {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "decoction" => Ok(Self::Decoction),
            "prep" => Ok(Self::Prep),
            "n/a" | "na" | "none" => Ok(Self::NotApplicable),
            _ => Err(AppError::invalid_input(format!("Unknown prep step '{s}'"))),
        }
    }
}
