// ABOUTME: Beverage types served at an event and the batch counts requested for each
// ABOUTME: Batch counts are unsigned so the aggregator never sees a negative multiplier
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Event Beverage Planner Contributors

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::AppError;

/// Beverage with its own recipe
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Beverage {
    /// Filter coffee
    Coffee,
    /// Spiced milk tea
    Tea,
}

impl Beverage {
    /// All beverages in aggregation order
    pub const ALL: [Self; 2] = [Self::Coffee, Self::Tea];

    /// Display label
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Coffee => "Coffee",
            Self::Tea => "Tea",
        }
    }
}

impl fmt::Display for Beverage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Beverage {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "coffee" => Ok(Self::Coffee),
            "tea" => Ok(Self::Tea),
            other => Err(AppError::invalid_input(format!(
                "Unknown beverage '{other}' (expected coffee or tea)"
            ))),
        }
    }
}

/// Number of batches to prepare per beverage
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct BatchCounts {
    /// Coffee batches
    pub coffee: u32,
    /// Tea batches
    pub tea: u32,
}

impl BatchCounts {
    /// Create batch counts
    #[must_use]
    pub const fn new(coffee: u32, tea: u32) -> Self {
        Self { coffee, tea }
    }

    /// Build from raw user input, clamping negatives to zero
    #[must_use]
    pub fn from_signed(coffee: i64, tea: i64) -> Self {
        Self {
            coffee: clamp_batches(coffee),
            tea: clamp_batches(tea),
        }
    }

    /// Batch count for one beverage
    #[must_use]
    pub const fn for_beverage(&self, beverage: Beverage) -> u32 {
        match beverage {
            Beverage::Coffee => self.coffee,
            Beverage::Tea => self.tea,
        }
    }

    /// True when nothing is being prepared
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.coffee == 0 && self.tea == 0
    }
}

fn clamp_batches(raw: i64) -> u32 {
    u32::try_from(raw.max(0)).unwrap_or(u32::MAX)
}
