//! Order options configuration
//!
//! Loaded from the `[order]` section of the application config file. Every key
//! is optional.

use crate::selection::{Flavor, pickup_dates};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;

/// Upper bound for the pickup window
pub const MAX_PICKUP_DAYS: u32 = 31;

fn default_quantities() -> Vec<u32> {
    vec![1, 6, 12]
}

fn default_flavors() -> Vec<Flavor> {
    Flavor::iter().collect()
}

fn default_pickup_days() -> u32 {
    4
}

/// What the shop offers
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct OrderConfig {
    /// Quantity buttons shown on the start screen
    #[serde(default = "default_quantities")]
    pub quantities: Vec<u32>,

    /// Flavors shown on the flavor screen, in display order
    #[serde(default = "default_flavors")]
    pub flavors: Vec<Flavor>,

    /// Number of pickup dates offered, starting today
    #[serde(default = "default_pickup_days")]
    pub pickup_days: u32,
}

impl Default for OrderConfig {
    fn default() -> Self {
        Self {
            quantities: default_quantities(),
            flavors: default_flavors(),
            pickup_days: default_pickup_days(),
        }
    }
}

impl OrderConfig {
    /// Validate the order options, collecting every problem found
    pub fn validate(&self) -> Result<(), Vec<String>> {
        let mut errors = Vec::new();

        if !self.quantities.contains(&1) {
            errors.push("Quantities must include 1 (the one cupcake button)".to_string());
        }
        if self.quantities.contains(&0) {
            errors.push("Quantity 0 is not a valid order size".to_string());
        }
        for (i, quantity) in self.quantities.iter().enumerate() {
            if self.quantities[..i].contains(quantity) {
                errors.push(format!("Quantity {quantity} is listed more than once"));
            }
        }
        if self.flavors.is_empty() {
            errors.push("At least one flavor must be offered".to_string());
        }
        for (i, flavor) in self.flavors.iter().enumerate() {
            if self.flavors[..i].contains(flavor) {
                errors.push(format!("Flavor '{flavor}' is listed more than once"));
            }
        }
        if self.pickup_days == 0 || self.pickup_days > MAX_PICKUP_DAYS {
            errors.push(format!(
                "Invalid pickup_days {}, must be between 1 and {MAX_PICKUP_DAYS}",
                self.pickup_days
            ));
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    /// Build the concrete options for an order started on `today`
    pub fn options_for(&self, today: NaiveDate) -> OrderOptions {
        OrderOptions {
            quantities: self.quantities.clone(),
            flavors: self.flavors.clone(),
            pickup_dates: pickup_dates(today, self.pickup_days),
        }
    }
}

/// Concrete choices available to one order
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OrderOptions {
    pub quantities: Vec<u32>,
    pub flavors: Vec<Flavor>,
    pub pickup_dates: Vec<NaiveDate>,
}

impl OrderOptions {
    /// Default options for an order started on `today`
    pub fn starting(today: NaiveDate) -> Self {
        OrderConfig::default().options_for(today)
    }
}
