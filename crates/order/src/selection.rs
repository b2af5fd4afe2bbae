//! Order selections made along the flow
//!
//! Selections gate the "Next" transition but never change which screen comes
//! next.

use chrono::{Days, NaiveDate};
use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

/// Display format for pickup dates, e.g. "Tue Oct 20"
pub const PICKUP_DATE_FORMAT: &str = "%a %b %-d";

/// Cupcake flavors on offer
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    EnumIter,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "title_case", ascii_case_insensitive)]
pub enum Flavor {
    Vanilla,
    Chocolate,
    #[strum(to_string = "Red Velvet", serialize = "red-velvet", serialize = "red_velvet")]
    RedVelvet,
    #[strum(
        to_string = "Salted Caramel",
        serialize = "salted-caramel",
        serialize = "salted_caramel"
    )]
    SaltedCaramel,
    Coffee,
}

/// Format a pickup date the way the pickup screen shows it
pub fn format_pickup_date(date: NaiveDate) -> String {
    date.format(PICKUP_DATE_FORMAT).to_string()
}

/// The `days` consecutive pickup dates starting at `today`
pub fn pickup_dates(today: NaiveDate, days: u32) -> Vec<NaiveDate> {
    (0..u64::from(days))
        .filter_map(|offset| today.checked_add_days(Days::new(offset)))
        .collect()
}

/// In-progress order choices
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct OrderSelection {
    pub quantity: Option<u32>,
    pub flavor: Option<Flavor>,
    pub pickup_date: Option<NaiveDate>,
}

impl OrderSelection {
    pub fn is_empty(&self) -> bool {
        self.quantity.is_none() && self.flavor.is_none() && self.pickup_date.is_none()
    }

    /// Forget every choice
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Summary lines for display, one per made choice
    pub fn describe(&self) -> Vec<String> {
        let mut lines = Vec::new();
        if let Some(quantity) = self.quantity {
            let noun = if quantity == 1 { "cupcake" } else { "cupcakes" };
            lines.push(format!("Quantity: {quantity} {noun}"));
        }
        if let Some(flavor) = self.flavor {
            lines.push(format!("Flavor: {flavor}"));
        }
        if let Some(date) = self.pickup_date {
            lines.push(format!("Pickup date: {}", format_pickup_date(date)));
        }
        lines
    }
}
