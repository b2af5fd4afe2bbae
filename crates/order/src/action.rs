//! User actions accepted by the controller

use crate::selection::{Flavor, format_pickup_date};
use chrono::NaiveDate;
use serde::Serialize;
use std::fmt;

/// A named user interaction, one per button in the order flow
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "action", content = "value", rename_all = "snake_case")]
pub enum OrderAction {
    /// Quantity button on Start ("one cupcake" is quantity 1)
    SelectQuantity(u32),
    /// Flavor option on Flavor
    SelectFlavor(Flavor),
    /// Date option on Pickup
    SelectDate(NaiveDate),
    Next,
    Cancel,
    NavigateUp,
}

impl OrderAction {
    /// Short action name used in logs and rejection reasons
    pub fn name(&self) -> &'static str {
        match self {
            OrderAction::SelectQuantity(_) => "select_quantity",
            OrderAction::SelectFlavor(_) => "select_flavor",
            OrderAction::SelectDate(_) => "select_date",
            OrderAction::Next => "next",
            OrderAction::Cancel => "cancel",
            OrderAction::NavigateUp => "navigate_up",
        }
    }
}

impl fmt::Display for OrderAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OrderAction::SelectQuantity(1) => write!(f, "one cupcake"),
            OrderAction::SelectQuantity(n) => write!(f, "{n} cupcakes"),
            OrderAction::SelectFlavor(flavor) => write!(f, "flavor {flavor}"),
            OrderAction::SelectDate(date) => write!(f, "pickup {}", format_pickup_date(*date)),
            OrderAction::Next => write!(f, "next"),
            OrderAction::Cancel => write!(f, "cancel"),
            OrderAction::NavigateUp => write!(f, "navigate up"),
        }
    }
}
