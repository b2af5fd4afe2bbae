//! Order flow error types
//!
//! Every rejected action has a reason here. Rejections are reported back
//! through [`crate::Outcome::Ignored`], never raised to the caller.

use crate::screen::Screen;
use crate::selection::Flavor;
use chrono::NaiveDate;
use thiserror::Error;

/// Why an action was not applied
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NavigationError {
    // ========== Screen mismatch ==========
    /// Action does not exist on the current screen
    #[error("Action '{action}' is not available on the {screen} screen")]
    ActionNotAvailable { action: &'static str, screen: Screen },

    /// Back navigation from the root
    #[error("Already at the start of the order")]
    AtRoot,

    // ========== Selection preconditions ==========
    /// "Next" on Flavor before choosing a flavor
    #[error("A flavor must be selected before continuing")]
    FlavorRequired,

    /// "Next" on Pickup before choosing a date
    #[error("A pickup date must be selected before continuing")]
    PickupDateRequired,

    // ========== Options not on offer ==========
    #[error("Quantity {0} is not offered")]
    QuantityNotOffered(u32),

    #[error("Flavor '{0}' is not offered")]
    FlavorNotOffered(Flavor),

    #[error("Pickup date {0} is not offered")]
    PickupDateNotOffered(NaiveDate),
}

/// Result type for order flow operations
pub type Result<T> = std::result::Result<T, NavigationError>;

impl NavigationError {
    pub fn not_available(action: &'static str, screen: Screen) -> Self {
        Self::ActionNotAvailable { action, screen }
    }

    /// Missing selection, the action becomes valid once the user picks something
    pub fn is_missing_selection(&self) -> bool {
        matches!(self, Self::FlavorRequired | Self::PickupDateRequired)
    }
}
