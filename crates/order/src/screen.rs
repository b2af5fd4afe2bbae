//! Screens of the order flow
//!
//! The flow is linear: Start → Flavor → Pickup → Summary. Each screen's route
//! name is its variant name, which is what tests assert against.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString, IntoStaticStr};

/// A named step in the order flow
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
    IntoStaticStr,
)]
#[strum(ascii_case_insensitive)]
pub enum Screen {
    /// Root screen, pick how many cupcakes to order
    Start,
    /// Choose a flavor
    Flavor,
    /// Choose a pickup date
    Pickup,
    /// Review the order
    Summary,
}

impl Screen {
    /// Symbolic route name used to identify the screen
    pub fn route_name(self) -> &'static str {
        self.into()
    }

    /// Human-readable screen title
    pub fn title(self) -> &'static str {
        match self {
            Screen::Start => "Cupcake",
            Screen::Flavor => "Choose Flavor",
            Screen::Pickup => "Choose Pickup Date",
            Screen::Summary => "Order Summary",
        }
    }

    /// The screen reached by "Next", if any
    pub fn following(self) -> Option<Screen> {
        match self {
            Screen::Start => Some(Screen::Flavor),
            Screen::Flavor => Some(Screen::Pickup),
            Screen::Pickup => Some(Screen::Summary),
            Screen::Summary => None,
        }
    }

    pub fn is_root(self) -> bool {
        self == Screen::Start
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;
    use strum::IntoEnumIterator;

    #[test]
    fn test_route_names_match_variant_names() {
        let names: Vec<&str> = Screen::iter().map(Screen::route_name).collect();
        assert_eq!(names, vec!["Start", "Flavor", "Pickup", "Summary"]);
        assert_eq!(Screen::Pickup.to_string(), "Pickup");
    }

    #[test]
    fn test_route_name_parse_is_case_insensitive() {
        assert_eq!(Screen::from_str("summary").unwrap(), Screen::Summary);
        assert_eq!(Screen::from_str("FLAVOR").unwrap(), Screen::Flavor);
        assert!(Screen::from_str("checkout").is_err());
    }

    #[test]
    fn test_following_screen() {
        assert_eq!(Screen::Start.following(), Some(Screen::Flavor));
        assert_eq!(Screen::Pickup.following(), Some(Screen::Summary));
        assert_eq!(Screen::Summary.following(), None);
    }
}
