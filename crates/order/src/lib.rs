//! Cupcake order navigation
//!
//! State machine behind the four-screen Cupcake order flow: which screen is
//! current, how it got there, and what the user has picked so far.

pub mod action;
pub mod config;
pub mod controller;
pub mod error;
pub mod navigation;
pub mod screen;
pub mod selection;

pub use action::OrderAction;
pub use config::{OrderConfig, OrderOptions};
pub use controller::{OrderNavigationController, Outcome};
pub use error::{NavigationError, Result};
pub use navigation::{BackStack, NavigationState};
pub use screen::Screen;
pub use selection::{Flavor, OrderSelection, format_pickup_date, pickup_dates};
