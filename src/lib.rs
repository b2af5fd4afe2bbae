//! # cupcake
//!
//! Terminal front end for the Cupcake order flow: an interactive menu and a
//! scripted runner, both driving [`cupcake_order::OrderNavigationController`].

pub mod cli;
pub mod config;
pub mod error;
pub mod menu;
pub mod observability;
pub mod script;

// Re-export commonly used types
pub use config::CupcakeConfig;
pub use error::{Error, Result};
pub use menu::MenuApplication;
