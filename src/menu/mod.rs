//! Interactive order menu

pub mod app;
pub mod framework;
pub mod pages;

pub use app::MenuApplication;
