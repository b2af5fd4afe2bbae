//! Theme system for consistent styling

use dialoguer::theme::ColorfulTheme;

/// Theme trait for customizing UI appearance
pub trait Theme {
    /// Get dialoguer theme
    fn dialoguer_theme(&self) -> &ColorfulTheme;

    /// Marker in front of the chosen option
    fn selected_marker(&self) -> &str;

    /// Marker in front of the other options
    fn unselected_marker(&self) -> &str;
}

/// Default theme implementation
#[derive(Default)]
pub struct DefaultTheme {
    dialoguer: ColorfulTheme,
}

impl Theme for DefaultTheme {
    fn dialoguer_theme(&self) -> &ColorfulTheme {
        &self.dialoguer
    }

    fn selected_marker(&self) -> &str {
        "●"
    }

    fn unselected_marker(&self) -> &str {
        "○"
    }
}
