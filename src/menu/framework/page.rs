//! Page abstraction and context

use super::components::{Breadcrumb, ContentArea, Footer};
use super::input::{EnhancedSelect, SelectResult};
use super::layout::{Layout, LayoutComponents, StandardLayout};
use super::theme::{DefaultTheme, Theme};
use anyhow::Result;
use colored::*;
use cupcake_order::{OrderAction, OrderNavigationController, Screen};
use std::sync::Arc;
use std::sync::atomic::AtomicBool;

pub const TOOL_TITLE: &str = "Cupcake Order";

/// Result type for page actions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageResult {
    /// Forward a user action to the controller
    Dispatch(OrderAction),
    /// Leave the application
    Exit,
    /// Stay on current page
    Stay,
}

/// One selectable line of a page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuEntry {
    pub label: String,
    pub result: PageResult,
}

impl MenuEntry {
    pub fn new(label: impl Into<String>, result: PageResult) -> Self {
        Self {
            label: label.into(),
            result,
        }
    }

    pub fn action(label: impl Into<String>, action: OrderAction) -> Self {
        Self::new(label, PageResult::Dispatch(action))
    }
}

/// Context passed to pages
pub struct PageContext {
    pub controller: OrderNavigationController,
    pub theme: DefaultTheme,
    pub debug: bool,
    pub interrupted: Arc<AtomicBool>,
}

impl PageContext {
    pub fn new(
        controller: OrderNavigationController,
        debug: bool,
        interrupted: Arc<AtomicBool>,
    ) -> Self {
        Self {
            controller,
            theme: DefaultTheme::default(),
            debug,
            interrupted,
        }
    }

    /// Option label with a selected/unselected marker
    pub fn marked(&self, label: impl std::fmt::Display, selected: bool) -> String {
        let marker = if selected {
            self.theme.selected_marker()
        } else {
            self.theme.unselected_marker()
        };
        format!("{marker} {label}")
    }
}

/// Next/Cancel/Back entries shared by every screen after Start
///
/// "Next" only shows once the screen's selection is made, and "Back" only
/// while the back button is visible.
pub fn navigation_entries(controller: &OrderNavigationController) -> Vec<MenuEntry> {
    let mut entries = Vec::new();
    if controller.can_advance() {
        entries.push(MenuEntry::action("Next", OrderAction::Next));
    }
    if !controller.current_screen().is_root() {
        entries.push(MenuEntry::action("Cancel", OrderAction::Cancel));
    }
    if controller.is_back_button_visible() {
        entries.push(MenuEntry::action("← Back", OrderAction::NavigateUp));
    }
    entries
}

/// Reminder shown while the screen still waits for its selection
pub fn pending_selection_hint(controller: &OrderNavigationController) -> Option<String> {
    controller
        .next_blocker()
        .filter(|reason| reason.is_missing_selection())
        .map(|reason| format!("👉 {reason}"))
}

/// Page trait that all order pages implement
pub trait Page {
    /// The screen this page presents
    fn screen(&self) -> Screen;

    /// Dimmed hint under the page title
    fn operation_hint(&self) -> &str;

    /// Text shown above the choices
    fn content(&self, _context: &PageContext) -> ContentArea {
        ContentArea::new()
    }

    /// Choices offered to the user, in display order
    fn entries(&self, context: &PageContext) -> Vec<MenuEntry>;

    /// Render the page and wait for a choice
    fn render(&mut self, context: &mut PageContext) -> Result<PageResult> {
        let controller = &context.controller;
        let screen = self.screen();
        let components = LayoutComponents::new(TOOL_TITLE)
            .with_page_title(screen.title())
            .with_operation_hint(self.operation_hint())
            .add_content(Breadcrumb::new(
                controller.back_stack().as_slice(),
                controller.current_screen(),
            ))
            .add_content(ContentArea::new().add_line(""))
            .with_footer(Footer::new(controller.is_back_button_visible()));

        let mut content = self.content(context);
        if let Some(hint) = pending_selection_hint(controller) {
            content = content.add_line(hint.yellow().to_string());
        }
        let components = if content.is_empty() {
            components
        } else {
            components.add_content(content)
        };
        StandardLayout.render(components);

        let entries = self.entries(context);
        let labels: Vec<&str> = entries.iter().map(|e| e.label.as_str()).collect();
        let selection = EnhancedSelect::new(context.theme.dialoguer_theme())
            .with_prompt(screen.title())
            .items(&labels)
            .with_interrupt(context.interrupted.clone())
            .interact()?;

        match selection {
            SelectResult::Selected(index) => Ok(entries
                .get(index)
                .map(|entry| entry.result)
                .unwrap_or(PageResult::Stay)),
            // MenuApplication decides what Ctrl+C means on this screen
            SelectResult::Interrupted => Ok(PageResult::Stay),
        }
    }
}
