//! Layout system for organizing components

use super::components::Component;
use super::terminal::Terminal;
use colored::*;

/// Layout trait for organizing page components
pub trait Layout {
    /// Render the complete layout with components
    fn render(&self, components: LayoutComponents);
}

/// Components that can be placed in a layout
pub struct LayoutComponents<'a> {
    pub tool_title: String,
    pub page_title: Option<String>,
    pub operation_hint: Option<String>,
    pub content: Vec<Box<dyn Component + 'a>>,
    pub footer: Option<Box<dyn Component + 'a>>,
}

impl<'a> LayoutComponents<'a> {
    pub fn new(tool_title: impl Into<String>) -> Self {
        Self {
            tool_title: tool_title.into(),
            page_title: None,
            operation_hint: None,
            content: Vec::new(),
            footer: None,
        }
    }

    pub fn with_page_title(mut self, title: impl Into<String>) -> Self {
        self.page_title = Some(title.into());
        self
    }

    pub fn with_operation_hint(mut self, hint: impl Into<String>) -> Self {
        self.operation_hint = Some(hint.into());
        self
    }

    pub fn add_content<C: Component + 'a>(mut self, component: C) -> Self {
        self.content.push(Box::new(component));
        self
    }

    pub fn with_footer<C: Component + 'a>(mut self, footer: C) -> Self {
        self.footer = Some(Box::new(footer));
        self
    }
}

/// Standard layout implementation
pub struct StandardLayout;

impl StandardLayout {
    /// Tool title with double line separator
    fn render_tool_title(&self, title: &str) {
        println!("{}", title.magenta());
        println!("{}", "═".repeat(title.chars().count()).magenta());
    }

    /// Page title with single line separator
    fn render_page_title(&self, title: &str) {
        println!("{}", title.bright_white().bold());
        println!("{}", "─".repeat(title.chars().count()).bright_white());
    }
}

impl Layout for StandardLayout {
    fn render(&self, components: LayoutComponents) {
        Terminal::clear();

        self.render_tool_title(&components.tool_title);

        if let Some(page_title) = &components.page_title {
            self.render_page_title(page_title);
        }

        if let Some(hint) = &components.operation_hint {
            println!("{}", hint.dimmed());
        }

        println!();

        for component in components.content {
            component.render();
        }

        if let Some(footer) = components.footer {
            footer.render();
        }
    }
}
