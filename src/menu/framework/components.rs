//! UI components for menu pages

use colored::*;
use cupcake_order::Screen;

/// Base trait for all UI components
pub trait Component {
    fn render(&self);
}

/// Trail of visited screens ending at the current one, e.g. "Start › Flavor"
pub struct Breadcrumb {
    trail: Vec<Screen>,
}

impl Breadcrumb {
    pub fn new(back_stack: &[Screen], current: Screen) -> Self {
        let mut trail = back_stack.to_vec();
        trail.push(current);
        Self { trail }
    }

    pub fn text(&self) -> String {
        self.trail
            .iter()
            .map(|s| s.route_name())
            .collect::<Vec<_>>()
            .join(" › ")
    }
}

impl Component for Breadcrumb {
    fn render(&self) {
        println!("{}", self.text().dimmed());
    }
}

/// Footer component with navigation hints
pub struct Footer {
    pub show_back: bool,
}

impl Footer {
    pub fn new(show_back: bool) -> Self {
        Self { show_back }
    }

    pub fn hints(&self) -> &'static str {
        if self.show_back {
            "↑↓ - navigate | Enter - select | Ctrl+C - cancel order"
        } else {
            "↑↓ - navigate | Enter - select | Ctrl+C - exit"
        }
    }
}

impl Component for Footer {
    fn render(&self) {
        println!();
        println!("{}", "─".repeat(50).dimmed());
        println!("{}", self.hints().dimmed());
    }
}

/// Content area for displaying text
#[derive(Default)]
pub struct ContentArea {
    pub content: Vec<String>,
}

impl ContentArea {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_line(mut self, line: impl Into<String>) -> Self {
        self.content.push(line.into());
        self
    }

    pub fn add_section(mut self, title: impl Into<String>, lines: Vec<String>) -> Self {
        self.content
            .push(format!("{}:", title.into()).bold().to_string());
        for line in lines {
            self.content.push(format!("  • {}", line));
        }
        self.content.push(String::new());
        self
    }

    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }
}

impl Component for ContentArea {
    fn render(&self) {
        for line in &self.content {
            println!("{}", line);
        }
    }
}
