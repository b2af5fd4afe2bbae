//! Explicit back-stack for the order flow

use crate::screen::Screen;
use serde::Serialize;

/// Ordered history of previously visited screens
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct BackStack {
    screens: Vec<Screen>,
}

impl BackStack {
    pub fn new() -> Self {
        Self {
            screens: Vec::new(),
        }
    }

    /// Push a screen onto the history
    ///
    /// Start is the root, so it is only accepted at the bottom of the stack.
    /// Returns false when the push was refused.
    pub fn push(&mut self, screen: Screen) -> bool {
        if screen.is_root() && !self.screens.is_empty() {
            return false;
        }
        self.screens.push(screen);
        true
    }

    /// Pop the most recent screen
    pub fn pop(&mut self) -> Option<Screen> {
        self.screens.pop()
    }

    /// Drop the whole history
    pub fn clear(&mut self) {
        self.screens.clear();
    }

    pub fn depth(&self) -> usize {
        self.screens.len()
    }

    pub fn as_slice(&self) -> &[Screen] {
        &self.screens
    }
}

/// Current screen plus the history that led to it
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NavigationState {
    pub current: Screen,
    pub back_stack: BackStack,
}

impl Default for NavigationState {
    fn default() -> Self {
        Self {
            current: Screen::Start,
            back_stack: BackStack::new(),
        }
    }
}

impl NavigationState {
    /// Move forward to `to`, remembering the current screen
    ///
    /// Returns false and stays put when the history refuses the current screen.
    pub(crate) fn advance(&mut self, to: Screen) -> bool {
        if !self.back_stack.push(self.current) {
            return false;
        }
        self.current = to;
        true
    }

    /// Go back one step. With an empty history the flow rests on Start.
    pub(crate) fn retreat(&mut self) {
        self.current = self.back_stack.pop().unwrap_or(Screen::Start);
    }

    /// Return to the root, forgetting the history
    pub(crate) fn reset(&mut self) {
        self.back_stack.clear();
        self.current = Screen::Start;
    }
}
