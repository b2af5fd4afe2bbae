//! Input handling utilities

use anyhow::Result;
use dialoguer::{Select, theme::ColorfulTheme};
use std::io;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

/// Select prompt that reports Ctrl+C instead of failing
pub struct EnhancedSelect<'a> {
    prompt: String,
    items: Vec<String>,
    theme: &'a ColorfulTheme,
    interrupted: Option<Arc<AtomicBool>>,
}

/// Result of enhanced select
#[derive(Debug, PartialEq, Eq)]
pub enum SelectResult {
    Selected(usize),
    Interrupted,
}

impl<'a> EnhancedSelect<'a> {
    pub fn new(theme: &'a ColorfulTheme) -> Self {
        Self {
            prompt: String::new(),
            items: Vec::new(),
            theme,
            interrupted: None,
        }
    }

    pub fn with_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.prompt = prompt.into();
        self
    }

    pub fn items(mut self, items: &[impl ToString]) -> Self {
        self.items = items.iter().map(|item| item.to_string()).collect();
        self
    }

    pub fn with_interrupt(mut self, interrupted: Arc<AtomicBool>) -> Self {
        self.interrupted = Some(interrupted);
        self
    }

    pub fn interact(self) -> Result<SelectResult> {
        // Ctrl+C pressed before the prompt was shown
        if let Some(ref interrupted) = self.interrupted
            && interrupted.load(Ordering::SeqCst)
        {
            return Ok(SelectResult::Interrupted);
        }

        let outcome = Select::with_theme(self.theme)
            .with_prompt(&self.prompt)
            .items(&self.items)
            .default(0)
            .interact_opt();
        classify(outcome, self.interrupted.as_deref())
    }
}

/// Map the prompt outcome, keeping real terminal failures as errors
///
/// The terminal is in raw mode while the prompt is up, so Ctrl+C arrives as an
/// `Interrupted` read instead of a signal and is recorded on the flag here.
fn classify(
    outcome: dialoguer::Result<Option<usize>>,
    interrupted: Option<&AtomicBool>,
) -> Result<SelectResult> {
    match outcome {
        Ok(Some(selection)) => Ok(SelectResult::Selected(selection)),
        // Esc/q
        Ok(None) => Ok(SelectResult::Interrupted),
        Err(dialoguer::Error::IO(e)) if e.kind() == io::ErrorKind::Interrupted => {
            if let Some(flag) = interrupted {
                flag.store(true, Ordering::SeqCst);
            }
            Ok(SelectResult::Interrupted)
        }
        Err(e) => Err(e.into()),
    }
}
