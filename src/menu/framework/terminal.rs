//! Terminal management utilities

use std::io::{self, Write};

/// Environment variable that disables screen clearing (useful in CI and logs)
pub const NO_CLEAR_ENV: &str = "CUPCAKE_NO_CLEAR";

/// Clear screen utility
pub struct Terminal;

impl Terminal {
    /// Clear the screen using the most appropriate method
    pub fn clear() {
        if std::env::var_os(NO_CLEAR_ENV).is_some() {
            println!("\n\n");
            return;
        }

        if Self::try_ansi_clear() {
            return;
        }

        // Fallback: padding only
        println!("\n\n");
    }

    /// Try to clear using ANSI escape codes
    fn try_ansi_clear() -> bool {
        match std::env::var("TERM") {
            Ok(term)
                if term.contains("xterm") || term.contains("screen") || term.contains("tmux") =>
            {
                print!("\x1B[2J\x1B[1;1H");
                let _ = io::stdout().flush();
                true
            }
            _ => false,
        }
    }
}
