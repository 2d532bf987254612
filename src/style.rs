//! Terminal emphasis for the exit message.
//!
//! The message uses two accents: the ASCII banner and the call-to-action phrase
//! inside each variant body. Both go through [`Styler`] so the binary can render
//! ANSI color on a TTY while tests (and piped output) get the plain text back
//! unchanged.

use colored::Colorize;

/// Emphasis operations used when composing the exit message.
pub trait Styler {
    /// Render the ASCII banner header.
    fn banner(&self, text: &str) -> String;
    /// Render a call-to-action phrase inside a variant body.
    fn accent(&self, text: &str) -> String;
}

/// ANSI color styling: magenta banner, green call-to-action.
pub struct AnsiStyler;

impl Styler for AnsiStyler {
    fn banner(&self, text: &str) -> String {
        text.magenta().to_string()
    }

    fn accent(&self, text: &str) -> String {
        text.green().to_string()
    }
}

/// Pass-through styling for tests and non-TTY output.
pub struct PlainStyler;

impl Styler for PlainStyler {
    fn banner(&self, text: &str) -> String {
        text.to_string()
    }

    fn accent(&self, text: &str) -> String {
        text.to_string()
    }
}
