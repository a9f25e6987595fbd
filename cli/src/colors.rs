use colored::*;

pub struct ColorScheme;

impl ColorScheme {
    pub fn new(use_colors: bool) -> Self {
        if !use_colors {
            colored::control::set_override(false);
        }
        Self
    }

    pub fn heading(&self, text: &str) -> ColoredString {
        text.bold()
    }

    pub fn option_number(&self, text: &str) -> ColoredString {
        text.blue()
    }

    pub fn value(&self, text: &str) -> ColoredString {
        text.normal()
    }

    pub fn infinity(&self, text: &str) -> ColoredString {
        text.dimmed()
    }

    pub fn error(&self, text: &str) -> ColoredString {
        text.red()
    }

    pub fn number(&self, text: &str) -> ColoredString {
        text.green()
    }

    pub fn stats(&self, text: &str) -> ColoredString {
        text.blue()
    }
}
