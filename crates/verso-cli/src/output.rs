//! Printing command results as text or JSON

use anyhow::Result;
use console::style;
use serde::Serialize;
use std::fmt::Display;

use crate::config::{OutputFormat, OutputSettings};

/// Writes command results to stdout in the configured format
#[derive(Debug, Clone, Copy)]
pub struct Output {
    format: OutputFormat,
}

impl Output {
    /// Create an output and apply the color preference globally
    pub fn new(settings: OutputSettings) -> Self {
        if let Some(color) = settings.color {
            console::set_colors_enabled(color);
            console::set_colors_enabled_stderr(color);
        }
        Output {
            format: settings.format,
        }
    }

    pub fn format(&self) -> OutputFormat {
        self.format
    }

    pub fn is_json(&self) -> bool {
        self.format == OutputFormat::Json
    }

    /// Print `text` in text mode, or `json` pretty printed in JSON mode
    ///
    /// Empty text prints nothing.
    pub fn print<T: Serialize + ?Sized>(&self, text: impl Display, json: &T) -> Result<()> {
        match self.format {
            OutputFormat::Text => {
                let text = text.to_string();
                if !text.is_empty() {
                    println!("{}", text);
                }
            }
            OutputFormat::Json => println!("{}", serde_json::to_string_pretty(json)?),
        }
        Ok(())
    }
}

/// Colored rendering of a yes/no answer
pub fn boolean(value: bool) -> String {
    if value {
        style("true").green().to_string()
    } else {
        style("false").red().to_string()
    }
}

/// Print a warning to stderr
pub fn warn(message: impl Display) {
    eprintln!("{} {}", style("Warning:").yellow(), message);
}
