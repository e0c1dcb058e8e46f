//! Terminal front end: reads key presses and prints the display.

use crate::calculator::copy_to_clipboard;
use crate::config::Config;
use crate::keypad::{Calculator, Key, parse_keys};
use anyhow::{Context, Result};
use std::io::{BufRead, Write};

/// Line that ends an interactive session.
const QUIT: &str = "q";

/// A keypad session bound to a config.
pub struct Session {
    calculator: Calculator,
    copy_on_evaluate: bool,
}

impl Session {
    pub fn new(config: &Config) -> Self {
        Self {
            calculator: Calculator::new(config.settings()),
            copy_on_evaluate: config.copy_on_evaluate,
        }
    }

    pub fn calculator(&self) -> &Calculator {
        &self.calculator
    }

    /// Feed one line of key presses.
    pub fn feed(&mut self, line: &str) {
        for key in parse_keys(line) {
            match key {
                Key::Copy => self.copy(),
                Key::Equals => {
                    self.calculator.press(key);
                    if self.copy_on_evaluate {
                        self.copy();
                    }
                }
                _ => self.calculator.press(key),
            }
        }
    }

    fn copy(&self) {
        let Some(text) = self.calculator.copyable_result() else {
            tracing::debug!("nothing to copy");
            return;
        };
        // Clipboard trouble should not end the session.
        if let Err(e) = copy_to_clipboard(text) {
            tracing::warn!("{e:#}");
        }
    }

    /// Run until `q` or end of input, printing the display after each line.
    pub fn run(&mut self, input: impl BufRead, mut output: impl Write) -> Result<()> {
        writeln!(output, "{}", self.calculator.screen()).context("Failed to write display")?;

        for line in input.lines() {
            let line = line.context("Failed to read input")?;
            if line.trim() == QUIT {
                break;
            }
            self.feed(&line);
            writeln!(output, "{}", self.calculator.screen())
                .context("Failed to write display")?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_feed_lines() {
        let mut session = Session::new(&Config::default());
        session.feed("2 +");
        session.feed("+ 3 =");
        assert_eq!(session.calculator().screen().result(), "5");
    }

    #[test]
    fn test_run_prints_display() {
        let mut session = Session::new(&Config::default());
        let input = "12x3=\n4\nq\n5\n";
        let mut output = Vec::new();
        session.run(input.as_bytes(), &mut output).unwrap();

        let output = String::from_utf8(output).unwrap();
        assert_eq!(
            output,
            "  \n=\n  12\u{00D7}3\n= 36\n  4\n=\n"
        );
    }

    #[test]
    fn test_error_marker_from_config() {
        let config = Config {
            error_marker: "E".to_string(),
            ..Config::default()
        };
        let mut session = Session::new(&config);
        session.feed("5/0=");
        assert_eq!(session.calculator().screen().result(), "E");
    }
}
