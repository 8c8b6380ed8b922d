use std::io::{self, BufRead, Write};

use colored::Colorize;
use indicatif::ProgressBar;

use crate::cli::output;
use crate::core::errors::Result;
use crate::core::models::alert::Alert;
use crate::core::models::link_state::{ButtonAction, ButtonView};
use crate::core::traits::frontend::Frontend;

/// Draws the control on the terminal and reads answers from stdin.
pub struct TerminalFrontend {
    /// Answer for the next prompt instead of reading stdin.
    preset: Option<String>,
    /// Print the control row on every render, not just the spinner.
    show_rows: bool,
    spinner: Option<ProgressBar>,
}

impl TerminalFrontend {
    /// Frontend for one-shot commands: only the loading spinner is drawn.
    pub fn oneshot(preset: Option<String>) -> Self {
        Self {
            preset,
            show_rows: false,
            spinner: None,
        }
    }

    /// Frontend for the interactive panel.
    pub fn panel() -> Self {
        Self {
            preset: None,
            show_rows: true,
            spinner: None,
        }
    }

    fn stop_spinner(&mut self) {
        if let Some(sp) = self.spinner.take() {
            output::clear_spinner(sp);
        }
    }

    fn row(view: &ButtonView) -> String {
        let button = format!("[{}]", view.action);
        let button = match (view.action, view.enabled) {
            (_, false) => button.dimmed(),
            (ButtonAction::Remove, true) => button.red(),
            _ => button.green(),
        };
        let username = if view.username.is_empty() {
            String::new()
        } else {
            format!("{}  ", view.username.bright_black())
        };
        format!("  {}  {username}{button}", "SSH Keys".bold())
    }
}

impl Frontend for TerminalFrontend {
    fn render(&mut self, view: &ButtonView) -> Result<()> {
        if view.action == ButtonAction::Loading {
            if self.spinner.is_none() {
                self.spinner = Some(output::spinner("Fetching keys..."));
            }
            return Ok(());
        }

        self.stop_spinner();
        if self.show_rows {
            println!("{}", Self::row(view));
        }
        Ok(())
    }

    fn prompt_text(&mut self, title: &str) -> Result<Option<String>> {
        if let Some(answer) = self.preset.take() {
            return Ok(Some(answer));
        }

        print!("  {title}: ");
        io::stdout().flush()?;

        let mut input = String::new();
        if io::stdin().lock().read_line(&mut input)? == 0 {
            return Ok(None);
        }
        let answer = input.trim();
        Ok((!answer.is_empty()).then(|| answer.to_string()))
    }

    fn alert(&mut self, alert: &Alert) -> Result<()> {
        self.stop_spinner();
        output::error(&alert.to_string());
        Ok(())
    }
}
