//! Interactive prompts built on dialoguer
//!
//! All cancellation paths (Esc, empty selection, Ctrl+C) surface as
//! `Ok(None)`; only genuinely broken terminals produce errors. Callers turn
//! `None` into a benign no-op per the cancellation-is-not-an-error rule.

use std::fmt::Write as FmtWrite;
use std::io::IsTerminal;
use std::sync::atomic::{AtomicBool, Ordering};

use console::Style;
use dialoguer::theme::Theme;
use dialoguer::{Confirm, FuzzySelect};

use treehop_core::TreehopError;

/// Global flag to track if Ctrl+C was pressed
static CANCELLED: AtomicBool = AtomicBool::new(false);

fn is_cancelled() -> bool {
    CANCELLED.load(Ordering::SeqCst)
}

/// Set up the global Ctrl+C handler
pub fn setup_ctrl_c_handler() {
    static HANDLER_SET: AtomicBool = AtomicBool::new(false);

    if HANDLER_SET.swap(true, Ordering::SeqCst) {
        return;
    }

    if let Err(e) = ctrlc::set_handler(move || {
        CANCELLED.store(true, Ordering::SeqCst);
        eprintln!();
    }) {
        eprintln!("Warning: Could not set Ctrl+C handler: {}", e);
    }
}

/// Prompt theme: cyan prompts, dimmed hints
struct HopTheme {
    prompt_style: Style,
    active_style: Style,
    hint_style: Style,
}

impl HopTheme {
    fn new() -> Self {
        Self {
            prompt_style: Style::new().cyan().bold(),
            active_style: Style::new().cyan(),
            hint_style: Style::new().dim(),
        }
    }
}

impl Theme for HopTheme {
    fn format_prompt(&self, f: &mut dyn FmtWrite, prompt: &str) -> std::fmt::Result {
        write!(f, "{}", self.prompt_style.apply_to(format!("? {}", prompt)))
    }

    fn format_confirm_prompt(
        &self,
        f: &mut dyn FmtWrite,
        prompt: &str,
        default: Option<bool>,
    ) -> std::fmt::Result {
        let hint = match default {
            Some(true) => "(Y/n)",
            Some(false) => "(y/N)",
            None => "(y/n)",
        };
        write!(
            f,
            "{} {}",
            self.prompt_style.apply_to(format!("? {}", prompt)),
            self.hint_style.apply_to(hint)
        )
    }

    fn format_confirm_prompt_selection(
        &self,
        f: &mut dyn FmtWrite,
        prompt: &str,
        selection: Option<bool>,
    ) -> std::fmt::Result {
        let answer = match selection {
            Some(true) => "Yes",
            Some(false) => "No",
            None => "?",
        };
        write!(
            f,
            "{} {}",
            self.prompt_style.apply_to(format!("? {}", prompt)),
            self.active_style.apply_to(answer)
        )
    }

    fn format_select_prompt_selection(
        &self,
        f: &mut dyn FmtWrite,
        prompt: &str,
        sel: &str,
    ) -> std::fmt::Result {
        write!(
            f,
            "{} {}",
            self.prompt_style.apply_to(format!("? {}", prompt)),
            self.active_style.apply_to(sel)
        )
    }
}

fn ensure_tty() -> Result<(), TreehopError> {
    if std::io::stdin().is_terminal() {
        Ok(())
    } else {
        Err(TreehopError::NonInteractive(
            "standard input is not a terminal".to_string(),
        ))
    }
}

fn convert_dialoguer_error(err: dialoguer::Error) -> TreehopError {
    TreehopError::Io(std::io::Error::other(err.to_string()))
}

/// Interactive surface consumed by command handlers.
///
/// Cancellation is always `Ok(None)`, never an error. The indirection lets
/// tests script selections and confirmations without a terminal.
pub trait Prompter {
    /// Single-select filterable list.
    ///
    /// `initial` pre-seeds the filter so an inexact branch argument narrows
    /// the list immediately. Returns the chosen item, or `None` on
    /// cancellation.
    fn fuzzy_select(
        &self,
        prompt: &str,
        items: &[String],
        initial: Option<&str>,
    ) -> Result<Option<String>, TreehopError>;

    /// Yes/no confirmation; `None` on cancellation
    fn confirm(&self, prompt: &str, default: bool) -> Result<Option<bool>, TreehopError>;
}

/// Dialoguer-backed prompter for real terminals
pub struct TerminalPrompter;

impl Prompter for TerminalPrompter {
    fn fuzzy_select(
        &self,
        prompt: &str,
        items: &[String],
        initial: Option<&str>,
    ) -> Result<Option<String>, TreehopError> {
        ensure_tty()?;
        if is_cancelled() {
            return Ok(None);
        }

        let theme = HopTheme::new();
        let mut select = FuzzySelect::with_theme(&theme);
        select = select.with_prompt(prompt).items(items).default(0);
        if let Some(text) = initial {
            select = select.with_initial_text(text);
        }

        match select.interact_opt() {
            Ok(Some(index)) => Ok(items.get(index).cloned()),
            Ok(None) => Ok(None),
            Err(e) => Err(convert_dialoguer_error(e)),
        }
    }

    fn confirm(&self, prompt: &str, default: bool) -> Result<Option<bool>, TreehopError> {
        ensure_tty()?;
        if is_cancelled() {
            return Ok(None);
        }

        let theme = HopTheme::new();
        match Confirm::with_theme(&theme)
            .with_prompt(prompt)
            .default(default)
            .interact_opt()
        {
            Ok(answer) => Ok(answer),
            Err(e) => Err(convert_dialoguer_error(e)),
        }
    }
}
