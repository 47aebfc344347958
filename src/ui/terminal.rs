//! Terminal UI.

use console::Term;
use std::io::Write;

use super::{should_use_colors, AuditTheme, OutputMode, UserInterface};

/// Terminal UI writing to stdout, with errors on stderr.
pub struct TerminalUI {
    term: Term,
    err: Term,
    theme: AuditTheme,
    colors: bool,
    mode: OutputMode,
}

impl TerminalUI {
    /// Create a new terminal UI with explicit color choice.
    pub fn with_colors(mode: OutputMode, colors: bool) -> Self {
        let theme = if colors {
            AuditTheme::new()
        } else {
            AuditTheme::plain()
        };

        Self {
            term: Term::stdout(),
            err: Term::stderr(),
            theme,
            colors,
            mode,
        }
    }
}

impl UserInterface for TerminalUI {
    fn output_mode(&self) -> OutputMode {
        self.mode
    }

    fn message(&mut self, msg: &str) {
        writeln!(self.term, "{}", msg).ok();
    }

    fn success(&mut self, msg: &str) {
        writeln!(self.term, "{}", self.theme.format_success(msg)).ok();
    }

    fn warning(&mut self, msg: &str) {
        writeln!(self.term, "{}", self.theme.format_warning(msg)).ok();
    }

    fn error(&mut self, msg: &str) {
        writeln!(self.err, "{}", self.theme.format_error(msg)).ok();
    }

    fn use_colors(&self) -> bool {
        self.colors
    }
}

/// Create the UI for a run.
///
/// `no_color` forces plain output; otherwise `NO_COLOR` and TTY detection
/// decide.
pub fn create_ui(mode: OutputMode, no_color: bool) -> Box<dyn UserInterface> {
    let colors = !no_color && should_use_colors();
    Box::new(TerminalUI::with_colors(mode, colors))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn terminal_ui_keeps_mode_and_colors() {
        let ui = TerminalUI::with_colors(OutputMode::Quiet, false);
        assert_eq!(ui.output_mode(), OutputMode::Quiet);
        assert!(!ui.use_colors());
    }

    #[test]
    fn create_ui_respects_no_color() {
        let ui = create_ui(OutputMode::Normal, true);
        assert!(!ui.use_colors());
    }

    #[test]
    fn create_ui_respects_mode() {
        let ui = create_ui(OutputMode::Quiet, true);
        assert_eq!(ui.output_mode(), OutputMode::Quiet);
    }
}
