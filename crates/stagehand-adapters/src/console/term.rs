//! Terminal console adapter.

use std::io::IsTerminal as _;

use console::Term;

use stagehand_core::application::ports::Console;

const GREETING: &str = r#"
      _                    _                     _
  ___| |_ __ _  __ _  ___ | |__   __ _ _ __   __| |
 / __| __/ _` |/ _` |/ _ \| '_ \ / _` | '_ \ / _` |
 \__ \ || (_| | (_| |  __/| | | | (_| | | | | (_| |
 |___/\__\__,_|\__, |\___||_| |_|\__,_|_| |_|\__,_|
               |___/        your service, staged.
"#;

/// Production console backed by the real terminal.
///
/// Interactivity requires both stdin and stdout to be terminals, so piped
/// or redirected invocations never see the greeting or prompts. In quiet
/// mode the greeting and log lines are suppressed; interactivity detection
/// is unaffected.
pub struct TermConsole {
    term: Term,
    quiet: bool,
}

impl TermConsole {
    pub fn new(quiet: bool) -> Self {
        Self {
            term: Term::stdout(),
            quiet,
        }
    }
}

impl Default for TermConsole {
    fn default() -> Self {
        Self::new(false)
    }
}

impl Console for TermConsole {
    fn is_interactive(&self) -> bool {
        std::io::stdin().is_terminal() && std::io::stdout().is_terminal()
    }

    fn greeting(&self) {
        if !self.quiet {
            let _ = self.term.write_line(GREETING);
        }
    }

    fn log(&self, message: &str) {
        if !self.quiet {
            let _ = self.term.write_line(message);
        }
    }
}
