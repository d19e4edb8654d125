//! Recording console adapter for testing.

use std::sync::{Arc, RwLock};

use stagehand_core::application::ports::Console;

/// In-memory console for testing.
///
/// Records greeting invocations and log lines; interactivity is forced at
/// construction instead of probing a terminal.
#[derive(Debug, Clone)]
pub struct MemoryConsole {
    interactive: bool,
    inner: Arc<RwLock<MemoryConsoleInner>>,
}

#[derive(Debug, Default)]
struct MemoryConsoleInner {
    greetings: usize,
    lines: Vec<String>,
}

impl MemoryConsole {
    /// A console pretending (or not) to be attached to a terminal.
    pub fn new(interactive: bool) -> Self {
        Self {
            interactive,
            inner: Arc::new(RwLock::new(MemoryConsoleInner::default())),
        }
    }

    /// How many times the greeting was shown.
    pub fn greeting_count(&self) -> usize {
        self.inner.read().unwrap().greetings
    }

    /// All log lines emitted so far.
    pub fn lines(&self) -> Vec<String> {
        self.inner.read().unwrap().lines.clone()
    }
}

impl Console for MemoryConsole {
    fn is_interactive(&self) -> bool {
        self.interactive
    }

    fn greeting(&self) {
        self.inner.write().unwrap().greetings += 1;
    }

    fn log(&self, message: &str) {
        self.inner.write().unwrap().lines.push(message.to_string());
    }
}
