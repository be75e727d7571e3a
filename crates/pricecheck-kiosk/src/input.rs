//! # Input Router
//!
//! Merges the two ways a search term reaches the kiosk:
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  SCANNER STREAM                        MANUAL STREAM                    │
//! │  ──────────────                        ─────────────                    │
//! │  9 5 5 6 0 0 1 ⏎                       shopper types, taps Search       │
//! │  keystrokes < 100ms apart              trimmed, must be non-empty       │
//! │  gap > 100ms → partial code dropped    empty → validation message       │
//! │                                                                         │
//! │                 while manual entry has focus the scanner is OFF         │
//! │                                                                         │
//! │                     both ──► Some(term) ──► DisplayStateMachine         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Like the display machine, the router only records when its gap timer is
//! due; the runtime does the sleeping.

use pricecheck_core::validation::validate_search_term;
use pricecheck_core::ValidationError;
use std::time::Duration;
use tokio::time::Instant;
use tracing::{debug, trace};

/// A keystroke, reduced to what the router cares about.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Key {
    /// A printable character.
    Char(char),
    /// Terminates a scanned code.
    Enter,
    /// Dismisses the product or error screen.
    Escape,
    /// Shift. Keeps a scan alive without adding to it.
    Modifier,
    /// Any other non-printable key (arrows, F-keys, Tab, ...).
    Named(String),
}

impl Key {
    /// Maps a browser-style key name (`"a"`, `"Enter"`, `"Shift"`) to a key.
    pub fn from_name(name: &str) -> Key {
        let mut chars = name.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Key::Char(c),
            _ => match name {
                "Enter" => Key::Enter,
                "Escape" | "Esc" => Key::Escape,
                "Shift" => Key::Modifier,
                other => Key::Named(other.to_string()),
            },
        }
    }
}

/// Scanner buffer, gap timer and manual-focus flag.
#[derive(Debug)]
pub struct InputRouter {
    buffer: String,
    gap: Duration,
    gap_deadline: Option<Instant>,
    manual_focused: bool,
}

impl InputRouter {
    pub fn new(gap: Duration) -> Self {
        InputRouter {
            buffer: String::new(),
            gap,
            gap_deadline: None,
            manual_focused: false,
        }
    }

    /// Characters scanned since the last terminator or gap.
    pub fn buffer(&self) -> &str {
        &self.buffer
    }

    /// When the partial scan will be dropped, if one is pending.
    pub fn gap_deadline(&self) -> Option<Instant> {
        self.gap_deadline
    }

    pub fn manual_focused(&self) -> bool {
        self.manual_focused
    }

    /// Feeds one scanner keystroke.
    ///
    /// Returns the scanned term when Enter closes a non-empty buffer.
    /// Keys are ignored entirely while manual entry holds focus.
    pub fn on_key(&mut self, key: &Key, now: Instant) -> Option<String> {
        if self.manual_focused {
            return None;
        }

        match key {
            Key::Enter => {
                self.gap_deadline = None;
                let term = self.buffer.trim().to_string();
                self.buffer.clear();
                if term.is_empty() {
                    None
                } else {
                    debug!(term = %term, "Scanned code complete");
                    Some(term)
                }
            }
            Key::Char(c) => {
                self.buffer.push(*c);
                self.gap_deadline = Some(now + self.gap);
                None
            }
            Key::Modifier => {
                self.gap_deadline = Some(now + self.gap);
                None
            }
            Key::Escape | Key::Named(_) => None,
        }
    }

    /// Drops the partial scan if the gap timer is due.
    ///
    /// Returns true when a buffer was dropped.
    pub fn on_gap_elapsed(&mut self, now: Instant) -> bool {
        match self.gap_deadline {
            Some(deadline) if now >= deadline => {
                self.gap_deadline = None;
                if !self.buffer.is_empty() {
                    trace!(dropped = %self.buffer, "Scanner gap elapsed");
                }
                self.buffer.clear();
                true
            }
            _ => false,
        }
    }

    /// Manual entry gained or lost focus.
    ///
    /// Gaining focus switches the scanner off and discards any partial
    /// scan.
    pub fn set_manual_focus(&mut self, focused: bool) {
        if focused == self.manual_focused {
            return;
        }
        debug!(focused, "Manual entry focus changed");
        self.manual_focused = focused;
        if focused {
            self.buffer.clear();
            self.gap_deadline = None;
        }
    }

    /// Submits manually entered text.
    ///
    /// On success the entry surface gives up focus and the scanner resumes.
    /// On failure nothing changes and the validation message is returned.
    pub fn submit_manual(&mut self, text: &str) -> Result<String, ValidationError> {
        let term = validate_search_term(text)?;
        self.set_manual_focus(false);
        Ok(term)
    }
}
