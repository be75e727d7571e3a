//! # Display State Machine
//!
//! Owns the one screen the kiosk is showing and the auto-reset deadline.
//!
//! ## State Transitions
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │                 submit(term)                                            │
//! │   ┌───────────┐ ─────────────► ┌─────────┐  found   ┌──────────────┐    │
//! │   │ Slideshow │                │ Loading │ ───────► │ ProductShown │    │
//! │   └───────────┘ ◄──┐           └─────────┘          └──────┬───────┘    │
//! │         ▲          │               │  not found /          │            │
//! │         │          │               │  failure              │            │
//! │         │          │               ▼                       │            │
//! │         │          │           ┌───────┐                   │            │
//! │         │          └────────── │ Error │                   │            │
//! │         │   reset / interrupt  └───────┘                   │            │
//! │         └──────────────────────────────────────────────────┘            │
//! │                         reset / interrupt                               │
//! │                                                                         │
//! │  submit(term) is accepted from EVERY state and bumps the generation.   │
//! │  Results carrying an older generation are dropped.                     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The machine holds no timer itself: it records the instant the reset is
//! due and the runtime sleeps until then. Arming always replaces the
//! previous deadline, so at most one reset is ever pending.

use pricecheck_core::ProductView;
use serde::Serialize;
use std::time::Duration;
use tokio::time::Instant;
use tracing::debug;

use crate::error::KioskError;

// =============================================================================
// Display State
// =============================================================================

/// What the kiosk screen is showing.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(tag = "mode", rename_all = "camelCase")]
pub enum DisplayState {
    /// Promotional slides cycle.
    #[default]
    Slideshow,

    /// A lookup is in flight.
    Loading { term: String },

    /// Price panel for a found product.
    ProductShown(Box<ProductView>),

    /// Lookup failed; the message is shopper-facing.
    Error { message: String },
}

impl DisplayState {
    /// Short name for logs.
    pub fn name(&self) -> &'static str {
        match self {
            DisplayState::Slideshow => "slideshow",
            DisplayState::Loading { .. } => "loading",
            DisplayState::ProductShown(_) => "product",
            DisplayState::Error { .. } => "error",
        }
    }

    /// True for the states that revert to the slideshow on reset or
    /// interrupt.
    pub fn is_dismissable(&self) -> bool {
        matches!(self, DisplayState::ProductShown(_) | DisplayState::Error { .. })
    }
}

/// Identifies one submitted lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchTicket {
    pub generation: u64,
    pub term: String,
}

// =============================================================================
// State Machine
// =============================================================================

/// The display state machine.
///
/// ## Example
/// ```rust
/// use pricecheck_kiosk::display::{DisplayState, DisplayStateMachine};
/// use pricecheck_kiosk::error::KioskError;
/// use std::time::Duration;
/// use tokio::time::Instant;
///
/// let mut display = DisplayStateMachine::new(Duration::from_secs(30));
/// let first = display.submit("A100");
/// let second = display.submit("B200");
///
/// let now = Instant::now();
/// // The first lookup answers late and is ignored.
/// assert!(!display.complete(first.generation, Err(KioskError::HttpStatus(500)), now));
/// assert!(display.complete(
///     second.generation,
///     Err(KioskError::ProductNotFound("B200".into())),
///     now,
/// ));
/// assert_eq!(
///     display.state(),
///     &DisplayState::Error { message: "Product not found".into() }
/// );
/// ```
#[derive(Debug)]
pub struct DisplayStateMachine {
    state: DisplayState,
    generation: u64,
    reset_deadline: Option<Instant>,
    auto_reset: Duration,
}

impl DisplayStateMachine {
    /// Creates a machine showing the slideshow.
    pub fn new(auto_reset: Duration) -> Self {
        DisplayStateMachine {
            state: DisplayState::default(),
            generation: 0,
            reset_deadline: None,
            auto_reset,
        }
    }

    pub fn state(&self) -> &DisplayState {
        &self.state
    }

    /// Generation of the most recent submission.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// When the pending auto-reset is due, if one is armed.
    pub fn reset_deadline(&self) -> Option<Instant> {
        self.reset_deadline
    }

    /// Starts a lookup for `term`, superseding anything in flight.
    ///
    /// Cancels the pending auto-reset and clears any error on screen.
    pub fn submit(&mut self, term: impl Into<String>) -> SearchTicket {
        let term = term.into();
        self.generation += 1;
        self.reset_deadline = None;
        self.transition(DisplayState::Loading { term: term.clone() });

        SearchTicket {
            generation: self.generation,
            term,
        }
    }

    /// Applies a lookup result.
    ///
    /// Returns false (and changes nothing) when the result belongs to a
    /// superseded submission or no lookup is pending.
    pub fn complete(
        &mut self,
        generation: u64,
        result: Result<ProductView, KioskError>,
        now: Instant,
    ) -> bool {
        if generation != self.generation || !matches!(self.state, DisplayState::Loading { .. }) {
            debug!(
                generation,
                current = self.generation,
                "Discarding stale lookup result"
            );
            return false;
        }

        let next = match result {
            Ok(view) => DisplayState::ProductShown(Box::new(view)),
            Err(err) => DisplayState::Error {
                message: err.user_message(),
            },
        };
        self.transition(next);
        self.arm_reset(now);
        true
    }

    /// Reverts to the slideshow if the pending reset is due.
    ///
    /// Returns true when the reset fired. The deadline is consumed, so a
    /// reset fires at most once per arming.
    pub fn fire_reset(&mut self, now: Instant) -> bool {
        match self.reset_deadline {
            Some(deadline) if now >= deadline => {
                self.reset_deadline = None;
                if self.state.is_dismissable() {
                    self.transition(DisplayState::Slideshow);
                    true
                } else {
                    false
                }
            }
            _ => false,
        }
    }

    /// Tap outside the controls, or Escape: back to the slideshow at once.
    ///
    /// Ignored unless a product or error is on screen.
    pub fn interrupt(&mut self) -> bool {
        if !self.state.is_dismissable() {
            return false;
        }
        self.reset_deadline = None;
        self.transition(DisplayState::Slideshow);
        true
    }

    fn arm_reset(&mut self, now: Instant) {
        self.reset_deadline = Some(now + self.auto_reset);
    }

    fn transition(&mut self, next: DisplayState) {
        debug!(from = self.state.name(), to = next.name(), "Display transition");
        self.state = next;
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use pricecheck_core::{ImageLocations, ProductRecord};
    use serde_json::json;

    fn view(code: &str) -> ProductView {
        let record = ProductRecord::from_json(json!({ "ItemCode": code, "NormalPrice": "1.00" }))
            .unwrap()
            .unwrap();
        ProductView::build(
            &record,
            &ImageLocations {
                product_base: "https://img.test/".into(),
                default_image: "https://img.test/none.png".into(),
            },
        )
    }

    fn machine() -> DisplayStateMachine {
        DisplayStateMachine::new(Duration::from_secs(30))
    }

    #[test]
    fn test_starts_in_slideshow() {
        let display = machine();
        assert_eq!(display.state(), &DisplayState::Slideshow);
        assert_eq!(DisplayState::default(), DisplayState::Slideshow);
        assert_eq!(display.generation(), 0);
        assert!(display.reset_deadline().is_none());
    }

    #[test]
    fn test_success_shows_product_and_arms_reset() {
        let mut display = machine();
        let now = Instant::now();
        let ticket = display.submit("A100");
        assert_eq!(
            display.state(),
            &DisplayState::Loading {
                term: "A100".into()
            }
        );

        assert!(display.complete(ticket.generation, Ok(view("A100")), now));
        assert!(matches!(display.state(), DisplayState::ProductShown(_)));
        assert_eq!(display.reset_deadline(), Some(now + Duration::from_secs(30)));
    }

    #[test]
    fn test_failure_messages() {
        let mut display = machine();
        let now = Instant::now();

        let ticket = display.submit("X");
        display.complete(ticket.generation, Err(KioskError::Transport(String::new())), now);
        assert_eq!(
            display.state(),
            &DisplayState::Error {
                message: "Failed to load product information. Please try again.".into()
            }
        );

        let ticket = display.submit("Y");
        display.complete(ticket.generation, Err(KioskError::HttpStatus(503)), now);
        assert_eq!(
            display.state(),
            &DisplayState::Error {
                message: "HTTP error! status: 503".into()
            }
        );
        assert!(display.reset_deadline().is_some());
    }

    #[test]
    fn test_newer_submission_wins() {
        let mut display = machine();
        let now = Instant::now();
        let a = display.submit("A");
        let b = display.submit("B");

        assert!(display.complete(b.generation, Ok(view("B")), now));
        assert!(!display.complete(a.generation, Ok(view("A")), now));

        match display.state() {
            DisplayState::ProductShown(v) => assert_eq!(v.details.item_code, "B"),
            other => panic!("unexpected state {:?}", other),
        }
    }

    #[test]
    fn test_stale_result_while_loading_is_dropped() {
        let mut display = machine();
        let now = Instant::now();
        let a = display.submit("A");
        let _b = display.submit("B");

        assert!(!display.complete(a.generation, Ok(view("A")), now));
        assert_eq!(display.state(), &DisplayState::Loading { term: "B".into() });
        assert!(display.reset_deadline().is_none());
    }

    #[test]
    fn test_submit_cancels_pending_reset() {
        let mut display = machine();
        let now = Instant::now();
        let t = display.submit("A");
        display.complete(t.generation, Ok(view("A")), now);
        assert!(display.reset_deadline().is_some());

        display.submit("B");
        assert!(display.reset_deadline().is_none());
        assert!(!display.fire_reset(now + Duration::from_secs(60)));
        assert_eq!(display.state(), &DisplayState::Loading { term: "B".into() });
    }

    #[test]
    fn test_reset_fires_once_when_due() {
        let mut display = machine();
        let now = Instant::now();
        let t = display.submit("A");
        display.complete(t.generation, Ok(view("A")), now);

        assert!(!display.fire_reset(now + Duration::from_secs(29)));
        assert!(display.fire_reset(now + Duration::from_secs(30)));
        assert_eq!(display.state(), &DisplayState::Slideshow);
        assert!(!display.fire_reset(now + Duration::from_secs(31)));
    }

    #[test]
    fn test_rearming_replaces_deadline() {
        let mut display = machine();
        let t0 = Instant::now();
        let a = display.submit("A");
        display.complete(a.generation, Ok(view("A")), t0);

        let t1 = t0 + Duration::from_secs(10);
        let b = display.submit("B");
        display.complete(b.generation, Err(KioskError::ProductNotFound("B".into())), t1);

        assert_eq!(display.reset_deadline(), Some(t1 + Duration::from_secs(30)));
        assert!(!display.fire_reset(t0 + Duration::from_secs(30)));
        assert!(display.fire_reset(t1 + Duration::from_secs(30)));
    }

    #[test]
    fn test_interrupt() {
        let mut display = machine();
        assert!(!display.interrupt());

        let t = display.submit("A");
        assert!(!display.interrupt());

        display.complete(t.generation, Ok(view("A")), Instant::now());
        assert!(display.interrupt());
        assert_eq!(display.state(), &DisplayState::Slideshow);
        assert!(display.reset_deadline().is_none());
    }

    #[test]
    fn test_state_serializes_with_mode_tag() {
        let value = serde_json::to_value(DisplayState::Error {
            message: "Product not found".into(),
        })
        .unwrap();
        assert_eq!(value, json!({ "mode": "error", "message": "Product not found" }));

        let value = serde_json::to_value(DisplayState::Slideshow).unwrap();
        assert_eq!(value, json!({ "mode": "slideshow" }));
    }
}
