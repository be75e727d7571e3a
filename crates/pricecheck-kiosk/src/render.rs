//! # Render Boundary
//!
//! The kiosk never draws anything itself. After every change it hands the
//! new state to a [`Renderer`], which projects it onto whatever surface the
//! deployment has (HTML page, terminal, test recorder).
//!
//! ```text
//!   DisplayState::Slideshow        → show slideshow container
//!   DisplayState::Loading          → loading overlay
//!   DisplayState::ProductShown(v)  → price panel from v
//!   DisplayState::Error(msg)       → error banner with msg
//!   show_slide(i, url)             → make slide i active
//!   alert(msg)                     → transient message, state unchanged
//! ```

use crate::display::DisplayState;

/// Projection of kiosk state onto a screen.
///
/// Calls arrive from the kiosk task one at a time and must not block.
pub trait Renderer: Send + Sync {
    /// Shows the given display state.
    fn render(&self, state: &DisplayState);

    /// Makes slide `index` (with image `slide`) the visible one.
    fn show_slide(&self, index: usize, slide: &str);

    /// Shows a transient message without changing the display state.
    fn alert(&self, message: &str);
}
