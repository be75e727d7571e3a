//! # Slideshow Controller
//!
//! Rotates the promotional slides while the kiosk is idle.
//!
//! ```text
//!   slides: [s0, s1, s2]        interval: 5s
//!
//!   start ──► s0 ──5s──► s1 ──5s──► s2 ──5s──► s0 ...
//!                         │
//!                  select(2) ──► s2, next change 5s from now
//!
//!   show(3)  → s0   (past the end wraps to the start)
//!   show(-1) → s2   (before the start wraps to the end)
//! ```
//!
//! A single slide never rotates, so no timer is armed for it.

use std::time::Duration;
use tokio::time::Instant;
use tracing::debug;

#[derive(Debug)]
pub struct SlideshowController {
    slides: Vec<String>,
    current: usize,
    interval: Duration,
    next_advance: Option<Instant>,
}

impl SlideshowController {
    /// Creates a controller. An empty slide list falls back to `fallback`
    /// alone.
    pub fn new(slides: Vec<String>, fallback: &str, interval: Duration) -> Self {
        let slides = if slides.is_empty() {
            vec![fallback.to_string()]
        } else {
            slides
        };

        SlideshowController {
            slides,
            current: 0,
            interval,
            next_advance: None,
        }
    }

    pub fn slides(&self) -> &[String] {
        &self.slides
    }

    pub fn current(&self) -> usize {
        self.current
    }

    pub fn current_slide(&self) -> &str {
        &self.slides[self.current]
    }

    /// When the next automatic change is due, if the timer is running.
    pub fn next_advance(&self) -> Option<Instant> {
        self.next_advance
    }

    /// Shows the first slide and starts rotating.
    pub fn start(&mut self, now: Instant) {
        self.current = 0;
        self.restart_timer(now);
        debug!(slides = self.slides.len(), "Slideshow started");
    }

    /// Stops rotating. The current slide is kept.
    pub fn stop(&mut self) {
        if self.next_advance.take().is_some() {
            debug!("Slideshow stopped");
        }
    }

    /// Moves to the next slide if the timer is due.
    ///
    /// Returns true when the slide changed.
    pub fn on_tick(&mut self, now: Instant) -> bool {
        match self.next_advance {
            Some(due) if now >= due => {
                self.advance();
                self.next_advance = Some(now + self.interval);
                true
            }
            _ => false,
        }
    }

    /// Moves to the next slide, wrapping at the end.
    pub fn advance(&mut self) {
        self.show(self.current as i64 + 1);
    }

    /// Shows slide `index`. Past the end wraps to 0, negative wraps to
    /// the last slide.
    pub fn show(&mut self, index: i64) {
        let len = self.slides.len() as i64;
        self.current = if index >= len {
            0
        } else if index < 0 {
            (len - 1) as usize
        } else {
            index as usize
        };
    }

    /// Manual pick of a slide: shows it and restarts the timer from now.
    pub fn select(&mut self, index: i64, now: Instant) {
        self.show(index);
        self.restart_timer(now);
    }

    fn restart_timer(&mut self, now: Instant) {
        self.next_advance = (self.slides.len() > 1).then(|| now + self.interval);
    }
}
