//! # pricecheck-kiosk: Kiosk Runtime for the Price Checker
//!
//! This crate turns scanner keystrokes and taps into product lookups and
//! drives the kiosk screen between the idle slideshow and the price panel.
//!
//! ## Architecture Overview
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Kiosk Runtime Architecture                       │
//! │                                                                         │
//! │  ┌──────────────────────────────────────────────────────────────────┐  │
//! │  │                      Kiosk (single tokio task)                   │  │
//! │  │                                                                  │  │
//! │  │  Owns every piece of state below; driven by KioskHandle events  │  │
//! │  │  and by three deadlines (auto-reset, slide, scanner gap)         │  │
//! │  └────────────────────────────┬─────────────────────────────────────┘  │
//! │                               │                                         │
//! │         ┌─────────────────────┼─────────────────────┐                  │
//! │         ▼                     ▼                     ▼                   │
//! │  ┌────────────────┐  ┌────────────────┐  ┌────────────────────────┐    │
//! │  │  InputRouter   │  │ DisplayState   │  │  SlideshowController   │    │
//! │  │                │  │ Machine        │  │                        │    │
//! │  │ Scanner buffer │  │ Slideshow /    │  │ Rotation with wrap     │    │
//! │  │ 100ms gap      │  │ Loading /      │  │ Paused while a product │    │
//! │  │ Manual focus   │  │ Product/Error  │  │ or error is shown      │    │
//! │  └────────────────┘  └────────────────┘  └────────────────────────┘    │
//! │                                                                         │
//! │  COLLABORATORS (traits):                                               │
//! │  • ProductFetcher - HTTP lookup (reqwest) or a test double             │
//! │  • Renderer       - projects DisplayState onto a screen                │
//! │  • SlideSource    - slide list discovered at startup                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`kiosk`] - `Kiosk` event loop and `KioskHandle`
//! - [`display`] - Display state machine with generation counter
//! - [`input`] - Scanner/manual input routing
//! - [`slideshow`] - Slide rotation
//! - [`fetch`] - Product lookup client
//! - [`render`] - Render boundary
//! - [`slides`] - Slide discovery
//! - [`config`] - Kiosk configuration (API URL, timers, assets)
//! - [`error`] - Kiosk error types
//!
//! ## Usage
//!
//! ```rust,ignore
//! use pricecheck_kiosk::{ConfiguredSlides, HttpProductFetcher, Kiosk, KioskConfig, SlideSource};
//! use std::sync::Arc;
//!
//! let config = KioskConfig::load_or_default(None);
//! let fetcher = Arc::new(HttpProductFetcher::from_config(&config)?);
//! let slides = ConfiguredSlides::from_config(&config).discover().await;
//!
//! let (kiosk, handle) = Kiosk::new(&config, slides, fetcher, renderer);
//! tokio::spawn(kiosk.run());
//!
//! handle.scan("9556001234567").await?;
//! println!("{:?}", handle.state().await);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod config;
pub mod display;
pub mod error;
pub mod fetch;
pub mod input;
pub mod kiosk;
pub mod render;
pub mod slides;
pub mod slideshow;

// =============================================================================
// Re-exports
// =============================================================================

pub use config::KioskConfig;
pub use display::{DisplayState, DisplayStateMachine, SearchTicket};
pub use error::{KioskError, KioskResult};
pub use fetch::{HttpProductFetcher, ProductFetcher};
pub use input::{InputRouter, Key};
pub use kiosk::{Kiosk, KioskEvent, KioskHandle};
pub use render::Renderer;
pub use slides::{ConfiguredSlides, SlideSource};
pub use slideshow::SlideshowController;
