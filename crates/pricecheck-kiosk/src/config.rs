//! # Kiosk Configuration
//!
//! Configuration management for the kiosk runtime.
//!
//! ## Configuration Sources
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Configuration Priority                               │
//! │                                                                         │
//! │  1. Environment Variables (highest priority)                           │
//! │     PRICECHECK_API_URL=http://10.0.0.5/api/pricechecker                │
//! │     PRICECHECK_AUTO_RESET_SECS=20                                      │
//! │                                                                         │
//! │  2. TOML Config File                                                   │
//! │     ~/.config/pricechecker/kiosk.toml (Linux)                          │
//! │     ~/Library/Application Support/com.pricecheck.pricechecker/...      │
//! │                                                                         │
//! │  3. Default Values (lowest priority)                                   │
//! │     30s auto-reset, 5s slides, 100ms scanner gap                       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Configuration File Format
//! ```toml
//! # kiosk.toml
//! [kiosk]
//! id = "550e8400-e29b-41d4-a716-446655440000"
//! name = "Aisle 4 Checker"
//!
//! [api]
//! base_url = "http://192.168.1.177/jayawebapi/api/pricechecker"
//! timeout_secs = 10
//!
//! [display]
//! auto_reset_secs = 30
//! slideshow_interval_secs = 5
//! scanner_gap_ms = 100
//!
//! [slides]
//! urls = ["https://cdn.example/slide1.jpg", "https://cdn.example/slide2.jpg"]
//! ```

use pricecheck_core::ImageLocations;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;
use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::error::{KioskError, KioskResult};

const ASSET_BASE: &str = "https://raw.githubusercontent.com/jayasuperstore/image/main/";

// =============================================================================
// Kiosk Identity
// =============================================================================

/// Identity of this kiosk, used in logs.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KioskIdentity {
    /// Unique kiosk identifier (UUID v4).
    /// Auto-generated on first run if not provided.
    #[serde(default = "generate_kiosk_id")]
    pub id: String,

    /// Human-readable name (e.g., "Aisle 4 Checker").
    #[serde(default = "default_kiosk_name")]
    pub name: String,
}

fn generate_kiosk_id() -> String {
    Uuid::new_v4().to_string()
}

fn default_kiosk_name() -> String {
    "Price Checker".to_string()
}

impl Default for KioskIdentity {
    fn default() -> Self {
        KioskIdentity {
            id: generate_kiosk_id(),
            name: default_kiosk_name(),
        }
    }
}

// =============================================================================
// API Settings
// =============================================================================

/// Product lookup API settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiSettings {
    /// Lookup endpoint; the search term is appended as a path segment.
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Request timeout (seconds). A lookup is a single attempt.
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
}

fn default_base_url() -> String {
    "http://192.168.1.177/jayawebapi/api/pricechecker".to_string()
}

fn default_timeout() -> u64 {
    10
}

impl Default for ApiSettings {
    fn default() -> Self {
        ApiSettings {
            base_url: default_base_url(),
            timeout_secs: default_timeout(),
        }
    }
}

// =============================================================================
// Display Settings
// =============================================================================

/// Timing of the display, slideshow and scanner.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DisplaySettings {
    /// Seconds a product or error stays up before the slideshow returns.
    #[serde(default = "default_auto_reset")]
    pub auto_reset_secs: u64,

    /// Seconds between slide changes.
    #[serde(default = "default_slideshow_interval")]
    pub slideshow_interval_secs: u64,

    /// Longest pause (milliseconds) between scanner keystrokes before the
    /// partial code is dropped.
    #[serde(default = "default_scanner_gap")]
    pub scanner_gap_ms: u64,
}

fn default_auto_reset() -> u64 {
    30
}

fn default_slideshow_interval() -> u64 {
    5
}

fn default_scanner_gap() -> u64 {
    100
}

impl Default for DisplaySettings {
    fn default() -> Self {
        DisplaySettings {
            auto_reset_secs: default_auto_reset(),
            slideshow_interval_secs: default_slideshow_interval(),
            scanner_gap_ms: default_scanner_gap(),
        }
    }
}

// =============================================================================
// Slides & Images
// =============================================================================

/// Slideshow content.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SlideSettings {
    /// Slide image URLs in display order.
    #[serde(default)]
    pub urls: Vec<String>,

    /// Shown alone when `urls` is empty.
    #[serde(default = "default_fallback_slide")]
    pub fallback: String,
}

fn default_fallback_slide() -> String {
    format!("{}slide1.jpg", ASSET_BASE)
}

impl Default for SlideSettings {
    fn default() -> Self {
        SlideSettings {
            urls: Vec::new(),
            fallback: default_fallback_slide(),
        }
    }
}

/// Product image locations.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImageSettings {
    #[serde(default = "default_product_base")]
    pub product_base: String,

    #[serde(default = "default_product_image")]
    pub default_image: String,
}

fn default_product_base() -> String {
    format!("{}products/", ASSET_BASE)
}

fn default_product_image() -> String {
    format!("{}products/none.png", ASSET_BASE)
}

impl Default for ImageSettings {
    fn default() -> Self {
        ImageSettings {
            product_base: default_product_base(),
            default_image: default_product_image(),
        }
    }
}

// =============================================================================
// Main Kiosk Configuration
// =============================================================================

/// Complete kiosk configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct KioskConfig {
    #[serde(default)]
    pub kiosk: KioskIdentity,

    #[serde(default)]
    pub api: ApiSettings,

    #[serde(default)]
    pub display: DisplaySettings,

    #[serde(default)]
    pub slides: SlideSettings,

    #[serde(default)]
    pub images: ImageSettings,
}

impl KioskConfig {
    /// Loads configuration from file, environment, and defaults.
    ///
    /// ## Load Order (later overrides earlier)
    /// 1. Default values
    /// 2. Config file (kiosk.toml)
    /// 3. Environment variables
    pub fn load(config_path: Option<PathBuf>) -> KioskResult<Self> {
        let mut config = Self::default();

        if let Some(path) = config_path.or_else(Self::default_config_path) {
            if path.exists() {
                info!(?path, "Loading kiosk config from file");
                let contents = std::fs::read_to_string(&path)?;
                config = toml::from_str(&contents)?;
            } else {
                debug!(?path, "Config file not found, using defaults");
            }
        }

        config.apply_env_overrides();
        config.validate()?;

        Ok(config)
    }

    /// Loads config or returns default if load fails.
    pub fn load_or_default(config_path: Option<PathBuf>) -> Self {
        Self::load(config_path).unwrap_or_else(|e| {
            warn!("Failed to load kiosk config: {}. Using defaults.", e);
            Self::default()
        })
    }

    /// Saves configuration to file.
    pub fn save(&self, config_path: Option<PathBuf>) -> KioskResult<()> {
        let path = config_path
            .or_else(Self::default_config_path)
            .ok_or_else(|| KioskError::ConfigSaveFailed("No config path available".into()))?;

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|e| KioskError::ConfigSaveFailed(e.to_string()))?;
        }

        let contents = toml::to_string_pretty(self)?;
        std::fs::write(&path, contents).map_err(|e| KioskError::ConfigSaveFailed(e.to_string()))?;

        info!(?path, "Kiosk config saved");
        Ok(())
    }

    /// Validates the configuration.
    pub fn validate(&self) -> KioskResult<()> {
        if self.kiosk.id.trim().is_empty() {
            return Err(KioskError::InvalidConfig("kiosk id must not be empty".into()));
        }

        let url = url::Url::parse(&self.api.base_url)?;
        if url.scheme() != "http" && url.scheme() != "https" {
            return Err(KioskError::InvalidUrl(format!(
                "API URL must start with http:// or https://, got: {}",
                self.api.base_url
            )));
        }
        if url.cannot_be_a_base() {
            return Err(KioskError::InvalidUrl(format!(
                "API URL cannot take a path: {}",
                self.api.base_url
            )));
        }

        let durations = [
            ("api.timeout_secs", self.api.timeout_secs),
            ("display.auto_reset_secs", self.display.auto_reset_secs),
            ("display.slideshow_interval_secs", self.display.slideshow_interval_secs),
            ("display.scanner_gap_ms", self.display.scanner_gap_ms),
        ];
        for (name, value) in durations {
            if value == 0 {
                return Err(KioskError::InvalidConfig(format!(
                    "{} must be greater than 0",
                    name
                )));
            }
        }

        if self.slides.fallback.trim().is_empty() {
            return Err(KioskError::InvalidConfig(
                "slides.fallback must not be empty".into(),
            ));
        }

        Ok(())
    }

    /// Applies environment variable overrides.
    fn apply_env_overrides(&mut self) {
        if let Ok(id) = std::env::var("PRICECHECK_KIOSK_ID") {
            debug!(kiosk_id = %id, "Overriding kiosk ID from environment");
            self.kiosk.id = id;
        }

        if let Ok(name) = std::env::var("PRICECHECK_KIOSK_NAME") {
            self.kiosk.name = name;
        }

        if let Ok(url) = std::env::var("PRICECHECK_API_URL") {
            debug!(url = %url, "Overriding API URL from environment");
            self.api.base_url = url;
        }

        if let Some(secs) = env_u64("PRICECHECK_AUTO_RESET_SECS") {
            debug!(secs, "Overriding auto-reset delay from environment");
            self.display.auto_reset_secs = secs;
        }

        if let Some(secs) = env_u64("PRICECHECK_SLIDESHOW_SECS") {
            debug!(secs, "Overriding slideshow interval from environment");
            self.display.slideshow_interval_secs = secs;
        }

        if let Some(ms) = env_u64("PRICECHECK_SCANNER_GAP_MS") {
            debug!(ms, "Overriding scanner gap from environment");
            self.display.scanner_gap_ms = ms;
        }

        if let Ok(slides) = std::env::var("PRICECHECK_SLIDES") {
            self.slides.urls = parse_slide_list(&slides);
            debug!(count = self.slides.urls.len(), "Overriding slides from environment");
        }
    }

    /// Returns the default config file path.
    fn default_config_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("com", "pricecheck", "pricechecker")
            .map(|dirs| dirs.config_dir().join("kiosk.toml"))
    }

    // =========================================================================
    // Convenience Methods
    // =========================================================================

    /// Returns the kiosk ID.
    pub fn kiosk_id(&self) -> &str {
        &self.kiosk.id
    }

    pub fn auto_reset(&self) -> Duration {
        Duration::from_secs(self.display.auto_reset_secs)
    }

    pub fn slideshow_interval(&self) -> Duration {
        Duration::from_secs(self.display.slideshow_interval_secs)
    }

    pub fn scanner_gap(&self) -> Duration {
        Duration::from_millis(self.display.scanner_gap_ms)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.api.timeout_secs)
    }

    /// Image locations in the form the product view expects.
    pub fn image_locations(&self) -> ImageLocations {
        ImageLocations {
            product_base: self.images.product_base.clone(),
            default_image: self.images.default_image.clone(),
        }
    }
}

fn env_u64(key: &str) -> Option<u64> {
    let raw = std::env::var(key).ok()?;
    match raw.trim().parse::<u64>() {
        Ok(value) => Some(value),
        Err(_) => {
            warn!(key, value = %raw, "Ignoring non-numeric environment override");
            None
        }
    }
}

/// Splits a comma separated slide list, dropping blank entries.
fn parse_slide_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(String::from)
        .collect()
}
