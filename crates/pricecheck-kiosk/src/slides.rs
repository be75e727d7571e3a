//! # Slide Source
//!
//! Supplies the slideshow's image list once at startup.

use async_trait::async_trait;
use tracing::info;

use crate::config::KioskConfig;

/// Discovers the slides to rotate.
///
/// Always yields at least one slide.
#[async_trait]
pub trait SlideSource: Send + Sync {
    async fn discover(&self) -> Vec<String>;
}

/// Slides listed in the kiosk configuration.
#[derive(Debug, Clone)]
pub struct ConfiguredSlides {
    urls: Vec<String>,
    fallback: String,
}

impl ConfiguredSlides {
    pub fn new(urls: Vec<String>, fallback: impl Into<String>) -> Self {
        ConfiguredSlides {
            urls,
            fallback: fallback.into(),
        }
    }

    pub fn from_config(config: &KioskConfig) -> Self {
        Self::new(config.slides.urls.clone(), config.slides.fallback.clone())
    }
}

#[async_trait]
impl SlideSource for ConfiguredSlides {
    async fn discover(&self) -> Vec<String> {
        if self.urls.is_empty() {
            info!(fallback = %self.fallback, "No slides configured, using fallback");
            return vec![self.fallback.clone()];
        }
        info!(count = self.urls.len(), "Slides configured");
        self.urls.clone()
    }
}
