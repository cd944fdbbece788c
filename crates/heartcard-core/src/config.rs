//! Card configuration.
//!
//! All copy shown on the card plus window settings. Every field has a
//! default, so a config file only needs the values it overrides:
//!
//! ```json
//! {
//!   "copy": { "heading": ["Happy birthday", "my love!"] },
//!   "seed": 42
//! }
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{CardError, Result};

/// Text shown on the card
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CardCopy {
    /// Line under the closed heart
    pub caption: String,
    /// Heading lines of the message card
    pub heading: Vec<String>,
    /// Body paragraphs of the message card
    pub body: Vec<String>,
    /// Label of the close button
    pub close_label: String,
}

impl Default for CardCopy {
    fn default() -> Self {
        Self {
            caption: "Chạm vào trái tim này nhé...".to_string(),
            heading: vec!["Chúc mừng 8/3".to_string(), "Em Yêu!".to_string()],
            body: vec![
                "Nhân ngày Quốc tế Phụ nữ, chúc cô gái của anh luôn xinh đẹp, rạng rỡ và hạnh phúc."
                    .to_string(),
                "Cảm ơn em đã luôn ở bên cạnh anh. Yêu em nhiều lắm! ❤️".to_string(),
            ],
            close_label: "Đóng lại".to_string(),
        }
    }
}

/// Desktop window settings
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub title: String,
    pub width: f64,
    pub height: f64,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "Chúc mừng 8/3".to_string(),
            width: 700.0,
            height: 900.0,
        }
    }
}

/// Top-level configuration
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CardConfig {
    pub window: WindowConfig,
    pub copy: CardCopy,
    /// Seed for the floating hearts; random when absent
    pub seed: Option<u64>,
}

impl CardConfig {
    /// Load and validate a JSON config file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|source| CardError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_json(&raw)?;
        tracing::info!("Loaded card config from {:?}", path);
        Ok(config)
    }

    /// Parse and validate a JSON config string
    pub fn from_json(raw: &str) -> Result<Self> {
        let config: CardConfig = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.copy.heading.iter().all(|line| line.trim().is_empty()) {
            return Err(CardError::InvalidConfig("heading is empty".into()));
        }
        if self.copy.close_label.trim().is_empty() {
            return Err(CardError::InvalidConfig("close label is empty".into()));
        }
        if !(self.window.width > 0.0 && self.window.height > 0.0) {
            return Err(CardError::InvalidConfig(format!(
                "window size must be positive, got {}x{}",
                self.window.width, self.window.height
            )));
        }
        Ok(())
    }
}
