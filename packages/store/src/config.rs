//! # App configuration: `idcards.toml`
//!
//! Defines the optional TOML file read by the desktop app from its data
//! directory (filename: [`CardsConfig::filename`] = `"idcards.toml"`). The web
//! app always runs with [`CardsConfig::default`].
//!
//! ## Structure
//!
//! ```toml
//! [storage]
//! key = "savedCards"          # storage entry holding the card sequence
//!
//! [qr]
//! size = 128                  # rendered QR edge length in pixels
//!
//! [export]
//! preview_filename = "student-id-card.png"
//! scale = 2.0                 # raster pixels per card unit
//! ```
//!
//! ## Types
//!
//! | Struct | Purpose |
//! |--------|---------|
//! | [`CardsConfig`] | Top-level config with TOML (de)serialisation and the canonical filename. |
//! | [`StorageConfig`] | Name of the durable storage entry. |
//! | [`QrConfig`] | QR symbol size. The error-correction level is always low. |
//! | [`ExportConfig`] | File name for the live preview download and raster scale. |
//!
//! Every section defaults when missing, so an empty file equals the defaults.

use serde::{Deserialize, Serialize};

/// Top-level configuration stored in `idcards.toml`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct CardsConfig {
    #[serde(default)]
    pub storage: StorageConfig,
    #[serde(default)]
    pub qr: QrConfig,
    #[serde(default)]
    pub export: ExportConfig,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StorageConfig {
    #[serde(default = "default_storage_key")]
    pub key: String,
}

fn default_storage_key() -> String {
    "savedCards".to_string()
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            key: default_storage_key(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct QrConfig {
    /// Edge length of the QR symbol in pixels.
    #[serde(default = "default_qr_size")]
    pub size: u32,
}

fn default_qr_size() -> u32 {
    128
}

impl Default for QrConfig {
    fn default() -> Self {
        Self {
            size: default_qr_size(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ExportConfig {
    /// Download name used for the live preview.
    #[serde(default = "default_preview_filename")]
    pub preview_filename: String,
    /// Raster pixels per card unit.
    #[serde(default = "default_scale")]
    pub scale: f32,
}

fn default_preview_filename() -> String {
    "student-id-card.png".to_string()
}

fn default_scale() -> f32 {
    2.0
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            preview_filename: default_preview_filename(),
            scale: default_scale(),
        }
    }
}

impl CardsConfig {
    /// The well-known filename for the config file.
    pub fn filename() -> &'static str {
        "idcards.toml"
    }

    /// Parse from TOML string.
    pub fn from_toml(s: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(s)
    }

    /// Serialize to TOML string.
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_file_is_default() {
        let config = CardsConfig::from_toml("").unwrap();
        assert_eq!(config, CardsConfig::default());
        assert_eq!(config.storage.key, "savedCards");
        assert_eq!(config.qr.size, 128);
        assert_eq!(config.export.preview_filename, "student-id-card.png");
    }

    #[test]
    fn test_partial_sections_keep_other_defaults() {
        let config = CardsConfig::from_toml("[qr]\nsize = 200\n\n[export]\nscale = 3.0\n").unwrap();
        assert_eq!(config.qr.size, 200);
        assert_eq!(config.export.scale, 3.0);
        assert_eq!(config.export.preview_filename, "student-id-card.png");
        assert_eq!(config.storage.key, "savedCards");
    }

    #[test]
    fn test_toml_written_reads_back() {
        let mut config = CardsConfig::default();
        config.storage.key = "cards-2024".to_string();
        let text = config.to_toml().unwrap();
        assert!(text.contains("cards-2024"));
        assert_eq!(CardsConfig::from_toml(&text).unwrap(), config);
    }
}
