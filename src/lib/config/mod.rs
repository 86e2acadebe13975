use std::{fs, path::Path};

use color_eyre::Section;
use serde::Deserialize;

/// Word limit applied to descriptions unless a hook overrides it.
pub const DEFAULT_DESCRIPTION_WORDS: usize = 25;
/// Marker appended when a description is truncated.
pub const ELLIPSIS: &str = "...";

/// Fixed rendition size requested from the media library.
pub const THUMBNAIL_RENDITION: &str = "thumbnail";
/// Host-side type name for media-attachment items.
pub const ATTACHMENT_TYPE: &str = "attachment";

/// Site-wide values consumed during resolution.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Eq)]
pub struct SiteInfo {
    /// Site tagline, used as the description for home and blog views.
    #[serde(default)]
    pub tagline: String,
    /// Fallback image URL, the terminal step of the image chain.
    #[serde(default)]
    pub default_image: String,
}

impl SiteInfo {
    pub fn from_toml_str(raw: &str) -> color_eyre::Result<Self> {
        Ok(toml::from_str(raw)?)
    }

    pub fn load(path: &Path) -> color_eyre::Result<Self> {
        let raw = fs::read_to_string(path)
            .with_note(|| format!("While reading site config at {}", path.display()))?;
        Self::from_toml_str(&raw)
    }
}
