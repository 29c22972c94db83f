use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::error::BuildError;
use crate::specs::MANIFEST_NAME;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ManifestIcon {
    pub src: String,
    pub sizes: String,
    #[serde(rename = "type")]
    pub mime_type: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub purpose: Option<String>,
}

/// The web app manifest describing the installable identity of the app.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WebManifest {
    pub name: String,
    pub short_name: String,
    pub description: String,
    pub start_url: String,
    pub display: String,
    pub background_color: String,
    pub theme_color: String,
    pub icons: Vec<ManifestIcon>,
}

impl WebManifest {
    /// The fixed Madizi manifest: four icon entries referencing the generated
    /// app and maskable PNGs by root-relative path.
    pub fn madizi() -> Self {
        let icon = |src: &str, sizes: &str, purpose: Option<&str>| ManifestIcon {
            src: src.to_string(),
            sizes: sizes.to_string(),
            mime_type: "image/png".to_string(),
            purpose: purpose.map(str::to_string),
        };

        WebManifest {
            name: "Madizi".to_string(),
            short_name: "Madizi".to_string(),
            description: "Plateforme d'annonces de décès – familles et professionnels."
                .to_string(),
            start_url: "/".to_string(),
            display: "standalone".to_string(),
            background_color: "#0b0d1a".to_string(),
            theme_color: "#0b0d1a".to_string(),
            icons: vec![
                icon("/icon-192x192.png", "192x192", None),
                icon("/icon-512x512.png", "512x512", None),
                icon("/maskable-icon-192x192.png", "192x192", Some("maskable")),
                icon("/maskable-icon-512x512.png", "512x512", Some("maskable")),
            ],
        }
    }

    /// Pretty-print as JSON (2-space indent, non-ASCII kept literal).
    pub fn save(&self, path: &Path) -> Result<(), BuildError> {
        let err = |e: String| BuildError::ManifestFailed {
            path: path.display().to_string(),
            reason: e,
        };
        let content = serde_json::to_string_pretty(self).map_err(|e| err(e.to_string()))?;
        fs::write(path, content).map_err(|e| err(e.to_string()))
    }
}

/// Write `manifest.webmanifest` into the output directory.
pub fn write_manifest(out_dir: &Path) -> Result<(), BuildError> {
    WebManifest::madizi().save(&out_dir.join(MANIFEST_NAME))
}
