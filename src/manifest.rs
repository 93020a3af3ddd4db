use indexmap::IndexMap;
use serde::Deserialize;
use std::path::Path;
use thiserror::Error;

/// A single icon entry from the manifest
#[derive(Debug, Clone, Deserialize)]
pub struct IconRecord {
    /// Hexadecimal codepoint string without prefix (e.g., "f0f4")
    pub unicode: String,
    /// Style variants this icon is available in; absent means none
    #[serde(default)]
    pub styles: Vec<String>,
}

/// Icon name -> record, in document order
pub type Manifest = IndexMap<String, IconRecord>;

#[derive(Debug, Error)]
pub enum ManifestError {
    #[error("failed to read manifest: {0}")]
    Read(#[from] std::io::Error),
    #[error("failed to parse manifest: {0}")]
    Parse(#[from] serde_yaml::Error),
}

/// Load and parse the icon manifest.
///
/// The file is read in full before parsing. A record missing its `unicode`
/// field fails the whole load rather than being skipped.
pub fn load_manifest(path: &Path) -> Result<Manifest, ManifestError> {
    let contents = std::fs::read_to_string(path)?;
    let manifest = serde_yaml::from_str(&contents)?;
    Ok(manifest)
}
