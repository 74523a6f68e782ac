use std::fs;
use std::path::{Path, PathBuf};

use offerdesk_shared::{Offer, Tier};
use serde::Deserialize;

/// Offers and tiers as already fetched from the members store.
///
/// `tiers` stays `None` when the document carries no tier list, which the
/// listing treats as "every tier unresolved".
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Snapshot {
    #[serde(default)]
    pub offers: Vec<Offer>,
    #[serde(default)]
    pub tiers: Option<Vec<Tier>>,
}

impl Snapshot {
    pub fn from_json(raw: &str) -> Result<Self, SnapshotError> {
        Ok(serde_json::from_str(raw)?)
    }

    pub fn load(path: &Path) -> Result<Self, SnapshotError> {
        let raw = fs::read_to_string(path).map_err(|source| SnapshotError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let snapshot = Self::from_json(&raw)?;
        tracing::info!(
            "Loaded {} offers and {} tiers from {}",
            snapshot.offers.len(),
            snapshot.tiers.as_ref().map_or(0, Vec::len),
            path.display()
        );
        Ok(snapshot)
    }

    pub fn tiers(&self) -> Option<&[Tier]> {
        self.tiers.as_deref()
    }
}

#[derive(Debug, thiserror::Error)]
pub enum SnapshotError {
    #[error("Failed to read snapshot {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Invalid snapshot: {0}")]
    Parse(#[from] serde_json::Error),
}
