//! Snapshot codec for game state.
//!
//! Serialises the full `Game` as JSON. Field order is fixed and maps are
//! ordered, so dumping, loading, and dumping again yields byte-identical
//! output — the event log relies on this when embedding snapshots.

use thiserror::Error;

use super::Game;

/// A snapshot failed to encode or decode.
#[derive(Debug, Error)]
#[error("snapshot codec: {0}")]
pub struct SnapshotError(#[from] serde_json::Error);

impl Game {
    /// Serialises the complete game state.
    pub fn dump(&self) -> Result<Vec<u8>, SnapshotError> {
        Ok(serde_json::to_vec(self)?)
    }

    /// Restores a game from a snapshot produced by `dump`.
    pub fn load(bytes: &[u8]) -> Result<Game, SnapshotError> {
        Ok(serde_json::from_slice(bytes)?)
    }
}
