//! State restoration from the event log.
//!
//! Rebuilding finds the most recent snapshot event (GameStarted or
//! PhaseResolved), restores the game from it, then replays every
//! OrderSubmitted event posted after that snapshot.

use thiserror::Error;
use tracing::warn;

use crate::engine::{Game, SnapshotError};
use crate::order::ParseError;

use super::{scan, Channel, EventType, GameStarted, OrderSubmitted, PhaseResolved, TransportError};

/// A failure while rebuilding game state from the channel history.
#[derive(Debug, Error)]
pub enum ReplayError {
    #[error(transparent)]
    Transport(#[from] TransportError),
    #[error("no snapshot found in channel {0}")]
    NoSnapshot(String),
    #[error("load snapshot: {0}")]
    Snapshot(#[from] SnapshotError),
    #[error("replay order {order:?} for {nation}: {source}")]
    Order {
        nation: String,
        order: String,
        source: ParseError,
    },
}

/// Reconstructs the current game state from the channel's event log.
pub fn rebuild(ch: &dyn Channel, channel_id: &str) -> Result<Game, ReplayError> {
    let envelopes = scan(ch, channel_id)?;

    // Locate the last snapshot event. Envelopes with undecodable payloads
    // are skipped, matching scan's tolerance for foreign messages.
    let mut snapshot: Option<(usize, Vec<u8>)> = None;
    for (i, env) in envelopes.iter().enumerate() {
        let bytes = match env.event_type {
            EventType::GameStarted => env
                .payload_as::<GameStarted>()
                .ok()
                .map(|gs| gs.initial_state),
            EventType::PhaseResolved => env
                .payload_as::<PhaseResolved>()
                .ok()
                .map(|pr| pr.state_snapshot),
            _ => None,
        };
        if let Some(value) = bytes {
            match serde_json::to_vec(&value) {
                Ok(raw) => snapshot = Some((i, raw)),
                Err(err) => warn!(%err, "unreadable snapshot payload skipped"),
            }
        }
    }

    let (snapshot_idx, raw) =
        snapshot.ok_or_else(|| ReplayError::NoSnapshot(channel_id.to_string()))?;
    let mut game = Game::load(&raw)?;

    for env in &envelopes[snapshot_idx + 1..] {
        if env.event_type != EventType::OrderSubmitted {
            continue;
        }
        let Ok(submitted) = env.payload_as::<OrderSubmitted>() else {
            warn!("malformed OrderSubmitted payload skipped");
            continue;
        };
        for order in &submitted.orders {
            game.submit_order(&submitted.nation, order)
                .map_err(|source| ReplayError::Order {
                    nation: submitted.nation.clone(),
                    order: order.clone(),
                    source,
                })?;
        }
    }

    Ok(game)
}
