//! Structured event log over a chat channel.
//!
//! Every game action is serialised as a JSON `Envelope` and posted to the
//! channel; the channel's message history is the authoritative event log.
//! State is restored by replaying events from the last snapshot (see
//! `replay`). Messages that are not valid envelopes — ordinary chat — are
//! skipped when scanning.

pub mod replay;

pub use replay::{rebuild, ReplayError};

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

use crate::engine::ResolutionResult;

/// A failure from the channel collaborator, surfaced to whoever triggered
/// the I/O.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("transport: {0}")]
pub struct TransportError(pub String);

/// Platform-agnostic chat channel. Slack and Telegram adapters implement
/// this trait.
pub trait Channel {
    /// Appends a text message to the channel.
    fn post(&mut self, channel_id: &str, text: &str) -> Result<(), TransportError>;
    /// Returns all messages in the channel in chronological order.
    fn history(&self, channel_id: &str) -> Result<Vec<String>, TransportError>;
}

/// Event discriminator carried in every envelope.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventType {
    GameCreated,
    PlayerJoined,
    GameStarted,
    OrderSubmitted,
    PhaseResolved,
    PhaseSkipped,
    NmrRecorded,
    DrawProposed,
    DrawVoted,
    GameEnded,
}

/// One entry of the event log: a type tag and its JSON payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Envelope {
    #[serde(rename = "type")]
    pub event_type: EventType,
    pub payload: Value,
}

impl Envelope {
    /// Decodes the payload as the given event struct.
    pub fn payload_as<T: DeserializeOwned>(&self) -> Result<T, serde_json::Error> {
        serde_json::from_value(self.payload.clone())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GameCreated {
    pub variant: String,
    pub deadline_hours: u32,
    pub gm_user_id: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerJoined {
    pub user_id: String,
    pub nation: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameStarted {
    /// Snapshot of the freshly started game, as produced by `Game::dump`.
    pub initial_state: Value,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderSubmitted {
    pub user_id: String,
    pub nation: String,
    pub orders: Vec<String>,
    pub phase: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PhaseResolved {
    pub phase: String,
    /// Snapshot of the game after resolution.
    pub state_snapshot: Value,
    pub summary: Option<ResolutionResult>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PhaseSkipped {
    pub phase: String,
    pub reason: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NmrRecorded {
    pub nation: String,
    pub phase: String,
    pub auto_orders: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DrawProposed {
    pub proposer_nation: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DrawVoted {
    pub nation: String,
    pub accept: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameEnded {
    pub result: String,
    pub winner: Option<String>,
    pub final_state: Value,
}

/// Serialises `payload` as an envelope of the given type and posts it.
pub fn write<T: Serialize>(
    ch: &mut dyn Channel,
    channel_id: &str,
    event_type: EventType,
    payload: &T,
) -> Result<(), TransportError> {
    let payload = serde_json::to_value(payload)
        .map_err(|err| TransportError(format!("encode payload: {err}")))?;
    let envelope = Envelope {
        event_type,
        payload,
    };
    let text = serde_json::to_string(&envelope)
        .map_err(|err| TransportError(format!("encode envelope: {err}")))?;
    ch.post(channel_id, &text)
}

/// Reads the channel history and returns every message that parses as a
/// valid envelope, in chronological order. Plain chat text is skipped.
pub fn scan(ch: &dyn Channel, channel_id: &str) -> Result<Vec<Envelope>, TransportError> {
    let messages = ch.history(channel_id)?;
    Ok(messages
        .iter()
        .filter_map(|msg| serde_json::from_str::<Envelope>(msg).ok())
        .collect())
}
