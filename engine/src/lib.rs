//! Entente adjudication engine library.
//!
//! Exposes the board representation, order model, main-phase resolver,
//! game facade, and event-log plumbing for use by the chat-bot layer and
//! integration tests.

pub mod board;
pub mod engine;
pub mod events;
pub mod order;
pub mod resolve;
