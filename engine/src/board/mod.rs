//! Board representation and position tracking.
//!
//! Contains the core data structures for territories, army adjacency,
//! units, and the per-phase position store consumed by the resolver.

pub mod graph;
pub mod store;
pub mod territory;
pub mod unit;

pub use graph::{classical_graph, ArmyGraph};
pub use store::PositionStore;
pub use territory::{Territory, TERRITORY_COUNT};
pub use unit::{Cause, Position, UnitId, UnitType};
