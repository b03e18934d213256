//! The location graph.
//!
//! Locations are stored in one arena on the `Board` and refer to each other
//! by `LocationId`, so edges never form ownership cycles.

pub mod location;
pub mod manager;

pub use location::{Location, LocationId, LocationKind, SetState, Take, Upgrade};
pub use manager::Board;
