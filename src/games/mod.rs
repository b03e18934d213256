//! Playable game content.
//!
//! - `deadwood`: the standard board and a starter deck

pub mod deadwood;
