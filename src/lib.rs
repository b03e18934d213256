//! # rust-deadwood
//!
//! Turn and day engine for the Deadwood board game: players move between
//! filming locations, take roles, act and rehearse, buy ranks, and get paid
//! when scenes wrap.
//!
//! ## Design Principles
//!
//! 1. **Arena + Index**: locations, roles and cards live in owning tables and
//!    refer to each other by small copyable ids. No reference cycles.
//!
//! 2. **Validate, then mutate**: every command either applies completely or is
//!    rejected with a `Rejection` and leaves the session untouched.
//!
//! 3. **Deterministic**: all randomness flows through one `Dice` owned by the
//!    session. Same seed, same game.
//!
//! ## Modules
//!
//! - `core`: players, dice, configuration, commands, errors
//! - `board`: the location graph and the shooting state of sets
//! - `cards`: scene cards and the role arena
//! - `data`: serde schema for boards and decks, and its validation
//! - `rules`: the session, scene wrap, day transitions, queries, events
//! - `games`: the standard board and a starter deck
//! - `testing`: scripted dice and a fixture board
//!
//! ## Example
//!
//! ```
//! use rust_deadwood::{DeadwoodBuilder, Rejection};
//!
//! let mut session = DeadwoodBuilder::new().player_count(3).seed(1).build().unwrap();
//! assert_eq!(session.day(), 1);
//!
//! session.move_to("Main Street").unwrap();
//! assert_eq!(session.move_to("Saloon"), Err(Rejection::AlreadyMoved));
//! session.end_turn().unwrap();
//! assert_eq!(session.active_player().name, "cyan");
//! ```

pub mod board;
pub mod cards;
pub mod core;
pub mod data;
pub mod games;
pub mod rules;
pub mod testing;

// Re-export commonly used types
pub use crate::core::{
    Command, CommandError, CommandRecord, ConfigError, Currency, Dice, GameRng, GameRngState,
    Player, PlayerId, PlayerMap, Rejection, SessionConfig, TurnFlags,
};

pub use crate::board::{Board, Location, LocationId, LocationKind};

pub use crate::cards::{CardId, CardRegistry, Role, RoleId, RoleKind, RoleTable, SceneCard};

pub use crate::data::{BoardData, CardData};

pub use crate::rules::{
    distribute_payout, CommandResult, GameEvent, LocationStatus, Payout, Phase, PlayerSnapshot,
    PlayerSummary, ScoreLine, Session,
};

pub use crate::games::deadwood::DeadwoodBuilder;
