//! Core engine types: players, dice, configuration, commands, errors.
//!
//! Everything here is independent of the board layout and the card deck.

pub mod action;
pub mod config;
pub mod error;
pub mod player;
pub mod rng;

pub use action::{Command, CommandRecord};
pub use config::{SessionConfig, MAX_PLAYERS, MIN_PLAYERS, PLAYER_COLORS};
pub use error::{CommandError, ConfigError, Rejection};
pub use player::{Currency, Player, PlayerId, PlayerMap, TurnFlags, MAX_RANK, MIN_RANK};
pub use rng::{Dice, GameRng, GameRngState, DIE_FACES};
