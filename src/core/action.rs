//! Commands a player can issue on their turn.
//!
//! A `Command` is the verb plus its argument. The session validates it
//! against the active player and either applies it or rejects it; either
//! way a `CommandRecord` is appended to the session history.

use serde::{Deserialize, Serialize};

use super::player::{Currency, PlayerId};

/// A single player command.
///
/// ## Example
///
/// ```
/// use rust_deadwood::core::{Command, Currency};
///
/// let go = Command::Move { target: "Saloon".into() };
/// let buy = Command::Upgrade { level: 3, currency: Currency::Credit };
/// assert_eq!(go.verb(), "move");
/// assert_eq!(buy.verb(), "upgrade");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Command {
    /// Walk to an adjacent location.
    Move { target: String },
    /// Take a role at the current set.
    Work { role: String },
    /// Roll for the current role.
    Act,
    /// Add one to the rehearsal bonus.
    Rehearse,
    /// Buy a rank at the casting office.
    Upgrade { level: u8, currency: Currency },
    /// Pass to the next player.
    End,
    /// Stop the game now and score it.
    Quit,
}

impl Command {
    /// Short lowercase name of the command.
    #[must_use]
    pub fn verb(&self) -> &'static str {
        match self {
            Command::Move { .. } => "move",
            Command::Work { .. } => "work",
            Command::Act => "act",
            Command::Rehearse => "rehearse",
            Command::Upgrade { .. } => "upgrade",
            Command::End => "end",
            Command::Quit => "quit",
        }
    }
}

impl std::fmt::Display for Command {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Command::Move { target } => write!(f, "move {target}"),
            Command::Work { role } => write!(f, "work {role}"),
            Command::Upgrade { level, currency } => write!(f, "upgrade {level} {currency}"),
            other => write!(f, "{}", other.verb()),
        }
    }
}

/// A command as it was issued, with context.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommandRecord {
    /// Who issued it.
    pub player: PlayerId,
    /// The command itself.
    pub command: Command,
    /// Day it was issued on (1-based).
    pub day: u32,
    /// Session-wide turn counter when it was issued.
    pub turn: u32,
    /// Whether the command was applied.
    pub accepted: bool,
}
