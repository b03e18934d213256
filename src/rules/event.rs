//! What happened as the result of a command.
//!
//! Every accepted command returns the events it caused, in order. A single
//! `act` can produce a success, a wrap, the end of the day and the start of
//! the next one. `Display` gives the one-line description shown to players.

use serde::{Deserialize, Serialize};

use super::query::ScoreLine;
use super::wrap::Payout;
use crate::cards::RoleKind;
use crate::core::{Currency, PlayerId};

/// Pay for one successful act.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reward {
    pub currency: Currency,
    pub amount: u32,
}

impl Reward {
    /// Fixed pay per role kind: starring earns 2 credits, extra earns 1 dollar.
    #[must_use]
    pub const fn for_role(kind: RoleKind) -> Self {
        match kind {
            RoleKind::Starring => Self {
                currency: Currency::Credit,
                amount: 2,
            },
            RoleKind::Extra => Self {
                currency: Currency::Dollar,
                amount: 1,
            },
        }
    }
}

/// A state change produced by a command.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    Moved {
        player: PlayerId,
        to: String,
    },
    RoleTaken {
        player: PlayerId,
        role: String,
        kind: RoleKind,
        line: String,
    },
    ActSucceeded {
        player: PlayerId,
        roll: u8,
        bonus: u8,
        budget: u8,
        reward: Reward,
        takes_left: usize,
    },
    ActFailed {
        player: PlayerId,
        roll: u8,
        bonus: u8,
        budget: u8,
    },
    Rehearsed {
        player: PlayerId,
        bonus: u8,
    },
    Upgraded {
        player: PlayerId,
        from: u8,
        to: u8,
        currency: Currency,
        cost: u32,
    },
    TurnEnded {
        player: PlayerId,
        next: PlayerId,
    },
    /// The last shot counter at a set was removed.
    SceneWrapped {
        location: String,
        card: String,
        /// Bonus dice, highest first. Empty when nobody starred.
        dice: Vec<u8>,
        payouts: Vec<Payout>,
        released: Vec<PlayerId>,
    },
    DayEnded {
        day: u32,
        /// Players pulled off unfinished scenes without pay.
        released: Vec<PlayerId>,
    },
    DayStarted {
        day: u32,
        /// Number of sets that received a card.
        scenes: usize,
    },
    GameEnded {
        winner: Option<PlayerId>,
        scores: Vec<ScoreLine>,
    },
}

impl std::fmt::Display for GameEvent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameEvent::Moved { player, to } => write!(f, "{player} moves to {to}"),
            GameEvent::RoleTaken {
                player,
                role,
                kind,
                line,
            } => write!(f, "{player} takes the {kind} role {role}: \"{line}\""),
            GameEvent::ActSucceeded {
                player,
                roll,
                bonus,
                budget,
                reward,
                takes_left,
            } => write!(
                f,
                "{player} rolls {roll} (+{bonus}) against budget {budget}: success, earns {} {}(s), {takes_left} take(s) left",
                reward.amount, reward.currency
            ),
            GameEvent::ActFailed {
                player,
                roll,
                bonus,
                budget,
            } => write!(
                f,
                "{player} rolls {roll} (+{bonus}) against budget {budget}: failed"
            ),
            GameEvent::Rehearsed { player, bonus } => {
                write!(f, "{player} rehearses, bonus is now +{bonus}")
            }
            GameEvent::Upgraded {
                player,
                from,
                to,
                currency,
                cost,
            } => write!(
                f,
                "{player} upgrades from rank {from} to rank {to} for {cost} {currency}(s)"
            ),
            GameEvent::TurnEnded { player, next } => {
                write!(f, "{player} ends their turn, {next} is up")
            }
            GameEvent::SceneWrapped {
                location,
                card,
                payouts,
                ..
            } => {
                write!(f, "{card} wraps at {location}")?;
                for payout in payouts {
                    write!(f, "; {} receives ${}", payout.player, payout.dollars)?;
                }
                Ok(())
            }
            GameEvent::DayEnded { day, .. } => write!(f, "day {day} ends"),
            GameEvent::DayStarted { day, scenes } => {
                write!(f, "day {day} begins with {scenes} scene(s) dealt")
            }
            GameEvent::GameEnded { winner, .. } => match winner {
                Some(winner) => write!(f, "game over, {winner} wins"),
                None => write!(f, "game over"),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reward_for_role() {
        assert_eq!(
            Reward::for_role(RoleKind::Starring),
            Reward {
                currency: Currency::Credit,
                amount: 2
            }
        );
        assert_eq!(
            Reward::for_role(RoleKind::Extra),
            Reward {
                currency: Currency::Dollar,
                amount: 1
            }
        );
    }

    #[test]
    fn test_display() {
        let event = GameEvent::Moved {
            player: PlayerId::new(0),
            to: "Saloon".into(),
        };
        assert_eq!(event.to_string(), "Player 0 moves to Saloon");

        let event = GameEvent::SceneWrapped {
            location: "Bank".into(),
            card: "Ghost Town".into(),
            dice: vec![5, 3],
            payouts: vec![Payout {
                player: PlayerId::new(1),
                dollars: 8,
            }],
            released: vec![PlayerId::new(1)],
        };
        assert_eq!(
            event.to_string(),
            "Ghost Town wraps at Bank; Player 1 receives $8"
        );
    }
}
