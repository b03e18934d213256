//! Error types.
//!
//! Three tiers:
//! - `ConfigError`: setup failed, no session exists.
//! - `Rejection`: a command broke a rule. State is untouched and the player
//!   may try something else.
//! - `CommandError`: the input itself could not be understood.

use thiserror::Error;

use super::player::Currency;

/// Fatal setup error. Returned before any session is created.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("player count must be between 2 and 8, got {0}")]
    InvalidPlayerCount(usize),

    #[error("malformed game data: {0}")]
    Json(#[from] serde_json::Error),

    #[error("location {0:?} is defined more than once")]
    DuplicateLocation(String),

    #[error("location {location:?} lists unknown neighbor {neighbor:?}")]
    UnknownNeighbor { location: String, neighbor: String },

    #[error("location {0:?} lists itself as a neighbor")]
    SelfNeighbor(String),

    #[error("board needs exactly one rest location, found {0}")]
    RestCount(usize),

    #[error("board needs exactly one office, found {0}")]
    OfficeCount(usize),

    #[error("board has no shooting locations")]
    NoSets,

    #[error("set {0:?} has no shot counters")]
    NoTakes(String),

    #[error("location {0:?} cannot be reached from the rest of the board")]
    Disconnected(String),

    #[error("role {role:?} requires rank {level}, ranks run 1-6")]
    InvalidRoleLevel { role: String, level: u8 },

    #[error("card {card:?} has budget {budget}, budgets run 1-6")]
    InvalidBudget { card: String, budget: u8 },

    #[error("upgrade to rank {0} is out of range 2-6")]
    InvalidUpgradeLevel(u8),

    #[error("deck has no scene cards")]
    EmptyDeck,
}

/// A command broke a rule of the game. Nothing changed.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum Rejection {
    #[error("the game is over")]
    GameOver,

    #[error("cannot do that while working a role")]
    OccupyingRole,

    #[error("already moved this turn")]
    AlreadyMoved,

    #[error("{0:?} is not adjacent to the current location")]
    NotAdjacent(String),

    #[error("already working a role")]
    AlreadyWorking,

    #[error("already took a role this turn")]
    AlreadyTookRole,

    #[error("roles can only be taken on a filming set")]
    NotOnSet,

    #[error("the scene here has already wrapped")]
    SceneWrapped,

    #[error("role {0:?} is not available here")]
    RoleUnavailable(String),

    #[error("rank {rank} is too low, the role requires {required}")]
    RankTooLow { rank: u8, required: u8 },

    #[error("not working a role")]
    NotWorking,

    #[error("already acted this turn")]
    AlreadyActed,

    #[error("already rehearsed this turn")]
    AlreadyRehearsed,

    #[error("rehearsal bonus {bonus} is already the maximum for budget {budget}")]
    RehearsalCapped { bonus: u8, budget: u8 },

    #[error("upgrades are only sold at the casting office")]
    NotAtOffice,

    #[error("rank {0} is out of range 2-6")]
    RankOutOfRange(u8),

    #[error("rank {requested} is not above current rank {current}")]
    RankNotHigher { current: u8, requested: u8 },

    #[error("no upgrade to rank {level} is sold for {currency}s")]
    NoSuchUpgrade { level: u8, currency: Currency },

    #[error("not enough {currency}s: need {needed}, have {have}")]
    InsufficientFunds {
        currency: Currency,
        needed: u32,
        have: u32,
    },
}

/// Input that cannot be turned into a command at all.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum CommandError {
    #[error("unknown currency {0:?}, use dollar or credit")]
    UnknownCurrency(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejection_messages() {
        let err = Rejection::RankTooLow {
            rank: 1,
            required: 2,
        };
        assert_eq!(err.to_string(), "rank 1 is too low, the role requires 2");

        let err = Rejection::InsufficientFunds {
            currency: Currency::Credit,
            needed: 10,
            have: 4,
        };
        assert_eq!(err.to_string(), "not enough credits: need 10, have 4");
    }

    #[test]
    fn test_config_error_from_json() {
        let json_err = serde_json::from_str::<u32>("not json").unwrap_err();
        let err: ConfigError = json_err.into();
        assert!(matches!(err, ConfigError::Json(_)));
    }
}
