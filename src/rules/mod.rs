//! Game rules: the session and the commands it accepts.
//!
//! - `engine`: `Session`, command validation and application
//! - `wrap`: scene wrap and the bonus payout
//! - `day`: day start, day end and game over
//! - `query`: read-only snapshots
//! - `event`: what each accepted command reports back

pub mod day;
pub mod engine;
pub mod event;
pub mod query;
pub mod wrap;

pub use engine::{CommandResult, Phase, Session};
pub use event::{GameEvent, Reward};
pub use query::{
    LocationStatus, PlayerSnapshot, PlayerSummary, RoleListing, RoleView, ScoreLine,
    UpgradeListing,
};
pub use wrap::{distribute_payout, Payout};
