//! Static game data: the serde schema and the builders that validate it.

pub mod loader;
pub mod schema;

pub use loader::{build_board, build_deck};
pub use schema::{BoardData, CardData, LocationData, RoleData, UpgradeData};
