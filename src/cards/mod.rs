//! Scene cards and roles.
//!
//! - `CardId`, `SceneCard`: static card data
//! - `RoleId`, `Role`, `RoleTable`: every role in the game and who works it
//! - `CardRegistry`: the deck's cards by id

pub mod definition;
pub mod registry;
pub mod role;

pub use definition::{CardId, SceneCard};
pub use registry::CardRegistry;
pub use role::{Role, RoleId, RoleKind, RoleTable};
