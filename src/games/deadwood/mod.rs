//! The standard Deadwood board and a starter deck.
//!
//! Ten sets, the trailer and the casting office with the usual rank prices.
//! Both are embedded JSON in the `data` schema, so they go through the same
//! validation as any custom board.

mod builder;

pub use builder::{standard_board, standard_deck, DeadwoodBuilder, BOARD_JSON, CARDS_JSON};
