//! Territory war: the classic eight-territory conquest game.
//!
//! - A fixed table of territories held by the player, enemy colours and
//!   the neutral pool
//! - On your turn: attack a hostile territory from one of yours, or check
//!   your mission
//! - The game ends when the mission is met, when no attack is left, or
//!   when the player leaves
//!
//! The territory table, faction labels and mission set all come from
//! `GameConfig`.

mod game;

pub use game::{WarGame, WarGameBuilder};
