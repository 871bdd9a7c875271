//! Command interpreter
//!
//! Input line -> `Command` -> `Session::execute` -> `Vec<GameEvent>`

pub mod events;
pub mod parser;
pub mod session;

pub use events::{ChestView, GameEvent, GameState, MonsterView, PlayerView, RoomView};
pub use parser::Command;
pub use session::Session;
