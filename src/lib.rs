pub mod config;
pub mod game;
pub mod logger;

pub use game::{
    Difficulty, Direction, GameConfig, GameSession, InputEvent, SessionEvent, SessionPhase,
};
