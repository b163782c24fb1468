mod food;
mod geometry;
mod runner;
mod session;
mod session_rng;
mod settings;
mod snake;
mod types;

pub use food::Food;
pub use geometry::{Bounds, GridGeometry, SpawnArea, MIN_WINDOW_HEIGHT, MIN_WINDOW_WIDTH};
pub use runner::{GameBroadcaster, SessionRunner};
pub use session::{GameSession, InputEvent, SessionEvent, SessionPhase, SessionSnapshot};
pub use session_rng::SessionRng;
pub use settings::{DifficultySettings, GameConfig};
pub use snake::Snake;
pub use types::{
    AdvanceResult, DeathReason, Difficulty, Direction, PixelRect, Point, WallCollisionMode,
};
