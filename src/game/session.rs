use std::time::Duration;

use serde::Serialize;

use crate::log;

use super::food::Food;
use super::geometry::GridGeometry;
use super::session_rng::SessionRng;
use super::settings::GameConfig;
use super::snake::Snake;
use super::types::{AdvanceResult, DeathReason, Difficulty, Direction, Point};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum SessionPhase {
    Menu,
    Running,
    Paused,
    GameOver,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InputEvent {
    Direction(Direction),
    PauseToggle,
    SelectDifficulty(Difficulty),
    Restart,
    ReturnToMenu,
    Resize { width: i32, height: i32 },
    Quit,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionEvent {
    ScoreChanged { score: u32 },
    GameOver { final_score: u32, reason: DeathReason },
}

// Read-only view handed to the renderer after every tick.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct SessionSnapshot {
    pub phase: SessionPhase,
    pub tick: u64,
    pub difficulty: Option<Difficulty>,
    pub score: u32,
    pub head: Option<Point>,
    pub snake_body: Vec<Point>,
    pub food: Option<Point>,
}

struct ActiveGame {
    difficulty: Difficulty,
    snake: Snake,
    food: Food,
}

pub struct GameSession {
    config: GameConfig,
    geometry: GridGeometry,
    rng: SessionRng,
    phase: SessionPhase,
    game: Option<ActiveGame>,
    tick: u64,
    quit_requested: bool,
}

impl GameSession {
    pub fn new(config: GameConfig, seed: u64) -> Self {
        let geometry = GridGeometry::from_config(&config);
        log!("session created with seed {}", seed);

        Self {
            config,
            geometry,
            rng: SessionRng::new(seed),
            phase: SessionPhase::Menu,
            game: None,
            tick: 0,
            quit_requested: false,
        }
    }

    pub fn phase(&self) -> SessionPhase {
        self.phase
    }

    pub fn geometry(&self) -> &GridGeometry {
        &self.geometry
    }

    pub fn difficulty(&self) -> Option<Difficulty> {
        self.game.as_ref().map(|game| game.difficulty)
    }

    pub fn score(&self) -> u32 {
        self.game.as_ref().map_or(0, |game| game.snake.score())
    }

    pub fn quit_requested(&self) -> bool {
        self.quit_requested
    }

    // The tick rate belongs to the active difficulty; there is none to
    // report while the session sits in the menu.
    pub fn tick_interval(&self) -> Option<Duration> {
        self.game.as_ref().map(|game| {
            self.config
                .difficulty_settings(game.difficulty)
                .tick_interval()
        })
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        let game = self.game.as_ref();
        SessionSnapshot {
            phase: self.phase,
            tick: self.tick,
            difficulty: game.map(|g| g.difficulty),
            score: game.map_or(0, |g| g.snake.score()),
            head: game.map(|g| g.snake.head()),
            snake_body: game.map_or_else(Vec::new, |g| g.snake.body().iter().copied().collect()),
            food: game.map(|g| g.food.position()),
        }
    }

    // Every input is either applied or silently ignored; nothing here can
    // fail. Inputs arrive between ticks only, so geometry swaps and
    // direction changes never land mid-step.
    pub fn handle_input(&mut self, event: InputEvent) {
        match event {
            InputEvent::Direction(direction) => {
                if self.phase == SessionPhase::Running
                    && let Some(game) = self.game.as_mut()
                {
                    game.snake.set_direction(direction);
                }
            }
            InputEvent::PauseToggle => match self.phase {
                SessionPhase::Running => self.phase = SessionPhase::Paused,
                SessionPhase::Paused => self.phase = SessionPhase::Running,
                SessionPhase::Menu | SessionPhase::GameOver => {}
            },
            InputEvent::SelectDifficulty(difficulty) => {
                if self.phase == SessionPhase::Menu {
                    self.start_game(difficulty);
                }
            }
            InputEvent::Restart => {
                if self.phase == SessionPhase::GameOver
                    && let Some(game) = self.game.as_mut()
                {
                    game.snake.reset(&self.geometry, game.difficulty);
                    game.food
                        .randomize(&self.geometry, game.difficulty, &mut self.rng);
                    self.phase = SessionPhase::Running;
                    log!("game restarted: {:?}", game.difficulty);
                }
            }
            InputEvent::ReturnToMenu => {
                if matches!(self.phase, SessionPhase::Paused | SessionPhase::GameOver) {
                    self.game = None;
                    self.phase = SessionPhase::Menu;
                }
            }
            InputEvent::Resize { width, height } => {
                self.geometry = self.geometry.resized(width, height);
            }
            InputEvent::Quit => {
                self.quit_requested = true;
            }
        }
    }

    pub fn tick(&mut self) -> Vec<SessionEvent> {
        if self.phase != SessionPhase::Running {
            return Vec::new();
        }
        let Some(game) = self.game.as_mut() else {
            return Vec::new();
        };

        self.tick += 1;
        let mut events = Vec::new();

        match game.snake.advance(&self.geometry, game.difficulty) {
            AdvanceResult::Collided(reason) => {
                self.phase = SessionPhase::GameOver;
                log!(
                    "game over ({:?}) after {} ticks, final score {}",
                    reason,
                    self.tick,
                    game.snake.score()
                );
                events.push(SessionEvent::GameOver {
                    final_score: game.snake.score(),
                    reason,
                });
            }
            AdvanceResult::Continued => {
                let head_rect = self
                    .geometry
                    .sprite_rect(game.snake.head(), self.config.snake_sprite_size);
                let food_rect = game
                    .food
                    .collision_rect(&self.geometry, self.config.food_sprite_size);

                if head_rect.intersects(&food_rect) {
                    let reward = self.config.difficulty_settings(game.difficulty).food_reward;
                    game.snake.grow(reward);
                    game.food
                        .randomize(&self.geometry, game.difficulty, &mut self.rng);
                    log!(
                        "food eaten at ({}, {}), score {}",
                        game.snake.head().x,
                        game.snake.head().y,
                        game.snake.score()
                    );
                    events.push(SessionEvent::ScoreChanged {
                        score: game.snake.score(),
                    });
                }
            }
        }

        events
    }

    fn start_game(&mut self, difficulty: Difficulty) {
        let snake = Snake::new(&self.geometry, difficulty);
        let food = Food::spawn(&self.geometry, difficulty, &mut self.rng);
        self.game = Some(ActiveGame {
            difficulty,
            snake,
            food,
        });
        self.phase = SessionPhase::Running;
        log!("game started: {:?}", difficulty);
    }

    #[cfg(test)]
    fn place_food(&mut self, position: Point) {
        self.game
            .as_mut()
            .expect("no active game")
            .food
            .place_at(position);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn running_session(difficulty: Difficulty) -> GameSession {
        let mut session = GameSession::new(GameConfig::default(), 7);
        session.handle_input(InputEvent::SelectDifficulty(difficulty));
        session
    }

    #[test]
    fn test_session_starts_in_menu() {
        let mut session = GameSession::new(GameConfig::default(), 7);
        assert_eq!(session.phase(), SessionPhase::Menu);
        assert_eq!(session.difficulty(), None);
        assert!(session.tick().is_empty());
        assert!(session.snapshot().snake_body.is_empty());
    }

    #[test]
    fn test_select_difficulty_starts_a_fresh_game() {
        let session = running_session(Difficulty::Medium);
        assert_eq!(session.phase(), SessionPhase::Running);
        assert_eq!(session.difficulty(), Some(Difficulty::Medium));

        let snapshot = session.snapshot();
        assert_eq!(snapshot.snake_body.len(), 1);
        assert_eq!(
            snapshot.head,
            Some(session.geometry().spawn_point(Difficulty::Medium))
        );
        assert_eq!(snapshot.score, 0);

        let area = session.geometry().food_area(Difficulty::Medium);
        let food = snapshot.food.unwrap();
        assert!(food.x >= area.min_x && food.x <= area.max_x);
        assert!(food.y >= area.min_y && food.y <= area.max_y);
    }

    #[test]
    fn test_difficulty_selection_ignored_outside_menu() {
        let mut session = running_session(Difficulty::Easy);
        session.handle_input(InputEvent::SelectDifficulty(Difficulty::Hard));
        assert_eq!(session.difficulty(), Some(Difficulty::Easy));
    }

    #[test]
    fn test_tick_moves_the_snake_right_from_spawn() {
        let mut session = running_session(Difficulty::Easy);
        let spawn = session.geometry().spawn_point(Difficulty::Easy);
        session.tick();
        assert_eq!(session.snapshot().head, Some(Point::new(spawn.x + 1, spawn.y)));
    }

    #[test]
    fn test_pause_suspends_ticking_and_direction_input() {
        let mut session = running_session(Difficulty::Easy);
        session.tick();
        let head_before = session.snapshot().head;

        session.handle_input(InputEvent::PauseToggle);
        assert_eq!(session.phase(), SessionPhase::Paused);
        assert!(session.tick().is_empty());
        assert_eq!(session.snapshot().head, head_before);

        // Direction input while paused is dropped entirely.
        session.handle_input(InputEvent::Direction(Direction::Down));
        session.handle_input(InputEvent::PauseToggle);
        assert_eq!(session.phase(), SessionPhase::Running);
        session.tick();
        let head_after = session.snapshot().head.unwrap();
        assert_eq!(head_after.y, head_before.unwrap().y);
        assert_eq!(head_after.x, head_before.unwrap().x + 1);
    }

    #[test]
    fn test_eating_food_scores_and_respawns_it() {
        let mut session = running_session(Difficulty::Easy);
        let spawn = session.geometry().spawn_point(Difficulty::Easy);
        let ahead = Point::new(spawn.x + 1, spawn.y);
        session.place_food(ahead);

        let events = session.tick();
        assert_eq!(events, vec![SessionEvent::ScoreChanged { score: 10 }]);
        assert_eq!(session.score(), 10);

        let snapshot = session.snapshot();
        let area = session.geometry().food_area(Difficulty::Easy);
        let food = snapshot.food.unwrap();
        assert!(food.x >= area.min_x && food.x <= area.max_x);
        assert!(food.y >= area.min_y && food.y <= area.max_y);

        // Growth lands on the following tick.
        assert_eq!(snapshot.snake_body.len(), 1);
        session.tick();
        assert_eq!(session.snapshot().snake_body.len(), 2);
    }

    #[test]
    fn test_wall_collision_ends_the_game_and_keeps_the_score() {
        let mut session = running_session(Difficulty::Medium);
        let spawn = session.geometry().spawn_point(Difficulty::Medium);
        session.place_food(Point::new(spawn.x + 1, spawn.y));
        session.tick();
        assert_eq!(session.score(), 10);

        // Park the pellet away from the snake's path to the wall.
        session.place_food(Point::new(1, 3));

        let mut game_over = None;
        for _ in 0..200 {
            if let Some(event) = session.tick().into_iter().next() {
                if matches!(event, SessionEvent::GameOver { .. }) {
                    game_over = Some(event);
                    break;
                }
            }
        }

        match game_over {
            Some(SessionEvent::GameOver { final_score, reason }) => {
                assert_eq!(final_score, 10);
                assert_eq!(reason, DeathReason::WallCollision);
            }
            other => panic!("expected game over, got {:?}", other),
        }

        assert_eq!(session.phase(), SessionPhase::GameOver);
        assert_eq!(session.score(), 10);
        assert!(session.tick().is_empty());
    }

    #[test]
    fn test_restart_keeps_difficulty_and_resets_score() {
        let mut session = running_session(Difficulty::Hard);
        let spawn = session.geometry().spawn_point(Difficulty::Hard);
        session.place_food(Point::new(spawn.x + 1, spawn.y));
        session.tick();
        while session.phase() == SessionPhase::Running {
            session.tick();
        }

        session.handle_input(InputEvent::Restart);
        assert_eq!(session.phase(), SessionPhase::Running);
        assert_eq!(session.difficulty(), Some(Difficulty::Hard));
        assert_eq!(session.score(), 0);
        assert_eq!(session.snapshot().head, Some(spawn));
    }

    #[test]
    fn test_restart_only_accepted_after_game_over() {
        let mut session = running_session(Difficulty::Easy);
        session.tick();
        let head = session.snapshot().head;
        session.handle_input(InputEvent::Restart);
        assert_eq!(session.phase(), SessionPhase::Running);
        assert_eq!(session.snapshot().head, head);
    }

    #[test]
    fn test_return_to_menu_from_paused_and_game_over() {
        let mut session = running_session(Difficulty::Easy);
        session.handle_input(InputEvent::PauseToggle);
        session.handle_input(InputEvent::ReturnToMenu);
        assert_eq!(session.phase(), SessionPhase::Menu);
        assert_eq!(session.difficulty(), None);

        session.handle_input(InputEvent::SelectDifficulty(Difficulty::Medium));
        while session.phase() == SessionPhase::Running {
            session.handle_input(InputEvent::Direction(Direction::Up));
            session.tick();
        }
        session.handle_input(InputEvent::ReturnToMenu);
        assert_eq!(session.phase(), SessionPhase::Menu);
        assert!(session.snapshot().food.is_none());
    }

    #[test]
    fn test_resize_swaps_geometry_and_clamps_to_minimum() {
        let mut session = running_session(Difficulty::Easy);
        session.handle_input(InputEvent::Resize {
            width: 1000,
            height: 700,
        });
        assert_eq!(session.geometry().grid_width(), 50);

        session.handle_input(InputEvent::Resize {
            width: 100,
            height: 100,
        });
        assert_eq!(session.geometry().grid_width(), 40);
        assert_eq!(session.geometry().grid_height(), 30);
    }

    #[test]
    fn test_quit_raises_the_flag() {
        let mut session = GameSession::new(GameConfig::default(), 7);
        assert!(!session.quit_requested());
        session.handle_input(InputEvent::Quit);
        assert!(session.quit_requested());
    }
}
