use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::config::Validate;

use super::types::Difficulty;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DifficultySettings {
    pub tick_interval_ms: u64,
    pub food_reward: u32,
}

impl DifficultySettings {
    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_interval_ms)
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GameConfig {
    pub window_width: i32,
    pub window_height: i32,
    pub cell_size: i32,
    pub ui_height: i32,
    pub snake_sprite_size: i32,
    pub food_sprite_size: i32,
    pub easy: DifficultySettings,
    pub medium: DifficultySettings,
    pub hard: DifficultySettings,
}

impl GameConfig {
    pub fn difficulty_settings(&self, difficulty: Difficulty) -> &DifficultySettings {
        match difficulty {
            Difficulty::Easy => &self.easy,
            Difficulty::Medium => &self.medium,
            Difficulty::Hard => &self.hard,
        }
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            window_width: 1400,
            window_height: 850,
            cell_size: 20,
            ui_height: 40,
            snake_sprite_size: 20,
            food_sprite_size: 15,
            // 10, 8 and 10 simulation steps per second.
            easy: DifficultySettings {
                tick_interval_ms: 100,
                food_reward: 10,
            },
            medium: DifficultySettings {
                tick_interval_ms: 125,
                food_reward: 10,
            },
            hard: DifficultySettings {
                tick_interval_ms: 100,
                food_reward: 10,
            },
        }
    }
}

impl Validate for GameConfig {
    fn validate(&self) -> Result<(), String> {
        if self.window_width < 800 || self.window_height < 600 {
            return Err("window must be at least 800x600".to_string());
        }
        if self.cell_size < 4 || self.cell_size > 100 {
            return Err("cell_size must be between 4 and 100".to_string());
        }
        if self.ui_height < self.cell_size {
            return Err("ui_height must reserve at least one grid row".to_string());
        }
        if self.snake_sprite_size < 1 || self.snake_sprite_size > self.cell_size {
            return Err("snake_sprite_size must fit within a cell".to_string());
        }
        if self.food_sprite_size < 1 || self.food_sprite_size > self.cell_size {
            return Err("food_sprite_size must fit within a cell".to_string());
        }
        for settings in [&self.easy, &self.medium, &self.hard] {
            if settings.tick_interval_ms < 50 || settings.tick_interval_ms > 5000 {
                return Err("tick_interval_ms must be between 50 and 5000".to_string());
            }
            if settings.food_reward < 1 || settings.food_reward > 1000 {
                return Err("food_reward must be between 1 and 1000".to_string());
            }
        }
        Ok(())
    }
}
