use std::collections::VecDeque;

use super::geometry::GridGeometry;
use super::types::{AdvanceResult, DeathReason, Difficulty, Direction, Point, WallCollisionMode};

// The head and the two segments behind it are skipped by the
// self-collision scan: during a turn those cells are adjacent to the new
// head without being run into, and a snake of length <= 3 can never
// actually hit itself.
const SELF_COLLISION_SKIP: usize = 3;

#[derive(Clone, Debug)]
pub struct Snake {
    body: VecDeque<Point>,
    direction: Direction,
    pending_direction: Option<Direction>,
    length: usize,
    score: u32,
}

impl Snake {
    pub fn new(geometry: &GridGeometry, difficulty: Difficulty) -> Self {
        let mut body = VecDeque::new();
        body.push_back(geometry.spawn_point(difficulty));

        Self {
            body,
            direction: Direction::Right,
            pending_direction: None,
            length: 1,
            score: 0,
        }
    }

    pub fn head(&self) -> Point {
        *self.body.front().expect("Snake body should never be empty")
    }

    pub fn body(&self) -> &VecDeque<Point> {
        &self.body
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn length(&self) -> usize {
        self.length
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    // A reversal would step straight into the neck; it is dropped rather
    // than rejected with an error. The accepted direction takes effect on
    // the next advance, never mid-tick.
    pub fn set_direction(&mut self, direction: Direction) {
        if !direction.is_opposite(&self.direction) {
            self.pending_direction = Some(direction);
        }
    }

    pub fn advance(&mut self, geometry: &GridGeometry, difficulty: Difficulty) -> AdvanceResult {
        if let Some(direction) = self.pending_direction.take() {
            self.direction = direction;
        }

        let mut new_head = self.head().shifted(self.direction);

        // The reserved strip above the playable band kills on contact for
        // every difficulty, before any wrapping.
        if new_head.y < geometry.ui_row_offset() {
            return AdvanceResult::Collided(DeathReason::UiAreaCollision);
        }

        match difficulty.wall_collision_mode() {
            WallCollisionMode::WrapAround => {
                new_head = geometry.wrap_into_playable(new_head);
            }
            WallCollisionMode::Death => {
                if !geometry.playable_bounds(difficulty).contains(new_head) {
                    return AdvanceResult::Collided(DeathReason::WallCollision);
                }
            }
        }

        if self
            .body
            .iter()
            .skip(SELF_COLLISION_SKIP)
            .any(|segment| *segment == new_head)
        {
            return AdvanceResult::Collided(DeathReason::SelfCollision);
        }

        self.body.push_front(new_head);
        if self.body.len() > self.length {
            self.body.pop_back();
        }

        AdvanceResult::Continued
    }

    pub fn grow(&mut self, reward: u32) {
        self.length += 1;
        self.score += reward;
    }

    pub fn reset(&mut self, geometry: &GridGeometry, difficulty: Difficulty) {
        self.body.clear();
        self.body.push_back(geometry.spawn_point(difficulty));
        self.direction = Direction::Right;
        self.pending_direction = None;
        self.length = 1;
        self.score = 0;
    }

    #[cfg(test)]
    pub fn from_parts(body: &[Point], direction: Direction) -> Self {
        Self {
            body: body.iter().copied().collect(),
            direction,
            pending_direction: None,
            length: body.len(),
            score: 0,
        }
    }
}
