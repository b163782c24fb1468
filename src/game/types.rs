use serde::{Deserialize, Serialize};

// Grid coordinates: x is the column, y is the row, y grows downward.
// Signed so that pre-wrap arithmetic may leave the grid before it is
// normalized or rejected.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    pub fn shifted(&self, direction: Direction) -> Self {
        let (dx, dy) = direction.delta();
        Self::new(self.x + dx, self.y + dy)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub fn delta(&self) -> (i32, i32) {
        match self {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }

    pub fn is_opposite(&self, other: &Direction) -> bool {
        matches!(
            (self, other),
            (Direction::Left, Direction::Right)
                | (Direction::Right, Direction::Left)
                | (Direction::Up, Direction::Down)
                | (Direction::Down, Direction::Up)
        )
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    pub fn wall_collision_mode(&self) -> WallCollisionMode {
        match self {
            Difficulty::Easy => WallCollisionMode::WrapAround,
            Difficulty::Medium | Difficulty::Hard => WallCollisionMode::Death,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WallCollisionMode {
    Death,
    WrapAround,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AdvanceResult {
    Continued,
    Collided(DeathReason),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum DeathReason {
    UiAreaCollision,
    WallCollision,
    SelfCollision,
}

// Pixel-space rectangle used for both rendering and eaten-detection.
// Overlap must be strict: rectangles sharing only an edge do not collide.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PixelRect {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl PixelRect {
    pub fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn intersects(&self, other: &PixelRect) -> bool {
        self.x < other.x + other.width
            && self.x + self.width > other.x
            && self.y < other.y + other.height
            && self.y + self.height > other.y
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_direction_is_opposite() {
        assert!(Direction::Left.is_opposite(&Direction::Right));
        assert!(Direction::Up.is_opposite(&Direction::Down));
        assert!(!Direction::Up.is_opposite(&Direction::Left));
        assert!(!Direction::Right.is_opposite(&Direction::Right));
    }

    #[test]
    fn test_point_shifted_follows_direction_deltas() {
        let p = Point::new(5, 10);
        assert_eq!(p.shifted(Direction::Up), Point::new(5, 9));
        assert_eq!(p.shifted(Direction::Down), Point::new(5, 11));
        assert_eq!(p.shifted(Direction::Left), Point::new(4, 10));
        assert_eq!(p.shifted(Direction::Right), Point::new(6, 10));
    }

    #[test]
    fn test_rect_overlap_is_strict() {
        let a = PixelRect::new(0, 0, 20, 20);
        let overlapping = PixelRect::new(10, 10, 20, 20);
        let edge_touching = PixelRect::new(20, 0, 20, 20);
        let disjoint = PixelRect::new(40, 40, 20, 20);

        assert!(a.intersects(&overlapping));
        assert!(!a.intersects(&edge_touching));
        assert!(!a.intersects(&disjoint));
    }

    #[test]
    fn test_easy_wraps_walls_others_do_not() {
        assert_eq!(
            Difficulty::Easy.wall_collision_mode(),
            WallCollisionMode::WrapAround
        );
        assert_eq!(
            Difficulty::Medium.wall_collision_mode(),
            WallCollisionMode::Death
        );
        assert_eq!(
            Difficulty::Hard.wall_collision_mode(),
            WallCollisionMode::Death
        );
    }
}
