use super::geometry::GridGeometry;
use super::session_rng::SessionRng;
use super::types::{Difficulty, PixelRect, Point};

// Food placement is uniform over the legal spawn area and deliberately
// does NOT check snake occupancy; a pellet may land under the body.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Food {
    position: Point,
}

impl Food {
    pub fn spawn(geometry: &GridGeometry, difficulty: Difficulty, rng: &mut SessionRng) -> Self {
        let mut food = Self {
            position: Point::new(0, 0),
        };
        food.randomize(geometry, difficulty, rng);
        food
    }

    pub fn position(&self) -> Point {
        self.position
    }

    pub fn randomize(
        &mut self,
        geometry: &GridGeometry,
        difficulty: Difficulty,
        rng: &mut SessionRng,
    ) {
        let area = geometry.food_area(difficulty);
        self.position = Point::new(
            rng.random_range(area.min_x..=area.max_x),
            rng.random_range(area.min_y..=area.max_y),
        );
    }

    pub fn collision_rect(&self, geometry: &GridGeometry, sprite_size: i32) -> PixelRect {
        geometry.sprite_rect(self.position, sprite_size)
    }

    #[cfg(test)]
    pub fn place_at(&mut self, position: Point) {
        self.position = position;
    }
}
