use super::settings::GameConfig;
use super::types::{Difficulty, PixelRect, Point, WallCollisionMode};

pub const MIN_WINDOW_WIDTH: i32 = 800;
pub const MIN_WINDOW_HEIGHT: i32 = 600;

// Wall thickness is a fraction of a cell; the extra buffer keeps a head
// that renders flush against the wall from clipping into it.
const BOUNDARY_THICKNESS: f32 = 0.25;
const EDGE_BUFFER: f32 = 0.1;
const FOOD_WALL_MARGIN: f32 = 1.0;

// Playable-area edges in grid units. Edges are fractional because the
// boundary wall is thinner than one cell; max sides are exclusive.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Bounds {
    pub min_x: f32,
    pub max_x: f32,
    pub min_y: f32,
    pub max_y: f32,
}

impl Bounds {
    pub fn contains(&self, point: Point) -> bool {
        let x = point.x as f32;
        let y = point.y as f32;
        x >= self.min_x && x < self.max_x && y >= self.min_y && y < self.max_y
    }
}

// Inclusive cell ranges food may spawn in.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SpawnArea {
    pub min_x: i32,
    pub max_x: i32,
    pub min_y: i32,
    pub max_y: i32,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GridGeometry {
    window_width: i32,
    window_height: i32,
    cell_size: i32,
    ui_height: i32,
}

impl GridGeometry {
    pub fn new(window_width: i32, window_height: i32, cell_size: i32, ui_height: i32) -> Self {
        Self {
            window_width: window_width.max(MIN_WINDOW_WIDTH),
            window_height: window_height.max(MIN_WINDOW_HEIGHT),
            cell_size,
            ui_height,
        }
    }

    pub fn from_config(config: &GameConfig) -> Self {
        Self::new(
            config.window_width,
            config.window_height,
            config.cell_size,
            config.ui_height,
        )
    }

    // A resize produces a fresh value; the session swaps it in between
    // ticks so a step never observes a torn geometry.
    pub fn resized(&self, window_width: i32, window_height: i32) -> Self {
        Self::new(window_width, window_height, self.cell_size, self.ui_height)
    }

    pub fn cell_size(&self) -> i32 {
        self.cell_size
    }

    pub fn grid_width(&self) -> i32 {
        self.window_width / self.cell_size
    }

    pub fn grid_height(&self) -> i32 {
        self.window_height / self.cell_size
    }

    // First playable row, below the strip reserved for score display.
    pub fn ui_row_offset(&self) -> i32 {
        self.ui_height / self.cell_size
    }

    pub fn playable_rows(&self) -> i32 {
        self.grid_height() - self.ui_row_offset()
    }

    pub fn playable_bounds(&self, difficulty: Difficulty) -> Bounds {
        let width = self.grid_width() as f32;
        let height = self.grid_height() as f32;
        let ui_rows = self.ui_row_offset() as f32;

        match difficulty.wall_collision_mode() {
            WallCollisionMode::WrapAround => Bounds {
                min_x: 0.0,
                max_x: width,
                min_y: ui_rows,
                max_y: height,
            },
            WallCollisionMode::Death => {
                let inset = BOUNDARY_THICKNESS + EDGE_BUFFER;
                Bounds {
                    min_x: inset,
                    max_x: width - inset,
                    min_y: ui_rows + inset,
                    max_y: height - inset,
                }
            }
        }
    }

    // Toroidal re-entry for wrap-around mode: columns wrap over the full
    // grid width, rows wrap within the band below the UI strip.
    pub fn wrap_into_playable(&self, point: Point) -> Point {
        let ui_rows = self.ui_row_offset();
        let x = point.x.rem_euclid(self.grid_width());
        let y = (point.y - ui_rows).rem_euclid(self.grid_height() - ui_rows) + ui_rows;
        Point::new(x, y.max(ui_rows))
    }

    pub fn food_area(&self, difficulty: Difficulty) -> SpawnArea {
        let width = self.grid_width();
        let height = self.grid_height();
        let ui_rows = self.ui_row_offset();

        let (min_x, max_x, min_y, max_y) = match difficulty.wall_collision_mode() {
            WallCollisionMode::WrapAround => (0, width - 1, ui_rows, height - 1),
            WallCollisionMode::Death => (
                (BOUNDARY_THICKNESS + FOOD_WALL_MARGIN) as i32,
                (width as f32 - BOUNDARY_THICKNESS - FOOD_WALL_MARGIN) as i32,
                (ui_rows as f32 + BOUNDARY_THICKNESS + FOOD_WALL_MARGIN) as i32,
                (height as f32 - BOUNDARY_THICKNESS - FOOD_WALL_MARGIN) as i32,
            ),
        };

        // An extreme resize could invert a range; never let max < min.
        SpawnArea {
            min_x,
            max_x: max_x.max(min_x),
            min_y,
            max_y: max_y.max(min_y),
        }
    }

    pub fn spawn_point(&self, difficulty: Difficulty) -> Point {
        let mut x = self.grid_width() / 4;
        let mut y = self.playable_rows() / 2 + self.ui_row_offset();

        if difficulty.wall_collision_mode() == WallCollisionMode::Death {
            x = x.max((BOUNDARY_THICKNESS + 1.0) as i32);
            y = y.max((self.ui_row_offset() as f32 + BOUNDARY_THICKNESS + 1.0) as i32);
        }

        Point::new(x, y)
    }

    // Sprites are centered within their cell and may be smaller than it.
    pub fn sprite_rect(&self, cell: Point, sprite_size: i32) -> PixelRect {
        let inset = (self.cell_size - sprite_size) / 2;
        PixelRect::new(
            cell.x * self.cell_size + inset,
            cell.y * self.cell_size + inset,
            sprite_size,
            sprite_size,
        )
    }
}
