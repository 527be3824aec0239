// Isometric "diamond map" projection for the 8x8 board.
//
// Board coordinates are (row, col) with 0..8 on each axis; screen space is
// the board's own pixel space with the origin at the top-left of the diamond's
// bounding box. The frontend scales and offsets this space, the math here
// never changes.

pub const TILE_WIDTH: f32 = 80.0;
pub const TILE_HEIGHT: f32 = 40.0;
pub const NUM_ROWS: usize = 8;
pub const NUM_COLS: usize = 8;

/// Pixel size of the whole diamond's bounding box.
pub const BOARD_PIXEL_WIDTH: f32 = NUM_ROWS as f32 * TILE_WIDTH;
pub const BOARD_PIXEL_HEIGHT: f32 = NUM_COLS as f32 * TILE_HEIGHT;

// The projection is centered vertically on a full column of stacked tiles.
const STACK_HEIGHT: f32 = NUM_ROWS as f32 * TILE_HEIGHT;

/// Top-left corner of the bounding box of one tile's diamond.
pub fn tile_origin(row: usize, col: usize) -> (f32, f32) {
    let x = row as f32 * (TILE_WIDTH / 2.0) + col as f32 * (TILE_WIDTH / 2.0);
    let y = row as f32 * (TILE_HEIGHT / 2.0) - col as f32 * (TILE_HEIGHT / 2.0)
        + STACK_HEIGHT / 2.0
        - TILE_HEIGHT / 2.0;
    (x, y)
}

/// Center of one tile's diamond; pieces are drawn here.
pub fn tile_center(row: usize, col: usize) -> (f32, f32) {
    let (x, y) = tile_origin(row, col);
    (x + TILE_WIDTH / 2.0, y + TILE_HEIGHT / 2.0)
}

/// The four corner points of one tile's diamond, derived once from the tile
/// origin and cached per cell for hit testing and rendering.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TileQuad {
    pub left: (f32, f32),
    pub top: (f32, f32),
    pub bottom: (f32, f32),
    pub right: (f32, f32),
}

impl TileQuad {
    pub fn of(row: usize, col: usize) -> TileQuad {
        let (x0, y0) = tile_origin(row, col);
        TileQuad {
            left: (x0, y0 + TILE_HEIGHT / 2.0),
            top: (x0 + TILE_WIDTH / 2.0, y0),
            bottom: (x0 + TILE_WIDTH / 2.0, y0 + TILE_HEIGHT),
            right: (x0 + TILE_WIDTH, y0 + TILE_HEIGHT / 2.0),
        }
    }

    /// Point-in-diamond test. A point is inside when its normalized taxicab
    /// distance from the tile center is at most one.
    pub fn contains(&self, x: f32, y: f32) -> bool {
        let cx = (self.left.0 + self.right.0) / 2.0;
        let cy = (self.top.1 + self.bottom.1) / 2.0;
        let dx = (x - cx).abs() / (TILE_WIDTH / 2.0);
        let dy = (y - cy).abs() / (TILE_HEIGHT / 2.0);
        dx + dy <= 1.0 + f32::EPSILON
    }
}

/// Inverse projection: a screen point to the (row, col) whose diamond covers
/// it. Exact inverse of `tile_origin`, truncating towards zero, so results
/// may fall outside 0..8 and near-board points can truncate into an edge
/// cell. Callers bounds-check and confirm with [`TileQuad::contains`].
pub fn screen_to_board(x: f32, y: f32) -> (i32, i32) {
    let x = x as f64;
    let y = y as f64 - STACK_HEIGHT as f64 / 2.0;
    let tw = TILE_WIDTH as f64;
    let th = TILE_HEIGHT as f64;
    let row = ((2.0 * y / th) + (2.0 * x / tw)) / 2.0;
    let col = (2.0 * x / tw) - row;
    (row as i32, col as i32)
}

pub fn in_bounds(row: i32, col: i32) -> bool {
    row >= 0 && col >= 0 && (row as usize) < NUM_ROWS && (col as usize) < NUM_COLS
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tile_centers_project_back_to_their_cell() {
        for row in 0..NUM_ROWS {
            for col in 0..NUM_COLS {
                let (cx, cy) = tile_center(row, col);
                assert_eq!(screen_to_board(cx, cy), (row as i32, col as i32));
            }
        }
    }

    #[test]
    fn inverse_projection_is_idempotent() {
        let (cx, cy) = tile_center(3, 5);
        let first = screen_to_board(cx, cy);
        let second = screen_to_board(cx, cy);
        assert_eq!(first, second);
    }

    #[test]
    fn quad_contains_center_but_not_bounding_box_corner() {
        let quad = TileQuad::of(2, 2);
        let (cx, cy) = tile_center(2, 2);
        assert!(quad.contains(cx, cy));
        // The top-left of the bounding box lies outside the diamond.
        let (x0, y0) = tile_origin(2, 2);
        assert!(!quad.contains(x0 + 1.0, y0 + 1.0));
    }

    #[test]
    fn quad_corners_span_tile_dimensions() {
        let quad = TileQuad::of(0, 0);
        assert_eq!(quad.right.0 - quad.left.0, TILE_WIDTH);
        assert_eq!(quad.bottom.1 - quad.top.1, TILE_HEIGHT);
    }

    #[test]
    fn points_off_the_diamond_resolve_out_of_bounds_or_fail_containment() {
        // Far outside the whole map.
        let (row, col) = screen_to_board(-200.0, -200.0);
        assert!(!in_bounds(row, col));

        // Just outside a corner tile: truncation lands on the tile, the
        // containment check rejects it.
        let (x0, y0) = tile_origin(0, 0);
        let (row, col) = screen_to_board(x0 + 2.0, y0 + 2.0);
        if in_bounds(row, col) {
            assert!(!TileQuad::of(row as usize, col as usize).contains(x0 + 2.0, y0 + 2.0));
        }
    }
}
