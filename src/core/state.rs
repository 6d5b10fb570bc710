//=========================================================================
// Game State
//
// The single authoritative value describing one game of block-breaker.
//
// Responsibilities:
// - Hold every field the physics step and the renderer read
// - Generate the brick grid
// - Provide the atomic "new round" reset used on life exhaustion
//
// Notes:
// Exactly one authoritative `GameState` exists at runtime, owned by the
// controller. The renderer only ever receives clones (snapshots), so the
// state itself never crosses a thread boundary by reference.
//
//=========================================================================

//=== Board Geometry ======================================================
//
// The canvas is a fixed 80x25 cell terminal grid. Positions are signed:
// the paddle is deliberately not clamped and may leave the visible board.
//

/// Board width in cells.
pub const BOARD_WIDTH: i32 = 80;

/// Board height in cells.
pub const BOARD_HEIGHT: i32 = 25;

/// Paddle width in cells.
pub const PADDLE_WIDTH: i32 = 10;

/// Brick width in cells.
pub const BRICK_WIDTH: i32 = 6;

/// Rows below this are the ceiling region; the ball is forced downward.
pub const CEILING_Y: i32 = 2;

/// Brick grid dimensions.
pub const BRICK_ROWS: i32 = 5;
pub const BRICK_COLS: i32 = 11;

/// Total bricks in a fresh grid.
pub const BRICK_COUNT: usize = (BRICK_ROWS * BRICK_COLS) as usize;

/// Grid origin (top-left brick) and horizontal stride (width + 1 gap).
const BRICK_ORIGIN_X: i32 = 2;
const BRICK_ORIGIN_Y: i32 = 4;
const BRICK_STRIDE: i32 = BRICK_WIDTH + 1;

/// Lives at the start of a round.
pub const STARTING_LIVES: i32 = 3;

//=== Point ===============================================================

/// A cell position or a per-tick displacement on the board grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// Ball spawn position: horizontal center, two thirds down the board.
pub const BALL_SPAWN: Point = Point::new(BOARD_WIDTH / 2, BOARD_HEIGHT * 2 / 3);

//=== GameState ===========================================================

/// Complete game state.
///
/// Cloning produces an independent snapshot; publishing a clone per
/// processed event is what keeps the renderer free of partially-mutated
/// frames.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    /// Left edge of the paddle. Not clamped to the board.
    pub paddle_x: i32,

    /// `false` while waiting for a start key, `true` while the ball is
    /// in motion. Initial and post-game-over state is waiting.
    pub running: bool,

    /// Ball position.
    pub ball: Point,

    /// Per-tick ball displacement; each component is -1 or +1.
    pub vel: Point,

    /// Remaining bricks in grid-generation order. No duplicates.
    pub bricks: Vec<Point>,

    /// Remaining lives, in [0, 3]. Reaching 0 triggers a full round reset
    /// within the same physics step.
    pub lives: i32,

    /// Bricks destroyed this round.
    pub score: u32,

    /// Best score of the process lifetime. Survives round resets,
    /// monotonically non-decreasing, not persisted across runs.
    pub high_score: u32,
}

impl GameState {
    //--- Construction -----------------------------------------------------

    /// Creates the initial waiting-state configuration.
    pub fn new() -> Self {
        Self::new_round(0)
    }

    /// Creates a fresh round while carrying over a high score.
    ///
    /// This is the single atomic reset used on life exhaustion: every
    /// field returns to its initial waiting configuration except
    /// `high_score`, which the caller supplies.
    pub fn new_round(high_score: u32) -> Self {
        Self {
            paddle_x: BOARD_WIDTH / 2 - PADDLE_WIDTH / 2,
            running: false,
            ball: BALL_SPAWN,
            vel: Point::new(1, -1),
            bricks: brick_grid(),
            lives: STARTING_LIVES,
            score: 0,
            high_score,
        }
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

//=== Brick Grid ==========================================================

/// Generates the full brick grid: 5 rows by 11 columns, 6-cell bricks
/// with 1-cell gaps, origin at column 2 / row 4, in row-major order.
pub fn brick_grid() -> Vec<Point> {
    let mut bricks = Vec::with_capacity(BRICK_COUNT);
    for row in 0..BRICK_ROWS {
        for col in 0..BRICK_COLS {
            bricks.push(Point::new(
                BRICK_ORIGIN_X + col * BRICK_STRIDE,
                BRICK_ORIGIN_Y + row,
            ));
        }
    }
    bricks
}

//=========================================================================
// Unit Tests
//=========================================================================
