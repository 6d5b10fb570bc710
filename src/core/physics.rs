//=========================================================================
// Physics Step
//=========================================================================
//
// The deterministic collision-resolution algorithm, run once per consumed
// tick while a round is active.
//
// Checks apply in a fixed order; each one is independent, and several may
// fire in the same tick because earlier checks change the velocity and
// position that later checks read:
//
//   1. advance ball          5. paddle bounce
//   2. side walls            6. brick collision (at most one brick)
//   3. ceiling               7. level clear (regenerate grid)
//   4. floor / miss
//
//=========================================================================

//=== Internal Dependencies ===============================================

use super::state::{
    brick_grid, GameState, BALL_SPAWN, BOARD_HEIGHT, BOARD_WIDTH, BRICK_WIDTH, CEILING_Y,
    PADDLE_WIDTH,
};

//=== Step ================================================================

/// Advances the ball one tick and resolves every collision rule.
pub fn step(state: &mut GameState) {
    // 1. Advance.
    state.ball.x += state.vel.x;
    state.ball.y += state.vel.y;

    // 2. Side walls.
    if state.ball.x <= 0 || state.ball.x >= BOARD_WIDTH {
        state.vel.x = -state.vel.x;
    }

    // 3. Ceiling. Forced downward, not a toggle: a ball that tunnels past
    // row 2 in one tick still comes back down.
    if state.ball.y <= CEILING_Y {
        state.vel.y = 1;
    }

    // 4. Floor: one life lost, ball back to the spawn cell.
    if state.ball.y >= BOARD_HEIGHT {
        state.lives -= 1;
        state.ball = BALL_SPAWN;
        state.vel.y = -1;

        if state.lives <= 0 {
            let high = state.high_score.max(state.score);
            *state = GameState::new_round(high);
        }
    }

    // 5. Paddle bounce. The outgoing horizontal direction depends on which
    // half of the paddle was hit.
    if state.ball.y == BOARD_HEIGHT - 2
        && state.ball.x >= state.paddle_x
        && state.ball.x <= state.paddle_x + PADDLE_WIDTH
    {
        state.vel.y = -1;
        state.vel.x = if state.ball.x <= state.paddle_x + PADDLE_WIDTH / 2 {
            -1
        } else {
            1
        };
    }

    // 6. Brick collision: first matching brick in grid order, one per tick.
    if let Some(hit) = state
        .bricks
        .iter()
        .position(|b| b.y == state.ball.y && b.x <= state.ball.x && state.ball.x <= b.x + BRICK_WIDTH)
    {
        state.vel.y = -state.vel.y;
        state.bricks.remove(hit);
        state.score += 1;
    }

    // 7. Level clear: fresh grid, everything else untouched.
    if state.bricks.is_empty() {
        state.bricks = brick_grid();
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
