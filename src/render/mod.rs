//=========================================================================
// Renderer
//=========================================================================
//
// Consumes state snapshots and draws full frames to the render sink.
//
// Architecture:
//   Receiver<GameState> → run() → RenderSink (behind one mutex)
//
// The receive is a blocking wait on a rendezvous channel: the renderer
// is a true consumer with no polling, and because the channel is
// unbuffered it also paces the controller (it cannot publish a second
// snapshot before the first is accepted).
//
// The mutex around the sink is the only lock in the system. It makes a
// frame atomic with respect to the engine's final `close()`; the game
// state itself is a private clone and needs no guarding.
//
//=========================================================================

//=== Standard Library Imports ============================================

use std::sync::{Arc, Mutex};

//=== External Dependencies ===============================================

use crossbeam_channel::Receiver;
use log::{error, info};

//=== Internal Dependencies ===============================================

use crate::core::bridge::{PlatformError, RenderSink};
use crate::core::state::{GameState, BOARD_HEIGHT, BOARD_WIDTH};

//=== Frame Text ==========================================================

const QUIT_HINT: &str = "EXIT : ESC KEY";
const START_PROMPT: &str = "PUSH SPACE KEY";
const BRICK_GLYPHS: &str = "======";
const PADDLE_GLYPHS: &str = "-========-";
const BALL_GLYPH: char = '*';

//=== Renderer ============================================================

/// Snapshot consumer and frame painter.
pub struct Renderer<S: RenderSink> {
    sink: Arc<Mutex<S>>,
}

impl<S: RenderSink> Renderer<S> {
    //--- Construction -----------------------------------------------------

    pub fn new(sink: Arc<Mutex<S>>) -> Self {
        Self { sink }
    }

    //--- Render Loop ------------------------------------------------------

    /// Draws every received snapshot in order until the channel
    /// disconnects (controller gone) or a draw call fails.
    ///
    /// Draw failures end the render loop rather than the process; the
    /// controller then stops at its next publish attempt.
    pub fn run(self, frames: Receiver<GameState>) {
        info!(target: "render", "Render loop started");

        while let Ok(frame) = frames.recv() {
            let mut screen = match self.sink.lock() {
                Ok(guard) => guard,
                Err(_) => {
                    error!(target: "render", "Render sink mutex poisoned, exiting");
                    return;
                }
            };

            if let Err(e) = draw_frame(&mut *screen, &frame) {
                error!(target: "render", "Frame draw failed: {}", e);
                return;
            }
        }

        info!(target: "render", "Snapshot channel closed, render loop exiting");
    }
}

//=== Frame Drawing =======================================================

/// Paints one complete frame from a snapshot.
///
/// Layout, top to bottom: HUD row, separator, bricks, paddle, and either
/// the ball (active) or the start prompt (waiting).
pub(crate) fn draw_frame<S: RenderSink>(
    screen: &mut S,
    state: &GameState,
) -> Result<(), PlatformError> {
    screen.clear()?;

    // HUD.
    screen.draw_text(1, 0, QUIT_HINT)?;
    screen.draw_text(
        BOARD_WIDTH - 50,
        0,
        &format!("HighScore : {:05}", state.high_score),
    )?;
    screen.draw_text(BOARD_WIDTH - 30, 0, &format!("Score : {:05}", state.score))?;
    screen.draw_text(BOARD_WIDTH - 10, 0, &format!("Life : {:02}", state.lives))?;

    // Separator.
    screen.draw_text(0, 1, &"-".repeat(BOARD_WIDTH as usize))?;

    // Bricks. The negative-row guard is unreachable with the stock grid
    // generator; it mirrors the sink contract of ignoring off-canvas
    // cells.
    for brick in &state.bricks {
        if brick.y >= 0 {
            screen.draw_text(brick.x, brick.y, BRICK_GLYPHS)?;
        }
    }

    // Paddle.
    screen.draw_text(state.paddle_x, BOARD_HEIGHT - 2, PADDLE_GLYPHS)?;

    // Ball while a round runs, start prompt while waiting.
    if state.running {
        screen.set_cell(state.ball.x, state.ball.y, BALL_GLYPH)?;
    } else {
        let x = (BOARD_WIDTH - START_PROMPT.len() as i32) / 2;
        screen.draw_text(x, BOARD_HEIGHT / 2, START_PROMPT)?;
    }

    screen.flush()
}

//=========================================================================
// Unit Tests
//=========================================================================
