//=========================================================================
// Platform Subsystem
//
// Crossterm-backed implementations of the two capabilities the core
// consumes: the render sink and the key-event source.
//
// Architecture:
// ```text
//  Input Thread:                    Render Thread:
//  ┌───────────────────────┐       ┌──────────────────────┐
//  │  crossterm::event     │       │  Renderer            │
//  │   ↓                   │       │   ↓                  │
//  │  event_mapper         │       │  TerminalScreen      │
//  │   ├─ classifies       │       │   ├─ raw mode        │
//  │   └─ drops the rest   │       │   ├─ alt screen      │
//  │   ↓                   │       │   └─ queued writes   │
//  │  KeyCode ─────────────┼──────>│      + flush         │
//  └───────────────────────┘       └──────────────────────┘
// ```
//
// Key Design Decisions:
// - **Queued drawing**: cells are queued on stdout and made visible by
//   one `flush()` per frame, so a frame reaches the terminal as a single
//   write burst
// - **Canvas clipping**: game coordinates are signed and unclamped;
//   anything outside the 80x25 canvas is dropped here, not upstream
// - **Raw mode + alternate screen**: entered on `init()`, restored on
//   `close()`, leaving the user's shell exactly as it was
//
// Responsibilities:
// - Own stdout and the terminal modes
// - Translate crossterm events → `KeyCode` (see `event_mapper`)
// - Implement the `RenderSink` / `KeySource` contract
//
//=========================================================================

//=== Submodules ==========================================================

mod event_mapper;

//=== Standard Library Imports ============================================

use std::io::{self, Stdout, Write};

//=== External Crates =====================================================

use crossterm::{
    cursor::{Hide, MoveTo, Show},
    event,
    execute, queue,
    style::Print,
    terminal::{
        disable_raw_mode, enable_raw_mode, Clear, ClearType, EnterAlternateScreen,
        LeaveAlternateScreen,
    },
};
use log::info;

//=== Internal Imports ====================================================

use crate::core::bridge::{KeySource, PlatformError, RenderSink};
use crate::core::event::KeyCode;
use crate::core::state::{BOARD_HEIGHT, BOARD_WIDTH};

//=== TerminalScreen ======================================================

/// The real render sink: a raw-mode alternate screen on stdout.
///
/// Construction is cheap and infallible; all terminal state changes
/// happen in `init()` so that a failure there can be reported as the
/// single fatal error the game knows.
pub struct TerminalScreen {
    out: Stdout,
}

impl TerminalScreen {
    pub fn new() -> Self {
        Self { out: io::stdout() }
    }
}

impl Default for TerminalScreen {
    fn default() -> Self {
        Self::new()
    }
}

impl RenderSink for TerminalScreen {
    fn init(&mut self) -> Result<(), PlatformError> {
        enable_raw_mode().map_err(PlatformError::TerminalInit)?;
        execute!(self.out, EnterAlternateScreen, Hide, MoveTo(0, 0))
            .map_err(PlatformError::TerminalInit)?;
        info!(target: "platform", "Terminal initialized ({}x{} canvas)", BOARD_WIDTH, BOARD_HEIGHT);
        Ok(())
    }

    fn clear(&mut self) -> Result<(), PlatformError> {
        queue!(self.out, Clear(ClearType::All)).map_err(PlatformError::Draw)
    }

    fn set_cell(&mut self, x: i32, y: i32, glyph: char) -> Result<(), PlatformError> {
        if !(0..BOARD_WIDTH).contains(&x) || !(0..BOARD_HEIGHT).contains(&y) {
            return Ok(());
        }
        queue!(self.out, MoveTo(x as u16, y as u16), Print(glyph)).map_err(PlatformError::Draw)
    }

    fn flush(&mut self) -> Result<(), PlatformError> {
        self.out.flush().map_err(PlatformError::Draw)
    }

    fn close(&mut self) -> Result<(), PlatformError> {
        execute!(self.out, Clear(ClearType::All), LeaveAlternateScreen, Show)
            .map_err(PlatformError::Teardown)?;
        disable_raw_mode().map_err(PlatformError::Teardown)?;
        info!(target: "platform", "Terminal restored");
        Ok(())
    }
}

//=== TerminalKeys ========================================================

/// The real key-event source: blocking reads from crossterm, classified
/// by `event_mapper`.
pub struct TerminalKeys;

impl TerminalKeys {
    pub fn new() -> Self {
        Self
    }
}

impl Default for TerminalKeys {
    fn default() -> Self {
        Self::new()
    }
}

impl KeySource for TerminalKeys {
    fn read_key(&mut self) -> Result<Option<KeyCode>, PlatformError> {
        let event = event::read().map_err(PlatformError::Input)?;
        Ok(event_mapper::map_event(&event))
    }
}
