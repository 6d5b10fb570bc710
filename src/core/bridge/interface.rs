//=========================================================================
// Platform Bridge Interface
//=========================================================================
//
// The two capabilities the game consumes from its environment: a render
// sink (cell-addressed drawing surface) and a key-event source.
//
// The core never touches a terminal directly; everything it needs from
// the outside world goes through these traits, which keeps the control
// loop and the physics step testable with plain in-memory doubles.
//
//=========================================================================

//=== Internal Dependencies ===============================================

use crate::core::event::KeyCode;

//=== PlatformError =======================================================

/// Platform capability errors.
///
/// Render-sink initialization failure is the only fatal one; everything
/// else is logged by the component that hit it and terminates that
/// component's loop.
#[derive(Debug)]
pub enum PlatformError {
    /// Terminal setup failed (raw mode, alternate screen). Fatal.
    TerminalInit(std::io::Error),

    /// A drawing or flush call failed after successful init.
    Draw(std::io::Error),

    /// Reading from the key-event capability failed.
    Input(std::io::Error),

    /// Restoring the terminal on shutdown failed.
    Teardown(std::io::Error),
}

impl std::fmt::Display for PlatformError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::TerminalInit(e) => write!(f, "Terminal initialization failed: {}", e),
            Self::Draw(e) => write!(f, "Terminal draw failed: {}", e),
            Self::Input(e) => write!(f, "Key event read failed: {}", e),
            Self::Teardown(e) => write!(f, "Terminal teardown failed: {}", e),
        }
    }
}

impl std::error::Error for PlatformError {}

//=== RenderSink ==========================================================

/// Cell-addressed drawing surface with an assumed 80x25 canvas.
///
/// Calls outside the canvas must be ignored, not errors: game positions
/// are signed and the paddle is allowed to leave the visible board.
pub trait RenderSink {
    /// Prepares the surface for drawing. Called exactly once, before any
    /// other method.
    fn init(&mut self) -> Result<(), PlatformError>;

    /// Blanks the canvas at the start of a frame.
    fn clear(&mut self) -> Result<(), PlatformError>;

    /// Places one glyph. Out-of-canvas coordinates are silently ignored.
    fn set_cell(&mut self, x: i32, y: i32, glyph: char) -> Result<(), PlatformError>;

    /// Makes the frame visible.
    fn flush(&mut self) -> Result<(), PlatformError>;

    /// Restores the surface. Called exactly once, after the last frame.
    fn close(&mut self) -> Result<(), PlatformError>;

    /// Places a run of glyphs starting at `(x, y)`.
    fn draw_text(&mut self, x: i32, y: i32, text: &str) -> Result<(), PlatformError> {
        for (i, glyph) in text.chars().enumerate() {
            self.set_cell(x + i as i32, y, glyph)?;
        }
        Ok(())
    }
}

//=== KeySource ===========================================================

/// Blocking source of recognized key presses.
pub trait KeySource {
    /// Waits for the next terminal event and classifies it.
    ///
    /// Returns `Ok(Some(key))` for a recognized key press, `Ok(None)` for
    /// anything else (releases, repeats, resizes, unmapped keys).
    fn read_key(&mut self) -> Result<Option<KeyCode>, PlatformError>;
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    //--- Test Helpers -----------------------------------------------------

    /// Minimal sink that records set_cell calls.
    struct CellLog(Vec<(i32, i32, char)>);

    impl RenderSink for CellLog {
        fn init(&mut self) -> Result<(), PlatformError> {
            Ok(())
        }
        fn clear(&mut self) -> Result<(), PlatformError> {
            Ok(())
        }
        fn set_cell(&mut self, x: i32, y: i32, glyph: char) -> Result<(), PlatformError> {
            self.0.push((x, y, glyph));
            Ok(())
        }
        fn flush(&mut self) -> Result<(), PlatformError> {
            Ok(())
        }
        fn close(&mut self) -> Result<(), PlatformError> {
            Ok(())
        }
    }

    //--- Tests ------------------------------------------------------------

    #[test]
    fn draw_text_places_one_cell_per_glyph() {
        let mut sink = CellLog(Vec::new());
        sink.draw_text(3, 7, "ab").unwrap();
        assert_eq!(sink.0, vec![(3, 7, 'a'), (4, 7, 'b')]);
    }

    #[test]
    fn draw_text_of_empty_string_is_noop() {
        let mut sink = CellLog(Vec::new());
        sink.draw_text(0, 0, "").unwrap();
        assert!(sink.0.is_empty());
    }

    #[test]
    fn platform_error_is_error_trait() {
        fn assert_error<T: std::error::Error>() {}
        assert_error::<PlatformError>();
    }

    #[test]
    fn platform_error_display_format() {
        let err = PlatformError::TerminalInit(std::io::Error::new(
            std::io::ErrorKind::Other,
            "no tty",
        ));
        assert!(err.to_string().contains("Terminal initialization failed"));
    }
}
