//=========================================================================
// Control Event Types
//
// Defines the two event kinds the controller consumes: recognized key
// presses and timer ticks.
//
// This module abstracts away platform-specific input (e.g. crossterm,
// termion) into a unified, engine-friendly format used by the control
// loop.
//
// Responsibilities:
// - Represent the recognized key identities in a stable, portable way
// - Represent the fixed-cadence timer signal
//
// Design:
// Both types are Copy-cheap and carry no payload beyond identity; the
// platform layer drops everything the controller does not recognize
// before it ever reaches a channel.
//
// Event Flow:
// ```text
// Platform Layer (crossterm)
//         ↓
//    KeyCode / Tick (this module)
//         ↓
//    Controller (state machine)
//         ↓
//    GameState snapshots
// ```
//
//=========================================================================

//=== KeyCode =============================================================

/// Recognized key identity.
///
/// Only the keys the game reacts to are represented; the platform layer
/// classifies raw terminal events and forwards one of these variants per
/// key press, silently dropping everything else.
///
/// Platform mapping:
/// - crossterm: see `platform::event_mapper`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyCode {
    /// Escape key. Ends the game.
    Escape,

    /// Ctrl-C. Ends the game, same as [`KeyCode::Escape`].
    CtrlC,

    /// Moves the paddle left.
    ArrowLeft,

    /// Moves the paddle right.
    ArrowRight,

    /// Starts a round from the waiting state.
    Space,

    /// Starts a round from the waiting state, same as [`KeyCode::Space`].
    Enter,
}

impl KeyCode {
    /// Returns `true` if this key terminates the control loop.
    pub fn is_quit(self) -> bool {
        matches!(self, Self::Escape | Self::CtrlC)
    }
}

//=== Tick ================================================================

/// One fixed-interval timer signal.
///
/// Carries no data; its arrival is the event. Each consumed `Tick` drives
/// exactly one physics step while a round is active.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tick;

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quit_keys_are_quit() {
        assert!(KeyCode::Escape.is_quit());
        assert!(KeyCode::CtrlC.is_quit());
    }

    #[test]
    fn gameplay_keys_are_not_quit() {
        assert!(!KeyCode::ArrowLeft.is_quit());
        assert!(!KeyCode::ArrowRight.is_quit());
        assert!(!KeyCode::Space.is_quit());
        assert!(!KeyCode::Enter.is_quit());
    }

    #[test]
    fn keycode_is_copy_and_eq() {
        let key = KeyCode::Space;
        let copied = key;
        assert_eq!(key, copied);
    }

    #[test]
    fn tick_is_copy_and_eq() {
        let tick = Tick;
        let copied = tick;
        assert_eq!(tick, copied);
    }
}
