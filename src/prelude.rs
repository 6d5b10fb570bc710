//=========================================================================
// Prelude
//=========================================================================
//
// Convenience module that re-exports commonly used types and traits.
//
// Usage:
//   use aetheric_bricks::prelude::*;
//
//=========================================================================

//=== Public API ==========================================================

// Game facade
pub use crate::engine::{Game, GameBuilder};

// Core state and events
pub use crate::core::event::{KeyCode, Tick};
pub use crate::core::state::{GameState, Point};

// Platform capability contract
pub use crate::core::bridge::{KeySource, PlatformError, RenderSink};
