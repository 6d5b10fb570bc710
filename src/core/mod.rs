//=========================================================================
// Core Game Logic
//
// Platform-free heart of the game: the state model, the deterministic
// physics step, the controller state machine, and the capability
// contract the platform layer implements.
//
// Responsibilities:
// - Own and mutate the single authoritative `GameState`
// - Resolve ball/wall/paddle/brick collisions per tick
// - Define the render-sink and key-source capabilities
//
// Notes:
// Nothing in this module touches a terminal, spawns a thread, or sleeps.
// All concurrency lives in `sources`, `render` and the engine facade;
// all OS specifics live in `platform`.
//
//=========================================================================

//=== Submodules ==========================================================

pub mod bridge;
pub mod controller;
pub mod event;
pub mod physics;
pub mod state;

//=== Public API ==========================================================

pub use bridge::{KeySource, PlatformError, RenderSink};
pub use controller::Controller;
pub use event::{KeyCode, Tick};
pub use state::{GameState, Point};
