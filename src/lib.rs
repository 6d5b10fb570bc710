//=========================================================================
// Aetheric Bricks — Library Root
//
// This crate defines the public API surface of Aetheric Bricks, a
// terminal block-breaker built around a multithreaded controller core.
//
// Responsibilities:
// - Expose the game interface (`Game`, `GameBuilder`)
// - Keep internal modules (like `platform`) hidden from end users
// - Provide clean separation between the high-level game facade
//   and lower-level subsystems (core logic, rendering, event sources)
//
// Typical usage:
// ```no_run
// use aetheric_bricks::GameBuilder;
//
// fn main() {
//     GameBuilder::new().build().run().unwrap();
// }
// ```
//
//=========================================================================

//--- Public Modules ------------------------------------------------------
//
// `core` contains the platform-free game logic (state, physics, the
// controller, and the capability contract). It is exposed publicly for
// embedding and testing, but normal application code will mostly use the
// top-level `Game` facade.
//
pub mod core;
pub mod prelude;

//--- Internal Modules ----------------------------------------------------
//
// `platform` contains the crossterm-specific terminal integration and is
// kept private, as it is not part of the public API surface.
//
// `engine` defines the game entry point and thread wiring; `render` and
// `sources` hold the consumer and producer threads around the core.
//
mod engine;
mod platform;
mod render;
mod sources;

//--- Public Exports ------------------------------------------------------
//
// Re-exports the `Game` facade as the main entry point for applications.
// This allows users to simply `use aetheric_bricks::GameBuilder;` without
// having to know the internal module structure.
//
pub use engine::{Game, GameBuilder};
