//=========================================================================
// Platform Bridge
//=========================================================================
//
// Bridges the platform layer (crossterm/termion/etc.) with core logic.
//
// This module defines the contract between platform implementations and
// the core, enabling terminal backends to be swapped without changing
// core code (Dependency Inversion Principle).
//
// Components:
// - `interface`: capability traits and error definitions (the contract)
//
//=========================================================================

//=== Module Declarations =================================================

pub mod interface;

//=== Public API ==========================================================

pub use interface::{KeySource, PlatformError, RenderSink};
