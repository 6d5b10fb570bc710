//=========================================================================
// Aetheric Bricks
//
// Main entry point and coordinator for the game.
//
// Architecture:
// ```text
//     GameBuilder  ──build()──>  Game  ──run()──>  [Runtime]
//         │                        │
//         └─ with_tick_interval()  └─ spawns timer/input/render threads
//                                     runs the controller inline
//                                     blocks until a quit key
// ```
//
//=========================================================================

//=== Standard Library Imports ============================================

use std::sync::{Arc, Mutex};
use std::thread;
use std::time::Duration;

//=== External Dependencies ===============================================

use crossbeam_channel::bounded;
use log::{error, info, warn};

//=== Internal Dependencies ===============================================

use crate::core::bridge::{KeySource, PlatformError, RenderSink};
use crate::core::controller::Controller;
use crate::platform::{TerminalKeys, TerminalScreen};
use crate::render::Renderer;
use crate::sources::{InputSource, TimerSource};

//=== GameBuilder =========================================================

/// Builder for configuring and constructing a [`Game`].
///
/// # Default Values
///
/// - **Tick interval**: 100 ms (one physics step per tick)
///
/// # Examples
///
/// ```no_run
/// use aetheric_bricks::GameBuilder;
///
/// GameBuilder::new().build().run().unwrap();
/// ```
///
/// Slower pacing:
/// ```no_run
/// # use aetheric_bricks::GameBuilder;
/// # use std::time::Duration;
/// GameBuilder::new()
///     .with_tick_interval(Duration::from_millis(150))
///     .build()
///     .run()
///     .unwrap();
/// ```
pub struct GameBuilder {
    tick_interval: Duration,
}

impl GameBuilder {
    /// Creates a new builder with default settings.
    pub fn new() -> Self {
        Self {
            tick_interval: Duration::from_millis(100),
        }
    }

    /// Sets the timer period driving the physics.
    ///
    /// The timer sleeps the full interval between ticks; there is no
    /// drift compensation, so this is a lower bound on tick spacing.
    ///
    /// Default: 100 ms
    ///
    /// # Panics
    ///
    /// Panics if `interval` is zero.
    pub fn with_tick_interval(mut self, interval: Duration) -> Self {
        assert!(!interval.is_zero(), "Tick interval must be non-zero");
        self.tick_interval = interval;
        self
    }

    /// Builds the game instance.
    pub fn build(self) -> Game {
        info!("Building game (tick interval: {:?})", self.tick_interval);
        Game {
            tick_interval: self.tick_interval,
        }
    }
}

impl Default for GameBuilder {
    fn default() -> Self {
        Self::new()
    }
}

//=== Game ================================================================

/// Game runtime.
///
/// Wires the four concurrent units together and blocks until the player
/// quits. Create via [`GameBuilder`].
///
/// # Architecture
///
/// ```text
/// Game (calling thread)
///   ├─► TimerSource  (thread, Tick every interval)
///   ├─► InputSource  (thread, KeyCode per recognized press)
///   ├─► Renderer     (thread, frame per snapshot)
///   └─  Controller   (inline: the control loop)
///
/// Communication: rendezvous channels (capacity 0)
/// ```
pub struct Game {
    tick_interval: Duration,
}

impl Game {
    //--- Execution --------------------------------------------------------

    /// Runs the game on the real terminal and blocks until the player
    /// quits.
    ///
    /// # Errors
    ///
    /// Returns [`PlatformError`] if the terminal cannot be initialized
    /// (fatal, nothing is spawned) or cannot be restored afterwards.
    pub fn run(self) -> Result<(), PlatformError> {
        self.run_with(TerminalScreen::new(), TerminalKeys::new())
    }

    /// Runs the game against arbitrary capability implementations.
    ///
    /// # Lifecycle
    ///
    /// 1. Initializes the render sink (fatal on failure)
    /// 2. Creates the three rendezvous channels
    /// 3. Spawns timer, input and render threads
    /// 4. Runs the controller inline until a quit key or disconnect
    /// 5. Drops the snapshot channel, joins the renderer, closes the sink
    ///
    /// The timer and input threads are not joined: they exit on channel
    /// disconnect or are abandoned at process exit while blocked on
    /// their capability.
    pub fn run_with<S, K>(self, sink: S, keys: K) -> Result<(), PlatformError>
    where
        S: RenderSink + Send + 'static,
        K: KeySource + Send + 'static,
    {
        //--- 1. Initialize the render sink --------------------------------
        let mut sink = sink;
        sink.init()?;
        let sink = Arc::new(Mutex::new(sink));

        //--- 2. Create communication channels -----------------------------
        // Capacity 0: every hand-off is a rendezvous, so the controller
        // is paced by the renderer and the timer by the controller.
        let (tick_tx, tick_rx) = bounded(0);
        let (key_tx, key_rx) = bounded(0);
        let (frame_tx, frame_rx) = bounded(0);

        //--- 3. Spawn the concurrent units --------------------------------
        TimerSource::new(self.tick_interval).spawn(tick_tx);
        InputSource::new(keys).spawn(key_tx);

        let renderer = Renderer::new(Arc::clone(&sink));
        let render_handle = thread::spawn(move || renderer.run(frame_rx));

        info!("Runtime started (tick interval: {:?})", self.tick_interval);

        //--- 4. Run the control loop inline -------------------------------
        Controller::new().run(key_rx, tick_rx, frame_tx);

        //--- 5. Shutdown: drain the renderer, restore the terminal --------
        // `frame_tx` was consumed by the controller; its drop lets the
        // renderer's receive loop finish.
        if render_handle.join().is_err() {
            error!("Render thread panicked");
        }

        match sink.lock() {
            Ok(mut screen) => screen.close()?,
            Err(poisoned) => {
                warn!("Render sink mutex poisoned during shutdown");
                poisoned.into_inner().close()?;
            }
        }

        info!("Shutdown complete");
        Ok(())
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
