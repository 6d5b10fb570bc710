//=========================================================================
// Event Sources
//=========================================================================
//
// The two producer threads feeding the controller: a fixed-cadence timer
// and a key-press forwarder over the key-event capability.
//
// Both send over rendezvous channels, so a send blocks until the
// controller takes the event; actual tick spacing is therefore the
// period plus whatever the controller spent on the previous event.
//
// Neither source is joined on shutdown. They end on their own when a
// channel disconnects, or are abandoned at process exit while blocked,
// exactly like the capability they sit on.
//
//=========================================================================

//=== Standard Library Imports ============================================

use std::thread::{self, JoinHandle};
use std::time::Duration;

//=== External Dependencies ===============================================

use crossbeam_channel::Sender;
use log::{debug, error, info};

//=== Internal Dependencies ===============================================

use crate::core::bridge::KeySource;
use crate::core::event::{KeyCode, Tick};

//=== TimerSource =========================================================

/// Emits a `Tick` every `interval`, sleeping the full interval between
/// sends. No drift compensation.
pub struct TimerSource {
    interval: Duration,
}

impl TimerSource {
    pub fn new(interval: Duration) -> Self {
        Self { interval }
    }

    /// Starts the timer thread. It runs until the receiving side of
    /// `ticks` disconnects.
    pub fn spawn(self, ticks: Sender<Tick>) -> JoinHandle<()> {
        thread::spawn(move || {
            info!(target: "sources", "Timer started ({:?} period)", self.interval);
            loop {
                if ticks.send(Tick).is_err() {
                    debug!(target: "sources", "Tick channel disconnected, timer exiting");
                    break;
                }
                thread::sleep(self.interval);
            }
        })
    }
}

//=== InputSource =========================================================

/// Forwards recognized key presses from the key-event capability.
///
/// Unrecognized events come back from the capability as `None` and are
/// dropped here without a trace; that is the normal case, not an error.
pub struct InputSource<K: KeySource + Send + 'static> {
    keys: K,
}

impl<K: KeySource + Send + 'static> InputSource<K> {
    pub fn new(keys: K) -> Self {
        Self { keys }
    }

    /// Starts the input thread. It runs until the capability fails or
    /// the receiving side of `out` disconnects.
    pub fn spawn(mut self, out: Sender<KeyCode>) -> JoinHandle<()> {
        thread::spawn(move || {
            info!(target: "sources", "Input forwarder started");
            loop {
                match self.keys.read_key() {
                    Ok(Some(key)) => {
                        if out.send(key).is_err() {
                            debug!(target: "sources", "Key channel disconnected, input exiting");
                            break;
                        }
                    }
                    Ok(None) => {}
                    Err(e) => {
                        error!(target: "sources", "Key capability failed: {}", e);
                        break;
                    }
                }
            }
        })
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
