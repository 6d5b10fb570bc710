//=========================================================================
// Controller
//=========================================================================
//
// The central state machine. Owns the single authoritative `GameState`,
// serializes the two event sources (keys and ticks) into it, and
// publishes a snapshot after every processed event.
//
// Architecture:
//   Receiver<KeyCode> ──┐
//                       ├── run() ──> Sender<GameState> ──> Renderer
//   Receiver<Tick>   ──┘
//
// States:
//   Waiting (running == false)  start keys arm the round; paddle keys
//                               still move the paddle
//   Active  (running == true)   every tick runs one physics step
//
// Pending key events outrank ticks; with neither pending the loop parks
// in a blocking select over both channels, so an idle game consumes no
// CPU between ticks.
//
//=========================================================================

//=== External Dependencies ===============================================

use crossbeam_channel::{select, Receiver, Sender, TryRecvError};
use log::{debug, info, warn};

//=== Internal Dependencies ===============================================

use super::event::{KeyCode, Tick};
use super::physics;
use super::state::GameState;

//=== LoopControl =========================================================

/// Control loop signal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopControl {
    Continue,
    Exit,
}

//=== ControlEvent ========================================================

/// One consumed event, after channel selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ControlEvent {
    Key(KeyCode),
    Tick,
}

//=== Controller ==========================================================

/// Owns the game state and runs the control loop.
///
/// The state never leaves this struct by reference; the renderer only
/// receives clones, so the controller needs no lock of any kind.
pub struct Controller {
    state: GameState,
}

impl Controller {
    //--- Construction -----------------------------------------------------

    pub fn new() -> Self {
        Self {
            state: GameState::new(),
        }
    }

    //--- Control Loop -----------------------------------------------------

    /// Consumes events until a quit key arrives or a channel disconnects.
    ///
    /// Each processed event except quit ends by publishing a snapshot.
    /// The snapshot channel is a rendezvous channel, so publishing also
    /// rate-limits this loop to the renderer's pace.
    pub fn run(
        mut self,
        keys: Receiver<KeyCode>,
        ticks: Receiver<Tick>,
        frames: Sender<GameState>,
    ) {
        info!(target: "controller", "Control loop started");

        loop {
            let event = match next_event(&keys, &ticks) {
                Some(event) => event,
                None => {
                    warn!(target: "controller", "Event channel disconnected, exiting");
                    break;
                }
            };

            match event {
                ControlEvent::Key(key) => {
                    if self.handle_key(key) == LoopControl::Exit {
                        info!(target: "controller", "Quit key received, exiting");
                        break;
                    }
                }
                ControlEvent::Tick => self.handle_tick(),
            }

            if frames.send(self.state.clone()).is_err() {
                warn!(target: "controller", "Renderer disconnected, exiting");
                break;
            }
        }
    }

    //--- Event Handlers ---------------------------------------------------

    /// Applies one key press to the state machine.
    ///
    /// Paddle movement works in both states and is deliberately not
    /// clamped to the board.
    fn handle_key(&mut self, key: KeyCode) -> LoopControl {
        match key {
            KeyCode::Escape | KeyCode::CtrlC => return LoopControl::Exit,
            KeyCode::ArrowLeft => self.state.paddle_x -= 3,
            KeyCode::ArrowRight => self.state.paddle_x += 3,
            KeyCode::Space | KeyCode::Enter => {
                if !self.state.running {
                    debug!(target: "controller", "Round started");
                    self.state.running = true;
                }
            }
        }
        LoopControl::Continue
    }

    /// Runs one physics step while a round is active. A waiting game
    /// still republishes its state so the renderer stays current.
    fn handle_tick(&mut self) {
        if self.state.running {
            physics::step(&mut self.state);
        }
    }

    //--- Test Accessors ---------------------------------------------------

    #[cfg(test)]
    pub(crate) fn state(&self) -> &GameState {
        &self.state
    }
}

impl Default for Controller {
    fn default() -> Self {
        Self::new()
    }
}

//=== Event Selection =====================================================

/// Picks the next event: a pending key wins over a pending tick; with
/// neither pending, blocks on both channels at once.
///
/// Returns `None` when a channel has disconnected.
fn next_event(keys: &Receiver<KeyCode>, ticks: &Receiver<Tick>) -> Option<ControlEvent> {
    match keys.try_recv() {
        Ok(key) => return Some(ControlEvent::Key(key)),
        Err(TryRecvError::Empty) => {}
        Err(TryRecvError::Disconnected) => return None,
    }

    select! {
        recv(keys) -> key => key.ok().map(ControlEvent::Key),
        recv(ticks) -> tick => tick.ok().map(|_| ControlEvent::Tick),
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::state::{Point, BRICK_COUNT, STARTING_LIVES};
    use crossbeam_channel::{bounded, unbounded};
    use std::thread;
    use std::time::Duration;

    //=====================================================================
    // State Machine Tests
    //=====================================================================

    /// Space in the waiting state starts the round and changes nothing
    /// else.
    #[test]
    fn space_starts_the_round() {
        let mut controller = Controller::new();
        let before = controller.state().clone();

        assert_eq!(controller.handle_key(KeyCode::Space), LoopControl::Continue);

        assert!(controller.state().running);
        assert_eq!(controller.state().paddle_x, before.paddle_x);
        assert_eq!(controller.state().ball, before.ball);
        assert_eq!(controller.state().score, before.score);
        assert_eq!(controller.state().bricks, before.bricks);
    }

    #[test]
    fn enter_starts_the_round() {
        let mut controller = Controller::new();
        controller.handle_key(KeyCode::Enter);
        assert!(controller.state().running);
    }

    #[test]
    fn quit_keys_exit_the_loop() {
        let mut controller = Controller::new();
        assert_eq!(controller.handle_key(KeyCode::Escape), LoopControl::Exit);
        assert_eq!(controller.handle_key(KeyCode::CtrlC), LoopControl::Exit);
    }

    #[test]
    fn arrows_move_the_paddle_in_both_states() {
        let mut controller = Controller::new();
        let start = controller.state().paddle_x;

        controller.handle_key(KeyCode::ArrowLeft);
        assert_eq!(controller.state().paddle_x, start - 3);

        controller.handle_key(KeyCode::Space);
        controller.handle_key(KeyCode::ArrowRight);
        controller.handle_key(KeyCode::ArrowRight);
        assert_eq!(controller.state().paddle_x, start + 3);
    }

    /// The paddle may leave the visible board.
    #[test]
    fn paddle_is_not_clamped() {
        let mut controller = Controller::new();
        for _ in 0..20 {
            controller.handle_key(KeyCode::ArrowLeft);
        }
        assert!(controller.state().paddle_x < 0);
    }

    #[test]
    fn tick_while_waiting_changes_nothing() {
        let mut controller = Controller::new();
        let before = controller.state().clone();
        controller.handle_tick();
        assert_eq!(controller.state(), &before);
    }

    #[test]
    fn tick_while_active_advances_the_ball() {
        let mut controller = Controller::new();
        controller.handle_key(KeyCode::Space);
        let ball = controller.state().ball;
        controller.handle_tick();
        assert_ne!(controller.state().ball, ball);
    }

    //=====================================================================
    // Control Loop Tests
    //=====================================================================

    /// Drives the full loop over real rendezvous channels: start, tick,
    /// move, quit.
    #[test]
    fn loop_publishes_a_snapshot_per_event() {
        let (key_tx, key_rx) = bounded(0);
        let (tick_tx, tick_rx) = bounded(0);
        let (frame_tx, frame_rx) = bounded::<GameState>(0);

        let handle = thread::spawn(move || Controller::new().run(key_rx, tick_rx, frame_tx));

        key_tx.send(KeyCode::Space).unwrap();
        let frame = frame_rx.recv().unwrap();
        assert!(frame.running);

        tick_tx.send(Tick).unwrap();
        let frame = frame_rx.recv().unwrap();
        assert_eq!(frame.ball, Point::new(41, 15));

        key_tx.send(KeyCode::ArrowLeft).unwrap();
        let frame = frame_rx.recv().unwrap();
        assert_eq!(frame.paddle_x, 32);

        key_tx.send(KeyCode::Escape).unwrap();
        handle.join().unwrap();

        // No snapshot is published for the quit key.
        assert!(frame_rx.recv().is_err());
    }

    /// The loop exits cleanly when its sources go away.
    #[test]
    fn loop_exits_on_source_disconnect() {
        let (key_tx, key_rx) = bounded::<KeyCode>(0);
        let (tick_tx, tick_rx) = bounded::<Tick>(0);
        let (frame_tx, _frame_rx) = unbounded();

        let handle = thread::spawn(move || Controller::new().run(key_rx, tick_rx, frame_tx));

        drop(key_tx);
        drop(tick_tx);
        handle.join().unwrap();
    }

    /// The loop exits cleanly when the renderer goes away.
    #[test]
    fn loop_exits_on_renderer_disconnect() {
        let (key_tx, key_rx) = bounded(0);
        let (_tick_tx, tick_rx) = bounded::<Tick>(0);
        let (frame_tx, frame_rx) = bounded::<GameState>(0);

        let handle = thread::spawn(move || Controller::new().run(key_rx, tick_rx, frame_tx));

        drop(frame_rx);
        key_tx.send(KeyCode::Space).unwrap();
        handle.join().unwrap();
    }

    /// A waiting game republishes its unchanged state on every tick.
    #[test]
    fn waiting_game_still_publishes_on_ticks() {
        let (_key_tx, key_rx) = bounded::<KeyCode>(0);
        let (tick_tx, tick_rx) = bounded(0);
        let (frame_tx, frame_rx) = bounded::<GameState>(0);

        let handle = thread::spawn(move || Controller::new().run(key_rx, tick_rx, frame_tx));

        tick_tx.send(Tick).unwrap();
        let frame = frame_rx.recv_timeout(Duration::from_secs(1)).unwrap();
        assert!(!frame.running);
        assert_eq!(frame.lives, STARTING_LIVES);
        assert_eq!(frame.bricks.len(), BRICK_COUNT);

        drop(tick_tx);
        handle.join().unwrap();
    }
}
