//=========================================================================
// Platform Event Mapper
//
// Converts crossterm input events to the game's `KeyCode` identities.
// Provides a clean separation between terminal-specific input and the
// core's internal event representation.
//
// Responsibilities:
// - Translate the six recognized key presses
// - Ignore everything else (releases, repeats, resizes, unmapped keys)
//
//=========================================================================

use crossterm::event::{Event, KeyCode as CtKeyCode, KeyEventKind, KeyModifiers};

use crate::core::event::KeyCode;

//=== Event Conversion ====================================================
//
// Only `KeyEventKind::Press` counts as a key press; key releases and
// repeats never reach the controller. Ctrl-C is the single modified
// combination with a meaning; any other modifier drops the event.
//

pub(crate) fn map_event(event: &Event) -> Option<KeyCode> {
    let Event::Key(key) = event else {
        return None;
    };

    if key.kind != KeyEventKind::Press {
        return None;
    }

    if key.modifiers == KeyModifiers::CONTROL && key.code == CtKeyCode::Char('c') {
        return Some(KeyCode::CtrlC);
    }

    if key.modifiers != KeyModifiers::NONE {
        return None;
    }

    match key.code {
        CtKeyCode::Esc => Some(KeyCode::Escape),
        CtKeyCode::Left => Some(KeyCode::ArrowLeft),
        CtKeyCode::Right => Some(KeyCode::ArrowRight),
        CtKeyCode::Char(' ') => Some(KeyCode::Space),
        CtKeyCode::Enter => Some(KeyCode::Enter),
        _ => None,
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyEvent;

    //--- Test Helpers -----------------------------------------------------

    fn press(code: CtKeyCode) -> Event {
        Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    //--- Tests ------------------------------------------------------------

    #[test]
    fn recognized_keys_map_to_their_identities() {
        assert_eq!(map_event(&press(CtKeyCode::Esc)), Some(KeyCode::Escape));
        assert_eq!(map_event(&press(CtKeyCode::Left)), Some(KeyCode::ArrowLeft));
        assert_eq!(
            map_event(&press(CtKeyCode::Right)),
            Some(KeyCode::ArrowRight)
        );
        assert_eq!(map_event(&press(CtKeyCode::Char(' '))), Some(KeyCode::Space));
        assert_eq!(map_event(&press(CtKeyCode::Enter)), Some(KeyCode::Enter));
    }

    #[test]
    fn ctrl_c_maps_to_quit() {
        let event = Event::Key(KeyEvent::new(
            CtKeyCode::Char('c'),
            KeyModifiers::CONTROL,
        ));
        assert_eq!(map_event(&event), Some(KeyCode::CtrlC));
    }

    #[test]
    fn unmapped_keys_are_dropped() {
        assert_eq!(map_event(&press(CtKeyCode::Char('w'))), None);
        assert_eq!(map_event(&press(CtKeyCode::Up)), None);
        assert_eq!(map_event(&press(CtKeyCode::Tab)), None);
    }

    #[test]
    fn modified_keys_are_dropped() {
        let event = Event::Key(KeyEvent::new(
            CtKeyCode::Char(' '),
            KeyModifiers::SHIFT,
        ));
        assert_eq!(map_event(&event), None);
    }

    #[test]
    fn releases_and_repeats_are_dropped() {
        for kind in [KeyEventKind::Release, KeyEventKind::Repeat] {
            let event = Event::Key(KeyEvent::new_with_kind(
                CtKeyCode::Char(' '),
                KeyModifiers::NONE,
                kind,
            ));
            assert_eq!(map_event(&event), None);
        }
    }

    #[test]
    fn non_key_events_are_dropped() {
        assert_eq!(map_event(&Event::Resize(80, 25)), None);
        assert_eq!(map_event(&Event::FocusGained), None);
    }
}
