use crate::app::App;
use crossterm::event::KeyCode::Char;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// What the event loop should do after a key press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyOutcome {
    Quit,
    Redraw,
    Ignore,
}

pub fn handle_key_bindings(key_event: KeyEvent, app: &mut App) -> KeyOutcome {
    if key_event.kind == KeyEventKind::Release {
        return KeyOutcome::Ignore;
    }

    match (key_event.code, key_event.modifiers) {
        (Char('q'), _) | (KeyCode::Esc, _) | (Char('c'), KeyModifiers::CONTROL) => KeyOutcome::Quit,
        (Char('g'), _) => {
            app.toggle_goals();
            KeyOutcome::Redraw
        }
        (Char('f'), _) => {
            app.toggle_full_screen();
            KeyOutcome::Redraw
        }
        (Char('"'), _) => {
            app.toggle_logs();
            KeyOutcome::Redraw
        }
        _ => KeyOutcome::Ignore,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pipeline::build_figure;
    use crate::pitch::PitchProfile;
    use statsbomb_api::{EventDataset, SHOTS};

    fn app() -> App {
        let mut ds = EventDataset::new(1);
        ds.insert(SHOTS, Vec::new());
        App::new(build_figure(&ds, &PitchProfile::provider()).unwrap())
    }

    fn press(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
        KeyEvent::new(code, modifiers)
    }

    #[test]
    fn quit_keys() {
        let mut app = app();
        for key in [
            press(Char('q'), KeyModifiers::NONE),
            press(KeyCode::Esc, KeyModifiers::NONE),
            press(Char('c'), KeyModifiers::CONTROL),
        ] {
            assert_eq!(handle_key_bindings(key, &mut app), KeyOutcome::Quit);
        }
    }

    #[test]
    fn toggles_flip_view_state() {
        let mut app = app();
        assert!(app.show_goals && !app.show_logs && !app.full_screen);

        handle_key_bindings(press(Char('g'), KeyModifiers::NONE), &mut app);
        handle_key_bindings(press(Char('"'), KeyModifiers::NONE), &mut app);
        assert_eq!(handle_key_bindings(press(Char('f'), KeyModifiers::NONE), &mut app), KeyOutcome::Redraw);
        assert!(!app.show_goals && app.show_logs && app.full_screen);
    }

    #[test]
    fn other_keys_are_ignored() {
        let mut app = app();
        assert_eq!(handle_key_bindings(press(Char('x'), KeyModifiers::NONE), &mut app), KeyOutcome::Ignore);
        let mut release = press(Char('g'), KeyModifiers::NONE);
        release.kind = KeyEventKind::Release;
        assert_eq!(handle_key_bindings(release, &mut app), KeyOutcome::Ignore);
        assert!(app.show_goals);
    }
}
