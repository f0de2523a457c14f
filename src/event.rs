use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::app::{InputMode, ViewMode};

/// Everything a key press can ask the app to do.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Action {
    Quit,
    ShowView(ViewMode),
    ToggleView,
    Help,
    CloseHelp,
    Today,
    Left,
    Right,
    Up,
    Down,
    PrevMonth,
    NextMonth,
    Select,
    New,
    FormChar(char),
    FormBackspace,
    FormNextField,
    FormPrevField,
    FormCycle(bool),
    FormSubmit,
    FormCancel,
}

pub fn poll_event(timeout: Duration) -> color_eyre::Result<Option<Event>> {
    if event::poll(timeout)? {
        Ok(Some(event::read()?))
    } else {
        Ok(None)
    }
}

/// Next key press, skipping releases, repeats and non-key events.
pub fn next_key_event(timeout: Duration) -> color_eyre::Result<Option<KeyEvent>> {
    loop {
        match poll_event(timeout)? {
            Some(Event::Key(key)) if key.kind == KeyEventKind::Press => return Ok(Some(key)),
            Some(_) => continue,
            None => return Ok(None),
        }
    }
}

/// Map a key to an action for the current mode. `help_open` swallows every
/// key except the ones that close the overlay.
pub fn action_for(key: KeyEvent, mode: InputMode, help_open: bool) -> Option<Action> {
    if help_open {
        return match key.code {
            KeyCode::Esc | KeyCode::Char('?') | KeyCode::Char('q') => Some(Action::CloseHelp),
            _ => None,
        };
    }

    match mode {
        InputMode::Normal => normal_action(key.code, key.modifiers),
        InputMode::EventDialog | InputMode::ScheduleDialog => form_action(key.code, key.modifiers),
    }
}

fn normal_action(code: KeyCode, modifiers: KeyModifiers) -> Option<Action> {
    let action = match (code, modifiers) {
        (KeyCode::Char('q'), _) | (KeyCode::Char('c'), KeyModifiers::CONTROL) => Action::Quit,
        (KeyCode::Char('1'), _) => Action::ShowView(ViewMode::Calendar),
        (KeyCode::Char('2'), _) => Action::ShowView(ViewMode::Schedule),
        (KeyCode::Tab, _) => Action::ToggleView,
        (KeyCode::Char('t'), _) => Action::Today,
        (KeyCode::Char('n'), _) => Action::New,
        (KeyCode::Enter, _) => Action::Select,
        (KeyCode::Left, _) | (KeyCode::Char('h'), _) => Action::Left,
        (KeyCode::Right, _) | (KeyCode::Char('l'), _) => Action::Right,
        (KeyCode::Up, _) | (KeyCode::Char('k'), _) => Action::Up,
        (KeyCode::Down, _) | (KeyCode::Char('j'), _) => Action::Down,
        (KeyCode::Char('['), _) => Action::PrevMonth,
        (KeyCode::Char(']'), _) => Action::NextMonth,
        (KeyCode::Char('?'), _) => Action::Help,
        _ => return None,
    };
    Some(action)
}

fn form_action(code: KeyCode, modifiers: KeyModifiers) -> Option<Action> {
    let action = match code {
        KeyCode::Char('c') if modifiers.contains(KeyModifiers::CONTROL) => Action::Quit,
        KeyCode::Esc => Action::FormCancel,
        KeyCode::Enter => Action::FormSubmit,
        KeyCode::Tab | KeyCode::Down => Action::FormNextField,
        KeyCode::BackTab | KeyCode::Up => Action::FormPrevField,
        KeyCode::Left => Action::FormCycle(false),
        KeyCode::Right => Action::FormCycle(true),
        KeyCode::Backspace => Action::FormBackspace,
        KeyCode::Char(c) => Action::FormChar(c),
        _ => return None,
    };
    Some(action)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn letters_navigate_in_normal_mode_and_type_in_forms() {
        let k = key(KeyCode::Char('k'));
        assert_eq!(action_for(k, InputMode::Normal, false), Some(Action::Up));
        assert_eq!(
            action_for(k, InputMode::EventDialog, false),
            Some(Action::FormChar('k'))
        );
        assert_eq!(
            action_for(key(KeyCode::Char('q')), InputMode::ScheduleDialog, false),
            Some(Action::FormChar('q'))
        );
    }

    #[test]
    fn help_overlay_swallows_keys() {
        assert_eq!(action_for(key(KeyCode::Char('n')), InputMode::Normal, true), None);
        assert_eq!(
            action_for(key(KeyCode::Esc), InputMode::Normal, true),
            Some(Action::CloseHelp)
        );
    }

    #[test]
    fn esc_closes_popups_but_never_quits() {
        let esc = key(KeyCode::Esc);
        assert_eq!(action_for(esc, InputMode::Normal, false), None);
        assert_eq!(action_for(esc, InputMode::Normal, true), Some(Action::CloseHelp));
        assert_eq!(
            action_for(esc, InputMode::EventDialog, false),
            Some(Action::FormCancel)
        );
    }

    #[test]
    fn ctrl_c_always_quits() {
        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(action_for(ctrl_c, InputMode::Normal, false), Some(Action::Quit));
        assert_eq!(action_for(ctrl_c, InputMode::EventDialog, false), Some(Action::Quit));
    }

    #[test]
    fn enter_selects_or_submits() {
        let enter = key(KeyCode::Enter);
        assert_eq!(action_for(enter, InputMode::Normal, false), Some(Action::Select));
        assert_eq!(
            action_for(enter, InputMode::ScheduleDialog, false),
            Some(Action::FormSubmit)
        );
    }
}
