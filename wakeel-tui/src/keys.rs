//! Keybinding definitions for the TUI.

use crate::actions::ActionId;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// How keys are interpreted, derived from the focused surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    Navigate,
    Code,
    Text,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    Quit,
    NextFocus,
    PrevFocus,
    NextPage,
    PrevPage,
    SwitchTab(usize),
    MoveUp,
    MoveDown,
    MoveLeft,
    MoveRight,
    Select,
    Trigger(ActionId),
    CodeInput(char),
    CodeDelete,
    TextInput(KeyEvent),
}

pub fn map_key(event: KeyEvent, mode: InputMode) -> Option<KeyAction> {
    let KeyEvent { code, modifiers, .. } = event;

    if modifiers.contains(KeyModifiers::CONTROL) {
        return match code {
            KeyCode::Char('c') => Some(KeyAction::Quit),
            _ if mode == InputMode::Text => Some(KeyAction::TextInput(event)),
            _ => None,
        };
    }

    match code {
        KeyCode::Tab => return Some(KeyAction::NextFocus),
        KeyCode::BackTab => return Some(KeyAction::PrevFocus),
        KeyCode::Esc => return Some(KeyAction::Trigger(ActionId::CloseLayers)),
        _ => {}
    }

    match mode {
        InputMode::Code => match code {
            KeyCode::Backspace | KeyCode::Delete => Some(KeyAction::CodeDelete),
            KeyCode::Char(c) => Some(KeyAction::CodeInput(c)),
            _ => None,
        },
        InputMode::Text => match code {
            KeyCode::Enter => None,
            _ => Some(KeyAction::TextInput(event)),
        },
        InputMode::Navigate => match code {
            KeyCode::Char('q') => Some(KeyAction::Quit),
            KeyCode::Char('m') => Some(KeyAction::Trigger(ActionId::OpenMenu)),
            KeyCode::Char('y') => Some(KeyAction::Trigger(ActionId::ToggleHistory)),
            KeyCode::Char('t') => Some(KeyAction::Trigger(ActionId::Toast)),
            KeyCode::Char(']') => Some(KeyAction::NextPage),
            KeyCode::Char('[') => Some(KeyAction::PrevPage),
            KeyCode::Enter | KeyCode::Char(' ') => Some(KeyAction::Select),
            KeyCode::Up | KeyCode::Char('k') => Some(KeyAction::MoveUp),
            KeyCode::Down | KeyCode::Char('j') => Some(KeyAction::MoveDown),
            KeyCode::Left | KeyCode::Char('h') => Some(KeyAction::MoveLeft),
            KeyCode::Right | KeyCode::Char('l') => Some(KeyAction::MoveRight),
            KeyCode::Char(c @ '1'..='4') => {
                Some(KeyAction::SwitchTab(usize::from(c as u8 - b'1')))
            }
            _ => None,
        },
    }
}
