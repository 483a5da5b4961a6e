//! Event types for the TUI event loop.

use crate::lists::LoadedList;
use crossterm::event::KeyEvent;

#[derive(Debug, Clone)]
pub enum TuiEvent {
    Input(KeyEvent),
    Click { column: u16, row: u16 },
    Resize { width: u16, height: u16 },
    Loaded { session: u64, list: LoadedList },
}
