//! Page actions and their dispatch table.

use crate::notifications::{ToastState, DEFAULT_TOAST_MESSAGE};
use crate::state::App;
use std::fmt;
use std::str::FromStr;
use wakeel_core::Panel;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ActionId {
    OpenMenu,
    CloseLayers,
    ToggleHistory,
    Toast,
}

/// Handler invoked for an action; the payload is the action's message, if any.
pub type ActionHandler = fn(&mut App, Option<&str>);

impl ActionId {
    pub fn all() -> &'static [ActionId] {
        &[
            ActionId::OpenMenu,
            ActionId::CloseLayers,
            ActionId::ToggleHistory,
            ActionId::Toast,
        ]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ActionId::OpenMenu => "open-menu",
            ActionId::CloseLayers => "close-layers",
            ActionId::ToggleHistory => "toggle-history",
            ActionId::Toast => "toast",
        }
    }

    pub fn handler(&self) -> ActionHandler {
        match self {
            ActionId::OpenMenu => open_menu,
            ActionId::CloseLayers => close_layers,
            ActionId::ToggleHistory => toggle_history,
            ActionId::Toast => toast,
        }
    }
}

impl fmt::Display for ActionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ActionId {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ActionId::all()
            .iter()
            .copied()
            .find(|action| action.as_str() == s)
            .ok_or(())
    }
}

fn open_menu(app: &mut App, _payload: Option<&str>) {
    if let Some(layers) = app.layers.as_mut() {
        layers.open(Panel::SideMenu);
    }
}

fn close_layers(app: &mut App, _payload: Option<&str>) {
    if let Some(layers) = app.layers.as_mut() {
        layers.close_all();
    }
}

fn toggle_history(app: &mut App, _payload: Option<&str>) {
    if let Some(layers) = app.layers.as_mut() {
        layers.toggle(Panel::History);
    }
}

fn toast(app: &mut App, payload: Option<&str>) {
    let message = payload.unwrap_or(DEFAULT_TOAST_MESSAGE).to_string();
    app.show_toast(message, ToastState::Normal);
}
