//! Overlay panels and their shared backdrop.

use serde::{Deserialize, Serialize};

/// The overlay panels a page may carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Panel {
    SideMenu,
    History,
}

impl Panel {
    pub fn all() -> &'static [Panel] {
        &[Panel::SideMenu, Panel::History]
    }

    pub fn title(&self) -> &'static str {
        match self {
            Panel::SideMenu => "Menu",
            Panel::History => "History",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
struct PanelSlot {
    mounted: bool,
    visible: bool,
}

/// Visibility of the overlay panels and the backdrop behind them.
///
/// Only exists on pages that carry a backdrop; a panel whose surface is not
/// mounted ignores `open` and `toggle`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LayerStack {
    side_menu: PanelSlot,
    history: PanelSlot,
    backdrop: bool,
}

impl LayerStack {
    pub fn new(side_menu_mounted: bool, history_mounted: bool) -> Self {
        Self {
            side_menu: PanelSlot {
                mounted: side_menu_mounted,
                visible: false,
            },
            history: PanelSlot {
                mounted: history_mounted,
                visible: false,
            },
            backdrop: false,
        }
    }

    fn slot(&self, panel: Panel) -> &PanelSlot {
        match panel {
            Panel::SideMenu => &self.side_menu,
            Panel::History => &self.history,
        }
    }

    fn slot_mut(&mut self, panel: Panel) -> &mut PanelSlot {
        match panel {
            Panel::SideMenu => &mut self.side_menu,
            Panel::History => &mut self.history,
        }
    }

    pub fn is_mounted(&self, panel: Panel) -> bool {
        self.slot(panel).mounted
    }

    pub fn is_visible(&self, panel: Panel) -> bool {
        self.slot(panel).visible
    }

    pub fn backdrop_visible(&self) -> bool {
        self.backdrop
    }

    /// Panels currently shown, in stacking order.
    pub fn visible_panels(&self) -> Vec<Panel> {
        Panel::all()
            .iter()
            .copied()
            .filter(|panel| self.is_visible(*panel))
            .collect()
    }

    /// Show `panel` and the backdrop. Opening never hides anything.
    pub fn open(&mut self, panel: Panel) {
        let slot = self.slot_mut(panel);
        if !slot.mounted {
            return;
        }
        slot.visible = true;
        self.backdrop = true;
    }

    /// Flip `panel`; the backdrop follows the panel's new state.
    pub fn toggle(&mut self, panel: Panel) {
        let slot = self.slot_mut(panel);
        if !slot.mounted {
            return;
        }
        slot.visible = !slot.visible;
        let visible = slot.visible;
        self.backdrop = visible;
    }

    /// Hide every panel and the backdrop.
    pub fn close_all(&mut self) {
        self.side_menu.visible = false;
        self.history.visible = false;
        self.backdrop = false;
    }
}
