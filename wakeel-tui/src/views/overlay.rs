//! Backdrop and slide-in sheets.

use crate::nav::Page;
use crate::state::App;
use ratatui::{
    layout::Rect,
    style::Style,
    widgets::{Block, Borders, Clear, List, ListItem},
    Frame,
};
use wakeel_core::{ChatSummary, Panel};

/// Share of the frame width a sheet occupies, in percent.
const SHEET_WIDTH_PERCENT: u16 = 40;

/// Screen area of `panel` within a frame of size `area`. The side menu slides
/// in from the right edge and the history sheet from the left.
pub fn panel_area(panel: Panel, area: Rect) -> Rect {
    let width = (area.width.saturating_mul(SHEET_WIDTH_PERCENT) / 100).max(1).min(area.width);
    let x = match panel {
        Panel::SideMenu => area.x + area.width - width,
        Panel::History => area.x,
    };
    Rect::new(x, area.y, width, area.height)
}

pub fn render(f: &mut Frame<'_>, app: &App, area: Rect) {
    let Some(layers) = &app.layers else {
        return;
    };

    // Sheets draw from their own flags; the backdrop can be hidden while a
    // sheet stays open.
    if layers.backdrop_visible() {
        f.render_widget(Clear, area);
        f.render_widget(
            Block::default().style(Style::default().bg(app.palette.backdrop)),
            area,
        );
    }

    for panel in layers.visible_panels() {
        let sheet = panel_area(panel, area);
        let entries: Vec<ListItem> = match panel {
            Panel::SideMenu => Page::all()
                .iter()
                .map(|page| ListItem::new(page.title()))
                .collect(),
            Panel::History => ChatSummary::seed()
                .into_iter()
                .map(|chat| ListItem::new(chat.name))
                .collect(),
        };
        let list = List::new(entries)
            .style(Style::default().fg(app.palette.text).bg(app.palette.surface))
            .block(
                Block::default()
                    .title(panel.title())
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(app.palette.border_focus)),
            );
        f.render_widget(Clear, sheet);
        f.render_widget(list, sheet);
    }
}
