//! Option group bar: toggle buttons and chips.

use crate::theme::Palette;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use wakeel_core::{GroupKind, OptionGroup};

pub struct FilterBar<'a> {
    pub group: &'a OptionGroup,
    /// Highlighted option, shown only while the bar has focus.
    pub cursor: Option<usize>,
    pub focused: bool,
    pub palette: &'a Palette,
}

impl<'a> FilterBar<'a> {
    pub fn render(&self, f: &mut Frame<'_>, area: Rect) {
        let (open, close) = match self.group.kind() {
            GroupKind::Toggle => ("[", "]"),
            GroupKind::Chips => ("(", ")"),
        };
        let spans: Vec<Span> = self
            .group
            .options()
            .iter()
            .enumerate()
            .map(|(index, label)| {
                let mut style = if self.group.is_active(index) {
                    Style::default()
                        .fg(self.palette.surface)
                        .bg(self.palette.primary)
                        .add_modifier(Modifier::BOLD)
                } else {
                    Style::default().fg(self.palette.text_dim)
                };
                if self.focused && self.cursor == Some(index) {
                    style = style.add_modifier(Modifier::UNDERLINED);
                }
                Span::styled(format!("{}{}{} ", open, label, close), style)
            })
            .collect();

        let border = if self.focused {
            self.palette.border_focus
        } else {
            self.palette.border
        };
        let paragraph = Paragraph::new(Line::from(spans)).block(
            Block::default()
                .title(self.group.name())
                .borders(Borders::ALL)
                .border_style(Style::default().fg(border)),
        );
        f.render_widget(paragraph, area);
    }
}
