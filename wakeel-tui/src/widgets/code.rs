//! Verification code cells.

use crate::theme::Palette;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use wakeel_core::SegmentedCode;

pub const EMPTY_CELL: char = '_';

pub struct CodeCells<'a> {
    pub code: &'a SegmentedCode,
    pub focused: bool,
    pub palette: &'a Palette,
}

impl<'a> CodeCells<'a> {
    pub fn render(&self, f: &mut Frame<'_>, area: Rect) {
        let mut spans: Vec<Span> = self
            .code
            .cells()
            .iter()
            .enumerate()
            .map(|(index, cell)| {
                let mut style = Style::default().fg(self.palette.text);
                if self.focused && index == self.code.focus() {
                    style = style
                        .fg(self.palette.primary)
                        .add_modifier(Modifier::REVERSED);
                }
                Span::styled(format!(" {} ", cell.unwrap_or(EMPTY_CELL)), style)
            })
            .collect();
        if self.code.is_complete() {
            spans.push(Span::styled(
                format!("  {}", self.code.value()),
                Style::default().fg(self.palette.primary_dim),
            ));
        }

        let border = if self.focused {
            self.palette.border_focus
        } else {
            self.palette.border
        };
        let paragraph = Paragraph::new(Line::from(spans)).block(
            Block::default()
                .title("code")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(border)),
        );
        f.render_widget(paragraph, area);
    }
}
