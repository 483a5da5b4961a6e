//! Toast strip widget.

use crate::notifications::Toast;
use crate::theme::{toast_color, Palette};
use ratatui::{
    layout::{Alignment, Rect},
    style::Style,
    widgets::{Block, Borders, Paragraph},
    Frame,
};

pub struct ToastBar<'a> {
    pub toast: &'a Toast,
    pub palette: &'a Palette,
}

impl<'a> ToastBar<'a> {
    pub fn render(&self, f: &mut Frame<'_>, area: Rect) {
        let color = toast_color(self.toast.state, self.palette);
        let paragraph = Paragraph::new(self.toast.message.as_str())
            .alignment(Alignment::Center)
            .style(Style::default().fg(self.palette.surface).bg(color))
            .block(Block::default().borders(Borders::NONE));
        f.render_widget(paragraph, area);
    }
}
