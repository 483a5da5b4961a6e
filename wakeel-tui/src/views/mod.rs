//! View rendering dispatch.

pub mod overlay;
pub mod page;

use crate::nav::Tab;
use crate::state::App;
use crate::widgets::ToastBar;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

pub fn render_view(f: &mut Frame<'_>, app: &App) {
    let area = f.size();
    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(0),
            Constraint::Length(3),
            Constraint::Length(1),
        ])
        .split(area);

    render_header(f, app, layout[0]);
    page::render(f, app, layout[1]);
    render_tab_bar(f, app, layout[2]);
    render_footer(f, app, layout[3]);

    overlay::render(f, app, area);
}

fn render_header(f: &mut Frame<'_>, app: &App, area: Rect) {
    let mut title = vec![Span::styled(
        "WAKEEL",
        Style::default()
            .fg(app.palette.primary)
            .add_modifier(Modifier::BOLD),
    )];
    title.push(Span::styled(
        format!(" | {}", app.page.title()),
        Style::default().fg(app.palette.text),
    ));
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(app.palette.border))
        .title(Line::from(title));
    f.render_widget(block, area);
}

fn render_tab_bar(f: &mut Frame<'_>, app: &App, area: Rect) {
    let active = app.active_tab();
    let spans: Vec<Span> = Tab::all()
        .iter()
        .enumerate()
        .map(|(index, tab)| {
            let style = if *tab == active {
                Style::default()
                    .fg(app.palette.primary)
                    .add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
            } else {
                Style::default().fg(app.palette.text_dim)
            };
            Span::styled(format!(" {} {} ", index + 1, tab.label()), style)
        })
        .collect();
    let bar = Paragraph::new(Line::from(spans))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::TOP)
                .border_style(Style::default().fg(app.palette.border)),
        );
    f.render_widget(bar, area);
}

fn render_footer(f: &mut Frame<'_>, app: &App, area: Rect) {
    if let Some(toast) = &app.toast {
        ToastBar {
            toast,
            palette: &app.palette,
        }
        .render(f, area);
        return;
    }
    let help = "Tab focus • ←/→ ↑/↓ move • Enter select • m menu • y history • t toast • [ ] page • q quit";
    let footer = Paragraph::new(help).style(Style::default().fg(app.palette.text_dim));
    f.render_widget(footer, area);
}
