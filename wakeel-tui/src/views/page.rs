//! Page body: option groups, code cells, search field and lists.

use crate::lists::ListDomain;
use crate::state::{App, FocusTarget};
use crate::widgets::{CodeCells, FilterBar};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
    Frame,
};

pub fn render(f: &mut Frame<'_>, app: &App, area: Rect) {
    let focused = app.focused();
    let ring = app.focus_ring();
    let list_count = ring
        .iter()
        .filter(|target| matches!(target, FocusTarget::List(_)))
        .count();

    let constraints: Vec<Constraint> = ring
        .iter()
        .map(|target| match target {
            FocusTarget::List(_) => Constraint::Ratio(1, list_count.max(1) as u32),
            _ => Constraint::Length(3),
        })
        .chain(std::iter::once(Constraint::Min(0)))
        .collect();
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(area);

    for (target, chunk) in ring.iter().zip(chunks.iter()) {
        let is_focused = focused == Some(*target);
        match target {
            FocusTarget::Group(index) => {
                if let Some(group) = app.groups.get(*index) {
                    FilterBar {
                        group,
                        cursor: app.group_cursors.get(*index).copied(),
                        focused: is_focused,
                        palette: &app.palette,
                    }
                    .render(f, *chunk);
                }
            }
            FocusTarget::Code => {
                if let Some(code) = &app.code {
                    CodeCells {
                        code,
                        focused: is_focused,
                        palette: &app.palette,
                    }
                    .render(f, *chunk);
                }
            }
            FocusTarget::Search => render_search(f, app, *chunk, is_focused),
            FocusTarget::List(domain) => render_list(f, app, *domain, *chunk, is_focused),
        }
    }

    if ring.is_empty() {
        let empty = Paragraph::new(app.page.title())
            .style(Style::default().fg(app.palette.text_dim))
            .block(Block::default().borders(Borders::ALL));
        f.render_widget(empty, area);
    }
}

fn focus_border(app: &App, focused: bool) -> Style {
    if focused {
        Style::default().fg(app.palette.border_focus)
    } else {
        Style::default().fg(app.palette.border)
    }
}

fn render_search(f: &mut Frame<'_>, app: &App, area: Rect, focused: bool) {
    let mut spans = vec![Span::styled("🔍 ", Style::default().fg(app.palette.text_dim))];
    spans.push(Span::styled(
        app.search_text().to_string(),
        Style::default().fg(app.palette.text),
    ));
    if focused {
        spans.push(Span::styled(
            " ",
            Style::default().add_modifier(Modifier::REVERSED),
        ));
    }
    let field = Paragraph::new(Line::from(spans)).block(
        Block::default()
            .title("search")
            .borders(Borders::ALL)
            .border_style(focus_border(app, focused)),
    );
    f.render_widget(field, area);
}

fn render_list(f: &mut Frame<'_>, app: &App, domain: ListDomain, area: Rect, focused: bool) {
    let cards = app.cards(domain).unwrap_or(&[]);
    let items: Vec<ListItem> = cards
        .iter()
        .map(|card| card.to_list_item(&app.palette))
        .collect();

    let status = match list_status(app, domain) {
        Some((true, provenance)) => format!("{} · {}", cards.len(), provenance),
        Some((false, _)) => "loading".to_string(),
        None => String::new(),
    };
    let title = format!("{} [{}]", domain.title(), status);

    let mut state = ListState::default();
    if focused {
        state.select(app.list_cursor);
    }
    let list = List::new(items)
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_style(focus_border(app, focused)),
        )
        .highlight_style(Style::default().fg(app.palette.primary).add_modifier(Modifier::BOLD));
    f.render_stateful_widget(list, area, &mut state);
}

fn list_status(app: &App, domain: ListDomain) -> Option<(bool, wakeel_core::Provenance)> {
    match domain {
        ListDomain::Lawyers => app.lawyers.as_ref().map(|b| (b.is_resolved(), b.provenance())),
        ListDomain::Chats => app.chats.as_ref().map(|b| (b.is_resolved(), b.provenance())),
        ListDomain::Documents => app
            .documents
            .as_ref()
            .map(|b| (b.is_resolved(), b.provenance())),
    }
}
