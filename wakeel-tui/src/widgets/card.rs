//! List cards and the per-domain render templates that build them.

use crate::nav::Page;
use crate::theme::Palette;
use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::ListItem,
};
use wakeel_core::{ChatSummary, Document, Lawyer, StarRating};

pub const AVATAR_ICON: &str = "👤";
pub const FILE_ICON: &str = "📄";

/// One rendered list entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Card {
    pub icon: &'static str,
    pub title: String,
    pub lines: Vec<String>,
    pub trailing: Option<String>,
    pub stars: Option<StarRating>,
    pub link: Option<Page>,
}

pub fn lawyer_card(lawyer: &Lawyer) -> Card {
    Card {
        icon: AVATAR_ICON,
        title: lawyer.name.clone(),
        lines: vec![lawyer.specialty_label().to_string()],
        trailing: None,
        stars: Some(lawyer.stars()),
        link: Some(Page::Profile),
    }
}

pub fn chat_card(chat: &ChatSummary) -> Card {
    Card {
        icon: AVATAR_ICON,
        title: chat.name.clone(),
        lines: vec![chat.last_message_label().to_string()],
        trailing: Some(chat.time_label().to_string()),
        stars: Some(chat.stars()),
        link: Some(Page::Chat),
    }
}

pub fn document_card(document: &Document) -> Card {
    Card {
        icon: FILE_ICON,
        title: document.title.clone(),
        lines: vec![document.kind.clone()],
        trailing: None,
        stars: None,
        link: None,
    }
}

impl Card {
    pub fn to_list_item(&self, palette: &Palette) -> ListItem<'static> {
        let mut header = vec![
            Span::raw(format!("{} ", self.icon)),
            Span::styled(
                self.title.clone(),
                Style::default().fg(palette.text).add_modifier(Modifier::BOLD),
            ),
        ];
        if let Some(trailing) = &self.trailing {
            header.push(Span::styled(
                format!("  {}", trailing),
                Style::default().fg(palette.text_dim),
            ));
        }
        if self.link.is_some() {
            header.push(Span::styled("  ›", Style::default().fg(palette.text_dim)));
        }

        let mut lines = vec![Line::from(header)];
        for line in &self.lines {
            lines.push(Line::from(Span::styled(
                format!("   {}", line),
                Style::default().fg(palette.text_dim),
            )));
        }
        if let Some(stars) = self.stars {
            lines.push(Line::from(Span::styled(
                format!("   {}", stars),
                Style::default().fg(palette.star),
            )));
        }
        ListItem::new(lines)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lawyer_card_applies_defaults() {
        let card = lawyer_card(&Lawyer {
            name: "x".to_string(),
            specialty: None,
            rating: Some(7),
        });
        assert_eq!(card.lines, vec![wakeel_core::records::DEFAULT_SPECIALTY.to_string()]);
        assert_eq!(card.stars.map(|s| s.filled()), Some(5));
        assert_eq!(card.link, Some(Page::Profile));
    }

    #[test]
    fn test_chat_card_shows_time() {
        let card = chat_card(&ChatSummary::new("n", "hi", "10:44", 0));
        assert_eq!(card.trailing.as_deref(), Some("10:44"));
        assert_eq!(card.stars.map(|s| s.to_string()), Some("★★★★☆".to_string()));
    }

    #[test]
    fn test_document_card_has_no_rating() {
        let card = document_card(&Document::new("t", "PDF"));
        assert_eq!(card.icon, FILE_ICON);
        assert_eq!(card.lines, vec!["PDF".to_string()]);
        assert!(card.stars.is_none());
    }
}
