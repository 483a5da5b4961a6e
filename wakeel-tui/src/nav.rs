//! Pages, bottom-nav tabs and page switching.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Page {
    Home,
    Profile,
    Post,
    ChatList,
    Chat,
    Ai,
    Settings,
    Security,
    Notifications,
    LanguageTheme,
    Payments,
    Documents,
}

/// Bottom navigation entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Tab {
    Home,
    Chats,
    Ai,
    Settings,
}

impl Page {
    pub fn title(&self) -> &'static str {
        match self {
            Page::Home => "Home",
            Page::Profile => "Profile",
            Page::Post => "Post",
            Page::ChatList => "Chats",
            Page::Chat => "Chat",
            Page::Ai => "AI Assistant",
            Page::Settings => "Settings",
            Page::Security => "Security",
            Page::Notifications => "Notifications",
            Page::LanguageTheme => "Language & Theme",
            Page::Payments => "Payments",
            Page::Documents => "Documents",
        }
    }

    /// Identifier used in configuration and links.
    pub fn id(&self) -> &'static str {
        match self {
            Page::Home => "home",
            Page::Profile => "profile",
            Page::Post => "post",
            Page::ChatList => "chatList",
            Page::Chat => "chat",
            Page::Ai => "ai",
            Page::Settings => "settings",
            Page::Security => "security",
            Page::Notifications => "notifications",
            Page::LanguageTheme => "languageTheme",
            Page::Payments => "payments",
            Page::Documents => "documents",
        }
    }

    pub fn all() -> &'static [Page] {
        &[
            Page::Home,
            Page::Profile,
            Page::Post,
            Page::ChatList,
            Page::Chat,
            Page::Ai,
            Page::Settings,
            Page::Security,
            Page::Notifications,
            Page::LanguageTheme,
            Page::Payments,
            Page::Documents,
        ]
    }

    /// The bottom-nav tab highlighted while this page is shown.
    pub fn tab(&self) -> Tab {
        match self {
            Page::Home | Page::Profile | Page::Post => Tab::Home,
            Page::ChatList | Page::Chat => Tab::Chats,
            Page::Ai => Tab::Ai,
            Page::Settings
            | Page::Security
            | Page::Notifications
            | Page::LanguageTheme
            | Page::Payments
            | Page::Documents => Tab::Settings,
        }
    }

    pub fn index(&self) -> usize {
        Self::all().iter().position(|p| p == self).unwrap_or(0)
    }

    pub fn next(&self) -> Page {
        let all = Self::all();
        all[(self.index() + 1) % all.len()]
    }

    pub fn previous(&self) -> Page {
        let idx = self.index();
        let all = Self::all();
        let prev = if idx == 0 { all.len() - 1 } else { idx - 1 };
        all[prev]
    }
}

impl fmt::Display for Page {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown page identifier: {0}")]
pub struct UnknownPage(pub String);

impl FromStr for Page {
    type Err = UnknownPage;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Page::all()
            .iter()
            .copied()
            .find(|page| page.id() == s)
            .ok_or_else(|| UnknownPage(s.to_string()))
    }
}

impl Tab {
    pub fn all() -> &'static [Tab] {
        &[Tab::Home, Tab::Chats, Tab::Ai, Tab::Settings]
    }

    pub fn label(&self) -> &'static str {
        match self {
            Tab::Home => "Home",
            Tab::Chats => "Chats",
            Tab::Ai => "AI",
            Tab::Settings => "Settings",
        }
    }

    /// Page opened when the tab is chosen.
    pub fn landing_page(&self) -> Page {
        match self {
            Tab::Home => Page::Home,
            Tab::Chats => Page::ChatList,
            Tab::Ai => Page::Ai,
            Tab::Settings => Page::Settings,
        }
    }

    pub fn from_index(index: usize) -> Option<Tab> {
        Self::all().get(index).copied()
    }
}

/// The tab to highlight for a raw page identifier; `None` for unknown pages.
pub fn active_tab(page_id: &str) -> Option<Tab> {
    page_id.parse::<Page>().ok().map(|page| page.tab())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_ids_round_trip() {
        for page in Page::all() {
            assert_eq!(page.id().parse::<Page>(), Ok(*page));
        }
    }

    #[test]
    fn test_active_tab_mapping() {
        assert_eq!(active_tab("post"), Some(Tab::Home));
        assert_eq!(active_tab("chat"), Some(Tab::Chats));
        assert_eq!(active_tab("ai"), Some(Tab::Ai));
        assert_eq!(active_tab("documents"), Some(Tab::Settings));
        assert_eq!(active_tab("languageTheme"), Some(Tab::Settings));
        assert_eq!(active_tab("unknown"), None);
        assert_eq!(active_tab(""), None);
    }

    #[test]
    fn test_page_cycle_wraps() {
        assert_eq!(Page::Documents.next(), Page::Home);
        assert_eq!(Page::Home.previous(), Page::Documents);
    }

    #[test]
    fn test_tab_landing_pages_map_back_to_tab() {
        for tab in Tab::all() {
            assert_eq!(tab.landing_page().tab(), *tab);
        }
    }
}
