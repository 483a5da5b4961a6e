//! Surfaces carried by each page.
//!
//! The orchestrator only builds a component when its surface is listed here,
//! so the same behavior layer serves every page.

use crate::lists::ListDomain;
use crate::nav::Page;
use wakeel_core::GroupKind;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupSpec {
    pub name: &'static str,
    pub kind: GroupKind,
    pub options: &'static [&'static str],
    pub initially_active: Option<usize>,
}

impl GroupSpec {
    const fn toggle(name: &'static str, options: &'static [&'static str]) -> Self {
        Self {
            name,
            kind: GroupKind::Toggle,
            options,
            initially_active: Some(0),
        }
    }

    const fn chips(name: &'static str, options: &'static [&'static str]) -> Self {
        Self {
            name,
            kind: GroupKind::Chips,
            options,
            initially_active: Some(0),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageLayout {
    pub groups: Vec<GroupSpec>,
    pub code_cells: bool,
    pub backdrop: bool,
    pub side_sheet: bool,
    pub history_sheet: bool,
    pub lists: Vec<ListDomain>,
    pub document_search: bool,
    pub toast: bool,
    pub toast_message: Option<&'static str>,
}

const ON_OFF: &[&str] = &["On", "Off"];

impl Page {
    pub fn layout(&self) -> PageLayout {
        match self {
            Page::Home => PageLayout {
                groups: vec![GroupSpec::chips(
                    "specialty",
                    &["All", "Commercial", "Family", "Civil"],
                )],
                backdrop: true,
                side_sheet: true,
                lists: vec![ListDomain::Lawyers],
                toast: true,
                ..PageLayout::default()
            },
            Page::Profile => PageLayout {
                groups: vec![GroupSpec::toggle("section", &["About", "Reviews"])],
                backdrop: true,
                side_sheet: true,
                toast: true,
                toast_message: Some("تم إرسال الطلب"),
                ..PageLayout::default()
            },
            Page::Post => PageLayout {
                groups: vec![GroupSpec::chips("topic", &["Commercial", "Family", "Civil"])],
                toast: true,
                ..PageLayout::default()
            },
            Page::ChatList => PageLayout {
                groups: vec![GroupSpec::toggle("inbox", &["All", "Unread"])],
                backdrop: true,
                side_sheet: true,
                lists: vec![ListDomain::Chats],
                ..PageLayout::default()
            },
            Page::Chat => PageLayout {
                toast: true,
                ..PageLayout::default()
            },
            Page::Ai => PageLayout {
                groups: vec![GroupSpec::chips("mode", &["Ask", "Draft", "Review"])],
                backdrop: true,
                history_sheet: true,
                ..PageLayout::default()
            },
            Page::Settings => PageLayout {
                backdrop: true,
                side_sheet: true,
                toast: true,
                ..PageLayout::default()
            },
            Page::Security => PageLayout {
                groups: vec![GroupSpec::toggle("two_factor", ON_OFF)],
                code_cells: true,
                toast: true,
                toast_message: Some("تم التحقق"),
                ..PageLayout::default()
            },
            Page::Notifications => PageLayout {
                groups: vec![
                    GroupSpec::toggle("push", ON_OFF),
                    GroupSpec::toggle("email", ON_OFF),
                ],
                toast: true,
                ..PageLayout::default()
            },
            Page::LanguageTheme => PageLayout {
                groups: vec![
                    GroupSpec::toggle("language", &["العربية", "English"]),
                    GroupSpec::toggle("theme", &["Light", "Dark"]),
                ],
                toast: true,
                ..PageLayout::default()
            },
            Page::Payments => PageLayout {
                groups: vec![GroupSpec::chips("method", &["Card", "Wallet", "Bank"])],
                toast: true,
                toast_message: Some("تم الدفع"),
                ..PageLayout::default()
            },
            Page::Documents => PageLayout {
                lists: vec![ListDomain::Documents],
                document_search: true,
                toast: true,
                ..PageLayout::default()
            },
        }
    }
}
