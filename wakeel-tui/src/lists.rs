//! The three list domains and the bindings that host them.

use crate::widgets::card::{chat_card, document_card, lawyer_card, Card};
use wakeel_core::{
    ChatSummary, Document, Lawyer, ListBinding, ListRecord, LoadOutcome, Provenance,
};

pub type LawyerList = ListBinding<Lawyer, Card>;
pub type ChatList = ListBinding<ChatSummary, Card>;
pub type DocumentList = ListBinding<Document, Card>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ListDomain {
    Lawyers,
    Chats,
    Documents,
}

impl ListDomain {
    pub fn endpoint(&self) -> &'static str {
        match self {
            ListDomain::Lawyers => Lawyer::ENDPOINT,
            ListDomain::Chats => ChatSummary::ENDPOINT,
            ListDomain::Documents => Document::ENDPOINT,
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            ListDomain::Lawyers => "Lawyers",
            ListDomain::Chats => "Conversations",
            ListDomain::Documents => "Documents",
        }
    }
}

/// A finished retrieval for one domain.
#[derive(Debug, Clone, PartialEq)]
pub enum LoadedList {
    Lawyers(LoadOutcome<Lawyer>),
    Chats(LoadOutcome<ChatSummary>),
    Documents(LoadOutcome<Document>),
}

impl LoadedList {
    pub fn domain(&self) -> ListDomain {
        match self {
            LoadedList::Lawyers(_) => ListDomain::Lawyers,
            LoadedList::Chats(_) => ListDomain::Chats,
            LoadedList::Documents(_) => ListDomain::Documents,
        }
    }

    pub fn provenance(&self) -> Provenance {
        match self {
            LoadedList::Lawyers(outcome) => outcome.provenance(),
            LoadedList::Chats(outcome) => outcome.provenance(),
            LoadedList::Documents(outcome) => outcome.provenance(),
        }
    }

    pub fn len(&self) -> usize {
        match self {
            LoadedList::Lawyers(outcome) => outcome.len(),
            LoadedList::Chats(outcome) => outcome.len(),
            LoadedList::Documents(outcome) => outcome.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

pub fn lawyer_list(filterable: bool) -> LawyerList {
    ListBinding::attach(Lawyer::seed(), lawyer_card, filterable)
}

pub fn chat_list(filterable: bool) -> ChatList {
    ListBinding::attach(ChatSummary::seed(), chat_card, filterable)
}

pub fn document_list(filterable: bool) -> DocumentList {
    ListBinding::attach(Document::seed(), document_card, filterable)
}
