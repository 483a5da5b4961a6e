//! Background list retrieval.
//!
//! Each list on a page gets exactly one retrieval task; its outcome is sent
//! back to the event loop tagged with the page session it was issued for.

use crate::api_client::{retrieve, ListSource};
use crate::events::TuiEvent;
use crate::lists::{ListDomain, LoadedList};
use std::sync::Arc;
use tokio::sync::mpsc;
use wakeel_core::{ChatSummary, Document, Lawyer};

/// Retrieve one domain's list. Never fails: errors resolve to seed data.
pub async fn load_list(source: &dyn ListSource, domain: ListDomain) -> LoadedList {
    match domain {
        ListDomain::Lawyers => LoadedList::Lawyers(retrieve(source, Lawyer::seed()).await),
        ListDomain::Chats => LoadedList::Chats(retrieve(source, ChatSummary::seed()).await),
        ListDomain::Documents => {
            LoadedList::Documents(retrieve(source, Document::seed()).await)
        }
    }
}

pub fn spawn_list_loads(
    source: Arc<dyn ListSource>,
    session: u64,
    domains: Vec<ListDomain>,
    sender: mpsc::Sender<TuiEvent>,
) {
    for domain in domains {
        let source = Arc::clone(&source);
        let sender = sender.clone();
        tokio::spawn(async move {
            tracing::debug!(session, endpoint = domain.endpoint(), "Retrieving list");
            let list = load_list(source.as_ref(), domain).await;
            let _ = sender.send(TuiEvent::Loaded { session, list }).await;
        });
    }
}
