//! Retrieval against a live HTTP server bound to an ephemeral port.

use axum::{http::StatusCode, routing::get, Json, Router};
use serde_json::json;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;
use wakeel_core::{ChatSummary, Document, Lawyer, Provenance};
use wakeel_tui::api_client::{ListSource, RestClient};
use wakeel_tui::config::TuiConfig;
use wakeel_tui::events::TuiEvent;
use wakeel_tui::lists::{ListDomain, LoadedList};
use wakeel_tui::loader::{load_list, spawn_list_loads};
use wakeel_tui::state::App;

async fn serve(router: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind listener");
    let addr = listener.local_addr().expect("local addr");
    tokio::spawn(async move {
        let _ = axum::serve(listener, router).await;
    });
    format!("http://{}", addr)
}

fn client(base_url: &str) -> RestClient {
    RestClient::with_timeout(base_url, Duration::from_millis(2_000)).expect("client")
}

fn config(base_url: &str, start_page: &str) -> TuiConfig {
    TuiConfig {
        api_base_url: base_url.to_string(),
        request_timeout_ms: 2_000,
        tick_rate_ms: 100,
        toast_duration_ms: 1_600,
        start_page: start_page.to_string(),
        code_length: 4,
        log_path: "tmp/wakeel-tui.log".into(),
    }
}

#[tokio::test]
async fn server_error_falls_back_to_seed_in_order() {
    let router = Router::new().route(
        "/api/lawyers",
        get(|| async { (StatusCode::INTERNAL_SERVER_ERROR, "boom") }),
    );
    let base_url = serve(router).await;

    let list = load_list(&client(&base_url), ListDomain::Lawyers).await;
    assert_eq!(list.provenance(), Provenance::Fallback);
    match list {
        LoadedList::Lawyers(outcome) => {
            let names: Vec<String> = outcome
                .into_dataset()
                .items()
                .iter()
                .map(|l| l.name.clone())
                .collect();
            let seed: Vec<String> = Lawyer::seed().into_iter().map(|l| l.name).collect();
            assert_eq!(names, seed);
        }
        other => panic!("unexpected list {:?}", other.domain()),
    }
}

#[tokio::test]
async fn unreachable_server_falls_back() {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind listener");
    let addr = listener.local_addr().expect("local addr");
    drop(listener);

    let list = load_list(&client(&format!("http://{}", addr)), ListDomain::Chats).await;
    assert_eq!(list.provenance(), Provenance::Fallback);
    assert_eq!(list.len(), ChatSummary::seed().len());
}

#[tokio::test]
async fn remote_lawyers_render_clamped_ratings() {
    let router = Router::new().route(
        "/api/lawyers",
        get(|| async {
            Json(json!([
                { "name": "A", "specialty": "Civil", "rating": 7 },
                { "name": "B", "rating": 0 }
            ]))
        }),
    );
    let base_url = serve(router).await;
    let source = client(&base_url);

    let mut app = App::new(config(&base_url, "home"));
    assert_eq!(app.take_pending_loads(), vec![ListDomain::Lawyers]);
    let list = load_list(&source, ListDomain::Lawyers).await;
    app.resolve(app.session, list);

    let cards = app.cards(ListDomain::Lawyers).unwrap_or(&[]);
    let rendered: Vec<(String, Option<String>)> = cards
        .iter()
        .map(|card| (card.title.clone(), card.stars.map(|s| s.to_string())))
        .collect();
    assert_eq!(
        rendered,
        vec![
            ("A".to_string(), Some("★★★★★".to_string())),
            ("B".to_string(), Some("★★★★☆".to_string())),
        ]
    );
    assert_eq!(cards[1].lines, vec![wakeel_core::records::DEFAULT_SPECIALTY.to_string()]);
}

#[tokio::test]
async fn non_array_body_falls_back() {
    let router = Router::new().route(
        "/api/documents",
        get(|| async { Json(json!({ "documents": [] })) }),
    );
    let base_url = serve(router).await;

    let list = load_list(&client(&base_url), ListDomain::Documents).await;
    assert_eq!(list.provenance(), Provenance::Fallback);
    assert_eq!(list.len(), Document::seed().len());
}

#[tokio::test]
async fn spawned_loads_report_their_session() {
    let router = Router::new().route(
        "/api/documents",
        get(|| async {
            Json(json!([
                { "title": "Lease", "type": "PDF" },
                { "title": "Will", "type": "DOCX" }
            ]))
        }),
    );
    let base_url = serve(router).await;
    let source: Arc<dyn ListSource> = Arc::new(client(&base_url));

    let mut app = App::new(config(&base_url, "documents"));
    let (tx, mut rx) = mpsc::channel(8);
    spawn_list_loads(source, app.session, app.take_pending_loads(), tx);

    let event = tokio::time::timeout(Duration::from_secs(5), rx.recv())
        .await
        .expect("load finished")
        .expect("event sent");
    match event {
        TuiEvent::Loaded { session, list } => {
            assert_eq!(session, app.session);
            app.resolve(session, list);
        }
        other => panic!("unexpected event {:?}", other),
    }

    let titles: Vec<String> = app
        .cards(ListDomain::Documents)
        .unwrap_or(&[])
        .iter()
        .map(|card| card.title.clone())
        .collect();
    assert_eq!(titles, vec!["Lease", "Will"]);
    assert_eq!(
        app.documents.as_ref().map(|b| b.provenance()),
        Some(Provenance::Remote)
    );
}
