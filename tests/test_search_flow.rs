//! End-to-end tests of the search flow: submission, cancellation,
//! completion handling, and the row projection the list renders from.

use std::collections::VecDeque;
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use tokio::sync::{oneshot, Mutex};

use tunesearch::controller::AppController;
use tunesearch::model::{AppModel, CategoryFilter, RowDescriptor};
use tunesearch::transport::{Transport, TransportError, TransportResponse};

struct ScriptedReply {
    // When present, the reply is held back until the sender side fires (or
    // is dropped), letting tests control completion order.
    gate: Option<oneshot::Receiver<()>>,
    outcome: Result<TransportResponse, TransportError>,
}

/// Transport double that pops one scripted reply per request and records
/// every URL it was asked for.
struct ScriptedTransport {
    replies: Mutex<VecDeque<ScriptedReply>>,
    requests: Mutex<Vec<reqwest::Url>>,
}

impl ScriptedTransport {
    fn new(replies: Vec<ScriptedReply>) -> Arc<Self> {
        Arc::new(Self {
            replies: Mutex::new(replies.into()),
            requests: Mutex::new(Vec::new()),
        })
    }

    async fn request_urls(&self) -> Vec<reqwest::Url> {
        self.requests.lock().await.clone()
    }
}

#[async_trait]
impl Transport for ScriptedTransport {
    async fn issue(&self, url: reqwest::Url) -> Result<TransportResponse, TransportError> {
        self.requests.lock().await.push(url);
        let reply = self
            .replies
            .lock()
            .await
            .pop_front()
            .expect("transport called more times than scripted");
        if let Some(gate) = reply.gate {
            let _ = gate.await;
        }
        reply.outcome
    }
}

fn ok(body: &str) -> ScriptedReply {
    ScriptedReply {
        gate: None,
        outcome: Ok(TransportResponse {
            status: 200,
            body: body.to_string(),
        }),
    }
}

fn status(status: u16) -> ScriptedReply {
    ScriptedReply {
        gate: None,
        outcome: Ok(TransportResponse {
            status,
            body: String::new(),
        }),
    }
}

fn gated(body: &str) -> (ScriptedReply, oneshot::Sender<()>) {
    let (tx, rx) = oneshot::channel();
    (
        ScriptedReply {
            gate: Some(rx),
            outcome: Ok(TransportResponse {
                status: 200,
                body: body.to_string(),
            }),
        },
        tx,
    )
}

fn setup(transport: Arc<ScriptedTransport>) -> (Arc<Mutex<AppModel>>, AppController) {
    let model = Arc::new(Mutex::new(AppModel::new()));
    let controller = AppController::new(model.clone(), transport);
    (model, controller)
}

async fn type_query(model: &Arc<Mutex<AppModel>>, text: &str) {
    let model = model.lock().await;
    for c in text.chars() {
        model.append_to_search(c).await;
    }
}

async fn wait_for_requests(transport: &ScriptedTransport, count: usize) {
    tokio::time::timeout(Duration::from_secs(2), async {
        loop {
            if transport.requests.lock().await.len() >= count {
                break;
            }
            tokio::time::sleep(Duration::from_millis(1)).await;
        }
    })
    .await
    .expect("request was never issued");
}

async fn wait_until_settled(model: &Arc<Mutex<AppModel>>) {
    tokio::time::timeout(Duration::from_secs(2), async {
        loop {
            if !model.lock().await.is_loading().await {
                break;
            }
            tokio::time::sleep(Duration::from_millis(5)).await;
        }
    })
    .await
    .expect("search never settled");
}

const ADELE_BODY: &str = r#"{"resultCount": 3, "results": [
    {"trackName": "Skyfall", "artistName": "Adele", "kind": "song",
     "trackPrice": 1.29, "currency": "USD"},
    {"trackName": "hello", "artistName": "Adele", "kind": "song"},
    {"trackName": "Chasing Pavements", "artistName": "Adele", "kind": "song"}
]}"#;

const EMPTY_BODY: &str = r#"{"resultCount": 0, "results": []}"#;

#[tokio::test]
async fn populated_search_yields_sorted_selectable_rows() {
    let transport = ScriptedTransport::new(vec![ok(ADELE_BODY)]);
    let (model, controller) = setup(transport);

    type_query(&model, "adele").await;
    controller.submit_search().await;
    wait_until_settled(&model).await;

    let model = model.lock().await;
    let rows = model.get_row_projection().await;
    let names: Vec<&str> = rows
        .iter()
        .map(|row| match row {
            RowDescriptor::Result(r) => r.name.as_str(),
            other => panic!("unexpected row {other:?}"),
        })
        .collect();
    assert_eq!(names, ["Chasing Pavements", "hello", "Skyfall"]);
    assert!(model.is_row_selectable(0).await);
    assert!(model.has_searched().await);
    assert!(!model.has_error().await);
}

#[tokio::test]
async fn empty_search_yields_one_unselectable_nothing_found_row() {
    let transport = ScriptedTransport::new(vec![ok(EMPTY_BODY)]);
    let (model, controller) = setup(transport.clone());

    {
        model.lock().await.ui_state.lock().await.category = CategoryFilter::Software;
    }
    type_query(&model, "zzzznoresults").await;
    controller.submit_search().await;
    wait_until_settled(&model).await;

    let urls = transport.request_urls().await;
    assert!(urls[0].query().unwrap().contains("entity=software"));

    let model = model.lock().await;
    assert_eq!(model.row_count().await, 1);
    assert_eq!(
        model.get_row_projection().await,
        vec![RowDescriptor::NothingFound]
    );
    assert!(!model.is_row_selectable(0).await);
}

#[tokio::test]
async fn server_error_resets_list_and_raises_single_alert() {
    let transport = ScriptedTransport::new(vec![status(500)]);
    let (model, controller) = setup(transport);

    type_query(&model, "test").await;
    controller.submit_search().await;
    wait_until_settled(&model).await;

    // Give any stray duplicate completion a chance to land before asserting.
    tokio::time::sleep(Duration::from_millis(20)).await;

    let model = model.lock().await;
    assert_eq!(model.row_count().await, 0);
    assert!(!model.has_searched().await);
    assert!(model.has_error().await);

    model.clear_error().await;
    assert!(!model.has_error().await);
}

#[tokio::test]
async fn projection_shows_single_loading_row_while_in_flight() {
    let (reply, gate) = gated(EMPTY_BODY);
    let transport = ScriptedTransport::new(vec![reply]);
    let (model, controller) = setup(transport);

    type_query(&model, "adele").await;
    controller.submit_search().await;

    {
        let model = model.lock().await;
        assert_eq!(model.get_row_projection().await, vec![RowDescriptor::Loading]);
        assert!(!model.is_row_selectable(0).await);
    }

    let _ = gate.send(());
    wait_until_settled(&model).await;
}

#[tokio::test]
async fn superseding_search_wins_regardless_of_completion_order() {
    let (slow_reply, gate) = gated(ADELE_BODY);
    let fast_body = r#"{"results": [
        {"trackName": "Second Search", "artistName": "Winner", "kind": "song"}
    ]}"#;
    let transport = ScriptedTransport::new(vec![slow_reply, ok(fast_body)]);
    let (model, controller) = setup(transport.clone());

    type_query(&model, "a").await;
    controller.submit_search().await;
    // Make sure the first request is actually in flight (holding the gated
    // reply) before the second search supersedes it.
    wait_for_requests(&transport, 1).await;

    type_query(&model, "b").await;
    controller.submit_search().await;

    // Release the first search's response only after the second completed.
    wait_until_settled(&model).await;
    let _ = gate.send(());
    tokio::time::sleep(Duration::from_millis(20)).await;

    let urls = transport.request_urls().await;
    assert_eq!(urls.len(), 2);
    assert!(urls[0].query().unwrap().contains("term=a"));
    assert!(urls[1].query().unwrap().contains("term=ab"));

    let model = model.lock().await;
    let rows = model.get_row_projection().await;
    assert_eq!(rows.len(), 1);
    match &rows[0] {
        RowDescriptor::Result(r) => assert_eq!(r.name, "Second Search"),
        other => panic!("unexpected row {other:?}"),
    }
}

#[tokio::test]
async fn blank_query_is_a_noop() {
    let transport = ScriptedTransport::new(vec![]);
    let (model, controller) = setup(transport.clone());

    type_query(&model, "   ").await;
    controller.submit_search().await;
    tokio::time::sleep(Duration::from_millis(10)).await;

    assert!(transport.request_urls().await.is_empty());
    let model = model.lock().await;
    assert_eq!(model.row_count().await, 0);
    assert!(!model.has_searched().await);
}

#[tokio::test]
async fn category_change_resubmits_current_text() {
    let transport = ScriptedTransport::new(vec![ok(ADELE_BODY), ok(EMPTY_BODY)]);
    let (model, controller) = setup(transport.clone());

    type_query(&model, "adele").await;
    controller.submit_search().await;
    wait_until_settled(&model).await;

    controller.change_category(true).await;
    wait_until_settled(&model).await;

    let urls = transport.request_urls().await;
    assert_eq!(urls.len(), 2);
    assert!(urls[0].query().unwrap().contains("entity=&") || urls[0].query().unwrap().ends_with("entity="));
    assert!(urls[1].query().unwrap().contains("term=adele"));
    assert!(urls[1].query().unwrap().contains("entity=musicTrack"));

    let model = model.lock().await;
    assert_eq!(
        model.get_row_projection().await,
        vec![RowDescriptor::NothingFound]
    );
}

#[tokio::test]
async fn category_change_without_text_does_not_submit() {
    let transport = ScriptedTransport::new(vec![]);
    let (model, controller) = setup(transport.clone());

    controller.change_category(true).await;
    tokio::time::sleep(Duration::from_millis(10)).await;

    assert!(transport.request_urls().await.is_empty());
    assert_eq!(
        model.lock().await.get_category().await,
        CategoryFilter::MusicTrack
    );
}

#[tokio::test]
async fn selection_is_refused_on_placeholder_rows() {
    let transport = ScriptedTransport::new(vec![ok(EMPTY_BODY)]);
    let (model, controller) = setup(transport);

    type_query(&model, "adele").await;
    controller.submit_search().await;
    wait_until_settled(&model).await;

    let model = model.lock().await;
    assert_eq!(model.row_count().await, 1);
    assert!(model.get_selected_result().await.is_none());
}
