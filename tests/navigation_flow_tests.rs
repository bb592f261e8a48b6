//! Drives the navigation core end to end against a mocked lookup service,
//! the way the event loop does: `update()` returns an `Effect::Fetch`, the
//! lookup runs, and its result comes back as `Action::FetchCompleted`.

use lectio::core::action::{Action, Choice, Effect, update};
use lectio::core::catalog::{find_book, testaments};
use lectio::core::state::{App, Direction, NavState};
use lectio::lookup::{BibleApiClient, VerseSource};
use lectio::tui::passage;
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{method, path},
};

// ============================================================================
// Helper Functions
// ============================================================================

fn select(app: App, choice: Choice) -> (App, Effect) {
    update(app, Action::Select(choice))
}

/// Walks Old Testament → Genesis → Chapter 1 → Verse `verse`.
fn choose_genesis_1(verse: u16) -> (App, Effect) {
    let (app, _) = select(App::new(), Choice::Testament(&testaments()[0]));
    let (app, _) = select(app, Choice::Book(find_book("Genesis").unwrap()));
    let (app, _) = select(app, Choice::Chapter(1));
    select(app, Choice::Verse(verse))
}

/// Performs the lookup an `Effect::Fetch` asks for and feeds the result back.
async fn run_fetch(app: App, effect: Effect, source: &dyn VerseSource) -> App {
    let Effect::Fetch(reference) = effect else {
        panic!("expected a fetch, got {effect:?}");
    };
    let result = source.fetch(&reference).await;
    let (app, effect) = update(app, Action::FetchCompleted { reference, result });
    assert_eq!(effect, Effect::None);
    app
}

fn verse_body(number: u16, text: &str) -> String {
    format!(
        r#"{{"reference":"Genesis 1:{number}","verses":[{{"book_id":"GEN","book_name":"Genesis","chapter":1,"verse":{number},"text":"{text}"}}],"text":"{text}","translation_id":"kjv","translation_name":"King James Version","translation_note":"Public Domain"}}"#
    )
}

// ============================================================================
// Flow Tests
// ============================================================================

#[tokio::test]
async fn test_select_verse_then_read_it() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/Genesis%201:1"))
        .respond_with(ResponseTemplate::new(200).set_body_string(verse_body(
            1,
            "In the beginning God created the heaven and the earth.",
        )))
        .mount(&mock_server)
        .await;
    let source = BibleApiClient::new(mock_server.uri(), "kjv");

    let (app, effect) = choose_genesis_1(1);
    assert_eq!(effect, Effect::Fetch("Genesis 1:1".to_string()));
    assert!(app.is_loading());
    assert_eq!(
        app.breadcrumb(),
        vec!["Old Testament", "Genesis", "Chapter 1", "Verse 1"]
    );

    let app = run_fetch(app, effect, &source).await;

    assert_eq!(app.state(), NavState::Reading);
    assert!(!app.is_loading());
    assert!(app.error.is_none());
    assert_eq!(app.breadcrumb().len(), 4);

    let shown = app.passage.as_ref().unwrap();
    let text = passage::format(&shown.result, 80);
    let rendered: Vec<String> = text
        .lines
        .iter()
        .map(|line| line.spans.iter().map(|s| s.content.as_ref()).collect())
        .collect();
    assert_eq!(rendered[0], "Genesis 1:1");
    assert!(
        rendered
            .iter()
            .any(|l| l.contains("1 In the beginning God created the heaven and the earth."))
    );
}

#[tokio::test]
async fn test_failed_lookup_returns_to_verse_list() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&mock_server)
        .await;
    let source = BibleApiClient::new(mock_server.uri(), "kjv");

    let (app, effect) = choose_genesis_1(3);
    let app = run_fetch(app, effect, &source).await;

    assert_eq!(app.state(), NavState::Verse);
    assert!(!app.is_loading());
    assert!(app.passage.is_none());
    assert_eq!(app.focus, 2);
    let error = app.error.as_ref().unwrap().to_string();
    assert!(error.contains("500"), "error was {error}");

    // Back leaves the failed verse behind
    let (app, effect) = update(app, Action::Back);
    assert_eq!(effect, Effect::None);
    assert_eq!(app.state(), NavState::Chapter);
    assert!(app.error.is_none());
    assert_eq!(app.breadcrumb(), vec!["Old Testament", "Genesis"]);
}

#[tokio::test]
async fn test_step_to_next_verse_and_back() {
    let mock_server = MockServer::start().await;
    for (number, text) in [
        (1, "In the beginning God created the heaven and the earth."),
        (2, "And the earth was without form, and void."),
    ] {
        Mock::given(method("GET"))
            .and(path(format!("/Genesis%201:{number}")))
            .respond_with(ResponseTemplate::new(200).set_body_string(verse_body(number, text)))
            .mount(&mock_server)
            .await;
    }
    let source = BibleApiClient::new(mock_server.uri(), "kjv");

    let (app, effect) = choose_genesis_1(1);
    let app = run_fetch(app, effect, &source).await;
    let first_revision = app.passage.as_ref().unwrap().revision;

    let (app, effect) = update(app, Action::Step(Direction::Next));
    assert_eq!(effect, Effect::Fetch("Genesis 1:2".to_string()));
    let app = run_fetch(app, effect, &source).await;

    assert_eq!(app.state(), NavState::Reading);
    let shown = app.passage.as_ref().unwrap();
    assert_eq!(shown.result.reference, "Genesis 1:2");
    assert!(shown.revision > first_revision);
    assert_eq!(app.breadcrumb()[3], "Verse 2");

    // Previous from verse 1 is clamped; from verse 2 it fetches verse 1
    let (app, effect) = update(app, Action::Step(Direction::Previous));
    assert_eq!(effect, Effect::Fetch("Genesis 1:1".to_string()));
    let app = run_fetch(app, effect, &source).await;
    let (app, effect) = update(app, Action::Step(Direction::Previous));
    assert_eq!(effect, Effect::None);
    assert_eq!(app.state(), NavState::Reading);

    // Back from reading lands on the verse list with the cursor on verse 1
    let (app, _) = update(app, Action::Back);
    assert_eq!(app.state(), NavState::Verse);
    assert_eq!(app.focus, 0);
}

#[tokio::test]
async fn test_back_from_top_level_quits() {
    let (app, effect) = update(App::new(), Action::Back);
    assert_eq!(effect, Effect::Quit);
    assert_eq!(app.state(), NavState::Testament);
}
