//! Integration tests for the photo grid controller, against a wiremock HTTP
//! server.

use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use placefeed::api::ApiClient;
use placefeed::config::Config;
use placefeed::models::Photo;
use placefeed::viewmodel::{PhotoGrid, PhotoGridState};

fn sample_photos(count: i64) -> Vec<Photo> {
    (1..=count)
        .map(|id| Photo {
            id,
            album_id: 1 + (id - 1) / 50,
            title: format!("photo {id}"),
            url: format!("https://images.example.com/{id}"),
            thumbnail_url: format!("https://images.example.com/thumb/{id}"),
        })
        .collect()
}

fn grid_for(server: &MockServer) -> PhotoGrid {
    let config = Config {
        base_url: server.uri(),
        ..Config::for_testing()
    };
    PhotoGrid::new(ApiClient::new(&config), config.page_size)
}

async fn mount_photos(server: &MockServer, response: ResponseTemplate) {
    Mock::given(method("GET"))
        .and(path("/photos"))
        .respond_with(response)
        .mount(server)
        .await;
}

fn assert_window_invariant(state: &PhotoGridState) {
    assert!(state.revealed <= state.all_photos.len());
    assert_eq!(state.visible_photos, state.all_photos[..state.revealed]);
}

#[tokio::test]
async fn test_load_initial_reveals_first_page() {
    let server = MockServer::start().await;
    mount_photos(
        &server,
        ResponseTemplate::new(200).set_body_json(&sample_photos(25)),
    )
    .await;

    let grid = grid_for(&server);
    grid.load_initial().await;

    let state = grid.state();
    assert_eq!(state.all_photos.len(), 25);
    assert_eq!(state.visible_photos.len(), 10);
    assert!(!state.is_loading);
    assert!(state.error_message.is_none());
    assert_window_invariant(&state);
}

#[tokio::test]
async fn test_scroll_walk_over_25_photos() {
    let server = MockServer::start().await;
    mount_photos(
        &server,
        ResponseTemplate::new(200).set_body_json(&sample_photos(25)),
    )
    .await;

    let grid = grid_for(&server);
    grid.load_initial().await;
    assert_eq!(grid.state().visible_photos.len(), 10);

    for expected in [20, 25, 25] {
        let state = grid.state();
        grid.load_more_if_needed(state.visible_photos.last());
        let state = grid.state();
        assert_eq!(state.visible_photos.len(), expected);
        assert_window_invariant(&state);
    }
}

#[tokio::test]
async fn test_load_initial_is_guarded_against_duplicates() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/photos"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&sample_photos(5)))
        .expect(1)
        .mount(&server)
        .await;

    let grid = grid_for(&server);
    grid.load_initial().await;
    // second call must perform zero additional network calls
    grid.load_initial().await;

    assert_eq!(grid.state().all_photos.len(), 5);
}

#[tokio::test]
async fn test_empty_result_set() {
    let server = MockServer::start().await;
    mount_photos(
        &server,
        ResponseTemplate::new(200).set_body_json(&sample_photos(0)),
    )
    .await;

    let grid = grid_for(&server);
    grid.load_initial().await;

    let state = grid.state();
    assert!(state.all_photos.is_empty());
    assert!(state.visible_photos.is_empty());
    assert!(state.error_message.is_none());
    assert!(!state.is_loading);
    assert_window_invariant(&state);
}

#[tokio::test]
async fn test_exactly_one_page_result_set() {
    let server = MockServer::start().await;
    mount_photos(
        &server,
        ResponseTemplate::new(200).set_body_json(&sample_photos(10)),
    )
    .await;

    let grid = grid_for(&server);
    grid.load_initial().await;
    assert_eq!(grid.state().visible_photos.len(), 10);

    // reveal at the last item is a no-op, the window already covers the set
    let state = grid.state();
    grid.load_more_if_needed(state.visible_photos.last());
    let state = grid.state();
    assert_eq!(state.visible_photos.len(), 10);
    assert_eq!(state.revealed, 10);
    assert_window_invariant(&state);
}

#[tokio::test]
async fn test_server_error_leaves_sequences_empty() {
    let server = MockServer::start().await;
    mount_photos(&server, ResponseTemplate::new(500)).await;

    let grid = grid_for(&server);
    grid.load_initial().await;

    let state = grid.state();
    assert!(state.all_photos.is_empty());
    assert!(state.visible_photos.is_empty());
    assert!(state.error_message.is_some());
    assert!(!state.is_loading);
}

#[tokio::test]
async fn test_load_after_error_can_succeed() {
    let server = MockServer::start().await;
    mount_photos(&server, ResponseTemplate::new(500)).await;

    let grid = grid_for(&server);
    grid.load_initial().await;
    assert!(grid.state().error_message.is_some());

    // the error is not fatal: a fresh attempt fetches again
    server.reset().await;
    mount_photos(
        &server,
        ResponseTemplate::new(200).set_body_json(&sample_photos(7)),
    )
    .await;

    grid.load_initial().await;
    let state = grid.state();
    assert!(state.error_message.is_none());
    assert_eq!(state.all_photos.len(), 7);
    assert_eq!(state.visible_photos.len(), 7);
}

#[tokio::test]
async fn test_fetch_photos_decodes_fields() {
    let server = MockServer::start().await;
    mount_photos(
        &server,
        ResponseTemplate::new(200).set_body_string(
            r#"[{"albumId":1,"id":1,"title":"accusamus","url":"https://placehold.co/600","thumbnailUrl":"https://placehold.co/150"}]"#,
        ),
    )
    .await;

    let config = Config {
        base_url: server.uri(),
        ..Config::for_testing()
    };
    let photos = ApiClient::new(&config)
        .fetch_photos()
        .await
        .expect("fetch failed");
    assert_eq!(photos.len(), 1);
    assert_eq!(photos[0].album_id, 1);
    assert_eq!(photos[0].thumbnail_url, "https://placehold.co/150");
}
