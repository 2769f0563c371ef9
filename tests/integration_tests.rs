use apod_gallery::services::apod::{ApodError, ApodSource};
use apod_gallery::services::facts::SPACE_FACTS;
use apod_gallery::web::{self, AppState};
use apod_gallery::Config;
use async_trait::async_trait;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::response::Response;
use http_body_util::BodyExt;
use serde_json::{json, Value};
use std::sync::{Arc, Mutex};
use tower::ServiceExt;

enum Reply {
    Body(Value),
    NotJson,
}

struct StubSource {
    reply: Reply,
    calls: Mutex<Vec<(String, String)>>,
}

impl StubSource {
    fn new(reply: Reply) -> Arc<Self> {
        Arc::new(Self {
            reply,
            calls: Mutex::new(Vec::new()),
        })
    }

    fn calls(&self) -> Vec<(String, String)> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl ApodSource for StubSource {
    async fn fetch_range(&self, start_date: &str, end_date: &str) -> Result<Value, ApodError> {
        self.calls
            .lock()
            .unwrap()
            .push((start_date.to_string(), end_date.to_string()));
        match &self.reply {
            Reply::Body(body) => Ok(body.clone()),
            Reply::NotJson => Err(serde_json::from_str::<Value>("<html>").unwrap_err().into()),
        }
    }
}

fn create_test_state(source: Arc<StubSource>) -> Arc<AppState> {
    let state = AppState::with_source(Config::default(), source).expect("Failed to build state");
    Arc::new(state)
}

async fn get(state: &Arc<AppState>, uri: &str) -> Response {
    web::router(state.clone())
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap()
}

async fn body_string(response: Response) -> String {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    String::from_utf8(bytes.to_vec()).unwrap()
}

fn cell_ids(html: &str) -> Vec<String> {
    let marker = "hx-get=\"/htmx/modal/";
    html.match_indices(marker)
        .map(|(i, _)| {
            let rest = &html[i + marker.len()..];
            rest[..rest.find('"').unwrap()].to_string()
        })
        .collect()
}

mod page_tests {
    use super::*;

    #[tokio::test]
    async fn test_index_renders_controls_and_fact() {
        let source = StubSource::new(Reply::Body(json!([])));
        let state = create_test_state(source.clone());

        let response = get(&state, "/").await;
        assert_eq!(response.status(), StatusCode::OK);
        let html = body_string(response).await;

        for id in [
            "startDate",
            "endDate",
            "gallery",
            "imageModal",
            "closeModal",
            "modalImage",
            "modalTitle",
            "modalDate",
            "modalExplanation",
            "spaceFact",
        ] {
            assert!(html.contains(&format!("id=\"{}\"", id)), "missing #{}", id);
        }
        assert!(html.contains("class=\"filters\""));
        assert!(html.contains("min=\"1995-06-16\""));
        assert!(html.contains("display: none"));
        assert!(SPACE_FACTS
            .iter()
            .any(|fact| html.contains(&fact.replace('/', "&#x2F;"))));
        assert!(source.calls().is_empty());
    }

    #[tokio::test]
    async fn test_stylesheet_and_health() {
        let state = create_test_state(StubSource::new(Reply::Body(json!([]))));

        let response = get(&state, "/static/gallery.css").await;
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers()["content-type"],
            "text/css; charset=utf-8"
        );

        let response = get(&state, "/health").await;
        assert_eq!(body_string(response).await, "ok");
    }

    #[tokio::test]
    async fn test_security_headers_allow_video_frames() {
        let state = create_test_state(StubSource::new(Reply::Body(json!([]))));
        let response = get(&state, "/").await;

        assert_eq!(response.headers()["x-content-type-options"], "nosniff");
        let csp = response.headers()["content-security-policy"]
            .to_str()
            .unwrap();
        assert!(csp.contains("https://www.youtube.com"));
        assert!(csp.contains("https://player.vimeo.com"));
    }
}

mod gallery_tests {
    use super::*;

    #[tokio::test]
    async fn test_missing_date_prompts_without_request() {
        let source = StubSource::new(Reply::Body(json!([])));
        let state = create_test_state(source.clone());

        for uri in [
            "/htmx/gallery?start_date=2024-01-01&end_date=",
            "/htmx/gallery?end_date=2024-01-09",
            "/htmx/gallery/results?start_date=&end_date=2024-01-09",
        ] {
            let response = get(&state, uri).await;
            assert_eq!(response.status(), StatusCode::OK);
            assert_eq!(response.headers()["hx-reswap"], "none");
            let trigger = response.headers()["hx-trigger"].to_str().unwrap();
            assert!(trigger.contains("showPrompt"));
            assert!(trigger.contains("Please select both a start and end date."));
        }

        assert!(source.calls().is_empty());
    }

    #[tokio::test]
    async fn test_button_shows_loading_placeholder() {
        let source = StubSource::new(Reply::Body(json!([])));
        let state = create_test_state(source.clone());

        let response = get(&state, "/htmx/gallery?start_date=2024-01-01&end_date=2024-01-09").await;
        let html = body_string(response).await;

        assert!(html.contains("loading-message"));
        assert!(html.contains("Loading space photos"));
        assert!(html.contains("/htmx/gallery/results?start_date="));
        assert!(html.contains("hx-trigger=\"load\""));
        assert!(source.calls().is_empty());
    }

    #[tokio::test]
    async fn test_results_issue_one_request_with_verbatim_dates() {
        let source = StubSource::new(Reply::Body(json!([])));
        let state = create_test_state(source.clone());

        get(
            &state,
            "/htmx/gallery/results?start_date=2024-01-01&end_date=2024-01-09",
        )
        .await;

        assert_eq!(
            source.calls(),
            vec![("2024-01-01".to_string(), "2024-01-09".to_string())]
        );
    }

    #[tokio::test]
    async fn test_results_render_images_in_order() {
        let source = StubSource::new(Reply::Body(json!([
            {"media_type": "image", "url": "https://apod.nasa.gov/1.jpg", "title": "First", "date": "2024-01-01", "explanation": "One"},
            {"media_type": "image", "url": "https://apod.nasa.gov/2.jpg", "title": "Second", "date": "2024-01-02", "explanation": "Two"},
        ])));
        let state = create_test_state(source);

        let html = body_string(
            get(
                &state,
                "/htmx/gallery/results?start_date=2024-01-01&end_date=2024-01-02",
            )
            .await,
        )
        .await;

        assert_eq!(html.matches("class=\"gallery-item\"").count(), 2);
        assert_eq!(cell_ids(&html).len(), 2);
        let first = html.find("First").unwrap();
        let second = html.find("Second").unwrap();
        assert!(first < second);
    }

    #[tokio::test]
    async fn test_results_render_video_embeds_and_links() {
        let source = StubSource::new(Reply::Body(json!([
            {"media_type": "video", "url": "https://www.youtube.com/watch?v=abc123", "title": "Tube", "date": "2024-01-01", "explanation": ""},
            {"media_type": "video", "url": "https://apod.nasa.gov/movie.mp4", "title": "Raw", "date": "2024-01-02", "explanation": ""},
        ])));
        let state = create_test_state(source);

        let html = body_string(
            get(
                &state,
                "/htmx/gallery/results?start_date=2024-01-01&end_date=2024-01-02",
            )
            .await,
        )
        .await;

        assert_eq!(html.matches("gallery-item video-item").count(), 2);
        assert_eq!(html.matches("<iframe").count(), 1);
        assert!(html.contains("height=\"250\""));
        assert!(html.contains("abc123"));
        assert!(html.contains("Watch Video"));
        assert!(html.contains("target=\"_blank\" rel=\"noopener\""));
    }

    #[tokio::test]
    async fn test_empty_results_show_no_images() {
        let state = create_test_state(StubSource::new(Reply::Body(json!([]))));

        let html = body_string(
            get(
                &state,
                "/htmx/gallery/results?start_date=2024-01-01&end_date=2024-01-09",
            )
            .await,
        )
        .await;

        assert!(html.contains("No images found for this date range."));
        assert!(cell_ids(&html).is_empty());
    }

    #[tokio::test]
    async fn test_upstream_error_object_shows_no_images() {
        let state = create_test_state(StubSource::new(Reply::Body(json!({
            "code": 400,
            "msg": "start_date cannot be after end_date"
        }))));

        let html = body_string(
            get(
                &state,
                "/htmx/gallery/results?start_date=2024-01-09&end_date=2024-01-01",
            )
            .await,
        )
        .await;

        assert!(html.contains("No images found for this date range."));
    }

    #[tokio::test]
    async fn test_fetch_failure_shows_generic_error() {
        let source = StubSource::new(Reply::NotJson);
        let state = create_test_state(source.clone());

        let response = get(
            &state,
            "/htmx/gallery/results?start_date=2024-01-01&end_date=2024-01-09",
        )
        .await;
        assert_eq!(response.status(), StatusCode::OK);
        let html = body_string(response).await;

        assert!(html.contains("Sorry, something went wrong. Please try again later."));
        assert!(!html.contains("<html>"));
        assert_eq!(source.calls().len(), 1);
    }
}

mod modal_tests {
    use super::*;

    async fn render_single(state: &Arc<AppState>) -> String {
        let html = body_string(
            get(
                state,
                "/htmx/gallery/results?start_date=2024-01-01&end_date=2024-01-01",
            )
            .await,
        )
        .await;
        let ids = cell_ids(&html);
        assert_eq!(ids.len(), 1);
        ids[0].clone()
    }

    #[tokio::test]
    async fn test_open_modal_shows_stored_item() {
        let state = create_test_state(StubSource::new(Reply::Body(json!([
            {"media_type": "image", "url": "u1", "title": "T1", "date": "2024-01-01", "explanation": "a \"b\" c"}
        ]))));
        let cell = render_single(&state).await;

        let response = get(&state, &format!("/htmx/modal/{}", cell)).await;
        assert_eq!(response.status(), StatusCode::OK);
        let html = body_string(response).await;

        assert!(html.contains("id=\"imageModal\""));
        assert!(html.contains("display: block"));
        assert!(html.contains("src=\"u1\""));
        assert!(html.contains("T1"));
        assert!(html.contains("2024-01-01"));
        assert!(html.contains("a &quot;b&quot; c"));
    }

    fn carried(image_src: &str, title: &str, date: &str, explanation: &str) -> String {
        url::form_urlencoded::Serializer::new(String::new())
            .append_pair("image_src", image_src)
            .append_pair("title", title)
            .append_pair("date", date)
            .append_pair("explanation", explanation)
            .finish()
    }

    #[tokio::test]
    async fn test_close_modal_hides_but_keeps_content() {
        let state = create_test_state(StubSource::new(Reply::Body(json!([
            {"media_type": "image", "url": "u1", "title": "T1", "date": "2024-01-01", "explanation": "Nebula"}
        ]))));
        let cell = render_single(&state).await;

        let opened = body_string(get(&state, &format!("/htmx/modal/{}", cell)).await).await;
        assert!(opened.contains("hx-get=\"/htmx/modal/close\""));
        assert!(opened.contains("click target:#imageModal"));
        assert!(opened.contains("&quot;explanation&quot;:&quot;Nebula&quot;"));

        let query = carried("u1", "T1", "2024-01-01", "Nebula");
        let response = get(&state, &format!("/htmx/modal/close?{}", query)).await;
        assert_eq!(response.status(), StatusCode::OK);
        let html = body_string(response).await;

        assert!(html.contains("display: none"));
        assert!(html.contains("Nebula"));
    }

    #[tokio::test]
    async fn test_close_without_fields_still_hides() {
        let state = create_test_state(StubSource::new(Reply::Body(json!([]))));

        let response = get(&state, "/htmx/modal/close").await;
        assert_eq!(response.status(), StatusCode::OK);
        assert!(body_string(response).await.contains("display: none"));
    }

    #[tokio::test]
    async fn test_cells_keep_working_after_eviction() {
        let state = create_test_state(StubSource::new(Reply::Body(json!([
            {"media_type": "image", "url": "u1", "title": "T1", "date": "2024-01-01", "explanation": "a \"b\" c"}
        ]))));
        let html = body_string(
            get(
                &state,
                "/htmx/gallery/results?start_date=2024-01-01&end_date=2024-01-01",
            )
            .await,
        )
        .await;
        let cell = cell_ids(&html).remove(0);
        assert!(html.contains("hx-vals=\"{&quot;image_src&quot;:&quot;u1&quot;"));

        let retained = Config::default().gallery.retained_renders;
        for _ in 0..retained {
            render_single(&state).await;
        }

        let response = get(&state, &format!("/htmx/modal/{}", cell)).await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let query = carried("u1", "T1", "2024-01-01", "a \"b\" c");
        let response = get(&state, &format!("/htmx/modal/{}?{}", cell, query)).await;
        assert_eq!(response.status(), StatusCode::OK);
        let opened = body_string(response).await;
        assert!(opened.contains("display: block"));
        assert!(opened.contains("src=\"u1\""));
        assert!(opened.contains("a &quot;b&quot; c"));

        let response = get(&state, &format!("/htmx/modal/close?{}", query)).await;
        assert_eq!(response.status(), StatusCode::OK);
        let closed = body_string(response).await;
        assert!(closed.contains("display: none"));
        assert!(closed.contains("T1"));
    }

    #[tokio::test]
    async fn test_video_cell_opens_modal_with_url_as_image() {
        let state = create_test_state(StubSource::new(Reply::Body(json!([
            {"media_type": "video", "url": "https://vimeo.com/12345", "title": "V", "date": "2024-01-01", "explanation": "Clip"}
        ]))));
        let cell = render_single(&state).await;

        let html = body_string(get(&state, &format!("/htmx/modal/{}", cell)).await).await;

        assert!(html.contains("display: block"));
        assert!(html.contains("id=\"modalImage\""));
        assert!(html.contains("vimeo.com"));
    }

    #[tokio::test]
    async fn test_unknown_cell_is_not_found() {
        let state = create_test_state(StubSource::new(Reply::Body(json!([]))));

        let response = get(&state, "/htmx/modal/garbage").await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let response = get(&state, "/htmx/modal/6f1b6c8e6c2e4bb0a4a1d5c0f2e9b7aa-0").await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
