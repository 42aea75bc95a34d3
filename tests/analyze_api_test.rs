//! Router-level tests for `/analyze`, driven through `tower::ServiceExt::oneshot`
//! with a canned fetcher so nothing touches the network.

use async_trait::async_trait;
use axum::{
    body::Body,
    http::{Request, StatusCode},
};
use cite_scout::core::config::ScoutConfig;
use cite_scout::core::error::Result;
use cite_scout::scraping::{FetchedPage, PageFetcher};
use cite_scout::{api, AnalysisError, AppState};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use tower::ServiceExt; // for `oneshot`
use url::Url;

const ARTICLE: &str = r#"<!doctype html>
<html><head>
  <title>How to evaluate machine learning models</title>
  <meta name="description" content="A practical guide to evaluating machine learning models with real data and clear metrics.">
  <meta property="article:published_time" content="2020-01-15T09:00:00Z">
  <script type="application/ld+json">{"@context":"https://schema.org","@type":"Article"}</script>
</head><body>
  <h1>Evaluating models</h1><h2>Metrics</h2><h3>Pitfalls</h3>
  <p class="byline">Written by Dana Park, a researcher with 10 years of experience.</p>
  <p>According to a 2019 survey, 62% of teams skip validation.</p>
  <ul><li>Accuracy</li><li>Recall</li></ul>
  <ol><li>Split</li><li>Train</li></ol>
  <a href="https://arxiv.org/abs/1706.03762">paper</a>
  <a href="https://scikit-learn.org/stable/">docs</a>
  <a href="/about">about</a>
</body></html>"#;

enum Canned {
    Page(&'static str),
    Failure,
}

struct CannedFetcher {
    response: Canned,
    calls: AtomicUsize,
}

impl CannedFetcher {
    fn new(response: Canned) -> Arc<Self> {
        Arc::new(Self {
            response,
            calls: AtomicUsize::new(0),
        })
    }
}

#[async_trait]
impl PageFetcher for CannedFetcher {
    async fn fetch(&self, url: &Url) -> Result<FetchedPage> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match self.response {
            Canned::Page(body) => Ok(FetchedPage {
                url: url.clone(),
                status_code: 200,
                body: body.to_string(),
            }),
            Canned::Failure => Err(AnalysisError::Fetch("connection refused".to_string())),
        }
    }
}

fn app_with(fetcher: Arc<CannedFetcher>) -> axum::Router {
    let state = AppState::new(ScoutConfig::default())
        .expect("state")
        .with_fetcher(fetcher);
    api::router(Arc::new(state))
}

async fn post_analyze(app: axum::Router, body: &str) -> (StatusCode, serde_json::Value) {
    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/analyze")
                .header("content-type", "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json = serde_json::from_slice(&bytes).unwrap_or(serde_json::Value::Null);
    (status, json)
}

#[tokio::test]
async fn analyzes_a_page() {
    let fetcher = CannedFetcher::new(Canned::Page(ARTICLE));
    let (status, json) = post_analyze(
        app_with(fetcher.clone()),
        r#"{"url": "https://blog.example.com/ml-eval"}"#,
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetcher.calls.load(Ordering::SeqCst), 1);
    assert_eq!(json["url"], "https://blog.example.com/ml-eval");
    assert_eq!(json["max_score"], 100);

    let names = [
        "structure",
        "author",
        "metadata",
        "keywords",
        "tone",
        "credibility",
        "readability",
        "freshness",
        "comprehensiveness",
        "citations",
    ];
    let mut sum = 0;
    for name in names {
        let criterion = &json["scores"][name];
        let score = criterion["score"].as_u64().unwrap();
        let max = criterion["max"].as_u64().unwrap();
        assert!(score <= max, "{} {} > {}", name, score, max);
        assert!(criterion["findings"].is_array());
        sum += score;
    }
    assert_eq!(json["total_score"].as_u64().unwrap(), sum);
    assert_eq!(json["percentage"].as_f64().unwrap(), sum as f64);

    // structure: 3 headings, 2 lists, only 2 paragraphs, no contents, short markup
    assert_eq!(json["scores"]["structure"]["score"], 5);
    // metadata: title, description, date, schema.org
    assert_eq!(json["scores"]["metadata"]["score"], 8);
    // citations: two external links, no formal citations, no quotes
    assert_eq!(json["scores"]["citations"]["score"], 2);

    let finding = &json["scores"]["metadata"]["findings"][0];
    assert_eq!(finding["passed"], true);
    assert!(finding["message"].is_string());

    assert!(json["recommendations"]
        .as_array()
        .unwrap()
        .iter()
        .any(|r| r.as_str().unwrap().starts_with("Improve content structure")));
    assert!(!json["research_insights"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn missing_url_is_bad_request_without_fetch() {
    let fetcher = CannedFetcher::new(Canned::Page(ARTICLE));
    for body in [r#"{}"#, r#"{"url": ""}"#, r#"{"url": null}"#, "not json", ""] {
        let (status, json) = post_analyze(app_with(fetcher.clone()), body).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "body {:?}", body);
        assert_eq!(json["error"], "URL is required");
    }
    assert_eq!(fetcher.calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn malformed_url_is_bad_request_without_fetch() {
    let fetcher = CannedFetcher::new(Canned::Page(ARTICLE));
    for url in ["example.com", "ftp://example.com/file", "https://"] {
        let body = serde_json::json!({ "url": url }).to_string();
        let (status, json) = post_analyze(app_with(fetcher.clone()), &body).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "url {:?}", url);
        assert!(json["error"].is_string());
        assert!(json.get("scores").is_none());
    }
    assert_eq!(fetcher.calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn fetch_failure_is_internal_error_without_result() {
    let fetcher = CannedFetcher::new(Canned::Failure);
    let (status, json) = post_analyze(
        app_with(fetcher.clone()),
        r#"{"url": "https://unreachable.example.com/"}"#,
    )
    .await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(fetcher.calls.load(Ordering::SeqCst), 1);
    let obj = json.as_object().unwrap();
    assert_eq!(obj.len(), 1);
    assert!(obj["error"].as_str().unwrap().contains("try again"));
}

#[tokio::test]
async fn health_endpoint_reports_service() {
    let app = app_with(CannedFetcher::new(Canned::Failure));
    let response = app
        .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(json["service"], "cite-scout");
}
