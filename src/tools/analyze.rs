use crate::core::error::{AnalysisError, Result};
use crate::scoring::ScoringEngine;
use crate::scraping::ParsedDocument;
use crate::types::AnalysisResult;
use crate::AppState;
use chrono::{DateTime, Utc};
use tracing::{debug, error, info};
use url::Url;

/// Checks that `raw` is present and is an absolute http(s) URL with a host.
pub fn validate_url(raw: Option<&str>) -> Result<Url> {
    let raw = raw.map(str::trim).unwrap_or_default();
    if raw.is_empty() {
        return Err(AnalysisError::Validation("URL is required".to_string()));
    }

    let url = Url::parse(raw)
        .map_err(|e| AnalysisError::Validation(format!("Invalid URL format: {}", e)))?;

    if url.scheme() != "http" && url.scheme() != "https" {
        return Err(AnalysisError::Validation(
            "URL must use HTTP or HTTPS protocol".to_string(),
        ));
    }
    if !url.host_str().is_some_and(|h| !h.is_empty()) {
        return Err(AnalysisError::Validation("URL must include a host".to_string()));
    }

    Ok(url)
}

/// Parses and scores markup already in hand. Never fails: unreadable markup
/// yields an empty document, which simply scores low.
pub fn analyze_markup(
    engine: &ScoringEngine,
    html: &str,
    url: Url,
    now: DateTime<Utc>,
) -> AnalysisResult {
    let doc = ParsedDocument::parse(html, url);
    engine.analyze(&doc, now)
}

/// Full pipeline: validate, fetch once, parse, score.
/// The result reports the requested URL even when the fetch was redirected.
pub async fn analyze_url(state: &AppState, raw_url: Option<&str>) -> Result<AnalysisResult> {
    let url = validate_url(raw_url)?;
    info!("Analyzing {}", url);

    let page = state.fetcher.fetch(&url).await.map_err(|e| {
        error!("Analysis of {} aborted: {}", url, e);
        e
    })?;
    if page.url != url {
        debug!("{} redirected to {}", url, page.url);
    }

    // links are judged against the requested origin, not the redirect target
    let result = analyze_markup(&state.engine, &page.body, url, Utc::now());
    info!(
        "Analyzed {}: {}/{} ({:.0}%), {} recommendations",
        result.url,
        result.total_score,
        result.max_score,
        result.percentage,
        result.recommendations.len()
    );
    Ok(result)
}
