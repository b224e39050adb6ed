//! DuckDuckGo HTML search client
//!
//! Queries the JavaScript-free HTML endpoint and scrapes the result list.

use crate::client::{SearchClient, SearchResult};
use crate::config::SearchSettings;
use crate::error::{Result, SearchError};
use async_trait::async_trait;
use scraper::{Html, Selector};
use tracing::{debug, info, warn};
use url::Url;

/// Markers of the bot-detection / CAPTCHA page
const BLOCKED_MARKERS: &[&str] = &["anomaly-modal", "select all squares containing"];

/// Search client backed by DuckDuckGo
#[derive(Debug, Clone)]
pub struct DuckDuckGoClient {
    http: reqwest::Client,
    endpoint: String,
}

impl DuckDuckGoClient {
    /// Build a client from settings
    ///
    /// Fails with [`SearchError::Unavailable`] if the HTTP client cannot be constructed.
    pub fn new(settings: &SearchSettings) -> Result<Self> {
        let mut builder = reqwest::Client::builder().user_agent(settings.user_agent.as_str());
        if let Some(timeout) = settings.timeout() {
            builder = builder.timeout(timeout);
        }

        let http = builder
            .build()
            .map_err(|e| SearchError::Unavailable(e.to_string()))?;

        debug!("DuckDuckGo client ready for {}", settings.endpoint);
        Ok(Self {
            http,
            endpoint: settings.endpoint.clone(),
        })
    }
}

#[async_trait]
impl SearchClient for DuckDuckGoClient {
    async fn search(&self, query: &str, max_results: usize) -> Result<Vec<SearchResult>> {
        info!("Searching DuckDuckGo for: {}", query);

        let html = self
            .http
            .get(&self.endpoint)
            .query(&[("q", query)])
            .send()
            .await?
            .error_for_status()?
            .text()
            .await?;

        let results = parse_results(&html, max_results)?;
        info!("Found {} results for query: {}", results.len(), query);
        Ok(results)
    }
}

/// Parse a DuckDuckGo HTML result page
pub fn parse_results(html: &str, max_results: usize) -> Result<Vec<SearchResult>> {
    if BLOCKED_MARKERS.iter().any(|marker| html.contains(marker)) {
        warn!("DuckDuckGo bot detection triggered");
        return Err(SearchError::Blocked);
    }

    let result_selector = selector(".result")?;
    let title_selector = selector(".result__a")?;
    let snippet_selector = selector(".result__snippet")?;

    let document = Html::parse_document(html);
    let mut results = Vec::new();

    for element in document.select(&result_selector) {
        if results.len() >= max_results {
            break;
        }

        // Skip ads
        if element
            .value()
            .attr("class")
            .is_some_and(|class| class.contains("result--ad"))
        {
            continue;
        }

        let Some(title_node) = element.select(&title_selector).next() else {
            continue;
        };

        let title = title_node.text().collect::<String>().trim().to_string();
        let url = clean_url(title_node.value().attr("href").unwrap_or(""));
        let snippet = element
            .select(&snippet_selector)
            .next()
            .map(|node| node.text().collect::<String>().trim().to_string())
            .unwrap_or_default();

        results.push(SearchResult { title, url, snippet });
    }

    Ok(results)
}

fn selector(css: &str) -> Result<Selector> {
    Selector::parse(css).map_err(|e| SearchError::Parse(format!("invalid selector {css}: {e}")))
}

/// Resolve DuckDuckGo redirect links to the target URL
fn clean_url(raw_url: &str) -> String {
    let url_str = if raw_url.starts_with("//") {
        format!("https:{raw_url}")
    } else if raw_url.starts_with('/') {
        format!("https://duckduckgo.com{raw_url}")
    } else {
        raw_url.to_string()
    };

    if let Ok(parsed) = Url::parse(&url_str) {
        // The real URL sits in the 'uddg' query parameter
        if let Some((_, target)) = parsed.query_pairs().find(|(k, _)| k == "uddg") {
            return target.into_owned();
        }
    }

    url_str
}

#[cfg(test)]
mod tests {
    use super::*;

    const PAGE: &str = r#"
<html><body>
  <div class="result results_links result--ad">
    <a class="result__a" href="https://ads.example.com">Sponsored</a>
    <a class="result__snippet">Buy now</a>
  </div>
  <div class="result results_links">
    <a class="result__a" href="//duckduckgo.com/l/?uddg=https%3A%2F%2Fexample.com%2Fai&amp;rut=x">AI Trends</a>
    <a class="result__snippet">  Latest developments in AI.  </a>
  </div>
  <div class="result results_links">
    <a class="result__a" href="https://rust-lang.org/">Rust</a>
  </div>
  <div class="result results_links">
    <a class="result__a" href="https://third.example.com/">Third</a>
    <a class="result__snippet">Third snippet</a>
  </div>
</body></html>
"#;

    #[test]
    fn test_parse_results_skips_ads_and_cleans_urls() {
        let Ok(results) = parse_results(PAGE, 5) else {
            panic!("page should parse");
        };

        assert_eq!(results.len(), 3);
        assert_eq!(
            results[0],
            SearchResult::new("AI Trends", "https://example.com/ai", "Latest developments in AI.")
        );
        assert_eq!(results[1].title, "Rust");
        assert!(results[1].snippet.is_empty());
    }

    #[test]
    fn test_parse_results_honours_limit() {
        let Ok(results) = parse_results(PAGE, 1) else {
            panic!("page should parse");
        };
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].title, "AI Trends");
    }

    #[test]
    fn test_parse_results_detects_captcha() {
        let page = r#"<div class="anomaly-modal">Please select all squares containing a duck</div>"#;
        assert!(matches!(parse_results(page, 5), Err(SearchError::Blocked)));
    }

    #[test]
    fn test_clean_url() {
        assert_eq!(clean_url("https://example.com/x"), "https://example.com/x");
        assert_eq!(clean_url("//example.com/y"), "https://example.com/y");
        assert_eq!(
            clean_url("/l/?uddg=https%3A%2F%2Fexample.org%2F"),
            "https://example.org/"
        );
    }

    #[test]
    fn test_client_builds_from_default_settings() {
        assert!(DuckDuckGoClient::new(&SearchSettings::default()).is_ok());
    }
}
