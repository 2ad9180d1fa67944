// ABOUTME: HTTP fetching for season pages: one GET per load, no retries, no caching.
// ABOUTME: Maps transport errors, timeouts, and non-2xx statuses to Fetch errors with season context.

use tracing::debug;

use crate::error::SeasonError;

/// Base URL of the statistics site.
pub const DEFAULT_BASE_URL: &str = "https://www.racing-statistics.com";

/// Table identifier used in fetch error context.
const PAGE: &str = "season page";

/// Build the URL for a season page from the fixed template.
pub fn season_url(base: &str, season: &str) -> String {
    format!("{}/en/seasons/{}", base.trim_end_matches('/'), season)
}

/// Fetch the season page at the given URL and return the body as text.
///
/// Issues exactly one GET. A failed fetch aborts the season load; there is
/// no retry and no fallback source.
pub async fn fetch_page(
    client: &reqwest::Client,
    url: &str,
    season: &str,
) -> Result<String, SeasonError> {
    if url.is_empty() {
        return Err(SeasonError::fetch(
            season,
            PAGE,
            Some(anyhow::anyhow!("empty URL")),
        ));
    }

    let parsed_url = url::Url::parse(url).map_err(|e| {
        SeasonError::fetch(season, PAGE, Some(anyhow::anyhow!("invalid URL: {}", e)))
    })?;

    let scheme = parsed_url.scheme();
    if scheme != "http" && scheme != "https" {
        return Err(SeasonError::fetch(
            season,
            PAGE,
            Some(anyhow::anyhow!("scheme must be http or https")),
        ));
    }

    debug!(url, season, "fetching season page");

    let response = client.get(url).send().await.map_err(|e| {
        let detail = if e.is_timeout() {
            anyhow::anyhow!("request timed out: {}", e)
        } else {
            anyhow::anyhow!("request failed: {}", e)
        };
        SeasonError::fetch(season, PAGE, Some(detail))
    })?;

    let status = response.status();
    if !status.is_success() {
        return Err(SeasonError::fetch(
            season,
            PAGE,
            Some(anyhow::anyhow!("HTTP status {}", status.as_u16())),
        ));
    }

    let body = response.text().await.map_err(|e| {
        SeasonError::fetch(
            season,
            PAGE,
            Some(anyhow::anyhow!("failed to read body: {}", e)),
        )
    })?;

    debug!(season, bytes = body.len(), "season page fetched");
    Ok(body)
}
