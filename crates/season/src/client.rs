// ABOUTME: The SeasonClient tying fetch, extraction, normalization and aggregation together.
// ABOUTME: One explicit pipeline pass per call; no process-wide state, no caching between calls.

use tracing::info;

use crate::constructors::aggregate;
use crate::error::SeasonError;
use crate::extract::{extract_table, RESULTS, STANDINGS};
use crate::fetch::{fetch_page, season_url};
use crate::models::SeasonData;
use crate::options::{ClientBuilder, Options};
use crate::results::normalize_results;
use crate::standings::normalize_standings;

/// Client for loading one season's standings, results and constructor
/// aggregates from the statistics site.
///
/// Each call runs an independent fetch/normalize/aggregate pass; concurrent
/// sessions share nothing but the underlying HTTP connection pool.
pub struct SeasonClient {
    opts: Options,
    http_client: reqwest::Client,
}

impl SeasonClient {
    /// Create a new ClientBuilder for configuring the client.
    pub fn builder() -> ClientBuilder {
        ClientBuilder::new()
    }

    /// Create a new SeasonClient with the given options.
    pub fn new(opts: Options) -> Self {
        let http_client = opts.http_client.clone().unwrap_or_else(|| {
            reqwest::Client::builder()
                .user_agent(&opts.user_agent)
                .timeout(opts.timeout)
                .gzip(true)
                .brotli(true)
                .deflate(true)
                .build()
                .expect("failed to build HTTP client")
        });

        Self { opts, http_client }
    }

    /// Load a season: fetch the page once, extract and normalize both tables
    /// from the same HTML, then derive constructor standings.
    ///
    /// The season identifier must be a 4-digit year; anything else fails with
    /// an InvalidSeason error before any network I/O.
    pub async fn load_season(&self, season: &str) -> Result<SeasonData, SeasonError> {
        validate_season(season)?;

        let url = season_url(&self.opts.base_url, season);
        let html = fetch_page(&self.http_client, &url, season).await?;

        self.season_from_html(&html, season)
    }

    /// Run the extraction pipeline over pre-fetched HTML.
    ///
    /// Same pipeline as [`SeasonClient::load_season`] minus the fetch; this
    /// is the seam for exercising the pipeline against fixtures without
    /// network access.
    pub fn season_from_html(&self, html: &str, season: &str) -> Result<SeasonData, SeasonError> {
        let standings_rows = extract_table(html, &STANDINGS, season)?;
        let standings = normalize_standings(&standings_rows, season)?;

        let results_rows = extract_table(html, &RESULTS, season)?;
        let results = normalize_results(&results_rows, season)?;

        let constructors = aggregate(&standings, season)?;

        info!(
            season,
            drivers = standings.len(),
            races = results.len(),
            teams = constructors.len(),
            "season data loaded"
        );

        Ok(SeasonData {
            season: season.to_string(),
            standings,
            results,
            constructors,
        })
    }
}

/// A season is a 4-digit year.
fn validate_season(season: &str) -> Result<(), SeasonError> {
    if season.len() == 4 && season.chars().all(|c| c.is_ascii_digit()) {
        return Ok(());
    }
    Err(SeasonError::invalid_season(
        season,
        Some(anyhow::anyhow!("expected a 4-digit year, got {:?}", season)),
    ))
}
