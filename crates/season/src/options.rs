// ABOUTME: Configuration options for the season client and a fluent ClientBuilder.
// ABOUTME: Base URL is overridable so tests can point the client at a local mock server.

use std::time::Duration;

use crate::client::SeasonClient;
use crate::fetch::DEFAULT_BASE_URL;

/// Configuration options for the season client.
#[derive(Debug, Clone)]
pub struct Options {
    pub timeout: Duration,
    pub user_agent: String,
    pub base_url: String,
    pub http_client: Option<reqwest::Client>,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(30),
            user_agent: "gridstats/0.1".to_string(),
            base_url: DEFAULT_BASE_URL.to_string(),
            http_client: None,
        }
    }
}

/// Builder for constructing SeasonClient instances with custom configuration.
#[derive(Debug, Clone)]
pub struct ClientBuilder {
    opts: Options,
}

impl ClientBuilder {
    /// Create a new ClientBuilder with default options.
    pub fn new() -> Self {
        Self {
            opts: Options::default(),
        }
    }

    /// Set the request timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.opts.timeout = timeout;
        self
    }

    /// Set the User-Agent header.
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.opts.user_agent = user_agent.into();
        self
    }

    /// Override the statistics site base URL.
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.opts.base_url = base_url.into();
        self
    }

    /// Use a custom HTTP client.
    pub fn http_client(mut self, client: reqwest::Client) -> Self {
        self.opts.http_client = Some(client);
        self
    }

    /// Build the SeasonClient.
    pub fn build(self) -> SeasonClient {
        SeasonClient::new(self.opts)
    }
}

impl Default for ClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}
