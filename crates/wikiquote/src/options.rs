// ABOUTME: Configuration options for the wikiquote client and the fluent ClientBuilder.
// ABOUTME: Covers HTTP settings, the API URL template and the language table.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use crate::client::Client;
use crate::error::QuoteError;
use crate::langs::LanguageTable;
use crate::resource::DEFAULT_API_URL;

/// Number of quotes or titles returned when the caller does not say.
pub const DEFAULT_MAX_QUOTES: usize = 20;

/// Configuration options for the wikiquote client.
#[derive(Debug, Clone)]
pub struct Options {
    pub timeout: Duration,
    pub user_agent: String,
    /// API endpoint template; `{lang}` is replaced by the language code.
    pub api_url: String,
    pub http_client: Option<reqwest::Client>,
    pub headers: HashMap<String, String>,
    pub languages: Option<Arc<LanguageTable>>,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(30),
            user_agent: concat!("wikiquote-rs/", env!("CARGO_PKG_VERSION")).to_string(),
            api_url: DEFAULT_API_URL.to_string(),
            http_client: None,
            headers: HashMap::new(),
            languages: None,
        }
    }
}

/// Builder for constructing Client instances with custom configuration.
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

    /// Point the client at another MediaWiki API, e.g.
    /// `https://{lang}.wikiquote.org/w/api.php`.
    pub fn api_url(mut self, template: impl Into<String>) -> Self {
        self.opts.api_url = template.into();
        self
    }

    /// Use a custom HTTP client.
    pub fn http_client(mut self, client: reqwest::Client) -> Self {
        self.opts.http_client = Some(client);
        self
    }

    /// Add a custom header to all requests.
    pub fn header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.opts.headers.insert(key.into(), value.into());
        self
    }

    /// Replace the built-in language table.
    pub fn languages(mut self, table: LanguageTable) -> Self {
        self.opts.languages = Some(Arc::new(table));
        self
    }

    /// Build the Client with the configured options.
    pub fn build(self) -> Result<Client, QuoteError> {
        Client::new(self.opts)
    }
}

impl Default for ClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}
