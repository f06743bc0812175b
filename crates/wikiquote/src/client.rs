// ABOUTME: The main Client struct that talks to the MediaWiki API and runs quote extraction.
// ABOUTME: Every public entry point validates the language before any network activity.

use std::sync::Arc;

use scraper::Html;

use crate::api::{ParseResponse, QueryResponse};
use crate::error::QuoteError;
use crate::extract::{extract_qotd, extract_quotes_with};
use crate::langs::{LanguagePolicy, LanguageTable};
use crate::options::{ClientBuilder, Options};
use crate::resource::{api_url, fetch_json, FetchOptions};

/// Client for one MediaWiki quote site family.
///
/// Holds an HTTP client and a read-only language table. Calls are
/// independent: each one performs a single request and a single extraction.
pub struct Client {
    opts: Options,
    http_client: reqwest::Client,
    languages: Arc<LanguageTable>,
}

impl Client {
    /// Create a new ClientBuilder for configuring the client.
    pub fn builder() -> ClientBuilder {
        ClientBuilder::new()
    }

    /// Create a new Client with the given options.
    pub fn new(opts: Options) -> Result<Self, QuoteError> {
        let http_client = match opts.http_client.clone() {
            Some(client) => client,
            None => reqwest::Client::builder()
                .user_agent(&opts.user_agent)
                .timeout(opts.timeout)
                .gzip(true)
                .brotli(true)
                .deflate(true)
                .build()
                .map_err(|e| QuoteError::fetch(&opts.api_url, "Build", Some(e.into())))?,
        };

        let languages = opts
            .languages
            .clone()
            .unwrap_or_else(|| Arc::new(LanguageTable::builtin()));

        Ok(Self {
            opts,
            http_client,
            languages,
        })
    }

    pub fn languages(&self) -> &LanguageTable {
        &self.languages
    }

    pub fn is_supported(&self, lang: &str) -> bool {
        self.languages.is_supported(lang)
    }

    /// Supported language codes in sorted order.
    pub fn supported_languages(&self) -> Vec<&str> {
        self.languages.codes().collect()
    }

    /// Language guard shared by every entry point.
    fn policy(&self, lang: &str, op: &str) -> Result<&LanguagePolicy, QuoteError> {
        self.languages
            .get(lang)
            .ok_or_else(|| QuoteError::unsupported_language(lang, op))
    }

    fn fetch_options(&self) -> FetchOptions {
        FetchOptions {
            headers: self.opts.headers.clone(),
        }
    }

    async fn get<T: serde::de::DeserializeOwned>(
        &self,
        lang: &str,
        params: &[(&str, &str)],
    ) -> Result<T, QuoteError> {
        let url = api_url(&self.opts.api_url, lang, params)?;
        fetch_json(&self.http_client, &url, &self.fetch_options()).await
    }

    /// Titles matching a full-text search. An empty query returns no titles
    /// without a request.
    pub async fn search(&self, query: &str, lang: &str) -> Result<Vec<String>, QuoteError> {
        self.policy(lang, "Search")?;
        if query.is_empty() {
            return Ok(Vec::new());
        }

        tracing::debug!(query, lang, "searching titles");
        let resp: QueryResponse = self
            .get(
                lang,
                &[
                    ("action", "query"),
                    ("list", "search"),
                    ("continue", ""),
                    ("srsearch", query),
                ],
            )
            .await?;
        Ok(resp.query.search.into_iter().map(|e| e.title).collect())
    }

    /// Up to `max_titles` random article titles.
    pub async fn random_titles(
        &self,
        lang: &str,
        max_titles: usize,
    ) -> Result<Vec<String>, QuoteError> {
        self.policy(lang, "RandomTitles")?;

        let limit = max_titles.to_string();
        let resp: QueryResponse = self
            .get(
                lang,
                &[
                    ("action", "query"),
                    ("list", "random"),
                    ("rnnamespace", "0"),
                    ("rnlimit", limit.as_str()),
                ],
            )
            .await?;
        Ok(resp
            .query
            .random
            .into_iter()
            .map(|e| e.title)
            .take(max_titles)
            .collect())
    }

    /// Up to `max_quotes` quotes from the page titled `title`.
    ///
    /// Fails with `NoSuchPage` when the API reports no such title and with
    /// `Disambiguation` when the page is tagged as a disambiguation page or has
    /// no categories at all.
    pub async fn quotes(
        &self,
        title: &str,
        max_quotes: usize,
        lang: &str,
    ) -> Result<Vec<String>, QuoteError> {
        let policy = self.policy(lang, "Quotes")?;

        tracing::debug!(title, lang, max_quotes, "fetching page");
        let resp: ParseResponse = self
            .get(
                lang,
                &[
                    ("action", "parse"),
                    ("prop", "text|categories"),
                    ("disableeditsection", ""),
                    ("page", title),
                ],
            )
            .await?;

        if let Some(err) = resp.error {
            return Err(QuoteError::no_such_page(
                title,
                "Quotes",
                Some(anyhow::anyhow!("{}: {}", err.code, err.info)),
            ));
        }
        let page = resp.parse.ok_or_else(|| {
            QuoteError::fetch(
                title,
                "Quotes",
                Some(anyhow::anyhow!("response has neither parse nor error")),
            )
        })?;

        if policy.is_disambiguation(page.category_names()) {
            tracing::warn!(title, lang, "title resolved to a disambiguation page");
            return Err(QuoteError::disambiguation(title, "Quotes"));
        }

        let doc = Html::parse_fragment(page.html().unwrap_or_default());
        Ok(extract_quotes_with(&doc, max_quotes, policy))
    }

    /// Run the language's extraction over an HTML fragment already at hand.
    pub fn quotes_from_html(
        &self,
        html: &str,
        max_quotes: usize,
        lang: &str,
    ) -> Result<Vec<String>, QuoteError> {
        let policy = self.policy(lang, "QuotesFromHtml")?;
        let doc = Html::parse_fragment(html);
        Ok(extract_quotes_with(&doc, max_quotes, policy))
    }

    /// The `(quote, author)` featured on the main page.
    pub async fn quote_of_the_day(&self, lang: &str) -> Result<(String, String), QuoteError> {
        let policy = self.policy(lang, "QuoteOfTheDay")?;
        let selector = policy.qotd.as_ref().ok_or_else(|| {
            QuoteError::qotd_unavailable(
                lang,
                "QuoteOfTheDay",
                Some(anyhow::anyhow!("no quote of the day layout for this language")),
            )
        })?;

        tracing::debug!(lang, main_page = %policy.main_page, "fetching main page");
        let resp: ParseResponse = self
            .get(
                lang,
                &[
                    ("action", "parse"),
                    ("prop", "text"),
                    ("page", policy.main_page.as_str()),
                ],
            )
            .await?;

        let html = match (resp.parse, resp.error) {
            (Some(page), _) => page.text.map(|t| t.content).unwrap_or_default(),
            (None, err) => {
                return Err(QuoteError::qotd_unavailable(
                    &policy.main_page,
                    "QuoteOfTheDay",
                    err.map(|e| anyhow::anyhow!("{}: {}", e.code, e.info)),
                ))
            }
        };

        let doc = Html::parse_fragment(&html);
        extract_qotd(&doc, selector)
    }
}
