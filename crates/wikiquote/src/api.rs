// ABOUTME: Serde models for the MediaWiki action API responses the client consumes.
// ABOUTME: Covers action=parse (page text and categories) and action=query (search, random).

use serde::Deserialize;

/// Response of `action=parse`.
///
/// MediaWiki answers a missing title with an `error` object and no `parse`.
#[derive(Debug, Clone, Deserialize)]
pub struct ParseResponse {
    #[serde(default)]
    pub parse: Option<ParsedPage>,
    #[serde(default)]
    pub error: Option<ApiError>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ParsedPage {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub text: Option<Star>,
    #[serde(default)]
    pub categories: Vec<Category>,
}

impl ParsedPage {
    /// Category names, e.g. `Disambiguation_pages`.
    pub fn category_names(&self) -> impl Iterator<Item = &str> {
        self.categories.iter().map(|c| c.name.as_str())
    }

    /// The rendered HTML fragment, if the response carried one.
    pub fn html(&self) -> Option<&str> {
        self.text.as_ref().map(|t| t.content.as_str())
    }
}

/// MediaWiki's legacy JSON format wraps scalar content in a `*` key.
#[derive(Debug, Clone, Deserialize)]
pub struct Star {
    #[serde(rename = "*")]
    pub content: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Category {
    #[serde(rename = "*")]
    pub name: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ApiError {
    #[serde(default)]
    pub code: String,
    #[serde(default)]
    pub info: String,
}

/// Response of `action=query`.
#[derive(Debug, Clone, Deserialize)]
pub struct QueryResponse {
    pub query: Query,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Query {
    #[serde(default)]
    pub search: Vec<TitleEntry>,
    #[serde(default)]
    pub random: Vec<TitleEntry>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TitleEntry {
    pub title: String,
}
