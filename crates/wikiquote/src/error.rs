// ABOUTME: Error types for the wikiquote client including the ErrorCode enum and QuoteError struct.
// ABOUTME: Provides categorized errors with convenience constructors and boolean helpers.

use std::fmt;

/// Error codes representing the different ways a wikiquote call can fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    UnsupportedLanguage,
    NoSuchPage,
    Disambiguation,
    QotdUnavailable,
    InvalidUrl,
    Fetch,
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ErrorCode::UnsupportedLanguage => "unsupported language",
            ErrorCode::NoSuchPage => "no such page",
            ErrorCode::Disambiguation => "disambiguation page",
            ErrorCode::QotdUnavailable => "quote of the day unavailable",
            ErrorCode::InvalidUrl => "invalid URL",
            ErrorCode::Fetch => "fetch error",
        };
        write!(f, "{}", s)
    }
}

/// The error type for every client and extraction operation.
///
/// `target` names what the operation was about: a page title, a language
/// code, or a request URL depending on `op`.
#[derive(Debug, thiserror::Error)]
pub struct QuoteError {
    pub code: ErrorCode,
    pub target: String,
    pub op: String,
    #[source]
    pub source: Option<anyhow::Error>,
}

impl fmt::Display for QuoteError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "wikiquote: {} {}: {}", self.op, self.target, self.code)?;
        if let Some(ref src) = self.source {
            write!(f, ": {}", src)?;
        }
        Ok(())
    }
}

impl QuoteError {
    fn new(
        code: ErrorCode,
        target: impl Into<String>,
        op: impl Into<String>,
        source: Option<anyhow::Error>,
    ) -> Self {
        Self {
            code,
            target: target.into(),
            op: op.into(),
            source,
        }
    }

    /// Create an UnsupportedLanguage error for the given language code.
    pub fn unsupported_language(lang: impl Into<String>, op: impl Into<String>) -> Self {
        Self::new(ErrorCode::UnsupportedLanguage, lang, op, None)
    }

    /// Create a NoSuchPage error.
    pub fn no_such_page(
        title: impl Into<String>,
        op: impl Into<String>,
        source: Option<anyhow::Error>,
    ) -> Self {
        Self::new(ErrorCode::NoSuchPage, title, op, source)
    }

    /// Create a Disambiguation error.
    pub fn disambiguation(title: impl Into<String>, op: impl Into<String>) -> Self {
        Self::new(
            ErrorCode::Disambiguation,
            title,
            op,
            Some(anyhow::anyhow!("title returned a disambiguation page")),
        )
    }

    /// Create a QotdUnavailable error.
    pub fn qotd_unavailable(
        target: impl Into<String>,
        op: impl Into<String>,
        source: Option<anyhow::Error>,
    ) -> Self {
        Self::new(ErrorCode::QotdUnavailable, target, op, source)
    }

    /// Create an InvalidUrl error.
    pub fn invalid_url(
        url: impl Into<String>,
        op: impl Into<String>,
        source: Option<anyhow::Error>,
    ) -> Self {
        Self::new(ErrorCode::InvalidUrl, url, op, source)
    }

    /// Create a Fetch error.
    pub fn fetch(
        url: impl Into<String>,
        op: impl Into<String>,
        source: Option<anyhow::Error>,
    ) -> Self {
        Self::new(ErrorCode::Fetch, url, op, source)
    }

    /// Returns true if this is an UnsupportedLanguage error.
    pub fn is_unsupported_language(&self) -> bool {
        self.code == ErrorCode::UnsupportedLanguage
    }

    /// Returns true if this is a NoSuchPage error.
    pub fn is_no_such_page(&self) -> bool {
        self.code == ErrorCode::NoSuchPage
    }

    /// Returns true if this is a Disambiguation error.
    pub fn is_disambiguation(&self) -> bool {
        self.code == ErrorCode::Disambiguation
    }

    /// Returns true if this is a QotdUnavailable error.
    pub fn is_qotd_unavailable(&self) -> bool {
        self.code == ErrorCode::QotdUnavailable
    }

    /// Returns true if this is an InvalidUrl error.
    pub fn is_invalid_url(&self) -> bool {
        self.code == ErrorCode::InvalidUrl
    }

    /// Returns true if this is a Fetch error.
    pub fn is_fetch(&self) -> bool {
        self.code == ErrorCode::Fetch
    }
}
