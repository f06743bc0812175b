// ABOUTME: Main library entry point for the wikiquote client and quote extractor.
// ABOUTME: Re-exports the public API: Client, ClientBuilder, QuoteError, ErrorCode, language policies and extraction.

//! Wikiquote - fetch pages from a MediaWiki quote site and pull quotations out of them.
//!
//! The [`Client`] talks to the MediaWiki action API; the [`extract`] module
//! works on parsed HTML and can be used on its own.
//!
//! # Example
//!
//! ```no_run
//! use wikiquote::{Client, QuoteError};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), QuoteError> {
//!     let client = Client::builder().build()?;
//!     for quote in client.quotes("Albert Einstein", 5, "en").await? {
//!         println!("{}", quote);
//!     }
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod client;
pub mod error;
pub mod extract;
pub mod langs;
pub mod options;
pub mod resource;

pub use crate::client::Client;
pub use crate::error::{ErrorCode, QuoteError};
pub use crate::extract::{extract_qotd, extract_quotes, extract_quotes_with};
pub use crate::langs::{LanguagePolicy, LanguageTable, QotdSelector, DEFAULT_LANG};
pub use crate::options::{ClientBuilder, Options, DEFAULT_MAX_QUOTES};
