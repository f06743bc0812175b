// ABOUTME: Quote extraction from parsed wiki pages.
// ABOUTME: Re-exports the tree walk, validity predicates, text cleanup and quote-of-the-day lookup.

//! Quote extraction.
//!
//! Everything here works on an already parsed [`scraper::Html`] and never
//! touches the network. Pruning (table of contents, nested lists) goes through
//! [`view::PrunedView`], so a document can be extracted repeatedly with
//! different parameters.

pub mod clean;
pub mod predicates;
pub mod qotd;
pub mod quotes;
pub mod view;

pub use clean::{clean_text, remove_credit};
pub use predicates::{is_quote, is_quote_node, MIN_QUOTE_LEN, MIN_QUOTE_WORDS};
pub use qotd::extract_qotd;
pub use quotes::{extract_quotes, extract_quotes_with};
