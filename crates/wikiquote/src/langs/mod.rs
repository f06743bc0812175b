// ABOUTME: Per-language extraction policy (blocked headings, blocked words, QOTD layout) and the table holding them.
// ABOUTME: The table is built once, never mutated afterwards, and handed to extraction by reference.

//! Language policies.
//!
//! Every supported wiki edition gets a [`LanguagePolicy`] describing the
//! section headings whose lists are not quotations, the tokens that mark a
//! list item as a citation or annotation, the category used to tag
//! disambiguation pages, and where the quote of the day lives on the main
//! page. [`LanguageTable::builtin`] holds the editions shipped with the crate.

mod builtin;

use std::collections::BTreeMap;

/// Language used when the caller does not pick one.
pub const DEFAULT_LANG: &str = "en";

/// Where the quote of the day sits on a main page.
///
/// `path` is a chain of child tag names walked from the element whose id is
/// `element_id`; the first element reached in document order holds the text,
/// which is split on `separator` into quote and author.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QotdSelector {
    pub element_id: String,
    pub path: Vec<String>,
    pub separator: char,
}

impl QotdSelector {
    pub fn new(element_id: impl Into<String>, path: &[&str], separator: char) -> Self {
        Self {
            element_id: element_id.into(),
            path: path.iter().map(|s| s.to_string()).collect(),
            separator,
        }
    }
}

/// Extraction tuning for one wiki edition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LanguagePolicy {
    pub code: String,
    pub main_page: String,
    /// Lowercase heading prefixes whose sections are skipped.
    pub headings: Vec<String>,
    /// Whole-word tokens that disqualify a candidate.
    pub word_blocklist: Vec<String>,
    pub disambiguation_category: String,
    pub qotd: Option<QotdSelector>,
    /// Drop a trailing `-` or `–` left behind by an inline credit.
    pub strip_trailing_credit: bool,
}

impl LanguagePolicy {
    /// A policy with no blocklists, no QOTD layout and the English
    /// disambiguation category.
    pub fn new(code: impl Into<String>, main_page: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            main_page: main_page.into(),
            headings: Vec::new(),
            word_blocklist: Vec::new(),
            disambiguation_category: "Disambiguation_pages".to_string(),
            qotd: None,
            strip_trailing_credit: false,
        }
    }

    /// Classify a page from its category names.
    ///
    /// A page without any category counts as a disambiguation page.
    // FIXME: uncategorized content pages are reported as disambiguation too;
    // requesting prop=pageprops and checking its `disambiguation` key would
    // tell them apart.
    pub fn is_disambiguation<'a, I>(&self, categories: I) -> bool
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut categories = categories.into_iter().peekable();
        if categories.peek().is_none() {
            return true;
        }
        categories.any(|c| c == self.disambiguation_category)
    }
}

/// Read-only map from language code to policy.
#[derive(Debug, Clone, Default)]
pub struct LanguageTable {
    policies: BTreeMap<String, LanguagePolicy>,
}

impl LanguageTable {
    /// An empty table; every language is unsupported.
    pub fn new() -> Self {
        Self::default()
    }

    /// The editions shipped with the crate.
    pub fn builtin() -> Self {
        builtin::LANGUAGES
            .iter()
            .map(builtin::BuiltinLanguage::to_policy)
            .fold(Self::new(), Self::with)
    }

    /// Add or replace a policy, keyed by its code.
    pub fn with(mut self, policy: LanguagePolicy) -> Self {
        self.policies.insert(policy.code.clone(), policy);
        self
    }

    pub fn get(&self, code: &str) -> Option<&LanguagePolicy> {
        self.policies.get(code)
    }

    pub fn is_supported(&self, code: &str) -> bool {
        self.policies.contains_key(code)
    }

    /// Supported codes in sorted order.
    pub fn codes(&self) -> impl Iterator<Item = &str> {
        self.policies.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.policies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.policies.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_contains_english() {
        let table = LanguageTable::builtin();
        assert!(table.is_supported("en"));
        assert!(table.is_supported(DEFAULT_LANG));
        let en = table.get("en").unwrap();
        assert_eq!(en.main_page, "Main Page");
        assert!(en.headings.contains(&"see also".to_string()));
        assert!(en.word_blocklist.contains(&"Retrieved".to_string()));
        assert!(en.qotd.is_some());
        assert!(en.strip_trailing_credit);
    }

    #[test]
    fn unknown_codes_are_unsupported() {
        let table = LanguageTable::builtin();
        assert!(!table.is_supported("xx"));
        assert!(!table.is_supported(""));
        assert!(!table.is_supported("EN"));
    }

    #[test]
    fn codes_are_sorted() {
        let table = LanguageTable::builtin();
        let codes: Vec<&str> = table.codes().collect();
        let mut sorted = codes.clone();
        sorted.sort();
        assert_eq!(codes, sorted);
        assert_eq!(codes.len(), table.len());
    }

    #[test]
    fn builtin_headings_are_lowercase() {
        let table = LanguageTable::builtin();
        for code in table.codes() {
            for heading in &table.get(code).unwrap().headings {
                assert_eq!(heading, &heading.to_lowercase(), "{code}: {heading}");
            }
        }
    }

    #[test]
    fn custom_policy_replaces_builtin() {
        let table = LanguageTable::builtin().with(LanguagePolicy::new("en", "Start"));
        assert_eq!(table.get("en").unwrap().main_page, "Start");
        assert!(table.get("en").unwrap().qotd.is_none());
    }

    #[test]
    fn empty_categories_mean_disambiguation() {
        let policy = LanguagePolicy::new("en", "Main Page");
        assert!(policy.is_disambiguation(Vec::<&str>::new()));
    }

    #[test]
    fn tagged_category_means_disambiguation() {
        let policy = LanguagePolicy::new("en", "Main Page");
        assert!(policy.is_disambiguation(["People", "Disambiguation_pages"]));
        assert!(!policy.is_disambiguation(["People", "Poets"]));
    }
}
