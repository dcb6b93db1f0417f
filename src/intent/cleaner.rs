//! Price-phrase stripping for downstream semantic search.
//!
//! Cleaning is independent of extraction: every recognizable price phrase is
//! removed from the original query regardless of which rule (if any) won.

use lazy_static::lazy_static;
use regex::Regex;
use tracing::debug;

use crate::intent::keywords::KeywordTables;
use crate::intent::patterns::PATTERN_CATALOG;

/// Strips every catalog pattern and fallback budget term from a query.
pub struct QueryCleaner {
    term_patterns: Vec<Regex>,
}

impl QueryCleaner {
    pub fn new(keywords: &KeywordTables) -> Self {
        let term_patterns = keywords
            .fallback_budget_terms
            .iter()
            .map(|term| {
                Regex::new(&format!(r"(?i)\b{}\b", regex::escape(term)))
                    .expect("invalid fallback term pattern")
            })
            .collect();
        Self { term_patterns }
    }

    /// Remove all price phrases, collapse whitespace, trim. Runs to a
    /// fixpoint so removing one phrase cannot leave another behind, which
    /// also makes the operation idempotent. A query that consists of nothing
    /// but price language is returned unchanged: the cleaned search string
    /// must never be empty for a non-empty input.
    pub fn clean(&self, query: &str) -> String {
        if query.trim().is_empty() {
            return query.to_string();
        }

        let mut current = collapse_whitespace(query);
        loop {
            let stripped = self.strip_once(&current);
            if stripped == current {
                break;
            }
            current = stripped;
        }

        if current.is_empty() {
            debug!("Query is all price language, keeping original");
            query.to_string()
        } else {
            current
        }
    }

    fn strip_once(&self, text: &str) -> String {
        let mut out = text.to_string();
        for rule in PATTERN_CATALOG.iter() {
            out = rule.pattern.replace_all(&out, " ").into_owned();
        }
        for pattern in &self.term_patterns {
            out = pattern.replace_all(&out, " ").into_owned();
        }
        collapse_whitespace(&out)
    }
}

lazy_static! {
    static ref DEFAULT_CLEANER: QueryCleaner = QueryCleaner::new(KeywordTables::embedded());
}

/// Convenience wrapper over a cleaner built from the embedded keyword tables.
pub fn clean_query(query: &str) -> String {
    DEFAULT_CLEANER.clean(query)
}

fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_numeric_phrases_are_stripped() {
        assert_eq!(clean_query("schoenen onder 50 euro"), "schoenen");
        assert_eq!(clean_query("shoes between 75 and 125"), "shoes");
        assert_eq!(clean_query("kleding rond 100 euro"), "kleding");
        assert_eq!(clean_query("red jacket between 100 and 300 euro"), "red jacket");
    }

    #[test]
    fn test_qualitative_words_are_stripped() {
        assert_eq!(clean_query("goedkope jas geel"), "jas geel");
        assert_eq!(clean_query("cheap shoes red"), "shoes red");
        assert_eq!(clean_query("dure kleding"), "kleding");
        assert_eq!(clean_query("jackets on sale"), "jackets");
    }

    #[test]
    fn test_fallback_terms_are_stripped_too() {
        assert_eq!(clean_query("betaalbare schoenen"), "schoenen");
    }

    #[test]
    fn test_case_is_preserved_in_the_remainder() {
        assert_eq!(clean_query("Red Jacket under 50 EURO"), "Red Jacket");
    }

    #[test]
    fn test_all_price_queries_return_the_original() {
        for query in ["goedkoop", "duur", "onder 50 euro"] {
            assert_eq!(clean_query(query), query);
        }
    }

    #[test]
    fn test_clean_is_idempotent() {
        for query in [
            "red jacket between 100 and 300 euro",
            "goedkope jas geel",
            "onder 50 euro",
            "cheap 100 between euro",
            "plain query without prices",
        ] {
            let once = clean_query(query);
            assert_eq!(clean_query(&once), once, "query: {query}");
        }
    }

    #[test]
    fn test_clean_never_returns_empty_for_nonempty_input() {
        for query in ["goedkoop", "€50", "between 1 and 2 euro", "x"] {
            assert!(!clean_query(query).is_empty(), "query: {query}");
        }
    }

    #[test]
    fn test_stripping_runs_to_fixpoint() {
        // removing the budget word exposes a fresh "100 euro" phrase
        assert_eq!(clean_query("lamp 100 cheap euro"), "lamp");
    }
}
