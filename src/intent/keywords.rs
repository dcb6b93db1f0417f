use std::collections::HashSet;

use lazy_static::lazy_static;
use serde::Deserialize;
use tracing::{info, warn};

use crate::core::error::{PriceSenseError, Result};

/// Tunable keyword tables backing the context classifier and the budget
/// fallback matcher. Shipped as an embedded JSON asset so the lists can be
/// edited without touching resolver logic; an external file can override the
/// defaults via configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct KeywordTables {
    pub premium_categories: Vec<String>,
    pub budget_categories: Vec<String>,
    pub fallback_budget_terms: Vec<String>,
}

const EMBEDDED_KEYWORDS: &str = include_str!("../../data/keywords.json");

lazy_static! {
    static ref DEFAULT_TABLES: KeywordTables =
        serde_json::from_str(EMBEDDED_KEYWORDS).expect("embedded keyword tables are invalid JSON");
}

impl KeywordTables {
    pub fn embedded() -> &'static KeywordTables {
        &DEFAULT_TABLES
    }

    pub fn from_file(path: &str) -> Result<Self> {
        let raw = std::fs::read_to_string(path)
            .map_err(|e| PriceSenseError::Config(format!("cannot read keyword tables {path}: {e}")))?;
        Ok(serde_json::from_str(&raw)?)
    }

    /// Load tables from `path` when given, falling back to the embedded
    /// defaults if the file is missing or malformed.
    pub fn load(path: Option<&str>) -> KeywordTables {
        match path {
            Some(p) => match Self::from_file(p) {
                Ok(tables) => {
                    info!("Keyword tables loaded from {}", p);
                    tables
                }
                Err(e) => {
                    warn!("Keyword table override failed ({}), using embedded defaults", e);
                    Self::embedded().clone()
                }
            },
            None => Self::embedded().clone(),
        }
    }
}

/// Word-level tokens of a lowercased query. Hyphens and apostrophes stay part
/// of the token so entries like "t-shirt" match as one word.
pub(crate) fn tokenize(query: &str) -> HashSet<&str> {
    query
        .split(|c: char| !c.is_alphanumeric() && c != '-' && c != '\'')
        .filter(|t| !t.is_empty())
        .collect()
}

/// Whole-word match for single-word terms, substring match for phrases.
pub(crate) fn contains_term(query: &str, tokens: &HashSet<&str>, term: &str) -> bool {
    if term.contains(char::is_whitespace) {
        query.contains(term)
    } else {
        tokens.contains(term)
    }
}
