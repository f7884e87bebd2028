// src/error.rs
use std::path::PathBuf;

use thiserror::Error;

/// Invalid contents of a rule table.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RuleError {
    #[error("rule '{0}' has no keywords")]
    NoKeywords(String),

    #[error("rule '{0}' contains an empty keyword")]
    EmptyKeyword(String),

    #[error("rule '{0}' has an empty template")]
    EmptyTemplate(String),

    #[error("rule id '{0}' is used more than once")]
    DuplicateId(String),

    #[error("default template is empty")]
    EmptyDefault,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error(transparent)]
    Rules(#[from] RuleError),

    #[error("invalid value for {key}: '{value}'")]
    InvalidValue { key: &'static str, value: String },

    #[error("cannot read rule file {path}: {source}")]
    RulesRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("cannot parse rule file {path}: {source}")]
    RulesParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid {mode} rules in {path}: {source}")]
    RulesInvalid {
        mode: &'static str,
        path: PathBuf,
        #[source]
        source: RuleError,
    },
}

/// Failure while building a product description.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum GenerationError {
    #[error("title exceeds {limit} characters")]
    TitleTooLong { limit: usize },
}
