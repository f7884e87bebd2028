// src/state.rs
use std::sync::Arc;

use crate::config::AppConfig;
use crate::error::{ConfigError, RuleError};
use crate::rules::RuleTables;
use crate::services::{chatbot::ChatResponder, description::DescriptionGenerator};

pub type SharedState = Arc<AppState>;

/// Read-only after construction; handlers share it without locking.
#[derive(Debug)]
pub struct AppState {
    pub descriptions: DescriptionGenerator,
    pub chat: ChatResponder,
}

impl AppState {
    pub fn new(tables: RuleTables, max_title_chars: Option<usize>) -> Self {
        Self {
            descriptions: DescriptionGenerator::new(tables.description, max_title_chars),
            chat: ChatResponder::new(tables.chat),
        }
    }

    pub fn builtin() -> Result<Self, RuleError> {
        Ok(Self::new(RuleTables::builtin()?, None))
    }

    pub fn from_config(config: &AppConfig) -> Result<Self, ConfigError> {
        let tables = RuleTables::load(config.rules_path.as_deref())?;
        Ok(Self::new(tables, config.max_title_chars))
    }
}
