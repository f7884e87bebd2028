// src/rules/file.rs
use std::path::Path;

use serde::Deserialize;
use tracing::info;

use super::{Rule, RuleTable, chat, description};
use crate::error::{ConfigError, RuleError};

/// On-disk rule override. Each present table replaces the built-in one.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RulesFile {
    pub description: Option<TableOverride>,
    pub chat: Option<TableOverride>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TableOverride {
    pub rules: Vec<Rule>,
    pub default_template: String,
}

#[derive(Debug, Clone)]
pub struct RuleTables {
    pub description: RuleTable,
    pub chat: RuleTable,
}

impl RuleTables {
    pub fn builtin() -> Result<Self, RuleError> {
        Ok(Self {
            description: description::builtin()?,
            chat: chat::builtin()?,
        })
    }

    /// Built-in tables, overridden by the JSON file at `path` if given.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let mut tables = Self::builtin()?;
        let Some(path) = path else {
            return Ok(tables);
        };

        let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::RulesRead {
            path: path.to_path_buf(),
            source,
        })?;
        let file: RulesFile = serde_json::from_str(&raw).map_err(|source| ConfigError::RulesParse {
            path: path.to_path_buf(),
            source,
        })?;
        tables.apply(file, path)?;
        Ok(tables)
    }

    fn apply(&mut self, file: RulesFile, path: &Path) -> Result<(), ConfigError> {
        let invalid = |mode: &'static str| {
            move |source: RuleError| ConfigError::RulesInvalid {
                mode,
                path: path.to_path_buf(),
                source,
            }
        };

        if let Some(table) = file.description {
            self.description =
                RuleTable::new(table.rules, table.default_template).map_err(invalid("description"))?;
            info!(path = %path.display(), rules = self.description.rules().len(), "description rules loaded");
        }
        if let Some(table) = file.chat {
            self.chat = RuleTable::new(table.rules, table.default_template).map_err(invalid("chat"))?;
            info!(path = %path.display(), rules = self.chat.rules().len(), "chat rules loaded");
        }
        Ok(())
    }
}
