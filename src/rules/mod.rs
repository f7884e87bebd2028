//! Ordered keyword rule tables.
//!
//! A [`RuleTable`] is scanned top to bottom against normalized (lower-cased)
//! input. The first [`Rule`] with any keyword contained in the input wins;
//! when nothing matches the table's default template is used.

pub mod chat;
pub mod description;
pub mod file;

use std::collections::HashSet;

use serde::Deserialize;

use crate::error::RuleError;

pub use file::{RuleTables, RulesFile, TableOverride};

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Rule {
    pub id: String,
    pub keywords: Vec<String>,
    pub template: String,
}

impl Rule {
    pub fn new(id: impl Into<String>, keywords: &[&str], template: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            keywords: keywords.iter().map(|k| k.to_string()).collect(),
            template: template.into(),
        }
    }

    /// True if any keyword is a substring of `normalized`.
    pub fn matches(&self, normalized: &str) -> bool {
        self.keywords.iter().any(|k| normalized.contains(k.as_str()))
    }
}

/// Outcome of a table scan.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selection<'a> {
    Matched(&'a Rule),
    Default(&'a str),
}

impl<'a> Selection<'a> {
    pub fn text(&self) -> &'a str {
        match *self {
            Selection::Matched(rule) => &rule.template,
            Selection::Default(template) => template,
        }
    }

    pub fn rule_id(&self) -> &'a str {
        match *self {
            Selection::Matched(rule) => &rule.id,
            Selection::Default(_) => "default",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleTable {
    rules: Vec<Rule>,
    default_template: String,
}

impl RuleTable {
    /// Validates and builds a table. Keywords are lower-cased so they can
    /// match normalized input.
    pub fn new(rules: Vec<Rule>, default_template: impl Into<String>) -> Result<Self, RuleError> {
        let default_template = default_template.into();
        if default_template.is_empty() {
            return Err(RuleError::EmptyDefault);
        }

        let mut seen = HashSet::new();
        let mut validated = Vec::with_capacity(rules.len());
        for mut rule in rules {
            if rule.keywords.is_empty() {
                return Err(RuleError::NoKeywords(rule.id));
            }
            if rule.keywords.iter().any(|k| k.is_empty()) {
                return Err(RuleError::EmptyKeyword(rule.id));
            }
            if rule.template.is_empty() {
                return Err(RuleError::EmptyTemplate(rule.id));
            }
            if !seen.insert(rule.id.clone()) {
                return Err(RuleError::DuplicateId(rule.id));
            }
            rule.keywords = rule.keywords.iter().map(|k| k.to_lowercase()).collect();
            validated.push(rule);
        }

        Ok(Self { rules: validated, default_template })
    }

    pub fn classify(&self, normalized: &str) -> Selection<'_> {
        self.rules
            .iter()
            .find(|rule| rule.matches(normalized))
            .map(Selection::Matched)
            .unwrap_or(Selection::Default(&self.default_template))
    }

    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    pub fn default_template(&self) -> &str {
        &self.default_template
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table() -> RuleTable {
        RuleTable::new(
            vec![
                Rule::new("first", &["alpha", "beta"], "first template"),
                Rule::new("second", &["beta", "gamma"], "second template"),
            ],
            "fallback",
        )
        .unwrap()
    }

    #[test]
    fn first_matching_rule_wins() {
        let table = table();
        assert_eq!(table.classify("beta").rule_id(), "first");
        assert_eq!(table.classify("gamma ray").rule_id(), "second");
        assert_eq!(table.classify("gamma then alpha").rule_id(), "first");
    }

    #[test]
    fn unmatched_input_uses_default() {
        let table = table();
        let selection = table.classify("delta");
        assert_eq!(selection, Selection::Default("fallback"));
        assert_eq!(selection.text(), "fallback");
        assert_eq!(selection.rule_id(), "default");
        assert_eq!(table.classify("").text(), "fallback");
    }

    #[test]
    fn keywords_match_as_substrings() {
        let table = table();
        assert_eq!(table.classify("alphabet soup").text(), "first template");
    }

    #[test]
    fn keywords_are_lowercased() {
        let table = RuleTable::new(vec![Rule::new("x", &["MeTaL"], "t")], "d").unwrap();
        assert_eq!(table.rules()[0].keywords, vec!["metal".to_string()]);
        assert_eq!(table.classify("metal rod").rule_id(), "x");
    }

    #[test]
    fn rejects_invalid_rules() {
        assert_eq!(
            RuleTable::new(vec![Rule::new("a", &[], "t")], "d"),
            Err(RuleError::NoKeywords("a".into()))
        );
        assert_eq!(
            RuleTable::new(vec![Rule::new("a", &["ok", ""], "t")], "d"),
            Err(RuleError::EmptyKeyword("a".into()))
        );
        assert_eq!(
            RuleTable::new(vec![Rule::new("a", &["ok"], "")], "d"),
            Err(RuleError::EmptyTemplate("a".into()))
        );
        assert_eq!(
            RuleTable::new(
                vec![Rule::new("a", &["x"], "t"), Rule::new("a", &["y"], "u")],
                "d"
            ),
            Err(RuleError::DuplicateId("a".into()))
        );
        assert_eq!(RuleTable::new(vec![], ""), Err(RuleError::EmptyDefault));
    }
}
