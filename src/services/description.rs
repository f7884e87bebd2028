// src/services/description.rs
use tracing::debug;

use super::normalizer::{non_blank, normalize};
use crate::error::GenerationError;
use crate::rules::RuleTable;
use crate::rules::description::{GUIDANCE, SUSTAINABILITY_PARAGRAPH};

/// Builds product descriptions from a title.
#[derive(Debug, Clone)]
pub struct DescriptionGenerator {
    table: RuleTable,
    max_title_chars: Option<usize>,
}

impl DescriptionGenerator {
    /// `max_title_chars` of `None` accepts titles of any length.
    pub fn new(table: RuleTable, max_title_chars: Option<usize>) -> Self {
        Self { table, max_title_chars }
    }

    /// Blank titles yield [`GUIDANCE`] on its own. Any other title yields the
    /// winning category paragraph, a blank line and [`SUSTAINABILITY_PARAGRAPH`].
    ///
    /// `_existing_description` is accepted for API compatibility and ignored.
    pub fn generate(
        &self,
        title: Option<&str>,
        _existing_description: Option<&str>,
    ) -> Result<String, GenerationError> {
        let Some(title) = non_blank(title) else {
            return Ok(GUIDANCE.to_string());
        };

        if let Some(limit) = self.max_title_chars {
            if title.chars().count() > limit {
                return Err(GenerationError::TitleTooLong { limit });
            }
        }

        let normalized = normalize(title);
        let selection = self.table.classify(&normalized);
        debug!(rule = selection.rule_id(), "description template selected");

        Ok(format!("{}\n\n{}", selection.text(), SUSTAINABILITY_PARAGRAPH))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::description::builtin;

    fn generator() -> DescriptionGenerator {
        DescriptionGenerator::new(builtin().unwrap(), Some(20))
    }

    #[test]
    fn blank_title_returns_guidance_only() {
        let generator = generator();
        for title in [None, Some(""), Some("   ")] {
            assert_eq!(generator.generate(title, None).unwrap(), GUIDANCE);
        }
    }

    #[test]
    fn limit_counts_characters_not_bytes() {
        let generator = generator();
        let accented = "é".repeat(20);
        assert!(generator.generate(Some(accented.as_str()), None).is_ok());

        let long = "x".repeat(21);
        assert_eq!(
            generator.generate(Some(long.as_str()), None),
            Err(GenerationError::TitleTooLong { limit: 20 })
        );
    }

    #[test]
    fn titles_of_any_length_are_accepted_without_limit() {
        let generator = DescriptionGenerator::new(builtin().unwrap(), None);
        let title = "blue widget ".repeat(100);
        let text = generator.generate(Some(title.as_str()), None).unwrap();
        assert_eq!(
            text,
            format!("{}\n\n{}", builtin().unwrap().default_template(), SUSTAINABILITY_PARAGRAPH)
        );
    }

    #[test]
    fn existing_description_does_not_affect_output() {
        let generator = generator();
        assert_eq!(
            generator.generate(Some("old tire"), Some("made of copper")),
            generator.generate(Some("old tire"), None)
        );
    }
}
