use tracing::debug;

use super::normalizer::normalize;
use crate::rules::{RuleTable, Selection};

/// Canned replies for the marketplace assistant chat.
#[derive(Debug, Clone)]
pub struct ChatResponder {
    table: RuleTable,
}

impl ChatResponder {
    pub fn new(table: RuleTable) -> Self {
        Self { table }
    }

    pub fn detect_intent(&self, msg: &str) -> Selection<'_> {
        self.table.classify(&normalize(msg))
    }

    /// An absent message is treated as empty and gets the default reply.
    pub fn generate_reply(&self, msg: Option<&str>) -> String {
        let intent = self.detect_intent(msg.unwrap_or_default());
        debug!(intent = intent.rule_id(), "chat reply selected");
        intent.text().to_string()
    }
}
