// Keyword scoring against the knowledge base

use super::base::{KnowledgeBase, TopicEntry};

impl KnowledgeBase {
    /// Find the topic with the most keyword hits in the message.
    ///
    /// Keywords count as substring hits of the lower-cased input, so "fat"
    /// scores inside "fatigue". Only a strictly greater score replaces the
    /// running best, so ties keep the earliest entry in file order. Returns
    /// None when no keyword hits at all.
    pub fn find_best_match(&self, text: &str) -> Option<&TopicEntry> {
        let text_lower = text.to_lowercase();

        let mut best_match = None;
        let mut best_score = 0;

        for entry in &self.entries {
            let score = entry
                .keywords
                .iter()
                .filter(|keyword| text_lower.contains(keyword.as_str()))
                .count();

            if score > best_score {
                best_score = score;
                best_match = Some(entry);
            }
        }

        best_match
    }
}
