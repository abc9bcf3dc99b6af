// Knowledge base reference data

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// One curated topic: trigger keywords plus an empathetic response and
/// coping tips. Tips may be empty (greetings have none).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TopicEntry {
    pub keywords: Vec<String>,
    pub response: String,
    #[serde(default)]
    pub tips: Vec<String>,
}

/// Ordered, immutable collection of topic entries.
///
/// Entry order is part of the data contract: scoring ties are broken in
/// favor of the earliest entry, so reordering the file changes behavior.
#[derive(Debug, Clone)]
pub struct KnowledgeBase {
    pub(crate) entries: Vec<TopicEntry>,
}

impl KnowledgeBase {
    /// Build a knowledge base, validating every entry
    pub fn new(entries: Vec<TopicEntry>) -> Result<Self> {
        for (idx, entry) in entries.iter().enumerate() {
            if entry.keywords.is_empty() {
                bail!("Knowledge entry {} has no keywords", idx);
            }
            if entry.response.is_empty() {
                bail!("Knowledge entry {} has an empty response", idx);
            }
            for keyword in &entry.keywords {
                if keyword.is_empty() {
                    bail!("Knowledge entry {} has an empty keyword", idx);
                }
                if *keyword != keyword.to_lowercase() {
                    bail!(
                        "Knowledge entry {} keyword '{}' must be lowercase",
                        idx,
                        keyword
                    );
                }
            }
        }

        Ok(Self { entries })
    }

    /// Load the knowledge base from a JSON file
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read knowledge base file: {}", path.display()))?;

        let entries: Vec<TopicEntry> =
            serde_json::from_str(&contents).context("Failed to parse knowledge_base.json")?;

        Self::new(entries)
    }

    /// Entries in file order
    pub fn entries(&self) -> &[TopicEntry] {
        &self.entries
    }

    /// Number of topics
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(keywords: &[&str], response: &str) -> TopicEntry {
        TopicEntry {
            keywords: keywords.iter().map(|k| k.to_string()).collect(),
            response: response.to_string(),
            tips: vec![],
        }
    }

    #[test]
    fn test_valid_entries_load() {
        let kb = KnowledgeBase::new(vec![
            entry(&["sleep", "insomnia"], "Sleep matters."),
            entry(&["anger"], "Anger is valid."),
        ])
        .unwrap();

        assert_eq!(kb.len(), 2);
        assert_eq!(kb.entries()[0].keywords[0], "sleep");
    }

    #[test]
    fn test_order_is_preserved() {
        let kb = KnowledgeBase::new(vec![
            entry(&["b"], "second letter"),
            entry(&["a"], "first letter"),
        ])
        .unwrap();

        assert_eq!(kb.entries()[0].response, "second letter");
        assert_eq!(kb.entries()[1].response, "first letter");
    }

    #[test]
    fn test_rejects_entry_without_keywords() {
        let result = KnowledgeBase::new(vec![entry(&[], "orphan")]);
        assert!(result.is_err());
    }

    #[test]
    fn test_rejects_empty_response() {
        let result = KnowledgeBase::new(vec![entry(&["sleep"], "")]);
        assert!(result.is_err());
    }

    #[test]
    fn test_rejects_uppercase_keyword() {
        let result = KnowledgeBase::new(vec![entry(&["Sleep"], "Sleep matters.")]);
        assert!(result.is_err());
    }

    #[test]
    fn test_load_from_file() {
        use std::io::Write;

        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"[{{"keywords": ["sleep"], "response": "Sleep matters.", "tips": ["Rest."]}}]"#
        )
        .unwrap();

        let kb = KnowledgeBase::load_from_file(file.path()).unwrap();
        assert_eq!(kb.len(), 1);
        assert_eq!(kb.entries()[0].tips, vec!["Rest."]);
    }
}
