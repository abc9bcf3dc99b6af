// Crisis pattern detector

use anyhow::{bail, Context, Result};
use regex::Regex;
use std::fs;
use std::path::Path;

/// Detects acute crisis language: suicidal ideation, self-harm, panic.
///
/// Patterns are word-boundary-bound regexes matched against the lower-cased
/// input as "any", not "all": a single hit anywhere in the text is a crisis.
#[derive(Clone)]
pub struct CrisisDetector {
    patterns: Vec<Regex>,
}

impl CrisisDetector {
    /// Compile a detector from regex source strings
    pub fn new<S: AsRef<str>>(sources: &[S]) -> Result<Self> {
        if sources.is_empty() {
            bail!("Crisis pattern list is empty");
        }

        let mut patterns = Vec::with_capacity(sources.len());
        for source in sources {
            let pattern = Regex::new(source.as_ref())
                .with_context(|| format!("Invalid crisis pattern: {}", source.as_ref()))?;
            patterns.push(pattern);
        }

        Ok(Self { patterns })
    }

    /// Load crisis patterns from a JSON file
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read crisis patterns file: {}", path.display()))?;

        let sources: Vec<String> =
            serde_json::from_str(&contents).context("Failed to parse crisis_patterns.json")?;

        Self::new(&sources)
    }

    /// Returns true if any crisis pattern matches the lower-cased text
    pub fn is_crisis(&self, text: &str) -> bool {
        let text_lower = text.to_lowercase();

        for pattern in &self.patterns {
            if pattern.is_match(&text_lower) {
                tracing::warn!("Crisis detected: pattern '{}'", pattern.as_str());
                return true;
            }
        }

        false
    }
}
