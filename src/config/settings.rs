// Configuration structs

use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct Config {
    /// OpenAI API key; None disables the generative fallback stage
    pub openai_api_key: Option<String>,

    /// Model identifier for the generative fallback
    pub model: String,

    /// Path to crisis_patterns.json
    pub crisis_patterns_path: PathBuf,

    /// Path to knowledge_base.json
    pub knowledge_base_path: PathBuf,

    /// HTTP bind address
    pub bind_address: String,
}

impl Config {
    pub fn new(openai_api_key: Option<String>) -> Self {
        let project_dir = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));

        Self {
            openai_api_key,
            model: "gpt-3.5-turbo".to_string(),
            crisis_patterns_path: project_dir.join("data/crisis_patterns.json"),
            knowledge_base_path: project_dir.join("data/knowledge_base.json"),
            bind_address: "127.0.0.1:8000".to_string(),
        }
    }
}
