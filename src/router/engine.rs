// Cascade orchestrator
//
// Sequences the response-selection gates: input validation, crisis screen,
// knowledge match, generative fallback, static fallback. First match wins
// and exactly one terminal reply is produced per call.

use std::sync::Arc;

use crate::crisis::CrisisDetector;
use crate::knowledge::{format_with_tips, KnowledgeBase};
use crate::providers::LlmProvider;

use super::responses;

/// Final reply payload
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatReply {
    pub answer: String,
    pub crisis: bool,
}

/// Which cascade gate produced the reply
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    InvalidInput,
    Crisis,
    Knowledge,
    Generative,
    Fallback,
}

impl Outcome {
    pub fn as_str(&self) -> &str {
        match self {
            Outcome::InvalidInput => "invalid_input",
            Outcome::Crisis => "crisis",
            Outcome::Knowledge => "knowledge",
            Outcome::Generative => "generative",
            Outcome::Fallback => "fallback",
        }
    }
}

/// Result of one engine call
#[derive(Debug, Clone)]
pub struct EngineResult {
    pub reply: ChatReply,
    pub outcome: Outcome,
}

impl EngineResult {
    fn new(answer: impl Into<String>, crisis: bool, outcome: Outcome) -> Self {
        Self {
            reply: ChatReply {
                answer: answer.into(),
                crisis,
            },
            outcome,
        }
    }
}

/// Stateless response-selection engine.
///
/// Reference data is injected at construction and shared read-only across
/// concurrent calls; the only outbound I/O is the optional provider call.
/// Every path terminates in a well-formed reply, so `respond` is infallible.
pub struct ChatEngine {
    detector: CrisisDetector,
    knowledge: KnowledgeBase,
    provider: Option<Arc<dyn LlmProvider>>,
}

impl ChatEngine {
    pub fn new(detector: CrisisDetector, knowledge: KnowledgeBase) -> Self {
        Self {
            detector,
            knowledge,
            provider: None,
        }
    }

    /// Enable the generative fallback stage
    pub fn with_provider(mut self, provider: Arc<dyn LlmProvider>) -> Self {
        self.provider = Some(provider);
        self
    }

    pub fn has_provider(&self) -> bool {
        self.provider.is_some()
    }

    /// Number of knowledge-base topics
    pub fn knowledge_topics(&self) -> usize {
        self.knowledge.len()
    }

    /// Run one message through the cascade
    pub async fn respond(&self, message: &str) -> EngineResult {
        let message = message.trim();

        if message.is_empty() {
            tracing::info!("Routing decision: INVALID (empty message)");
            return EngineResult::new(
                responses::EMPTY_MESSAGE_REPLY,
                false,
                Outcome::InvalidInput,
            );
        }

        if self.detector.is_crisis(message) {
            tracing::info!("Routing decision: CRISIS");
            return EngineResult::new(responses::CRISIS_REPLY, true, Outcome::Crisis);
        }

        if let Some(entry) = self.knowledge.find_best_match(message) {
            tracing::info!("Routing decision: KNOWLEDGE");
            return EngineResult::new(format_with_tips(entry), false, Outcome::Knowledge);
        }

        if let Some(provider) = &self.provider {
            tracing::info!(provider = provider.name(), "Routing decision: GENERATIVE");
            match provider.generate(message).await {
                Ok(answer) => {
                    return EngineResult::new(answer, false, Outcome::Generative);
                }
                Err(e) => {
                    // Degrade silently: provider failure is never user-visible
                    tracing::warn!(
                        provider = provider.name(),
                        error = %e,
                        "Generation failed, degrading to static fallback"
                    );
                }
            }
        }

        tracing::info!("Routing decision: FALLBACK");
        EngineResult::new(responses::STATIC_FALLBACK_REPLY, false, Outcome::Fallback)
    }
}
