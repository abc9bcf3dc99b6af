// Cascade routing module
// Public interface for the response-selection engine

mod engine;
pub mod responses;

pub use engine::{ChatEngine, ChatReply, EngineResult, Outcome};
