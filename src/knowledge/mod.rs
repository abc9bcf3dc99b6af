// Knowledge base module
// Public interface for topic lookup and reply formatting

mod base;
mod formatter;
mod matcher;

pub use base::{KnowledgeBase, TopicEntry};
pub use formatter::{format_with_tips, DISCLAIMER};
