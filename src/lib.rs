// MindBuddy - mental well-being support chat engine
// Library exports

pub mod config;
pub mod crisis;
pub mod knowledge;
pub mod providers;
pub mod router;
pub mod server;
