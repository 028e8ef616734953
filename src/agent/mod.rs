// src/agent/mod.rs
pub mod fabricator;
pub mod prompts;
pub mod trip_agent;
