// src/conversation/mod.rs
// Scripted side of the trip conversation. Everything here is recomputed from the
// message history on each request; nothing is stored between turns.
pub mod classifier;
pub mod responses;

pub use classifier::{classify, conversation_step, Classification, Selection};
pub use responses::{canned_response, select_ui_hint};
