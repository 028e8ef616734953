// src/models/mod.rs
pub mod chat;
pub mod lenient;
pub mod place;
pub mod trip;
