// src/handlers/mod.rs
pub mod aimodel;
pub mod places;
pub mod status;
