// src/core/mod.rs

pub mod classifier;
pub mod context;
pub mod engine;
pub mod responder;
pub mod types;
