// src/lib.rs

pub mod core;
pub mod corpus;
pub mod scoring;
pub mod translate;

pub use crate::core::engine::TutorSession;
pub use crate::core::types::{ChatMessage, Intent, Reply, ReplyKind};
pub use crate::scoring::score_pronunciation;
