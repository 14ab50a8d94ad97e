//! Game rules: scoring and the round engine.
//!
//! The engine functions take a `&mut Round` and apply one rule-checked
//! transition each. They never reshuffle and never log; the session
//! layers those on top.

pub mod engine;
pub mod scoring;

pub use engine::{advance_round, check_draw, resolve_draw, stay, undo_draw, DrawOutcome, Resolution};
pub use scoring::{hand_score, score, FLIP_SEVEN_BONUS, FLIP_SEVEN_COUNT};
