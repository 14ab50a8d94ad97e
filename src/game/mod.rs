//! The game session: operations, views, and history.
//!
//! ## Key Types
//!
//! - `Game`: Owns the round state; every public operation goes through it
//! - `GameBuilder`: Fluent construction with validation
//! - `GameEvent`: One entry in the session history

pub mod builder;
pub mod event;
pub mod session;

pub use builder::GameBuilder;
pub use event::GameEvent;
pub use session::Game;
