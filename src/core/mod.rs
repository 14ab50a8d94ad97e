//! Core engine types: players, round state, configuration, errors, RNG.

pub mod config;
pub mod error;
pub mod player;
pub mod rng;
pub mod state;

pub use config::{GameConfig, DEFAULT_TARGET_SCORE, MAX_PLAYERS, MIN_PLAYERS};
pub use error::{ConfigError, GameError};
pub use player::{Player, PlayerId, PlayerMap, PlayerStatus};
pub use rng::GameRng;
pub use state::Round;
