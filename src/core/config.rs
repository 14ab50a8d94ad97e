//! Session configuration.
//!
//! A session is configured once, at setup: who is playing and how many
//! points win the game. Everything else about the deck is fixed by the
//! card catalog.

use serde::{Deserialize, Serialize};

use super::error::ConfigError;

/// Fewest players a session accepts.
pub const MIN_PLAYERS: usize = 1;

/// Most players a session accepts.
pub const MAX_PLAYERS: usize = 18;

/// Points needed to win.
pub const DEFAULT_TARGET_SCORE: u32 = 200;

/// Session configuration.
///
/// ```
/// use flip_seven::core::GameConfig;
///
/// let config = GameConfig::with_player_count(3);
/// assert_eq!(config.player_names, vec!["Player 1", "Player 2", "Player 3"]);
/// assert_eq!(config.target_score, 200);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Display names, in seat order. Seat `i` is `PlayerId(i)`.
    pub player_names: Vec<String>,

    /// Total score that ends the game.
    #[serde(default = "default_target_score")]
    pub target_score: u32,
}

fn default_target_score() -> u32 {
    DEFAULT_TARGET_SCORE
}

impl GameConfig {
    /// Configuration with default names "Player 1".."Player n".
    #[must_use]
    pub fn with_player_count(player_count: usize) -> Self {
        Self {
            player_names: (1..=player_count).map(|i| format!("Player {i}")).collect(),
            target_score: DEFAULT_TARGET_SCORE,
        }
    }

    #[must_use]
    pub fn player_count(&self) -> usize {
        self.player_names.len()
    }

    /// Check player count, names, and target score.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let count = self.player_count();
        if !(MIN_PLAYERS..=MAX_PLAYERS).contains(&count) {
            return Err(ConfigError::PlayerCount {
                min: MIN_PLAYERS,
                max: MAX_PLAYERS,
                got: count,
            });
        }

        if let Some(index) = self.player_names.iter().position(|n| n.trim().is_empty()) {
            return Err(ConfigError::EmptyName { index });
        }

        if self.target_score == 0 {
            return Err(ConfigError::ZeroTarget);
        }

        Ok(())
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::with_player_count(3)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_player_count_bounds() {
        assert_eq!(
            GameConfig::with_player_count(0).validate(),
            Err(ConfigError::PlayerCount { min: 1, max: 18, got: 0 })
        );
        assert!(GameConfig::with_player_count(1).validate().is_ok());
        assert!(GameConfig::with_player_count(18).validate().is_ok());
        assert!(GameConfig::with_player_count(19).validate().is_err());
    }

    #[test]
    fn test_empty_name_rejected() {
        let config = GameConfig {
            player_names: vec!["Ada".into(), "  ".into()],
            target_score: 200,
        };
        assert_eq!(config.validate(), Err(ConfigError::EmptyName { index: 1 }));
    }

    #[test]
    fn test_zero_target_rejected() {
        let mut config = GameConfig::default();
        config.target_score = 0;
        assert_eq!(config.validate(), Err(ConfigError::ZeroTarget));
    }

    #[test]
    fn test_target_defaults_when_missing() {
        let config: GameConfig = serde_json::from_str(r#"{"player_names":["Ada","Bo"]}"#).unwrap();
        assert_eq!(config.target_score, DEFAULT_TARGET_SCORE);
        assert_eq!(config.player_count(), 2);
    }
}
