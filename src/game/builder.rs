//! Builder for a `Game` session.

use super::session::Game;
use crate::core::{ConfigError, GameConfig, DEFAULT_TARGET_SCORE};

/// Builder for creating a `Game`.
///
/// ```
/// use flip_seven::game::GameBuilder;
///
/// let game = GameBuilder::new()
///     .player_names(["Ada", "Grace", "Linus"])
///     .target_score(150)
///     .build()
///     .unwrap();
///
/// assert_eq!(game.player_count(), 3);
/// assert_eq!(game.config().target_score, 150);
/// ```
#[derive(Clone, Debug)]
pub struct GameBuilder {
    player_count: usize,
    player_names: Option<Vec<String>>,
    target_score: u32,
}

impl Default for GameBuilder {
    fn default() -> Self {
        Self {
            player_count: 3,
            player_names: None,
            target_score: DEFAULT_TARGET_SCORE,
        }
    }
}

impl GameBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of players, named "Player 1".."Player n".
    ///
    /// Ignored when explicit names are given.
    pub fn player_count(mut self, count: usize) -> Self {
        self.player_count = count;
        self
    }

    pub fn player_names<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.player_names = Some(names.into_iter().map(Into::into).collect());
        self
    }

    pub fn target_score(mut self, target: u32) -> Self {
        self.target_score = target;
        self
    }

    /// The configuration this builder describes, unvalidated.
    #[must_use]
    pub fn config(&self) -> GameConfig {
        let player_names = match &self.player_names {
            Some(names) => names.clone(),
            None => GameConfig::with_player_count(self.player_count).player_names,
        };

        GameConfig {
            player_names,
            target_score: self.target_score,
        }
    }

    /// Validate the configuration and start round 1.
    pub fn build(self) -> Result<Game, ConfigError> {
        Game::new(self.config())
    }
}
