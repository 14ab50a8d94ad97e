//! The game session: the public face of the engine.
//!
//! `Game` owns the round state and is the only holder of `&mut Round`.
//! Each public operation is one transaction: validate, resolve through
//! the rules engine, reshuffle if the deck ran dry, record an event.
//! A rejected operation changes nothing.
//!
//! ## Reshuffling
//!
//! When a draw (or manual discard) takes the last card in the deck, the
//! discard pile is shuffled back in before the operation returns. The
//! reshuffle runs synchronously, once, from the operation that emptied
//! the deck, so no later call can observe an empty deck while the
//! discard pile still holds cards.

use im::Vector;
use log::{debug, info};
use serde::{Deserialize, Serialize};

use super::event::GameEvent;
use crate::cards::CardKind;
use crate::core::{ConfigError, GameConfig, GameError, GameRng, Player, PlayerId, Round};
use crate::rules::{self, DrawOutcome};
use crate::zones::Pile;

/// A running session over many rounds sharing one deck.
///
/// ## Example
///
/// ```
/// use flip_seven::cards::CardKind;
/// use flip_seven::core::{GameConfig, PlayerId, PlayerStatus};
/// use flip_seven::game::Game;
/// use flip_seven::rules::DrawOutcome;
///
/// let mut game = Game::new(GameConfig::with_player_count(2)).unwrap();
/// let ada = PlayerId::new(0);
///
/// assert_eq!(game.draw(ada, CardKind::Number(5)).unwrap(), DrawOutcome::Added);
/// assert_eq!(game.draw(ada, CardKind::Number(5)).unwrap(), DrawOutcome::Busted);
/// assert_eq!(game.player(ada).unwrap().status(), PlayerStatus::Busted);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Game {
    config: GameConfig,
    round: Round,
    history: Vector<GameEvent>,
}

impl Game {
    /// Validate `config` and start round 1 with a full deck.
    pub fn new(config: GameConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let round = Round::new(&config.player_names);
        info!(
            "New game: {} players, target {}",
            config.player_count(),
            config.target_score
        );

        Ok(Self {
            config,
            round,
            history: Vector::new(),
        })
    }

    // === Operations ===

    /// `player` reveals `card`.
    pub fn draw(&mut self, player: PlayerId, card: CardKind) -> Result<DrawOutcome, GameError> {
        let resolution = rules::resolve_draw(&mut self.round, player, card).map_err(|err| {
            debug!("Rejected draw of {card} by {player}: {err}");
            err
        })?;

        debug!("{player} drew {card}: {:?}", resolution.outcome);
        self.record(GameEvent::Drew {
            round: self.round.number(),
            player,
            card,
            outcome: resolution.outcome,
        });

        if resolution.emptied_deck {
            self.reshuffle();
        }

        Ok(resolution.outcome)
    }

    /// `player` draws a card chosen at random, weighted by the deck.
    ///
    /// Returns the card drawn along with the outcome. Fails with
    /// `DeckEmpty` if every card is in someone's hand.
    pub fn draw_random(
        &mut self,
        player: PlayerId,
        rng: &mut GameRng,
    ) -> Result<(CardKind, DrawOutcome), GameError> {
        if !self.round.player(player)?.is_active() {
            return Err(GameError::NotActive { player });
        }

        let card = self.round.store().sample(rng).ok_or(GameError::DeckEmpty)?;
        let outcome = self.draw(player, card)?;
        Ok((card, outcome))
    }

    /// `player` stops drawing and banks the round score.
    pub fn stay(&mut self, player: PlayerId) -> Result<(), GameError> {
        let banked = rules::stay(&mut self.round, player).map_err(|err| {
            debug!("Rejected stay by {player}: {err}");
            err
        })?;

        debug!("{player} stayed, banking {banked}");
        self.record(GameEvent::Stayed {
            round: self.round.number(),
            player,
            banked,
        });
        Ok(())
    }

    /// Take back `card` from `player`'s hand (or the card that busted them).
    pub fn undo(&mut self, player: PlayerId, card: CardKind) -> Result<(), GameError> {
        rules::undo_draw(&mut self.round, player, card).map_err(|err| {
            debug!("Rejected undo of {card} by {player}: {err}");
            err
        })?;

        debug!("{player} undid {card}");
        self.record(GameEvent::Undone {
            round: self.round.number(),
            player,
            card,
        });
        Ok(())
    }

    /// Discard every hand and start the next round.
    ///
    /// Fails with `RoundInProgress` while any player is still active.
    pub fn start_next_round(&mut self) -> Result<(), GameError> {
        let discarded = rules::advance_round(&mut self.round)?;
        info!("Round {} started ({} cards discarded)", self.round.number(), discarded);
        self.record(GameEvent::RoundStarted {
            round: self.round.number(),
            discarded,
        });

        // The deck can only be empty here if every card sat in a hand.
        if self.round.store().total_in_deck() == 0 {
            self.reshuffle();
        }
        Ok(())
    }

    /// Move one copy of `card` from the deck to the discard pile without
    /// anyone drawing it (a card burned or seen out of turn).
    pub fn manual_discard(&mut self, card: CardKind) -> Result<(), GameError> {
        let take = self.round.store.take(card).map_err(|err| {
            debug!("Rejected discard of {card}: {err}");
            err
        })?;
        self.round.store.discard(take.card);

        debug!("Discarded {card} from the deck");
        self.record(GameEvent::ManuallyDiscarded {
            round: self.round.number(),
            card,
        });

        if take.emptied_deck {
            self.reshuffle();
        }
        Ok(())
    }

    /// Start over with the same players and target: full deck, zero scores.
    pub fn reset(&mut self) {
        self.round = Round::new(&self.config.player_names);
        self.history = Vector::new();
        info!("Game reset");
        self.record(GameEvent::Reset);
    }

    fn reshuffle(&mut self) {
        let cards = self.round.store.reshuffle();
        info!("Deck empty: reshuffled {cards} cards from the discard pile");
        self.record(GameEvent::Reshuffled {
            round: self.round.number(),
            cards,
        });
    }

    fn record(&mut self, event: GameEvent) {
        self.history.push_back(event);
    }

    // === Views ===

    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Full round state (deck, discard pile, players).
    #[must_use]
    pub fn round(&self) -> &Round {
        &self.round
    }

    #[must_use]
    pub fn round_number(&self) -> u32 {
        self.round.number()
    }

    #[must_use]
    pub fn player_count(&self) -> usize {
        self.round.player_count()
    }

    #[must_use]
    pub fn deck_counts(&self) -> &Pile {
        self.round.store().deck()
    }

    #[must_use]
    pub fn discard_counts(&self) -> &Pile {
        self.round.store().discard_pile()
    }

    /// Players in seat order.
    pub fn players(&self) -> impl Iterator<Item = &Player> {
        self.round.players().values()
    }

    pub fn player(&self, id: PlayerId) -> Result<&Player, GameError> {
        self.round.player(id)
    }

    /// Would `draw(player, card)` be accepted right now?
    #[must_use]
    pub fn can_draw(&self, player: PlayerId, card: CardKind) -> bool {
        rules::check_draw(&self.round, player, card).is_ok()
    }

    #[must_use]
    pub fn is_round_complete(&self) -> bool {
        self.round.is_complete()
    }

    /// Chance, in `[0, 1]`, that `player`'s next draw busts them.
    ///
    /// Counts deck copies of every number already in the hand against all
    /// cards left in the deck. Zero for players who are not active, have
    /// no cards, or hold a Second Chance.
    pub fn bust_probability(&self, player: PlayerId) -> Result<f64, GameError> {
        let p = self.round.player(player)?;
        if !p.is_active() || p.hand_size() == 0 || p.holds_second_chance() {
            return Ok(0.0);
        }

        let deck = self.round.store().deck();
        let remaining = deck.total();
        if remaining == 0 {
            return Ok(0.0);
        }

        let busting: u32 = p
            .number_cards()
            .iter()
            .map(|&n| deck.count(CardKind::Number(n)))
            .sum();
        Ok(f64::from(busting) / f64::from(remaining))
    }

    /// Chance, in `[0, 1]`, that the next card revealed is `card`.
    #[must_use]
    pub fn draw_probability(&self, card: CardKind) -> f64 {
        let deck = self.round.store().deck();
        match deck.total() {
            0 => 0.0,
            total => f64::from(deck.count(card)) / f64::from(total),
        }
    }

    /// The round is over and someone has reached the target score.
    #[must_use]
    pub fn is_game_over(&self) -> bool {
        self.is_round_complete()
            && self
                .players()
                .any(|p| p.total_score() >= self.config.target_score)
    }

    /// Players tied for the highest total once the game is over.
    ///
    /// Empty while the game continues.
    #[must_use]
    pub fn winners(&self) -> Vec<PlayerId> {
        if !self.is_game_over() {
            return Vec::new();
        }

        let best = self.players().map(Player::total_score).max().unwrap_or(0);
        self.players()
            .filter(|p| p.total_score() == best)
            .map(|p| p.id)
            .collect()
    }

    /// Every successful operation since the session began or was reset.
    #[must_use]
    pub fn history(&self) -> &Vector<GameEvent> {
        &self.history
    }
}
