//! Round controller and state management.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::card::Card;
use crate::deck::Deck;
use crate::error::{EmptyDeckError, RoundError};
use crate::result::Outcome;
use crate::snapshot::RoundSnapshot;

mod actions;
mod dealer;
pub mod state;

pub use dealer::{DEALER_STANDS_AT, play_dealer};
pub use state::{Phase, RoundState};

/// A single-player blackjack round controller.
///
/// The game owns the current [`RoundState`] and the random number generator
/// that shuffles a fresh deck for every deal.
///
/// # Example
///
/// ```
/// use twentyone::{Game, Phase};
///
/// let mut game = Game::new(42);
/// let snapshot = game.deal().unwrap();
/// assert_ne!(snapshot.phase, Phase::NotStarted);
/// assert_eq!(snapshot.player.len(), 2);
/// ```
#[derive(Debug, Clone)]
pub struct Game {
    round: RoundState,
    rng: ChaCha8Rng,
}

impl Game {
    /// Creates a new game with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            round: RoundState::new(),
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Deals a new round from a freshly shuffled deck.
    ///
    /// Any round in progress is discarded.
    ///
    /// # Errors
    ///
    /// Returns an error if the deck runs out during the deal.
    pub fn deal(&mut self) -> Result<RoundSnapshot, RoundError> {
        let deck = Deck::shuffled(&mut self.rng);
        self.deal_with_deck(deck)
    }

    /// Deals a new round from `deck`.
    ///
    /// The player receives the first two draws and the dealer the next two.
    /// Any round in progress is discarded.
    ///
    /// # Errors
    ///
    /// Returns an error if `deck` holds fewer than four cards. The round is
    /// discarded in that case.
    pub fn deal_with_deck(&mut self, deck: Deck) -> Result<RoundSnapshot, RoundError> {
        self.round = RoundState::with_deck(deck);
        self.deal_initial().map_err(|err| self.abort(err))?;

        self.round.phase = Phase::PlayerTurn;
        tracing::debug!(
            player = self.round.player.value(),
            dealer_up = self.round.dealer.visible_value(),
            "dealt new round"
        );
        self.check_player();

        Ok(self.snapshot())
    }

    fn deal_initial(&mut self) -> Result<(), EmptyDeckError> {
        for _ in 0..2 {
            let card = self.draw()?;
            self.round.player.add_card(card);
        }
        for _ in 0..2 {
            let card = self.draw()?;
            self.round.dealer.add_card(card);
        }
        Ok(())
    }

    /// Draws a card from the round's deck.
    fn draw(&mut self) -> Result<Card, EmptyDeckError> {
        self.round.deck.as_mut().ok_or(EmptyDeckError)?.draw()
    }

    /// Discards the round after the deck ran out.
    fn abort(&mut self, err: EmptyDeckError) -> RoundError {
        tracing::error!(phase = ?self.round.phase, "{err}; discarding round");
        self.round = RoundState::new();
        RoundError::from(err)
    }

    /// Discards all round state and returns to [`Phase::NotStarted`].
    pub fn restart(&mut self) -> RoundSnapshot {
        tracing::debug!(phase = ?self.round.phase, "restarting");
        self.round = RoundState::new();
        self.snapshot()
    }

    /// Returns the outcome once the round is resolved.
    #[must_use]
    pub const fn outcome(&self) -> Option<Outcome> {
        match self.round.phase {
            Phase::Resolved => self.round.outcome,
            _ => None,
        }
    }

    /// Returns the current phase.
    #[must_use]
    pub const fn phase(&self) -> Phase {
        self.round.phase
    }

    /// Returns the current round state.
    #[must_use]
    pub const fn round(&self) -> &RoundState {
        &self.round
    }

    /// Returns the number of cards left in the round's deck.
    #[must_use]
    pub fn cards_remaining(&self) -> usize {
        self.round.deck.as_ref().map_or(0, Deck::len)
    }

    /// Returns a view of the round for a front-end.
    #[must_use]
    pub fn snapshot(&self) -> RoundSnapshot {
        RoundSnapshot::from_round(&self.round)
    }
}
