//! Round state types.

use crate::deck::Deck;
use crate::hand::{DealerHand, Hand};
use crate::result::Outcome;

/// Round phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Phase {
    /// No round has been dealt.
    #[default]
    NotStarted,
    /// Waiting for the player to hit or stand.
    PlayerTurn,
    /// Dealer plays out their hand.
    DealerTurn,
    /// Round has ended and the outcome is fixed.
    Resolved,
}

/// Everything one round owns.
///
/// A new round replaces the whole state; decks are never carried over.
#[derive(Debug, Clone, Default)]
pub struct RoundState {
    /// The player's hand.
    pub player: Hand,
    /// The dealer's hand.
    pub dealer: DealerHand,
    /// The deck the round is dealt from, absent before the first deal.
    pub deck: Option<Deck>,
    /// Current phase.
    pub phase: Phase,
    /// Set exactly once, when the round resolves.
    pub outcome: Option<Outcome>,
}

impl RoundState {
    /// Creates an undealt round.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an undealt round that will draw from `deck`.
    #[must_use]
    pub fn with_deck(deck: Deck) -> Self {
        Self {
            deck: Some(deck),
            ..Self::default()
        }
    }
}
