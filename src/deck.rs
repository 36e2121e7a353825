//! The 52-card deck a round is dealt from.

use alloc::vec::Vec;

use rand::Rng;
use rand::seq::SliceRandom;

use crate::card::{Card, DECK_SIZE, Rank, Suit};
use crate::error::EmptyDeckError;

/// An ordered stack of cards, drawn from the top.
///
/// The top of the deck is the end of the underlying vector.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// Creates an unshuffled deck holding each rank and suit pair once.
    #[must_use]
    pub fn standard() -> Self {
        let mut cards = Vec::with_capacity(DECK_SIZE);
        for suit in Suit::ALL {
            for rank in Rank::ALL {
                cards.push(Card::new(rank, suit));
            }
        }
        Self { cards }
    }

    /// Creates a full deck in uniformly random order.
    pub fn shuffled<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let mut deck = Self::standard();
        deck.cards.shuffle(rng);
        deck
    }

    /// Creates a deck whose successive draws return `draws` in order.
    ///
    /// ```
    /// use twentyone::{Card, Deck, Rank, Suit};
    ///
    /// let ace = Card::new(Rank::Ace, Suit::Spades);
    /// let king = Card::new(Rank::King, Suit::Hearts);
    /// let mut deck = Deck::from_draws(&[ace, king]);
    /// assert_eq!(deck.draw(), Ok(ace));
    /// assert_eq!(deck.draw(), Ok(king));
    /// assert!(deck.draw().is_err());
    /// ```
    #[must_use]
    pub fn from_draws(draws: &[Card]) -> Self {
        let mut cards = draws.to_vec();
        cards.reverse();
        Self { cards }
    }

    /// Removes and returns the top card.
    ///
    /// # Errors
    ///
    /// Returns [`EmptyDeckError`] if the deck has no cards left.
    pub fn draw(&mut self) -> Result<Card, EmptyDeckError> {
        self.cards.pop().ok_or(EmptyDeckError)
    }

    /// Returns the number of cards left.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the deck is exhausted.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Returns the remaining cards, bottom first.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn assert_complete(deck: &Deck) {
        assert_eq!(deck.len(), DECK_SIZE);
        for suit in Suit::ALL {
            for rank in Rank::ALL {
                let count = deck
                    .cards()
                    .iter()
                    .filter(|card| **card == Card::new(rank, suit))
                    .count();
                assert_eq!(count, 1, "{rank:?} of {suit:?}");
            }
        }
    }

    #[test]
    fn shuffled_deck_holds_every_card_once() {
        for seed in 0..32 {
            let mut rng = ChaCha8Rng::seed_from_u64(seed);
            assert_complete(&Deck::shuffled(&mut rng));
        }
    }

    #[test]
    fn shuffle_depends_on_seed() {
        let a = Deck::shuffled(&mut ChaCha8Rng::seed_from_u64(1));
        let b = Deck::shuffled(&mut ChaCha8Rng::seed_from_u64(1));
        let c = Deck::shuffled(&mut ChaCha8Rng::seed_from_u64(2));
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn drawing_past_the_bottom_fails() {
        let mut deck = Deck::shuffled(&mut ChaCha8Rng::seed_from_u64(9));
        for remaining in (0..DECK_SIZE).rev() {
            assert!(deck.draw().is_ok());
            assert_eq!(deck.len(), remaining);
        }
        assert!(deck.is_empty());
        assert_eq!(deck.draw(), Err(EmptyDeckError));
    }
}
