//! Player and dealer hand representations.

use alloc::vec::Vec;

use crate::card::Card;

/// Hand value at which a hand busts when exceeded.
pub const BLACKJACK: u16 = 21;

fn evaluate_cards(cards: &[Card]) -> (u16, bool) {
    let mut value: u16 = 0;
    let mut aces: u16 = 0;

    for card in cards {
        if card.is_ace() {
            aces += 1;
        }
        value += card.rank.value();
    }

    while value > BLACKJACK && aces > 0 {
        value -= 10;
        aces -= 1;
    }

    let is_soft = aces > 0 && value <= BLACKJACK;
    (value, is_soft)
}

/// Scores a sequence of cards.
///
/// Number cards count at face value, faces count 10, and each ace counts 11
/// until the total passes 21, at which point aces are demoted to 1 one at a
/// time.
///
/// ```
/// use twentyone::{Card, Rank, Suit, score_cards};
///
/// let hand = [
///     Card::new(Rank::Ace, Suit::Spades),
///     Card::new(Rank::Ace, Suit::Hearts),
///     Card::new(Rank::Nine, Suit::Clubs),
/// ];
/// assert_eq!(score_cards(&hand), 21);
/// ```
#[must_use]
pub fn score_cards(cards: &[Card]) -> u16 {
    evaluate_cards(cards).0
}

/// Returns whether the cards hold an ace still counted as 11.
#[must_use]
pub fn is_soft(cards: &[Card]) -> bool {
    evaluate_cards(cards).1
}

/// The player's hand.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Hand {
    cards: Vec<Card>,
}

impl Hand {
    /// Creates a new empty hand.
    #[must_use]
    pub const fn new() -> Self {
        Self { cards: Vec::new() }
    }

    /// Adds a card to the hand.
    pub fn add_card(&mut self, card: Card) {
        self.cards.push(card);
    }

    /// Returns the cards in the hand.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Calculates the value of the hand.
    #[must_use]
    pub fn value(&self) -> u16 {
        score_cards(&self.cards)
    }

    /// Returns whether the hand is soft.
    #[must_use]
    pub fn is_soft(&self) -> bool {
        is_soft(&self.cards)
    }

    /// Returns whether the hand is bust.
    #[must_use]
    pub fn is_bust(&self) -> bool {
        self.value() > BLACKJACK
    }

    /// Returns the number of cards in the hand.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the hand is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

/// The dealer's hand.
///
/// The second card dealt is the hole card. It counts toward [`value`] at all
/// times but stays out of [`visible_value`] until revealed.
///
/// [`value`]: DealerHand::value
/// [`visible_value`]: DealerHand::visible_value
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DealerHand {
    cards: Vec<Card>,
    hole_revealed: bool,
}

impl DealerHand {
    /// Index of the hole card.
    pub const HOLE_INDEX: usize = 1;

    /// Creates a new empty dealer hand.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            cards: Vec::new(),
            hole_revealed: false,
        }
    }

    /// Adds a card to the hand.
    pub fn add_card(&mut self, card: Card) {
        self.cards.push(card);
    }

    /// Returns all cards in the hand.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns whether the card at `index` is face down.
    #[must_use]
    pub const fn is_hidden(&self, index: usize) -> bool {
        index == Self::HOLE_INDEX && !self.hole_revealed
    }

    /// Returns whether the hole card is revealed.
    #[must_use]
    pub const fn is_hole_revealed(&self) -> bool {
        self.hole_revealed
    }

    /// Reveals the hole card.
    pub const fn reveal_hole(&mut self) {
        self.hole_revealed = true;
    }

    /// Calculates the value of the face-up cards only.
    #[must_use]
    pub fn visible_value(&self) -> u16 {
        if self.hole_revealed {
            return self.value();
        }
        let visible: Vec<Card> = self
            .cards
            .iter()
            .enumerate()
            .filter(|(index, _)| !self.is_hidden(*index))
            .map(|(_, card)| *card)
            .collect();
        score_cards(&visible)
    }

    /// Calculates the full value of the hand.
    #[must_use]
    pub fn value(&self) -> u16 {
        score_cards(&self.cards)
    }

    /// Returns whether the hand is bust.
    #[must_use]
    pub fn is_bust(&self) -> bool {
        self.value() > BLACKJACK
    }

    /// Returns whether the hand is soft.
    #[must_use]
    pub fn is_soft(&self) -> bool {
        is_soft(&self.cards)
    }

    /// Returns the number of cards.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the hand is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}
