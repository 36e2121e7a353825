use alloc::vec::Vec;

use crate::card::Card;
use crate::deck::Deck;
use crate::error::EmptyDeckError;
use crate::hand::DealerHand;

/// The dealer stands once their hand reaches this value.
pub const DEALER_STANDS_AT: u16 = 17;

/// Dealer plays their hand according to the house rule.
///
/// The dealer draws while their hand is below 17 and stands on any 17,
/// soft or hard. Every draw adds at least one point, so the loop ends after
/// a bounded number of cards.
///
/// Returns the cards drawn by the dealer.
///
/// # Errors
///
/// Returns [`EmptyDeckError`] if the deck runs out while the dealer must draw.
/// Cards drawn before that point stay in the hand.
pub fn play_dealer(dealer: &mut DealerHand, deck: &mut Deck) -> Result<Vec<Card>, EmptyDeckError> {
    let mut drawn_cards = Vec::new();

    while dealer.value() < DEALER_STANDS_AT {
        let card = deck.draw()?;
        dealer.add_card(card);
        drawn_cards.push(card);
        tracing::debug!(card = %card, value = dealer.value(), "dealer draws");
    }

    Ok(drawn_cards)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::card::{Rank, Suit};

    fn dealer_with(ranks: &[Rank]) -> DealerHand {
        let mut dealer = DealerHand::new();
        for rank in ranks {
            dealer.add_card(Card::new(*rank, Suit::Clubs));
        }
        dealer
    }

    #[test]
    fn stands_on_17_without_drawing() {
        let mut dealer = dealer_with(&[Rank::Ten, Rank::Seven]);
        let mut deck = Deck::from_draws(&[Card::new(Rank::Two, Suit::Hearts)]);

        let drawn = play_dealer(&mut dealer, &mut deck).unwrap();
        assert!(drawn.is_empty());
        assert_eq!(deck.len(), 1);
    }

    #[test]
    fn stands_on_soft_17() {
        let mut dealer = dealer_with(&[Rank::Ace, Rank::Six]);
        let mut deck = Deck::from_draws(&[Card::new(Rank::Two, Suit::Hearts)]);

        assert!(play_dealer(&mut dealer, &mut deck).unwrap().is_empty());
        assert_eq!(dealer.value(), 17);
    }

    #[test]
    fn draws_until_17_or_more() {
        let mut dealer = dealer_with(&[Rank::Two, Rank::Three]);
        let mut deck = Deck::from_draws(&[
            Card::new(Rank::Four, Suit::Hearts),
            Card::new(Rank::Five, Suit::Hearts),
            Card::new(Rank::Six, Suit::Hearts),
            Card::new(Rank::King, Suit::Hearts),
        ]);

        let drawn = play_dealer(&mut dealer, &mut deck).unwrap();
        assert_eq!(drawn.len(), 3);
        assert_eq!(dealer.value(), 20);
        assert_eq!(deck.len(), 1);
    }

    #[test]
    fn soft_hand_that_busts_becomes_hard_and_keeps_drawing() {
        // A+5 = soft 16, +K = hard 16, +3 = 19.
        let mut dealer = dealer_with(&[Rank::Ace, Rank::Five]);
        let mut deck = Deck::from_draws(&[
            Card::new(Rank::King, Suit::Hearts),
            Card::new(Rank::Three, Suit::Hearts),
        ]);

        let drawn = play_dealer(&mut dealer, &mut deck).unwrap();
        assert_eq!(drawn.len(), 2);
        assert_eq!(dealer.value(), 19);
    }

    #[test]
    fn empty_deck_is_reported() {
        let mut dealer = dealer_with(&[Rank::Ten, Rank::Two]);
        let mut deck = Deck::from_draws(&[Card::new(Rank::Two, Suit::Hearts)]);

        assert_eq!(play_dealer(&mut dealer, &mut deck), Err(EmptyDeckError));
        assert_eq!(dealer.len(), 3);
    }
}
