use crate::error::{EmptyDeckError, RoundError};
use crate::hand::BLACKJACK;
use crate::result::Outcome;
use crate::snapshot::RoundSnapshot;

use super::{Game, Phase, play_dealer};

/// Classifies a round the player finished without busting or reaching 21.
const fn showdown(player_value: u16, dealer_value: u16) -> Outcome {
    if dealer_value > BLACKJACK {
        Outcome::DealerBust
    } else if player_value > dealer_value {
        Outcome::PlayerWin
    } else if player_value < dealer_value {
        Outcome::DealerWin
    } else {
        Outcome::Push
    }
}

impl Game {
    /// Player action: Hit (draw a card).
    ///
    /// Outside [`Phase::PlayerTurn`] this does nothing and returns the
    /// unchanged snapshot. A hit that busts or reaches exactly 21 resolves the
    /// round.
    ///
    /// # Errors
    ///
    /// Returns an error if the deck is empty. The round is discarded.
    pub fn hit(&mut self) -> Result<RoundSnapshot, RoundError> {
        if self.round.phase != Phase::PlayerTurn {
            tracing::debug!(phase = ?self.round.phase, "ignoring hit");
            return Ok(self.snapshot());
        }

        let card = self.draw().map_err(|err| self.abort(err))?;
        self.round.player.add_card(card);
        tracing::debug!(card = %card, value = self.round.player.value(), "player hits");

        self.check_player();
        Ok(self.snapshot())
    }

    /// Player action: Stand (keep current hand).
    ///
    /// Reveals the hole card, lets the dealer play out their hand, and
    /// resolves the round. Outside [`Phase::PlayerTurn`] this does nothing and
    /// returns the unchanged snapshot.
    ///
    /// # Errors
    ///
    /// Returns an error if the deck runs out while the dealer must draw. The
    /// round is discarded.
    pub fn stand(&mut self) -> Result<RoundSnapshot, RoundError> {
        if self.round.phase != Phase::PlayerTurn {
            tracing::debug!(phase = ?self.round.phase, "ignoring stand");
            return Ok(self.snapshot());
        }

        tracing::debug!(value = self.round.player.value(), "player stands");
        self.round.phase = Phase::DealerTurn;
        self.round.dealer.reveal_hole();

        self.dealer_turn().map_err(|err| self.abort(err))?;

        let outcome = showdown(self.round.player.value(), self.round.dealer.value());
        self.resolve(outcome);
        Ok(self.snapshot())
    }

    fn dealer_turn(&mut self) -> Result<(), EmptyDeckError> {
        let deck = self.round.deck.as_mut().ok_or(EmptyDeckError)?;
        let drawn = play_dealer(&mut self.round.dealer, deck)?;
        tracing::debug!(
            drawn = drawn.len(),
            value = self.round.dealer.value(),
            "dealer stands"
        );
        Ok(())
    }

    /// Resolves the round if the player has bust or reached 21.
    pub(super) fn check_player(&mut self) {
        let value = self.round.player.value();
        if value > BLACKJACK {
            self.resolve(Outcome::PlayerBust);
        } else if value == BLACKJACK {
            self.resolve(Outcome::PlayerBlackjack);
        }
    }

    fn resolve(&mut self, outcome: Outcome) {
        self.round.outcome = Some(outcome);
        self.round.phase = Phase::Resolved;
        tracing::info!(
            ?outcome,
            player = self.round.player.value(),
            dealer = self.round.dealer.value(),
            "round resolved"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn showdown_compares_totals() {
        assert_eq!(showdown(18, 22), Outcome::DealerBust);
        assert_eq!(showdown(20, 18), Outcome::PlayerWin);
        assert_eq!(showdown(17, 19), Outcome::DealerWin);
        assert_eq!(showdown(19, 19), Outcome::Push);
    }

    #[test]
    fn stand_plays_out_the_dealer_before_comparing() {
        use crate::card::{Card, Rank, Suit};
        use crate::deck::Deck;

        let mut game = Game::new(1);
        game.deal_with_deck(Deck::from_draws(&[
            Card::new(Rank::Ten, Suit::Spades),
            Card::new(Rank::Eight, Suit::Spades),
            Card::new(Rank::Two, Suit::Hearts),
            Card::new(Rank::Three, Suit::Hearts),
            Card::new(Rank::Four, Suit::Clubs),
            Card::new(Rank::Five, Suit::Clubs),
            Card::new(Rank::Six, Suit::Clubs),
        ]))
        .unwrap();

        let snapshot = game.stand().unwrap();
        assert_eq!(snapshot.dealer.len(), 5);
        assert_eq!(snapshot.dealer_score, Some(20));
        assert_eq!(snapshot.outcome, Some(Outcome::DealerWin));
        assert_eq!(game.cards_remaining(), 0);
    }
}
