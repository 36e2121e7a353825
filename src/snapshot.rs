//! Read-only views of a round for front-ends.

use alloc::vec::Vec;

use crate::card::Card;
use crate::game::{Phase, RoundState};
use crate::result::Outcome;

/// A dealer card as a front-end should show it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DealerCard {
    /// The card. Present even while face down; front-ends must not show it
    /// when `hidden` is set.
    pub card: Card,
    /// Whether the card is face down.
    pub hidden: bool,
}

/// Everything a front-end needs to draw the table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundSnapshot {
    /// The player's cards in the order dealt.
    pub player: Vec<Card>,
    /// The dealer's cards in the order dealt.
    pub dealer: Vec<DealerCard>,
    /// Value of the player's hand.
    pub player_score: u16,
    /// Value of the dealer's hand, once the hole card is revealed.
    pub dealer_score: Option<u16>,
    /// Value of the dealer's face-up cards.
    pub dealer_visible_score: u16,
    /// Current phase.
    pub phase: Phase,
    /// Outcome, once the round is resolved.
    pub outcome: Option<Outcome>,
}

impl RoundSnapshot {
    /// Captures the current state of `round`.
    #[must_use]
    pub fn from_round(round: &RoundState) -> Self {
        let dealer = round
            .dealer
            .cards()
            .iter()
            .enumerate()
            .map(|(index, card)| DealerCard {
                card: *card,
                hidden: round.dealer.is_hidden(index),
            })
            .collect();

        Self {
            player: round.player.cards().to_vec(),
            dealer,
            player_score: round.player.value(),
            dealer_score: round
                .dealer
                .is_hole_revealed()
                .then(|| round.dealer.value()),
            dealer_visible_score: round.dealer.visible_value(),
            phase: round.phase,
            outcome: match round.phase {
                Phase::Resolved => round.outcome,
                _ => None,
            },
        }
    }

    /// Returns whether the player may hit or stand.
    #[must_use]
    pub fn is_player_turn(&self) -> bool {
        self.phase == Phase::PlayerTurn
    }
}
