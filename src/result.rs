//! Round outcome types.

use core::fmt;

/// How a resolved round ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Outcome {
    /// The player went over 21.
    PlayerBust,
    /// The player reached exactly 21.
    PlayerBlackjack,
    /// The dealer went over 21.
    DealerBust,
    /// The player stood on a higher total than the dealer.
    PlayerWin,
    /// The dealer finished on a higher total than the player.
    DealerWin,
    /// Both finished on the same total.
    Push,
}

/// The outcome from the player's point of view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Verdict {
    /// The player won the round.
    Win,
    /// The player lost the round.
    Lose,
    /// Nobody won.
    Push,
}

impl Outcome {
    /// Returns the outcome from the player's point of view.
    #[must_use]
    pub const fn verdict(self) -> Verdict {
        match self {
            Self::PlayerBlackjack | Self::DealerBust | Self::PlayerWin => Verdict::Win,
            Self::PlayerBust | Self::DealerWin => Verdict::Lose,
            Self::Push => Verdict::Push,
        }
    }

    /// Returns the banner shown to the player.
    #[must_use]
    pub const fn message(self) -> &'static str {
        match self {
            Self::PlayerBust => "Bust! You lose.",
            Self::PlayerBlackjack => "It's a BlackJack! You win!",
            Self::DealerBust => "Dealer busts! You win!",
            Self::PlayerWin => "You win!",
            Self::DealerWin => "Dealer wins!",
            Self::Push => "Push! It's a tie!",
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn banners_match_the_table_text() {
        assert_eq!(Outcome::PlayerBust.message(), "Bust! You lose.");
        assert_eq!(Outcome::PlayerBlackjack.message(), "It's a BlackJack! You win!");
        assert_eq!(Outcome::DealerBust.message(), "Dealer busts! You win!");
        assert_eq!(Outcome::PlayerWin.message(), "You win!");
        assert_eq!(Outcome::DealerWin.message(), "Dealer wins!");
        assert_eq!(Outcome::Push.message(), "Push! It's a tie!");
    }

    #[test]
    fn verdicts_group_outcomes() {
        assert_eq!(Outcome::PlayerBlackjack.verdict(), Verdict::Win);
        assert_eq!(Outcome::DealerBust.verdict(), Verdict::Win);
        assert_eq!(Outcome::PlayerBust.verdict(), Verdict::Lose);
        assert_eq!(Outcome::Push.verdict(), Verdict::Push);
    }
}
