//! Presentation-side wrapper around [`Game`].
//!
//! A [`Table`] adds the automatic restart a front-end performs after a round
//! resolves. The table never reads a clock: every call that can schedule or
//! fire a restart takes the caller's current time as a [`Duration`] since an
//! arbitrary epoch.

use core::time::Duration;

use crate::deck::Deck;
use crate::error::RoundError;
use crate::game::{Game, Phase};
use crate::options::TableOptions;
use crate::result::Outcome;
use crate::snapshot::RoundSnapshot;

/// A game plus the pending automatic restart.
///
/// ```
/// use core::time::Duration;
/// use twentyone::{Phase, Table, TableOptions};
///
/// let mut table = Table::new(TableOptions::default(), 7);
/// let mut now = Duration::ZERO;
/// let mut snapshot = table.deal(now).unwrap();
/// while snapshot.is_player_turn() {
///     snapshot = table.stand(now).unwrap();
/// }
/// assert_eq!(snapshot.phase, Phase::Resolved);
///
/// now += TableOptions::DEFAULT_AUTO_RESTART;
/// let cleared = table.poll(now).unwrap();
/// assert_eq!(cleared.phase, Phase::NotStarted);
/// assert!(table.poll(now).is_none());
/// ```
#[derive(Debug, Clone)]
pub struct Table {
    game: Game,
    options: TableOptions,
    restart_at: Option<Duration>,
}

impl Table {
    /// Creates a table whose game is seeded with `seed`.
    #[must_use]
    pub fn new(options: TableOptions, seed: u64) -> Self {
        Self::with_game(options, Game::new(seed))
    }

    /// Creates a table around an existing game.
    #[must_use]
    pub const fn with_game(options: TableOptions, game: Game) -> Self {
        Self {
            game,
            options,
            restart_at: None,
        }
    }

    /// Deals a new round and cancels any pending restart.
    ///
    /// # Errors
    ///
    /// Returns an error if the deck runs out during the deal.
    pub fn deal(&mut self, now: Duration) -> Result<RoundSnapshot, RoundError> {
        self.cancel_restart();
        let snapshot = self.game.deal()?;
        self.schedule_if_resolved(now);
        Ok(snapshot)
    }

    /// Deals a new round from `deck` and cancels any pending restart.
    ///
    /// # Errors
    ///
    /// Returns an error if `deck` holds fewer than four cards.
    pub fn deal_with_deck(
        &mut self,
        now: Duration,
        deck: Deck,
    ) -> Result<RoundSnapshot, RoundError> {
        self.cancel_restart();
        let snapshot = self.game.deal_with_deck(deck)?;
        self.schedule_if_resolved(now);
        Ok(snapshot)
    }

    /// Player hits.
    ///
    /// # Errors
    ///
    /// Returns an error if the deck is empty.
    pub fn hit(&mut self, now: Duration) -> Result<RoundSnapshot, RoundError> {
        let snapshot = self.game.hit()?;
        self.schedule_if_resolved(now);
        Ok(snapshot)
    }

    /// Player stands.
    ///
    /// # Errors
    ///
    /// Returns an error if the deck runs out while the dealer draws.
    pub fn stand(&mut self, now: Duration) -> Result<RoundSnapshot, RoundError> {
        let snapshot = self.game.stand()?;
        self.schedule_if_resolved(now);
        Ok(snapshot)
    }

    /// Clears the table now, superseding any pending restart.
    pub fn restart(&mut self) -> RoundSnapshot {
        self.cancel_restart();
        self.game.restart()
    }

    /// Fires the pending restart if it is due.
    ///
    /// Returns the cleared snapshot when a restart fired, `None` otherwise.
    /// A restart fires at most once, and only while the round it was
    /// scheduled for is still resolved.
    pub fn poll(&mut self, now: Duration) -> Option<RoundSnapshot> {
        let due = self.restart_at.is_some_and(|at| now >= at);
        if !due {
            return None;
        }
        if self.game.phase() != Phase::Resolved {
            tracing::debug!(phase = ?self.game.phase(), "dropping stale restart");
            self.restart_at = None;
            return None;
        }
        tracing::debug!(?now, "automatic restart");
        self.restart_at = None;
        Some(self.game.restart())
    }

    /// Returns when the pending restart is due, if one is scheduled.
    #[must_use]
    pub const fn restart_due_at(&self) -> Option<Duration> {
        self.restart_at
    }

    /// Returns the current outcome, if the round is resolved.
    #[must_use]
    pub const fn outcome(&self) -> Option<Outcome> {
        self.game.outcome()
    }

    /// Returns the current snapshot.
    #[must_use]
    pub fn snapshot(&self) -> RoundSnapshot {
        self.game.snapshot()
    }

    /// Returns the wrapped game.
    #[must_use]
    pub const fn game(&self) -> &Game {
        &self.game
    }

    /// Returns the table options.
    #[must_use]
    pub const fn options(&self) -> &TableOptions {
        &self.options
    }

    fn cancel_restart(&mut self) {
        if let Some(at) = self.restart_at.take() {
            tracing::debug!(?at, "cancelled pending restart");
        }
    }

    fn schedule_if_resolved(&mut self, now: Duration) {
        if self.game.phase() != Phase::Resolved || self.restart_at.is_some() {
            return;
        }
        if let Some(delay) = self.options.auto_restart_after {
            let at = now.saturating_add(delay);
            tracing::debug!(?at, "scheduled restart");
            self.restart_at = Some(at);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::card::{Card, Rank, Suit};

    fn card(rank: Rank) -> Card {
        Card::new(rank, Suit::Spades)
    }

    fn secs(value: u64) -> Duration {
        Duration::from_secs(value)
    }

    /// Player 10+5, dealer 10+7, then a 9 for the player.
    fn busting_deck() -> Deck {
        Deck::from_draws(&[
            card(Rank::Ten),
            card(Rank::Five),
            card(Rank::Ten),
            card(Rank::Seven),
            card(Rank::Nine),
        ])
    }

    fn table() -> Table {
        Table::new(TableOptions::default(), 1)
    }

    #[test]
    fn resolving_hit_schedules_restart() {
        let mut table = table();
        table.deal_with_deck(secs(0), busting_deck()).unwrap();
        assert_eq!(table.restart_due_at(), None);

        let snapshot = table.hit(secs(10)).unwrap();
        assert_eq!(snapshot.outcome, Some(Outcome::PlayerBust));
        assert_eq!(table.restart_due_at(), Some(secs(17)));

        assert!(table.poll(secs(16)).is_none());
        assert_eq!(table.game().phase(), Phase::Resolved);

        let cleared = table.poll(secs(17)).unwrap();
        assert_eq!(cleared.phase, Phase::NotStarted);
        assert!(cleared.player.is_empty());
        assert_eq!(table.restart_due_at(), None);
    }

    #[test]
    fn manual_restart_cancels_pending_restart() {
        let mut table = table();
        table.deal_with_deck(secs(0), busting_deck()).unwrap();
        table.hit(secs(0)).unwrap();

        table.restart();
        assert_eq!(table.restart_due_at(), None);

        table.deal_with_deck(secs(0), busting_deck()).unwrap();
        assert!(table.poll(secs(60)).is_none());
        assert_eq!(table.game().phase(), Phase::PlayerTurn);
    }

    #[test]
    fn deal_cancels_pending_restart() {
        let mut table = table();
        table.deal_with_deck(secs(0), busting_deck()).unwrap();
        table.hit(secs(0)).unwrap();

        let snapshot = table.deal(secs(1)).unwrap();
        if snapshot.phase == Phase::PlayerTurn {
            assert_eq!(table.restart_due_at(), None);
            assert!(table.poll(secs(60)).is_none());
        } else {
            assert_eq!(table.restart_due_at(), Some(secs(8)));
        }
    }

    #[test]
    fn ignored_actions_do_not_reschedule() {
        let mut table = table();
        table.deal_with_deck(secs(0), busting_deck()).unwrap();
        table.hit(secs(0)).unwrap();

        table.stand(secs(5)).unwrap();
        table.hit(secs(5)).unwrap();
        assert_eq!(table.restart_due_at(), Some(secs(7)));
    }

    #[test]
    fn disabled_auto_restart_never_fires() {
        let options = TableOptions::default().with_auto_restart_after(None);
        let mut table = Table::new(options, 1);
        table.deal_with_deck(secs(0), busting_deck()).unwrap();
        table.hit(secs(0)).unwrap();

        assert_eq!(table.restart_due_at(), None);
        assert!(table.poll(secs(3600)).is_none());
        assert_eq!(table.outcome(), Some(Outcome::PlayerBust));
    }

    #[test]
    fn forced_deal_cancels_pending_restart() {
        let mut table = table();
        table.deal_with_deck(secs(0), busting_deck()).unwrap();
        table.hit(secs(0)).unwrap();
        assert_eq!(table.restart_due_at(), Some(secs(7)));

        let fresh = table.deal_with_deck(secs(1), busting_deck()).unwrap();
        assert_eq!(fresh.phase, Phase::PlayerTurn);
        assert_eq!(table.restart_due_at(), None);

        assert!(table.poll(secs(7)).is_none());
        assert_eq!(table.snapshot(), fresh);
    }

    #[test]
    fn restart_never_fires_into_an_unresolved_round() {
        let mut table = table();
        table.deal_with_deck(secs(0), busting_deck()).unwrap();
        table.hit(secs(0)).unwrap();

        // Restarting through the game leaves the table's deadline in place.
        table.game.deal_with_deck(busting_deck()).unwrap();
        assert_eq!(table.restart_due_at(), Some(secs(7)));

        assert!(table.poll(secs(7)).is_none());
        assert_eq!(table.restart_due_at(), None);
        assert_eq!(table.game().phase(), Phase::PlayerTurn);
    }
}
