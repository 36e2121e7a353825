//! Error types for deck and round operations.

use thiserror::Error;

/// A card was drawn from a deck with no cards left.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("no cards left in the deck")]
pub struct EmptyDeckError;

/// Errors that abort a round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RoundError {
    /// The deck ran out mid-round; the round was discarded.
    #[error("round aborted: {0}")]
    EmptyDeck(#[from] EmptyDeckError),
}
