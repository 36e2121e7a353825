//! A single-player blackjack round engine with optional `no_std` support.
//!
//! The crate provides a [`Game`] type that runs one round at a time: dealing,
//! player hits and stands, the dealer's fixed drawing rule, and outcome
//! resolution. [`Table`] wraps a game with the automatic restart a front-end
//! performs after each round.
//!
//! # Example
//!
//! ```
//! use twentyone::{Game, Phase};
//!
//! let mut game = Game::new(42);
//! let mut snapshot = game.deal().unwrap();
//! while snapshot.phase == Phase::PlayerTurn && snapshot.player_score < 17 {
//!     snapshot = game.hit().unwrap();
//! }
//! let snapshot = game.stand().unwrap();
//! assert_eq!(snapshot.phase, Phase::Resolved);
//! assert!(game.outcome().is_some());
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
pub mod deck;
pub mod error;
pub mod game;
pub mod hand;
pub mod options;
pub mod result;
pub mod snapshot;
pub mod table;

// Re-export main types
pub use card::{Card, Color, DECK_SIZE, Rank, Suit};
pub use deck::Deck;
pub use error::{EmptyDeckError, RoundError};
pub use game::{DEALER_STANDS_AT, Game, Phase, RoundState, play_dealer};
pub use hand::{BLACKJACK, DealerHand, Hand, is_soft, score_cards};
pub use options::TableOptions;
pub use result::{Outcome, Verdict};
pub use snapshot::{DealerCard, RoundSnapshot};
pub use table::Table;
