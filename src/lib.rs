//! A single-player blackjack round engine with optional `no_std` support.
//!
//! The crate provides a [`RoundEngine`] that deals from a shuffled deck,
//! scores hands, plays the dealer, and settles wagers of in-game resources
//! against a [`Wallet`]. It renders nothing: presenters poll its query methods
//! after each operation.
//!
//! # Example
//!
//! ```no_run
//! use starjack::{Ledger, ResourceKind, RoundEngine, RoundOptions, Wager};
//!
//! let wallet = Ledger::new().with_balance(ResourceKind::Iron, 100);
//! let mut engine = RoundEngine::new(RoundOptions::default(), wallet, 42);
//! let _ = engine.start_round(Wager::new(ResourceKind::Iron, 5));
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
pub mod engine;
pub mod error;
pub mod hand;
pub mod options;
pub mod result;
pub mod wallet;

// Re-export main types
pub use card::{Card, DECK_SIZE, Rank, Suit};
pub use deck::Deck;
pub use engine::{DealerStep, RoundEngine, RoundPhase};
pub use error::{ActionError, WagerError, WalletError};
pub use hand::{DealerHand, Hand};
pub use options::RoundOptions;
pub use result::{RoundOutcome, SessionStats, Settlement};
pub use wallet::{Ledger, ResourceKind, Wager, Wallet};
