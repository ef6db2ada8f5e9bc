//! Error types for engine and wallet operations.

use thiserror::Error;

use crate::wallet::ResourceKind;

/// Errors that can occur when starting a round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum WagerError {
    /// Wager amount is zero.
    #[error("wager amount is zero")]
    ZeroAmount,
    /// The wallet cannot cover the wager.
    #[error("insufficient funds")]
    InsufficientFunds,
    /// A round is already being played.
    #[error("a round is already in progress")]
    RoundInProgress,
}

/// Errors that can occur during player and dealer actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ActionError {
    /// The action is not allowed in the current phase or on the current hand.
    #[error("invalid round state for this action")]
    InvalidState,
    /// The wallet cannot cover the extra stake.
    #[error("insufficient funds for this action")]
    InsufficientFunds,
}

/// Errors reported by a [`Wallet`](crate::Wallet).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum WalletError {
    /// Less than the requested amount is held.
    #[error("insufficient {kind}: requested {requested}, available {available}")]
    InsufficientBalance {
        /// The resource being debited.
        kind: ResourceKind,
        /// The amount requested.
        requested: u64,
        /// The balance held.
        available: u64,
    },
}
