//! Round state types.

use crate::card::Card;
use crate::result::Settlement;

/// Round phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RoundPhase {
    /// No round has been started since the engine was created or cleared.
    #[default]
    Idle,
    /// Waiting for player actions.
    PlayerTurn,
    /// Dealer plays out their hand.
    DealerTurn,
    /// Round has ended and has been paid out.
    Settled,
}

impl RoundPhase {
    /// Returns whether a round is being played.
    #[must_use]
    pub const fn is_active(self) -> bool {
        matches!(self, Self::PlayerTurn | Self::DealerTurn)
    }
}

/// Result of advancing the dealer by one step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DealerStep {
    /// The dealer was below their standing total and drew this card.
    Drew(Card),
    /// The dealer stood and the round was settled.
    Settled(Settlement),
}
