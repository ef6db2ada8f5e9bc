//! Round outcome, settlement, and session statistics.

use core::fmt;

use crate::wallet::{ResourceKind, Wager};

/// Terminal result of a round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RoundOutcome {
    /// Player beats the dealer, or the dealer busts.
    Win,
    /// Player holds a natural and the dealer does not.
    Blackjack,
    /// Dealer beats the player, or holds a natural against none.
    Lose,
    /// Player went over 21.
    Bust,
    /// Tie; the stake is returned.
    Push,
}

impl fmt::Display for RoundOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Win => "win",
            Self::Blackjack => "blackjack",
            Self::Lose => "lose",
            Self::Bust => "bust",
            Self::Push => "push",
        })
    }
}

/// The record of a resolved round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Settlement {
    /// The outcome of the round.
    pub outcome: RoundOutcome,
    /// The final wager, doubled if the player doubled down.
    pub wager: Wager,
    /// The amount credited back to the wallet.
    pub credit: u64,
    /// The player's final hand value.
    pub player_score: u8,
    /// The dealer's final hand value.
    pub dealer_score: u8,
}

impl Settlement {
    /// Net result (positive = profit, negative = loss).
    #[must_use]
    pub fn net(&self) -> i128 {
        i128::from(self.credit) - i128::from(self.wager.amount)
    }
}

/// Counters accumulated over every round an engine has settled.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SessionStats {
    /// Rounds settled.
    pub rounds: u32,
    /// Ordinary wins.
    pub wins: u32,
    /// Natural blackjacks.
    pub blackjacks: u32,
    /// Losses to the dealer.
    pub losses: u32,
    /// Player busts.
    pub busts: u32,
    /// Pushes.
    pub pushes: u32,
    staked: [u64; 3],
    returned: [u64; 3],
}

impl SessionStats {
    /// Adds a settled round.
    pub fn record(&mut self, settlement: &Settlement) {
        self.rounds = self.rounds.saturating_add(1);
        let counter = match settlement.outcome {
            RoundOutcome::Win => &mut self.wins,
            RoundOutcome::Blackjack => &mut self.blackjacks,
            RoundOutcome::Lose => &mut self.losses,
            RoundOutcome::Bust => &mut self.busts,
            RoundOutcome::Push => &mut self.pushes,
        };
        *counter = counter.saturating_add(1);

        let slot = settlement.wager.kind.index();
        self.staked[slot] = self.staked[slot].saturating_add(settlement.wager.amount);
        self.returned[slot] = self.returned[slot].saturating_add(settlement.credit);
    }

    /// Total amount of `kind` staked.
    #[must_use]
    pub const fn staked(&self, kind: ResourceKind) -> u64 {
        self.staked[kind.index()]
    }

    /// Total amount of `kind` credited back.
    #[must_use]
    pub const fn returned(&self, kind: ResourceKind) -> u64 {
        self.returned[kind.index()]
    }

    /// Net result in `kind` across the session.
    #[must_use]
    pub fn net(&self, kind: ResourceKind) -> i128 {
        i128::from(self.returned(kind)) - i128::from(self.staked(kind))
    }
}
