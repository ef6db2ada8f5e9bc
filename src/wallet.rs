//! Resource wallet used to stake and settle wagers.

#[cfg(all(not(feature = "std"), feature = "alloc"))]
use hashbrown::HashMap;
#[cfg(feature = "std")]
use std::collections::HashMap;

use core::fmt;

use crate::error::WalletError;

/// A fungible resource the player can wager.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResourceKind {
    /// Iron ore.
    Iron,
    /// Gold.
    Gold,
    /// Platinum.
    Platinum,
}

impl ResourceKind {
    /// All resource kinds.
    pub const ALL: [Self; 3] = [Self::Iron, Self::Gold, Self::Platinum];

    /// Returns the position of this kind in [`ResourceKind::ALL`].
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Self::Iron => 0,
            Self::Gold => 1,
            Self::Platinum => 2,
        }
    }

    /// Returns the lowercase name of the resource.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Iron => "iron",
            Self::Gold => "gold",
            Self::Platinum => "platinum",
        }
    }
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A stake of one resource kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Wager {
    /// The resource being staked.
    pub kind: ResourceKind,
    /// The amount staked.
    pub amount: u64,
}

impl Wager {
    /// Creates a new wager.
    #[must_use]
    pub const fn new(kind: ResourceKind, amount: u64) -> Self {
        Self { kind, amount }
    }
}

/// Resource balances the engine stakes from and pays into.
///
/// The engine never owns the player's economy; it only moves amounts through
/// this interface.
pub trait Wallet {
    /// Returns the balance held of `kind`.
    fn balance(&self, kind: ResourceKind) -> u64;

    /// Removes `amount` of `kind`.
    ///
    /// # Errors
    ///
    /// Returns [`WalletError::InsufficientBalance`] and leaves the balance
    /// untouched if less than `amount` is held.
    fn debit(&mut self, kind: ResourceKind, amount: u64) -> Result<(), WalletError>;

    /// Adds `amount` of `kind`.
    fn credit(&mut self, kind: ResourceKind, amount: u64);
}

impl<W: Wallet + ?Sized> Wallet for &mut W {
    fn balance(&self, kind: ResourceKind) -> u64 {
        (**self).balance(kind)
    }

    fn debit(&mut self, kind: ResourceKind, amount: u64) -> Result<(), WalletError> {
        (**self).debit(kind, amount)
    }

    fn credit(&mut self, kind: ResourceKind, amount: u64) {
        (**self).credit(kind, amount);
    }
}

/// An in-memory [`Wallet`].
///
/// ```
/// use starjack::{Ledger, ResourceKind, Wallet};
///
/// let mut ledger = Ledger::new().with_balance(ResourceKind::Gold, 50);
/// ledger.debit(ResourceKind::Gold, 10).unwrap();
/// ledger.credit(ResourceKind::Iron, 3);
/// assert_eq!(ledger.balance(ResourceKind::Gold), 40);
/// assert_eq!(ledger.balance(ResourceKind::Iron), 3);
/// assert_eq!(ledger.balance(ResourceKind::Platinum), 0);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Ledger {
    balances: HashMap<ResourceKind, u64>,
}

impl Ledger {
    /// Creates an empty ledger.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the balance of `kind`.
    #[must_use]
    pub fn with_balance(mut self, kind: ResourceKind, amount: u64) -> Self {
        self.set_balance(kind, amount);
        self
    }

    /// Overwrites the balance of `kind`.
    pub fn set_balance(&mut self, kind: ResourceKind, amount: u64) {
        self.balances.insert(kind, amount);
    }
}

impl Wallet for Ledger {
    fn balance(&self, kind: ResourceKind) -> u64 {
        self.balances.get(&kind).copied().unwrap_or(0)
    }

    fn debit(&mut self, kind: ResourceKind, amount: u64) -> Result<(), WalletError> {
        let available = self.balance(kind);
        if available < amount {
            return Err(WalletError::InsufficientBalance {
                kind,
                requested: amount,
                available,
            });
        }

        self.balances.insert(kind, available - amount);
        Ok(())
    }

    fn credit(&mut self, kind: ResourceKind, amount: u64) {
        let balance = self.balances.entry(kind).or_insert(0);
        *balance = balance.saturating_add(amount);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn failed_debit_leaves_balance() {
        let mut ledger = Ledger::new().with_balance(ResourceKind::Platinum, 5);
        assert_eq!(
            ledger.debit(ResourceKind::Platinum, 6),
            Err(WalletError::InsufficientBalance {
                kind: ResourceKind::Platinum,
                requested: 6,
                available: 5,
            })
        );
        assert_eq!(ledger.balance(ResourceKind::Platinum), 5);
    }

    fn spend_and_refund<W: Wallet>(mut wallet: W) {
        wallet.debit(ResourceKind::Iron, 4).unwrap();
        wallet.credit(ResourceKind::Iron, 1);
    }

    #[test]
    fn borrowed_wallet_writes_through() {
        let mut ledger = Ledger::new().with_balance(ResourceKind::Iron, 10);
        spend_and_refund(&mut ledger);
        assert_eq!(ledger.balance(ResourceKind::Iron), 7);
    }
}
