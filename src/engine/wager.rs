use tracing::debug;

use crate::deck::Deck;
use crate::error::WagerError;
use crate::result::{RoundOutcome, Settlement};
use crate::wallet::{Wager, Wallet};

use super::{RoundEngine, RoundPhase};

impl<W: Wallet, R: rand::RngCore> RoundEngine<W, R> {
    /// Stakes `wager`, shuffles a fresh deck, and deals the opening hands.
    ///
    /// Cards are dealt player, dealer up card, player, dealer hole card. If
    /// either opening hand is a natural the round settles immediately and the
    /// settlement is returned; otherwise the player is to act.
    ///
    /// # Errors
    ///
    /// Returns an error if the amount is zero, a round is already in progress,
    /// or the wallet cannot cover the wager. Nothing is debited or dealt on
    /// error.
    pub fn start_round(&mut self, wager: Wager) -> Result<Option<Settlement>, WagerError> {
        self.stake(wager)?;
        let deck = Deck::shuffled(&mut self.rng);
        Ok(self.deal(wager, deck))
    }

    /// Like [`start_round`](Self::start_round), but deals from `deck` instead
    /// of a freshly shuffled one.
    ///
    /// # Errors
    ///
    /// Same as [`start_round`](Self::start_round).
    pub fn start_round_with_deck(
        &mut self,
        wager: Wager,
        deck: Deck,
    ) -> Result<Option<Settlement>, WagerError> {
        self.stake(wager)?;
        Ok(self.deal(wager, deck))
    }

    fn stake(&mut self, wager: Wager) -> Result<(), WagerError> {
        let result = self.try_stake(wager);
        if let Err(err) = result {
            debug!(resource = %wager.kind, amount = wager.amount, ?err, "wager rejected");
        }
        result
    }

    fn try_stake(&mut self, wager: Wager) -> Result<(), WagerError> {
        if wager.amount == 0 {
            return Err(WagerError::ZeroAmount);
        }

        if self.is_active() {
            return Err(WagerError::RoundInProgress);
        }

        if self.wallet.balance(wager.kind) < wager.amount {
            return Err(WagerError::InsufficientFunds);
        }

        self.wallet
            .debit(wager.kind, wager.amount)
            .map_err(|_| WagerError::InsufficientFunds)
    }

    fn deal(&mut self, wager: Wager, deck: Deck) -> Option<Settlement> {
        self.deck = deck;
        self.player.clear();
        self.dealer.clear();
        self.settlement = None;
        self.wager = wager;
        self.phase = RoundPhase::PlayerTurn;

        for _ in 0..2 {
            let card = self.draw();
            self.player.add_card(card);
            let card = self.draw();
            self.dealer.add_card(card);
        }

        debug!(
            resource = %wager.kind,
            amount = wager.amount,
            player_score = self.player.value(),
            dealer_up = self.dealer.visible_value(),
            "round dealt"
        );

        let outcome = match (self.player.is_natural(), self.dealer.is_natural()) {
            (true, true) => RoundOutcome::Push,
            (true, false) => RoundOutcome::Blackjack,
            (false, true) => RoundOutcome::Lose,
            (false, false) => return None,
        };

        self.dealer.reveal_hole();
        Some(self.settle(outcome))
    }
}
