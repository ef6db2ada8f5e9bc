use rand::RngCore;
use tracing::debug;

use crate::card::Card;
use crate::error::ActionError;
use crate::result::{RoundOutcome, Settlement};
use crate::wallet::{Wager, Wallet};

use super::{RoundEngine, RoundPhase};

impl<W: Wallet, R: RngCore> RoundEngine<W, R> {
    fn ensure_player_turn(&self, action: &'static str) -> Result<(), ActionError> {
        if self.phase == RoundPhase::PlayerTurn {
            Ok(())
        } else {
            debug!(action, phase = ?self.phase, "action rejected");
            Err(ActionError::InvalidState)
        }
    }

    /// Player action: Hit (draw a card).
    ///
    /// A hand that goes over 21 settles as [`RoundOutcome::Bust`] before this
    /// returns, and the dealer draws nothing. Reaching exactly 21 does not end
    /// the turn; the player still has to stand.
    ///
    /// # Errors
    ///
    /// Returns an error if it is not the player's turn.
    pub fn hit(&mut self) -> Result<Card, ActionError> {
        self.ensure_player_turn("hit")?;

        let card = self.draw();
        self.player.add_card(card);
        debug!(%card, player_score = self.player.value(), "player hit");

        if self.player.is_bust() {
            self.dealer.reveal_hole();
            self.settle(RoundOutcome::Bust);
        }

        Ok(card)
    }

    /// Player action: Stand (keep current hand).
    ///
    /// Reveals the hole card and plays the dealer's hand out before settling.
    ///
    /// # Errors
    ///
    /// Returns an error if it is not the player's turn.
    pub fn stand(&mut self) -> Result<Settlement, ActionError> {
        self.begin_dealer_turn()?;
        Ok(self.play_out_dealer())
    }

    /// Player action: Stand, leaving the dealer to be stepped through
    /// [`dealer_step`](Self::dealer_step).
    ///
    /// # Errors
    ///
    /// Returns an error if it is not the player's turn.
    pub fn begin_dealer_turn(&mut self) -> Result<(), ActionError> {
        self.ensure_player_turn("stand")?;

        self.dealer.reveal_hole();
        self.phase = RoundPhase::DealerTurn;
        debug!(
            player_score = self.player.value(),
            dealer_score = self.dealer.value(),
            "player stands"
        );

        Ok(())
    }

    /// Player action: Double down (double the wager, receive one card, then
    /// stand).
    ///
    /// # Errors
    ///
    /// Returns [`ActionError::InvalidState`] if it is not the player's turn,
    /// the player has already hit, or doubling is disabled, and
    /// [`ActionError::InsufficientFunds`] if the wallet cannot match the
    /// original stake.
    pub fn double_down(&mut self) -> Result<Settlement, ActionError> {
        self.ensure_player_turn("double down")?;

        if !self.options.double_down || self.player.len() != 2 {
            debug!(cards = self.player.len(), "double down rejected");
            return Err(ActionError::InvalidState);
        }

        let extra = self.wager.amount;
        let doubled = extra
            .checked_mul(2)
            .ok_or(ActionError::InsufficientFunds)?;

        if self.wallet.balance(self.wager.kind) < extra {
            debug!(resource = %self.wager.kind, extra, "double down rejected");
            return Err(ActionError::InsufficientFunds);
        }

        self.wallet
            .debit(self.wager.kind, extra)
            .map_err(|_| ActionError::InsufficientFunds)?;
        self.wager = Wager::new(self.wager.kind, doubled);

        let card = self.draw();
        self.player.add_card(card);
        debug!(%card, player_score = self.player.value(), "player doubled down");

        self.dealer.reveal_hole();
        if self.player.is_bust() {
            return Ok(self.settle(RoundOutcome::Bust));
        }

        self.phase = RoundPhase::DealerTurn;
        Ok(self.play_out_dealer())
    }
}
