use rand::RngCore;
use tracing::{debug, info};

use crate::error::ActionError;
use crate::hand::BLACKJACK;
use crate::result::{RoundOutcome, Settlement};
use crate::wallet::Wallet;

use super::{DealerStep, RoundEngine, RoundPhase};

impl<W: Wallet, R: RngCore> RoundEngine<W, R> {
    /// Advances the dealer by one card.
    ///
    /// While the dealer is below their standing total this draws one card and
    /// returns it. Once the dealer stands the hands are compared, the round is
    /// settled, and the settlement is returned.
    ///
    /// # Errors
    ///
    /// Returns an error if the round is not in the dealer's turn.
    pub fn dealer_step(&mut self) -> Result<DealerStep, ActionError> {
        if self.phase != RoundPhase::DealerTurn {
            debug!(phase = ?self.phase, "dealer step rejected");
            return Err(ActionError::InvalidState);
        }

        Ok(self.advance_dealer())
    }

    /// Runs the dealer to completion and settles.
    pub(super) fn play_out_dealer(&mut self) -> Settlement {
        loop {
            if let DealerStep::Settled(settlement) = self.advance_dealer() {
                return settlement;
            }
        }
    }

    fn advance_dealer(&mut self) -> DealerStep {
        if self
            .options
            .dealer_draws(self.dealer.value(), self.dealer.is_soft())
        {
            let card = self.draw();
            self.dealer.add_card(card);
            debug!(%card, dealer_score = self.dealer.value(), "dealer draws");
            return DealerStep::Drew(card);
        }

        let outcome = self.compare_hands();
        DealerStep::Settled(self.settle(outcome))
    }

    fn compare_hands(&self) -> RoundOutcome {
        let player = self.player.value();
        let dealer = self.dealer.value();

        if dealer > BLACKJACK || player > dealer {
            RoundOutcome::Win
        } else if dealer > player {
            RoundOutcome::Lose
        } else {
            RoundOutcome::Push
        }
    }

    /// Pays out `outcome` and closes the round.
    pub(super) fn settle(&mut self, outcome: RoundOutcome) -> Settlement {
        let multiplier = match outcome {
            RoundOutcome::Blackjack => self.options.blackjack_return,
            RoundOutcome::Win => self.options.win_return,
            RoundOutcome::Push => self.options.push_return,
            RoundOutcome::Lose | RoundOutcome::Bust => 0,
        };
        let credit = self.wager.amount.saturating_mul(multiplier);

        if credit > 0 {
            self.wallet.credit(self.wager.kind, credit);
        }

        let settlement = Settlement {
            outcome,
            wager: self.wager,
            credit,
            player_score: self.player.value(),
            dealer_score: self.dealer.value(),
        };

        self.phase = RoundPhase::Settled;
        self.settlement = Some(settlement);
        self.stats.record(&settlement);

        info!(
            %outcome,
            resource = %settlement.wager.kind,
            wager = settlement.wager.amount,
            credit,
            player_score = settlement.player_score,
            dealer_score = settlement.dealer_score,
            "round settled"
        );

        settlement
    }
}
