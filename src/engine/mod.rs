//! Round engine and state management.

use rand::{RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tracing::warn;

use crate::card::Card;
use crate::deck::Deck;
use crate::hand::{DealerHand, Hand};
use crate::options::RoundOptions;
use crate::result::{RoundOutcome, SessionStats, Settlement};
use crate::wallet::{ResourceKind, Wager, Wallet};

mod actions;
mod dealer;
pub mod state;
mod wager;

pub use state::{DealerStep, RoundPhase};

/// A single-player blackjack engine that stakes from and pays into a wallet.
///
/// The engine owns the deck, both hands, and the wager of the current round.
/// Every operation runs to completion before returning, so a presenter can
/// poll the query methods after each call and render whatever it likes. Use
/// [`begin_dealer_turn`](Self::begin_dealer_turn) and
/// [`dealer_step`](Self::dealer_step) to reveal dealer draws one at a time.
///
/// # Example
///
/// ```
/// use starjack::{Ledger, ResourceKind, RoundEngine, RoundOptions, Wager, Wallet};
///
/// let wallet = Ledger::new().with_balance(ResourceKind::Gold, 50);
/// let mut engine = RoundEngine::new(RoundOptions::default(), wallet, 42);
///
/// let settled = engine.start_round(Wager::new(ResourceKind::Gold, 10)).unwrap();
/// let settlement = match settled {
///     Some(natural) => natural,
///     None => engine.stand().unwrap(),
/// };
/// assert!(!engine.is_active());
/// assert_eq!(engine.outcome(), Some(settlement.outcome));
/// assert_eq!(engine.wallet().balance(ResourceKind::Gold), 40 + settlement.credit);
/// ```
#[derive(Debug)]
pub struct RoundEngine<W, R = ChaCha8Rng> {
    options: RoundOptions,
    wallet: W,
    rng: R,
    deck: Deck,
    player: Hand,
    dealer: DealerHand,
    /// Stake of the current or last round; zero until the first round starts.
    wager: Wager,
    phase: RoundPhase,
    settlement: Option<Settlement>,
    stats: SessionStats,
}

impl<W: Wallet> RoundEngine<W> {
    /// Creates an engine that shuffles with a `ChaCha8Rng` seeded from `seed`.
    #[must_use]
    pub fn new(options: RoundOptions, wallet: W, seed: u64) -> Self {
        Self::with_rng(options, wallet, ChaCha8Rng::seed_from_u64(seed))
    }
}

impl<W: Wallet, R: RngCore> RoundEngine<W, R> {
    /// Creates an engine that shuffles with the given random source.
    #[must_use]
    pub fn with_rng(options: RoundOptions, wallet: W, rng: R) -> Self {
        Self {
            options,
            wallet,
            rng,
            deck: Deck::from_draw_order(&[]),
            player: Hand::new(),
            dealer: DealerHand::new(),
            wager: Wager::new(ResourceKind::Iron, 0),
            phase: RoundPhase::Idle,
            settlement: None,
            stats: SessionStats::default(),
        }
    }

    /// Draws a card, substituting a fresh shuffled deck if the current one
    /// is exhausted.
    fn draw(&mut self) -> Card {
        loop {
            if let Some(card) = self.deck.draw() {
                return card;
            }
            warn!(phase = ?self.phase, "deck exhausted mid-round, dealing from a fresh deck");
            self.deck = Deck::shuffled(&mut self.rng);
        }
    }

    /// Returns the rule options.
    pub const fn options(&self) -> &RoundOptions {
        &self.options
    }

    /// Returns the wallet.
    pub const fn wallet(&self) -> &W {
        &self.wallet
    }

    /// Returns the wallet mutably, e.g. to pay in income between rounds.
    pub const fn wallet_mut(&mut self) -> &mut W {
        &mut self.wallet
    }

    /// Consumes the engine and returns the wallet.
    pub fn into_wallet(self) -> W {
        self.wallet
    }

    /// Returns the current round phase.
    pub const fn phase(&self) -> RoundPhase {
        self.phase
    }

    /// Returns whether a round is being played.
    pub const fn is_active(&self) -> bool {
        self.phase.is_active()
    }

    /// Returns the player's hand.
    pub const fn player_hand(&self) -> &Hand {
        &self.player
    }

    /// Returns the dealer's hand, hole card included.
    pub const fn dealer_hand(&self) -> &DealerHand {
        &self.dealer
    }

    /// Returns the player's cards.
    pub fn player_cards(&self) -> &[Card] {
        self.player.cards()
    }

    /// Returns the dealer's cards.
    ///
    /// Unless `reveal_hidden` is set, an unrevealed hole card is left out.
    pub fn dealer_cards(&self, reveal_hidden: bool) -> &[Card] {
        if reveal_hidden {
            self.dealer.cards()
        } else {
            self.dealer.visible_cards()
        }
    }

    /// Returns the player's hand value.
    pub fn player_score(&self) -> u8 {
        self.player.value()
    }

    /// Returns the value of the dealer cards the player can see.
    pub fn visible_dealer_score(&self) -> u8 {
        self.dealer.visible_value()
    }

    /// Returns the full value of the dealer's hand.
    pub fn dealer_score(&self) -> u8 {
        self.dealer.value()
    }

    /// Returns the outcome of the last round, if it has settled.
    pub fn outcome(&self) -> Option<RoundOutcome> {
        self.settlement.map(|s| s.outcome)
    }

    /// Returns the settlement of the last round, if it has settled.
    pub const fn settlement(&self) -> Option<Settlement> {
        self.settlement
    }

    /// Returns the wager of the current or last round.
    ///
    /// Returns `None` before the first round and after
    /// [`clear_round`](Self::clear_round).
    pub fn current_wager(&self) -> Option<Wager> {
        (self.phase != RoundPhase::Idle).then_some(self.wager)
    }

    /// Returns the number of cards left in the deck; zero before the first
    /// deal.
    pub fn cards_remaining(&self) -> usize {
        self.deck.len()
    }

    /// Returns statistics over every settled round.
    pub const fn stats(&self) -> &SessionStats {
        &self.stats
    }

    /// Clears the table after a settled round.
    ///
    /// Has no effect while a round is in progress.
    pub fn clear_round(&mut self) {
        if self.is_active() {
            return;
        }
        self.player.clear();
        self.dealer.clear();
        self.settlement = None;
        self.phase = RoundPhase::Idle;
    }
}
