use starjack::{
    Card, DealerStep, Ledger, ResourceKind, RoundEngine, RoundOptions, RoundOutcome, RoundPhase,
    Settlement, Suit, Wager, Wallet,
};
use serde::Serialize;
use wasm_bindgen::prelude::*;

#[wasm_bindgen]
pub struct WasmRound {
    engine: RoundEngine<Ledger>,
}

#[wasm_bindgen]
impl WasmRound {
    #[wasm_bindgen(constructor)]
    pub fn new(seed: u32, iron: u32, gold: u32, platinum: u32) -> Self {
        let wallet = Ledger::new()
            .with_balance(ResourceKind::Iron, u64::from(iron))
            .with_balance(ResourceKind::Gold, u64::from(gold))
            .with_balance(ResourceKind::Platinum, u64::from(platinum));

        Self {
            engine: RoundEngine::new(RoundOptions::default(), wallet, u64::from(seed)),
        }
    }

    /// Mirrors the game's resource counts into the wallet between rounds.
    pub fn sync_balance(&mut self, resource: &str, amount: u32) -> Result<(), JsValue> {
        let kind = parse_resource(resource)?;
        if self.engine.is_active() {
            return Err(JsValue::from_str("cannot sync balances during a round"));
        }
        self.engine.wallet_mut().set_balance(kind, u64::from(amount));
        Ok(())
    }

    pub fn start_round(&mut self, resource: &str, amount: u32) -> Result<(), JsValue> {
        let kind = parse_resource(resource)?;
        self.engine
            .start_round(Wager::new(kind, u64::from(amount)))
            .map(|_| ())
            .map_err(js_err)
    }

    pub fn hit(&mut self) -> Result<(), JsValue> {
        self.engine.hit().map(|_| ()).map_err(js_err)
    }

    pub fn stand(&mut self) -> Result<(), JsValue> {
        self.engine.stand().map(|_| ()).map_err(js_err)
    }

    pub fn double_down(&mut self) -> Result<(), JsValue> {
        self.engine.double_down().map(|_| ()).map_err(js_err)
    }

    /// Stands without playing the dealer; follow with `dealer_step`.
    pub fn begin_dealer_turn(&mut self) -> Result<(), JsValue> {
        self.engine.begin_dealer_turn().map_err(js_err)
    }

    /// Returns `true` once the dealer has stood and the round is settled.
    pub fn dealer_step(&mut self) -> Result<bool, JsValue> {
        match self.engine.dealer_step().map_err(js_err)? {
            DealerStep::Drew(_) => Ok(false),
            DealerStep::Settled(_) => Ok(true),
        }
    }

    pub fn clear_round(&mut self) {
        self.engine.clear_round();
    }

    pub fn snapshot(&self) -> Result<JsValue, JsValue> {
        let engine = &self.engine;
        let wallet = engine.wallet();

        let snapshot = Snapshot {
            phase: phase_to_str(engine.phase()),
            active: engine.is_active(),
            wallet: JsWallet {
                iron: to_u32(wallet.balance(ResourceKind::Iron)),
                gold: to_u32(wallet.balance(ResourceKind::Gold)),
                platinum: to_u32(wallet.balance(ResourceKind::Platinum)),
            },
            wager: engine.current_wager().map(JsWager::from),
            player: JsPlayer {
                cards: engine.player_cards().iter().copied().map(card_to_js).collect(),
                value: engine.player_score(),
                is_soft: engine.player_hand().is_soft(),
            },
            dealer: JsDealer::from_engine(engine),
            can_double: can_double(engine),
            settlement: engine.settlement().map(JsSettlement::from),
            cards_remaining: engine.cards_remaining() as u32,
        };

        to_js_value(&snapshot)
    }
}

fn can_double(engine: &RoundEngine<Ledger>) -> bool {
    engine.phase() == RoundPhase::PlayerTurn
        && engine.options().double_down
        && engine.player_cards().len() == 2
        && engine
            .current_wager()
            .is_some_and(|w| engine.wallet().balance(w.kind) >= w.amount)
}

#[derive(Serialize)]
struct Snapshot {
    phase: &'static str,
    active: bool,
    wallet: JsWallet,
    wager: Option<JsWager>,
    player: JsPlayer,
    dealer: JsDealer,
    can_double: bool,
    settlement: Option<JsSettlement>,
    cards_remaining: u32,
}

#[derive(Serialize)]
struct JsWallet {
    iron: u32,
    gold: u32,
    platinum: u32,
}

#[derive(Serialize)]
struct JsWager {
    resource: &'static str,
    amount: u32,
}

impl From<Wager> for JsWager {
    fn from(wager: Wager) -> Self {
        Self {
            resource: wager.kind.name(),
            amount: to_u32(wager.amount),
        }
    }
}

#[derive(Serialize)]
struct JsCard {
    suit: &'static str,
    rank: &'static str,
    label: String,
}

#[derive(Serialize)]
struct JsPlayer {
    cards: Vec<JsCard>,
    value: u8,
    is_soft: bool,
}

#[derive(Serialize)]
struct JsDealer {
    cards: Vec<Option<JsCard>>,
    value: Option<u8>,
    visible_value: u8,
    hole_revealed: bool,
}

impl JsDealer {
    fn from_engine(engine: &RoundEngine<Ledger>) -> Self {
        let dealer = engine.dealer_hand();
        let hole_revealed = dealer.is_hole_revealed();
        let shown = engine.dealer_cards(false).len();
        let cards = dealer
            .cards()
            .iter()
            .enumerate()
            .map(|(index, card)| (index < shown).then(|| card_to_js(*card)))
            .collect();

        Self {
            cards,
            value: hole_revealed.then(|| dealer.value()),
            visible_value: engine.visible_dealer_score(),
            hole_revealed,
        }
    }
}

#[derive(Serialize)]
struct JsSettlement {
    outcome: &'static str,
    resource: &'static str,
    wager: u32,
    credit: u32,
    net: f64,
    player_value: u8,
    dealer_value: u8,
}

impl From<Settlement> for JsSettlement {
    fn from(settlement: Settlement) -> Self {
        Self {
            outcome: outcome_to_str(settlement.outcome),
            resource: settlement.wager.kind.name(),
            wager: to_u32(settlement.wager.amount),
            credit: to_u32(settlement.credit),
            net: settlement.net() as f64,
            player_value: settlement.player_score,
            dealer_value: settlement.dealer_score,
        }
    }
}

fn card_to_js(card: Card) -> JsCard {
    JsCard {
        suit: suit_to_str(card.suit),
        rank: card.rank.label(),
        label: card.to_string(),
    }
}

fn parse_resource(resource: &str) -> Result<ResourceKind, JsValue> {
    ResourceKind::ALL
        .into_iter()
        .find(|kind| kind.name().eq_ignore_ascii_case(resource))
        .ok_or_else(|| JsValue::from_str("unknown resource"))
}

fn to_u32(amount: u64) -> u32 {
    u32::try_from(amount).unwrap_or(u32::MAX)
}

fn suit_to_str(suit: Suit) -> &'static str {
    match suit {
        Suit::Spades => "Spades",
        Suit::Hearts => "Hearts",
        Suit::Clubs => "Clubs",
        Suit::Diamonds => "Diamonds",
    }
}

fn phase_to_str(phase: RoundPhase) -> &'static str {
    match phase {
        RoundPhase::Idle => "Idle",
        RoundPhase::PlayerTurn => "PlayerTurn",
        RoundPhase::DealerTurn => "DealerTurn",
        RoundPhase::Settled => "Settled",
    }
}

fn outcome_to_str(outcome: RoundOutcome) -> &'static str {
    match outcome {
        RoundOutcome::Win => "Win",
        RoundOutcome::Blackjack => "Blackjack",
        RoundOutcome::Lose => "Lose",
        RoundOutcome::Bust => "Bust",
        RoundOutcome::Push => "Push",
    }
}

fn js_err<E: core::fmt::Display>(err: E) -> JsValue {
    JsValue::from_str(&err.to_string())
}

fn to_js_value<T: Serialize>(value: &T) -> Result<JsValue, JsValue> {
    serde_wasm_bindgen::to_value(value).map_err(|err| JsValue::from_str(&err.to_string()))
}
