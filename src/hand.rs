//! Player and dealer hand representations.

extern crate alloc;

use alloc::vec::Vec;

use crate::card::Card;

/// Highest total that does not bust.
pub const BLACKJACK: u8 = 21;

/// Scores a run of cards.
///
/// Every ace starts at 11 and is softened to 1, one at a time, while the total
/// is over 21. Returns the total and whether an ace is still counted as 11.
///
/// ```
/// use starjack::{Card, Rank, Suit, hand::evaluate};
///
/// let cards = [
///     Card::new(Suit::Spades, Rank::Ace),
///     Card::new(Suit::Hearts, Rank::Ace),
///     Card::new(Suit::Clubs, Rank::Nine),
/// ];
/// assert_eq!(evaluate(&cards), (21, true));
/// ```
#[must_use]
pub fn evaluate(cards: &[Card]) -> (u8, bool) {
    let mut value: u8 = 0;
    let mut aces: u8 = 0;

    for card in cards {
        if card.is_ace() {
            aces = aces.saturating_add(1);
        }
        value = value.saturating_add(card.rank.value());
    }

    while value > BLACKJACK && aces > 0 {
        value -= 10;
        aces -= 1;
    }

    let is_soft = aces > 0 && value <= BLACKJACK;
    (value, is_soft)
}

fn is_natural(cards: &[Card]) -> bool {
    cards.len() == 2 && evaluate(cards).0 == BLACKJACK
}

/// The player's hand.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Hand {
    cards: Vec<Card>,
}

impl Hand {
    /// Creates a new empty hand.
    #[must_use]
    pub const fn new() -> Self {
        Self { cards: Vec::new() }
    }

    /// Adds a card to the hand.
    pub fn add_card(&mut self, card: Card) {
        self.cards.push(card);
    }

    /// Returns the cards in the hand.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Calculates the value of the hand.
    ///
    /// Aces are counted as 11 if possible without busting, otherwise as 1.
    #[must_use]
    pub fn value(&self) -> u8 {
        evaluate(&self.cards).0
    }

    /// Returns whether the hand is soft (contains an ace counted as 11).
    #[must_use]
    pub fn is_soft(&self) -> bool {
        evaluate(&self.cards).1
    }

    /// Returns whether the hand is a natural: two cards totalling 21.
    ///
    /// A hand that reaches 21 by hitting is never a natural.
    #[must_use]
    pub fn is_natural(&self) -> bool {
        is_natural(&self.cards)
    }

    /// Returns whether the hand is over 21.
    #[must_use]
    pub fn is_bust(&self) -> bool {
        self.value() > BLACKJACK
    }

    /// Returns the number of cards in the hand.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the hand is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Clears the hand for a new round.
    pub fn clear(&mut self) {
        self.cards.clear();
    }
}

/// The dealer's hand.
///
/// The last card dealt in the opening deal is the hole card. Until it is
/// revealed, [`visible_cards`](Self::visible_cards) and
/// [`visible_value`](Self::visible_value) leave it out.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DealerHand {
    cards: Vec<Card>,
    hole_revealed: bool,
}

impl DealerHand {
    /// Creates a new empty dealer hand.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            cards: Vec::new(),
            hole_revealed: false,
        }
    }

    /// Adds a card to the hand.
    pub fn add_card(&mut self, card: Card) {
        self.cards.push(card);
    }

    /// Returns all cards in the hand, including a hidden hole card.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns the cards a player can see.
    #[must_use]
    pub fn visible_cards(&self) -> &[Card] {
        if self.hole_revealed {
            &self.cards
        } else {
            let shown = self.cards.len().saturating_sub(1);
            &self.cards[..shown]
        }
    }

    /// Returns the visible card (first card).
    #[must_use]
    pub fn up_card(&self) -> Option<&Card> {
        self.cards.first()
    }

    /// Returns whether the hole card is revealed.
    #[must_use]
    pub const fn is_hole_revealed(&self) -> bool {
        self.hole_revealed
    }

    /// Reveals the hole card.
    pub const fn reveal_hole(&mut self) {
        self.hole_revealed = true;
    }

    /// Calculates the value of the visible cards.
    #[must_use]
    pub fn visible_value(&self) -> u8 {
        evaluate(self.visible_cards()).0
    }

    /// Calculates the full value of the hand.
    #[must_use]
    pub fn value(&self) -> u8 {
        evaluate(&self.cards).0
    }

    /// Returns whether the hand is a natural blackjack.
    #[must_use]
    pub fn is_natural(&self) -> bool {
        is_natural(&self.cards)
    }

    /// Returns whether the hand is bust.
    #[must_use]
    pub fn is_bust(&self) -> bool {
        self.value() > BLACKJACK
    }

    /// Returns whether the hand is soft (contains an ace counted as 11).
    #[must_use]
    pub fn is_soft(&self) -> bool {
        evaluate(&self.cards).1
    }

    /// Returns the number of cards.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the hand is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Clears the hand for a new round.
    pub fn clear(&mut self) {
        self.cards.clear();
        self.hole_revealed = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::card::{Rank, Suit};

    fn cards(ranks: &[Rank]) -> Vec<Card> {
        ranks.iter().map(|&rank| Card::new(Suit::Clubs, rank)).collect()
    }

    #[test]
    fn face_cards_count_ten() {
        assert_eq!(evaluate(&cards(&[Rank::Jack, Rank::Queen])), (20, false));
        assert_eq!(evaluate(&cards(&[Rank::King, Rank::Seven])), (17, false));
    }

    #[test]
    fn aces_soften_one_at_a_time() {
        assert_eq!(evaluate(&cards(&[Rank::Ace, Rank::Ace, Rank::Nine])), (21, true));
        assert_eq!(evaluate(&cards(&[Rank::Ace, Rank::Ace])), (12, true));
        assert_eq!(
            evaluate(&cards(&[Rank::Ace, Rank::Ace, Rank::Ace, Rank::Ace])),
            (14, true)
        );
        assert_eq!(
            evaluate(&cards(&[Rank::Ace, Rank::Nine, Rank::Five])),
            (15, false)
        );
    }

    #[test]
    fn bust_total_is_minimum() {
        assert_eq!(
            evaluate(&cards(&[Rank::King, Rank::Queen, Rank::Ace, Rank::Five])),
            (26, false)
        );
    }

    #[test]
    fn natural_needs_exactly_two_cards() {
        let mut hand = Hand::new();
        hand.add_card(Card::new(Suit::Spades, Rank::Ace));
        hand.add_card(Card::new(Suit::Hearts, Rank::King));
        assert!(hand.is_natural());

        let mut hit_to_21 = Hand::new();
        for rank in [Rank::Seven, Rank::Nine, Rank::Five] {
            hit_to_21.add_card(Card::new(Suit::Diamonds, rank));
        }
        assert_eq!(hit_to_21.value(), 21);
        assert!(!hit_to_21.is_natural());
    }

    #[test]
    fn dealer_hides_last_card_until_revealed() {
        let mut dealer = DealerHand::new();
        dealer.add_card(Card::new(Suit::Hearts, Rank::Six));
        dealer.add_card(Card::new(Suit::Clubs, Rank::King));

        assert_eq!(dealer.visible_cards().len(), 1);
        assert_eq!(dealer.visible_value(), 6);
        assert_eq!(dealer.value(), 16);

        dealer.reveal_hole();
        assert_eq!(dealer.visible_cards().len(), 2);
        assert_eq!(dealer.visible_value(), 16);
    }
}
