//! Camel Cards hand ranking and scoring.
//!
//! One engine serves both rule variants: the variant picks the card ordinal
//! table and whether `J` acts as a wildcard during classification. Hands are
//! ordered by category first, then card by card in play order.

use std::cmp::Ordering;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HandError {
    /// A card token contained a character outside the 13-symbol alphabet
    #[error("invalid card symbol {0:?}")]
    InvalidCardSymbol(char),
    /// A hand token did not contain exactly 5 cards
    #[error("expected exactly 5 cards, got {0}")]
    WrongCardCount(usize),
    /// A line did not split into a hand token and a positive integer bid
    #[error("malformed bid line {0:?}")]
    MalformedBidLine(String),
}

/// Rule variant for a game: whether `J` is a jack or a joker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuleVariant {
    /// `J` is a jack, ranked between ten and queen
    Standard,
    /// `J` is a joker: weakest for tie-breaks, wild for classification
    JokerWild,
}

/// A card symbol. Declaration order is standard strength order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Card {
    Two,
    Three,
    Four,
    Five,
    Six,
    Seven,
    Eight,
    Nine,
    Ten,
    Jack,
    Queen,
    King,
    Ace,
}

impl Card {
    /// Size of the card alphabet
    pub const COUNT: usize = 13;

    /// Every card, weakest to strongest under standard rules
    pub const ALL: [Card; Card::COUNT] = [
        Card::Two,
        Card::Three,
        Card::Four,
        Card::Five,
        Card::Six,
        Card::Seven,
        Card::Eight,
        Card::Nine,
        Card::Ten,
        Card::Jack,
        Card::Queen,
        Card::King,
        Card::Ace,
    ];

    /// Ordinal strength under the given variant.
    ///
    /// Standard: 2..=14 in alphabet order. Joker-wild: `J` drops to 1,
    /// below every other card; the rest keep their standard ordinals.
    pub fn rank(self, variant: RuleVariant) -> u8 {
        match variant {
            RuleVariant::JokerWild if self == Card::Jack => 1,
            _ => self as u8 + 2,
        }
    }

    fn index(self) -> usize {
        self as usize
    }
}

impl TryFrom<char> for Card {
    type Error = HandError;

    fn try_from(c: char) -> Result<Self, Self::Error> {
        Ok(match c {
            '2' => Self::Two,
            '3' => Self::Three,
            '4' => Self::Four,
            '5' => Self::Five,
            '6' => Self::Six,
            '7' => Self::Seven,
            '8' => Self::Eight,
            '9' => Self::Nine,
            'T' => Self::Ten,
            'J' => Self::Jack,
            'Q' => Self::Queen,
            'K' => Self::King,
            'A' => Self::Ace,
            _ => return Err(HandError::InvalidCardSymbol(c)),
        })
    }
}

/// Hand category. Declaration order is weakest to strongest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum HandType {
    HighCard,
    Pair,
    TwoPair,
    ThreeOfAKind,
    FullHouse,
    FourOfAKind,
    FiveOfAKind,
}

impl HandType {
    /// Classify a 5-card hand under the given rule variant.
    ///
    /// Under joker-wild rules the jokers are pulled out of the count multiset
    /// and added to the largest remaining group, which always yields the
    /// strongest reachable category.
    pub fn classify(cards: &[Card; 5], variant: RuleVariant) -> Self {
        let mut counts = [0u8; Card::COUNT];
        for card in cards {
            counts[card.index()] += 1;
        }

        let jokers = match variant {
            RuleVariant::JokerWild => std::mem::take(&mut counts[Card::Jack.index()]),
            RuleVariant::Standard => 0,
        };

        let mut groups: Vec<u8> = counts.iter().copied().filter(|&c| c > 0).collect();
        groups.sort_unstable_by(|a, b| b.cmp(a));

        // All five cards are jokers.
        let Some(largest) = groups.first_mut() else {
            return Self::FiveOfAKind;
        };
        *largest += jokers;

        Self::of_groups(&groups)
    }

    /// Map a count distribution (sorted descending) to its category.
    fn of_groups(groups: &[u8]) -> Self {
        match (groups[0], groups.get(1)) {
            (5, _) => Self::FiveOfAKind,
            (4, _) => Self::FourOfAKind,
            (3, Some(2)) => Self::FullHouse,
            (3, _) => Self::ThreeOfAKind,
            (2, Some(2)) => Self::TwoPair,
            (2, _) => Self::Pair,
            _ => Self::HighCard,
        }
    }
}

/// Five cards in play order, with category and tie-break ordinals
/// precomputed under one rule variant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hand {
    cards: [Card; 5],
    hand_type: HandType,
    ranks: [u8; 5],
}

impl Hand {
    pub fn new(cards: [Card; 5], variant: RuleVariant) -> Self {
        let hand_type = HandType::classify(&cards, variant);
        let ranks = cards.map(|c| c.rank(variant));
        Self {
            cards,
            hand_type,
            ranks,
        }
    }

    /// Parse a 5-card token such as `32T3K`.
    pub fn parse(token: &str, variant: RuleVariant) -> Result<Self, HandError> {
        Ok(Self::new(parse_cards(token)?, variant))
    }

    pub fn hand_type(&self) -> HandType {
        self.hand_type
    }

    pub fn cards(&self) -> &[Card; 5] {
        &self.cards
    }
}

impl PartialOrd for Hand {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Hand {
    /// Category first, then card by card in play order. Identical hands
    /// compare `Equal`, so duplicate input lines sort deterministically by
    /// their original order under a stable sort.
    fn cmp(&self, other: &Self) -> Ordering {
        self.hand_type
            .cmp(&other.hand_type)
            .then_with(|| self.ranks.cmp(&other.ranks))
    }
}

/// Parse a 5-card token into a card array, validating every symbol.
pub fn parse_cards(token: &str) -> Result<[Card; 5], HandError> {
    let cards: Vec<Card> = token
        .chars()
        .map(Card::try_from)
        .collect::<Result<_, _>>()?;
    <[Card; 5]>::try_from(cards).map_err(|v: Vec<Card>| HandError::WrongCardCount(v.len()))
}

/// Split a bid line into its validated card array and wager, without
/// committing to a rule variant.
pub fn parse_deal(line: &str) -> Result<([Card; 5], u64), HandError> {
    let mut tokens = line.split_whitespace();
    let (Some(hand_token), Some(amount_token), None) =
        (tokens.next(), tokens.next(), tokens.next())
    else {
        return Err(HandError::MalformedBidLine(line.to_string()));
    };

    let cards = parse_cards(hand_token)?;
    let amount: u64 = amount_token
        .parse()
        .map_err(|_| HandError::MalformedBidLine(line.to_string()))?;
    if amount == 0 {
        return Err(HandError::MalformedBidLine(line.to_string()));
    }
    Ok((cards, amount))
}

/// A hand and its wager.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bid {
    pub hand: Hand,
    pub amount: u64,
}

impl Bid {
    /// Parse a `<hand> <amount>` line under the given variant.
    pub fn parse(line: &str, variant: RuleVariant) -> Result<Self, HandError> {
        let (cards, amount) = parse_deal(line)?;
        Ok(Self {
            hand: Hand::new(cards, variant),
            amount,
        })
    }
}

/// All bids of one game, scored under a single rule variant.
#[derive(Debug, Clone)]
pub struct Game {
    bids: Vec<Bid>,
}

impl Game {
    pub fn new(bids: Vec<Bid>) -> Self {
        Self { bids }
    }

    /// Sort bids ascending by hand strength and sum `rank * amount`,
    /// with ranks counted from 1. The bid list itself is left untouched.
    pub fn total_winnings(&self) -> u64 {
        let mut order: Vec<&Bid> = self.bids.iter().collect();
        order.sort_by(|a, b| a.hand.cmp(&b.hand));
        order
            .iter()
            .enumerate()
            .map(|(i, bid)| (i as u64 + 1) * bid.amount)
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn hand(token: &str) -> [Card; 5] {
        parse_cards(token).unwrap()
    }

    #[test]
    fn standard_ranks_strictly_increase_in_alphabet_order() {
        for pair in Card::ALL.windows(2) {
            assert!(pair[0].rank(RuleVariant::Standard) < pair[1].rank(RuleVariant::Standard));
        }
        assert_eq!(Card::Two.rank(RuleVariant::Standard), 2);
        assert_eq!(Card::Ace.rank(RuleVariant::Standard), 14);
    }

    #[test]
    fn joker_variant_moves_jack_below_two() {
        assert!(Card::Jack.rank(RuleVariant::JokerWild) < Card::Two.rank(RuleVariant::JokerWild));
        // All non-jack pairs keep their standard order.
        let others: Vec<Card> = Card::ALL
            .into_iter()
            .filter(|&c| c != Card::Jack)
            .collect();
        for pair in others.windows(2) {
            assert!(pair[0].rank(RuleVariant::JokerWild) < pair[1].rank(RuleVariant::JokerWild));
        }
    }

    #[test]
    fn invalid_symbols_rejected() {
        for c in ['1', '0', 'X', 'j', 'a', ' '] {
            assert_eq!(Card::try_from(c), Err(HandError::InvalidCardSymbol(c)));
        }
        assert_eq!(
            parse_cards("32T3X"),
            Err(HandError::InvalidCardSymbol('X'))
        );
    }

    #[test]
    fn wrong_card_counts_rejected() {
        assert_eq!(parse_cards("32T3"), Err(HandError::WrongCardCount(4)));
        assert_eq!(parse_cards("32T3KK"), Err(HandError::WrongCardCount(6)));
    }

    #[test]
    fn malformed_bid_lines_rejected() {
        for line in ["32T3K", "32T3K 765 junk", "32T3K x", "32T3K 0", ""] {
            assert_eq!(
                parse_deal(line),
                Err(HandError::MalformedBidLine(line.to_string()))
            );
        }
    }

    #[test]
    fn example_hands_classify_standard() {
        let expected = [
            ("32T3K", HandType::Pair),
            ("T55J5", HandType::ThreeOfAKind),
            ("KK677", HandType::TwoPair),
            ("KTJJT", HandType::TwoPair),
            ("QQQJA", HandType::ThreeOfAKind),
        ];
        for (token, ty) in expected {
            assert_eq!(
                HandType::classify(&hand(token), RuleVariant::Standard),
                ty,
                "{token}"
            );
        }
    }

    #[test]
    fn example_hands_classify_joker_wild() {
        let expected = [
            ("32T3K", HandType::Pair),
            ("T55J5", HandType::FourOfAKind),
            ("KK677", HandType::TwoPair),
            ("KTJJT", HandType::FourOfAKind),
            ("QQQJA", HandType::FourOfAKind),
        ];
        for (token, ty) in expected {
            assert_eq!(
                HandType::classify(&hand(token), RuleVariant::JokerWild),
                ty,
                "{token}"
            );
        }
    }

    #[test]
    fn uniform_and_all_joker_hands() {
        assert_eq!(
            HandType::classify(&hand("AAAAA"), RuleVariant::Standard),
            HandType::FiveOfAKind
        );
        assert_eq!(
            HandType::classify(&hand("JJJJJ"), RuleVariant::Standard),
            HandType::FiveOfAKind
        );
        assert_eq!(
            HandType::classify(&hand("JJJJJ"), RuleVariant::JokerWild),
            HandType::FiveOfAKind
        );
    }

    #[test]
    fn full_house_and_two_pair_joker_cases() {
        // Two jokers join the larger group, never split into two pairs.
        assert_eq!(
            HandType::classify(&hand("JJ234"), RuleVariant::JokerWild),
            HandType::ThreeOfAKind
        );
        // One joker on two pairs makes a full house.
        assert_eq!(
            HandType::classify(&hand("2233J"), RuleVariant::JokerWild),
            HandType::FullHouse
        );
        assert_eq!(
            HandType::classify(&hand("JJ224"), RuleVariant::JokerWild),
            HandType::FourOfAKind
        );
    }

    #[test]
    fn classification_is_total_over_every_hand() {
        // The full 13^5 hand space, both variants. The joker variant can
        // never classify below the standard one.
        for code in 0..13u32.pow(5) {
            let mut cards = [Card::Two; 5];
            let mut rest = code;
            for slot in &mut cards {
                *slot = Card::ALL[(rest % 13) as usize];
                rest /= 13;
            }
            let standard = HandType::classify(&cards, RuleVariant::Standard);
            let joker = HandType::classify(&cards, RuleVariant::JokerWild);
            assert!(joker >= standard, "{cards:?}");
        }
    }

    #[test]
    fn identical_hands_compare_equal() {
        let a = Hand::parse("KTJJT", RuleVariant::JokerWild).unwrap();
        let b = Hand::parse("KTJJT", RuleVariant::JokerWild).unwrap();
        assert_eq!(a.cmp(&b), Ordering::Equal);
    }

    #[test]
    fn hands_order_by_category_then_position() {
        let weak = Hand::parse("33332", RuleVariant::Standard).unwrap();
        let strong = Hand::parse("2AAAA", RuleVariant::Standard).unwrap();
        // Same category; first card decides.
        assert_eq!(weak.hand_type(), strong.hand_type());
        assert!(weak > strong);

        let pair = Hand::parse("AAKQJ", RuleVariant::Standard).unwrap();
        let trips = Hand::parse("22234", RuleVariant::Standard).unwrap();
        assert!(pair < trips);
    }

    #[test]
    fn duplicate_bids_score_deterministically() {
        let lines = ["32T3K 765", "32T3K 765", "KK677 28"];
        let bids: Vec<Bid> = lines
            .iter()
            .map(|l| Bid::parse(l, RuleVariant::Standard).unwrap())
            .collect();
        let game = Game::new(bids);
        // The two identical pairs take ranks 1 and 2, the two-pair rank 3.
        assert_eq!(game.total_winnings(), 765 + 2 * 765 + 3 * 28);
        // Scoring twice gives the same answer; the game is not mutated.
        assert_eq!(game.total_winnings(), 765 + 2 * 765 + 3 * 28);
    }

    fn any_cards() -> impl Strategy<Value = [Card; 5]> {
        proptest::array::uniform5(0usize..Card::COUNT).prop_map(|idxs| idxs.map(|i| Card::ALL[i]))
    }

    proptest! {
        #[test]
        fn prop_classification_idempotent(cards in any_cards()) {
            for variant in [RuleVariant::Standard, RuleVariant::JokerWild] {
                prop_assert_eq!(
                    HandType::classify(&cards, variant),
                    HandType::classify(&cards, variant)
                );
            }
        }

        #[test]
        fn prop_joker_substitution_never_weakens(cards in any_cards(), pos in 0usize..5) {
            let base = HandType::classify(&cards, RuleVariant::Standard);
            let mut with_joker = cards;
            with_joker[pos] = Card::Jack;
            prop_assert!(HandType::classify(&with_joker, RuleVariant::JokerWild) >= base);
        }

        #[test]
        fn prop_hands_without_jokers_classify_the_same(cards in any_cards()) {
            prop_assume!(!cards.contains(&Card::Jack));
            prop_assert_eq!(
                HandType::classify(&cards, RuleVariant::Standard),
                HandType::classify(&cards, RuleVariant::JokerWild)
            );
        }
    }
}
