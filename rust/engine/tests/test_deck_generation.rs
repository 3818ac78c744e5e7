use std::collections::HashSet;

use sixmax_engine::cards::{all_ranks, all_suits, full_deck, Card, Rank, Suit};

#[test]
fn deck_has_exactly_52_cards() {
    assert_eq!(full_deck().len(), 52);
}

#[test]
fn every_suit_rank_pair_appears_exactly_once() {
    let deck = full_deck();
    let unique: HashSet<(Suit, Rank)> = deck.iter().map(|c| (c.suit, c.rank)).collect();
    assert_eq!(unique.len(), 52);
    for &s in &all_suits() {
        for &r in &all_ranks() {
            assert!(unique.contains(&(s, r)), "missing {:?} {:?}", s, r);
        }
    }
}

#[test]
fn generation_is_deterministic() {
    assert_eq!(full_deck(), full_deck());
}

#[test]
fn face_ranks_and_ten_describe_as_letters() {
    let ace = Card {
        suit: Suit::Spades,
        rank: Rank::Ace,
    };
    assert_eq!(ace.describe(), "A of spade");

    let king = Card {
        suit: Suit::Diamonds,
        rank: Rank::King,
    };
    assert_eq!(king.describe(), "K of diamond");

    let queen = Card {
        suit: Suit::Hearts,
        rank: Rank::Queen,
    };
    assert_eq!(queen.describe(), "Q of heart");

    let jack = Card {
        suit: Suit::Clubs,
        rank: Rank::Jack,
    };
    assert_eq!(jack.describe(), "J of club");

    let ten = Card {
        suit: Suit::Hearts,
        rank: Rank::Ten,
    };
    assert_eq!(ten.describe(), "T of heart");
}

#[test]
fn number_ranks_describe_as_decimals() {
    let two = Card {
        suit: Suit::Clubs,
        rank: Rank::Two,
    };
    assert_eq!(two.describe(), "2 of club");

    let nine = Card {
        suit: Suit::Spades,
        rank: Rank::Nine,
    };
    assert_eq!(nine.describe(), "9 of spade");
}

#[test]
fn aces_compare_above_every_other_rank() {
    for &r in &all_ranks() {
        assert!(Rank::Ace >= r);
    }
    assert!(Rank::Ace > Rank::King);
}

#[test]
fn rank_from_u8_round_trips_and_clamps() {
    assert_eq!(Rank::from_u8(2), Rank::Two);
    assert_eq!(Rank::from_u8(11), Rank::Jack);
    assert_eq!(Rank::from_u8(14), Rank::Ace);
    // out-of-range values clamp to Ace
    assert_eq!(Rank::from_u8(0), Rank::Ace);
    assert_eq!(Rank::from_u8(99), Rank::Ace);
}
