use std::fmt;

use serde::{Deserialize, Serialize};

/// One of the four suits in a standard 52-card deck.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub enum Suit {
    Spades,
    Diamonds,
    Hearts,
    Clubs,
}

impl Suit {
    /// Lowercase singular name, as rendered in card descriptions.
    pub fn name(self) -> &'static str {
        match self {
            Suit::Spades => "spade",
            Suit::Diamonds => "diamond",
            Suit::Hearts => "heart",
            Suit::Clubs => "club",
        }
    }
}

/// Rank of a playing card from Two through Ace.
/// Aces carry the numeric maximum (14) so that plain numeric comparison
/// orders ranks correctly for future hand-strength logic.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub enum Rank {
    Two = 2,
    Three,
    Four,
    Five,
    Six,
    Seven,
    Eight,
    Nine,
    Ten,
    /// Jack (11)
    Jack,
    /// Queen (12)
    Queen,
    /// King (13)
    King,
    /// Ace (14)
    Ace,
}

impl Rank {
    pub fn from_u8(v: u8) -> Rank {
        match v {
            2 => Rank::Two,
            3 => Rank::Three,
            4 => Rank::Four,
            5 => Rank::Five,
            6 => Rank::Six,
            7 => Rank::Seven,
            8 => Rank::Eight,
            9 => Rank::Nine,
            10 => Rank::Ten,
            11 => Rank::Jack,
            12 => Rank::Queen,
            13 => Rank::King,
            _ => Rank::Ace,
        }
    }

    /// Single-glyph label: A, K, Q, J, T for the face ranks and ten,
    /// decimal digits otherwise.
    pub fn label(self) -> String {
        match self {
            Rank::Ace => "A".to_string(),
            Rank::King => "K".to_string(),
            Rank::Queen => "Q".to_string(),
            Rank::Jack => "J".to_string(),
            Rank::Ten => "T".to_string(),
            other => (other as u8).to_string(),
        }
    }
}

/// A single playing card with a suit and a rank. Cards are interchangeable
/// value objects, not identity-bearing.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub struct Card {
    pub suit: Suit,
    pub rank: Rank,
}

impl Card {
    /// Human-readable description, e.g. "A of spade" or "7 of heart".
    pub fn describe(&self) -> String {
        format!("{} of {}", self.rank.label(), self.suit.name())
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.describe())
    }
}

pub fn all_suits() -> [Suit; 4] {
    [Suit::Spades, Suit::Diamonds, Suit::Hearts, Suit::Clubs]
}

pub fn all_ranks() -> [Rank; 13] {
    [
        Rank::Two,
        Rank::Three,
        Rank::Four,
        Rank::Five,
        Rank::Six,
        Rank::Seven,
        Rank::Eight,
        Rank::Nine,
        Rank::Ten,
        Rank::Jack,
        Rank::Queen,
        Rank::King,
        Rank::Ace,
    ]
}

/// Enumerate the full 52-card deck, one card for every (suit, rank) pair.
/// The deck is generated in a fixed order; nothing in the betting round
/// shuffles, deals from, or otherwise mutates it.
pub fn full_deck() -> Vec<Card> {
    let mut v = Vec::with_capacity(52);
    for &s in &all_suits() {
        for &r in &all_ranks() {
            v.push(Card { suit: s, rank: r });
        }
    }
    v
}
