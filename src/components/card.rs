// src/components/card.rs

use serde::{Serialize, Deserialize};

use crate::entity::Entity;
use crate::logic::rules::CardColor;

/// カードのスート（マーク）を表す列挙型だよ！
///
/// JSON では `"spades"` みたいな小文字の複数形になるよ。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Suit {
    #[serde(rename = "spades")]
    Spade,
    #[serde(rename = "hearts")]
    Heart,
    #[serde(rename = "diamonds")]
    Diamond,
    #[serde(rename = "clubs")]
    Club,
}

/// 全スートの配列。デッキを作るときにループで使うよ。
pub const ALL_SUITS: [Suit; 4] = [Suit::Spade, Suit::Heart, Suit::Diamond, Suit::Club];

impl Suit {
    /// 表示用のマーク (♠ ♥ ♦ ♣)
    pub fn symbol(self) -> &'static str {
        match self {
            Suit::Spade => "♠",
            Suit::Heart => "♥",
            Suit::Diamond => "♦",
            Suit::Club => "♣",
        }
    }

    pub fn color(self) -> CardColor {
        CardColor::from_suit(self)
    }
}

/// カードのランク（数字）を表す列挙型だよ！ A, 2, 3, ..., K
///
/// `Ace = 1` から始まるから、`rank as u8` がそのままカードの値 (1..=13) になるよ。
/// JSON では `"A"`, `"2"`, ..., `"10"`, `"J"`, `"Q"`, `"K"` になる。
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Rank {
    #[serde(rename = "A")]
    Ace = 1,
    #[serde(rename = "2")]
    Two,
    #[serde(rename = "3")]
    Three,
    #[serde(rename = "4")]
    Four,
    #[serde(rename = "5")]
    Five,
    #[serde(rename = "6")]
    Six,
    #[serde(rename = "7")]
    Seven,
    #[serde(rename = "8")]
    Eight,
    #[serde(rename = "9")]
    Nine,
    #[serde(rename = "10")]
    Ten,
    #[serde(rename = "J")]
    Jack,
    #[serde(rename = "Q")]
    Queen,
    #[serde(rename = "K")]
    King,
}

pub const ALL_RANKS: [Rank; 13] = [
    Rank::Ace, Rank::Two, Rank::Three, Rank::Four, Rank::Five, Rank::Six, Rank::Seven,
    Rank::Eight, Rank::Nine, Rank::Ten, Rank::Jack, Rank::Queen, Rank::King,
];

impl Rank {
    /// A=1 .. K=13
    pub fn value(self) -> u8 {
        self as u8
    }
}

/// カード1枚を表す構造体だよ！🃏
///
/// - `id`: ゲーム中ずっと変わらないカードの ID
/// - `suit`, `rank`: カードの正体
/// - `is_face_up`: 表向きなら true
///
/// 向きは変わるから Copy は付けてないよ。履歴のスナップショットは clone で丸ごとコピーする。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    pub id: Entity,
    pub suit: Suit,
    pub rank: Rank,
    pub is_face_up: bool,
}

impl Card {
    /// 裏向きのカードを作る。
    pub fn new(id: Entity, suit: Suit, rank: Rank) -> Self {
        Self { id, suit, rank, is_face_up: false }
    }

    pub fn value(&self) -> u8 {
        self.rank.value()
    }

    pub fn color(&self) -> CardColor {
        self.suit.color()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_card() {
        let card = Card::new(Entity(3), Suit::Spade, Rank::Ace);

        assert_eq!(card.id, Entity(3));
        assert_eq!(card.suit, Suit::Spade);
        assert_eq!(card.rank, Rank::Ace);
        assert!(!card.is_face_up, "作ったばかりのカードは裏向きのはず");
    }

    #[test]
    fn rank_comparison_and_values() {
        assert!(Rank::Ace < Rank::Two);
        assert!(Rank::Ten < Rank::Jack);
        assert!(Rank::Queen < Rank::King);
        assert_eq!(Rank::Ace.value(), 1);
        assert_eq!(Rank::Ten.value(), 10);
        assert_eq!(Rank::King.value(), 13);

        let values: Vec<u8> = ALL_RANKS.iter().map(|r| r.value()).collect();
        assert_eq!(values, (1..=13).collect::<Vec<u8>>());
    }

    #[test]
    fn suit_symbols_and_colors() {
        assert_eq!(Suit::Spade.symbol(), "♠");
        assert_eq!(Suit::Heart.symbol(), "♥");
        assert_eq!(Suit::Diamond.symbol(), "♦");
        assert_eq!(Suit::Club.symbol(), "♣");

        assert_eq!(Card::new(Entity(0), Suit::Heart, Rank::Six).color(), CardColor::Red);
        assert_eq!(Card::new(Entity(1), Suit::Club, Rank::Six).color(), CardColor::Black);
    }

    #[test]
    fn wire_names() {
        assert_eq!(serde_json::to_string(&Suit::Diamond).unwrap(), "\"diamonds\"");
        assert_eq!(serde_json::to_string(&Rank::Ten).unwrap(), "\"10\"");
        assert_eq!(serde_json::to_string(&Rank::Queen).unwrap(), "\"Q\"");
        let rank: Rank = serde_json::from_str("\"A\"").unwrap();
        assert_eq!(rank, Rank::Ace);
    }
}
