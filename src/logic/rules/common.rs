//! ルール判定で共通して使うヘルパー関数や型を置くよ。

use serde::{Serialize, Deserialize};

use crate::components::card::{Card, Suit};

/// カードの色（赤か黒か）を表すヘルパーenumだよ。
/// 場札の「色違いで重ねる」ルールと、表示用の `color` フィールドで使う。
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CardColor {
    Red,
    Black,
}

impl CardColor {
    /// スートからカードの色を取得する関数。
    pub fn from_suit(suit: Suit) -> Self {
        match suit {
            Suit::Heart | Suit::Diamond => CardColor::Red,
            Suit::Club | Suit::Spade => CardColor::Black,
        }
    }
}

/// 場札の列 `column` の `from` 番目から上が、まとめて動かせる列になってるかチェック。
/// 1枚でも裏向きが混ざってたらダメ。`from` が範囲外でもダメ。
pub fn is_face_up_run(column: &[Card], from: usize) -> bool {
    match column.get(from..) {
        Some(run) if !run.is_empty() => run.iter().all(|card| card.is_face_up),
        _ => false,
    }
}
