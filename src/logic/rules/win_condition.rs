//! ゲームの勝利条件判定ロジックを定義するよ。

use crate::components::card::Card;
use crate::config::scoring::{CARDS_PER_SUIT, FOUNDATION_COUNT};

/// ゲームのクリア条件（4つの組札が全部13枚ずつ）を判定する。
pub fn check_win_condition(foundations: &[Vec<Card>; FOUNDATION_COUNT]) -> bool {
    foundations.iter().all(|foundation| foundation.len() == CARDS_PER_SUIT)
}
