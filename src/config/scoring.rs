//! 得点とゲーム盤の大きさに関する定数を定義するよ！

/// 組札 (Foundation) にカードを置いたときの得点
pub const FOUNDATION_MOVE_SCORE: i32 = 10;
/// 場札 (Tableau) にカード (または列) を置いたときの得点
pub const TABLEAU_MOVE_SCORE: i32 = 5;
/// 場札の裏向きカードをめくったときのボーナス
pub const REVEAL_BONUS: i32 = 5;

/// 標準デッキの枚数
pub const DECK_SIZE: usize = 52;
/// 組札の数
pub const FOUNDATION_COUNT: usize = 4;
/// 場札の列数
pub const TABLEAU_COUNT: usize = 7;
/// 1つの組札が完成したときの枚数 (A..K)
pub const CARDS_PER_SUIT: usize = 13;
/// 初期配置で場札に配る枚数 (1 + 2 + ... + 7)
pub const INITIAL_TABLEAU_CARDS: usize = TABLEAU_COUNT * (TABLEAU_COUNT + 1) / 2;
