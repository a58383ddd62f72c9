// src/error.rs
//! ゲームのルール違反を表すエラー型。

use std::fmt;

use crate::entity::Entity;

/// 操作が失敗した理由だよ。
///
/// どれも「よくある、回復できる失敗」なので、呼び出し側には `success: false` と
/// 変わっていないゲーム状態が返るだけ。パニックにはしない！
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveError {
    /// ルール上動かせない (ランク・スート・色が合わない、動かせない位置のカード、裏向きのカードを含む列など)
    InvalidMove(&'static str),
    /// 山札も捨て札も空なのに引こうとした
    EmptySource,
    /// そんな ID のカードはどこにもない
    UnknownCard(Entity),
    /// 取り消せる操作が残っていない
    NoHistory,
}

impl fmt::Display for MoveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoveError::InvalidMove(reason) => write!(f, "invalid move: {}", reason),
            MoveError::EmptySource => write!(f, "stock and waste are both empty"),
            MoveError::UnknownCard(id) => write!(f, "no card with id {}", id.0),
            MoveError::NoHistory => write!(f, "nothing to undo"),
        }
    }
}

impl std::error::Error for MoveError {}
