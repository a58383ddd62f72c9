//! 場札 (Tableau) へのカード移動ルールを定義するよ。

use log::trace;

use crate::components::card::{Card, Rank};
use crate::components::stack::StackType;
use crate::layout::Layout;

/// 指定されたカードが、特定の場札 (Tableau) の一番上に置けるかチェックする。
///
/// 空の列には K だけ。そうでなければ、一番上より1つ小さいランクで色違いのときだけ OK。
pub fn can_move_to_tableau(layout: &Layout, card: &Card, tableau_index: u8) -> bool {
    let stack_type = StackType::Tableau(tableau_index);
    if layout.pile(stack_type).is_none() {
        trace!("[Tableau Rule] Invalid tableau index {}", tableau_index); // 範囲外
        return false;
    }

    match layout.top_card(stack_type) {
        Some(top) => {
            let colors_different = card.color() != top.color();
            let rank_is_one_less = card.value() + 1 == top.value();
            trace!(
                "[Tableau Rule] Moving {:?}({:?}) onto {:?}({:?}). Colors different: {}. Rank is one less: {}.",
                card.rank, card.color(), top.rank, top.color(), colors_different, rank_is_one_less
            );
            colors_different && rank_is_one_less
        }
        None => {
            let is_king = card.rank == Rank::King;
            trace!("[Tableau Rule] Moving {:?} onto empty Tableau({}). Is King: {}.", card.rank, tableau_index, is_king);
            is_king
        }
    }
}
