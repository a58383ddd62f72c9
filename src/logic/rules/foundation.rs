//! 組札 (Foundation) へのカード移動ルールを定義するよ。

use log::trace;

use crate::components::card::{Card, Rank};
use crate::components::stack::StackType;
use crate::layout::Layout;

/// 指定されたカードが、特定の組札 (Foundation) の一番上に置けるかチェックする。
///
/// - 組札が空: A だけ、しかも捨て札から来たときだけ OK (場札や組札からの A はダメ)。
/// - 空じゃない: 一番上と同じスートで、ちょうど1つ上のランクなら OK。
/// - 番号が範囲外なら置けない。
pub fn can_move_to_foundation(
    layout: &Layout,
    card: &Card,
    foundation_index: u8,
    origin_is_waste: bool,
) -> bool {
    let stack_type = StackType::Foundation(foundation_index);
    if layout.pile(stack_type).is_none() {
        trace!("[Foundation Rule] Invalid foundation index {}", foundation_index); // 範囲外
        return false;
    }

    let result = match layout.top_card(stack_type) {
        None => card.rank == Rank::Ace && origin_is_waste,
        Some(top) => card.suit == top.suit && card.value() == top.value() + 1,
    };
    trace!(
        "[Foundation Rule] {:?} {:?} -> Foundation({}) (from waste: {}): {}",
        card.rank, card.suit, foundation_index, origin_is_waste, result
    );
    result
}
