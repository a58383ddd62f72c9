//! 山札 (Stock) と捨て札 (Waste) に関するルールを定義するよ。

use crate::components::stack::{StackInfo, StackType};
use crate::layout::Layout;

/// ストック（山札）からウェスト（捨て札）にカードを配れるかチェックする。
pub fn can_deal_from_stock(stock_is_empty: bool) -> bool {
    !stock_is_empty
}

/// ストック（山札）が空のときに、ウェスト（捨て札）からストックにカードを戻せるかチェックする。
pub fn can_reset_stock_from_waste(stock_is_empty: bool, waste_is_empty: bool) -> bool {
    stock_is_empty && !waste_is_empty
}

/// 1枚だけで動かせる位置にあるカードかどうか。
/// 捨て札の一番上か、どれかの組札の一番上だけが OK。
pub fn is_single_card_source(layout: &Layout, location: StackInfo) -> bool {
    match location.stack_type {
        StackType::Waste | StackType::Foundation(_) => layout
            .pile(location.stack_type)
            .is_some_and(|pile| location.position_in_stack + 1 == pile.len()),
        StackType::Stock | StackType::Tableau(_) => false,
    }
}
