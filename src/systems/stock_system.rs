// src/systems/stock_system.rs
//! 山札のクリック処理 (捨て札へ1枚めくる / 捨て札を山札に戻す)。

use log::{info, warn};

use crate::error::MoveError;
use crate::history::{History, MoveKind};
use crate::layout::Layout;
use crate::logic::rules::stock_waste;

/// 山札をクリックしたときの処理だよ。
///
/// - 山札にカードがあれば: 一番上をめくって捨て札へ (`DrawCard`)
/// - 山札が空で捨て札があれば: 捨て札を上から順に裏返して山札へ戻す (`RecycleWaste`)
/// - どっちも空なら `EmptySource`。盤面も履歴もそのまま。
///
/// 成功したら操作前のチェックポイントを履歴に積んで、手数を1つ増やす。
pub fn draw(layout: &mut Layout, history: &mut History) -> Result<MoveKind, MoveError> {
    let stock_is_empty = layout.stock.is_empty();
    let waste_is_empty = layout.waste.is_empty();

    if stock_waste::can_deal_from_stock(stock_is_empty) {
        history.record(MoveKind::DrawCard, layout);
        if let Some(mut card) = layout.stock.pop() {
            card.is_face_up = true; // 捨て札は表向き
            info!("Dealing card {:?} from Stock to Waste", card.id);
            layout.waste.push(card);
        }
        layout.move_count += 1;
        Ok(MoveKind::DrawCard)
    } else if stock_waste::can_reset_stock_from_waste(stock_is_empty, waste_is_empty) {
        history.record(MoveKind::RecycleWaste, layout);
        info!("Stock is empty. Moving {} cards from Waste back to Stock", layout.waste.len());
        while let Some(mut card) = layout.waste.pop() {
            card.is_face_up = false; // 山札に戻すときは裏向き
            layout.stock.push(card);
        }
        layout.move_count += 1;
        Ok(MoveKind::RecycleWaste)
    } else {
        warn!("Both Stock and Waste are empty. Nothing to draw.");
        Err(MoveError::EmptySource)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::card::{Card, Rank, Suit};
    use crate::entity::Entity;

    fn layout_with_stock(n: usize) -> Layout {
        let mut layout = Layout::new();
        for i in 0..n {
            layout.stock.push(Card::new(Entity(i), Suit::Club, crate::components::card::ALL_RANKS[i % 13]));
        }
        layout
    }

    #[test]
    fn draw_moves_top_card_face_up() {
        let mut layout = layout_with_stock(3);
        let mut history = History::new();

        assert_eq!(draw(&mut layout, &mut history), Ok(MoveKind::DrawCard));
        assert_eq!(layout.stock.len(), 2);
        assert_eq!(layout.waste.len(), 1);
        assert_eq!(layout.waste[0].id, Entity(2), "末尾のカードが引かれるはず");
        assert!(layout.waste[0].is_face_up);
        assert_eq!(layout.move_count, 1);
        assert_eq!(layout.score, 0, "めくるだけでは得点は入らない");
        assert_eq!(history.len(), 1);
        println!("山札めくりテスト、成功！🎉");
    }

    #[test]
    fn recycle_restores_original_stock_order() {
        let mut layout = layout_with_stock(5);
        let original: Vec<Entity> = layout.stock.iter().map(|card| card.id).collect();
        let mut history = History::new();

        for _ in 0..5 {
            draw(&mut layout, &mut history).unwrap();
        }
        let drawn: Vec<Entity> = layout.waste.iter().map(|card| card.id).collect();
        assert!(layout.stock.is_empty());

        assert_eq!(draw(&mut layout, &mut history), Ok(MoveKind::RecycleWaste));
        assert!(layout.waste.is_empty());
        assert!(layout.stock.iter().all(|card| !card.is_face_up));

        let recycled: Vec<Entity> = layout.stock.iter().map(|card| card.id).collect();
        let reversed_draw_order: Vec<Entity> = drawn.into_iter().rev().collect();
        assert_eq!(recycled, reversed_draw_order, "捨て札の順番が逆になって山札に戻るはず");
        assert_eq!(recycled, original);
        assert_eq!(layout.move_count, 6);
        println!("山札リセットテスト、成功！🎉");
    }

    #[test]
    fn draw_with_nothing_left_fails() {
        let mut layout = Layout::new();
        layout.tableau[0].push(Card::new(Entity(0), Suit::Heart, Rank::King));
        let before = layout.clone();
        let mut history = History::new();

        assert_eq!(draw(&mut layout, &mut history), Err(MoveError::EmptySource));
        assert_eq!(layout, before);
        assert!(history.is_empty(), "失敗した操作は履歴に残らない");
    }
}
