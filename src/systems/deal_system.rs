// src/systems/deal_system.rs

use log::{debug, info};

use crate::components::card::Card;
use crate::config::scoring::TABLEAU_COUNT;
use crate::layout::Layout;

/// 初期カード配置システム！
/// シャッフル済みのデッキを受け取って、クロンダイクの初期盤面を作るよ。
#[derive(Default, Debug, Clone, Copy)]
pub struct DealInitialCardsSystem;

impl DealInitialCardsSystem {
    /// ゲームの初期カード配置を実行する関数だよ！
    ///
    /// # 処理の流れ
    /// 1. 場札の列 i (0..7) に、デッキの末尾から i+1 枚ずつ配る。
    ///    各列で最後に配った1枚だけ表向き。
    /// 2. 残りのカード (52枚なら24枚) は裏向きのまま、デッキの順番どおり山札に置く。
    ///
    /// 得点・手数は 0、捨て札と組札は空のまま。
    pub fn execute(&self, mut deck: Vec<Card>) -> Layout {
        let mut layout = Layout::new();
        let mut dealt = 0;

        for (tableau_index, column) in layout.tableau.iter_mut().enumerate() {
            for card_in_tableau in 0..=tableau_index {
                let Some(mut card) = deck.pop() else { break }; // デッキの末尾から1枚
                card.is_face_up = card_in_tableau == tableau_index; // 各列の最後の1枚だけ表
                column.push(card);
                dealt += 1;
            }
        }
        debug!("DealInitialCardsSystem: {} cards dealt into {} tableau columns", dealt, TABLEAU_COUNT);

        for card in deck.iter_mut() {
            card.is_face_up = false;
        }
        layout.stock = deck;
        info!("DealInitialCardsSystem: new layout ready ({} cards in stock)", layout.stock.len());
        layout
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::scoring::INITIAL_TABLEAU_CARDS;
    use crate::entity::EntityManager;
    use crate::logic::deck::{create_standard_deck, shuffle_deck};
    use itertools::Itertools;

    #[test]
    fn test_initial_deal() {
        let mut deck = create_standard_deck(&EntityManager::new());
        shuffle_deck(&mut deck);
        let layout = DealInitialCardsSystem.execute(deck);

        assert_eq!(layout.card_count(), 52, "配置されたカードの総数が52枚ではありません！");
        assert_eq!(layout.stock.len(), 24, "山札のカード枚数が24枚ではありません！");
        assert_eq!(layout.tableau.iter().map(Vec::len).sum::<usize>(), INITIAL_TABLEAU_CARDS);
        assert!(layout.stock.iter().all(|card| !card.is_face_up), "山札に表向きのカードがあります！");

        for (i, column) in layout.tableau.iter().enumerate() {
            assert_eq!(column.len(), i + 1, "場札[{}]の枚数が{}枚ではありません！", i, i + 1);
            assert_eq!(column.iter().filter(|card| card.is_face_up).count(), 1);
            assert!(column.last().unwrap().is_face_up, "場札[{}]の一番上が裏向きです！", i);
        }

        assert!(layout.waste.is_empty());
        assert!(layout.foundations.iter().all(|foundation| foundation.is_empty()));
        assert_eq!(layout.score, 0);
        assert_eq!(layout.move_count, 0);

        assert!(layout.cards().map(|card| (card.suit, card.rank)).all_unique(), "重複が見つかりました！");
        assert!(layout.cards().map(|card| card.id).all_unique());
        println!("初期配置テスト、成功！🎉");
    }

    #[test]
    fn deal_pops_from_deck_end() {
        let deck = create_standard_deck(&EntityManager::new());
        let expected_first = deck[51].clone();
        let expected_second_col_bottom = deck[50].clone();
        let expected_stock = deck[..24].to_vec();

        let layout = DealInitialCardsSystem.execute(deck);

        assert_eq!(layout.tableau[0][0].id, expected_first.id);
        assert_eq!(layout.tableau[1][0].id, expected_second_col_bottom.id);
        let stock_ids: Vec<_> = layout.stock.iter().map(|card| card.id).collect();
        let expected_ids: Vec<_> = expected_stock.iter().map(|card| card.id).collect();
        assert_eq!(stock_ids, expected_ids, "山札はデッキの残りと同じ順番のはず");
        println!("配る順番テスト、成功！🎉");
    }
}
