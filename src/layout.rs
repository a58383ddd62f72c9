// src/layout.rs

use crate::components::card::Card;
use crate::components::stack::{StackInfo, StackType};
use crate::config::scoring::{FOUNDATION_COUNT, TABLEAU_COUNT};
use crate::entity::Entity;
use crate::logic::rules::check_win_condition;

/// ゲーム盤の状態をまるごと持つ構造体だよ！
///
/// 山札・捨て札・組札4つ・場札7列、それと得点と手数。
/// どのスタックも `Vec<Card>` で、末尾が「一番上」のカードになる。
/// カードは必ずどこか1か所にだけいて、全部合わせると常に52枚。
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Layout {
    pub stock: Vec<Card>,
    pub waste: Vec<Card>,
    pub foundations: [Vec<Card>; FOUNDATION_COUNT],
    pub tableau: [Vec<Card>; TABLEAU_COUNT],
    pub score: i32,
    pub move_count: u32,
}

impl Layout {
    /// 空っぽの盤面。
    pub fn new() -> Self {
        Self::default()
    }

    /// 指定したスタックへの参照。範囲外の番号なら None。
    pub fn pile(&self, stack_type: StackType) -> Option<&Vec<Card>> {
        match stack_type {
            StackType::Stock => Some(&self.stock),
            StackType::Waste => Some(&self.waste),
            StackType::Foundation(index) => self.foundations.get(index as usize),
            StackType::Tableau(index) => self.tableau.get(index as usize),
        }
    }

    pub fn pile_mut(&mut self, stack_type: StackType) -> Option<&mut Vec<Card>> {
        match stack_type {
            StackType::Stock => Some(&mut self.stock),
            StackType::Waste => Some(&mut self.waste),
            StackType::Foundation(index) => self.foundations.get_mut(index as usize),
            StackType::Tableau(index) => self.tableau.get_mut(index as usize),
        }
    }

    /// スタックの一番上のカード。空なら None。
    pub fn top_card(&self, stack_type: StackType) -> Option<&Card> {
        self.pile(stack_type).and_then(|pile| pile.last())
    }

    /// カード ID からそのカードの居場所を探すよ。
    /// 探す順番は 山札 → 捨て札 → 場札 → 組札。
    pub fn find_card(&self, id: Entity) -> Option<StackInfo> {
        let stacks = [StackType::Stock, StackType::Waste]
            .into_iter()
            .chain((0..TABLEAU_COUNT as u8).map(StackType::Tableau))
            .chain((0..FOUNDATION_COUNT as u8).map(StackType::Foundation));

        for stack_type in stacks {
            let Some(pile) = self.pile(stack_type) else { continue };
            if let Some(position) = pile.iter().position(|card| card.id == id) {
                return Some(StackInfo::new(stack_type, position));
            }
        }
        None
    }

    /// 盤面の全カード (山札, 捨て札, 組札, 場札 の順)。
    pub fn cards(&self) -> impl Iterator<Item = &Card> {
        self.stock
            .iter()
            .chain(self.waste.iter())
            .chain(self.foundations.iter().flatten())
            .chain(self.tableau.iter().flatten())
    }

    pub fn card_count(&self) -> usize {
        self.cards().count()
    }

    /// 4つの組札が全部13枚そろっていればクリア！
    pub fn is_won(&self) -> bool {
        check_win_condition(&self.foundations)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::card::{Rank, Suit};

    fn card(id: usize, suit: Suit, rank: Rank) -> Card {
        Card { id: Entity(id), suit, rank, is_face_up: true }
    }

    #[test]
    fn find_card_reports_stack_and_position() {
        let mut layout = Layout::new();
        layout.stock.push(card(0, Suit::Club, Rank::Two));
        layout.waste.push(card(1, Suit::Heart, Rank::Nine));
        layout.tableau[3].push(card(2, Suit::Spade, Rank::King));
        layout.tableau[3].push(card(3, Suit::Heart, Rank::Queen));
        layout.foundations[2].push(card(4, Suit::Diamond, Rank::Ace));

        assert_eq!(layout.find_card(Entity(0)), Some(StackInfo::new(StackType::Stock, 0)));
        assert_eq!(layout.find_card(Entity(1)), Some(StackInfo::new(StackType::Waste, 0)));
        assert_eq!(layout.find_card(Entity(3)), Some(StackInfo::new(StackType::Tableau(3), 1)));
        assert_eq!(layout.find_card(Entity(4)), Some(StackInfo::new(StackType::Foundation(2), 0)));
        assert_eq!(layout.find_card(Entity(99)), None);
        assert_eq!(layout.card_count(), 5);
    }

    #[test]
    fn pile_out_of_range_is_none() {
        let layout = Layout::new();
        assert!(layout.pile(StackType::Tableau(7)).is_none());
        assert!(layout.pile(StackType::Foundation(4)).is_none());
        assert!(layout.top_card(StackType::Tableau(0)).is_none());
    }

    #[test]
    fn top_card_is_the_last_card() {
        let mut layout = Layout::new();
        layout.tableau[2].push(card(0, Suit::Club, Rank::Nine));
        layout.tableau[2].push(card(1, Suit::Heart, Rank::Eight)); // これが一番上
        assert_eq!(layout.top_card(StackType::Tableau(2)).map(|c| c.id), Some(Entity(1)));
        assert!(layout.top_card(StackType::Foundation(9)).is_none(), "範囲外は None");
    }
}
