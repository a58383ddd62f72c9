// src/history.rs
//! 「待った」のための履歴。操作の直前に盤面をまるごとコピーして積んでおく。

use log::debug;

use crate::components::card::Card;
use crate::config::scoring::{FOUNDATION_COUNT, TABLEAU_COUNT};
use crate::error::MoveError;
use crate::layout::Layout;

/// どんな操作の前に取ったスナップショットか。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveKind {
    /// 山札から1枚めくった
    DrawCard,
    /// 捨て札を山札に戻した
    RecycleWaste,
    /// 場札の列 (1枚以上) を別の場札へ、または場札の一番上を組札へ
    TableauMove,
    /// 捨て札か組札の一番上のカードを動かした
    CardMove,
}

/// 操作前の4つのゾーンのコピー。
///
/// `Card` を clone して持つので、あとで盤面のカードが裏返ったりしても
/// ここに保存した中身は変わらない。
/// 得点と手数は保存しないよ (待ったしても得点は戻らない)。
#[derive(Debug, Clone)]
pub struct Checkpoint {
    pub kind: MoveKind,
    stock: Vec<Card>,
    waste: Vec<Card>,
    foundations: [Vec<Card>; FOUNDATION_COUNT],
    tableau: [Vec<Card>; TABLEAU_COUNT],
}

impl Checkpoint {
    pub fn capture(kind: MoveKind, layout: &Layout) -> Self {
        Self {
            kind,
            stock: layout.stock.clone(),
            waste: layout.waste.clone(),
            foundations: layout.foundations.clone(),
            tableau: layout.tableau.clone(),
        }
    }

    /// ゾーンだけを書き戻す。`score` と `move_count` はそのまま。
    fn restore_into(self, layout: &mut Layout) {
        layout.stock = self.stock;
        layout.waste = self.waste;
        layout.foundations = self.foundations;
        layout.tableau = self.tableau;
    }
}

/// チェックポイントのスタック。上限はなし。
#[derive(Debug, Clone, Default)]
pub struct History {
    entries: Vec<Checkpoint>,
}

impl History {
    pub fn new() -> Self {
        Self::default()
    }

    /// 操作の直前に呼んでね。
    pub fn record(&mut self, kind: MoveKind, layout: &Layout) {
        self.entries.push(Checkpoint::capture(kind, layout));
        debug!("History: recorded {:?} checkpoint (depth {})", kind, self.entries.len());
    }

    /// 一番新しいチェックポイントを取り出して盤面を巻き戻す。
    pub fn undo(&mut self, layout: &mut Layout) -> Result<MoveKind, MoveError> {
        let checkpoint = self.entries.pop().ok_or(MoveError::NoHistory)?;
        let kind = checkpoint.kind;
        checkpoint.restore_into(layout);
        debug!("History: undid {:?} (depth {})", kind, self.entries.len());
        Ok(kind)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn last_kind(&self) -> Option<MoveKind> {
        self.entries.last().map(|checkpoint| checkpoint.kind)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::card::{Rank, Suit};
    use crate::entity::Entity;

    fn sample_layout() -> Layout {
        let mut layout = Layout::new();
        layout.stock.push(Card::new(Entity(0), Suit::Heart, Rank::Two));
        layout.tableau[0].push(Card::new(Entity(1), Suit::Spade, Rank::King));
        layout
    }

    #[test]
    fn undo_on_empty_history_fails() {
        let mut history = History::new();
        let mut layout = sample_layout();
        let before = layout.clone();

        assert_eq!(history.undo(&mut layout), Err(MoveError::NoHistory));
        assert_eq!(layout, before);
    }

    #[test]
    fn snapshot_is_not_affected_by_later_mutation() {
        let mut history = History::new();
        let mut layout = sample_layout();
        history.record(MoveKind::DrawCard, &layout);

        // 盤面のカードを裏返したり動かしたりしても…
        layout.tableau[0][0].is_face_up = true;
        let card = layout.stock.pop().unwrap();
        layout.waste.push(card);

        assert_eq!(history.last_kind(), Some(MoveKind::DrawCard));
        assert_eq!(history.undo(&mut layout), Ok(MoveKind::DrawCard));
        // …保存した時点の中身に戻る
        assert_eq!(layout, sample_layout());
        assert!(history.is_empty());
    }

    #[test]
    fn undo_keeps_score_and_move_count() {
        let mut history = History::new();
        let mut layout = sample_layout();
        history.record(MoveKind::CardMove, &layout);
        layout.score = 10;
        layout.move_count = 1;

        history.undo(&mut layout).unwrap();
        assert_eq!(layout.score, 10);
        assert_eq!(layout.move_count, 1);
    }
}
