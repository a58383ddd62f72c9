// src/game.rs

use log::{debug, info};
use rand::Rng;

use crate::components::card::Card;
use crate::entity::Entity;
use crate::error::MoveError;
use crate::history::{History, MoveKind};
use crate::layout::Layout;
use crate::logic::deck::{create_standard_deck, shuffle_deck, shuffle_deck_with, CARD_IDS};
use crate::logic::rules::{MovePlan, MoveTarget};
use crate::protocol::{GameStateData, Visibility};
use crate::systems::{stock_system, DealInitialCardsSystem, MoveCardSystem};

/// 操作の結果。成功したかどうかと、操作後 (失敗なら変わってない) の盤面。
#[derive(Debug, Clone, PartialEq)]
pub struct ActionOutcome {
    pub success: bool,
    pub game_state: GameStateData,
}

/// ゲーム1つぶん。盤面 (`Layout`) と待った用の履歴 (`History`) を持つよ。
///
/// セッションとか誰のゲームかとかは知らない。それは外側 (`app`) の仕事！
#[derive(Debug, Clone)]
pub struct SolitaireGame {
    layout: Layout,
    history: History,
    visibility: Visibility,
    move_system: MoveCardSystem,
}

impl SolitaireGame {
    /// シャッフルして配った新しいゲーム。
    pub fn new_game() -> Self {
        let mut deck = create_standard_deck(&CARD_IDS);
        shuffle_deck(&mut deck);
        Self::from_deck(deck)
    }

    /// 乱数生成器を指定して新しいゲームを作る。
    pub fn new_game_with_rng<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let mut deck = create_standard_deck(&CARD_IDS);
        shuffle_deck_with(&mut deck, rng);
        Self::from_deck(deck)
    }

    fn from_deck(deck: Vec<Card>) -> Self {
        let layout = DealInitialCardsSystem.execute(deck);
        info!("SolitaireGame: new game dealt");
        Self::from_layout(layout)
    }

    /// 好きな盤面から始める (履歴は空)。
    pub fn from_layout(layout: Layout) -> Self {
        Self {
            layout,
            history: History::new(),
            visibility: Visibility::default(),
            move_system: MoveCardSystem::new(),
        }
    }

    pub fn with_visibility(mut self, visibility: Visibility) -> Self {
        self.visibility = visibility;
        self
    }

    pub fn visibility(&self) -> Visibility {
        self.visibility
    }

    pub fn set_visibility(&mut self, visibility: Visibility) {
        self.visibility = visibility;
    }

    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    pub fn is_won(&self) -> bool {
        self.layout.is_won()
    }

    /// 今の盤面を表現に変換する。
    pub fn state(&self) -> GameStateData {
        GameStateData::from_layout(&self.layout, self.visibility)
    }

    pub fn try_draw(&mut self) -> Result<MoveKind, MoveError> {
        stock_system::draw(&mut self.layout, &mut self.history)
    }

    pub fn try_move_card(
        &mut self,
        card_id: Entity,
        target: MoveTarget,
        target_index: u8,
    ) -> Result<MovePlan, MoveError> {
        let plan = self
            .move_system
            .execute(&mut self.layout, &mut self.history, card_id, target, target_index)?;
        if self.layout.is_won() {
            info!("SolitaireGame: all foundations complete!");
        }
        Ok(plan)
    }

    /// 1手戻す。得点と手数は戻らないよ。
    pub fn try_undo(&mut self) -> Result<MoveKind, MoveError> {
        self.history.undo(&mut self.layout)
    }

    pub fn draw(&mut self) -> ActionOutcome {
        let result = self.try_draw();
        self.outcome("draw", result)
    }

    pub fn move_card(&mut self, card_id: Entity, target: MoveTarget, target_index: u8) -> ActionOutcome {
        let result = self.try_move_card(card_id, target, target_index);
        self.outcome("move", result)
    }

    pub fn undo(&mut self) -> ActionOutcome {
        let result = self.try_undo();
        self.outcome("undo", result)
    }

    fn outcome<T>(&self, action: &str, result: Result<T, MoveError>) -> ActionOutcome {
        if let Err(e) = &result {
            debug!("SolitaireGame: {} rejected: {}", action, e);
        }
        ActionOutcome { success: result.is_ok(), game_state: self.state() }
    }
}

impl Default for SolitaireGame {
    fn default() -> Self {
        Self::new_game()
    }
}
