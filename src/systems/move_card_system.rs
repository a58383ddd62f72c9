// src/systems/move_card_system.rs

use log::{debug, info};

use crate::components::stack::StackType;
use crate::config::scoring::{FOUNDATION_MOVE_SCORE, REVEAL_BONUS, TABLEAU_MOVE_SCORE};
use crate::entity::Entity;
use crate::error::MoveError;
use crate::history::{History, MoveKind};
use crate::layout::Layout;
use crate::logic::rules::{plan_move, MovePlan, MoveTarget};

/// カード移動のロジックを実行するシステムだよ！
///
/// 「どのカードをどこに動かすか」を受け取って、ルール上可能かチェックし、
/// 可能なら履歴にチェックポイントを積んでから盤面を更新する。
/// ダメなら盤面も履歴も一切変えずにエラーを返すよ。
#[derive(Default, Debug, Clone, Copy)]
pub struct MoveCardSystem;

impl MoveCardSystem {
    pub fn new() -> Self {
        Self
    }

    /// カード移動リクエストを処理する本体。
    pub fn execute(
        &self,
        layout: &mut Layout,
        history: &mut History,
        card_id: Entity,
        target: MoveTarget,
        target_index: u8,
    ) -> Result<MovePlan, MoveError> {
        let plan = plan_move(layout, card_id, target, target_index)?;
        debug!("MoveCardSystem: applying {:?}", plan);
        self.apply_move(layout, history, plan)?;
        info!(
            "MoveCardSystem: moved {:?} -> {:?}({}) (score {}, moves {})",
            card_id, target, target_index, layout.score, layout.move_count
        );
        Ok(plan)
    }

    /// 検証済みの `MovePlan` を盤面に反映する。
    fn apply_move(&self, layout: &mut Layout, history: &mut History, plan: MovePlan) -> Result<(), MoveError> {
        match plan {
            MovePlan::TableauRun { from, start, to } => {
                let (from, to) = (from as usize, to as usize);
                if layout.tableau.get(from).map_or(true, |column| start >= column.len()) || to >= layout.tableau.len() {
                    return Err(MoveError::InvalidMove("stale move plan"));
                }
                history.record(MoveKind::TableauMove, layout); // 動かす前の盤面を保存！
                let run = layout.tableau[from].split_off(start); // start 番目から上をごっそり切り出す
                debug!("  moving run of {} card(s) from Tableau({}) to Tableau({})", run.len(), from, to);
                layout.tableau[to].extend(run); // 順番はそのまま
                layout.score += TABLEAU_MOVE_SCORE; // +5点
                self.reveal_tableau_card(layout, from);
            }
            MovePlan::TableauToFoundation { from, to } => {
                let (from, to) = (from as usize, to as usize);
                if layout.tableau.get(from).map_or(true, |column| column.is_empty()) || to >= layout.foundations.len() {
                    return Err(MoveError::InvalidMove("stale move plan"));
                }
                history.record(MoveKind::TableauMove, layout);
                if let Some(card) = layout.tableau[from].pop() {
                    layout.foundations[to].push(card);
                }
                layout.score += FOUNDATION_MOVE_SCORE; // +10点
                self.reveal_tableau_card(layout, from);
            }
            MovePlan::SingleCard { from, to } => {
                if layout.pile(from).map_or(true, |pile| pile.is_empty()) || layout.pile(to).is_none() {
                    return Err(MoveError::InvalidMove("stale move plan"));
                }
                history.record(MoveKind::CardMove, layout);
                let card = layout.pile_mut(from).and_then(|pile| pile.pop());
                if let (Some(card), Some(destination)) = (card, layout.pile_mut(to)) {
                    destination.push(card);
                }
                layout.score += match to {
                    StackType::Foundation(_) => FOUNDATION_MOVE_SCORE,
                    _ => TABLEAU_MOVE_SCORE,
                };
            }
        }
        layout.move_count += 1; // 成功したときだけ手数を増やす
        Ok(())
    }

    /// 場札の列の一番上が裏向きなら表にして、ボーナスを加算する。
    fn reveal_tableau_card(&self, layout: &mut Layout, column_index: usize) {
        let Some(top) = layout.tableau.get_mut(column_index).and_then(|column| column.last_mut()) else {
            return;
        };
        if !top.is_face_up {
            top.is_face_up = true; // 裏向きだったらめくる！
            debug!("  revealed {:?} on Tableau({})", top.id, column_index);
            layout.score += REVEAL_BONUS;
        }
    }
}
