//! カード移動の全体的な妥当性チェックを行う。
//!
//! `plan_move` はリクエスト (カード ID と移動先) を受け取って、ルール上 OK なら
//! 実際に何をすればいいかを `MovePlan` で返す。盤面は一切いじらないよ。

use std::str::FromStr;

use log::debug;
use serde::{Serialize, Deserialize};

use crate::components::stack::StackType;
use crate::entity::Entity;
use crate::error::MoveError;
use crate::layout::Layout;

use super::common::is_face_up_run;
use super::foundation::can_move_to_foundation;
use super::stock_waste::is_single_card_source;
use super::tableau::can_move_to_tableau;

/// 移動先の種類。クライアントからは `"foundation"` / `"tableau"` で届く。
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum MoveTarget {
    Foundation,
    Tableau,
}

impl MoveTarget {
    pub fn stack_type(self, index: u8) -> StackType {
        match self {
            MoveTarget::Foundation => StackType::Foundation(index),
            MoveTarget::Tableau => StackType::Tableau(index),
        }
    }
}

impl FromStr for MoveTarget {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "foundation" => Ok(MoveTarget::Foundation),
            "tableau" => Ok(MoveTarget::Tableau),
            other => Err(format!("unknown target type: {}", other)),
        }
    }
}

/// 検証済みの移動内容。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MovePlan {
    /// 場札 `from` の `start` 番目から上を、場札 `to` へまとめて移す。
    TableauRun { from: u8, start: usize, to: u8 },
    /// 場札 `from` の一番上を組札 `to` へ。
    TableauToFoundation { from: u8, to: u8 },
    /// 捨て札か組札の一番上の1枚を `to` へ。
    SingleCard { from: StackType, to: StackType },
}

/// 指定されたカードを `target` の `target_index` 番へ動かせるか検証する。
pub fn plan_move(
    layout: &Layout,
    card_id: Entity,
    target: MoveTarget,
    target_index: u8,
) -> Result<MovePlan, MoveError> {
    let location = layout.find_card(card_id).ok_or(MoveError::UnknownCard(card_id))?;
    let source = layout
        .pile(location.stack_type)
        .ok_or(MoveError::UnknownCard(card_id))?;
    let card = source
        .get(location.position_in_stack)
        .ok_or(MoveError::UnknownCard(card_id))?;

    let destination = target.stack_type(target_index);
    if layout.pile(destination).is_none() {
        return Err(MoveError::InvalidMove("target index out of range"));
    }
    debug!("[Rules Validation] {:?} at {:?} -> {:?}", card_id, location, destination);

    match location.stack_type {
        StackType::Stock => Err(MoveError::InvalidMove("cards in the stock cannot be moved")),
        StackType::Tableau(from) => {
            if !is_face_up_run(source, location.position_in_stack) {
                return Err(MoveError::InvalidMove("run contains a face-down card"));
            }
            match target {
                MoveTarget::Tableau => {
                    if from == target_index {
                        return Err(MoveError::InvalidMove("run is already on that column"));
                    }
                    if !can_move_to_tableau(layout, card, target_index) {
                        return Err(MoveError::InvalidMove("card does not fit on that column"));
                    }
                    Ok(MovePlan::TableauRun { from, start: location.position_in_stack, to: target_index })
                }
                MoveTarget::Foundation => {
                    if location.position_in_stack + 1 != source.len() {
                        return Err(MoveError::InvalidMove("only the top tableau card can go to a foundation"));
                    }
                    // 場札からの A も空の組札には置けない (A で組札を始められるのは捨て札からだけ)
                    if !can_move_to_foundation(layout, card, target_index, false) {
                        return Err(MoveError::InvalidMove("card does not fit on that foundation"));
                    }
                    Ok(MovePlan::TableauToFoundation { from, to: target_index })
                }
            }
        }
        StackType::Waste | StackType::Foundation(_) => {
            if !card.is_face_up {
                return Err(MoveError::InvalidMove("card is face down"));
            }
            if !is_single_card_source(layout, location) {
                return Err(MoveError::InvalidMove("only the top card of the waste or a foundation can move"));
            }
            let fits = match target {
                MoveTarget::Foundation => can_move_to_foundation(
                    layout,
                    card,
                    target_index,
                    location.stack_type == StackType::Waste,
                ),
                MoveTarget::Tableau => can_move_to_tableau(layout, card, target_index),
            };
            if !fits {
                return Err(MoveError::InvalidMove("card does not fit on the target"));
            }
            Ok(MovePlan::SingleCard { from: location.stack_type, to: destination })
        }
    }
}
