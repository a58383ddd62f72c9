// src/components/stack.rs

use serde::{Serialize, Deserialize};

/// カードが存在する場所の種類を示す Enum だよ。
/// 山札にあるのか、場札の何列目にあるのか、などを区別する。
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum StackType {
    /// 山札 (Stock)。裏向きのカードが積まれてて、末尾から引く。
    Stock,
    /// 山札からめくったカードを置く場所 (Waste)。動かせるのは一番上だけ。
    Waste,
    /// 組札 (Foundation)。4つあって、番号 (0-3) で指定する。
    /// 番号とスートの対応は固定しないよ。最初に置いた A のスートでその列が決まる。
    Foundation(u8),
    /// 場札 (Tableau)。7つの列があるので、列番号 (0-6) を持つ。
    Tableau(u8),
}

/// カードがどこにあるかの情報。
/// `Layout::find_card` がこれを返すよ。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StackInfo {
    /// カードが属しているスタックの種類。
    pub stack_type: StackType,
    /// そのスタックの中で、カードが下から何番目に積まれているか (0 が一番下)。
    pub position_in_stack: usize,
}

impl StackInfo {
    pub fn new(stack_type: StackType, position_in_stack: usize) -> Self {
        Self { stack_type, position_in_stack }
    }
}
