// src/systems/mod.rs
//! 盤面を書き換える処理はここに集める。ルールの判定は `logic::rules` に任せるよ。

pub mod deal_system;
pub mod move_card_system;
pub mod stock_system;

pub use deal_system::DealInitialCardsSystem;
pub use move_card_system::MoveCardSystem;
