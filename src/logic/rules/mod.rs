// src/logic/rules/mod.rs
//! ソリティアのルール関連モジュールをまとめるよ！
//! ここの関数はどれも盤面を読むだけで、変更はしない。

pub mod common;
pub mod foundation;
pub mod move_validation;
pub mod tableau;
pub mod stock_waste;
pub mod win_condition;


pub use common::*;
pub use foundation::*;
pub use move_validation::*;
pub use tableau::*;
pub use stock_waste::*;
pub use win_condition::*;
