// src/config/mod.rs
//! 設定と定数。

pub mod scoring;
pub mod store;
