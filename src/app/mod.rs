// src/app/mod.rs
//! ゲームの外側の層だよ。JS 向けの窓口と、メッセージ処理と、複数ゲームの管理。

pub mod game_app;
pub mod request_handler;
pub mod session_store;
