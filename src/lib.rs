// src/lib.rs

// クロンダイク (ソリティア) のルールエンジンだよ！🃏
// ゲームの中身 (盤面・ルール・待った) は wasm に依存しない普通の Rust で、
// JS から使うための窓口は app モジュールにまとめてある。

use wasm_bindgen::prelude::*;

// 自分で作ったモジュールたち！
pub mod entity;
pub mod components;
pub mod config;
pub mod error;
pub mod layout;
pub mod history;
pub mod logic;
pub mod systems;
pub mod protocol;
pub mod game;
pub mod app;


pub use crate::app::game_app::GameApp;
pub use crate::entity::Entity;
pub use crate::error::MoveError;
pub use crate::game::{ActionOutcome, SolitaireGame};
pub use crate::layout::Layout;
pub use crate::logic::rules::MoveTarget;
pub use crate::protocol::{ClientMessage, GameStateData, ServerMessage, Visibility};

// JavaScript の console.log を Rust から呼び出すための準備 (extern ブロック)。
#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = console, js_name = log)]
    fn console_log(s: &str);
}

/// log クレートのメッセージをブラウザのコンソールに流すロガー。
struct ConsoleLogger;

impl log::Log for ConsoleLogger {
    fn enabled(&self, metadata: &log::Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &log::Record) {
        if self.enabled(record.metadata()) {
            console_log(&format!("[{}] {}: {}", record.level(), record.target(), record.args()));
        }
    }

    fn flush(&self) {}
}

static LOGGER: ConsoleLogger = ConsoleLogger;

// main 関数の代わりに、Wasm がロードされた時に最初に実行される関数だよ。
#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    // 2回目以降の set_logger はエラーになるけど、最初のロガーがそのまま使われるので無視
    if log::set_logger(&LOGGER).is_ok() {
        log::set_max_level(log::LevelFilter::Info);
    }
    log::info!("klondike_engine: panic hook and console logger ready");
}
