// src/app/game_app.rs

// JavaScript から使うためのゲームの窓口だよ！🎮
// 中身は SolitaireGame 1つ。返り値はぜんぶ JSON 文字列。

use js_sys::Error;
use log::{error, info};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsValue;

use crate::app::request_handler;
use crate::entity::Entity;
use crate::game::{ActionOutcome, SolitaireGame};
use crate::logic::rules::MoveTarget;
use crate::protocol::{GameStateData, ServerMessage, Visibility};

#[wasm_bindgen]
pub struct GameApp {
    game: SolitaireGame,
}

#[wasm_bindgen]
impl GameApp {
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        info!("GameApp: initializing...");
        Self { game: SolitaireGame::new_game() }
    }

    /// 新しいゲームを配り直して、その状態を返す。
    pub fn new_game(&mut self) -> String {
        let visibility = self.game.visibility();
        self.game = SolitaireGame::new_game().with_visibility(visibility);
        state_json(&self.game.state())
    }

    /// 今の状態 (GameStateData) を JSON で返す。
    pub fn game_state(&self) -> String {
        state_json(&self.game.state())
    }

    pub fn draw_card(&mut self) -> String {
        outcome_json(self.game.draw())
    }

    /// カードを動かす。`target_type` は "foundation" か "tableau"。
    /// それ以外が来たら JS 側に Error を投げるよ。
    pub fn move_card(&mut self, card_id: usize, target_type: &str, target_index: u8) -> Result<String, JsValue> {
        let target: MoveTarget = target_type.parse().map_err(|e: String| {
            error!("GameApp: {}", e);
            JsValue::from(Error::new(&e))
        })?;
        Ok(outcome_json(self.game.move_card(Entity(card_id), target, target_index)))
    }

    pub fn undo(&mut self) -> String {
        outcome_json(self.game.undo())
    }

    /// ClientMessage の JSON をそのまま処理する。返事は ServerMessage の JSON。
    pub fn handle_message(&mut self, message_json: &str) -> String {
        request_handler::handle_json(&mut self.game, message_json)
    }

    /// true にすると裏向きのカードの中身を返さなくなる。
    pub fn set_hide_face_down(&mut self, hide: bool) {
        let visibility = if hide { Visibility::HideFaceDown } else { Visibility::Full };
        self.game.set_visibility(visibility);
    }

    pub fn is_won(&self) -> bool {
        self.game.is_won()
    }
}

impl Default for GameApp {
    fn default() -> Self {
        Self::new()
    }
}

fn state_json(state: &GameStateData) -> String {
    match serde_json::to_string(state) {
        Ok(json) => json,
        Err(e) => {
            error!("GameApp: failed to serialize game state: {}", e);
            request_handler::to_json(&ServerMessage::Error { message: e.to_string() })
        }
    }
}

fn outcome_json(outcome: ActionOutcome) -> String {
    request_handler::to_json(&ServerMessage::ActionResult {
        success: outcome.success,
        game_state: outcome.game_state,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(json: &str) -> serde_json::Value {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn new_app_serves_a_fresh_deal() {
        let app = GameApp::new();
        let state = parse(&app.game_state());
        assert_eq!(state["deck"].as_array().unwrap().len(), 24);
        assert_eq!(state["tableau"][6].as_array().unwrap().len(), 7);
        assert_eq!(state["moves"], 0);
    }

    #[test]
    fn draw_and_undo_return_action_results() {
        let mut app = GameApp::default();
        let drawn = parse(&app.draw_card());
        assert_eq!(drawn["ActionResult"]["success"], true);
        assert_eq!(drawn["ActionResult"]["game_state"]["waste"][0]["face_up"], true);

        let undone = parse(&app.undo());
        assert_eq!(undone["ActionResult"]["success"], true);
        assert!(undone["ActionResult"]["game_state"]["waste"].as_array().unwrap().is_empty());

        let nothing_left = parse(&app.undo());
        assert_eq!(nothing_left["ActionResult"]["success"], false);
    }

    #[test]
    fn move_card_with_known_target_reports_failure_as_json() {
        let mut app = GameApp::new();
        // 山札のカードはどこにも動かせない
        let stock_card = app.game.layout().stock[0].id;
        let result = app.move_card(stock_card.0, "tableau", 0).unwrap();
        assert_eq!(parse(&result)["ActionResult"]["success"], false);
    }

    #[test]
    fn hide_face_down_applies_to_later_states() {
        let mut app = GameApp::new();
        app.set_hide_face_down(true);
        let state = parse(&app.new_game());
        assert!(state["deck"][0].get("rank").is_none());
        assert!(state["tableau"][0][0].get("rank").is_some());
        assert!(!app.is_won());
    }
}
