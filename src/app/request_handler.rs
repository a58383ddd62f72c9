// src/app/request_handler.rs

//! ClientMessage を受け取って、ゲームを動かして ServerMessage を返す。

use log::{debug, error, warn};

use crate::game::{ActionOutcome, SolitaireGame};
use crate::protocol::{ClientMessage, MoveRequest, ServerMessage};

/// メッセージ1つを処理する。
/// ルール違反は `ActionResult { success: false }` で返す (エラーにはしない)。
pub fn handle_message(game: &mut SolitaireGame, message: ClientMessage) -> ServerMessage {
    debug!("request_handler: {:?}", message);
    match message {
        ClientMessage::NewGame => {
            let visibility = game.visibility();
            *game = SolitaireGame::new_game().with_visibility(visibility);
            ServerMessage::GameState { game_state: game.state() }
        }
        ClientMessage::RequestGameState => ServerMessage::GameState { game_state: game.state() },
        ClientMessage::DrawCard => action_result(game.draw()),
        ClientMessage::MakeMove(MoveRequest { card_id, target_type, target_index }) => {
            action_result(game.move_card(card_id, target_type, target_index))
        }
        ClientMessage::Undo => action_result(game.undo()),
    }
}

fn action_result(outcome: ActionOutcome) -> ServerMessage {
    ServerMessage::ActionResult { success: outcome.success, game_state: outcome.game_state }
}

/// JSON 文字列で受け取って JSON 文字列で返す版。
/// 読めないリクエストには `ServerMessage::Error` を返すよ。
pub fn handle_json(game: &mut SolitaireGame, raw: &str) -> String {
    let response = match serde_json::from_str::<ClientMessage>(raw) {
        Ok(message) => handle_message(game, message),
        Err(e) => {
            warn!("request_handler: malformed request: {}", e);
            ServerMessage::Error { message: format!("malformed request: {}", e) }
        }
    };
    to_json(&response)
}

/// ServerMessage を JSON にする。失敗したら Error メッセージの JSON を返す。
pub fn to_json(message: &ServerMessage) -> String {
    match serde_json::to_string(message) {
        Ok(json) => json,
        Err(e) => {
            error!("request_handler: failed to serialize response: {}", e);
            r#"{"Error":{"message":"failed to serialize response"}}"#.to_string()
        }
    }
}
