// src/protocol.rs

// クライアントとやり取りするメッセージの形式（プロトコル）を定義するよ！💌
// 盤面の JSON 表現 (GameStateData) もここ。
// エンジン本体は通信方法を知らない。外側の層がこの型を serde_json で文字列にして返すんだ。
use serde::{Serialize, Deserialize};

use crate::components::card::{Card, Rank, Suit};
use crate::entity::Entity;
use crate::layout::Layout;
use crate::logic::rules::{CardColor, MoveTarget};

// --- クライアントからのメッセージ ---

/// クライアントが送ってくるリクエストの種類だよ。
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub enum ClientMessage {
    /// 新しいゲームを始める
    NewGame,
    /// 今のゲーム状態をちょうだい
    RequestGameState,
    /// 山札をクリック
    DrawCard,
    /// カードを動かす
    MakeMove(MoveRequest),
    /// 1手戻す
    Undo,
}

/// カード移動リクエストの中身。
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct MoveRequest {
    /// 動かしたいカード (列を動かすときは、その列の一番下のカード)
    pub card_id: Entity,
    /// `"foundation"` か `"tableau"`
    pub target_type: MoveTarget,
    pub target_index: u8,
}

// --- サーバーからのメッセージ ---

/// リクエストへの返事だよ。
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub enum ServerMessage {
    /// 新規ゲームや状態取得の結果
    GameState { game_state: GameStateData },
    /// 山札・移動・待ったの結果。ルール違反なら success が false で、状態は変わってない。
    ActionResult { success: bool, game_state: GameStateData },
    /// リクエストそのものが壊れてたとき (JSON が読めない、など)
    Error { message: String },
}

// --- 盤面の表現 ---

/// 裏向きのカードの中身をクライアントに見せるかどうか。
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum Visibility {
    /// 全部見せる (裏向きでもスートとランクが入る)
    #[default]
    Full,
    /// 裏向きのカードは id と face_up だけ
    HideFaceDown,
}

/// カード1枚の表現。
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct CardData {
    pub id: Entity,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub suit: Option<Suit>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rank: Option<Rank>,
    pub face_up: bool,
    /// 表示用のマーク (♠ ♥ ♦ ♣)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub symbol: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<CardColor>,
}

impl CardData {
    pub fn from_card(card: &Card, visibility: Visibility) -> Self {
        let hidden = visibility == Visibility::HideFaceDown && !card.is_face_up;
        if hidden {
            return Self { id: card.id, suit: None, rank: None, face_up: false, symbol: None, color: None };
        }
        Self {
            id: card.id,
            suit: Some(card.suit),
            rank: Some(card.rank),
            face_up: card.is_face_up,
            symbol: Some(card.suit.symbol().to_string()),
            color: Some(card.color()),
        }
    }
}

/// ゲームの状態全体を表すデータ構造だよ。
/// `deck` は山札 (stock) のこと。
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct GameStateData {
    pub deck: Vec<CardData>,
    pub waste: Vec<CardData>,
    pub foundations: Vec<Vec<CardData>>,
    pub tableau: Vec<Vec<CardData>>,
    pub score: i32,
    pub moves: u32,
    pub is_won: bool,
}

impl GameStateData {
    pub fn from_layout(layout: &Layout, visibility: Visibility) -> Self {
        let pile = |cards: &[Card]| -> Vec<CardData> {
            cards.iter().map(|card| CardData::from_card(card, visibility)).collect()
        };
        Self {
            deck: pile(&layout.stock),
            waste: pile(&layout.waste),
            foundations: layout.foundations.iter().map(|f| pile(f)).collect(),
            tableau: layout.tableau.iter().map(|c| pile(c)).collect(),
            score: layout.score,
            moves: layout.move_count,
            is_won: layout.is_won(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample_layout() -> Layout {
        let mut layout = Layout::new();
        layout.stock.push(Card::new(Entity(0), Suit::Club, Rank::Ten));
        let mut ace = Card::new(Entity(1), Suit::Heart, Rank::Ace);
        ace.is_face_up = true;
        layout.waste.push(ace);
        layout.score = 15;
        layout.move_count = 3;
        layout
    }

    #[test]
    fn full_visibility_matches_wire_format() {
        let data = GameStateData::from_layout(&sample_layout(), Visibility::Full);
        let value = serde_json::to_value(&data).unwrap();

        assert_eq!(
            value["waste"][0],
            json!({"id": 1, "suit": "hearts", "rank": "A", "face_up": true, "symbol": "♥", "color": "red"})
        );
        assert_eq!(
            value["deck"][0],
            json!({"id": 0, "suit": "clubs", "rank": "10", "face_up": false, "symbol": "♣", "color": "black"})
        );
        assert_eq!(value["foundations"].as_array().unwrap().len(), 4);
        assert_eq!(value["tableau"].as_array().unwrap().len(), 7);
        assert_eq!(value["score"], 15);
        assert_eq!(value["moves"], 3);
        assert_eq!(value["is_won"], false);
    }

    #[test]
    fn hide_face_down_redacts_identity() {
        let data = GameStateData::from_layout(&sample_layout(), Visibility::HideFaceDown);
        let value = serde_json::to_value(&data).unwrap();

        assert_eq!(value["deck"][0], json!({"id": 0, "face_up": false}));
        assert_eq!(value["waste"][0]["rank"], "A", "表向きのカードはそのまま");
    }

    #[test]
    fn client_message_parses_move_request() {
        let raw = r#"{"MakeMove":{"card_id":12,"target_type":"foundation","target_index":2}}"#;
        let message: ClientMessage = serde_json::from_str(raw).unwrap();
        assert_eq!(
            message,
            ClientMessage::MakeMove(MoveRequest {
                card_id: Entity(12),
                target_type: MoveTarget::Foundation,
                target_index: 2,
            })
        );

        let draw: ClientMessage = serde_json::from_str(r#""DrawCard""#).unwrap();
        assert_eq!(draw, ClientMessage::DrawCard);
    }
}
