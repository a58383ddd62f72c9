// src/logic/deck.rs

use itertools::iproduct;
use rand::{seq::SliceRandom, thread_rng, Rng};

use crate::components::card::{Card, ALL_RANKS, ALL_SUITS};
use crate::config::scoring::DECK_SIZE;
use crate::entity::EntityManager;

/// プロセス全体で共有するカード ID の発行係。
/// ゲームをまたいでも ID がかぶらないようにするためだよ。
pub static CARD_IDS: EntityManager = EntityManager::new();

/// 標準的な52枚のカードデッキを生成する関数だよ！🃏
///
/// スートとランクの全組み合わせを作って、1枚ずつ `ids` から新しい ID を割り当てる。
/// 生成された時点では、すべてのカードは裏向き (`is_face_up: false`)。
pub fn create_standard_deck(ids: &EntityManager) -> Vec<Card> {
    let mut deck = Vec::with_capacity(DECK_SIZE);
    for (&suit, &rank) in iproduct!(ALL_SUITS.iter(), ALL_RANKS.iter()) {
        deck.push(Card::new(ids.create_entity(), suit, rank));
    }
    deck
}

/// カードデッキをシャッフルする関数だよ。`thread_rng` を使う。
pub fn shuffle_deck(deck: &mut [Card]) {
    let mut rng = thread_rng();
    shuffle_deck_with(deck, &mut rng);
}

/// 乱数生成器を指定してシャッフルする。テストでシード固定したいとき用。
pub fn shuffle_deck_with<R: Rng + ?Sized>(deck: &mut [Card], rng: &mut R) {
    deck.shuffle(rng);
}
