// src/entity.rs

use serde::{Serialize, Deserialize};
use std::sync::atomic::{AtomicUsize, Ordering};

/// カード1枚1枚を見分けるための ID だよ！
///
/// 中身はただの数字。カードが山札から場札、組札へと移動しても ID は変わらないから、
/// クライアントは「この ID のカードをあそこに動かして！」ってリクエストできるんだ。
/// JSON では素の数字としてシリアライズされるよ (`#[serde(transparent)]`)。
#[derive(
    PartialEq, Eq, PartialOrd, Ord, Hash, Clone, Copy, Debug, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Entity(pub usize);

/// エンティティ ID を発行する係だよ。
///
/// `AtomicUsize` のカウンターを増やしていくだけのシンプルな仕組み。
/// `const fn new` だから `static` にも置けて、プロセス全体で ID がかぶらないようにできる！
#[derive(Debug, Default)]
pub struct EntityManager {
    next_id: AtomicUsize,
}

impl EntityManager {
    pub const fn new() -> Self {
        Self { next_id: AtomicUsize::new(0) }
    }

    /// 新しい一意なエンティティ ID を作って返すよ。0, 1, 2... の連番！
    pub fn create_entity(&self) -> Entity {
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        Entity(id)
    }
}
