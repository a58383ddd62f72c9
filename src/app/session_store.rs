// src/app/session_store.rs

//! 複数のゲームをトークンで管理するストアだよ。🗃️
//!
//! wasm には `Instant` がないから、時刻 (ミリ秒) はいつも呼び出し側が渡す。
//! 放っておかれたゲームは `EvictionPolicy` の組み合わせで追い出す。

use std::collections::HashMap;
use std::fmt;
use std::sync::{Arc, Mutex, PoisonError};

use log::{info, warn};
use rand::Rng;
use serde::{Serialize, Deserialize};

use crate::app::request_handler;
use crate::config::store::StoreConfig;
use crate::game::SolitaireGame;
use crate::protocol::Visibility;

/// ゲームを指すトークン。ランダムな 32 桁の 16 進数。
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SessionToken(String);

impl SessionToken {
    fn generate() -> Self {
        let raw: u128 = rand::thread_rng().gen();
        SessionToken(format!("{:032x}", raw))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<String> for SessionToken {
    fn from(raw: String) -> Self {
        SessionToken(raw)
    }
}

impl fmt::Display for SessionToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// ポリシーに見せる、セッション1つぶんの情報。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionStamp {
    pub token: SessionToken,
    pub last_access_ms: u64,
    /// 作られた順番 (同じ時刻のときの並べ替え用)
    pub sequence: u64,
}

/// どのセッションを追い出すか決めるルール。
pub trait EvictionPolicy: Send + Sync {
    fn select_victims(&self, sessions: &[SessionStamp], now_ms: u64) -> Vec<SessionToken>;
}

/// 指定ミリ秒より長くさわられていないものを追い出す。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MaxIdle(pub u64);

impl EvictionPolicy for MaxIdle {
    fn select_victims(&self, sessions: &[SessionStamp], now_ms: u64) -> Vec<SessionToken> {
        sessions
            .iter()
            .filter(|stamp| now_ms.saturating_sub(stamp.last_access_ms) > self.0)
            .map(|stamp| stamp.token.clone())
            .collect()
    }
}

/// 数が上限を超えたら、一番長くさわられていないものから追い出す。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MaxInstances(pub usize);

impl EvictionPolicy for MaxInstances {
    fn select_victims(&self, sessions: &[SessionStamp], _now_ms: u64) -> Vec<SessionToken> {
        if sessions.len() <= self.0 {
            return Vec::new();
        }
        let mut oldest_first: Vec<&SessionStamp> = sessions.iter().collect();
        oldest_first.sort_by_key(|stamp| (stamp.last_access_ms, stamp.sequence));
        oldest_first
            .into_iter()
            .take(sessions.len() - self.0)
            .map(|stamp| stamp.token.clone())
            .collect()
    }
}

/// 何も追い出さない。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct NoEviction;

impl EvictionPolicy for NoEviction {
    fn select_victims(&self, _sessions: &[SessionStamp], _now_ms: u64) -> Vec<SessionToken> {
        Vec::new()
    }
}

struct SessionEntry {
    game: Arc<Mutex<SolitaireGame>>,
    last_access_ms: u64,
    sequence: u64,
}

pub struct GameStore {
    sessions: HashMap<SessionToken, SessionEntry>,
    policies: Vec<Box<dyn EvictionPolicy>>,
    visibility: Visibility,
    next_sequence: u64,
}

impl GameStore {
    /// ポリシーは前から順番に適用されるよ。
    pub fn new(policies: Vec<Box<dyn EvictionPolicy>>) -> Self {
        Self {
            sessions: HashMap::new(),
            policies,
            visibility: Visibility::default(),
            next_sequence: 0,
        }
    }

    pub fn from_config(config: &StoreConfig) -> Self {
        let mut store = Self::new(config.eviction_policies());
        store.visibility = config.visibility;
        store
    }

    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }

    /// 新しいゲームを作って登録する。作ったものは追い出されない。
    pub fn create(&mut self, now_ms: u64) -> (SessionToken, Arc<Mutex<SolitaireGame>>) {
        let mut token = SessionToken::generate();
        while self.sessions.contains_key(&token) {
            token = SessionToken::generate();
        }
        let game = Arc::new(Mutex::new(SolitaireGame::new_game().with_visibility(self.visibility)));
        self.sessions.insert(
            token.clone(),
            SessionEntry { game: Arc::clone(&game), last_access_ms: now_ms, sequence: self.next_sequence },
        );
        self.next_sequence += 1; // 次のセッション用の通し番号
        info!("GameStore: created session {} ({} active)", token, self.sessions.len());
        self.evict(now_ms);
        (token, game)
    }

    /// トークンのゲームを探す。見つかったら最終アクセス時刻を更新するよ。
    pub fn get(&mut self, token: &SessionToken, now_ms: u64) -> Option<Arc<Mutex<SolitaireGame>>> {
        let entry = self.sessions.get_mut(token)?;
        entry.last_access_ms = now_ms; // さわったので時刻を更新
        Some(Arc::clone(&entry.game))
    }

    /// トークンがないか、知らないトークンなら新しく作る。
    pub fn get_or_create(
        &mut self,
        token: Option<&SessionToken>,
        now_ms: u64,
    ) -> (SessionToken, Arc<Mutex<SolitaireGame>>) {
        if let Some(token) = token {
            if let Some(game) = self.get(token, now_ms) {
                return (token.clone(), game);
            }
            warn!("GameStore: unknown session {}, creating a new one", token);
        }
        self.create(now_ms)
    }

    pub fn remove(&mut self, token: &SessionToken) -> bool {
        self.sessions.remove(token).is_some()
    }

    /// ポリシーに従って追い出す。追い出した数を返す。
    pub fn evict(&mut self, now_ms: u64) -> usize {
        let mut evicted = 0;
        for policy in &self.policies {
            let stamps: Vec<SessionStamp> = self
                .sessions
                .iter()
                .map(|(token, entry)| SessionStamp {
                    token: token.clone(),
                    last_access_ms: entry.last_access_ms,
                    sequence: entry.sequence,
                })
                .collect();
            for victim in policy.select_victims(&stamps, now_ms) {
                if self.sessions.remove(&victim).is_some() {
                    evicted += 1;
                }
            }
        }
        if evicted > 0 {
            info!("GameStore: evicted {} session(s), {} remain", evicted, self.sessions.len());
        }
        evicted
    }

    /// JSON のリクエストをセッションのゲームで処理して、トークンと JSON の返事を返す。
    pub fn handle_json(
        &mut self,
        token: Option<&SessionToken>,
        raw: &str,
        now_ms: u64,
    ) -> (SessionToken, String) {
        let (token, game) = self.get_or_create(token, now_ms);
        let mut game = game.lock().unwrap_or_else(|poisoned: PoisonError<_>| {
            warn!("GameStore: session {} lock was poisoned, recovering", token);
            poisoned.into_inner()
        });
        let response = request_handler::handle_json(&mut *game, raw);
        (token, response)
    }
}

impl Default for GameStore {
    fn default() -> Self {
        Self::from_config(&StoreConfig::default())
    }
}
