//! セッションストアの設定だよ。JSON から読み込める。
//!
//! ```json
//! { "max_idle_ms": 3600000, "max_instances": 500, "visibility": "hide_face_down" }
//! ```
//! 書かなかった項目はデフォルト値になる。`null` を書くとその制限はなし。

use serde::{Serialize, Deserialize};

use crate::app::session_store::{EvictionPolicy, MaxIdle, MaxInstances};
use crate::protocol::Visibility;

/// デフォルトの放置時間の上限 (2時間)
pub const DEFAULT_MAX_IDLE_MS: u64 = 2 * 60 * 60 * 1000;
/// デフォルトの同時ゲーム数の上限
pub const DEFAULT_MAX_INSTANCES: usize = 10_000;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StoreConfig {
    /// これ以上さわられていないゲームは捨てる (ミリ秒)
    pub max_idle_ms: Option<u64>,
    /// これ以上ゲームが増えたら、古いものから捨てる
    pub max_instances: Option<usize>,
    /// 新しく作るゲームの表示方法
    pub visibility: Visibility,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            max_idle_ms: Some(DEFAULT_MAX_IDLE_MS),
            max_instances: Some(DEFAULT_MAX_INSTANCES),
            visibility: Visibility::Full,
        }
    }
}

impl StoreConfig {
    pub fn from_json(raw: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(raw)
    }

    /// 設定から追い出しポリシーを組み立てる。
    pub fn eviction_policies(&self) -> Vec<Box<dyn EvictionPolicy>> {
        let mut policies: Vec<Box<dyn EvictionPolicy>> = Vec::new();
        if let Some(max_idle_ms) = self.max_idle_ms {
            policies.push(Box::new(MaxIdle(max_idle_ms)));
        }
        if let Some(max_instances) = self.max_instances {
            policies.push(Box::new(MaxInstances(max_instances)));
        }
        policies
    }
}
