//! 图配置

use serde::{Deserialize, Serialize};

/// 图配置（构造时固定）
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GraphConfig {
    /// 是否为有向图，默认无向
    pub directed: bool,
}

impl GraphConfig {
    pub fn directed() -> Self {
        Self { directed: true }
    }

    pub fn undirected() -> Self {
        Self { directed: false }
    }
}
