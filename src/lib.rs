//! AdjGraph - 内存邻接表图
//!
//! 轻量的图数据结构：
//! - 任意标识的顶点（字符串、数字或有序对象）
//! - 带可选类型与负载的边
//! - 有向 / 无向两种模式，无向图中每条边以两条独立的有向边存储

pub mod config;
pub mod error;
pub mod graph;
pub mod types;

// 重导出常用类型
pub use config::GraphConfig;
pub use error::{Error, Result};
pub use graph::{AdjacencyIndex, Edge, Graph, Vertex};
pub use types::{FloatKey, PropertyValue, VertexKey};

/// 库版本
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
