//! 边定义
//!
//! 边通过顶点标识引用两端顶点，不持有顶点本身。

use crate::error::{Error, Result};
use crate::graph::vertex::Vertex;
use crate::types::{PropertyValue, VertexKey};
use serde::{Deserialize, Serialize};

/// 边
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Edge<E = PropertyValue> {
    /// 源顶点标识
    source: VertexKey,
    /// 目标顶点标识
    target: VertexKey,
    /// 边类型
    edge_type: Option<String>,
    /// 负载
    data: Option<E>,
}

impl<E> Edge<E> {
    /// 创建新边
    pub fn new<V>(source: &Vertex<V>, target: &Vertex<V>) -> Self {
        Self {
            source: source.id().clone(),
            target: target.id().clone(),
            edge_type: None,
            data: None,
        }
    }

    /// 设置边类型
    pub fn with_type(mut self, edge_type: impl Into<String>) -> Self {
        self.edge_type = Some(edge_type.into());
        self
    }

    /// 以动态值设置边类型：`null` 表示无类型，其他非字符串值被拒绝
    pub fn try_with_type(mut self, edge_type: serde_json::Value) -> Result<Self> {
        self.edge_type = match edge_type {
            serde_json::Value::Null => None,
            serde_json::Value::String(s) => Some(s),
            other => {
                return Err(Error::invalid_argument(format!(
                    "边类型必须是字符串, 实际为 {}",
                    other
                )))
            }
        };
        Ok(self)
    }

    pub fn with_data(mut self, data: E) -> Self {
        self.data = Some(data);
        self
    }

    /// 获取源顶点标识
    ///
    /// 边只保存标识，顶点本身经 `Graph::vertex(edge.source())` 取得。
    pub fn source(&self) -> &VertexKey {
        &self.source
    }

    /// 获取目标顶点标识，顶点本身经 `Graph::vertex(edge.target())` 取得
    pub fn target(&self) -> &VertexKey {
        &self.target
    }

    /// 获取边类型
    pub fn edge_type(&self) -> Option<&str> {
        self.edge_type.as_deref()
    }

    pub fn data(&self) -> Option<&E> {
        self.data.as_ref()
    }

    pub fn data_mut(&mut self) -> Option<&mut E> {
        self.data.as_mut()
    }

    /// 替换负载，返回旧值
    pub fn set_data(&mut self, data: E) -> Option<E> {
        self.data.replace(data)
    }

    pub fn is_self_loop(&self) -> bool {
        self.source == self.target
    }
}

impl<E: Clone> Edge<E> {
    /// 构造反向边（独立的新对象，负载为副本）
    pub fn reversed(&self) -> Self {
        Self {
            source: self.target.clone(),
            target: self.source.clone(),
            edge_type: self.edge_type.clone(),
            data: self.data.clone(),
        }
    }
}
