//! 图数据结构
//!
//! 内存邻接表图，支持有向与无向两种模式。无向图中每条逻辑边以两条
//! 独立的有向边存储：插入 A→B 时同时生成 B→A。

use super::edge::Edge;
use super::index::AdjacencyIndex;
use super::vertex::Vertex;
use crate::config::GraphConfig;
use crate::error::{Error, Result};
use crate::types::{PropertyValue, VertexKey};
use indexmap::IndexMap;
use tracing::{debug, trace, warn};

/// 图
///
/// `V` 为顶点负载类型，`E` 为边负载类型。图只在无向插入生成反向边时
/// 复制边负载，其余负载从不复制。
#[derive(Debug, Clone)]
pub struct Graph<V = PropertyValue, E = PropertyValue> {
    /// 顶点表
    vertices: IndexMap<VertexKey, Vertex<V>>,
    /// 邻接表
    adjacency: AdjacencyIndex<E>,
    config: GraphConfig,
}

impl<V, E> Graph<V, E> {
    pub fn new(directed: bool) -> Self {
        Self::with_config(GraphConfig { directed })
    }

    pub fn directed() -> Self {
        Self::with_config(GraphConfig::directed())
    }

    pub fn undirected() -> Self {
        Self::with_config(GraphConfig::undirected())
    }

    pub fn with_config(config: GraphConfig) -> Self {
        Self {
            vertices: IndexMap::new(),
            adjacency: AdjacencyIndex::new(),
            config,
        }
    }

    // ==================== 顶点操作 ====================

    /// 添加顶点
    pub fn add_vertex(&mut self, vertex: Vertex<V>) -> Result<()> {
        let id = vertex.id().clone();
        if self.vertices.contains_key(&id) {
            warn!(vertex = %id, "拒绝重复顶点");
            return Err(Error::DuplicateVertex(id));
        }

        self.adjacency.register(id.clone());
        debug!(vertex = %id, "添加顶点");
        self.vertices.insert(id, vertex);

        Ok(())
    }

    /// 顶点是否存在
    pub fn has_vertex(&self, vertex_id: impl Into<VertexKey>) -> bool {
        self.vertices.contains_key(&vertex_id.into())
    }

    /// 获取顶点
    pub fn vertex(&self, vertex_id: impl Into<VertexKey>) -> Option<&Vertex<V>> {
        self.vertices.get(&vertex_id.into())
    }

    pub fn vertex_mut(&mut self, vertex_id: impl Into<VertexKey>) -> Option<&mut Vertex<V>> {
        self.vertices.get_mut(&vertex_id.into())
    }

    /// 按插入顺序遍历所有顶点
    pub fn vertices(&self) -> impl Iterator<Item = &Vertex<V>> {
        self.vertices.values()
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    // ==================== 边操作 ====================

    /// 添加边
    ///
    /// 两端顶点必须已在图中；无向图额外在目标顶点下存储一条反向边。
    pub fn add_edge(&mut self, edge: Edge<E>) -> Result<()>
    where
        E: Clone,
    {
        for endpoint in [edge.source(), edge.target()] {
            if !self.vertices.contains_key(endpoint) {
                warn!(vertex = %endpoint, "边的端点不存在");
                return Err(Error::VertexNotFound(endpoint.clone()));
            }
        }

        let reverse = if self.config.directed {
            None
        } else {
            Some(edge.reversed())
        };

        trace!(
            source = %edge.source(),
            target = %edge.target(),
            edge_type = ?edge.edge_type(),
            "添加边"
        );
        self.adjacency.push(edge).map_err(Self::unindexed)?;

        if let Some(reverse) = reverse {
            trace!(source = %reverse.source(), target = %reverse.target(), "添加反向边");
            self.adjacency.push(reverse).map_err(Self::unindexed)?;
        }

        Ok(())
    }

    /// 所有已存储的边，按顶点插入顺序
    pub fn edges(&self) -> impl Iterator<Item = &Edge<E>> {
        self.adjacency.edges()
    }

    /// 已存储的有向边数量（无向逻辑边计为两条）
    pub fn edge_count(&self) -> usize {
        self.adjacency.edge_count()
    }

    // ==================== 邻居查询 ====================

    /// 获取顶点的出边，按插入顺序
    pub fn neighbors(&self, vertex_id: impl Into<VertexKey>) -> Result<&[Edge<E>]> {
        let id = vertex_id.into();
        self.adjacency
            .get_outgoing(&id)
            .ok_or(Error::VertexNotFound(id))
    }

    /// 获取顶点出边的可变切片，只能修改边负载，不能增删边
    pub fn neighbors_mut(&mut self, vertex_id: impl Into<VertexKey>) -> Result<&mut [Edge<E>]> {
        let id = vertex_id.into();
        self.adjacency
            .get_outgoing_mut(&id)
            .ok_or(Error::VertexNotFound(id))
    }

    /// 获取顶点的出度
    pub fn degree(&self, vertex_id: impl Into<VertexKey>) -> Result<usize> {
        let id = vertex_id.into();
        self.adjacency
            .out_degree(&id)
            .ok_or(Error::VertexNotFound(id))
    }

    // ==================== 配置 ====================

    pub fn is_directed(&self) -> bool {
        self.config.directed
    }

    pub fn config(&self) -> &GraphConfig {
        &self.config
    }

    // 顶点表与邻接表的键始终一致，源顶点已校验
    fn unindexed(edge: Edge<E>) -> Error {
        Error::VertexNotFound(edge.source().clone())
    }
}

impl<V, E> Default for Graph<V, E> {
    fn default() -> Self {
        Self::undirected()
    }
}
