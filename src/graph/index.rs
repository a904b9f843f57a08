//! 邻接表索引
//!
//! 顶点标识到出边列表的有序映射，列表保持插入顺序。

use crate::graph::edge::Edge;
use crate::types::VertexKey;
use indexmap::IndexMap;

/// 邻接表
#[derive(Debug, Clone)]
pub struct AdjacencyIndex<E> {
    /// 顶点标识到出边的映射
    outgoing: IndexMap<VertexKey, Vec<Edge<E>>>,
    /// 已存储的边数量
    edge_count: usize,
}

impl<E> AdjacencyIndex<E> {
    /// 创建新索引
    pub fn new() -> Self {
        Self {
            outgoing: IndexMap::new(),
            edge_count: 0,
        }
    }

    /// 为顶点登记空的出边列表，已存在时返回 false
    pub fn register(&mut self, vertex_id: VertexKey) -> bool {
        if self.outgoing.contains_key(&vertex_id) {
            return false;
        }
        self.outgoing.insert(vertex_id, Vec::new());
        true
    }

    pub fn contains(&self, vertex_id: &VertexKey) -> bool {
        self.outgoing.contains_key(vertex_id)
    }

    /// 将边追加到其源顶点的出边列表
    ///
    /// 源顶点未登记时原样退回该边。
    pub fn push(&mut self, edge: Edge<E>) -> Result<(), Edge<E>> {
        match self.outgoing.get_mut(edge.source()) {
            Some(edges) => {
                edges.push(edge);
                self.edge_count += 1;
                Ok(())
            }
            None => Err(edge),
        }
    }

    /// 获取顶点的出边
    pub fn get_outgoing(&self, vertex_id: &VertexKey) -> Option<&[Edge<E>]> {
        self.outgoing.get(vertex_id).map(Vec::as_slice)
    }

    pub fn get_outgoing_mut(&mut self, vertex_id: &VertexKey) -> Option<&mut [Edge<E>]> {
        self.outgoing.get_mut(vertex_id).map(Vec::as_mut_slice)
    }

    /// 获取顶点的出度
    pub fn out_degree(&self, vertex_id: &VertexKey) -> Option<usize> {
        self.outgoing.get(vertex_id).map(Vec::len)
    }

    /// 获取邻居（出边指向的顶点），按边的插入顺序
    pub fn neighbors(&self, vertex_id: &VertexKey) -> Vec<&VertexKey> {
        self.outgoing
            .get(vertex_id)
            .map(|edges| edges.iter().map(Edge::target).collect())
            .unwrap_or_default()
    }

    /// 按顶点登记顺序遍历所有边
    pub fn edges(&self) -> impl Iterator<Item = &Edge<E>> {
        self.outgoing.values().flatten()
    }

    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    pub fn vertex_count(&self) -> usize {
        self.outgoing.len()
    }
}

impl<E> Default for AdjacencyIndex<E> {
    fn default() -> Self {
        Self::new()
    }
}
