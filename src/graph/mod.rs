//! 图核心模块
//!
//! 定义顶点、边、邻接表和图的核心数据结构

mod edge;
mod graph;
mod index;
mod vertex;

pub use edge::Edge;
pub use graph::Graph;
pub use index::AdjacencyIndex;
pub use vertex::Vertex;
