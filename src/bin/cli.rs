//! AdjGraph CLI 工具
//!
//! 由命令行给出的边构建一张图，并打印每个顶点的邻接表

use adjgraph::{Edge, Graph, GraphConfig, Vertex};
use anyhow::{bail, Context};
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "adjgraph-cli")]
#[command(about = "AdjGraph 命令行工具")]
struct Args {
    /// 构建有向图（默认无向）
    #[arg(short, long)]
    directed: bool,

    /// 边，格式为 SRC,DST[,TYPE]，可重复
    #[arg(short, long = "edge", value_name = "SRC,DST[,TYPE]")]
    edges: Vec<String>,

    /// 日志级别（RUST_LOG 优先）
    #[arg(short, long, default_value = "info")]
    log_level: String,
}

/// 解析后的边参数
#[derive(Debug, PartialEq)]
struct EdgeSpec {
    source: String,
    target: String,
    edge_type: Option<String>,
}

fn parse_edge(raw: &str) -> anyhow::Result<EdgeSpec> {
    let parts: Vec<&str> = raw.split(',').map(str::trim).collect();
    let (source, target, edge_type) = match parts.as_slice() {
        [s, t] => (*s, *t, None),
        [s, t, ty] => (*s, *t, Some(ty.to_string())),
        _ => bail!("边格式应为 SRC,DST[,TYPE]: {}", raw),
    };
    if source.is_empty() || target.is_empty() {
        bail!("顶点 ID 不能为空: {}", raw);
    }
    Ok(EdgeSpec {
        source: source.to_string(),
        target: target.to_string(),
        edge_type: edge_type.filter(|t| !t.is_empty()),
    })
}

fn build_graph(config: GraphConfig, specs: &[EdgeSpec]) -> anyhow::Result<Graph> {
    let mut graph = Graph::with_config(config);

    for spec in specs {
        for id in [&spec.source, &spec.target] {
            if !graph.has_vertex(id) {
                graph.add_vertex(Vertex::new(id))?;
            }
        }

        let source: Vertex = Vertex::new(&spec.source);
        let target: Vertex = Vertex::new(&spec.target);
        let mut edge = Edge::new(&source, &target);
        if let Some(ty) = &spec.edge_type {
            edge = edge.with_type(ty.as_str());
        }
        graph
            .add_edge(edge)
            .with_context(|| format!("添加边 {} -> {} 失败", spec.source, spec.target))?;
    }

    Ok(graph)
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&args.log_level))
        .context("无效的日志级别")?;
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let specs = args
        .edges
        .iter()
        .map(|raw| parse_edge(raw))
        .collect::<anyhow::Result<Vec<_>>>()?;

    let config = GraphConfig {
        directed: args.directed,
    };
    let graph = build_graph(config, &specs)?;

    info!(
        directed = graph.is_directed(),
        vertices = graph.vertex_count(),
        edges = graph.edge_count(),
        "图已构建"
    );

    for vertex in graph.vertices() {
        let edges = graph.neighbors(vertex.id())?;
        let targets: Vec<String> = edges
            .iter()
            .map(|e| match e.edge_type() {
                Some(ty) => format!("{} ({})", e.target(), ty),
                None => e.target().to_string(),
            })
            .collect();
        println!("{} -> [{}]", vertex.id(), targets.join(", "));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_edge() {
        assert_eq!(
            parse_edge("A, B, knows").unwrap(),
            EdgeSpec {
                source: "A".to_string(),
                target: "B".to_string(),
                edge_type: Some("knows".to_string()),
            }
        );
        assert_eq!(parse_edge("A,B").unwrap().edge_type, None);
        assert!(parse_edge("A").is_err());
        assert!(parse_edge("A,,x").is_err());
        assert!(parse_edge("A,B,c,d").is_err());
    }

    #[test]
    fn test_build_graph() {
        let specs = vec![parse_edge("A,B,knows").unwrap(), parse_edge("B,C").unwrap()];

        let graph = build_graph(GraphConfig::undirected(), &specs).unwrap();
        assert_eq!(graph.vertex_count(), 3);
        assert_eq!(graph.edge_count(), 4);
        assert_eq!(graph.degree("B").unwrap(), 2);

        let graph = build_graph(GraphConfig::directed(), &specs).unwrap();
        assert_eq!(graph.edge_count(), 2);
        assert!(graph.neighbors("C").unwrap().is_empty());
    }
}
