//! Graphviz DOT export.
//!
//! The output is an undirected `graph` block that an external renderer such as
//! `dot -Tpng` can turn into an image. Vertices are written in insertion order
//! and edges in insertion order, so the same graph always produces the same
//! text. Running the renderer is left to the caller.
use crate::{errors::GraphError, graph::Graph};
use std::{fmt::Write as _, fs, path::Path};
use tracing::debug;

/// Presentation attributes applied to every vertex.
#[derive(Clone, Debug, PartialEq)]
pub struct DotOptions {
    pub name: String,
    pub rank_direction: RankDirection,
    pub font_name: String,
    pub font_size: u32,
    pub filled: bool,
    /// Fill colour as `#RRGGBB`.
    pub fill_color: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RankDirection {
    TopBottom,
    LeftRight,
}

impl RankDirection {
    fn as_str(self) -> &'static str {
        match self {
            RankDirection::TopBottom => "TB",
            RankDirection::LeftRight => "LR",
        }
    }
}

impl Default for DotOptions {
    fn default() -> Self {
        Self {
            name: "G".to_string(),
            rank_direction: RankDirection::LeftRight,
            font_name: "SansSerif".to_string(),
            font_size: 12,
            filled: true,
            fill_color: "#C0C0C0".to_string(),
        }
    }
}

fn escape_dot(s: &str) -> String {
    s.replace('\\', "\\\\").replace('"', "\\\"")
}

/// Serialise `graph` as DOT text.
pub fn to_dot(graph: &Graph, options: &DotOptions) -> String {
    let mut dot = String::new();

    let _ = writeln!(dot, "graph \"{}\" {{", escape_dot(&options.name));
    let _ = writeln!(dot, "    rankdir={};", options.rank_direction.as_str());
    let _ = write!(
        dot,
        "    node [fontname=\"{}\", fontsize={}",
        escape_dot(&options.font_name),
        options.font_size
    );
    if options.filled {
        let _ = write!(
            dot,
            ", style=filled, fillcolor=\"{}\"",
            escape_dot(&options.fill_color)
        );
    }
    dot.push_str("];\n\n");

    for (vid, id) in graph.vids().zip(graph.vertices()) {
        let _ = writeln!(dot, "    {} [label=\"{}\"];", vid.index(), id);
    }
    if graph.count_edges() > 0 {
        dot.push('\n');
    }
    for (src, dst) in graph.edge_vids() {
        let _ = writeln!(dot, "    {} -- {};", src.index(), dst.index());
    }

    dot.push_str("}\n");
    dot
}

/// Write the DOT serialisation of `graph` to `path`.
pub fn write_dot<P: AsRef<Path>>(
    graph: &Graph,
    path: P,
    options: &DotOptions,
) -> Result<(), GraphError> {
    let path = path.as_ref();
    fs::write(path, to_dot(graph, options)).map_err(|source| GraphError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    debug!(path = %path.display(), "wrote dot file");
    Ok(())
}
