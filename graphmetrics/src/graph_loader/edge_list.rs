//! Loader for plain-text edge lists.
//!
//! The format is line oriented:
//!
//! * blank lines are ignored,
//! * a line starting with `%` is a comment,
//! * every other line holds space separated fields, the first two of which are
//!   the integer ids of the edge endpoints. Extra fields (weights, timestamps)
//!   are ignored and lines with fewer than two fields are skipped.
//!
//! A field that is not an integer aborts the load with [`ParseError`].
//!
//! # Example
//! ```no_run
//! use graphmetrics::graph_loader::edge_list::EdgeListLoader;
//!
//! let graph = EdgeListLoader::new("graphs/ENZYMES_g325.edges")
//!     .load()
//!     .expect("edge list did not parse");
//! println!("{} vertices", graph.count_vertices());
//! ```
use crate::{
    core::entities::VertexId,
    errors::ParseError,
    graph::Graph,
};
use std::{
    fs,
    path::{Path, PathBuf},
};
use tracing::{debug, info};

pub const DEFAULT_COMMENT_PREFIX: &str = "%";

/// Parse the full text of an edge list into a new graph.
pub fn parse_edge_list(text: &str) -> Result<Graph, ParseError> {
    let mut graph = Graph::new();
    parse_into_graph(text, DEFAULT_COMMENT_PREFIX, &mut graph)?;
    Ok(graph)
}

/// Read and parse the edge list stored at `path`.
pub fn load_edge_list<P: AsRef<Path>>(path: P) -> Result<Graph, ParseError> {
    EdgeListLoader::new(path).load()
}

/// An edge list loader with configurable options.
#[derive(Debug, Clone)]
pub struct EdgeListLoader {
    /// Path of the edge list file.
    path: PathBuf,
    /// Lines starting with this prefix are skipped.
    comment_prefix: String,
}

impl EdgeListLoader {
    /// Creates a new `EdgeListLoader` for the file at `path`.
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            comment_prefix: DEFAULT_COMMENT_PREFIX.to_string(),
        }
    }

    /// Override the comment prefix (`%` by default).
    pub fn set_comment_prefix(mut self, prefix: &str) -> Self {
        self.comment_prefix = prefix.to_string();
        self
    }

    /// Load the file into a fresh graph.
    pub fn load(&self) -> Result<Graph, ParseError> {
        let text = fs::read_to_string(&self.path).map_err(|source| ParseError::Io {
            path: self.path.clone(),
            source,
        })?;
        debug!(path = %self.path.display(), bytes = text.len(), "read edge list");
        let mut graph = Graph::new();
        parse_into_graph(&text, &self.comment_prefix, &mut graph)?;
        Ok(graph)
    }

    /// Append the edges of the file to an existing graph.
    ///
    /// `graph` is only touched once the whole file has parsed.
    pub fn load_into_graph(&self, graph: &mut Graph) -> Result<(), ParseError> {
        let loaded = self.load()?;
        for id in loaded.vertices() {
            graph.add_vertex(id);
        }
        for (src, dst) in loaded.edges() {
            graph.add_edge(src, dst);
        }
        Ok(())
    }
}

fn parse_into_graph(text: &str, comment_prefix: &str, graph: &mut Graph) -> Result<(), ParseError> {
    let mut skipped = 0usize;
    for (line_no, line) in text.split('\n').enumerate() {
        if line.is_empty() || line.starts_with(comment_prefix) {
            continue;
        }
        let mut fields = line
            .split(' ')
            .map(str::trim)
            .filter(|field| !field.is_empty());
        let (src, dst) = match (fields.next(), fields.next()) {
            (Some(src), Some(dst)) => (src, dst),
            _ => {
                skipped += 1;
                debug!(line = line_no + 1, "skipping line with fewer than two fields");
                continue;
            }
        };
        let src = parse_vertex_id(src, line_no + 1)?;
        let dst = parse_vertex_id(dst, line_no + 1)?;
        graph.add_vertex(src);
        graph.add_vertex(dst);
        graph.add_edge(src, dst);
    }
    info!(
        vertices = graph.count_vertices(),
        edges = graph.count_edges(),
        skipped,
        "parsed edge list"
    );
    Ok(())
}

fn parse_vertex_id(field: &str, line: usize) -> Result<VertexId, ParseError> {
    field
        .parse::<VertexId>()
        .map_err(|source| ParseError::InvalidVertexId {
            line,
            field: field.to_string(),
            source,
        })
}
