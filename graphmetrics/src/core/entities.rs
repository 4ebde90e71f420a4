use serde::{Deserialize, Serialize};

/// External vertex identifier as it appears in the input edge list.
pub type VertexId = i64;

/// Dense physical index of a vertex inside a [`Graph`](crate::graph::Graph).
///
/// Physical ids are assigned in first-insertion order and never move.
#[repr(transparent)]
#[derive(
    Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Deserialize, Serialize, Default,
)]
pub struct VID(pub usize);

impl VID {
    pub fn index(&self) -> usize {
        self.0
    }
}

