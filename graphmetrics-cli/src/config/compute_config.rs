use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, PartialEq, Clone, Serialize, Default)]
pub struct ComputeConfig {
    /// Size of the rayon pool used by the analyzers; rayon's default when unset.
    pub num_threads: Option<usize>,
}
