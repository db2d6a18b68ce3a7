use std::fmt;

/// A rejected graph mutation. The graph is left unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GraphError {
    /// All vertex slots are in use.
    VertexCapacity { capacity: usize },
    /// All line slots are in use.
    LineCapacity { capacity: usize },
}

impl fmt::Display for GraphError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GraphError::VertexCapacity { capacity } => {
                write!(f, "vertex capacity exhausted ({capacity} vertices)")
            }
            GraphError::LineCapacity { capacity } => {
                write!(f, "line capacity exhausted ({capacity} lines)")
            }
        }
    }
}

impl std::error::Error for GraphError {}

/// An `EditorConfig` that cannot be used.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ConfigError {
    /// Vertex capacity is zero or does not fit a `u32` index.
    VertexCapacity(usize),
    /// Line capacity is zero or its index count does not fit a `u32`.
    LineCapacity(usize),
    /// Pick radius is not a positive finite distance.
    PickRadius(f32),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::VertexCapacity(n) => {
                write!(f, "invalid vertex capacity {n}: must be in 1..={}", u32::MAX)
            }
            ConfigError::LineCapacity(n) => {
                write!(f, "invalid line capacity {n}: must be in 1..={}", u32::MAX / 2)
            }
            ConfigError::PickRadius(r) => {
                write!(f, "invalid pick radius {r}: must be positive and finite")
            }
        }
    }
}

impl std::error::Error for ConfigError {}

/// Failure to set up an [`Editor`](crate::Editor).
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum EditorError {
    Config(ConfigError),
    Graph(GraphError),
}

impl fmt::Display for EditorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EditorError::Config(e) => write!(f, "editor config: {e}"),
            EditorError::Graph(e) => write!(f, "initial graph: {e}"),
        }
    }
}

impl std::error::Error for EditorError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            EditorError::Config(e) => Some(e),
            EditorError::Graph(e) => Some(e),
        }
    }
}

impl From<ConfigError> for EditorError {
    fn from(e: ConfigError) -> Self {
        EditorError::Config(e)
    }
}

impl From<GraphError> for EditorError {
    fn from(e: GraphError) -> Self {
        EditorError::Graph(e)
    }
}
