/// Destination for rendered labels
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PrintTarget {
    /// Raw TCP socket, port kept as entered by the operator
    Network { host: String, port: String },
    /// Local print queue; auto-discovered when no override is set
    LocalQueue { queue_override: Option<String> },
}

impl std::fmt::Display for PrintTarget {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Network { host, port } => write!(f, "tcp://{}:{}", host, port),
            Self::LocalQueue {
                queue_override: Some(queue),
            } => write!(f, "queue '{}'", queue),
            Self::LocalQueue {
                queue_override: None,
            } => write!(f, "auto-detected queue"),
        }
    }
}
