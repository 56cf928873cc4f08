use core::fmt;

#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    MissingCoords,
    NonFiniteCoord { node: usize },
    NodeOutOfRange { node: usize, len: usize },
    SelfLoop { node: usize },
    InvalidWeight { weight: f32 },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingCoords => write!(f, "graph requires coordinates"),
            Self::NonFiniteCoord { node } => write!(f, "node {node} has a non-finite coordinate"),
            Self::NodeOutOfRange { node, len } => {
                write!(f, "edge references node {node}, graph has {len} nodes")
            }
            Self::SelfLoop { node } => write!(f, "self-loop on node {node}"),
            Self::InvalidWeight { weight } => write!(f, "invalid edge weight {weight}"),
        }
    }
}

impl std::error::Error for Error {}

#[cfg(test)]
mod tests {
    use super::Error;

    #[test]
    fn messages_name_the_offending_value() {
        let e = Error::NodeOutOfRange { node: 7, len: 3 };
        assert_eq!(e.to_string(), "edge references node 7, graph has 3 nodes");
        assert_eq!(Error::SelfLoop { node: 2 }.to_string(), "self-loop on node 2");
    }
}
