use thiserror::Error;

use crate::channel::Channel;

/// Failures of the engine's write path. Either one aborts the call before
/// any state is touched.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EngineError {
    #[error("channel contract violation: expected '{expected}', got '{actual}'")]
    ChannelContractViolation { expected: Channel, actual: Channel },

    #[error("universe '{universe_id}' is not registered")]
    UnregisteredUniverse { universe_id: String },
}

/// Referential problems in a universe's skill graph, reported by
/// [`crate::sanitize::validate_universe`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UniverseIssue {
    #[error("node '{node_id}' belongs to universe '{owner}'")]
    ForeignNode { node_id: String, owner: String },

    #[error("node '{node_id}' is declared more than once")]
    DuplicateNode { node_id: String },

    #[error("edge '{from}' -> '{to}' references unknown skill '{missing}'")]
    DanglingEdge {
        from: String,
        to: String,
        missing: String,
    },

    #[error("difficulty arc references unknown skill '{skill_id}'")]
    DanglingArc { skill_id: String },
}
