use crate::lifecycle::Phase;
use crate::node::Kind;

/// Errors that abort a render pass.
///
/// None of these are retried. When one surfaces, the output written so far
/// is incomplete and should be discarded by the caller.
#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    /// The output sink failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// An element was closed out of order.
    #[error("unbalanced markup: expected </{expected}>, found </{found}>")]
    Unbalanced {
        expected: &'static str,
        found: &'static str,
    },

    /// An element was closed with nothing open.
    #[error("unbalanced markup: </{0}> with no open element")]
    NothingOpen(&'static str),

    /// The pass finished with an element still open.
    #[error("unclosed element <{0}> at end of render")]
    Unclosed(&'static str),

    /// An attribute was written after the start tag was closed.
    #[error("attribute `{0}` written outside a start tag")]
    MisplacedAttribute(String),

    /// A node stepped through its phases out of order.
    #[error("{kind}: illegal lifecycle transition {from:?} -> {to:?}")]
    Lifecycle { kind: Kind, from: Phase, to: Phase },

    /// No renderer is registered for a kind found in the tree.
    #[error("no renderer registered for kind `{0}`")]
    UnknownKind(Kind),
}

/// Errors raised while assembling renderers, before any output exists.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// A delegation was built without a fallback for the empty case.
    #[error("delegation over `{kind}` has no fallback")]
    MissingFallback { kind: Kind },

    /// Two renderers were registered for the same kind.
    #[error("a renderer for `{0}` is already registered")]
    DuplicateRenderer(Kind),
}
