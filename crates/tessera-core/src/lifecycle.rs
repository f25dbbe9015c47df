//! Per-node render phases.

use crate::error::RenderError;
use crate::node::Kind;

/// Where a node is in its render cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    NotStarted,
    /// Opening markup has been written.
    Began,
    /// Every child not claimed by the renderer has been rendered.
    ChildrenEmitted,
    /// Closing markup has been written.
    Ended,
}

impl Phase {
    /// The only phase that may follow this one.
    pub fn next(self) -> Option<Phase> {
        match self {
            Phase::NotStarted => Some(Phase::Began),
            Phase::Began => Some(Phase::ChildrenEmitted),
            Phase::ChildrenEmitted => Some(Phase::Ended),
            Phase::Ended => None,
        }
    }
}

/// Tracks one node through `NotStarted -> Began -> ChildrenEmitted -> Ended`.
///
/// [`RenderContext::render`](crate::RenderContext::render) advances phases
/// in a fixed order, so inside the walker `advance` only asserts that order.
/// Code that drives a [`Renderer`](crate::Renderer) by hand, outside the
/// walker, uses it to reject an `end` before the children phase or a second
/// `end` with [`RenderError::Lifecycle`].
#[derive(Debug, Clone)]
pub struct Lifecycle {
    kind: Kind,
    phase: Phase,
}

impl Lifecycle {
    pub fn new(kind: Kind) -> Self {
        Self {
            kind,
            phase: Phase::NotStarted,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Move to `to`, which must be the successor of the current phase.
    pub fn advance(&mut self, to: Phase) -> Result<(), RenderError> {
        if self.phase.next() != Some(to) {
            tracing::warn!(kind = %self.kind, from = ?self.phase, to = ?to, "illegal lifecycle transition");
            return Err(RenderError::Lifecycle {
                kind: self.kind,
                from: self.phase,
                to,
            });
        }
        self.phase = to;
        Ok(())
    }
}
