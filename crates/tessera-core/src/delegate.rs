//! Rendering one region of a parent either from its declared children or
//! from synthesized defaults.

use crate::error::{ConfigError, RenderError};
use crate::node::{Kind, Node};
use crate::render::RenderContext;

/// Synthesizes default markup for a region when the parent declares no
/// children of the delegated kind.
pub type FallbackFn =
    Box<dyn Fn(&mut RenderContext<'_>, &Node) -> Result<(), RenderError> + Send + Sync>;

/// Which path a [`Delegation`] took.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// This many declared children were rendered.
    Custom(usize),
    /// No child matched; the fallback ran.
    Fallback,
}

/// A region of a parent rendered from children of one kind.
///
/// Declaring any child of the kind replaces the default content entirely:
/// there is no partial override where some defaults survive next to custom
/// children. Each declared child still gets its own `rendered` check, so a
/// declared-but-unrendered child suppresses the defaults and renders
/// nothing.
///
/// ```ignore
/// let controls = Delegation::builder(Kind::Control)
///     .fallback(|cx, parent| default_controls(cx, parent))
///     .build()?;
/// controls.render(cx, node)?;
/// ```
pub struct Delegation {
    kind: Kind,
    fallback: FallbackFn,
}

impl Delegation {
    pub fn new(
        kind: Kind,
        fallback: impl Fn(&mut RenderContext<'_>, &Node) -> Result<(), RenderError>
            + Send
            + Sync
            + 'static,
    ) -> Self {
        Self {
            kind,
            fallback: Box::new(fallback),
        }
    }

    /// Start a delegation whose fallback is supplied separately.
    pub fn builder(kind: Kind) -> DelegationBuilder {
        DelegationBuilder {
            kind,
            fallback: None,
        }
    }

    pub fn kind(&self) -> Kind {
        self.kind
    }

    /// Render the region for `parent`.
    pub fn render(
        &self,
        cx: &mut RenderContext<'_>,
        parent: &mut Node,
    ) -> Result<Outcome, RenderError> {
        let count = parent.children_of_kind(self.kind).count();
        if count == 0 {
            tracing::debug!(kind = %self.kind, parent = parent.id(), "synthesizing defaults");
            (self.fallback)(cx, parent)?;
            return Ok(Outcome::Fallback);
        }
        for child in parent.children_of_kind_mut(self.kind) {
            cx.render(child)?;
        }
        Ok(Outcome::Custom(count))
    }
}

/// Assembles a [`Delegation`]; see [`Delegation::builder`].
pub struct DelegationBuilder {
    kind: Kind,
    fallback: Option<FallbackFn>,
}

impl DelegationBuilder {
    pub fn fallback(
        mut self,
        f: impl Fn(&mut RenderContext<'_>, &Node) -> Result<(), RenderError>
            + Send
            + Sync
            + 'static,
    ) -> Self {
        self.fallback = Some(Box::new(f));
        self
    }

    /// Finish the delegation. Fails when no fallback was supplied.
    pub fn build(self) -> Result<Delegation, ConfigError> {
        let fallback = self
            .fallback
            .ok_or(ConfigError::MissingFallback { kind: self.kind })?;
        Ok(Delegation {
            kind: self.kind,
            fallback,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hooks::NoHooks;
    use crate::render::{Registry, Renderer};
    use crate::testing::Marker;

    /// Puts its `Control` children after its own content, or a default
    /// `<nav>` when it has none.
    struct Shell {
        controls: Delegation,
    }

    impl Renderer for Shell {
        fn begin(&self, cx: &mut RenderContext<'_>, _node: &mut Node) -> Result<(), RenderError> {
            cx.writer().start_element("section")
        }

        fn end(&self, cx: &mut RenderContext<'_>, node: &mut Node) -> Result<(), RenderError> {
            self.controls.render(cx, node)?;
            cx.writer().end_element("section")
        }

        fn delegates(&self, kind: Kind) -> bool {
            kind == self.controls.kind()
        }
    }

    fn registry() -> Registry {
        let controls = Delegation::builder(Kind::Control)
            .fallback(|cx, _parent| {
                cx.writer().start_element("nav")?;
                cx.writer().write_text("prev next")?;
                cx.writer().end_element("nav")
            })
            .build()
            .unwrap();
        Registry::new()
            .with(Kind::Custom("shell"), Shell { controls })
            .unwrap()
            .with(Kind::Control, Marker::new("a"))
            .unwrap()
            .with(Kind::Text, Marker::new("p"))
            .unwrap()
    }

    fn render(tree: &mut Node) -> String {
        let registry = registry();
        let mut out: Vec<u8> = Vec::new();
        let mut cx = RenderContext::new(&mut out, &registry, &NoHooks);
        cx.render(tree).unwrap();
        cx.finish().unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn defaults_when_no_child_matches() {
        let mut tree = Node::new(Kind::Custom("shell")).with_child(Node::new(Kind::Text));
        assert_eq!(render(&mut tree), "<section><p></p><nav>prev next</nav></section>");
    }

    #[test]
    fn one_custom_child_suppresses_all_defaults() {
        let mut tree = Node::new(Kind::Custom("shell"))
            .with_child(Node::new(Kind::Control).with_id("left"))
            .with_child(Node::new(Kind::Text));
        assert_eq!(
            render(&mut tree),
            r#"<section><p></p><a id="left"></a></section>"#
        );
    }

    #[test]
    fn unrendered_custom_child_still_suppresses_defaults() {
        let mut tree = Node::new(Kind::Custom("shell"))
            .with_child(Node::new(Kind::Control).with_attr("rendered", false));
        assert_eq!(render(&mut tree), "<section></section>");
    }

    #[test]
    fn outcome_reports_path() {
        let registry = registry();
        let d = Delegation::new(Kind::Control, |_, _| Ok(()));
        let mut out: Vec<u8> = Vec::new();
        let mut cx = RenderContext::new(&mut out, &registry, &NoHooks);
        let mut empty = Node::new(Kind::Custom("shell"));
        assert_eq!(d.render(&mut cx, &mut empty).unwrap(), Outcome::Fallback);
        let mut two = Node::new(Kind::Custom("shell"))
            .with_child(Node::new(Kind::Control))
            .with_child(Node::new(Kind::Control));
        assert_eq!(d.render(&mut cx, &mut two).unwrap(), Outcome::Custom(2));
    }

    #[test]
    fn missing_fallback_fails_at_build() {
        let err = Delegation::builder(Kind::Indicator).build().err().unwrap();
        assert_eq!(
            err,
            ConfigError::MissingFallback {
                kind: Kind::Indicator
            }
        );
    }
}
