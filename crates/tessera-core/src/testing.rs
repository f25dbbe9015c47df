use crate::error::RenderError;
use crate::hooks::{Deferred, Hooks, NoHooks};
use crate::node::Node;
use crate::render::{Engine, Registry, RenderContext, RenderOptions, RenderSummary, Renderer};
use crate::writer::MarkupWriter;
use std::sync::{Arc, Mutex};

/// A headless harness that renders a tree to a string for assertions.
///
/// `TestRender` wraps an [`Engine`] and keeps the last output and summary
/// around, so tests read like the scenario they describe.
///
/// # Example
///
/// ```rust,ignore
/// use tessera_core::testing::TestRender;
///
/// let mut t = TestRender::new(registry);
/// let html = t.render(&mut tree);
/// assert!(html.contains(r#"class="carousel slide""#));
/// assert_eq!(t.summary().rendered, 5);
/// ```
pub struct TestRender {
    engine: Engine,
    output: String,
    summary: RenderSummary,
}

impl TestRender {
    /// Harness with no hooks and default options.
    pub fn new(registry: Registry) -> Self {
        Self::with_engine(Engine::new(registry))
    }

    /// Harness around a fully configured engine.
    pub fn with_engine(engine: Engine) -> Self {
        Self {
            engine,
            output: String::new(),
            summary: RenderSummary::default(),
        }
    }

    /// Harness with hooks installed.
    pub fn with_hooks(registry: Registry, hooks: impl Hooks + 'static) -> Self {
        Self::with_engine(Engine::new(registry).with_hooks(hooks))
    }

    /// Harness with custom options.
    pub fn with_options(registry: Registry, options: RenderOptions) -> Self {
        Self::with_engine(Engine::new(registry).with_options(options))
    }

    /// Render `tree`, panicking on error. Returns the markup.
    pub fn render(&mut self, tree: &mut Node) -> &str {
        self.try_render(tree).expect("render failed")
    }

    /// Render `tree`, returning any error.
    pub fn try_render(&mut self, tree: &mut Node) -> Result<&str, RenderError> {
        let mut buf: Vec<u8> = Vec::new();
        self.summary = self.engine.render(tree, &mut buf)?;
        self.output = String::from_utf8(buf).expect("markup is UTF-8");
        Ok(&self.output)
    }

    /// The markup of the last successful render.
    pub fn output(&self) -> &str {
        &self.output
    }

    pub fn summary(&self) -> &RenderSummary {
        &self.summary
    }

    pub fn engine(&self) -> &Engine {
        &self.engine
    }
}

/// A renderer that wraps each node in `<tag id="...">` ... `</tag>`.
///
/// Handy for exercising the walker without any widget semantics.
#[derive(Debug, Clone, Copy)]
pub struct Marker {
    tag: &'static str,
}

impl Marker {
    pub fn new(tag: &'static str) -> Self {
        Self { tag }
    }
}

impl Renderer for Marker {
    fn begin(&self, cx: &mut RenderContext<'_>, _node: &mut Node) -> Result<(), RenderError> {
        let id = cx.client_id().to_string();
        let w = cx.writer();
        w.start_element(self.tag)?;
        w.write_attribute_opt("id", Some(&id))
    }

    fn end(&self, cx: &mut RenderContext<'_>, _node: &mut Node) -> Result<(), RenderError> {
        cx.writer().end_element(self.tag)
    }
}

/// A hook call observed by [`RecordingHooks`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HookCall {
    Tooltip(String),
    Events(String, Vec<String>),
    Responsive(String),
    Activate(String),
}

/// Hooks that record every call, optionally forwarding to other hooks.
///
/// The log is shared, so a test can keep a handle from
/// [`calls`](RecordingHooks::calls) after moving the hooks into an engine.
pub struct RecordingHooks {
    inner: Box<dyn Hooks>,
    calls: Arc<Mutex<Vec<HookCall>>>,
}

impl Default for RecordingHooks {
    fn default() -> Self {
        Self::wrapping(NoHooks)
    }
}

impl RecordingHooks {
    /// Record calls and forward them to `inner`.
    pub fn wrapping(inner: impl Hooks + 'static) -> Self {
        Self {
            inner: Box::new(inner),
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn calls(&self) -> Arc<Mutex<Vec<HookCall>>> {
        Arc::clone(&self.calls)
    }

    fn record(&self, call: HookCall) {
        if let Ok(mut calls) = self.calls.lock() {
            calls.push(call);
        }
    }
}

fn id_of(node: &Node) -> String {
    node.id().unwrap_or_default().to_string()
}

impl Hooks for RecordingHooks {
    fn tooltip(&self, node: &Node, w: &mut MarkupWriter<'_>) -> Result<(), RenderError> {
        self.record(HookCall::Tooltip(id_of(node)));
        self.inner.tooltip(node, w)
    }

    fn events(
        &self,
        node: &Node,
        events: &[&str],
        w: &mut MarkupWriter<'_>,
    ) -> Result<(), RenderError> {
        self.record(HookCall::Events(
            id_of(node),
            events.iter().map(|e| e.to_string()).collect(),
        ));
        self.inner.events(node, events, w)
    }

    fn responsive(&self, node: &Node) -> Vec<String> {
        self.record(HookCall::Responsive(id_of(node)));
        self.inner.responsive(node)
    }

    fn activate(&self, node: &Node, client_id: &str, deferred: &mut Deferred) {
        self.record(HookCall::Activate(id_of(node)));
        self.inner.activate(node, client_id, deferred)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::node::Kind;

    const BOX: Kind = Kind::Custom("box");

    fn registry() -> Registry {
        Registry::new().with(BOX, Marker::new("div")).unwrap()
    }

    /// A complete tree of the given depth and branching factor.
    fn tree(depth: usize, branching: usize) -> Node {
        let mut node = Node::new(BOX);
        if depth > 1 {
            for _ in 0..branching {
                node.push(tree(depth - 1, branching));
            }
        }
        node
    }

    /// Count boundary markers and check they never close more than opened.
    fn markers(html: &str) -> (usize, usize, bool) {
        let opens = html.matches("<div").count();
        let closes = html.matches("</div>").count();
        let mut depth: i64 = 0;
        let mut balanced = true;
        let mut rest = html;
        while let Some(i) = rest.find('<') {
            rest = &rest[i..];
            if rest.starts_with("</div>") {
                depth -= 1;
            } else if rest.starts_with("<div") {
                depth += 1;
            }
            balanced &= depth >= 0;
            rest = &rest[1..];
        }
        (opens, closes, balanced && depth == 0)
    }

    #[test]
    fn boundary_markers_are_twice_the_node_count() {
        for (depth, branching) in [(1, 0), (2, 3), (3, 2), (4, 3), (6, 1)] {
            let mut t = TestRender::new(registry());
            let mut root = tree(depth, branching);
            let nodes = root.subtree_len();
            let (opens, closes, balanced) = markers(t.render(&mut root));
            assert_eq!(opens + closes, 2 * nodes, "depth {depth} branching {branching}");
            assert!(balanced);
            assert_eq!(t.summary().rendered, nodes);
        }
    }

    #[test]
    fn recording_hooks_share_their_log() {
        let hooks = RecordingHooks::default();
        let log = hooks.calls();
        let node = Node::new(BOX).with_id("n");
        hooks.responsive(&node);
        assert_eq!(
            *log.lock().unwrap(),
            vec![HookCall::Responsive("n".to_string())]
        );
    }

    #[test]
    fn try_render_surfaces_errors() {
        let mut t = TestRender::new(Registry::new());
        let err = t.try_render(&mut Node::new(BOX)).unwrap_err();
        assert!(matches!(err, RenderError::UnknownKind(BOX)));
    }
}
