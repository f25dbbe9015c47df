//! The begin / children / end protocol and the walker that drives it.

use crate::assets::AssetRegistry;
use crate::attr::Fallbacks;
use crate::error::{ConfigError, RenderError};
use crate::escape::escape_client_id;
use crate::hooks::{Deferred, Hooks, NoHooks};
use crate::lifecycle::{Lifecycle, Phase};
use crate::node::{Kind, Node};
use crate::writer::MarkupWriter;
use serde::Deserialize;
use std::collections::HashMap;
use std::io::Write;

/// Turns one kind of [`Node`] into markup.
///
/// A renderer only supplies boundary markup: [`begin`](Renderer::begin)
/// writes everything before the children and [`end`](Renderer::end)
/// everything after. The children phase in between belongs to the walker
/// ([`RenderContext::render`]), which renders each child through its own
/// renderer. A renderer that wants to place some children itself claims
/// their kind through [`delegates`](Renderer::delegates); the walker then
/// skips them and the renderer renders them with a
/// [`Delegation`](crate::Delegation).
///
/// Neither method is called for a node whose `rendered` attribute is false.
pub trait Renderer: Send + Sync {
    /// Write the opening markup of `node`.
    fn begin(&self, cx: &mut RenderContext<'_>, node: &mut Node) -> Result<(), RenderError>;

    /// Write the closing markup of `node`.
    fn end(&self, cx: &mut RenderContext<'_>, node: &mut Node) -> Result<(), RenderError>;

    /// Whether children of `kind` are rendered by this renderer rather than
    /// by the walker's children phase.
    fn delegates(&self, _kind: Kind) -> bool {
        false
    }

    /// Defaults for attributes the author leaves unset.
    fn fallbacks(&self) -> Fallbacks {
        &[]
    }

    /// Events the component can bind client-side handlers to.
    fn event_names(&self) -> &'static [&'static str] {
        &[]
    }

    /// The event used when a handler does not name one.
    fn default_event(&self) -> Option<&'static str> {
        None
    }

    /// Stylesheets and scripts the rendered markup relies on.
    fn assets(&self) -> &'static [&'static str] {
        &[]
    }
}

/// Renderers keyed by the kind they handle.
#[derive(Default)]
pub struct Registry {
    renderers: HashMap<Kind, Box<dyn Renderer>>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `renderer` for `kind`. Each kind takes exactly one renderer.
    pub fn register(
        &mut self,
        kind: Kind,
        renderer: impl Renderer + 'static,
    ) -> Result<(), ConfigError> {
        if self.renderers.contains_key(&kind) {
            return Err(ConfigError::DuplicateRenderer(kind));
        }
        self.renderers.insert(kind, Box::new(renderer));
        Ok(())
    }

    /// Builder form of [`register`](Registry::register).
    pub fn with(
        mut self,
        kind: Kind,
        renderer: impl Renderer + 'static,
    ) -> Result<Self, ConfigError> {
        self.register(kind, renderer)?;
        Ok(self)
    }

    pub fn get(&self, kind: Kind) -> Option<&dyn Renderer> {
        self.renderers.get(&kind).map(|r| r.as_ref())
    }

    pub fn contains(&self, kind: Kind) -> bool {
        self.renderers.contains_key(&kind)
    }

    /// Collect every registered renderer's assets.
    ///
    /// Meant to be called once by the host at startup; repeated calls add
    /// nothing new.
    pub fn register_assets(&self, assets: &mut AssetRegistry) {
        let mut kinds: Vec<_> = self.renderers.keys().copied().collect();
        kinds.sort();
        for kind in kinds {
            for asset in self.renderers[&kind].assets() {
                assets.register(asset);
            }
        }
    }

    /// Check that every rendered node in the tree has a renderer.
    ///
    /// Subtrees with `rendered == false` are never emitted and are not
    /// checked.
    pub fn check(&self, node: &Node) -> Result<(), RenderError> {
        if !node.is_rendered() {
            return Ok(());
        }
        if !self.contains(node.kind()) {
            return Err(RenderError::UnknownKind(node.kind()));
        }
        node.children().iter().try_for_each(|c| self.check(c))
    }
}

/// Knobs for a render pass.
///
/// ```
/// use tessera_core::RenderOptions;
///
/// let opts = RenderOptions {
///     id_prefix: "page1_".into(),
///     ..RenderOptions::default()
/// };
/// assert!(opts.validate_tree);
/// ```
#[derive(Debug, Clone, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RenderOptions {
    /// Prefix for ids generated for nodes that have none (default: `"t_"`).
    pub id_prefix: String,
    /// Check the whole tree for unregistered kinds before writing anything
    /// (default: true).
    pub validate_tree: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            id_prefix: "t_".to_string(),
            validate_tree: true,
        }
    }
}

/// What a finished render pass reports back.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RenderSummary {
    /// Nodes that went through a full begin / children / end cycle.
    pub rendered: usize,
    /// Subtrees skipped because their root was not rendered.
    pub skipped: usize,
    /// Ids queued for client-side activation, in completion order.
    pub deferred: Vec<String>,
}

/// State shared by all renderers during one pass.
///
/// Owns the [`MarkupWriter`], the stack of client ids of the nodes
/// currently being rendered, and the deferred-activation queue.
pub struct RenderContext<'a> {
    writer: MarkupWriter<'a>,
    registry: &'a Registry,
    hooks: &'a dyn Hooks,
    ancestors: Vec<String>,
    deferred: Deferred,
    rendered: usize,
    skipped: usize,
}

impl<'a> RenderContext<'a> {
    pub fn new(sink: &'a mut dyn Write, registry: &'a Registry, hooks: &'a dyn Hooks) -> Self {
        Self {
            writer: MarkupWriter::new(sink),
            registry,
            hooks,
            ancestors: Vec::new(),
            deferred: Deferred::default(),
            rendered: 0,
            skipped: 0,
        }
    }

    /// Render `node` and its subtree: begin, children, end.
    ///
    /// A node with `rendered == false` produces nothing at all, children
    /// included. Each node is checked on its own; the flag is not inherited.
    pub fn render(&mut self, node: &mut Node) -> Result<(), RenderError> {
        if !node.is_rendered() {
            tracing::debug!(kind = %node.kind(), id = node.id(), "skipping unrendered subtree");
            self.skipped += 1;
            return Ok(());
        }
        let registry = self.registry;
        let renderer = registry
            .get(node.kind())
            .ok_or(RenderError::UnknownKind(node.kind()))?;

        // Phases advance in order here; the tracker only asserts it.
        let mut life = Lifecycle::new(node.kind());
        self.ancestors.push(client_id_of(node));
        tracing::trace!(kind = %node.kind(), id = node.id(), "begin");

        renderer.begin(self, node)?;
        life.advance(Phase::Began)?;

        for child in node.children_mut() {
            if renderer.delegates(child.kind()) {
                continue;
            }
            self.render(child)?;
        }
        life.advance(Phase::ChildrenEmitted)?;

        renderer.end(self, node)?;
        life.advance(Phase::Ended)?;
        tracing::trace!(kind = %node.kind(), id = node.id(), "end");

        self.ancestors.pop();
        self.rendered += 1;
        Ok(())
    }

    pub fn writer(&mut self) -> &mut MarkupWriter<'a> {
        &mut self.writer
    }

    /// Escaped client id of the node currently being rendered.
    pub fn client_id(&self) -> &str {
        self.ancestors.last().map(String::as_str).unwrap_or("")
    }

    /// Escaped client id of the enclosing node, if any.
    pub fn parent_client_id(&self) -> Option<&str> {
        let n = self.ancestors.len();
        (n >= 2).then(|| self.ancestors[n - 2].as_str())
    }

    /// The renderer registered for `kind`.
    pub fn renderer(&self, kind: Kind) -> Option<&'a dyn Renderer> {
        self.registry.get(kind)
    }

    /// Write tooltip markers for `node` on the open start tag.
    pub fn tooltip(&mut self, node: &Node) -> Result<(), RenderError> {
        self.hooks.tooltip(node, &mut self.writer)
    }

    /// Write event-binding markers for `node` on the open start tag.
    pub fn events(&mut self, node: &Node, events: &[&str]) -> Result<(), RenderError> {
        self.hooks.events(node, events, &mut self.writer)
    }

    /// Responsive classes for `node`.
    pub fn responsive(&self, node: &Node) -> Vec<String> {
        self.hooks.responsive(node)
    }

    /// Queue `node` for activation once its markup is complete.
    pub fn activate(&mut self, node: &Node) {
        let id = client_id_of(node);
        self.hooks.activate(node, &id, &mut self.deferred);
    }

    /// Finish the pass: every element must be closed.
    pub fn finish(self) -> Result<RenderSummary, RenderError> {
        self.writer.finish()?;
        Ok(RenderSummary {
            rendered: self.rendered,
            skipped: self.skipped,
            deferred: self.deferred.into_ids(),
        })
    }
}

fn client_id_of(node: &Node) -> String {
    escape_client_id(node.id().unwrap_or_default()).into_owned()
}

/// Renders whole trees: prepares the tree, walks it and reports back.
///
/// ```ignore
/// use tessera_core::{Engine, Registry};
///
/// let engine = Engine::new(registry);
/// let html = engine.render_to_string(&mut tree)?;
/// ```
pub struct Engine {
    registry: Registry,
    hooks: Box<dyn Hooks>,
    options: RenderOptions,
}

impl Engine {
    pub fn new(registry: Registry) -> Self {
        Self {
            registry,
            hooks: Box::new(NoHooks),
            options: RenderOptions::default(),
        }
    }

    pub fn with_hooks(mut self, hooks: impl Hooks + 'static) -> Self {
        self.hooks = Box::new(hooks);
        self
    }

    pub fn with_options(mut self, options: RenderOptions) -> Self {
        self.options = options;
        self
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    pub fn options(&self) -> &RenderOptions {
        &self.options
    }

    /// Render `root` into `sink`.
    ///
    /// On error the sink holds partial output and should be discarded.
    pub fn render(
        &self,
        root: &mut Node,
        sink: &mut dyn Write,
    ) -> Result<RenderSummary, RenderError> {
        if self.options.validate_tree {
            self.registry.check(root)?;
        }
        let mut counter = 0;
        self.prepare(root, &mut counter);

        let mut cx = RenderContext::new(sink, &self.registry, self.hooks.as_ref());
        cx.render(root)?;
        let summary = cx.finish()?;
        tracing::debug!(
            rendered = summary.rendered,
            skipped = summary.skipped,
            deferred = summary.deferred.len(),
            "render pass complete"
        );
        Ok(summary)
    }

    /// Render `root` into a fresh string.
    pub fn render_to_string(&self, root: &mut Node) -> Result<String, RenderError> {
        let mut buf: Vec<u8> = Vec::new();
        self.render(root, &mut buf)?;
        Ok(String::from_utf8_lossy(&buf).into_owned())
    }

    /// Install each renderer's fallbacks and give id-less nodes a
    /// generated id, numbered in document order.
    fn prepare(&self, node: &mut Node, counter: &mut usize) {
        if let Some(renderer) = self.registry.get(node.kind()) {
            let fallbacks = renderer.fallbacks();
            if !fallbacks.is_empty() {
                node.attrs_mut().set_fallbacks(fallbacks);
            }
        }
        if node.id().is_none() {
            node.set_id(format!("{}{}", self.options.id_prefix, *counter));
        }
        *counter += 1;
        for child in node.children_mut() {
            self.prepare(child, counter);
        }
    }
}
