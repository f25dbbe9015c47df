//! Core render lifecycle for the **tessera** component toolkit.
//!
//! `tessera-core` turns a tree of configured components into nested markup.
//! Each component is a [`Node`]: a [`Kind`] tag, an [`Attributes`] store and
//! ordered children. Each kind has a [`Renderer`] that only writes the
//! component's boundary markup. The walker in [`RenderContext`] owns the
//! traversal between the boundaries.
//!
//! # Key types
//!
//! | Type | Purpose |
//! |------|---------|
//! | [`Attributes`] | Declared configuration with per-kind fallbacks |
//! | [`Node`] | A component and its ordered, kind-tagged children |
//! | [`Renderer`] | Begin / end markup for one kind |
//! | [`Registry`] | Renderers keyed by [`Kind`] |
//! | [`Engine`] | Prepares a tree, walks it and reports a [`RenderSummary`] |
//! | [`Delegation`] | Declared-children-or-defaults for one region of a parent |
//! | [`Hooks`] | Tooltip, event, responsive and activation collaborators |
//! | [`TestRender`](testing::TestRender) | Headless harness for asserting on output |
//!
//! # Render cycle
//!
//! 1. **prepare** -- [`Engine`] checks that every rendered kind has a
//!    renderer, installs attribute fallbacks and assigns ids to nodes that
//!    have none. Nothing is written yet.
//! 2. **begin** -- [`Renderer::begin`] writes the opening markup.
//! 3. **children** -- the walker renders each child in order, skipping
//!    kinds the renderer claims through [`Renderer::delegates`].
//! 4. **end** -- [`Renderer::end`] writes the closing markup and may render
//!    claimed children through a [`Delegation`].
//!
//! A node whose `rendered` attribute is false skips all three phases, for
//! itself and its whole subtree.

pub mod assets;
pub mod attr;
pub mod class;
pub mod delegate;
pub mod error;
pub mod escape;
pub mod hooks;
pub mod lifecycle;
pub mod node;
pub mod render;
pub mod testing;
pub mod writer;

pub use assets::AssetRegistry;
pub use attr::{names, Attributes, Fallback, Fallbacks, Value};
pub use class::ClassList;
pub use delegate::{Delegation, DelegationBuilder, Outcome};
pub use error::{ConfigError, RenderError};
pub use escape::{escape_attr, escape_client_id, escape_text};
pub use hooks::{BootstrapHooks, Deferred, Hooks, NoHooks};
pub use lifecycle::{Lifecycle, Phase};
pub use node::{Classification, Kind, Node};
pub use render::{Engine, Registry, RenderContext, RenderOptions, RenderSummary, Renderer};
pub use writer::MarkupWriter;
