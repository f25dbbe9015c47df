//! **tessera** -- server-side widget rendering with a composable
//! begin / children / end lifecycle.
//!
//! This is the umbrella crate that re-exports everything you need from a
//! single dependency:
//!
//! ```toml
//! [dependencies]
//! tessera = "0.1"
//! ```
//!
//! # Re-exports
//!
//! * All public items from [`tessera_core`] are available at the crate root
//!   ([`Node`], [`Kind`], [`Renderer`], [`Engine`], [`Delegation`],
//!   [`Hooks`], etc.).
//! * The [`widgets`] module re-exports everything from [`tessera_widgets`]
//!   (carousel, items, captions, controls, checkbox, text).
//! * The [`view`] module builds trees from JSON descriptions.
//!
//! # Quick start
//!
//! ```ignore
//! use tessera::widgets::{carousel, carousel_item};
//! use tessera::Node;
//!
//! let mut tree = carousel::new()
//!     .with_id("gallery")
//!     .with_child(carousel_item::new().with_child(Node::text("One")))
//!     .with_child(carousel_item::new().with_child(Node::text("Two")));
//!
//! let html = tessera::render_to_string(&mut tree)?;
//! ```

pub use tessera_core::*;
pub mod widgets {
    pub use tessera_widgets::*;
}
pub mod view;

pub use view::{ViewError, ViewSpec};

/// An engine with every widget registered and Bootstrap hooks installed.
pub fn default_engine() -> Result<Engine, ConfigError> {
    Ok(Engine::new(tessera_widgets::registry()?).with_hooks(BootstrapHooks))
}

/// Errors from the convenience entry points of this crate.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Render(#[from] RenderError),
    #[error(transparent)]
    View(#[from] ViewError),
}

/// Render `tree` with [`default_engine`].
pub fn render_to_string(tree: &mut Node) -> Result<String, Error> {
    Ok(default_engine()?.render_to_string(tree)?)
}

/// Parse a JSON description and render it with [`default_engine`].
pub fn render_json(json: &str) -> Result<String, Error> {
    let mut tree = view::parse(json)?;
    tracing::debug!(nodes = tree.subtree_len(), "parsed view description");
    render_to_string(&mut tree)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn json_carousel_renders_with_bootstrap_hooks() {
        let html = render_json(
            r#"{
                "kind": "carousel",
                "id": "g",
                "attrs": { "showControls": false, "showIndicators": false, "colMd": 8, "tooltip": "Photos" },
                "children": [
                    { "kind": "carouselItem", "id": "a", "children": ["A"] }
                ]
            }"#,
        )
        .unwrap();
        assert_eq!(
            html,
            concat!(
                r#"<div id="g" title="Photos" data-toggle="tooltip" data-interval="5000" data-pause="hover" data-wrap="true" data-ride="carousel" class="carousel slide col-md-8">"#,
                r#"<div class="carousel-inner" role="listbox"><div id="a" class="item active">A</div></div>"#,
                "</div>"
            )
        );
    }

    #[test]
    fn errors_convert_into_crate_error() {
        assert!(matches!(
            render_json(r#"{ "kind": "nope" }"#),
            Err(Error::View(ViewError::UnknownKind(_)))
        ));
    }
}
