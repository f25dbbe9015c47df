//! Ready-made widget renderers for **tessera**.
//!
//! Every widget here implements [`tessera_core::Renderer`] for one
//! [`Kind`]. [`register_all`] installs them all into a
//! [`Registry`]; [`registry`] builds a fresh one.
//!
//! # Widgets
//!
//! | Module | Kind | Description |
//! |--------|------|-------------|
//! | [`carousel`] | `Carousel`, `Indicator` | Sliding carousel with indicators and controls |
//! | [`carousel_item`] | `Item` | One slide, optionally with a plain caption |
//! | [`carousel_caption`] | `Caption` | Caption overlay of a slide |
//! | [`carousel_control`] | `Control` | Previous/next link |
//! | [`checkbox`] | `Checkbox` | Boolean checkbox input |
//! | [`text`] | `Text` | Literal escaped text |

use tessera_core::{ConfigError, Kind, Registry};

pub mod carousel;
pub mod carousel_caption;
pub mod carousel_control;
pub mod carousel_item;
pub mod checkbox;
pub mod text;

pub use carousel::{CarouselRenderer, IndicatorRenderer};
pub use carousel_caption::CaptionRenderer;
pub use carousel_control::{ControlRenderer, Direction};
pub use carousel_item::ItemRenderer;
pub use checkbox::CheckboxRenderer;
pub use text::TextRenderer;

/// Register every widget renderer. Fails if any of their kinds is taken.
pub fn register_all(registry: &mut Registry) -> Result<(), ConfigError> {
    registry.register(Kind::Carousel, CarouselRenderer::new())?;
    registry.register(Kind::Indicator, IndicatorRenderer)?;
    registry.register(Kind::Item, ItemRenderer::new())?;
    registry.register(Kind::Caption, CaptionRenderer)?;
    registry.register(Kind::Control, ControlRenderer)?;
    registry.register(Kind::Checkbox, CheckboxRenderer)?;
    registry.register(Kind::Text, TextRenderer)?;
    Ok(())
}

/// A registry holding every widget renderer.
pub fn registry() -> Result<Registry, ConfigError> {
    let mut registry = Registry::new();
    register_all(&mut registry)?;
    Ok(registry)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tessera_core::testing::TestRender;
    use tessera_core::{AssetRegistry, Node};

    #[test]
    fn every_builtin_kind_is_covered() {
        let registry = registry().unwrap();
        for kind in Kind::BUILTIN {
            assert!(registry.contains(kind), "{kind} missing");
        }
    }

    #[test]
    fn registering_twice_fails() {
        let mut registry = registry().unwrap();
        assert_eq!(
            register_all(&mut registry),
            Err(ConfigError::DuplicateRenderer(Kind::Carousel))
        );
    }

    #[test]
    fn assets_are_collected_once() {
        let registry = registry().unwrap();
        let mut assets = AssetRegistry::new();
        registry.register_assets(&mut assets);
        registry.register_assets(&mut assets);
        assert_eq!(assets.iter().collect::<Vec<_>>(), vec!["bsf.css", "core.css"]);
    }

    /// Three slides, the second active, indicators and controls on, no
    /// custom controls.
    #[test]
    fn three_slide_carousel() {
        let mut tree = carousel::new()
            .with_id("c")
            .with_attr(carousel::ACTIVE_INDEX, 1)
            .with_children((0..3).map(|i| {
                carousel_item::new()
                    .with_id(format!("s{i}"))
                    .with_child(Node::text(format!("slide {i}")))
            }));
        let mut t = TestRender::new(registry().unwrap());
        let html = t.render(&mut tree);

        let expected = concat!(
            r#"<div id="c" data-interval="5000" data-pause="hover" data-wrap="true" data-ride="carousel" class="carousel slide">"#,
            r#"<ol class="carousel-indicators">"#,
            r##"<li data-target="#c" data-slide-to="0"></li>"##,
            r##"<li data-target="#c" data-slide-to="1" class="active"></li>"##,
            r##"<li data-target="#c" data-slide-to="2"></li>"##,
            "</ol>",
            r#"<div class="carousel-inner" role="listbox">"#,
            r#"<div id="s0" class="item">slide 0</div>"#,
            r#"<div id="s1" class="item active">slide 1</div>"#,
            r#"<div id="s2" class="item">slide 2</div>"#,
            "</div>",
            r##"<a class="left carousel-control" href="#c" role="button" data-slide="prev">"##,
            r#"<span class="glyphicon glyphicon-chevron-left" aria-hidden="true"></span>"#,
            r#"<span class="sr-only">Previous</span></a>"#,
            r##"<a class="right carousel-control" href="#c" role="button" data-slide="next">"##,
            r#"<span class="glyphicon glyphicon-chevron-right" aria-hidden="true"></span>"#,
            r#"<span class="sr-only">Next</span></a>"#,
            "</div>"
        );
        assert_eq!(html, expected);
        assert_eq!(t.summary().rendered, 7);
    }
}
