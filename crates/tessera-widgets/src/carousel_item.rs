//! A single slide of a carousel.

use crate::carousel_caption;
use tessera_core::attr::names;
use tessera_core::{ClassList, Delegation, Kind, Node, RenderContext, RenderError, Renderer};

/// Text for a plain caption, used when the item declares no caption child.
pub const CAPTION: &str = "caption";

pub fn new() -> Node {
    Node::new(Kind::Item)
}

/// Renders `Kind::Item` as an `item` div, flagged `active` by the carousel.
///
/// Caption children are claimed and placed after the slide content. With
/// no caption child, a `caption` attribute produces a plain caption.
pub struct ItemRenderer {
    captions: Delegation,
}

impl Default for ItemRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl ItemRenderer {
    pub fn new() -> Self {
        Self {
            captions: Delegation::new(Kind::Caption, |cx, item| {
                match item.attrs().text(CAPTION) {
                    Some(text) => carousel_caption::default_caption(cx, text),
                    None => Ok(()),
                }
            }),
        }
    }
}

impl Renderer for ItemRenderer {
    fn begin(&self, cx: &mut RenderContext<'_>, node: &mut Node) -> Result<(), RenderError> {
        let id = cx.client_id().to_string();
        let class = ClassList::new("item")
            .modifier(node.is_active(), "active")
            .style_class(node.attrs().text(names::STYLE_CLASS))
            .build();

        let w = cx.writer();
        w.start_element("div")?;
        w.write_attribute("id", &id)?;
        cx.tooltip(node)?;
        let w = cx.writer();
        w.write_attribute_opt("style", node.attrs().text(names::STYLE))?;
        w.write_attribute("class", &class)
    }

    fn end(&self, cx: &mut RenderContext<'_>, node: &mut Node) -> Result<(), RenderError> {
        self.captions.render(cx, node)?;
        cx.writer().end_element("div")?;
        cx.activate(node);
        Ok(())
    }

    fn delegates(&self, kind: Kind) -> bool {
        kind == self.captions.kind()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tessera_core::testing::TestRender;

    fn render(node: &mut Node) -> String {
        TestRender::new(crate::registry().unwrap())
            .render(node)
            .to_string()
    }

    #[test]
    fn inactive_item_without_caption() {
        let mut node = new().with_id("s").with_child(Node::text("slide"));
        assert_eq!(render(&mut node), r#"<div id="s" class="item">slide</div>"#);
    }

    #[test]
    fn caption_attribute_synthesizes_plain_caption() {
        let mut node = new().with_id("s").with_attr(CAPTION, "Dawn & dusk");
        assert_eq!(
            render(&mut node),
            concat!(
                r#"<div id="s" class="item">"#,
                r#"<div class="carousel-caption"><h3>Dawn &amp; dusk</h3></div>"#,
                "</div>"
            )
        );
    }

    #[test]
    fn caption_child_wins_over_attribute_and_goes_last() {
        let mut node = new()
            .with_id("s")
            .with_attr(CAPTION, "ignored")
            .with_child(carousel_caption::new().with_id("c").with_child(Node::text("Real")))
            .with_child(Node::text("img"));
        assert_eq!(
            render(&mut node),
            concat!(
                r#"<div id="s" class="item">img"#,
                r#"<div id="c" class="carousel-caption">Real</div>"#,
                "</div>"
            )
        );
    }

    #[test]
    fn active_flag_adds_class() {
        let mut node = new().with_id("s").with_attr("styleClass", "hero");
        node.set_active(true);
        assert_eq!(
            render(&mut node),
            r#"<div id="s" class="item active hero"></div>"#
        );
    }
}
