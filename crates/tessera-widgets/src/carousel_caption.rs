//! Caption overlay of a carousel slide.

use tessera_core::attr::names;
use tessera_core::{ClassList, Kind, Node, RenderContext, RenderError, Renderer};

const EVENTS: &[&str] = &[
    "click",
    "dblclick",
    "mousedown",
    "mousemove",
    "mouseout",
    "mouseover",
    "mouseup",
];

pub fn new() -> Node {
    Node::new(Kind::Caption)
}

/// Renders `Kind::Caption` as a `carousel-caption` div around its children.
#[derive(Debug, Default, Clone, Copy)]
pub struct CaptionRenderer;

impl Renderer for CaptionRenderer {
    fn begin(&self, cx: &mut RenderContext<'_>, node: &mut Node) -> Result<(), RenderError> {
        let id = cx.client_id().to_string();
        let class = ClassList::new("carousel-caption")
            .style_class(node.attrs().text(names::STYLE_CLASS))
            .build();

        let w = cx.writer();
        w.start_element("div")?;
        w.write_attribute("id", &id)?;
        cx.tooltip(node)?;
        cx.events(node, EVENTS)?;
        let w = cx.writer();
        w.write_attribute_opt("style", node.attrs().text(names::STYLE))?;
        w.write_attribute("class", &class)
    }

    fn end(&self, cx: &mut RenderContext<'_>, node: &mut Node) -> Result<(), RenderError> {
        cx.writer().end_element("div")?;
        cx.activate(node);
        Ok(())
    }

    fn event_names(&self) -> &'static [&'static str] {
        EVENTS
    }

    fn default_event(&self) -> Option<&'static str> {
        Some("click")
    }
}

/// Write a plain caption: the caption div wrapping `text` as a heading.
pub fn default_caption(cx: &mut RenderContext<'_>, text: &str) -> Result<(), RenderError> {
    let w = cx.writer();
    w.start_element("div")?;
    w.write_attribute("class", "carousel-caption")?;
    w.start_element("h3")?;
    w.write_text(text)?;
    w.end_element("h3")?;
    w.end_element("div")
}
