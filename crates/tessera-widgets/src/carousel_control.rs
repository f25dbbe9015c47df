//! Previous/next navigation links of a carousel.

use tessera_core::attr::{names, Fallback, Fallbacks};
use tessera_core::{ClassList, Kind, MarkupWriter, Node, RenderContext, RenderError, Renderer};

/// `"left"` or `"right"`.
pub const DIRECTION: &str = "direction";

const FALLBACKS: Fallbacks = &[(DIRECTION, Fallback::Text("left"))];

const EVENTS: &[&str] = &[
    "click",
    "dblclick",
    "mousedown",
    "mousemove",
    "mouseout",
    "mouseover",
    "mouseup",
];

/// Which way a control moves the carousel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Left,
    Right,
}

impl Direction {
    /// Parse a `direction` attribute; anything but `"right"` is left.
    pub fn parse(s: &str) -> Self {
        if s.trim().eq_ignore_ascii_case("right") {
            Direction::Right
        } else {
            Direction::Left
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Direction::Left => "left",
            Direction::Right => "right",
        }
    }

    /// The `data-slide` value.
    pub fn slide(self) -> &'static str {
        match self {
            Direction::Left => "prev",
            Direction::Right => "next",
        }
    }

    fn label(self) -> &'static str {
        match self {
            Direction::Left => "Previous",
            Direction::Right => "Next",
        }
    }
}

/// A control node pointing in `direction`.
pub fn new(direction: Direction) -> Node {
    Node::new(Kind::Control)
        .with_fallbacks(FALLBACKS)
        .with_attr(DIRECTION, direction.as_str())
}

/// Write the chevron glyph and screen-reader label of a control.
pub fn write_glyph(w: &mut MarkupWriter<'_>, direction: Direction) -> Result<(), RenderError> {
    w.start_element("span")?;
    w.write_attribute(
        "class",
        &format!("glyphicon glyphicon-chevron-{}", direction.as_str()),
    )?;
    w.write_attribute("aria-hidden", "true")?;
    w.end_element("span")?;
    w.start_element("span")?;
    w.write_attribute("class", "sr-only")?;
    w.write_text(direction.label())?;
    w.end_element("span")
}

/// Renders a declared `Kind::Control` child of a carousel.
///
/// The link targets the enclosing carousel. Children become the link's
/// content; a control without children gets the default glyph.
#[derive(Debug, Default, Clone, Copy)]
pub struct ControlRenderer;

impl ControlRenderer {
    fn direction(node: &Node) -> Direction {
        Direction::parse(node.attrs().text(DIRECTION).unwrap_or("left"))
    }
}

impl Renderer for ControlRenderer {
    fn begin(&self, cx: &mut RenderContext<'_>, node: &mut Node) -> Result<(), RenderError> {
        let direction = Self::direction(node);
        let id = cx.client_id().to_string();
        let target = format!("#{}", cx.parent_client_id().unwrap_or_default());
        let class = ClassList::new(direction.as_str())
            .modifier(true, "carousel-control")
            .style_class(node.attrs().text(names::STYLE_CLASS))
            .build();

        let w = cx.writer();
        w.start_element("a")?;
        w.write_attribute("id", &id)?;
        cx.tooltip(node)?;
        cx.events(node, EVENTS)?;
        let w = cx.writer();
        w.write_attribute("class", &class)?;
        w.write_attribute("href", &target)?;
        w.write_attribute("role", "button")?;
        w.write_attribute("data-slide", direction.slide())?;
        w.write_attribute_opt("style", node.attrs().text(names::STYLE))
    }

    fn end(&self, cx: &mut RenderContext<'_>, node: &mut Node) -> Result<(), RenderError> {
        if node.children().is_empty() {
            write_glyph(cx.writer(), Self::direction(node))?;
        }
        cx.writer().end_element("a")?;
        cx.activate(node);
        Ok(())
    }

    fn fallbacks(&self) -> Fallbacks {
        FALLBACKS
    }

    fn event_names(&self) -> &'static [&'static str] {
        EVENTS
    }

    fn default_event(&self) -> Option<&'static str> {
        Some("click")
    }
}
