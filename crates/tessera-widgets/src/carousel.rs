//! Sliding carousel with indicators and previous/next controls.

use crate::carousel_control::{self, Direction};
use tessera_core::attr::{names, Fallback, Fallbacks};
use tessera_core::{ClassList, Delegation, Kind, Node, RenderContext, RenderError, Renderer};

pub const INTERVAL: &str = "interval";
pub const PAUSE: &str = "pause";
pub const WRAP: &str = "wrap";
pub const START_ANIMATION: &str = "startAnimation";
pub const SLIDE: &str = "slide";
pub const SHOW_INDICATORS: &str = "showIndicators";
pub const SHOW_CONTROLS: &str = "showControls";
pub const ACTIVE_INDEX: &str = "activeIndex";
/// Set on indicator children: the item index the indicator jumps to.
/// Without it an indicator targets its own position among indicators.
pub const SLIDE_TO: &str = "slideTo";

const FALLBACKS: Fallbacks = &[
    (INTERVAL, Fallback::Int(5000)),
    (PAUSE, Fallback::Text("hover")),
    (WRAP, Fallback::Bool(true)),
    (START_ANIMATION, Fallback::Bool(true)),
    (SLIDE, Fallback::Bool(true)),
    (SHOW_INDICATORS, Fallback::Bool(true)),
    (SHOW_CONTROLS, Fallback::Bool(true)),
    (ACTIVE_INDEX, Fallback::Int(0)),
];

const EVENTS: &[&str] = &[
    "click",
    "dblclick",
    "mousedown",
    "mousemove",
    "mouseout",
    "mouseover",
    "mouseup",
    "slide",
    "slid",
];

/// An empty carousel node with its defaults installed.
pub fn new() -> Node {
    Node::new(Kind::Carousel).with_fallbacks(FALLBACKS)
}

/// Renders `Kind::Carousel`.
///
/// Markup, in order: the root `div` carrying the data attributes, an
/// indicator list, the `carousel-inner` container holding the children,
/// then the previous/next controls. Indicators and controls are omitted
/// when the carousel is disabled.
///
/// Item children get their active flag from `activeIndex` just before
/// emission. Indicator and control children are claimed: declaring any of
/// them replaces the corresponding default markup entirely.
pub struct CarouselRenderer {
    indicators: Delegation,
    controls: Delegation,
}

impl Default for CarouselRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl CarouselRenderer {
    pub fn new() -> Self {
        Self {
            indicators: Delegation::new(Kind::Indicator, default_indicators),
            controls: Delegation::new(Kind::Control, default_controls),
        }
    }

    /// Replace the indicator region's delegation.
    pub fn with_indicators(mut self, indicators: Delegation) -> Self {
        self.indicators = indicators;
        self
    }

    /// Replace the control region's delegation.
    pub fn with_controls(mut self, controls: Delegation) -> Self {
        self.controls = controls;
        self
    }
}

/// Mark the item at `activeIndex` active and every other item inactive.
/// Indicator children are numbered and flagged the same way.
///
/// Only items are counted, so other children between them do not shift
/// the index. A negative or out-of-range index leaves no item active.
pub fn assign_active(node: &mut Node) {
    let active = node.attrs().int(ACTIVE_INDEX).unwrap_or(0);
    for (index, item) in node.children_of_kind_mut(Kind::Item).enumerate() {
        item.set_active(index as i64 == active);
    }
    for (index, indicator) in node.children_of_kind_mut(Kind::Indicator).enumerate() {
        indicator.set_slot(Some(index));
        indicator.set_active(slide_to(indicator) == active);
    }
}

/// The item an indicator jumps to: the declared `slideTo`, else its slot.
fn slide_to(indicator: &Node) -> i64 {
    indicator
        .attrs()
        .int(SLIDE_TO)
        .or(indicator.slot().map(|s| s as i64))
        .unwrap_or(0)
}

impl Renderer for CarouselRenderer {
    fn begin(&self, cx: &mut RenderContext<'_>, node: &mut Node) -> Result<(), RenderError> {
        let id = cx.client_id().to_string();
        let attrs = node.attrs();
        let class = ClassList::new("carousel")
            .modifier(attrs.flag(SLIDE), "slide")
            .style_class(attrs.text(names::STYLE_CLASS))
            .responsive(cx.responsive(node))
            .build();

        cx.writer().start_element("div")?;
        cx.writer().write_attribute("id", &id)?;
        cx.tooltip(node)?;
        cx.events(node, EVENTS)?;

        let interval = attrs.get(INTERVAL).map(|v| v.to_text());
        let w = cx.writer();
        w.write_attribute_opt("data-interval", interval.as_deref())?;
        w.write_attribute_opt("data-pause", attrs.text(PAUSE))?;
        w.write_attribute("data-wrap", &attrs.flag(WRAP).to_string())?;
        if attrs.flag(START_ANIMATION) {
            w.write_attribute("data-ride", "carousel")?;
        }
        w.write_attribute_opt("style", attrs.text(names::STYLE))?;
        w.write_attribute("class", &class)?;

        assign_active(node);

        if !node.is_disabled() && node.attrs().flag(SHOW_INDICATORS) {
            cx.writer().start_element("ol")?;
            cx.writer().write_attribute("class", "carousel-indicators")?;
            self.indicators.render(cx, node)?;
            cx.writer().end_element("ol")?;
        }

        let w = cx.writer();
        w.start_element("div")?;
        w.write_attribute("class", "carousel-inner")?;
        w.write_attribute("role", "listbox")
    }

    fn end(&self, cx: &mut RenderContext<'_>, node: &mut Node) -> Result<(), RenderError> {
        cx.writer().end_element("div")?;
        if !node.is_disabled() && node.attrs().flag(SHOW_CONTROLS) {
            self.controls.render(cx, node)?;
        }
        cx.writer().end_element("div")?;
        cx.activate(node);
        Ok(())
    }

    fn delegates(&self, kind: Kind) -> bool {
        kind == self.indicators.kind() || kind == self.controls.kind()
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

/// One `<li>` per item, the active one flagged.
fn default_indicators(cx: &mut RenderContext<'_>, carousel: &Node) -> Result<(), RenderError> {
    let target = format!("#{}", cx.client_id());
    let active = carousel.attrs().int(ACTIVE_INDEX).unwrap_or(0);
    for index in 0..carousel.children_of_kind(Kind::Item).count() {
        let w = cx.writer();
        w.start_element("li")?;
        w.write_attribute("data-target", &target)?;
        w.write_attribute("data-slide-to", &index.to_string())?;
        if index as i64 == active {
            w.write_attribute("class", "active")?;
        }
        w.end_element("li")?;
    }
    Ok(())
}

/// Previous and next links targeting the carousel.
fn default_controls(cx: &mut RenderContext<'_>, _carousel: &Node) -> Result<(), RenderError> {
    let target = format!("#{}", cx.client_id());
    for direction in [Direction::Left, Direction::Right] {
        let w = cx.writer();
        w.start_element("a")?;
        w.write_attribute("class", &format!("{} carousel-control", direction.as_str()))?;
        w.write_attribute("href", &target)?;
        w.write_attribute("role", "button")?;
        w.write_attribute("data-slide", direction.slide())?;
        carousel_control::write_glyph(w, direction)?;
        w.end_element("a")?;
    }
    Ok(())
}

/// Renders a custom `Kind::Indicator` child as an `<li>`.
///
/// The carousel numbers indicators and flags the active one before they
/// render; see [`assign_active`].
#[derive(Debug, Default, Clone, Copy)]
pub struct IndicatorRenderer;

impl Renderer for IndicatorRenderer {
    fn begin(&self, cx: &mut RenderContext<'_>, node: &mut Node) -> Result<(), RenderError> {
        let target = format!("#{}", cx.parent_client_id().unwrap_or_default());
        let class = ClassList::new("")
            .modifier(node.is_active(), "active")
            .style_class(node.attrs().text(names::STYLE_CLASS))
            .build();
        let slide_to = slide_to(node);

        let w = cx.writer();
        w.start_element("li")?;
        w.write_attribute("data-target", &target)?;
        w.write_attribute("data-slide-to", &slide_to.to_string())?;
        w.write_attribute_opt("class", Some(&class))?;
        w.write_attribute_opt("style", node.attrs().text(names::STYLE))
    }

    fn end(&self, cx: &mut RenderContext<'_>, _node: &mut Node) -> Result<(), RenderError> {
        cx.writer().end_element("li")
    }
}
