//! Boolean checkbox input with an inline caption.

use tessera_core::attr::{names, Fallback, Fallbacks};
use tessera_core::{ClassList, Kind, Node, RenderContext, RenderError, Renderer};

/// Text shown next to the box.
pub const CAPTION: &str = "caption";

const FALLBACKS: Fallbacks = &[(names::VALUE, Fallback::Bool(false))];

const EVENTS: &[&str] = &[
    "blur",
    "change",
    "valueChange",
    "click",
    "dblclick",
    "focus",
    "keydown",
    "keypress",
    "keyup",
    "mousedown",
    "mousemove",
    "mouseout",
    "mouseover",
    "mouseup",
    "select",
];

const ASSETS: &[&str] = &["bsf.css", "core.css"];

pub fn new() -> Node {
    Node::new(Kind::Checkbox).with_fallbacks(FALLBACKS)
}

/// Renders `Kind::Checkbox`.
///
/// The outer `div` carries the id, tooltip and classes; the `<input>` gets
/// the event bindings and an id derived from the outer one. Children are
/// placed inside the label, after the caption.
#[derive(Debug, Default, Clone, Copy)]
pub struct CheckboxRenderer;

impl CheckboxRenderer {
    /// Id of the `<input>` inside the checkbox with client id `id`.
    pub fn input_id(id: &str) -> String {
        format!("input_{id}")
    }
}

impl Renderer for CheckboxRenderer {
    fn begin(&self, cx: &mut RenderContext<'_>, node: &mut Node) -> Result<(), RenderError> {
        let id = cx.client_id().to_string();
        let input_id = Self::input_id(&id);
        let attrs = node.attrs();
        let disabled = node.is_disabled();
        let class = ClassList::new("checkbox")
            .modifier(disabled, "disabled")
            .style_class(attrs.text(names::STYLE_CLASS))
            .responsive(cx.responsive(node))
            .build();

        let w = cx.writer();
        w.start_element("div")?;
        w.write_attribute("id", &id)?;
        cx.tooltip(node)?;
        let w = cx.writer();
        w.write_attribute_opt("style", attrs.text(names::STYLE))?;
        w.write_attribute("class", &class)?;
        w.start_element("label")?;

        w.start_element("input")?;
        w.write_attribute("type", "checkbox")?;
        w.write_attribute("id", &input_id)?;
        w.write_attribute("name", &input_id)?;
        if attrs.flag(names::VALUE) {
            w.write_attribute("checked", "checked")?;
        }
        if disabled {
            w.write_attribute("disabled", "disabled")?;
        }
        cx.events(node, EVENTS)?;
        cx.writer().end_element("input")?;

        if let Some(caption) = attrs.text(CAPTION) {
            cx.writer().write_text(" ")?;
            cx.writer().write_text(caption)?;
        }
        Ok(())
    }

    fn end(&self, cx: &mut RenderContext<'_>, node: &mut Node) -> Result<(), RenderError> {
        cx.writer().end_element("label")?;
        cx.writer().end_element("div")?;
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
        Some("valueChange")
    }

    fn assets(&self) -> &'static [&'static str] {
        ASSETS
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tessera_core::testing::TestRender;
    use tessera_core::BootstrapHooks;

    #[test]
    fn unchecked_with_caption() {
        let mut t = TestRender::new(crate::registry().unwrap());
        let mut node = new().with_id("agree").with_attr(CAPTION, "I agree");
        assert_eq!(
            t.render(&mut node),
            concat!(
                r#"<div id="agree" class="checkbox"><label>"#,
                r#"<input type="checkbox" id="input_agree" name="input_agree" />"#,
                " I agree</label></div>"
            )
        );
    }

    #[test]
    fn checked_disabled_with_handlers() {
        let mut t = TestRender::with_hooks(crate::registry().unwrap(), BootstrapHooks);
        let mut node = new()
            .with_id("form:opt")
            .with_attr("value", true)
            .with_attr("disabled", true)
            .with_attr("onvalueChange", "save()")
            .with_attr("colMd", 6);
        assert_eq!(
            t.render(&mut node),
            concat!(
                r#"<div id="form_opt" class="checkbox disabled col-md-6"><label>"#,
                r#"<input type="checkbox" id="input_form_opt" name="input_form_opt" checked="checked" disabled="disabled" onchange="save()" />"#,
                "</label></div>"
            )
        );
    }

    #[test]
    fn declares_events_and_assets() {
        let r = CheckboxRenderer;
        assert_eq!(r.default_event(), Some("valueChange"));
        assert_eq!(r.event_names().len(), 15);
        assert!(r.event_names().contains(&"valueChange"));
        assert_eq!(r.assets(), &["bsf.css", "core.css"]);
    }
}
