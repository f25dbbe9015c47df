//! Collaborators that decorate a component's markup.
//!
//! Renderers call these at fixed points of their cycle: tooltip and event
//! markers while the start tag is still open, responsive classes while
//! composing `class`, and activation from the end phase. None of them can
//! change what the renderer does next.

use crate::attr::names;
use crate::error::RenderError;
use crate::node::Node;
use crate::writer::MarkupWriter;

/// Ids whose client-side widgets should be activated once the full markup
/// exists. The host turns these into whatever script its page needs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Deferred {
    ids: Vec<String>,
}

impl Deferred {
    pub fn push(&mut self, id: &str) {
        if !self.ids.iter().any(|i| i == id) {
            self.ids.push(id.to_string());
        }
    }

    pub fn ids(&self) -> &[String] {
        &self.ids
    }

    pub fn into_ids(self) -> Vec<String> {
        self.ids
    }
}

/// External capabilities a renderer calls with the current component.
///
/// Every method defaults to doing nothing, so a host only overrides the
/// concerns it actually has.
pub trait Hooks: Send + Sync {
    /// Write tooltip markers on the open start tag.
    fn tooltip(&self, _node: &Node, _w: &mut MarkupWriter<'_>) -> Result<(), RenderError> {
        Ok(())
    }

    /// Write event-binding markers for the renderer's `events`.
    fn events(
        &self,
        _node: &Node,
        _events: &[&str],
        _w: &mut MarkupWriter<'_>,
    ) -> Result<(), RenderError> {
        Ok(())
    }

    /// Responsive classes for the component, appended last to `class`.
    fn responsive(&self, _node: &Node) -> Vec<String> {
        Vec::new()
    }

    /// Called after the component's closing markup is written.
    fn activate(&self, _node: &Node, _client_id: &str, _deferred: &mut Deferred) {}
}

/// Hooks that do nothing.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoHooks;

impl Hooks for NoHooks {}

/// Bootstrap-flavoured markers: tooltip data attributes, inline `on*`
/// handlers and grid classes.
#[derive(Debug, Clone, Copy, Default)]
pub struct BootstrapHooks;

const SIZES: [&str; 4] = ["xs", "sm", "md", "lg"];

impl BootstrapHooks {
    /// The DOM event an abstract event name is bound to.
    fn dom_event(event: &str) -> String {
        match event {
            "valueChange" => "change".to_string(),
            other => other.to_ascii_lowercase(),
        }
    }
}

impl Hooks for BootstrapHooks {
    fn tooltip(&self, node: &Node, w: &mut MarkupWriter<'_>) -> Result<(), RenderError> {
        let attrs = node.attrs();
        let Some(text) = attrs.text(names::TOOLTIP) else {
            return Ok(());
        };
        w.write_attribute("title", text)?;
        w.write_attribute("data-toggle", "tooltip")?;
        w.write_attribute_opt("data-placement", attrs.text(names::TOOLTIP_POSITION))?;
        if let Some(delay) = attrs.int(names::TOOLTIP_DELAY) {
            w.write_attribute("data-delay", &delay.to_string())?;
        }
        Ok(())
    }

    fn events(
        &self,
        node: &Node,
        events: &[&str],
        w: &mut MarkupWriter<'_>,
    ) -> Result<(), RenderError> {
        // Several abstract events can share one DOM handler.
        let mut handlers: Vec<(String, String)> = Vec::new();
        for event in events {
            let Some(script) = node.attrs().text(&format!("on{event}")) else {
                continue;
            };
            let attr = format!("on{}", Self::dom_event(event));
            match handlers.iter_mut().find(|(a, _)| *a == attr) {
                Some((_, existing)) => {
                    existing.push(';');
                    existing.push_str(script);
                }
                None => handlers.push((attr, script.to_string())),
            }
        }
        for (attr, script) in &handlers {
            w.write_attribute(attr, script)?;
        }
        Ok(())
    }

    fn responsive(&self, node: &Node) -> Vec<String> {
        let attrs = node.attrs();
        let mut classes = Vec::new();
        for size in SIZES {
            let col = format!("col{}", capitalize(size));
            let span = attrs
                .int(&col)
                .or_else(|| (size == "md").then(|| attrs.int("span")).flatten());
            if let Some(n) = span.filter(|n| (1..=12).contains(n)) {
                classes.push(format!("col-{size}-{n}"));
            }
        }
        for size in SIZES {
            let offset = format!("offset{}", capitalize(size));
            if let Some(n) = attrs.int(&offset).filter(|n| (0..=12).contains(n)) {
                classes.push(format!("col-{size}-offset-{n}"));
            }
        }
        for (attr, prefix) in [("hidden", "hidden"), ("visible", "visible")] {
            if let Some(sizes) = attrs.text(attr) {
                classes.extend(
                    sizes
                        .split([' ', ','])
                        .filter(|s| SIZES.contains(s))
                        .map(|s| format!("{prefix}-{s}")),
                );
            }
        }
        classes
    }

    fn activate(&self, node: &Node, client_id: &str, deferred: &mut Deferred) {
        if node.attrs().is_set(names::TOOLTIP) {
            deferred.push(client_id);
        }
    }
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_ascii_uppercase().to_string() + chars.as_str(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::node::Kind;

    fn start_tag(node: &Node, f: impl FnOnce(&Node, &mut MarkupWriter<'_>)) -> String {
        let mut buf: Vec<u8> = Vec::new();
        let mut w = MarkupWriter::new(&mut buf);
        w.start_element("div").unwrap();
        f(node, &mut w);
        w.end_element("div").unwrap();
        w.finish().unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn tooltip_markers_follow_attributes() {
        let node = Node::new(Kind::Carousel)
            .with_attr("tooltip", "Slides")
            .with_attr("tooltipPosition", "top");
        let out = start_tag(&node, |n, w| BootstrapHooks.tooltip(n, w).unwrap());
        assert_eq!(
            out,
            r#"<div title="Slides" data-toggle="tooltip" data-placement="top"></div>"#
        );
    }

    #[test]
    fn no_tooltip_no_markers() {
        let node = Node::new(Kind::Carousel);
        let out = start_tag(&node, |n, w| BootstrapHooks.tooltip(n, w).unwrap());
        assert_eq!(out, "<div></div>");
    }

    #[test]
    fn events_only_for_declared_names_and_merged_per_dom_event() {
        let node = Node::new(Kind::Checkbox)
            .with_attr("onchange", "a()")
            .with_attr("onvalueChange", "b()")
            .with_attr("onclick", "c()")
            .with_attr("onslide", "ignored()");
        let out = start_tag(&node, |n, w| {
            BootstrapHooks
                .events(n, &["change", "valueChange", "click"], w)
                .unwrap()
        });
        assert_eq!(out, r#"<div onchange="a();b()" onclick="c()"></div>"#);
    }

    #[test]
    fn responsive_classes_in_size_order() {
        let node = Node::new(Kind::Carousel)
            .with_attr("colLg", 4)
            .with_attr("span", 6)
            .with_attr("offsetXs", 1)
            .with_attr("hidden", "xs sm")
            .with_attr("colSm", 99);
        assert_eq!(
            BootstrapHooks.responsive(&node),
            vec!["col-md-6", "col-lg-4", "col-xs-offset-1", "hidden-xs", "hidden-sm"]
        );
    }

    #[test]
    fn activation_queues_tooltip_owners_once() {
        let node = Node::new(Kind::Caption).with_attr("tooltip", "t");
        let mut deferred = Deferred::default();
        BootstrapHooks.activate(&node, "cap", &mut deferred);
        BootstrapHooks.activate(&node, "cap", &mut deferred);
        BootstrapHooks.activate(&Node::new(Kind::Item), "item", &mut deferred);
        assert_eq!(deferred.ids(), &["cap".to_string()]);
    }

    #[test]
    fn no_hooks_is_silent() {
        let node = Node::new(Kind::Carousel).with_attr("tooltip", "x");
        let out = start_tag(&node, |n, w| {
            NoHooks.tooltip(n, w).unwrap();
            NoHooks.events(n, &["click"], w).unwrap();
        });
        assert_eq!(out, "<div></div>");
        assert!(NoHooks.responsive(&node).is_empty());
    }
}
