//! Literal text content.

use tessera_core::attr::names;
use tessera_core::{Node, RenderContext, RenderError, Renderer};

/// Renders `Kind::Text` as its escaped `value`, with no element around it.
#[derive(Debug, Default, Clone, Copy)]
pub struct TextRenderer;

impl Renderer for TextRenderer {
    fn begin(&self, cx: &mut RenderContext<'_>, node: &mut Node) -> Result<(), RenderError> {
        match node.attrs().get(names::VALUE) {
            Some(value) => cx.writer().write_text(&value.to_text()),
            None => Ok(()),
        }
    }

    fn end(&self, _cx: &mut RenderContext<'_>, _node: &mut Node) -> Result<(), RenderError> {
        Ok(())
    }
}
