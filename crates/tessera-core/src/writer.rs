//! Streaming markup writer over an append-only sink.

use crate::error::RenderError;
use crate::escape::{escape_attr, escape_text};
use std::io::Write;

/// Elements that never have content and are written as `<tag ... />`.
const VOID_ELEMENTS: &[&str] = &["br", "hr", "img", "input", "link", "meta"];

/// Writes elements, attributes and text to a sink in call order.
///
/// A start tag stays open for attributes until the next element, text or
/// end tag is written, at which point it is closed with `>`. Every
/// [`start_element`](MarkupWriter::start_element) must be matched by an
/// [`end_element`](MarkupWriter::end_element) for the same tag; the writer
/// keeps a stack and reports mismatches instead of emitting broken nesting.
pub struct MarkupWriter<'w> {
    sink: &'w mut dyn Write,
    open: Vec<&'static str>,
    start_pending: bool,
}

impl<'w> MarkupWriter<'w> {
    pub fn new(sink: &'w mut dyn Write) -> Self {
        Self {
            sink,
            open: Vec::new(),
            start_pending: false,
        }
    }

    /// Open `<tag`. Attributes may follow until content is written.
    pub fn start_element(&mut self, tag: &'static str) -> Result<(), RenderError> {
        self.close_start_tag()?;
        write!(self.sink, "<{tag}")?;
        self.open.push(tag);
        self.start_pending = true;
        Ok(())
    }

    /// Write `name="value"` on the pending start tag.
    pub fn write_attribute(&mut self, name: &str, value: &str) -> Result<(), RenderError> {
        if !self.start_pending {
            return Err(RenderError::MisplacedAttribute(name.to_string()));
        }
        write!(self.sink, " {}=\"{}\"", name, escape_attr(value))?;
        Ok(())
    }

    /// Like [`write_attribute`](MarkupWriter::write_attribute), skipping
    /// `None` and empty values.
    pub fn write_attribute_opt(
        &mut self,
        name: &str,
        value: Option<&str>,
    ) -> Result<(), RenderError> {
        match value {
            Some(v) if !v.is_empty() => self.write_attribute(name, v),
            _ => Ok(()),
        }
    }

    /// Write escaped text content.
    pub fn write_text(&mut self, text: &str) -> Result<(), RenderError> {
        self.close_start_tag()?;
        self.sink.write_all(escape_text(text).as_bytes())?;
        Ok(())
    }

    /// Write markup verbatim.
    pub fn write_raw(&mut self, markup: &str) -> Result<(), RenderError> {
        self.close_start_tag()?;
        self.sink.write_all(markup.as_bytes())?;
        Ok(())
    }

    /// Close the innermost open element, which must be `tag`.
    pub fn end_element(&mut self, tag: &'static str) -> Result<(), RenderError> {
        let expected = self.open.pop().ok_or(RenderError::NothingOpen(tag))?;
        if expected != tag {
            self.open.push(expected);
            return Err(RenderError::Unbalanced {
                expected,
                found: tag,
            });
        }
        if self.start_pending {
            self.start_pending = false;
            if VOID_ELEMENTS.contains(&tag) {
                self.sink.write_all(b" />")?;
                return Ok(());
            }
            self.sink.write_all(b">")?;
        }
        write!(self.sink, "</{tag}>")?;
        Ok(())
    }

    /// Number of currently open elements.
    pub fn depth(&self) -> usize {
        self.open.len()
    }

    /// Check that everything is closed and flush the sink.
    pub fn finish(mut self) -> Result<(), RenderError> {
        if let Some(tag) = self.open.last() {
            return Err(RenderError::Unclosed(*tag));
        }
        self.sink.flush()?;
        Ok(())
    }

    fn close_start_tag(&mut self) -> Result<(), RenderError> {
        if self.start_pending {
            self.start_pending = false;
            self.sink.write_all(b">")?;
        }
        Ok(())
    }
}
