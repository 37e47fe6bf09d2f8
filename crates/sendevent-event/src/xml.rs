//! Minimal indenting XML writer.
//!
//! The eventd wire format is small and fixed, so this is a push-style
//! writer rather than a document tree: open/close must be balanced by the
//! caller, which the single call site in `document.rs` guarantees.

use std::fmt::{self, Write};

const INDENT: &str = "  ";

pub(crate) struct XmlWriter {
    buf: String,
    depth: usize,
}

impl XmlWriter {
    pub(crate) fn new() -> Self {
        Self {
            buf: String::new(),
            depth: 0,
        }
    }

    /// Opens a container element on its own line.
    pub(crate) fn open(&mut self, tag: &str) -> fmt::Result {
        self.indent()?;
        writeln!(self.buf, "<{tag}>")?;
        self.depth += 1;
        Ok(())
    }

    /// Closes the innermost container element.
    pub(crate) fn close(&mut self, tag: &str) -> fmt::Result {
        self.depth -= 1;
        self.indent()?;
        writeln!(self.buf, "</{tag}>")
    }

    /// Writes `<tag>text</tag>` on one line, escaping the text.
    pub(crate) fn leaf(&mut self, tag: &str, text: &str) -> fmt::Result {
        self.indent()?;
        writeln!(self.buf, "<{tag}>{}</{tag}>", escape_text(text))
    }

    /// Writes a leaf element whose text is carried in a CDATA section,
    /// with optional attributes on the element.
    pub(crate) fn leaf_cdata(
        &mut self,
        tag: &str,
        attrs: &[(&str, &str)],
        text: &str,
    ) -> fmt::Result {
        self.indent()?;
        write!(self.buf, "<{tag}")?;
        for (name, value) in attrs {
            write!(self.buf, " {name}=\"{}\"", escape_text(value))?;
        }
        writeln!(self.buf, ">{}</{tag}>", cdata(text))
    }

    pub(crate) fn into_string(self) -> String {
        self.buf
    }

    fn indent(&mut self) -> fmt::Result {
        for _ in 0..self.depth {
            self.buf.write_str(INDENT)?;
        }
        Ok(())
    }
}

fn escape_text(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}

/// Wraps `s` in a CDATA section. A literal `]]>` in the payload would
/// terminate the section early, so it is split across two sections.
fn cdata(s: &str) -> String {
    format!("<![CDATA[{}]]>", s.replace("]]>", "]]]]><![CDATA[>"))
}
