//! The built-in formats, looked up by name or by file extension.

use crate::error::FormatError;
use crate::format::Format;
use crate::formats::{HtmlFormat, JsonFormat, MarkdownFormat, TagFormat, TreevizFormat};
use marklet_core::Document;
use std::collections::HashMap;
use std::path::Path;

/// Formats kept sorted by name.
pub struct FormatRegistry {
    formats: Vec<Box<dyn Format>>,
}

impl FormatRegistry {
    fn empty() -> Self {
        FormatRegistry {
            formats: Vec::new(),
        }
    }

    /// Add `format`, replacing one of the same name.
    fn register(&mut self, format: impl Format + 'static) {
        self.formats.retain(|known| known.name() != format.name());
        let at = self
            .formats
            .partition_point(|known| known.name() < format.name());
        self.formats.insert(at, Box::new(format));
    }

    pub fn lookup(&self, name: &str) -> Result<&dyn Format, FormatError> {
        self.formats
            .iter()
            .map(Box::as_ref)
            .find(|format| format.name() == name)
            .ok_or_else(|| FormatError::FormatNotFound(name.to_string()))
    }

    /// Every format, by name.
    pub fn formats(&self) -> impl Iterator<Item = &dyn Format> {
        self.formats.iter().map(Box::as_ref)
    }

    /// The format claiming `path`'s extension. Extensions compare case-sensitively.
    pub fn detect(&self, path: impl AsRef<Path>) -> Option<&str> {
        let extension = path.as_ref().extension()?.to_str()?;
        self.formats()
            .find(|format| format.file_extensions().contains(&extension))
            .map(|format| format.name())
    }

    pub fn read(&self, source: &str, format: &str) -> Result<Document, FormatError> {
        let reader = self.lookup(format)?;
        tracing::debug!(format, bytes = source.len(), "reading");
        reader.parse(source)
    }

    pub fn write(
        &self,
        doc: &Document,
        format: &str,
        options: &HashMap<String, String>,
    ) -> Result<String, FormatError> {
        let writer = self.lookup(format)?;
        tracing::debug!(format, blocks = doc.blocks.len(), "writing");
        writer.serialize_with_options(doc, options)
    }

    /// Read `source` as `from` and write it out as `to`.
    pub fn convert(
        &self,
        source: &str,
        from: &str,
        to: &str,
        options: &HashMap<String, String>,
    ) -> Result<String, FormatError> {
        // Fail on an unknown target before doing any work
        self.lookup(to)?;
        let doc = self.read(source, from)?;
        self.write(&doc, to, options)
    }
}

impl Default for FormatRegistry {
    fn default() -> Self {
        let mut registry = Self::empty();
        registry.register(MarkdownFormat);
        registry.register(HtmlFormat::default());
        registry.register(JsonFormat);
        registry.register(TagFormat);
        registry.register(TreevizFormat);
        registry
    }
}
