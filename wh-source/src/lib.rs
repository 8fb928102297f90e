//! Source code representation and position lookup.

use std::{fmt, ops::Range};

/// A byte range into [`Source::content`].
pub type Span = Range<usize>;

/// Represents source code.
pub struct Source<'a> {
    /// Display name of the source (usually a file path).
    pub name: Option<&'a str>,
    /// Original source code.
    pub content: &'a str,
    /// Byte offset of the first character of every line.
    line_starts: Vec<usize>,
}

impl<'a> Source<'a> {
    /// Create a new anonymous `Source` with the specified `content`.
    pub fn new(content: &'a str) -> Self {
        let line_starts = std::iter::once(0)
            .chain(content.match_indices('\n').map(|(i, _)| i + 1))
            .collect();
        Self {
            name: None,
            content,
            line_starts,
        }
    }

    /// Create a new `Source` that reports itself as `name` in diagnostics.
    pub fn named(name: &'a str, content: &'a str) -> Self {
        Self {
            name: Some(name),
            ..Self::new(content)
        }
    }

    /// Returns the 1-based line and column of the byte `offset`.
    /// Offsets past the end of the content are clamped to the end.
    pub fn location(&self, offset: usize) -> Location {
        let mut offset = offset.min(self.content.len());
        while !self.content.is_char_boundary(offset) {
            offset -= 1;
        }

        // line_starts[0] is always 0 so the partition point is at least 1.
        let index = self.line_starts.partition_point(|&start| start <= offset) - 1;
        let line_start = self.line_starts[index];
        Location {
            line: index + 1,
            column: self.content[line_start..offset].chars().count() + 1,
        }
    }

    /// Returns the text of the 1-based line `line`, without its terminator.
    pub fn line(&self, line: usize) -> Option<&'a str> {
        let start = *self.line_starts.get(line.checked_sub(1)?)?;
        let end = self
            .line_starts
            .get(line)
            .copied()
            .unwrap_or(self.content.len());
        let text = &self.content[start..end];
        let text = text.strip_suffix('\n').unwrap_or(text);
        Some(text.strip_suffix('\r').unwrap_or(text))
    }

    /// Renders the line containing `span.start` with a caret underline below the span.
    pub fn snippet(&self, span: Span) -> String {
        let location = self.location(span.start);
        let line = self.line(location.line).unwrap_or_default();

        let underline_len = self
            .content
            .get(span.clone())
            .map(|text| text.lines().next().unwrap_or_default().chars().count())
            .unwrap_or(0)
            .max(1);

        let gutter = location.line.to_string();
        format!(
            "{gutter} | {line}\n{pad} | {spaces}{carets}",
            gutter = gutter,
            line = line,
            pad = " ".repeat(gutter.len()),
            spaces = " ".repeat(location.column - 1),
            carets = "^".repeat(underline_len),
        )
    }
}

impl<'a> From<&'a str> for Source<'a> {
    fn from(content: &'a str) -> Self {
        Source::new(content)
    }
}

impl fmt::Debug for Source<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Source")
            .field("name", &self.name)
            .field("len", &self.content.len())
            .field("lines", &self.line_starts.len())
            .finish()
    }
}

/// A 1-based line and column position (columns count characters, not bytes).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Location {
    pub line: usize,
    pub column: usize,
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}
