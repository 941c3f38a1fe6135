//! Fluent interface for constructing [`ProgressLine`] instances.
//!
//! While default lines can be created via [`ProgressLine::new_bar`] or
//! [`ProgressLine::new_counter`], the [`ProgressLineBuilder`] covers the
//! non-default cases: a custom column width, a different fill glyph, or a
//! caller-supplied sink instead of standard output.

use std::io::{self, Stdout, Write};

use crate::render::{ProgressLine, DEFAULT_GLYPH, DEFAULT_WIDTH};

/// A builder for [`ProgressLine`] instances with non-default configuration.
///
/// # Example
///
/// ```
/// use inline_progress::ProgressLineBuilder;
///
/// let mut out = Vec::new();
/// let mut line = ProgressLineBuilder::bar(4)
///     .width(8)
///     .glyph('=')
///     .sink(&mut out)
///     .build();
///
/// line.render().unwrap();
/// drop(line);
/// assert_eq!(out, b"|==      |\r");
/// ```
pub struct ProgressLineBuilder<W = Stdout> {
    total: Option<u64>,
    width: usize,
    glyph: char,
    sink: W,
}

impl ProgressLineBuilder<Stdout> {
    /// Starts building a bar-mode line with a known `total`.
    #[must_use]
    pub fn bar(total: u64) -> Self {
        Self {
            total: Some(total),
            width: DEFAULT_WIDTH,
            glyph: DEFAULT_GLYPH,
            sink: io::stdout(),
        }
    }

    /// Starts building a counter-mode line (unknown total).
    #[must_use]
    pub fn counter() -> Self {
        Self {
            total: None,
            width: DEFAULT_WIDTH,
            glyph: DEFAULT_GLYPH,
            sink: io::stdout(),
        }
    }
}

impl<W: Write> ProgressLineBuilder<W> {
    /// Sets the number of bar columns between the delimiters.
    #[must_use]
    pub fn width(mut self, width: usize) -> Self {
        self.width = width;
        self
    }

    /// Sets the glyph used for filled columns.
    #[must_use]
    pub fn glyph(mut self, glyph: char) -> Self {
        self.glyph = glyph;
        self
    }

    /// Replaces the output sink, changing the builder's sink type.
    #[must_use]
    pub fn sink<W2: Write>(self, sink: W2) -> ProgressLineBuilder<W2> {
        ProgressLineBuilder {
            total: self.total,
            width: self.width,
            glyph: self.glyph,
            sink,
        }
    }

    /// Consumes the builder and returns the constructed [`ProgressLine`].
    #[must_use]
    pub fn build(self) -> ProgressLine<W> {
        ProgressLine {
            total: self.total,
            width: self.width,
            glyph: self.glyph,
            completed: 0,
            sink: self.sink,
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::render::{ProgressMode, DEFAULT_GLYPH, DEFAULT_WIDTH};

    use super::ProgressLineBuilder;

    /// Defaults
    /// An unconfigured builder matches the documented defaults.
    #[test]
    fn test_defaults() {
        let line = ProgressLineBuilder::bar(10).sink(Vec::new()).build();

        assert_eq!(line.get_total(), Some(10));
        assert_eq!(line.get_width(), DEFAULT_WIDTH);
        assert_eq!(line.get_glyph(), DEFAULT_GLYPH);
        assert_eq!(line.get_completed(), 0);
    }

    /// Custom Geometry
    /// Width and glyph configuration show up in the rendered frame.
    #[test]
    fn test_custom_width_and_glyph() {
        let mut line = ProgressLineBuilder::bar(2)
            .width(10)
            .glyph('*')
            .sink(Vec::new())
            .build();

        line.render().unwrap();
        line.render().unwrap();

        let out = String::from_utf8(line.into_sink()).unwrap();
        assert_eq!(out, "|*****     |\r|**********|\r");
    }

    /// Counter Entry Point
    #[test]
    fn test_counter_builder() {
        let line = ProgressLineBuilder::counter().sink(Vec::new()).build();
        assert_eq!(line.mode(), ProgressMode::Counter);
        assert_eq!(line.get_total(), None);
    }
}
