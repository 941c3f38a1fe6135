//! Single-line, in-place rendering of progress state.
//!
//! This module defines [`ProgressLine`], which owns the display state (total,
//! column width, fill glyph, completed count) and an output sink, and knows how
//! to redraw the progress line in place.
//!
//! Every frame ends in a bare carriage return and contains no newline, so
//! repeated calls to [`ProgressLine::render`] overwrite the same terminal line.
//! Callers wanting clean output after the loop should print a trailing newline
//! themselves.
//!
//! # Modes
//!
//! * **Bar** (total known): `|####      |` filled proportionally to
//!   `completed / total`.
//! * **Counter** (total unknown): `|7 it`, a raw count of completed steps.

use std::io::{self, Stdout, Write};

/// Default number of bar columns between the delimiters.
pub const DEFAULT_WIDTH: usize = 40;

/// Default fill glyph for the bar.
pub const DEFAULT_GLYPH: char = '#';

/// Defines the visualization used by a [`ProgressLine`].
#[repr(u8)]
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
#[cfg_attr(
    feature = "rkyv",
    derive(rkyv::Archive, rkyv::Serialize, rkyv::Deserialize)
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "rkyv", rkyv(derive(Debug, Eq, PartialEq)))]
pub enum ProgressMode {
    /// A raw completed-step counter, used when the total is unknown.
    #[default]
    Counter,
    /// A proportionally filled bar, used when the total is known.
    Bar,
}

/// A single-line progress display writing to an output sink.
///
/// `ProgressLine` is deliberately single-threaded: rendering takes `&mut self`,
/// so the type system rules out concurrent draws on one instance. It is
/// constructed once per iteration session, mutated in place on every
/// advancement, and discarded with whatever wraps it.
///
/// The completed count only moves forward; the caller is responsible for not
/// rendering more often than the declared total. If it does anyway, the bar
/// clamps at fully filled rather than overflowing (see [`render`](Self::render)).
pub struct ProgressLine<W = Stdout> {
    /// Total number of expected steps. `None` selects counter mode.
    pub(crate) total: Option<u64>,
    /// Number of bar columns between the delimiters.
    pub(crate) width: usize,
    /// Glyph used for filled columns.
    pub(crate) glyph: char,
    /// Steps completed so far. Incremented by one per render call.
    pub(crate) completed: u64,
    /// Where frames are written.
    pub(crate) sink: W,
}

impl ProgressLine<Stdout> {
    /// Creates a bar-mode line with a known `total`, writing to standard output.
    #[must_use]
    pub fn new_bar(total: u64) -> Self {
        Self::new(Some(total), io::stdout())
    }

    /// Creates a counter-mode line (unknown total), writing to standard output.
    #[must_use]
    pub fn new_counter() -> Self {
        Self::new(None, io::stdout())
    }
}

impl<W: Write> ProgressLine<W> {
    /// Creates a line with default width and glyph, writing to `sink`.
    ///
    /// `Some(total)` selects bar mode, `None` selects counter mode. Use
    /// [`ProgressLineBuilder`](crate::builder::ProgressLineBuilder) for
    /// non-default width or glyph.
    pub fn new(total: Option<u64>, sink: W) -> Self {
        Self {
            total,
            width: DEFAULT_WIDTH,
            glyph: DEFAULT_GLYPH,
            completed: 0,
            sink,
        }
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    /// Returns the rendering mode implied by the configured total.
    #[must_use]
    pub const fn mode(&self) -> ProgressMode {
        match self.total {
            Some(_) => ProgressMode::Bar,
            None => ProgressMode::Counter,
        }
    }

    /// Returns the number of completed steps rendered so far.
    #[must_use]
    pub const fn get_completed(&self) -> u64 {
        self.completed
    }

    /// Returns the configured total, if one is known.
    #[must_use]
    pub const fn get_total(&self) -> Option<u64> {
        self.total
    }

    /// Returns the configured bar width in columns.
    #[must_use]
    pub const fn get_width(&self) -> usize {
        self.width
    }

    /// Returns the configured fill glyph.
    #[must_use]
    pub const fn get_glyph(&self) -> char {
        self.glyph
    }

    /// Checks whether the completed count has reached a known total.
    ///
    /// Always `false` in counter mode.
    #[must_use]
    pub const fn is_complete(&self) -> bool {
        match self.total {
            Some(total) => self.completed >= total,
            None => false,
        }
    }

    /// Consumes the line and returns the sink.
    pub fn into_sink(self) -> W {
        self.sink
    }

    // ========================================================================
    // Rendering
    // ========================================================================

    /// Advances the completed count by one and redraws the line in place.
    ///
    /// Writes exactly one frame to the sink, terminated by a carriage return
    /// and containing no newline, then flushes so partial lines reach the
    /// terminal immediately.
    ///
    /// Edge cases:
    ///
    /// * A total of zero renders a fully filled bar instead of dividing by
    ///   zero (an empty sequence is already complete).
    /// * A completed count past the total clamps the fill at the full width.
    ///
    /// # Errors
    ///
    /// Returns any error the sink reports while writing or flushing. The
    /// completed count still advances; a flaky sink does not stall progress
    /// accounting.
    pub fn render(&mut self) -> io::Result<()> {
        self.completed += 1;

        match self.total {
            Some(total) => {
                let filled = self.filled_columns(total);
                let mut frame = String::with_capacity(self.width * self.glyph.len_utf8() + 3);
                frame.push('|');
                for _ in 0..filled {
                    frame.push(self.glyph);
                }
                for _ in filled..self.width {
                    frame.push(' ');
                }
                frame.push('|');
                frame.push('\r');
                self.sink.write_all(frame.as_bytes())?;
            }
            None => {
                write!(self.sink, "|{} it\r", self.completed)?;
            }
        }

        self.sink.flush()
    }

    /// Number of filled columns for the current completed count.
    ///
    /// Clamped to `[0, width]` so an overrun never produces a negative space
    /// count.
    #[allow(
        clippy::cast_precision_loss,
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss
    )]
    fn filled_columns(&self, total: u64) -> usize {
        if total == 0 {
            return self.width;
        }
        let fraction = self.completed as f64 / total as f64;
        ((fraction * self.width as f64) as usize).min(self.width)
    }

    /// Creates a plain-data snapshot of the current display state.
    #[must_use]
    pub fn snapshot(&self) -> ProgressLineSnapshot {
        self.into()
    }
}

/// A plain-data snapshot of a [`ProgressLine`] at a specific point in time.
///
/// Holds owned data only, so it can outlive the line (and its sink) it was
/// taken from.
#[derive(Clone, Debug, Eq, PartialEq)]
#[cfg_attr(
    feature = "rkyv",
    derive(rkyv::Archive, rkyv::Serialize, rkyv::Deserialize)
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "rkyv", rkyv(derive(Debug, Eq, PartialEq)))]
pub struct ProgressLineSnapshot {
    mode: ProgressMode,
    completed: u64,
    total: Option<u64>,
    width: usize,
    glyph: char,
}

impl<W: Write> From<&ProgressLine<W>> for ProgressLineSnapshot {
    fn from(line: &ProgressLine<W>) -> Self {
        Self {
            mode: line.mode(),
            completed: line.completed,
            total: line.total,
            width: line.width,
            glyph: line.glyph,
        }
    }
}

impl ProgressLineSnapshot {
    /// Returns the rendering mode.
    #[must_use]
    pub const fn mode(&self) -> ProgressMode {
        self.mode
    }

    /// Returns the completed-step count.
    #[must_use]
    pub const fn completed(&self) -> u64 {
        self.completed
    }

    /// Returns the total, if one was known.
    #[must_use]
    pub const fn total(&self) -> Option<u64> {
        self.total
    }

    /// Returns the bar width in columns.
    #[must_use]
    pub const fn width(&self) -> usize {
        self.width
    }

    /// Returns the fill glyph.
    #[must_use]
    pub const fn glyph(&self) -> char {
        self.glyph
    }
}
