//! Iterator decorators that redraw a progress line on every advancement.
//!
//! This module provides the [`ProgressIteratorExt`] trait, which adds helper
//! methods to any Rust [`Iterator`], plus free constructors for wrapping
//! iterables and counting ranges directly.
//!
//! # Heuristics
//!
//! The adapters check [`Iterator::size_hint`]:
//! * If the iterator reports an exact size (lower bound equals upper bound), a
//!   **bar** is drawn with that total.
//! * Otherwise a **counter** is drawn (`|<n> it`).
//!
//! # Semantics
//!
//! One frame is drawn per element yielded, after the underlying iterator has
//! advanced, and none for the initial position: the display reads "N steps
//! done so far", never "about to process step N". Exhausting the iterator
//! draws nothing further, and the yielded values pass through unchanged.
//!
//! # Example
//!
//! ```ignore
//! use inline_progress::ProgressIteratorExt;
//!
//! // Draws a bar on stdout because the vec length is known.
//! for item in vec![1, 2, 3].into_iter().progress() {
//!     // ...
//! }
//! println!(); // move off the progress line
//! ```

use std::{
    io::{self, Stdout, Write},
    ops::Range,
};

use crate::render::ProgressLine;

/// An iterator adapter that forwards iteration to an underlying iterator while
/// redrawing an owned [`ProgressLine`] once per yielded element.
///
/// Iteration is single-pass and forward-only; there is no rewind and no way to
/// restart a finished adapter. Breaking out of the consuming loop simply stops
/// the redraws.
pub struct ProgressIter<I, W = Stdout> {
    iter: I,
    line: ProgressLine<W>,
}

impl<I, W: Write> ProgressIter<I, W> {
    /// Creates a new `ProgressIter` from an iterator and a configured line.
    ///
    /// Note: this is usually constructed via [`ProgressIteratorExt`] methods
    /// or the free functions in this module.
    pub fn new(iter: I, line: ProgressLine<W>) -> Self {
        Self { iter, line }
    }

    /// Returns a view of the owned progress line.
    #[must_use]
    pub fn line(&self) -> &ProgressLine<W> {
        &self.line
    }

    /// Consumes the adapter, returning the inner iterator and the line.
    pub fn into_parts(self) -> (I, ProgressLine<W>) {
        (self.iter, self.line)
    }
}

impl<I: Iterator, W: Write> Iterator for ProgressIter<I, W> {
    type Item = I::Item;

    fn next(&mut self) -> Option<Self::Item> {
        let item = self.iter.next();

        if item.is_some() {
            // A broken sink must not interrupt the caller's loop; the display
            // goes stale but the values keep flowing.
            let _ = self.line.render();
        }

        item
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.iter.size_hint()
    }
}

/// Extension trait to attach a progress display to any [`Iterator`].
pub trait ProgressIteratorExt: Sized {
    /// Wraps the iterator, drawing to standard output.
    ///
    /// Uses [`total_from_size_hint`](Self::total_from_size_hint) to choose
    /// between bar and counter mode.
    fn progress(self) -> ProgressIter<Self>;

    /// Wraps the iterator, drawing to the given sink.
    fn progress_to<W: Write>(self, sink: W) -> ProgressIter<Self, W>;

    /// Wraps the iterator using an existing, pre-configured [`ProgressLine`].
    ///
    /// The line's total is left as configured; no size-hint seeding happens.
    fn progress_with<W: Write>(self, line: ProgressLine<W>) -> ProgressIter<Self, W>;

    /// Returns the exact remaining length, if `size_hint` reports one.
    fn total_from_size_hint(&self) -> Option<u64>;
}

impl<I: Iterator> ProgressIteratorExt for I {
    fn progress(self) -> ProgressIter<Self> {
        self.progress_to(io::stdout())
    }

    fn progress_to<W: Write>(self, sink: W) -> ProgressIter<Self, W> {
        let total = self.total_from_size_hint();
        ProgressIter::new(self, ProgressLine::new(total, sink))
    }

    fn progress_with<W: Write>(self, line: ProgressLine<W>) -> ProgressIter<Self, W> {
        ProgressIter::new(self, line)
    }

    fn total_from_size_hint(&self) -> Option<u64> {
        let (lower, upper) = self.size_hint();
        // Only an exact size seeds bar mode; a loose or missing upper bound
        // means the length is unknown.
        match upper {
            Some(upper) if upper == lower => Some(upper as u64),
            _ => None,
        }
    }
}

/// Wraps any finite iterable in a [`ProgressIter`] drawing to standard output.
///
/// Equivalent to `iterable.into_iter().progress()`.
pub fn progress<I: IntoIterator>(iterable: I) -> ProgressIter<I::IntoIter> {
    iterable.into_iter().progress()
}

/// Wraps any finite iterable in a [`ProgressIter`] drawing to `sink`.
pub fn progress_to<I: IntoIterator, W: Write>(iterable: I, sink: W) -> ProgressIter<I::IntoIter, W> {
    iterable.into_iter().progress_to(sink)
}

/// Decorates the counting sequence `0..n`, drawing to standard output.
///
/// The common case of progress-decorating a fixed number of repetitions:
///
/// ```ignore
/// for _ in inline_progress::progress_range(100) {
///     // one unit of work
/// }
/// println!();
/// ```
pub fn progress_range(n: u64) -> ProgressIter<Range<u64>> {
    (0..n).progress()
}

/// Decorates the counting sequence `0..n`, drawing to `sink`.
pub fn progress_range_to<W: Write>(n: u64, sink: W) -> ProgressIter<Range<u64>, W> {
    (0..n).progress_to(sink)
}

#[cfg(test)]
mod tests {
    use crate::render::ProgressLine;

    use super::{progress_range_to, progress_to, ProgressIteratorExt as _};

    fn frames(buf: &[u8]) -> Vec<String> {
        let text = String::from_utf8(buf.to_vec()).unwrap();
        text.split('\r')
            .filter(|s| !s.is_empty())
            .map(str::to_owned)
            .collect()
    }

    /// Pass-Through
    /// The decorator yields exactly the same elements, in the same order, and
    /// draws exactly one frame per element.
    #[test]
    fn test_yields_unchanged_one_frame_each() {
        let data = [1, 2, 3, 4, 5];
        let mut buf = Vec::new();
        let mut seen = Vec::new();

        let mut iter = data.iter().copied().progress_to(&mut buf);
        for item in iter.by_ref() {
            seen.push(item);
        }

        assert_eq!(seen, data);
        assert_eq!(iter.line().get_completed(), 5);
        assert_eq!(
            iter.line().get_total(),
            Some(5),
            "exact size_hint should seed bar mode"
        );
        drop(iter);
        assert_eq!(frames(&buf).len(), 5);
    }

    /// Empty Input
    /// Zero elements means zero frames and no division by zero.
    #[test]
    fn test_empty_sequence_draws_nothing() {
        let mut buf = Vec::new();

        let mut iter = progress_range_to(0, &mut buf);
        assert_eq!(iter.next(), None);
        assert_eq!(iter.line().get_completed(), 0);

        drop(iter);
        assert!(buf.is_empty());
    }

    /// Exhaustion
    /// Further `next` calls after the end keep returning `None` and draw
    /// nothing extra.
    #[test]
    fn test_no_frames_after_exhaustion() {
        let mut buf = Vec::new();

        let mut iter = progress_range_to(2, &mut buf);
        while iter.next().is_some() {}
        assert_eq!(iter.next(), None);
        assert_eq!(iter.next(), None);
        assert_eq!(iter.line().get_completed(), 2);

        drop(iter);
        assert_eq!(frames(&buf).len(), 2);
    }

    /// Counter Fallback
    /// An inexact size hint falls back to counter mode; the second frame
    /// reads `|2 it`.
    #[test]
    fn test_inexact_size_hint_uses_counter() {
        let mut buf = Vec::new();

        let inner = (0..5).filter(|_| true); // size_hint (0, Some(5))
        assert_eq!(inner.total_from_size_hint(), None);

        let mut iter = inner.progress_to(&mut buf);
        iter.next();
        iter.next();

        drop(iter);
        assert_eq!(frames(&buf), ["|1 it", "|2 it"]);
    }

    /// Pre-Configured Line
    /// `progress_with` respects the supplied line instead of the size hint.
    #[test]
    fn test_progress_with_keeps_line_config() {
        let mut buf = Vec::new();

        let line = ProgressLine::new(None, &mut buf);
        let mut iter = (0..3).progress_with(line);
        iter.next();

        let (_, line) = iter.into_parts();
        assert_eq!(line.get_total(), None);
        assert_eq!(line.get_completed(), 1);
    }

    /// Bar Frames Through Iteration
    /// The concrete scenario: 0..5 at width 40, third frame is 24 glyphs.
    #[test]
    fn test_range_bar_frames() {
        let mut buf = Vec::new();

        let iter = progress_range_to(5, &mut buf);
        for _ in iter {}

        let frames = frames(&buf);
        assert_eq!(frames[2], format!("|{}{}|", "#".repeat(24), " ".repeat(16)));
        assert_eq!(frames[4], format!("|{}|", "#".repeat(40)));
    }

    /// Size Hint Forwarding
    /// The adapter is transparent to downstream size queries.
    #[test]
    fn test_size_hint_forwarded() {
        let iter = progress_to(0..7, Vec::new());
        assert_eq!(iter.size_hint(), (7, Some(7)));
    }
}
