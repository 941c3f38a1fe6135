//! I/O decorators that redraw a progress line as data flows through.
//!
//! This module provides [`ProgressReader`] and [`ProgressWriter`], which wrap
//! any implementation of [`std::io::Read`] or [`std::io::Write`] and tick an
//! owned [`ProgressLine`] once per successful non-empty read or write call.
//!
//! Progress is counted in chunks rather than bytes, matching the
//! one-frame-per-advancement model of the iterator decorator. Since chunk
//! counts rarely have a meaningful total, counter mode is the usual fit here.
//!
//! Draw failures are discarded: a broken terminal must not corrupt the data
//! stream being decorated.

use std::io::{Read, Result, Write};

use crate::render::ProgressLine;

/// A wrapper around [`Read`] that ticks a [`ProgressLine`] per non-empty read.
pub struct ProgressReader<R, S = std::io::Stdout> {
    inner: R,
    line: ProgressLine<S>,
}

impl<R, S: Write> ProgressReader<R, S> {
    /// Creates a new `ProgressReader` wrapping `inner` with the given line.
    pub fn new(inner: R, line: ProgressLine<S>) -> Self {
        Self { inner, line }
    }

    /// Returns a view of the owned progress line.
    #[must_use]
    pub fn line(&self) -> &ProgressLine<S> {
        &self.line
    }

    /// Consumes the wrapper, returning the inner reader and the line.
    pub fn into_parts(self) -> (R, ProgressLine<S>) {
        (self.inner, self.line)
    }
}

impl<R: Read, S: Write> Read for ProgressReader<R, S> {
    fn read(&mut self, buf: &mut [u8]) -> Result<usize> {
        let n = self.inner.read(buf)?;
        if n > 0 {
            let _ = self.line.render();
        }
        Ok(n)
    }
}

/// A wrapper around [`Write`] that ticks a [`ProgressLine`] per non-empty write.
pub struct ProgressWriter<W, S = std::io::Stdout> {
    inner: W,
    line: ProgressLine<S>,
}

impl<W, S: Write> ProgressWriter<W, S> {
    /// Creates a new `ProgressWriter` wrapping `inner` with the given line.
    pub fn new(inner: W, line: ProgressLine<S>) -> Self {
        Self { inner, line }
    }

    /// Returns a view of the owned progress line.
    #[must_use]
    pub fn line(&self) -> &ProgressLine<S> {
        &self.line
    }

    /// Consumes the wrapper, returning the inner writer and the line.
    pub fn into_parts(self) -> (W, ProgressLine<S>) {
        (self.inner, self.line)
    }
}

impl<W: Write, S: Write> Write for ProgressWriter<W, S> {
    fn write(&mut self, buf: &[u8]) -> Result<usize> {
        let n = self.inner.write(buf)?;
        if n > 0 {
            let _ = self.line.render();
        }
        Ok(n)
    }

    fn flush(&mut self) -> Result<()> {
        self.inner.flush()
    }
}
