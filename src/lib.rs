//! # `inline_progress`
//!
//! A minimal, single-line progress display for iterators.
//!
//! `inline_progress` decorates any finite iterator with a textual progress
//! indicator, drawn in place on one terminal line, without altering the values
//! produced. It is designed to be:
//!
//! * **Transparent**: the wrapped iterator yields exactly the same elements in
//!   the same order; the display is a side effect of advancement.
//! * **Self-seeding**: an exact [`Iterator::size_hint`] selects a filled bar;
//!   anything else falls back to a raw completed-step counter.
//! * **Sink-agnostic**: frames go to any [`std::io::Write`], defaulting to
//!   standard output.
//!
//! Frames end in a bare carriage return and never contain a newline, so each
//! redraw overwrites the previous one. Print a newline after the loop if you
//! want to keep the final frame.
//!
//! ```
//! use inline_progress::ProgressIteratorExt;
//!
//! let mut out = Vec::new();
//! let doubled: Vec<i32> = vec![1, 2, 3]
//!     .into_iter()
//!     .progress_to(&mut out)
//!     .map(|x| x * 2)
//!     .collect();
//!
//! assert_eq!(doubled, [2, 4, 6]);
//! assert!(out.ends_with(b"|\r"));
//! ```
//!
//! ## Modules
//!
//! * [`builder`]: Fluent interface for constructing non-default [`ProgressLine`] instances.
//! * [`io`]: Wrappers for [`std::io::Read`] and [`std::io::Write`] that tick progress per chunk.
//! * [`iter`]: Iterator decorators and free constructors.
//! * [`render`]: The core [`ProgressLine`] display state and frame drawing.

#![forbid(unsafe_code)]
#![deny(missing_docs)]

pub mod builder;
pub mod io;
pub mod iter;
pub mod render;

pub use builder::ProgressLineBuilder;
pub use iter::{
    progress, progress_range, progress_range_to, progress_to, ProgressIter, ProgressIteratorExt,
};
pub use render::{ProgressLine, ProgressLineSnapshot, ProgressMode};
