//! Structured diagnostics for the schema parser and analyzer.
//!
//! Validation never throws: every problem is pushed into a [`Diagnostics`]
//! collection as a [`DatamodelError`] or [`DatamodelWarning`] value carrying a
//! [`Span`] into the source text. Pretty printing is a pure function from the
//! diagnostic and the source text to a rendered string.

mod collection;
mod error;
mod pretty_print;
mod span;
mod warning;

pub use collection::Diagnostics;
pub use error::DatamodelError;
pub use span::{FileId, Span};
pub use warning::DatamodelWarning;
