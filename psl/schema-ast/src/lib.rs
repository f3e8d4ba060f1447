//! The schema AST and its parser.
//!
//! The AST is a faithful representation of the source text: nothing is
//! resolved or validated here beyond what is necessary to build the tree.
//! Every node carries a [`Span`](diagnostics::Span) into its originating
//! file; later stages preserve these spans for diagnostics.

#![deny(rust_2018_idioms, unsafe_code)]

pub mod ast;

mod parser;
mod source_file;

pub use parser::parse_schema;
pub use source_file::SourceFile;
