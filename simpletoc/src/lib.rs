//! # simpletoc - nested tables of contents from flat heading sequences
//!
//! Documents list their headings in a flat order: `h1, h2, h2, h1, h3, ...`.
//! This crate groups such a sequence into a tree, then renders that tree as a
//! navigable list, either as Markdown text or as an HTML `<ol>`/`<ul>`.
//!
//! ## Quick Start
//!
//! ```rust
//! use simpletoc::markdown::{TocOptions, generate_toc};
//!
//! let text = "TOC\n\n# Install\n\n## From source\n";
//! let output = generate_toc(text, &TocOptions::default());
//!
//! assert_eq!(
//!   output,
//!   "1. [Install](#install)\n    1. [From source](#from-source)\n\n# \
//!    Install\n\n## From source\n"
//! );
//! ```
//!
//! ## Building trees directly
//!
//! The tree builder is generic. It only needs a relation telling whether the
//! next item nests under the current one:
//!
//! ```rust
//! use simpletoc::tree::{build, flatten};
//!
//! let forest = build(vec![1, 2, 3, 1, 2], |current, next| next > current);
//!
//! assert_eq!(forest.len(), 2);
//! assert_eq!(forest[0].depth(), 3);
//! assert_eq!(flatten(&forest), vec![&1, &2, &3, &1, &2]);
//! ```
//!
//! ## Features
//!
//! - `markdown` (default): heading extraction and Markdown list rendering
//! - `html` (default): DOM list rendering on top of `kuchikikiki`

pub mod error;
#[cfg(feature = "html")]
pub mod html;
#[cfg(feature = "markdown")]
pub mod markdown;
pub mod tree;
mod types;
pub mod utils;

pub use crate::{
  error::{TocError, TocResult},
  tree::{Forest, Node},
  types::ListType,
};
