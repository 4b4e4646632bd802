//! Markdown tables of contents.
//!
//! Headings are plain lines starting with `#`, found with a regular
//! expression rather than a full Markdown parse. The rendered list uses one
//! link per heading, pointing at the slug most Markdown hosts generate for it.
pub mod list;
pub mod toc;

pub use list::{ListOptions, default_ref, default_text, render_list};
pub use toc::{
  TocOptions,
  compare_heading_levels,
  extract_headings,
  generate_toc,
  heading_level,
  heading_tree,
};
