//! HTML tables of contents on top of a `kuchikikiki` DOM.
//!
//! The list renderer works on heading elements that already live in a
//! document and writes the computed `id` back onto each of them, so the
//! generated anchors always resolve.
pub mod list;
pub mod toc;

pub use list::{
  ListOptions,
  default_anchor,
  default_id,
  element_id,
  outer_html,
  render_list,
  set_element_id,
};
pub use toc::{
  TocOptions,
  collect_headings,
  compare_tag_names,
  generate_toc,
  insert_toc,
};
