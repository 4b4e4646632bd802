//! Table of contents insertion into HTML documents.
use std::fmt;

use kuchikikiki::{NodeRef, iter::NodeIterator};
use log::debug;
use tendril::TendrilSink;

use super::list::{ListOptions, outer_html, render_list};
use crate::{
  error::{TocError, TocResult},
  tree::build,
};

/// Decides whether heading element `next` nests under `current`.
pub type CompareFn = Box<dyn Fn(&NodeRef, &NodeRef) -> bool>;

/// Options for [`insert_toc`] and [`generate_toc`].
pub struct TocOptions {
  /// Element searched for headings. Defaults to `body`.
  pub root:     String,
  /// Headings inside `root`. Defaults to `h1,h2,h3,h4,h5,h6`.
  pub selector: String,
  /// Element whose children are replaced by the list. Defaults to
  /// `[simpletoc]`.
  pub target:   String,
  /// Defaults to [`compare_tag_names`].
  pub compare:  CompareFn,
  pub list:     ListOptions,
}

impl Default for TocOptions {
  fn default() -> Self {
    Self {
      root:     "body".to_string(),
      selector: "h1,h2,h3,h4,h5,h6".to_string(),
      target:   "[simpletoc]".to_string(),
      compare:  Box::new(compare_tag_names),
      list:     ListOptions::default(),
    }
  }
}

impl fmt::Debug for TocOptions {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("TocOptions")
      .field("root", &self.root)
      .field("selector", &self.selector)
      .field("target", &self.target)
      .field("list", &self.list)
      .finish_non_exhaustive()
  }
}

impl TocOptions {
  #[must_use]
  pub fn with_root(mut self, root: impl Into<String>) -> Self {
    self.root = root.into();
    self
  }

  #[must_use]
  pub fn with_selector(mut self, selector: impl Into<String>) -> Self {
    self.selector = selector.into();
    self
  }

  #[must_use]
  pub fn with_target(mut self, target: impl Into<String>) -> Self {
    self.target = target.into();
    self
  }

  #[must_use]
  pub fn with_compare(
    mut self,
    compare: impl Fn(&NodeRef, &NodeRef) -> bool + 'static,
  ) -> Self {
    self.compare = Box::new(compare);
    self
  }

  #[must_use]
  pub fn with_list(mut self, list: ListOptions) -> Self {
    self.list = list;
    self
  }
}

/// `true` when the tag name of `next` sorts after that of `current`.
///
/// This is a string comparison, not a rank: it works for `h1`..`h6` because
/// deeper headings happen to have larger names. Non-elements never nest.
#[must_use]
pub fn compare_tag_names(current: &NodeRef, next: &NodeRef) -> bool {
  match (current.as_element(), next.as_element()) {
    (Some(current), Some(next)) => {
      let current: &str = &current.name.local;
      let next: &str = &next.name.local;
      next > current
    },
    _ => false,
  }
}

fn select_first(node: &NodeRef, selector: &str) -> TocResult<NodeRef> {
  node
    .select(selector)
    .map_err(|()| TocError::InvalidSelector(selector.to_string()))?
    .next()
    .map(|element| element.as_node().clone())
    .ok_or_else(|| TocError::MissingElement(selector.to_string()))
}

/// Heading elements below the root element, in document order.
///
/// # Errors
///
/// Returns [`TocError::InvalidSelector`] if `root` or `selector` cannot be
/// parsed, and [`TocError::MissingElement`] if nothing matches `root`.
pub fn collect_headings(
  document: &NodeRef,
  options: &TocOptions,
) -> TocResult<Vec<NodeRef>> {
  let root = select_first(document, &options.root)?;
  let headings = root
    .descendants()
    .select(&options.selector)
    .map_err(|()| TocError::InvalidSelector(options.selector.clone()))?
    .map(|element| element.as_node().clone())
    .collect();

  Ok(headings)
}

/// Replace the children of the target element with a table of contents of
/// the document's headings, and return the inserted list.
///
/// Headings gain an `id` attribute as described in [`render_list`]. Headings
/// inside the target are replaced along with the rest of its content, so
/// they are not listed.
///
/// # Errors
///
/// Returns [`TocError::InvalidSelector`] for unparsable selectors and
/// [`TocError::MissingElement`] when the root or target element is missing.
/// The document is left untouched on error.
pub fn insert_toc(
  document: &NodeRef,
  options: &TocOptions,
) -> TocResult<NodeRef> {
  let target = select_first(document, &options.target)?;
  let mut headings = collect_headings(document, options)?;
  headings.retain(|heading| !heading.ancestors().any(|node| node == target));
  debug!("Found {} heading(s) under '{}'", headings.len(), options.root);

  let forest =
    build(headings, |current, next| (options.compare)(current, next));
  let list = render_list(&forest, &options.list);

  while let Some(child) = target.last_child() {
    child.detach();
  }
  target.append(list.clone());

  Ok(list)
}

/// Parse `html`, insert a table of contents with [`insert_toc`] and serialize
/// the resulting document.
///
/// # Errors
///
/// See [`insert_toc`].
pub fn generate_toc(html: &str, options: &TocOptions) -> TocResult<String> {
  let document = kuchikikiki::parse_html().one(html);
  insert_toc(&document, options)?;
  Ok(outer_html(&document))
}

#[cfg(test)]
mod tests {
  #![allow(clippy::unwrap_used, reason = "Fine in tests")]
  use super::*;
  use crate::html::list::new_element;

  #[test]
  fn test_compare_tag_names() {
    let h1 = new_element("h1", &[]);
    let h2 = new_element("h2", &[]);
    assert!(compare_tag_names(&h1, &h2));
    assert!(!compare_tag_names(&h2, &h1));
    assert!(!compare_tag_names(&h2, &h2));
  }

  #[test]
  fn test_compare_tag_names_non_element() {
    let h1 = new_element("h1", &[]);
    let text = NodeRef::new_text("h2");
    assert!(!compare_tag_names(&h1, &text));
  }

  #[test]
  fn test_select_first_errors() {
    let document = kuchikikiki::parse_html().one("<p>hi</p>");
    assert!(matches!(
      select_first(&document, "nav"),
      Err(TocError::MissingElement(_))
    ));
    assert!(matches!(
      select_first(&document, "[[["),
      Err(TocError::InvalidSelector(_))
    ));
  }

  #[test]
  fn test_collect_headings_respects_root() {
    let document = kuchikikiki::parse_html()
      .one("<h1>Outside</h1><main><h2>In</h2><h3>Deeper</h3></main>");
    let options = TocOptions::default().with_root("main");
    let headings = collect_headings(&document, &options).unwrap();

    let texts: Vec<String> =
      headings.iter().map(NodeRef::text_contents).collect();
    assert_eq!(texts, vec!["In", "Deeper"]);
  }
}
