//! Rendering of heading forests as nested `<ol>`/`<ul>` elements.
use std::{fmt, sync::OnceLock};

use kuchikikiki::{Attribute, ExpandedName, NodeRef};
use log::warn;
use markup5ever::{LocalName, QualName, local_name};
use regex::Regex;

use crate::{tree::Node, types::ListType, utils::never_matching_regex};

/// Computes the `id` of a heading element from the element and its children.
pub type IdFn = Box<dyn Fn(&NodeRef, &[Node<NodeRef>]) -> String>;

/// Builds the link placed in a list item for a heading element.
pub type AnchorFn = Box<dyn Fn(&NodeRef, &[Node<NodeRef>]) -> NodeRef>;

/// Options for [`render_list`].
pub struct ListOptions {
  /// `<ol>` or `<ul>`. Defaults to `<ol>`.
  pub list_type:   ListType,
  /// Classes set on every list container, nested ones included. Defaults to
  /// `["simpletoc"]`. An empty list leaves out the `class` attribute.
  pub class_names: Vec<String>,
  /// Defaults to [`default_id`].
  pub get_id:      IdFn,
  /// Called after the id has been assigned. Defaults to [`default_anchor`].
  pub get_anchor:  AnchorFn,
}

impl Default for ListOptions {
  fn default() -> Self {
    Self {
      list_type:   ListType::default(),
      class_names: vec!["simpletoc".to_string()],
      get_id:      Box::new(default_id),
      get_anchor:  Box::new(default_anchor),
    }
  }
}

impl fmt::Debug for ListOptions {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("ListOptions")
      .field("list_type", &self.list_type)
      .field("class_names", &self.class_names)
      .finish_non_exhaustive()
  }
}

impl ListOptions {
  #[must_use]
  pub fn with_list_type(mut self, list_type: ListType) -> Self {
    self.list_type = list_type;
    self
  }

  #[must_use]
  pub fn with_class_names<I, S>(mut self, class_names: I) -> Self
  where
    I: IntoIterator<Item = S>,
    S: Into<String>,
  {
    self.class_names = class_names.into_iter().map(Into::into).collect();
    self
  }

  #[must_use]
  pub fn with_id(
    mut self,
    get_id: impl Fn(&NodeRef, &[Node<NodeRef>]) -> String + 'static,
  ) -> Self {
    self.get_id = Box::new(get_id);
    self
  }

  #[must_use]
  pub fn with_anchor(
    mut self,
    get_anchor: impl Fn(&NodeRef, &[Node<NodeRef>]) -> NodeRef + 'static,
  ) -> Self {
    self.get_anchor = Box::new(get_anchor);
    self
  }
}

/// Create a detached HTML element.
pub(crate) fn new_element(tag: &str, attributes: &[(&str, &str)]) -> NodeRef {
  NodeRef::new_element(
    QualName::new(None, markup5ever::ns!(html), LocalName::from(tag)),
    attributes.iter().map(|(name, value)| {
      (ExpandedName::new("", *name), Attribute {
        prefix: None,
        value:  (*value).to_string(),
      })
    }),
  )
}

/// The non-empty `id` attribute of `node`, if it is an element and has one.
#[must_use]
pub fn element_id(node: &NodeRef) -> Option<String> {
  node
    .as_element()?
    .attributes
    .borrow()
    .get("id")
    .filter(|id| !id.is_empty())
    .map(ToString::to_string)
}

/// Set the `id` attribute of `node`. Non-element nodes are left alone.
pub fn set_element_id(node: &NodeRef, id: &str) {
  if let Some(element) = node.as_element() {
    element
      .attributes
      .borrow_mut()
      .insert(local_name!("id"), id.to_string());
  }
}

/// The element's own `id`, or one derived from its text: lower-cased, with
/// each run of whitespace replaced by a single `-`.
///
/// Headings with the same text get the same id.
#[must_use]
pub fn default_id(element: &NodeRef, _children: &[Node<NodeRef>]) -> String {
  static WHITESPACE: OnceLock<Regex> = OnceLock::new();
  let whitespace = WHITESPACE.get_or_init(|| {
    Regex::new(r"\s+").unwrap_or_else(|_| never_matching_regex())
  });

  element_id(element).unwrap_or_else(|| {
    whitespace
      .replace_all(&element.text_contents().to_lowercase(), "-")
      .into_owned()
  })
}

/// `<a href="#{id}">{text}</a>` pointing at `element`.
#[must_use]
pub fn default_anchor(
  element: &NodeRef,
  _children: &[Node<NodeRef>],
) -> NodeRef {
  let href = format!("#{}", element_id(element).unwrap_or_default());
  let anchor = new_element("a", &[("href", &href)]);
  anchor.append(NodeRef::new_text(element.text_contents()));
  anchor
}

/// Render `forest` as a nested HTML list and return the outermost container.
///
/// Every heading element in `forest` has its `id` attribute set to the value
/// returned by [`ListOptions::get_id`] once this returns. Items appear in
/// forest order; a node's children become a list nested inside its `<li>`.
pub fn render_list(forest: &[Node<NodeRef>], options: &ListOptions) -> NodeRef {
  let class = options.class_names.join(" ");
  let attributes: Vec<(&str, &str)> = if class.is_empty() {
    Vec::new()
  } else {
    vec![("class", class.as_str())]
  };

  render_level(forest, options, &attributes)
}

fn render_level(
  forest: &[Node<NodeRef>],
  options: &ListOptions,
  attributes: &[(&str, &str)],
) -> NodeRef {
  let list = new_element(options.list_type.tag_name(), attributes);

  for node in forest {
    let item = new_element("li", &[]);

    let id = (options.get_id)(&node.value, node.children());
    set_element_id(&node.value, &id);
    item.append((options.get_anchor)(&node.value, node.children()));

    if !node.is_leaf() {
      item.append(render_level(node.children(), options, attributes));
    }

    list.append(item);
  }

  list
}

/// Serialize `node` including its own tag. For a document node this is the
/// whole document.
#[must_use]
pub fn outer_html(node: &NodeRef) -> String {
  let mut out = Vec::new();
  if let Err(e) = node.serialize(&mut out) {
    warn!("Failed to serialize HTML node: {e}");
  }
  String::from_utf8(out).unwrap_or_default()
}
