//! Rendering of heading forests as nested Markdown lists.
use std::{fmt, sync::OnceLock};

use regex::Regex;

use crate::{tree::Node, types::ListType, utils::never_matching_regex};

/// Spaces added per nesting level.
const INDENT_WIDTH: usize = 4;

/// Bullet used for unordered lists.
const BULLET: &str = "*";

/// A hook turning one string into another, e.g. a heading line into its
/// visible text.
pub type TextFn = Box<dyn Fn(&str) -> String>;

/// Options for [`render_list`].
pub struct ListOptions {
  /// Numbered (`1.`) or bulleted (`*`) entries. Defaults to ordered.
  pub list_type: ListType,
  /// Link target for a heading, given its visible text. Defaults to
  /// [`default_ref`].
  pub get_ref:   TextFn,
  /// Visible text for a raw heading line. Defaults to [`default_text`].
  pub get_text:  TextFn,
}

impl Default for ListOptions {
  fn default() -> Self {
    Self {
      list_type: ListType::default(),
      get_ref:   Box::new(default_ref),
      get_text:  Box::new(default_text),
    }
  }
}

impl fmt::Debug for ListOptions {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("ListOptions")
      .field("list_type", &self.list_type)
      .finish_non_exhaustive()
  }
}

impl ListOptions {
  #[must_use]
  pub fn with_list_type(mut self, list_type: ListType) -> Self {
    self.list_type = list_type;
    self
  }

  /// Replace the link target hook.
  #[must_use]
  pub fn with_ref(mut self, get_ref: impl Fn(&str) -> String + 'static) -> Self {
    self.get_ref = Box::new(get_ref);
    self
  }

  /// Replace the visible text hook.
  #[must_use]
  pub fn with_text(
    mut self,
    get_text: impl Fn(&str) -> String + 'static,
  ) -> Self {
    self.get_text = Box::new(get_text);
    self
  }
}

/// Visible text of a heading line.
///
/// Strips the leading `#` run with its trailing spaces, then reduces the first
/// `[label](url)` link to `label`, since links cannot nest inside the list
/// entry's own link.
///
/// ```rust
/// use simpletoc::markdown::default_text;
///
/// assert_eq!(default_text("## See [the docs](https://x.y)"), "See the docs");
/// ```
#[must_use]
pub fn default_text(line: &str) -> String {
  static HEADING_MARKUP: OnceLock<Regex> = OnceLock::new();
  static INLINE_LINK: OnceLock<Regex> = OnceLock::new();

  let heading_markup = HEADING_MARKUP.get_or_init(|| {
    Regex::new(r"^#+ +").unwrap_or_else(|_| never_matching_regex())
  });
  let inline_link = INLINE_LINK.get_or_init(|| {
    Regex::new(r"\[(.+?)\]\(.+?\)").unwrap_or_else(|_| never_matching_regex())
  });

  let text = heading_markup.replace(line, "");
  inline_link.replace(&text, "${1}").into_owned()
}

/// Link target for a heading's visible text.
///
/// Trims, lower-cases, drops everything but ASCII word characters, hyphens
/// and spaces, then turns spaces into hyphens. Identical headings produce
/// identical references.
///
/// ```rust
/// use simpletoc::markdown::default_ref;
///
/// assert_eq!(default_ref(" What's New? "), "whats-new");
/// ```
#[must_use]
pub fn default_ref(text: &str) -> String {
  static NON_SLUG: OnceLock<Regex> = OnceLock::new();
  let non_slug = NON_SLUG.get_or_init(|| {
    Regex::new(r"[^0-9A-Za-z_\- ]+").unwrap_or_else(|_| never_matching_regex())
  });

  non_slug
    .replace_all(&text.trim().to_lowercase(), "")
    .replace(char::is_whitespace, "-")
}

/// Render `forest` as a Markdown list, one line per heading.
///
/// Nested levels are indented by four spaces and numbering restarts at 1 for
/// every group of siblings. Empty items are skipped. Lines are joined with
/// `\n` and there is no trailing newline; an empty forest renders as an empty
/// string.
#[must_use]
pub fn render_list<T: AsRef<str>>(
  forest: &[Node<T>],
  options: &ListOptions,
) -> String {
  render_level(forest, options, 0)
}

fn render_level<T: AsRef<str>>(
  forest: &[Node<T>],
  options: &ListOptions,
  depth: usize,
) -> String {
  let pad = " ".repeat(depth * INDENT_WIDTH);
  let mut lines = Vec::with_capacity(forest.len());

  for (index, node) in forest.iter().enumerate() {
    let line = node.value.as_ref();
    if line.is_empty() {
      continue;
    }

    let bullet = match options.list_type {
      ListType::Ordered => format!("{}.", index + 1),
      ListType::Unordered => BULLET.to_string(),
    };
    let text = (options.get_text)(line);
    let reference = (options.get_ref)(&text);
    lines.push(format!("{pad}{bullet} [{text}](#{reference})"));

    let nested = render_level(node.children(), options, depth + 1);
    if !nested.is_empty() {
      lines.push(nested);
    }
  }

  lines.join("\n")
}
