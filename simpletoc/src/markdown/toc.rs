//! Placeholder replacement for Markdown documents.
use std::{fmt, sync::OnceLock};

use log::{debug, trace};
use regex::{NoExpand, Regex};

use super::list::{ListOptions, render_list};
use crate::{
  error::TocResult,
  tree::{Forest, build},
  utils::{multiline_regex, never_matching_regex},
};

/// Decides whether `next` nests under `current`.
pub type CompareFn = Box<dyn Fn(&str, &str) -> bool>;

fn default_target() -> &'static Regex {
  static TARGET: OnceLock<Regex> = OnceLock::new();
  TARGET.get_or_init(|| {
    multiline_regex(r"^TOC$").unwrap_or_else(|_| never_matching_regex())
  })
}

fn default_heading_pattern() -> &'static Regex {
  static HEADING: OnceLock<Regex> = OnceLock::new();
  HEADING.get_or_init(|| {
    multiline_regex(r"^#+ .*$").unwrap_or_else(|_| never_matching_regex())
  })
}

fn default_code_block_pattern() -> &'static Regex {
  static CODE_BLOCK: OnceLock<Regex> = OnceLock::new();
  CODE_BLOCK.get_or_init(|| {
    Regex::new(r"```[\s\S]+?```").unwrap_or_else(|_| never_matching_regex())
  })
}

/// Options for [`generate_toc`].
pub struct TocOptions {
  /// Text replaced by the rendered list. Only the first match is replaced.
  /// Defaults to a line containing exactly `TOC`.
  pub target:             Regex,
  /// Lines treated as headings. Defaults to `^#+ .*$` in multi-line mode.
  pub heading_pattern:    Regex,
  /// Regions removed before looking for headings, so `#` comments in code
  /// are not mistaken for headings. Defaults to triple-backtick fences.
  pub code_block_pattern: Regex,
  /// Nesting relation between headings. Defaults to
  /// [`compare_heading_levels`].
  pub compare:            CompareFn,
  /// Rendering options for the list itself.
  pub list:               ListOptions,
}

impl Default for TocOptions {
  fn default() -> Self {
    Self {
      target:             default_target().clone(),
      heading_pattern:    default_heading_pattern().clone(),
      code_block_pattern: default_code_block_pattern().clone(),
      compare:            Box::new(compare_heading_levels),
      list:               ListOptions::default(),
    }
  }
}

impl fmt::Debug for TocOptions {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("TocOptions")
      .field("target", &self.target.as_str())
      .field("heading_pattern", &self.heading_pattern.as_str())
      .field("code_block_pattern", &self.code_block_pattern.as_str())
      .field("list", &self.list)
      .finish_non_exhaustive()
  }
}

impl TocOptions {
  /// Use `pattern` as the placeholder. `^` and `$` match at line boundaries.
  ///
  /// # Errors
  ///
  /// Returns [`crate::TocError::Regex`] if `pattern` does not compile.
  pub fn with_target(mut self, pattern: &str) -> TocResult<Self> {
    self.target = multiline_regex(pattern)?;
    Ok(self)
  }

  /// Use `pattern` to find heading lines. `^` and `$` match at line
  /// boundaries.
  ///
  /// # Errors
  ///
  /// Returns [`crate::TocError::Regex`] if `pattern` does not compile.
  pub fn with_heading_pattern(mut self, pattern: &str) -> TocResult<Self> {
    self.heading_pattern = multiline_regex(pattern)?;
    Ok(self)
  }

  #[must_use]
  pub fn with_compare(
    mut self,
    compare: impl Fn(&str, &str) -> bool + 'static,
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

/// Number of leading `#` characters of a heading line.
#[must_use]
pub fn heading_level(line: &str) -> usize {
  line.bytes().take_while(|&b| b == b'#').count()
}

/// `true` when `next` is a deeper heading than `current`.
///
/// Comparing the leading `#` runs as strings orders them by length, so this
/// is a plain level comparison.
#[must_use]
pub fn compare_heading_levels(current: &str, next: &str) -> bool {
  heading_level(next) > heading_level(current)
}

/// Heading lines of `text` in document order, ignoring fenced code blocks.
#[must_use]
pub fn extract_headings(text: &str, options: &TocOptions) -> Vec<String> {
  let stripped = options.code_block_pattern.replace_all(text, "");
  options
    .heading_pattern
    .find_iter(&stripped)
    .map(|m| m.as_str().to_string())
    .collect()
}

/// Headings of `text` grouped into a forest.
#[must_use]
pub fn heading_tree(text: &str, options: &TocOptions) -> Forest<String> {
  let headings = extract_headings(text, options);
  debug!("Found {} heading(s)", headings.len());
  build(headings, |current, next| {
    (options.compare)(current.as_str(), next.as_str())
  })
}

/// Replace the first placeholder in `text` with a table of contents of its
/// headings.
///
/// Without headings the placeholder is replaced with an empty string. Text
/// without a placeholder is returned unchanged.
#[must_use]
pub fn generate_toc(text: &str, options: &TocOptions) -> String {
  if !options.target.is_match(text) {
    trace!("No placeholder matching '{}' found", options.target.as_str());
    return text.to_string();
  }

  let forest = heading_tree(text, options);
  let list = render_list(&forest, &options.list);
  options
    .target
    .replacen(text, 1, NoExpand(&list))
    .into_owned()
}

#[cfg(test)]
mod tests {
  #![allow(clippy::unwrap_used, reason = "Fine in tests")]
  use super::*;
  use crate::tree::Node;

  #[test]
  fn test_heading_level() {
    assert_eq!(heading_level("# One"), 1);
    assert_eq!(heading_level("#### Four"), 4);
    assert_eq!(heading_level("plain"), 0);
  }

  #[test]
  fn test_compare_heading_levels() {
    assert!(compare_heading_levels("# a", "## b"));
    assert!(!compare_heading_levels("## a", "## b"));
    assert!(!compare_heading_levels("### a", "# b"));
  }

  #[test]
  fn test_extract_headings_ignores_code_blocks() {
    let text = "# Real\n\n```sh\n# not a heading\n```\n\n## Also real\n";
    assert_eq!(extract_headings(text, &TocOptions::default()), vec![
      "# Real".to_string(),
      "## Also real".to_string()
    ]);
  }

  #[test]
  fn test_extract_headings_requires_space() {
    let text = "#hashtag\n# Heading\n";
    assert_eq!(extract_headings(text, &TocOptions::default()), vec![
      "# Heading".to_string()
    ]);
  }

  #[test]
  fn test_heading_tree_nests_by_level() {
    let forest = heading_tree("# A\n## B\n# C\n", &TocOptions::default());
    assert_eq!(forest, vec![
      Node::with_children("# A".to_string(), vec![Node::leaf(
        "## B".to_string()
      )]),
      Node::leaf("# C".to_string()),
    ]);
  }

  #[test]
  fn test_generate_toc_without_placeholder_is_identity() {
    let text = "# Heading\n\nBody\n";
    assert_eq!(generate_toc(text, &TocOptions::default()), text);
  }

  #[test]
  fn test_generate_toc_replaces_first_placeholder_only() {
    let text = "TOC\n# A\nTOC\n";
    assert_eq!(
      generate_toc(text, &TocOptions::default()),
      "1. [A](#a)\n# A\nTOC\n"
    );
  }

  #[test]
  fn test_generate_toc_does_not_expand_dollar_signs() {
    let text = "TOC\n# Price $1\n";
    assert_eq!(
      generate_toc(text, &TocOptions::default()),
      "1. [Price $1](#price-1)\n# Price $1\n"
    );
  }

  #[test]
  fn test_generate_toc_crlf_document() {
    let text = "TOC\r\n\r\n# First\r\n## Second\r\n";
    assert_eq!(
      generate_toc(text, &TocOptions::default()),
      "1. [First](#first)\n    1. [Second](#second)\r\n\r\n# First\r\n## \
       Second\r\n"
    );
  }

  #[test]
  fn test_extract_headings_crlf_excludes_carriage_return() {
    let text = "TOC\n# First\r\n";
    assert_eq!(extract_headings(text, &TocOptions::default()), vec![
      "# First".to_string()
    ]);
    assert_eq!(
      generate_toc(text, &TocOptions::default()),
      "1. [First](#first)\n# First\r\n"
    );
  }

  #[test]
  fn test_with_target_rejects_invalid_pattern() {
    assert!(TocOptions::default().with_target("[").is_err());
  }
}
