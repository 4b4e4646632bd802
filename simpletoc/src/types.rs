//! Types shared by the Markdown and HTML renderers.
use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

/// Whether a rendered table of contents is numbered.
#[derive(
  Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum ListType {
  /// Numbered entries: `1.` in Markdown, `<ol>` in HTML.
  #[default]
  #[serde(alias = "ol")]
  Ordered,
  /// Bulleted entries: `*` in Markdown, `<ul>` in HTML.
  #[serde(alias = "ul")]
  Unordered,
}

impl ListType {
  /// HTML tag name of the list container.
  #[must_use]
  pub const fn tag_name(self) -> &'static str {
    match self {
      Self::Ordered => "ol",
      Self::Unordered => "ul",
    }
  }
}

impl fmt::Display for ListType {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      Self::Ordered => f.write_str("ordered"),
      Self::Unordered => f.write_str("unordered"),
    }
  }
}

impl FromStr for ListType {
  type Err = String;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    match s.to_lowercase().as_str() {
      "ordered" | "ol" => Ok(Self::Ordered),
      "unordered" | "ul" => Ok(Self::Unordered),
      other => {
        Err(format!(
          "unknown list type '{other}', expected one of: ordered, unordered, \
           ol, ul"
        ))
      },
    }
  }
}
