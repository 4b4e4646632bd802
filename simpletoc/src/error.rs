//! Error types for table of contents generation.
//!
//! Building and rendering trees cannot fail. Errors only come from the entry
//! points, where user-supplied patterns and selectors are involved.

/// Result type for table of contents operations.
pub type TocResult<T> = Result<T, TocError>;

/// Errors that can occur while locating headings or placing the list.
#[derive(Debug, thiserror::Error)]
pub enum TocError {
  #[error("Regex compilation failed: {0}")]
  Regex(#[from] regex::Error),

  #[error("Invalid CSS selector: '{0}'")]
  InvalidSelector(String),

  #[error("No element matches selector '{0}'")]
  MissingElement(String),
}
