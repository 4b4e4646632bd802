pub mod config;
pub mod error;
pub mod templates;

pub use config::{Config, HtmlConfig, MarkdownConfig};
pub use error::ConfigError;
