use std::{
  fs,
  path::{Path, PathBuf},
};

use serde::{Deserialize, Serialize};
use simpletoc::{ListType, html, markdown};

use crate::error::ConfigError;

/// Settings for Markdown placeholder replacement.
///
/// Unset fields fall back to the library defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MarkdownConfig {
  /// Numbered or bulleted entries.
  pub list_type:       Option<ListType>,
  /// Placeholder regex, multi-line mode.
  pub target:          Option<String>,
  /// Heading line regex, multi-line mode.
  pub heading_pattern: Option<String>,
}

/// Settings for HTML table of contents insertion.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HtmlConfig {
  /// `<ol>` or `<ul>`.
  pub list_type:   Option<ListType>,
  /// Classes on every list container.
  pub class_names: Option<Vec<String>>,
  /// Selector of the element searched for headings.
  pub root:        Option<String>,
  /// Selector of the headings.
  pub selector:    Option<String>,
  /// Selector of the element receiving the list.
  pub target:      Option<String>,
}

/// Configuration options for simpletoc
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
  pub markdown: MarkdownConfig,
  pub html:     HtmlConfig,
}

fn replace_if_some<T>(slot: &mut Option<T>, value: Option<T>) {
  if value.is_some() {
    *slot = value;
  }
}

fn parse_list_type(key: &str, value: &str) -> Result<ListType, ConfigError> {
  value.parse().map_err(|e| {
    ConfigError::Config(format!("Invalid value for '{key}': {e}"))
  })
}

impl Config {
  /// Load configuration from a file (TOML or JSON).
  ///
  /// # Errors
  ///
  /// Returns an error if the file cannot be read or parsed, or if the format is
  /// unsupported.
  pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
    let path = path.as_ref();
    let content =
      fs::read_to_string(path).map_err(|e| ConfigError::io(path, e))?;

    match path
      .extension()
      .and_then(|ext| ext.to_str())
      .map(str::to_lowercase)
      .as_deref()
    {
      Some("json") => {
        serde_json::from_str(&content).map_err(|source| {
          ConfigError::Serde {
            path: path.to_path_buf(),
            source,
          }
        })
      },
      Some("toml") => {
        toml::from_str(&content).map_err(|source| {
          ConfigError::Toml {
            path: path.to_path_buf(),
            source,
          }
        })
      },
      Some(_) => {
        Err(ConfigError::Config(format!(
          "Unsupported config file format: {}",
          path.display()
        )))
      },
      None => {
        Err(ConfigError::Config(format!(
          "Config file has no extension: {}",
          path.display()
        )))
      },
    }
  }

  /// Load configuration from the given files, or a discovered one when none
  /// are given, then apply `KEY=VALUE` overrides.
  ///
  /// Files are merged in order, later files overriding earlier ones.
  ///
  /// # Errors
  ///
  /// Returns an error if a file cannot be loaded or an override is invalid.
  pub fn load(
    config_files: &[PathBuf],
    config_overrides: &[String],
  ) -> Result<Self, ConfigError> {
    let mut config = Self::default();

    if config_files.is_empty() {
      if let Some(discovered) = Self::find_config_file() {
        log::info!("Using discovered config file: {}", discovered.display());
        config = Self::from_file(&discovered)?;
      }
    } else {
      for config_path in config_files {
        config.merge(Self::from_file(config_path)?);
      }

      if config_files.len() > 1 {
        log::info!("Loaded and merged {} config files", config_files.len());
      }
    }

    config.apply_overrides(config_overrides)?;
    Ok(config)
  }

  /// Merge another config into this one. Fields set in `other` win; unset
  /// fields keep their current value. `class_names` is replaced as a whole.
  pub fn merge(&mut self, other: Self) {
    let Self { markdown, html } = other;

    replace_if_some(&mut self.markdown.list_type, markdown.list_type);
    replace_if_some(&mut self.markdown.target, markdown.target);
    replace_if_some(
      &mut self.markdown.heading_pattern,
      markdown.heading_pattern,
    );

    replace_if_some(&mut self.html.list_type, html.list_type);
    replace_if_some(&mut self.html.class_names, html.class_names);
    replace_if_some(&mut self.html.root, html.root);
    replace_if_some(&mut self.html.selector, html.selector);
    replace_if_some(&mut self.html.target, html.target);
  }

  /// Apply configuration overrides from `KEY=VALUE` strings, where `KEY` is
  /// a dotted path such as `html.root`.
  ///
  /// # Errors
  ///
  /// Returns an error if a string is not in `KEY=VALUE` format, the key is
  /// unknown, or the value cannot be parsed.
  pub fn apply_overrides(
    &mut self,
    overrides: &[String],
  ) -> Result<(), ConfigError> {
    for override_str in overrides {
      let (key, value) = override_str.split_once('=').ok_or_else(|| {
        ConfigError::Config(format!(
          "Invalid config override format: '{override_str}'. Expected \
           KEY=VALUE"
        ))
      })?;

      self.apply_override(key.trim(), value.trim())?;
    }

    Ok(())
  }

  /// Set a single dotted key.
  ///
  /// # Errors
  ///
  /// Returns an error if the key is unknown or the value is invalid.
  pub fn apply_override(
    &mut self,
    key: &str,
    value: &str,
  ) -> Result<(), ConfigError> {
    match key {
      "markdown.list_type" => {
        self.markdown.list_type = Some(parse_list_type(key, value)?);
      },
      "markdown.target" => self.markdown.target = Some(value.to_string()),
      "markdown.heading_pattern" => {
        self.markdown.heading_pattern = Some(value.to_string());
      },
      "html.list_type" => {
        self.html.list_type = Some(parse_list_type(key, value)?);
      },
      "html.class_names" => {
        self.html.class_names = Some(
          value
            .split(',')
            .map(str::trim)
            .filter(|class| !class.is_empty())
            .map(ToString::to_string)
            .collect(),
        );
      },
      "html.root" => self.html.root = Some(value.to_string()),
      "html.selector" => self.html.selector = Some(value.to_string()),
      "html.target" => self.html.target = Some(value.to_string()),
      _ => {
        return Err(ConfigError::Config(format!(
          "Unknown configuration key: '{key}'"
        )));
      },
    }

    Ok(())
  }

  /// Search for a config file in the working directory, then in
  /// `$XDG_CONFIG_HOME`.
  #[must_use]
  pub fn find_config_file() -> Option<PathBuf> {
    let config_filenames = [
      "simpletoc.toml",
      "simpletoc.json",
      ".simpletoc.toml",
      ".simpletoc.json",
    ];

    let current_dir = std::env::current_dir().ok()?;
    for filename in &config_filenames {
      let config_path = current_dir.join(filename);
      if config_path.exists() {
        return Some(config_path);
      }
    }

    if let Ok(xdg_config_home) = std::env::var("XDG_CONFIG_HOME") {
      let xdg_config_dir = PathBuf::from(xdg_config_home);
      for filename in &["simpletoc.toml", "simpletoc.json"] {
        let config_path = xdg_config_dir.join(filename);
        if config_path.exists() {
          return Some(config_path);
        }
      }
    }

    None
  }

  /// Write the commented default configuration to `path`.
  ///
  /// # Errors
  ///
  /// Returns an error for an unknown format or if the file cannot be written.
  pub fn generate_default_config(
    format: &str,
    path: &Path,
  ) -> Result<(), ConfigError> {
    let content = crate::templates::get_template(format)?;

    fs::write(path, content).map_err(|e| ConfigError::io(path, e))?;

    log::info!("Created default configuration file: {}", path.display());
    Ok(())
  }

  /// Library options for Markdown documents.
  ///
  /// # Errors
  ///
  /// Returns [`ConfigError::Toc`] if a configured pattern does not compile.
  pub fn markdown_options(&self) -> Result<markdown::TocOptions, ConfigError> {
    let mut options = markdown::TocOptions::default();

    if let Some(ref target) = self.markdown.target {
      options = options.with_target(target)?;
    }
    if let Some(ref pattern) = self.markdown.heading_pattern {
      options = options.with_heading_pattern(pattern)?;
    }
    if let Some(list_type) = self.markdown.list_type {
      options.list = options.list.with_list_type(list_type);
    }

    Ok(options)
  }

  /// Library options for HTML documents. Selectors are validated when the
  /// document is processed.
  #[must_use]
  pub fn html_options(&self) -> html::TocOptions {
    let mut options = html::TocOptions::default();

    if let Some(ref root) = self.html.root {
      options = options.with_root(root);
    }
    if let Some(ref selector) = self.html.selector {
      options = options.with_selector(selector);
    }
    if let Some(ref target) = self.html.target {
      options = options.with_target(target);
    }
    if let Some(list_type) = self.html.list_type {
      options.list = options.list.with_list_type(list_type);
    }
    if let Some(ref class_names) = self.html.class_names {
      options.list = options.list.with_class_names(class_names.clone());
    }

    options
  }
}
