use std::{
  fs,
  io::{self, Read, Write},
  path::Path,
};

use color_eyre::eyre::{Result, WrapErr, bail};
use log::info;
use simpletoc::{Node, html, markdown};
use simpletoc_config::Config;

use crate::cli::{Cli, IoArgs};

/// Configuration from files and `--config` overrides, before subcommand
/// flags are applied.
pub fn load_config(cli: &Cli) -> Result<Config> {
  Config::load(&cli.config_files, &cli.config_overrides)
    .wrap_err("Failed to load configuration")
}

pub fn run_init(output: &Path, format: &str, force: bool) -> Result<()> {
  if output.exists() && !force {
    bail!(
      "Configuration file already exists: {}. Use --force to overwrite.",
      output.display()
    );
  }

  if let Some(parent) = output.parent() {
    if !parent.as_os_str().is_empty() && !parent.exists() {
      fs::create_dir_all(parent).wrap_err_with(|| {
        format!("Failed to create directory: {}", parent.display())
      })?;
      info!("Created directory: {}", parent.display());
    }
  }

  Config::generate_default_config(format, output).wrap_err_with(|| {
    format!("Failed to generate configuration file: {}", output.display())
  })
}

pub fn run_markdown(io: &IoArgs, config: &Config) -> Result<()> {
  let options = config.markdown_options()?;
  let text = read_input(io.input.as_deref())?;
  let output = markdown::generate_toc(&text, &options);
  write_output(io, &output)
}

pub fn run_html(io: &IoArgs, config: &Config) -> Result<()> {
  let options = config.html_options();
  let text = read_input(io.input.as_deref())?;
  let output = html::generate_toc(&text, &options)
    .wrap_err("Failed to insert table of contents")?;
  write_output(io, &output)
}

pub fn run_tree(input: Option<&Path>, config: &Config) -> Result<()> {
  let options = config.markdown_options()?;
  let text = read_input(input)?;
  let forest = markdown::heading_tree(&text, &options);

  let mut out = String::new();
  render_outline(&forest, 0, &mut out);
  io::stdout()
    .lock()
    .write_all(out.as_bytes())
    .wrap_err("Failed to write to stdout")
}

/// One line per heading, indented two spaces per level.
fn render_outline(forest: &[Node<String>], depth: usize, out: &mut String) {
  for node in forest {
    out.push_str(&"  ".repeat(depth));
    out.push_str(&markdown::default_text(&node.value));
    out.push('\n');
    render_outline(node.children(), depth + 1, out);
  }
}

fn read_input(input: Option<&Path>) -> Result<String> {
  match input {
    Some(path) if path != Path::new("-") => {
      fs::read_to_string(path)
        .wrap_err_with(|| format!("Failed to read {}", path.display()))
    },
    _ => {
      let mut buf = String::new();
      io::stdin()
        .read_to_string(&mut buf)
        .wrap_err("Failed to read from stdin")?;
      Ok(buf)
    },
  }
}

fn write_output(io: &IoArgs, content: &str) -> Result<()> {
  let destination = if io.in_place {
    match io.input.as_deref() {
      Some(path) if path != Path::new("-") => Some(path),
      _ => bail!("--in-place requires an input file"),
    }
  } else {
    io.output.as_deref()
  };

  match destination {
    Some(path) => {
      fs::write(path, content)
        .wrap_err_with(|| format!("Failed to write {}", path.display()))?;
      info!("Wrote table of contents to {}", path.display());
      Ok(())
    },
    None => {
      io::stdout()
        .lock()
        .write_all(content.as_bytes())
        .wrap_err("Failed to write to stdout")
    },
  }
}
