use std::path::PathBuf;

use clap::{Parser, Subcommand};
use simpletoc::ListType;

/// Command line interface for simpletoc
#[derive(Parser, Debug)]
#[command(
  author,
  version,
  about = "Insert tables of contents into Markdown and HTML documents"
)]
pub struct Cli {
  /// Subcommand to execute (see [`Commands`])
  #[command(subcommand)]
  pub command: Commands,

  /// Enable verbose debug logging
  #[arg(short, long, global = true)]
  pub verbose: bool,

  /// Path to configuration file(s) (TOML or JSON, can be specified multiple
  /// times). Later files override earlier ones
  #[arg(short = 'c', long = "config-file", action = clap::ArgAction::Append, global = true)]
  pub config_files: Vec<PathBuf>,

  /// Override configuration values (KEY=VALUE format, e.g. html.root=main)
  #[arg(long = "config", action = clap::ArgAction::Append, global = true)]
  pub config_overrides: Vec<String>,
}

/// Where a command reads its document from and writes the result to.
#[derive(clap::Args, Debug, Clone)]
pub struct IoArgs {
  /// Input document. Reads from stdin when omitted or `-`.
  pub input: Option<PathBuf>,

  /// Write the result to this file instead of stdout.
  #[arg(short, long, conflicts_with = "in_place")]
  pub output: Option<PathBuf>,

  /// Overwrite the input document.
  #[arg(short, long)]
  pub in_place: bool,
}

/// All supported subcommands for the simpletoc CLI.
#[derive(Subcommand, Debug)]
pub enum Commands {
  /// Initialize a new simpletoc configuration file
  Init {
    /// Path to create the configuration file at
    #[arg(short, long, default_value = "simpletoc.toml")]
    output: PathBuf,

    /// Format of the configuration file.
    #[arg(short = 'F', long, default_value = "toml", value_parser = ["toml", "json"])]
    format: String,

    /// Force overwrite if file already exists
    #[arg(short, long)]
    force: bool,
  },

  /// Replace the placeholder line of a Markdown document with its table of
  /// contents.
  Markdown {
    #[command(flatten)]
    io: IoArgs,

    /// `ordered` (1.) or `unordered` (*) entries.
    #[arg(short = 't', long)]
    list_type: Option<ListType>,

    /// Regex matching the placeholder to replace.
    #[arg(long)]
    target: Option<String>,
  },

  /// Insert a table of contents into an HTML document.
  Html {
    #[command(flatten)]
    io: IoArgs,

    /// `ordered` (<ol>) or `unordered` (<ul>) lists.
    #[arg(short = 't', long)]
    list_type: Option<ListType>,

    /// Class for every list container (can be specified multiple times).
    #[arg(long = "class", action = clap::ArgAction::Append)]
    class_names: Vec<String>,

    /// CSS selector of the element searched for headings.
    #[arg(long)]
    root: Option<String>,

    /// CSS selector of the headings.
    #[arg(long)]
    selector: Option<String>,

    /// CSS selector of the element receiving the list.
    #[arg(long)]
    target: Option<String>,
  },

  /// Print the heading tree of a Markdown document.
  Tree {
    /// Input document. Reads from stdin when omitted or `-`.
    input: Option<PathBuf>,
  },
}

impl Cli {
  /// Parse command line arguments into a [`Cli`] struct.
  #[must_use]
  pub fn parse_args() -> Self {
    Self::parse()
  }
}
