use color_eyre::eyre::Result;
use log::LevelFilter;

mod cli;
mod commands;

use cli::{Cli, Commands};

fn main() -> Result<()> {
  color_eyre::install()?;

  let cli = Cli::parse_args();

  env_logger::Builder::new()
    .filter_level(if cli.verbose {
      LevelFilter::Debug
    } else {
      LevelFilter::Info
    })
    .write_style(env_logger::WriteStyle::Auto)
    .init();

  match &cli.command {
    Commands::Init {
      output,
      format,
      force,
    } => commands::run_init(output, format, *force),

    Commands::Markdown {
      io,
      list_type,
      target,
    } => {
      let mut config = commands::load_config(&cli)?;
      if let Some(list_type) = list_type {
        config.markdown.list_type = Some(*list_type);
      }
      if let Some(target) = target {
        config.markdown.target = Some(target.clone());
      }
      commands::run_markdown(io, &config)
    },

    Commands::Html {
      io,
      list_type,
      class_names,
      root,
      selector,
      target,
    } => {
      let mut config = commands::load_config(&cli)?;
      if let Some(list_type) = list_type {
        config.html.list_type = Some(*list_type);
      }
      if !class_names.is_empty() {
        config.html.class_names = Some(class_names.clone());
      }
      if let Some(root) = root {
        config.html.root = Some(root.clone());
      }
      if let Some(selector) = selector {
        config.html.selector = Some(selector.clone());
      }
      if let Some(target) = target {
        config.html.target = Some(target.clone());
      }
      commands::run_html(io, &config)
    },

    Commands::Tree { input } => {
      let config = commands::load_config(&cli)?;
      commands::run_tree(input.as_deref(), &config)
    },
  }
}
