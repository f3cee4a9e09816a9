use clap::{Parser, Subcommand};
use docside::{config, generate, output, sidebar};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "docside")]
#[command(about = "Sidebar and site-config generator for markdown documentation sites")]
#[command(long_about = "\
Sidebar and site-config generator for markdown documentation sites

Your filesystem is the data source. Directories become collapsible
sidebar sections, markdown files become pages titled from their
filenames, and config.toml holds the declarative site metadata. The
result is the configuration object your site-generation framework
consumes, written as JSON.

Content structure:

  docs/
  ├── config.toml                  # Site config (optional)
  ├── getting_started.md           # Top-level page → \"Getting Started\"
  ├── javascript/                  # Section (collapsible sidebar group)
  │   ├── index.md                 # → \"Introduction\"
  │   ├── variables.md             # → \"Variables\"
  │   └── control_flow_statements.md
  └── css/
      └── selectors.md

Titles come from filename stems: underscores become spaces, each word
is capitalized, and \"index\" becomes \"Introduction\". Links keep the
source path (/docs/javascript/variables.md) — the framework resolves
rendered routes itself.

Run 'docside gen-config' to generate a documented config.toml.")]
#[command(version)]
struct Cli {
    /// Content directory
    #[arg(long, default_value = "docs", global = true)]
    source: PathBuf,

    /// Output path for the generated configuration object
    #[arg(long, default_value = "site-config.json", global = true)]
    output: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Build the configuration object from config and content
    Build {
        /// Also print the computed sidebar tree
        #[arg(long)]
        dump_tree: bool,
    },
    /// Print the computed sidebar tree without writing anything
    Tree,
    /// Validate config and content without writing
    Check,
    /// Print a stock config.toml with all options documented
    GenConfig,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    match cli.command {
        Command::Build { dump_tree } => {
            let site = config::load_config(&cli.source)?;
            let tree = sidebar::build(&cli.source, &site.docs.route_prefix)?;
            let map = sidebar::sidebar_map(&tree, &site.docs.route_prefix);
            output::print_collisions(&map.collisions);

            let artifact = generate::framework_config(&site, &map.entries)?;
            generate::write_config(&artifact, &cli.output)?;

            if dump_tree || site.docs.dump_tree {
                output::print_tree(&tree);
            }
            println!("{}", output::format_build_summary(&tree, &cli.output));
        }
        Command::Tree => {
            let site = config::load_config(&cli.source)?;
            let tree = sidebar::build(&cli.source, &site.docs.route_prefix)?;
            output::print_tree(&tree);
        }
        Command::Check => {
            let site = config::load_config(&cli.source)?;
            let tree = sidebar::build(&cli.source, &site.docs.route_prefix)?;
            let map = sidebar::sidebar_map(&tree, &site.docs.route_prefix);
            output::print_collisions(&map.collisions);

            // Exercise assembly too: a config that cannot serialize
            // should fail check, not the next build.
            generate::framework_config(&site, &map.entries)?;
            println!("==> {} is valid", cli.source.display());
        }
        Command::GenConfig => {
            print!("{}", config::stock_config_toml());
        }
    }

    Ok(())
}
