use anyhow::Context;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::config::load_effective_config;
use crate::generator::{
    build_groups, describe_groups, generate_routes, planned_routes_path, GenerateOptions,
    DEFAULT_ROUTES_TEMPLATE,
};
use crate::spec::load_service;

/// Command-line interface for routegen
///
/// Generates go-zero route registration code from a resolved API service
/// description.
#[derive(Parser)]
#[command(name = "routegen")]
#[command(about = "Generate go-zero route registration code", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Log at debug level
    #[arg(short, long, global = true, default_value_t = false)]
    pub verbose: bool,

    /// The subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available CLI commands for routegen
#[derive(Subcommand)]
pub enum Commands {
    /// Generate the routes file for a service description
    Generate {
        /// Path to the resolved service description (YAML or JSON)
        #[arg(short, long)]
        api: PathBuf,

        /// Output project directory; the file is written under its handler dir
        #[arg(short, long)]
        dir: PathBuf,

        /// Go module path of the generated project (overrides routegen.toml)
        #[arg(long)]
        root_package: Option<String>,

        /// Path to routegen.toml (default: auto-detect next to the description)
        #[arg(long)]
        config: Option<PathBuf>,

        /// Override template file (Jinja syntax, see `routegen template`)
        #[arg(long)]
        template: Option<PathBuf>,

        /// File naming style, e.g. gozero, go_zero, GoZero
        #[arg(long)]
        style: Option<String>,
    },
    /// Print the built-in routes template
    Template,
    /// Show the resolved route groups without writing anything
    Inspect {
        /// Path to the resolved service description (YAML or JSON)
        #[arg(short, long)]
        api: PathBuf,

        /// Output project directory used to report the target path
        #[arg(short, long)]
        dir: Option<PathBuf>,

        /// Path to routegen.toml (default: auto-detect next to the description)
        #[arg(long)]
        config: Option<PathBuf>,
    },
}

/// Execute the CLI command provided by the user
///
/// # Errors
///
/// Returns an error if:
/// - The service description or config cannot be loaded or parsed
/// - No root package is configured for `generate`
/// - Naming, template rendering or writing the routes file fails
pub fn run_cli(cli: Cli) -> anyhow::Result<()> {
    match cli.command {
        Commands::Generate {
            api,
            dir,
            root_package,
            config,
            template,
            style,
        } => {
            let service = load_service(&api)?;
            let mut settings = load_effective_config(config.as_deref(), &api)?;
            if root_package.is_some() {
                settings.root_package = root_package;
            }
            if template.is_some() {
                settings.template = template;
            }
            if let Some(style) = style {
                settings.naming_format = style;
            }

            let options = settings.to_options(&dir)?;
            let path = generate_routes(&service, &options)
                .with_context(|| format!("Failed to generate routes for {}", api.display()))?;
            println!("✅ Generated routes → {}", path.display());
            Ok(())
        }
        Commands::Template => {
            print!("{DEFAULT_ROUTES_TEMPLATE}");
            Ok(())
        }
        Commands::Inspect { api, dir, config } => {
            let service = load_service(&api)?;
            let groups = build_groups(&service);
            print!("{}", describe_groups(&groups));
            if let Some(dir) = dir {
                let settings = load_effective_config(config.as_deref(), &api)?;
                let mut options = GenerateOptions::new(dir, String::new());
                options.layout = settings.layout();
                options.naming_format = settings.naming_format;
                println!("target: {}", planned_routes_path(&options)?.display());
            }
            Ok(())
        }
    }
}
