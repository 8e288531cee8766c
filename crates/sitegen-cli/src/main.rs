mod config;
mod copy_static;
mod page;

use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use config::SiteConfig;
use copy_static::copy_static;
use page::generate_page;

#[derive(Parser)]
#[command(name = "sitegen")]
#[command(about = "Build a static page from Markdown")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Mirror static assets, then generate the page
    Build(BuildArgs),
    /// Render a Markdown file (or stdin) to HTML on stdout
    Render {
        /// Input Markdown file
        input: Option<PathBuf>,
    },
    /// Print the title of a Markdown file (or stdin)
    Title {
        /// Input Markdown file
        input: Option<PathBuf>,
    },
}

#[derive(Args)]
struct BuildArgs {
    /// Site config file (defaults to sitegen.toml if present)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Static asset directory
    #[arg(long)]
    static_dir: Option<PathBuf>,

    /// Output directory
    #[arg(long)]
    public_dir: Option<PathBuf>,

    /// Markdown source of the page
    #[arg(long)]
    content: Option<PathBuf>,

    /// HTML template
    #[arg(long)]
    template: Option<PathBuf>,

    /// Generated page path
    #[arg(long)]
    dest: Option<PathBuf>,
}

impl BuildArgs {
    /// Flags given on the command line override the loaded config
    fn apply(self, config: SiteConfig) -> SiteConfig {
        SiteConfig {
            static_dir: self.static_dir.unwrap_or(config.static_dir),
            public_dir: self.public_dir.unwrap_or(config.public_dir),
            content: self.content.unwrap_or(config.content),
            template: self.template.unwrap_or(config.template),
            dest: self.dest.unwrap_or(config.dest),
            log_level: config.log_level,
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Build(args) => SiteConfig::load(args.config.as_deref())
            .map(|config| args.apply(config))
            .and_then(|config| {
                init_logging(&config.log_level);
                build(&config)
            }),
        Commands::Render { input } => {
            init_logging("warn");
            render(input.as_deref())
        }
        Commands::Title { input } => {
            init_logging("warn");
            title(input.as_deref())
        }
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            // no-op when a subcommand already installed a subscriber
            init_logging("error");
            error!("{:#}", err);
            ExitCode::FAILURE
        }
    }
}

/// Log to stderr, filtered by `RUST_LOG` or `level`
fn init_logging(level: &str) {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level)),
        )
        .with_writer(io::stderr)
        .with_target(false)
        .try_init();
}

fn build(config: &SiteConfig) -> Result<()> {
    let report = copy_static(&config.static_dir, &config.public_dir)?;
    info!(files = report.files, dirs = report.dirs, "static assets copied");

    generate_page(&config.content, &config.template, &config.dest)?;
    info!(dest = %config.dest.display(), "build finished");
    Ok(())
}

fn render(input: Option<&Path>) -> Result<()> {
    let markdown = read_input(input)?;
    let html = sitegen::markdown_to_html(&markdown)?;
    println!("{}", html);
    Ok(())
}

fn title(input: Option<&Path>) -> Result<()> {
    let markdown = read_input(input)?;
    println!("{}", sitegen::extract_title(&markdown)?);
    Ok(())
}

fn read_input(input: Option<&Path>) -> Result<String> {
    match input {
        Some(path) => fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display())),
        None => {
            let mut buffer = String::new();
            io::stdin()
                .read_to_string(&mut buffer)
                .context("failed to read stdin")?;
            Ok(buffer)
        }
    }
}
