use std::fs;
use std::path::{Path, PathBuf};
use std::process;

use anyhow::Context as _;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use folio::check::has_failures;
use folio::config::SiteConfig;
use folio::site::Site;

#[derive(Parser)]
#[command(name = "folio", version)]
#[command(about = "Authoring tools for the portfolio site")]
struct Cli {
    /// Site configuration (JSON); defaults match the published site
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate the project and film catalogs of a site directory
    Check {
        /// Site root (contains data/projects.json)
        #[arg(default_value = ".")]
        dir: PathBuf,

        /// Treat warnings as errors
        #[arg(long)]
        strict: bool,
    },

    /// Print every project with its looped prev/next neighbors
    Chain {
        /// Site root (contains data/projects.json)
        #[arg(default_value = ".")]
        dir: PathBuf,
    },

    /// Serve a site directory locally with live reload
    Dev {
        /// Site root
        #[arg(default_value = ".")]
        dir: PathBuf,

        /// Server port
        #[arg(long, default_value_t = 3333)]
        port: u16,
    },
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("folio=info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    if let Err(e) = run(cli) {
        eprintln!("error: {e:#}");
        process::exit(1);
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let config = load_config(cli.config.as_deref())?;

    match cli.command {
        Commands::Check { dir, strict } => {
            let site = Site::open(&dir, config)?;
            let diagnostics = site.check()?;
            for d in &diagnostics {
                eprintln!("{d}");
            }
            if diagnostics.is_empty() {
                eprintln!("{}: ok", dir.display());
            } else {
                eprintln!("{}: {} issue(s)", dir.display(), diagnostics.len());
            }
            if has_failures(&diagnostics, strict) {
                process::exit(1);
            }
        }

        Commands::Chain { dir } => {
            let site = Site::open(&dir, config)?;
            let rows = site.chain()?;
            if rows.is_empty() {
                eprintln!("no projects");
            }
            for row in rows {
                let nav = &row.neighbors;
                println!(
                    "{} <- {} -> {}  ({} images)",
                    nav.prev, nav.current, nav.next, row.images
                );
            }
        }

        Commands::Dev { dir, port } => {
            let site = Site::open(&dir, config)?;
            let rt = tokio::runtime::Runtime::new().context("failed to create tokio runtime")?;
            rt.block_on(async {
                folio::server::run_dev_server(site, port)
                    .await
                    .map_err(|e| anyhow::anyhow!("dev server failed: {e}"))
            })?;
        }
    }

    Ok(())
}

fn load_config(path: Option<&Path>) -> anyhow::Result<SiteConfig> {
    let Some(path) = path else {
        return Ok(SiteConfig::default());
    };
    let source = fs::read_to_string(path)
        .with_context(|| format!("cannot read '{}'", path.display()))?;
    SiteConfig::from_json(&source).with_context(|| format!("in '{}'", path.display()))
}
