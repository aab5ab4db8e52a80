mod commands;

use clap::{CommandFactory, Parser};
use clap_complete::{Shell, generate};
use std::io;
use std::path::PathBuf;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "folio")]
#[command(version, about = "Static site generator for project portfolios", long_about = None)]
struct Cli {
    /// Enable debug logging (overridden by RUST_LOG)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Parser)]
enum Command {
    /// Create a starter portfolio.toml
    Init {
        /// Directory to initialize (must exist)
        path: PathBuf,

        /// Name shown in the site header and footer
        #[arg(long)]
        owner: Option<String>,
    },

    /// Validate portfolio content
    Validate {
        /// Path to portfolio directory
        path: PathBuf,
    },

    /// List every route the site will emit
    Routes {
        /// Path to portfolio directory
        path: PathBuf,

        /// Print the route manifest as JSON
        #[arg(long)]
        json: bool,
    },

    /// Preview site locally with hot reload
    Preview {
        /// Path to portfolio directory
        path: PathBuf,

        /// Port to serve on
        #[arg(short, long, default_value = "8080")]
        port: u16,
    },

    /// Build the static site
    Build {
        /// Path to portfolio directory
        path: PathBuf,

        /// Output directory for generated site
        #[arg(short, long)]
        output: PathBuf,
    },

    /// Generate shell completion scripts
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

fn init_tracing(verbose: bool) {
    let default_filter = if verbose {
        "folio=debug,folio_core=debug,folio_generator=debug,tower_http=debug"
    } else {
        "warn"
    };

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| default_filter.into()))
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Command::Init { path, owner } => commands::init::run(path, owner).await,
        Command::Validate { path } => commands::validate::run(path).await,
        Command::Routes { path, json } => commands::routes::run(path, json).await,
        Command::Preview { path, port } => commands::preview::run(path, port).await,
        Command::Build { path, output } => commands::build::run(path, output).await,
        Command::Completions { shell } => {
            let mut cmd = Cli::command();
            generate(shell, &mut cmd, "folio", &mut io::stdout());
            Ok(())
        }
    }
}
