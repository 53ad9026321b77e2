use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing::error;

use tandem::{app, pairs, server};

/// Find the employees who worked together the longest
#[derive(Parser)]
#[command(name = "tandem")]
#[command(about = "Employee pair collaboration analytics", long_about = None)]
struct Cli {
    /// Enable verbose output (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the HTTP upload service
    Serve {
        /// Port to listen on (overrides config file)
        #[arg(short, long)]
        port: Option<u16>,

        /// Path to configuration file
        #[arg(short = 'c', long)]
        config: Option<PathBuf>,

        /// Maximum accepted upload size in megabytes
        #[arg(long)]
        max_upload_mb: Option<u64>,
    },
    /// Analyze a local CSV file and print the result rows as JSON
    Analyze {
        /// Path to the assignments CSV
        file: PathBuf,
    },
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    app::logging::init_logging(cli.verbose);

    let result = match cli.command {
        Commands::Serve {
            port,
            config,
            max_upload_mb,
        } => run_serve(port, config, max_upload_mb).await,
        Commands::Analyze { file } => run_analyze(file),
    };

    if let Err(e) = result {
        error!("{e}");
        std::process::exit(1);
    }
}

async fn run_serve(
    port: Option<u16>,
    config: Option<PathBuf>,
    max_upload_mb: Option<u64>,
) -> anyhow::Result<()> {
    let config = app::resolve_config(config, port, max_upload_mb)?;
    server::serve(config).await?;
    Ok(())
}

fn run_analyze(file: PathBuf) -> anyhow::Result<()> {
    let input = std::fs::File::open(&file)?;
    let today = chrono::Local::now().date_naive();
    let results = pairs::most_collaborative(input, today)?;
    println!("{}", serde_json::to_string_pretty(&results)?);
    Ok(())
}
