mod export;
mod histogram;
mod report;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "hhsal")]
#[command(about = "Salary report over hh.ru vacancy search results")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Fetch all vacancies for a keyword and print the salary report
    Fetch {
        /// Full-text search query, passed to the API verbatim
        text: String,
        /// Print the mean salary of vacancies whose title contains this text
        #[arg(long)]
        title: Option<String>,
        /// Print the mean salary of vacancies whose employer contains this text
        #[arg(long)]
        employer: Option<String>,
        /// Skip writing the .xlsx file
        #[arg(long)]
        no_export: bool,
        /// Print every record as a JSON line instead of the preview table
        #[arg(long)]
        json: bool,
    },
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    dotenvy::dotenv().ok();
    let config = hhsal_core::load_app_config()?;
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();
    tracing::debug!(?config, "loaded configuration");

    match cli.command {
        Some(Commands::Fetch {
            text,
            title,
            employer,
            no_export,
            json,
        }) => {
            let options = report::FetchOptions {
                text,
                title_filter: title.filter(|s| !s.is_empty()),
                employer_filter: employer.filter(|s| !s.is_empty()),
                export: !no_export,
                json,
            };
            report::run_fetch(&config, &options).await?;
        }
        None => println!("nothing to do; try `hhsal fetch <TEXT>`"),
    }

    Ok(())
}
