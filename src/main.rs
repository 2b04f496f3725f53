use anyhow::Result;
use clap::{Parser, Subcommand};

mod cli;

/// coursehub - course catalog with admin and user accounts
#[derive(Parser)]
#[command(name = "coursehub")]
#[command(about = "Course selling backend with token-gated admin and user APIs", long_about = None)]
struct Cli {
    /// Path to configuration file
    #[arg(long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP server
    Serve {
        /// Server host address (overrides config file)
        #[arg(long)]
        host: Option<String>,

        /// Server port (overrides config file)
        #[arg(long)]
        port: Option<u16>,
    },
    /// Run database migrations
    Migrate,
    /// Drop database if exists and recreate with migrations
    Reset,
    /// Create an admin or user account
    CreateAccount {
        #[arg(long, value_enum)]
        role: cli::account::Role,

        #[arg(long)]
        username: String,

        #[arg(long)]
        password: String,

        #[arg(long)]
        name: Option<String>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Cli::parse();

    let config = coursehub::Config::load(args.config)?;
    config.validate().map_err(|e| anyhow::anyhow!(e))?;

    coursehub::observability::init_observability(&config.observability.log_level)?;

    match args.command {
        Commands::Serve { host, port } => cli::server::serve(config, host, port).await,
        Commands::Migrate => cli::migrate::migrate(&config).await,
        Commands::Reset => cli::migrate::reset(&config).await,
        Commands::CreateAccount {
            role,
            username,
            password,
            name,
        } => cli::account::create(&config, role, username, password, name).await,
    }
}
