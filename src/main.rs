use anyhow::Result;
use clap::{Parser, Subcommand};

/// hutbook - cabin booking calendar
#[derive(Parser)]
#[command(name = "hutbook")]
#[command(about = "Shared booking calendar for a holiday cabin", long_about = None)]
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
    /// Manage user accounts
    User {
        #[command(subcommand)]
        command: UserCommands,
    },
}

#[derive(Subcommand)]
enum UserCommands {
    /// Create an account
    Create {
        username: String,

        #[arg(long)]
        password: String,

        /// Grant admin rights
        #[arg(long)]
        admin: bool,
    },
    /// Grant or revoke admin rights
    SetRole {
        username: String,

        #[arg(value_enum)]
        role: hutbook::cli::Role,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = hutbook::config::Config::load(cli.config.clone())?;
    config.validate().map_err(|e| anyhow::anyhow!(e))?;

    hutbook::observability::init_observability(
        "hutbook",
        env!("CARGO_PKG_VERSION"),
        &config.observability.log_level,
    )?;

    match cli.command {
        Commands::Serve { host, port } => hutbook::cli::serve(config, host, port).await,
        Commands::Migrate => hutbook::cli::migrate(config).await,
        Commands::Reset => hutbook::cli::reset(config).await,
        Commands::User { command } => match command {
            UserCommands::Create {
                username,
                password,
                admin,
            } => hutbook::cli::create_user(config, username, password, admin).await,
            UserCommands::SetRole { username, role } => {
                hutbook::cli::set_role(config, username, role).await
            }
        },
    }
}
