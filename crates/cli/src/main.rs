//! Emporium Rewards CLI - points lookup and customer administration.
//!
//! # Usage
//!
//! ```bash
//! # Public points lookup (no login)
//! emporium lookup 5550001111
//!
//! # Admin session
//! emporium login -e admin@example.com -p secret
//! emporium logout
//!
//! # Customer administration (login required)
//! emporium search 555 --field phone
//! emporium edit 5550001111 --name "Ada Lovelace" --add-points 50
//! emporium add --phone 5550002222 --name "Grace Hopper" --points 100
//! emporium delete grace@example.com
//! emporium logs
//! emporium undo log-42
//! emporium export --output customers.csv
//! ```
//!
//! Configuration comes from the environment (see `config`): the API base
//! URL is required, and the admin token persists in a local file between
//! invocations.

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use secrecy::SecretString;

use emporium_api::ApiClient;
use emporium_app::session::SessionStore;
use emporium_app::{GuardError, ensure_admin};
use emporium_core::AdminSession;

mod commands;
mod config;
mod token_file;

use commands::customers::{AddArgs, EditArgs, FieldArg};
use config::Config;
use token_file::FileTokenStore;

#[derive(Parser)]
#[command(name = "emporium")]
#[command(author, version, about = "Emporium rewards desk CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Look up a points balance by phone number (no login required)
    Lookup {
        /// Customer phone number
        phone: String,
    },
    /// Log in as an administrator
    Login {
        /// Admin email address
        #[arg(short, long)]
        email: String,

        /// Admin password
        #[arg(short, long)]
        password: String,
    },
    /// Log out and discard the persisted token
    Logout,
    /// Search customers
    Search {
        /// Search query
        query: String,

        /// Field the query is narrowed on
        #[arg(short, long, value_enum, default_value_t = FieldArg::Phone)]
        field: FieldArg,
    },
    /// Edit a customer's fields and point balance
    Edit(EditArgs),
    /// Add a new customer
    Add(AddArgs),
    /// Delete a customer by phone number or email
    Delete {
        /// Phone number or email identifying the customer
        value: String,
    },
    /// Show the admin action history, newest first
    Logs,
    /// Undo a point modification by log entry ID
    Undo {
        /// Log entry ID
        log_id: String,
    },
    /// Export all customers as CSV
    Export {
        /// Write to a file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

/// Shared command context: API client plus session and token storage.
struct Context {
    client: ApiClient,
    session: SessionStore,
    tokens: FileTokenStore,
}

impl Context {
    fn from_config(config: &Config) -> Self {
        Self {
            client: ApiClient::new(config.api_url.clone()),
            session: SessionStore::new(),
            tokens: FileTokenStore::new(config.token_file.clone()),
        }
    }

    /// Validate the persisted token before a protected command runs.
    async fn require_admin(&self) -> Result<AdminSession, Box<dyn std::error::Error>> {
        ensure_admin(&self.client, &self.session, &self.tokens)
            .await
            .map_err(|err| match err {
                GuardError::NotLoggedIn => "Not logged in. Run `emporium login` first".into(),
                GuardError::Rejected => {
                    "Session expired or not an admin. Run `emporium login` again".into()
                }
                other => Box::from(other),
            })
    }
}

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    let result: Result<(), Box<dyn std::error::Error>> = run(cli).await;

    if let Err(e) = result {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::from_env()?;
    let ctx = Context::from_config(&config);

    match cli.command {
        Commands::Lookup { phone } => commands::lookup::run(&ctx.client, &phone).await?,
        Commands::Login { email, password } => {
            commands::auth::login(
                &ctx.client,
                &ctx.session,
                &ctx.tokens,
                &email,
                SecretString::from(password),
            )
            .await?;
        }
        Commands::Logout => commands::auth::logout(&ctx.session, &ctx.tokens)?,
        Commands::Search { query, field } => {
            let session = ctx.require_admin().await?;
            commands::customers::search(&ctx.client, &session.token, &query, field).await?;
        }
        Commands::Edit(args) => {
            let session = ctx.require_admin().await?;
            commands::customers::edit(&ctx.client, &session.token, args).await?;
        }
        Commands::Add(args) => {
            let session = ctx.require_admin().await?;
            commands::customers::add(&ctx.client, &session.token, args).await?;
        }
        Commands::Delete { value } => {
            let session = ctx.require_admin().await?;
            commands::customers::delete(&ctx.client, &session.token, &value).await?;
        }
        Commands::Logs => {
            let session = ctx.require_admin().await?;
            commands::logs::list(&ctx.client, &session.token).await?;
        }
        Commands::Undo { log_id } => {
            let session = ctx.require_admin().await?;
            commands::logs::undo(&ctx.client, &session.token, &log_id).await?;
        }
        Commands::Export { output } => {
            let session = ctx.require_admin().await?;
            commands::export::run(&ctx.client, &session.token, output).await?;
        }
    }
    Ok(())
}
