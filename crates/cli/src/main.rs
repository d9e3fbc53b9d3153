//! Backline CLI - seeding and management tools.
//!
//! # Usage
//!
//! ```bash
//! # Seed the data service with a demo catalog
//! bl-cli seed
//!
//! # Create a user (argon2-hashed password)
//! bl-cli user create -e ana@example.com -n "Ana Quispe" -p "secreta123"
//! bl-cli user create -e admin@backline.pe -n "Admin" -p "secreta123" -r admin
//!
//! # Render an admin view against a running API (smoke tool)
//! bl-cli console productos
//! ```
//!
//! # Commands
//!
//! - `seed` - Insert demo products/promotions/banners through the data service
//! - `user create` - Create users with hashed passwords
//! - `console` - Drive the admin SPA engine against a live API

#![cfg_attr(not(test), forbid(unsafe_code))]

use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "bl-cli")]
#[command(author, version, about = "Backline CLI tools")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Seed the data service with a demo catalog
    Seed,
    /// Manage shop users
    User {
        #[command(subcommand)]
        action: UserAction,
    },
    /// Render an admin view against a running API
    Console {
        /// Route hash name (e.g. `productos`, `pedidos`)
        route: String,

        /// Base URL of the REST API
        #[arg(long, default_value = "http://localhost:3000/api")]
        api_url: String,
    },
}

#[derive(Subcommand)]
enum UserAction {
    /// Create a new user
    Create {
        /// Email address
        #[arg(short, long)]
        email: String,

        /// Display name
        #[arg(short, long)]
        name: String,

        /// Password (hashed before storage)
        #[arg(short, long)]
        password: String,

        /// Role (`cliente`, `admin`)
        #[arg(short, long, default_value = "cliente")]
        role: String,
    },
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
    match cli.command {
        Commands::Seed => commands::seed::run().await?,
        Commands::User { action } => match action {
            UserAction::Create {
                email,
                name,
                password,
                role,
            } => {
                commands::user::create(&email, &name, &password, &role).await?;
            }
        },
        Commands::Console { route, api_url } => {
            commands::console::render(&route, &api_url).await?;
        }
    }
    Ok(())
}
