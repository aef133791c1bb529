//! # Innkeep CLI
//!
//! Terminal client for the hotel search and booking backend.
//!
//! # Usage
//!
//! ```bash
//! # Log in; the session is kept in the storage file between runs
//! innkeep login -u ana -p secret
//!
//! # Search the catalogue, cheapest first
//! innkeep search miami --sort price-low
//!
//! # Book and manage stays
//! innkeep book 65a1f0c2 --check-in 2024-06-01 --check-out 2024-06-04
//! innkeep reservations
//! innkeep cancel r1 --yes
//!
//! # Administration
//! innkeep admin dashboard
//! innkeep admin create-hotel --name "Seaside Inn" --address "1 Ocean Dr" \
//!     --city Miami --country USA --price 180 --rooms 12 --amenity wifi
//! ```

#![cfg_attr(not(test), forbid(unsafe_code))]

use clap::{Parser, Subcommand};

use innkeep_core::domain::{Role, SortOption};

mod commands;
mod config;
mod state;
mod telemetry;

use commands::admin::HotelArgs;
use commands::system::Theme;
use config::AppConfig;
use state::AppState;
use telemetry::TelemetryConfig;

#[derive(Parser)]
#[command(name = "innkeep")]
#[command(author, version, about = "Search, book and manage hotel stays")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Log in and keep the session
    Login {
        #[arg(short, long)]
        username: String,
        #[arg(short, long)]
        password: String,
    },
    /// Create an account and log in with it
    Register {
        #[arg(short, long)]
        username: String,
        #[arg(short, long)]
        password: String,
        /// Repeat the password; defaults to the same value
        #[arg(long)]
        confirm: Option<String>,
        /// Register as an administrator
        #[arg(long)]
        admin: bool,
    },
    /// Forget the stored session
    Logout,
    /// Show the logged-in user
    Whoami,
    /// Search hotels
    Search {
        /// Free-text query; empty lists everything
        #[arg(default_value = "")]
        query: String,
        #[arg(long, default_value_t = 1)]
        page: u32,
        /// relevance, price-low, price-high or rating
        #[arg(long, default_value = "relevance")]
        sort: SortOption,
    },
    /// Show one hotel
    Hotel { id: String },
    /// Check which hotels have rooms for a date range
    Availability {
        #[arg(required = true)]
        hotel_ids: Vec<String>,
        #[arg(long)]
        check_in: String,
        #[arg(long)]
        check_out: String,
    },
    /// Book a stay
    Book {
        hotel_id: String,
        #[arg(long)]
        check_in: String,
        #[arg(long)]
        check_out: String,
    },
    /// List your reservations
    Reservations,
    /// Cancel an upcoming reservation
    Cancel {
        id: String,
        /// Confirm the cancellation
        #[arg(long)]
        yes: bool,
    },
    /// Administrator tools
    Admin {
        #[command(subcommand)]
        action: AdminAction,
    },
    /// Check the backend
    Health,
    /// Show or set the theme preference
    Theme {
        #[arg(value_enum)]
        set: Option<Theme>,
    },
}

#[derive(Subcommand)]
enum AdminAction {
    /// Hotel, user and administrator counts with both lists
    Dashboard,
    /// Create a hotel
    CreateHotel {
        #[command(flatten)]
        hotel: HotelArgs,
    },
    /// Update a hotel; omitted fields keep their current value
    UpdateHotel {
        id: String,
        #[command(flatten)]
        hotel: HotelArgs,
    },
    /// Delete a hotel
    DeleteHotel {
        id: String,
        #[arg(long)]
        yes: bool,
    },
    /// Delete a user
    DeleteUser {
        id: i64,
        #[arg(long)]
        yes: bool,
    },
    /// Microservice status overview
    Services,
    /// Change the replica count of a service
    Scale { service: String, replicas: u32 },
    /// Show recent logs of a service
    Logs { service: String },
    /// Restart a service
    Restart { service: String },
}

#[tokio::main]
async fn main() {
    // Load .env file if present
    dotenvy::dotenv().ok();

    telemetry::init_telemetry(&TelemetryConfig::from_env());

    let cli = Cli::parse();
    let config = AppConfig::from_env();

    if let Err(e) = run(cli, &config).await {
        tracing::error!(error = %e, "Command failed");
        eprintln!("{e}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli, config: &AppConfig) -> anyhow::Result<()> {
    let state = AppState::new(config).await?;

    match cli.command {
        Commands::Login { username, password } => {
            commands::auth::login(&state, &username, &password).await?;
        }
        Commands::Register {
            username,
            password,
            confirm,
            admin,
        } => {
            let role = if admin {
                Role::Administrator
            } else {
                Role::Customer
            };
            let confirm = confirm.unwrap_or_else(|| password.clone());
            commands::auth::register(&state, &username, &password, &confirm, role).await?;
        }
        Commands::Logout => commands::auth::logout(&state).await,
        Commands::Whoami => commands::auth::whoami(&state),
        Commands::Search { query, page, sort } => {
            commands::hotels::search(&state, &query, page, sort).await?;
        }
        Commands::Hotel { id } => commands::hotels::show(&state, &id).await?,
        Commands::Availability {
            hotel_ids,
            check_in,
            check_out,
        } => {
            commands::hotels::availability(&state, &hotel_ids, &check_in, &check_out).await?;
        }
        Commands::Book {
            hotel_id,
            check_in,
            check_out,
        } => commands::hotels::book(&state, &hotel_id, &check_in, &check_out).await?,
        Commands::Reservations => commands::reservations::list(&state).await?,
        Commands::Cancel { id, yes } => commands::reservations::cancel(&state, &id, yes).await?,
        Commands::Admin { action } => match action {
            AdminAction::Dashboard => commands::admin::dashboard(&state).await?,
            AdminAction::CreateHotel { hotel } => {
                commands::admin::create_hotel(&state, hotel).await?;
            }
            AdminAction::UpdateHotel { id, hotel } => {
                commands::admin::update_hotel(&state, id, hotel).await?;
            }
            AdminAction::DeleteHotel { id, yes } => {
                commands::admin::delete_hotel(&state, id, yes).await?;
            }
            AdminAction::DeleteUser { id, yes } => {
                commands::admin::delete_user(&state, id, yes).await?;
            }
            AdminAction::Services => commands::admin::services(&state).await?,
            AdminAction::Scale { service, replicas } => {
                commands::admin::scale(&state, &service, replicas).await?;
            }
            AdminAction::Logs { service } => commands::admin::logs(&state, &service).await?,
            AdminAction::Restart { service } => {
                commands::admin::restart(&state, &service).await?;
            }
        },
        Commands::Health => commands::system::health(&state).await?,
        Commands::Theme { set } => commands::system::theme(&state, set).await?,
    }
    Ok(())
}
