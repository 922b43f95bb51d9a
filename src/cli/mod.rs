// CLI module for serving and database administration

pub mod migrate;

use clap::{Parser, Subcommand};

/// Item catalog service CLI
#[derive(Parser, Debug)]
#[command(name = "item-catalog")]
#[command(about = "Item catalog HTTP service", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug, PartialEq)]
pub enum Commands {
    /// Start the HTTP server (default)
    Serve,

    /// Database schema management
    #[command(subcommand)]
    Migrate(MigrateCommands),
}

#[derive(Subcommand, Debug, PartialEq)]
pub enum MigrateCommands {
    /// Apply all pending migrations
    Up,

    /// Roll back applied migrations
    Down {
        /// Number of migrations to roll back
        #[arg(long, default_value_t = 1)]
        steps: u32,
    },

    /// Show applied and pending migrations
    Status,

    /// Drop every table and re-apply all migrations
    Fresh,
}
