//! CLI definition using clap

use carlot_types::OutputFormat;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "carlot")]
#[command(version)]
#[command(about = "Local car marketplace: browse listings, buy cars, manage inventory")]
#[command(long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output format (json, table). Uses config value if not specified.
    #[arg(long, short = 'f', global = true)]
    pub format: Option<OutputFormat>,

    /// Catalog directory override
    #[arg(long, global = true)]
    pub data_dir: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Browse available cars, narrowed by search and filters
    Browse {
        /// Free-text search across make, model, and description
        #[arg(long, short = 's')]
        search: Option<String>,

        /// Exact make (empty means all makes)
        #[arg(long)]
        make: Option<String>,

        /// Lowest price to include; defaults to the cheapest listing
        #[arg(long)]
        min_price: Option<u64>,

        /// Highest price to include; defaults to the priciest listing
        #[arg(long)]
        max_price: Option<u64>,

        /// Earliest model year to include
        #[arg(long)]
        min_year: Option<i32>,

        /// Latest model year to include
        #[arg(long)]
        max_year: Option<i32>,

        /// Show at most this many listings
        #[arg(long, short = 'n')]
        limit: Option<usize>,
    },

    /// List the makes present among available cars
    Makes,

    /// Show one listing in full
    Show {
        /// Listing id
        id: String,
    },

    /// Buy a car
    Buy {
        /// Listing id
        id: String,

        /// Buyer id; defaults to the logged-in user
        #[arg(long)]
        buyer: Option<String>,
    },

    /// List cars you have bought
    Purchases {
        /// Buyer id; defaults to the logged-in user
        #[arg(long)]
        buyer: Option<String>,
    },

    /// List every record in the catalog, sold included
    Inventory,

    /// Add a new listing
    Add {
        #[arg(long)]
        make: String,

        #[arg(long)]
        model: String,

        #[arg(long)]
        year: i32,

        #[arg(long)]
        price: u64,

        #[arg(long)]
        description: Option<String>,

        #[arg(long)]
        image_url: Option<String>,

        /// Feature tag; repeat for multiple features
        #[arg(long = "feature")]
        features: Vec<String>,
    },

    /// Edit an existing listing
    Edit {
        /// Listing id
        id: String,

        #[arg(long)]
        make: Option<String>,

        #[arg(long)]
        model: Option<String>,

        #[arg(long)]
        year: Option<i32>,

        #[arg(long)]
        price: Option<u64>,

        #[arg(long)]
        description: Option<String>,

        #[arg(long)]
        image_url: Option<String>,

        /// Replace all feature tags; repeat for multiple features
        #[arg(long = "feature")]
        features: Vec<String>,

        /// Force the sold flag; un-selling clears the buyer
        #[arg(long)]
        sold: Option<bool>,

        /// Record a buyer directly (implies sold)
        #[arg(long)]
        buyer: Option<String>,
    },

    /// Delete a listing
    Remove {
        /// Listing id
        id: String,
    },

    /// Remember a user id for buy/purchases
    Login {
        /// Opaque user id
        user_id: String,
    },

    /// Forget the remembered user id
    Logout,

    /// Show the remembered user id
    Whoami,

    /// Show or change configuration
    Config {
        /// Show current configuration
        #[arg(long)]
        show: bool,

        /// Set default output format
        #[arg(long)]
        set_format: Option<OutputFormat>,

        /// Set the catalog directory
        #[arg(long)]
        set_data_dir: Option<PathBuf>,

        /// Reset configuration to defaults
        #[arg(long)]
        reset: bool,
    },
}
