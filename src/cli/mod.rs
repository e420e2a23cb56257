//! Command-line parsing for the `listings` binary.
//!
//! Parsing and dispatch live apart from the resolver modules so the library
//! stays usable without clap in the call path.

use clap::{Parser, Subcommand};

use crate::domain::{DEFAULT_MODEL_YEAR, FilterCriteria};
use crate::query::KeyCase;

/// Top-level CLI.
#[derive(Debug, Parser)]
#[command(name = "listings", version, about = "Car-rental listing resolver (vPIC + Unsplash)")]
pub struct Cli {
    /// Log debug detail for this crate (RUST_LOG overrides).
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Resolve filters to vehicle listings (live vPIC data, else the sample table).
    Cars(CarsArgs),
    /// Print the daily rental rate for a city mpg and model year.
    Rate(RateArgs),
    /// Print the image search URL for a vehicle, or the resolved photo with --fetch.
    Image(ImageArgs),
    /// Edit a navigational path+query string.
    #[command(subcommand)]
    Query(QueryCommand),
}

#[derive(Debug, Parser, Clone)]
pub struct CarsArgs {
    #[arg(long)]
    pub manufacturer: Option<String>,

    #[arg(long)]
    pub model: Option<String>,

    #[arg(long)]
    pub year: Option<i32>,

    #[arg(long)]
    pub fuel: Option<String>,

    /// Maximum number of listings (defaults to LISTINGS_DEFAULT_LIMIT or 10).
    #[arg(long)]
    pub limit: Option<usize>,

    /// Print JSON instead of a table.
    #[arg(long)]
    pub json: bool,

    /// Resolve an image for each listing (placeholder without an access key).
    #[arg(long)]
    pub images: bool,

    /// Seed for the synthetic attribute generator (reproducible output).
    #[arg(long)]
    pub seed: Option<u64>,
}

impl CarsArgs {
    pub fn criteria(&self) -> FilterCriteria {
        FilterCriteria {
            manufacturer: self.manufacturer.clone(),
            model: self.model.clone(),
            year: self.year,
            fuel_type: self.fuel.clone(),
            limit: self.limit,
        }
    }
}

#[derive(Debug, Parser, Clone)]
pub struct RateArgs {
    #[arg(long)]
    pub city_mpg: f64,

    #[arg(long)]
    pub year: i32,
}

#[derive(Debug, Parser, Clone)]
pub struct ImageArgs {
    #[arg(long)]
    pub make: String,

    #[arg(long)]
    pub model: String,

    #[arg(long, default_value_t = DEFAULT_MODEL_YEAR)]
    pub year: i32,

    /// Requested view (accepted, not used by photo search).
    #[arg(long)]
    pub angle: Option<String>,

    /// Run the search and print the first photo URL instead of the request URL.
    #[arg(long)]
    pub fetch: bool,
}

#[derive(Debug, Subcommand)]
pub enum QueryCommand {
    /// Set KEY=VALUE on LOCATION.
    Set(QuerySetArgs),
    /// Remove KEY from LOCATION.
    Unset(QueryUnsetArgs),
}

#[derive(Debug, Parser, Clone)]
pub struct QuerySetArgs {
    /// Current path and query, e.g. "/cars?manufacturer=honda".
    pub location: String,
    pub key: String,
    pub value: String,

    /// Key-case policy (default: preserve).
    #[arg(long, value_enum)]
    pub case: Option<KeyCase>,
}

#[derive(Debug, Parser, Clone)]
pub struct QueryUnsetArgs {
    /// Current path and query, e.g. "/cars?manufacturer=honda".
    pub location: String,
    pub key: String,

    /// Key-case policy (default: lower).
    #[arg(long, value_enum)]
    pub case: Option<KeyCase>,
}
