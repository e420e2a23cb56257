//! Top-level application orchestration.
//!
//! `src/main.rs` is intentionally tiny; this module is the "real main" that:
//! - parses CLI arguments and sets up logging
//! - loads settings from the environment
//! - runs the requested resolver on a single-threaded tokio runtime
//! - prints results

use std::future::Future;

use clap::Parser;

use crate::cli::{CarsArgs, Cli, Command, ImageArgs, QueryCommand, RateArgs};
use crate::config::Settings;
use crate::data::{RandomAttributes, VehicleLookup};
use crate::domain::VehicleDescriptor;
use crate::error::AppError;
use crate::images::ImageResolver;
use crate::query::{Location, QueryEditor};

/// Entry point for the `listings` binary.
pub fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    crate::logging::init_logging(cli.verbose);

    match cli.command {
        Command::Cars(args) => block_on(handle_cars(args)),
        Command::Rate(args) => {
            println!("{}", handle_rate(&args));
            Ok(())
        }
        Command::Image(args) => block_on(handle_image(args)),
        Command::Query(cmd) => {
            println!("{}", handle_query(&cmd));
            Ok(())
        }
    }
}

fn block_on<F>(fut: F) -> Result<(), AppError>
where
    F: Future<Output = Result<(), AppError>>,
{
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .map_err(|e| AppError::config(format!("Failed to start async runtime: {e}")))?;
    runtime.block_on(fut)
}

async fn handle_cars(args: CarsArgs) -> Result<(), AppError> {
    let settings = Settings::from_env()?;
    let attributes = args.seed.map(RandomAttributes::seeded).unwrap_or_default();
    let lookup = VehicleLookup::from_settings(&settings, attributes)?;

    let records = lookup.lookup(&args.criteria()).await;
    let images = if args.images {
        Some(ImageResolver::from_settings(&settings)?.fetch_images(&records).await)
    } else {
        None
    };

    if args.json {
        let listings = crate::report::listings(&records, images.as_deref());
        let json = serde_json::to_string_pretty(&listings)
            .map_err(|e| AppError::upstream(format!("Failed to serialize listings: {e}")))?;
        println!("{json}");
    } else {
        print!("{}", crate::report::format_listings(&records));
        if let Some(images) = &images {
            print!("\n{}", crate::report::format_images(&records, images));
        }
    }
    Ok(())
}

fn handle_rate(args: &RateArgs) -> String {
    crate::pricing::daily_rate(args.city_mpg, args.year)
}

async fn handle_image(args: ImageArgs) -> Result<(), AppError> {
    let settings = Settings::from_env()?;
    let resolver = ImageResolver::from_settings(&settings)?;
    let vehicle = VehicleDescriptor::new(&args.make, &args.model, args.year);

    let url = if args.fetch {
        resolver.fetch_image(vehicle).await
    } else {
        resolver.build_search_url(vehicle, args.angle.as_deref())
    };
    println!("{url}");
    Ok(())
}

fn handle_query(cmd: &QueryCommand) -> String {
    let defaults = QueryEditor::default();
    match cmd {
        QueryCommand::Set(args) => {
            let editor = QueryEditor {
                set_case: args.case.unwrap_or(defaults.set_case),
                ..defaults
            };
            editor.with_param(&Location::parse(&args.location), &args.key, &args.value)
        }
        QueryCommand::Unset(args) => {
            let editor = QueryEditor {
                delete_case: args.case.unwrap_or(defaults.delete_case),
                ..defaults
            };
            editor.without_param(&Location::parse(&args.location), &args.key)
        }
    }
}
