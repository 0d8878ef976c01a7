//! Command-line client for the puppy API
//!
//! Every command loads the current list, performs one action through the
//! board and prints the resulting table.

use clap::{Parser, Subcommand};
use puppy::prelude::*;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

/// Browse and edit the rescue's puppies
#[derive(Parser, Debug)]
#[command(name = "puppy-client")]
#[command(version, about, long_about = None)]
struct Cli {
    /// API base URL (overrides PUPPY_API_BASE_URL)
    #[arg(long, global = true)]
    base_url: Option<String>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Show all puppies (default)
    List,

    /// Add a puppy
    Add {
        #[arg(long)]
        name: String,
        #[arg(long)]
        breed: Option<String>,
        /// Weight in pounds
        #[arg(long)]
        weight: Option<String>,
        #[arg(long)]
        vaccinated: bool,
    },

    /// Edit a puppy; fields not given keep their current value
    Edit {
        id: i32,
        #[arg(long)]
        name: Option<String>,
        /// Empty string clears the breed
        #[arg(long)]
        breed: Option<String>,
        /// Empty string clears the weight
        #[arg(long)]
        weight: Option<String>,
        #[arg(long)]
        vaccinated: Option<bool>,
    },

    /// Delete a puppy
    Delete { id: i32 },
}

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let api = match cli.base_url {
        Some(url) => HttpPuppyApi::new(url),
        None => HttpPuppyApi::from_config(&ClientConfig::from_env()),
    };
    tracing::debug!(base_url = api.base_url(), "using puppy API");

    let mut cache = PuppyCache::new();
    let mut board = PuppyBoard::new();

    if cache.load(&api).await {
        run(cli.command.unwrap_or(Command::List), &mut board, &mut cache, &api).await;
    }

    print!("{}", board.render(&cache));
    if cache.error().is_some() {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}

async fn run(command: Command, board: &mut PuppyBoard, cache: &mut PuppyCache, api: &HttpPuppyApi) {
    match command {
        Command::List => {}
        Command::Add {
            name,
            breed,
            weight,
            vaccinated,
        } => {
            board.form.name = name;
            board.form.breed = breed.unwrap_or_default();
            board.form.weight_lbs = weight.unwrap_or_default();
            board.form.vaccinated = vaccinated;
            board.add(cache, api).await;
        }
        Command::Edit {
            id,
            name,
            breed,
            weight,
            vaccinated,
        } => {
            let Some(current) = cache.find(id).cloned() else {
                cache.fail(puppy::core::error::NOT_FOUND_MESSAGE);
                return;
            };
            board.start_edit(&current);
            if let Some(name) = name {
                board.edit_row.name = name;
            }
            if let Some(breed) = breed {
                board.edit_row.breed = breed;
            }
            if let Some(weight) = weight {
                board.edit_row.weight_lbs = weight;
            }
            if let Some(vaccinated) = vaccinated {
                board.edit_row.vaccinated = vaccinated;
            }
            board.save_edit(cache, api).await;
            board.cancel_edit();
        }
        Command::Delete { id } => {
            board.remove(cache, api, id).await;
        }
    }
}
