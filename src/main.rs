mod allocator;
mod cards;
mod compose;
mod config;
mod countries;
mod entity;
mod error;
mod output;
mod rand;
mod record;
mod resource;
mod seed;

use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use config::Dialect;
use record::ListingPrice;

/// Generates synthetic seed data as bulk-insert SQL scripts
#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
struct Args {
    #[clap(subcommand)]
    command: SubCommandArgs,
    /// SQL dialect the statements are rendered in
    #[clap(short = 'd', long, value_enum, default_value = "mysql")]
    dialect: Dialect,
    /// Seed for the random generator, for reproducible output
    #[clap(long)]
    seed: Option<u64>,
    /// Directory holding the resource word lists
    #[clap(short = 'r', long, default_value = "resources")]
    resources: PathBuf,
    /// Directory the SQL scripts are written to
    #[clap(short = 'o', long, default_value = "scripts")]
    out_dir: PathBuf,
    /// File the next free ids are kept in between runs
    #[clap(long, default_value = "seed_state.toml")]
    state: PathBuf,
}

#[derive(Subcommand, Debug)]
enum SubCommandArgs {
    /// Users, businesses with products, inventory and sale listings, and global admins
    Seed {
        #[clap(long, default_value = "1001")]
        users: u32,
        #[clap(long, default_value = "1000")]
        businesses: u32,
        #[clap(long, default_value = "5")]
        admins: u32,
        /// Attribute likes to the users of this earlier run instead of this run's users
        #[clap(long, value_parser = clap::value_parser!(u32).range(1..))]
        run_counter: Option<u32>,
        /// Users inserted per run, used with --run-counter
        #[clap(long, default_value = "1000", value_parser = clap::value_parser!(u32).range(1..))]
        window_size: u32,
        #[clap(long, value_enum, default_value = "per-item")]
        listing_price: ListingPrice,
        /// Raise the starting ids to max(id) + 1 of this database
        #[clap(short = 'u', long)]
        db_url: Option<String>,
    },
    /// Marketplace cards
    Cards {
        #[clap(long, default_value = "500")]
        cards: u32,
        #[clap(short = 'u', long)]
        db_url: Option<String>,
    },
    /// Country list to an exported JavaScript array
    Countries {
        #[clap(long, default_value = "country_list.txt")]
        input: PathBuf,
        #[clap(long, default_value = "country_names.js")]
        output: PathBuf,
    },
}

#[tokio::main(flavor = "current_thread")]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();
    let args = Args::parse();
    if let Err(err) = run(&args).await {
        eprintln!("Error: {err:#}");
        std::process::exit(1);
    }
}

async fn run(args: &Args) -> anyhow::Result<()> {
    match &args.command {
        SubCommandArgs::Seed { .. } => {
            let ids = seed::execute(args)
                .await
                .context("Failed to generate seed data")?;
            print!("{ids}");
        }
        SubCommandArgs::Cards { .. } => {
            let ids = cards::execute(args)
                .await
                .context("Failed to generate marketplace cards")?;
            print!("{ids}");
        }
        SubCommandArgs::Countries { input, output } => {
            countries::execute(input, output).context("Failed to extract country names")?;
        }
    }
    Ok(())
}
