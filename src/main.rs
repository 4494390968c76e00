use anyhow::Context;
use clap::Parser;
use dinematch::{load_csv, QueryInput, Recommendation, RecommendConfig, Recommender};
use std::path::PathBuf;
use tracing::{info, Level};
use tracing_subscriber::EnvFilter;

/// Recommend restaurants from a static dataset
#[derive(Parser, Debug)]
#[command(name = "dinematch")]
#[command(about = "Filter-then-rank restaurant recommendations", long_about = None)]
struct Args {
    /// Path to the restaurant CSV file
    #[arg(short, long, default_value = "zomato.csv")]
    data: PathBuf,

    /// Location, matched exactly
    #[arg(long)]
    location: String,

    /// Restaurant type, matched exactly
    #[arg(long)]
    rest_type: String,

    /// Online ordering (Yes or No)
    #[arg(long, default_value = "Yes")]
    online_order: String,

    /// Table booking (Yes or No)
    #[arg(long, default_value = "Yes")]
    book_table: String,

    /// Minimum rating
    #[arg(long)]
    min_rating: String,

    /// Neighbors to rank [default: 5]
    #[arg(long)]
    neighbors: Option<usize>,

    /// Results to show [default: 3]
    #[arg(long)]
    limit: Option<usize>,

    /// Optional JSON file with recommender settings; flags override it
    #[arg(long)]
    config: Option<PathBuf>,

    /// Print the result as JSON
    #[arg(long)]
    json: bool,

    /// Log level
    #[arg(long, default_value = "info")]
    log_level: String,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let log_level = match args.log_level.as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };

    // RUST_LOG wins over --log-level
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::default().add_directive(log_level.into()));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    info!("Starting dinematch v{}", env!("CARGO_PKG_VERSION"));

    let mut config = match &args.config {
        Some(path) => {
            let raw = std::fs::read_to_string(path)
                .with_context(|| format!("reading config {}", path.display()))?;
            RecommendConfig::from_json(&raw)?
        }
        None => RecommendConfig::default(),
    };
    if let Some(neighbors) = args.neighbors {
        config.neighbors = neighbors;
    }
    if let Some(limit) = args.limit {
        config.display_limit = limit;
    }

    let recommender = Recommender::new(config)?;
    let dataset = load_csv(&args.data)
        .with_context(|| format!("loading dataset {}", args.data.display()))?;

    let input = QueryInput {
        location: args.location,
        restaurant_type: args.rest_type,
        accepts_online_order: args.online_order,
        allows_table_booking: args.book_table,
        minimum_rating: args.min_rating,
    };

    let recommendation = recommender.recommend(&dataset, &input)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&recommendation.view())?);
        return Ok(());
    }

    match &recommendation {
        Recommendation::NoMatch { .. } => {
            println!("No restaurants found matching the provided preferences.");
        }
        Recommendation::Matches { results, .. } => {
            for (rank, neighbor) in results.iter().enumerate() {
                let record = neighbor.record;
                println!(
                    "{}. {} | {} | {} | online order: {} | book table: {} | rate: {} | distance: {:.4}",
                    rank + 1,
                    record.name.as_deref().unwrap_or("(unnamed)"),
                    record.location,
                    record.restaurant_type,
                    record.accepts_online_order,
                    record.allows_table_booking,
                    record.rating,
                    neighbor.distance,
                );
            }
        }
    }

    Ok(())
}
