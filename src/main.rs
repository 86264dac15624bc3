//! Platematch command-line entrypoint.

use std::path::PathBuf;
use std::sync::Arc;

use clap::{Parser, Subcommand};
use mimalloc::MiMalloc;
use serde::Serialize;

use platematch::catalog::CatalogCache;
use platematch::config::Config;
use platematch::explain::{ExplainConfig, Explainer, GenaiExplainer};
use platematch::matching::PreferenceSet;
use platematch::preprocess::{preprocess, preprocess_to};
use platematch::recommend::Recommender;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

#[derive(Parser, Debug)]
#[command(about = "Normalize restaurant CSVs and rank restaurants against preferences")]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Write the canonical dataset (original columns plus std_* columns).
    Preprocess {
        /// Raw CSV. Defaults to PLATEMATCH_RAW_PATH.
        #[arg(long)]
        input: Option<PathBuf>,

        /// Output CSV. Defaults to PLATEMATCH_PROCESSED_PATH when no input is
        /// given, otherwise `<input stem>_processed.csv` next to the input.
        #[arg(long)]
        output: Option<PathBuf>,
    },

    /// Rank restaurants matching the given preferences.
    Recommend {
        /// Free-text location, e.g. "Bangalore, Indiranagar".
        #[arg(long)]
        location: Option<String>,

        /// Price bucket: low, medium, high or premium.
        #[arg(long)]
        price: Option<String>,

        #[arg(long)]
        min_rating: Option<f64>,

        /// Cuisine to look for (repeatable).
        #[arg(long = "cuisine")]
        cuisines: Vec<String>,

        /// Number of results (clamped to 1..=10).
        #[arg(long, allow_negative_numbers = true)]
        num_results: Option<i64>,

        /// Ask the language model to explain the ranked results.
        #[arg(long, default_value_t = false)]
        explain: bool,
    },

    /// List distinct city/locality places.
    Places,

    /// List the distinct cuisine vocabulary.
    Cuisines,
}

fn print_json<T: Serialize + ?Sized>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn build_explainer(config: ExplainConfig) -> anyhow::Result<Arc<dyn Explainer>> {
    #[cfg(feature = "mock")]
    if config.use_mock {
        tracing::info!("Using mock explainer");
        return Ok(Arc::new(platematch::explain::MockExplainer::new()));
    }
    #[cfg(not(feature = "mock"))]
    if config.use_mock {
        anyhow::bail!("PLATEMATCH_MOCK_PROVIDER requires a build with the `mock` feature");
    }

    tracing::info!(model = %config.model, "Using model explainer");
    Ok(Arc::new(GenaiExplainer::new(config)))
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let config = Config::from_env()?;
    config.validate()?;

    match args.command {
        Command::Preprocess { input, output } => {
            let report = match (input, output) {
                (None, None) => preprocess_to(&config.raw_path, &config.processed_path)?,
                (None, Some(output)) => preprocess_to(&config.raw_path, &output)?,
                (Some(input), None) => preprocess(&input)?,
                (Some(input), Some(output)) => preprocess_to(&input, &output)?,
            };
            print_json(&report)?;
        }
        Command::Recommend {
            location,
            price,
            min_rating,
            cuisines,
            num_results,
            explain,
        } => {
            let prefs = PreferenceSet {
                price_preference: price,
                location,
                min_rating,
                cuisine_preferences: (!cuisines.is_empty()).then_some(cuisines),
                num_results,
            };

            let mut recommender = Recommender::new(CatalogCache::new(config.cache_capacity));
            if explain {
                recommender = recommender.with_explainer(build_explainer(ExplainConfig::from_env()?)?);
            }

            let response = recommender.recommend(&config.processed_path, &prefs).await?;
            print_json(&response)?;
        }
        Command::Places => {
            print_json(&platematch::catalog::places(&config.processed_path)?)?;
        }
        Command::Cuisines => {
            print_json(&platematch::catalog::cuisines(&config.processed_path)?)?;
        }
    }

    Ok(())
}
