//! YouTube view count predictor CLI
//!
//! Training builds a model from API search results or a CSV file; the
//! predict commands cover the three input surfaces: manual field entry,
//! URL lookup and CSV batch.

use anyhow::Context;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use yt_view_predictor::{
    cleaner::{CategoryEncoder, Cleaner},
    client::YouTubeClient,
    config::Config,
    data,
    features::FeatureEngineer,
    inference::Predictor,
    model::{Dataset, ModelTrainer},
    types::{category_name, RawRecord},
};

#[derive(Parser)]
#[command(name = "yt-predictor")]
#[command(about = "Predict YouTube video view counts from metadata")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Config file path
    #[arg(short, long, default_value = "config.toml")]
    config: String,
}

#[derive(Subcommand)]
enum Commands {
    /// Fetch metadata, train all candidate models and save the best
    Train {
        /// Search query for building the training set via the API
        #[arg(short, long)]
        query: Option<String>,
        /// Train from a local CSV instead of the API
        #[arg(long)]
        csv: Option<PathBuf>,
        /// Number of videos to fetch
        #[arg(short, long)]
        max_results: Option<usize>,
    },
    /// Fetch metadata for a query and dump it to CSV
    Fetch {
        query: String,
        /// Output CSV path
        #[arg(short, long, default_value = "videos.csv")]
        output: PathBuf,
        #[arg(short, long)]
        max_results: Option<usize>,
    },
    /// Predict from manually entered fields
    Predict {
        #[arg(long, default_value = "Sample YouTube title")]
        title: String,
        #[arg(long, default_value = "")]
        description: String,
        /// `|`-delimited tag list
        #[arg(long, default_value = "")]
        tags: String,
        /// YouTube category id (e.g. 27 = Education)
        #[arg(long, default_value = "27")]
        category_id: String,
        #[arg(long, default_value = "2024-01-01 12:00:00")]
        publish_time: String,
        #[arg(long, default_value = "PT5M30S")]
        duration: String,
        #[arg(long, default_value = "0")]
        likes: u64,
        #[arg(long, default_value = "0")]
        comments: u64,
    },
    /// Predict for an existing video from its URL
    PredictUrl { url: String },
    /// Predict for every row of a CSV batch
    PredictCsv { input: PathBuf },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    let config = Config::load(&cli.config)?;

    match cli.command {
        Commands::Train {
            query,
            csv,
            max_results,
        } => train(config, query, csv, max_results).await,
        Commands::Fetch {
            query,
            output,
            max_results,
        } => fetch(config, &query, &output, max_results).await,
        Commands::Predict {
            title,
            description,
            tags,
            category_id,
            publish_time,
            duration,
            likes,
            comments,
        } => {
            let record = RawRecord {
                video_id: "manual_entry".to_string(),
                title,
                description,
                tags,
                category_id,
                publish_time,
                duration,
                view_count: "0".to_string(),
                like_count: likes.to_string(),
                comment_count: comments.to_string(),
            };
            predict_one(config, &record)
        }
        Commands::PredictUrl { url } => predict_url(config, &url).await,
        Commands::PredictCsv { input } => predict_csv(config, &input),
    }
}

async fn train(
    config: Config,
    query: Option<String>,
    csv: Option<PathBuf>,
    max_results: Option<usize>,
) -> anyhow::Result<()> {
    let records = match csv {
        Some(path) => data::read_csv(&path)
            .with_context(|| format!("reading training CSV {}", path.display()))?,
        None => {
            let client = YouTubeClient::new(&config.youtube)?;
            let query = query.unwrap_or_else(|| config.youtube.default_query.clone());
            let max_results = max_results.unwrap_or(config.youtube.max_results);
            tracing::info!(%query, max_results, "fetching training data");
            client.fetch(&query, max_results).await?
        }
    };
    tracing::info!(records = records.len(), "acquired raw records");

    let mut cleaned = Cleaner::clean(&records);
    let mut encoder = CategoryEncoder::new();
    encoder.fit_encode(&mut cleaned);

    let features = FeatureEngineer::engineer_all(&cleaned);
    let (train_rows, test_rows) = Cleaner::split(
        &features,
        config.pipeline.test_fraction,
        config.pipeline.split_seed,
    );
    let train_set = Dataset::from_features(&train_rows)?;
    let test_set = Dataset::from_features(&test_rows)?;
    tracing::info!(
        train_rows = train_set.n_rows(),
        test_rows = test_set.n_rows(),
        "assembled feature matrices"
    );

    let mut trainer = ModelTrainer::new();
    trainer.train_and_evaluate(&train_set, &test_set)?;

    println!("\nModel comparison (log-space metrics, sorted by R²):");
    println!("{:<20} {:>8} {:>8} {:>8}", "Model", "RMSE", "R²", "MAE");
    for r in trainer.results_ranked() {
        println!("{:<20} {:>8.3} {:>8.3} {:>8.3}", r.model, r.rmse, r.r2, r.mae);
    }
    if let Some(best) = trainer.best_result() {
        println!("\nBest model: {}", best.model);
    }

    let path = config.artifact_path();
    trainer.save(&path, &encoder)?;
    println!("Saved model and feature contract to {}", path.display());
    Ok(())
}

async fn fetch(
    config: Config,
    query: &str,
    output: &std::path::Path,
    max_results: Option<usize>,
) -> anyhow::Result<()> {
    let client = YouTubeClient::new(&config.youtube)?;
    let max_results = max_results.unwrap_or(config.youtube.max_results);
    let records = client.fetch(query, max_results).await?;
    data::write_csv(output, &records)?;
    println!("Wrote {} records to {}", records.len(), output.display());
    Ok(())
}

fn predict_one(config: Config, record: &RawRecord) -> anyhow::Result<()> {
    let predictor = load_predictor(&config)?;
    let views = predictor.predict_one(record)?;
    if let Ok(id) = record.category_id.parse::<u32>() {
        if let Some(name) = category_name(id) {
            tracing::debug!(category = name, "predicting for category");
        }
    }
    println!("Predicted view count: {views}");
    Ok(())
}

async fn predict_url(config: Config, url: &str) -> anyhow::Result<()> {
    let client = YouTubeClient::new(&config.youtube)?;
    let predictor = load_predictor(&config)?;

    let record = client.fetch_by_url(url).await?;
    println!("Fetched: {} ({})", record.title, record.video_id);
    if !record.view_count.is_empty() {
        println!("Actual view count:    {}", record.view_count);
    }
    let views = predictor.predict_one(&record)?;
    println!("Predicted view count: {views}");
    Ok(())
}

fn predict_csv(config: Config, input: &std::path::Path) -> anyhow::Result<()> {
    let predictor = load_predictor(&config)?;
    let records = data::read_csv(input)
        .with_context(|| format!("reading prediction CSV {}", input.display()))?;
    let outcomes = predictor.predict_batch(&records)?;

    if outcomes.is_empty() {
        println!("No predictable rows in {}", input.display());
        return Ok(());
    }
    println!("{:<20} {:>15}", "video_id", "predicted_views");
    for o in &outcomes {
        match &o.outcome {
            Ok(views) => println!("{:<20} {views:>15}", o.video_id),
            Err(e) => println!("{:<20} error: {e}", o.video_id),
        }
    }
    Ok(())
}

/// Loading fails fast when no usable artifact exists; there is nothing to
/// predict with until a model has been trained.
fn load_predictor(config: &Config) -> anyhow::Result<Predictor> {
    let path = config.artifact_path();
    Predictor::load(&path)
        .with_context(|| format!("run `yt-predictor train` first ({} not usable)", path.display()))
}
