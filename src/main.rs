use std::error::Error;

use clap::Parser;
use github_search::SearchProvider;
use snapshot_store::{MemoryBackend, MongoBackend, StoreBackend};
use tracing_subscriber::EnvFilter;

use starwatch::cli::{Cli, Command};
use starwatch::config::AppConfig;
use starwatch::orchestrator::StarsTracker;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    // Load environment variables from .env file, when present.
    dotenvy::dotenv().ok();

    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new("info"))
        .unwrap();
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    let cli = Cli::parse();
    let cfg = AppConfig::load(cli.mongo_url.as_deref(), cli.memory);
    cfg.validate()?;

    let provider = SearchProvider::github(&cfg.search)?;
    let backend = if cfg.use_memory {
        StoreBackend::Memory(MemoryBackend::new())
    } else {
        StoreBackend::Mongo(MongoBackend::connect(&cfg.mongo_url).await?)
    };
    let mut tracker = StarsTracker::new(provider, backend);

    match cli.command {
        Command::Show(query) => {
            let report = tracker.show(&query.to_filter()).await?;
            println!("{report}");
        }
        Command::Commit { query, name } => {
            tracker.commit(&query.to_filter(), name.as_deref()).await?;
        }
        Command::Compare { query, with } => {
            let report = tracker.compare_with(&query.to_filter(), &with).await?;
            println!("{report}");
        }
        Command::List(query) => {
            for name in tracker.list(&query.to_filter()).await? {
                println!("{name}");
            }
        }
        Command::Words(query) => {
            for (word, count) in tracker.popular_words(&query.to_filter()).await? {
                println!("{word} {count}");
            }
        }
    }

    Ok(())
}
