//! Command-line surface.

use clap::{Args, Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(name = "starwatch", version, about = "Track GitHub star counts over time")]
pub struct Cli {
    /// MongoDB connection string (overrides MONGO_URL).
    #[arg(long, global = true)]
    pub mongo_url: Option<String>,

    /// Use the in-memory backend instead of MongoDB (nothing survives the
    /// process).
    #[arg(long, global = true)]
    pub memory: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Args)]
pub struct QueryArgs {
    /// Language qualifier, e.g. `rust`.
    #[arg(long, default_value = "")]
    pub language: String,

    /// Free-text query component (feeds the snapshot identity).
    #[arg(long, default_value = "")]
    pub query: String,

    /// Star-range qualifier, e.g. `>1000` or `500..1000`.
    #[arg(long, default_value = ">1000")]
    pub stars: String,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Query GitHub and print the star-delta report against the stored
    /// baseline.
    Show(QueryArgs),

    /// Query GitHub and store the result as the new baseline.
    Commit {
        #[command(flatten)]
        query: QueryArgs,

        /// Snapshot name to write (defaults to the standard snapshot).
        #[arg(long)]
        name: Option<String>,
    },

    /// Compare the current query result against a snapshot stored under
    /// another identity container.
    Compare {
        #[command(flatten)]
        query: QueryArgs,

        /// Identity container holding the baseline.
        #[arg(long = "with")]
        with: String,
    },

    /// List snapshot names stored under the query's identity container.
    List(QueryArgs),

    /// Print the description word-frequency tally for the query result.
    Words(QueryArgs),
}

impl QueryArgs {
    pub fn to_filter(&self) -> github_search::SearchFilter {
        github_search::SearchFilter {
            language: self.language.clone(),
            query: self.query.clone(),
            stars: self.stars.clone(),
        }
    }
}
