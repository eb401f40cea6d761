#![allow(unused)]

use crate::prelude::{eprintln, *};
use clap::Parser;
use gramfetch::{Client, ClientConfig};

mod cli;
mod prelude;

#[derive(Debug, clap::Parser)]
#[command(
    author,
    version,
    about,
    long_about = "Read-only client for Instagram's public JSON endpoints"
)]
pub struct App {
    #[command(subcommand)]
    pub command: SubCommands,

    #[clap(flatten)]
    global: Global,
}

#[derive(Debug, Clone, clap::Args)]
pub struct Global {
    /// Base URL of the JSON endpoints, overrides GRAMFETCH_BASE_URL
    #[clap(long, global = true)]
    base_url: Option<String>,

    /// User-Agent header sent with every request, overrides GRAMFETCH_USER_AGENT
    #[clap(long, global = true)]
    user_agent: Option<String>,

    /// Whether to display additional information.
    #[clap(long, env = "GRAMFETCH_VERBOSE", global = true, default_value = "false")]
    verbose: bool,
}

impl Global {
    /// Environment configuration with the CLI flags applied on top
    pub fn config(&self) -> ClientConfig {
        ClientConfig::from_env().with_overrides(self.base_url.clone(), self.user_agent.clone())
    }

    /// Build a client from the environment plus any CLI overrides
    pub fn client(&self) -> Result<Client> {
        let config = self.config();

        if self.verbose {
            eprintln!("Base URL: {}", config.base_url);
        }

        Client::with_config(config).wrap_err("Failed to create client")
    }
}

#[derive(Debug, clap::Parser)]
pub enum SubCommands {
    /// Account profiles and their posts
    #[clap(subcommand)]
    Account(cli::account::Commands),

    /// Read a single post by short code or URL
    Media(cli::media::MediaOptions),

    /// Location pages, feeds and top posts
    #[clap(subcommand)]
    Location(cli::location::Commands),

    /// Hashtag feeds and top posts
    #[clap(subcommand)]
    Tag(cli::tag::Commands),

    /// Search accounts by name
    Search(cli::search::SearchOptions),
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();
    color_eyre::install()?;

    let app = App::parse();

    match app.command {
        SubCommands::Account(cmd) => cli::account::run(cmd, app.global).await,
        SubCommands::Media(options) => cli::media::run(options, app.global).await,
        SubCommands::Location(cmd) => cli::location::run(cmd, app.global).await,
        SubCommands::Tag(cmd) => cli::tag::run(cmd, app.global).await,
        SubCommands::Search(options) => cli::search::run(options, app.global).await,
    }
}
