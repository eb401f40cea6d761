use crate::prelude::{eprintln, println, *};

use super::{format_media_list, format_top_slots};

/// Hashtag commands
#[derive(Debug, clap::Subcommand)]
pub enum Commands {
    /// List recent posts carrying a hashtag
    #[clap(name = "media")]
    Media(MediaOptions),

    /// Show the top posts of a hashtag
    #[clap(name = "top")]
    Top(TopOptions),
}

#[derive(Debug, clap::Args, Clone)]
pub struct MediaOptions {
    /// Hashtag, with or without the leading #
    #[arg(value_name = "TAG")]
    pub tag: String,

    /// Maximum number of posts to read
    #[arg(short, long, env = "GRAMFETCH_QUANTITY", default_value = "12")]
    pub quantity: usize,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, clap::Args, Clone)]
pub struct TopOptions {
    /// Hashtag, with or without the leading #
    #[arg(value_name = "TAG")]
    pub tag: String,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

pub async fn run(cmd: Commands, global: crate::Global) -> Result<()> {
    let client = global.client()?;

    match cmd {
        Commands::Media(options) => {
            let tag = normalize_tag(&options.tag);
            if global.verbose {
                eprintln!("Fetching up to {} posts tagged #{}...", options.quantity, tag);
            }

            let items = client
                .tag_media(tag, options.quantity)
                .await
                .wrap_err_with(|| f!("Failed to read posts tagged #{tag}"))?;

            if options.json {
                print_json(&items)?;
            } else {
                print!("{}", format_media_list(&f!("tag #{tag}"), &items));
            }
        }
        Commands::Top(options) => {
            let tag = normalize_tag(&options.tag);
            let slots = client
                .tag_top_media(tag)
                .await
                .wrap_err_with(|| f!("Failed to read top posts of #{tag}"))?;

            if options.json {
                print_json(&slots)?;
            } else {
                print!("{}", format_top_slots(&f!("top posts of #{tag}"), &slots));
            }
        }
    }

    Ok(())
}

fn normalize_tag(tag: &str) -> &str {
    tag.trim().trim_start_matches('#')
}
