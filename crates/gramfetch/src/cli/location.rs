use crate::prelude::{eprintln, println, *};
use colored::Colorize;
use gramfetch::Location;

use super::{format_media_list, format_top_slots};

/// Location commands
#[derive(Debug, clap::Subcommand)]
pub enum Commands {
    /// Show a location page
    #[clap(name = "show")]
    Show(ShowOptions),

    /// List recent posts tagged with a location
    #[clap(name = "media")]
    Media(MediaOptions),

    /// Show the top posts of a location
    #[clap(name = "top")]
    Top(ShowOptions),
}

#[derive(Debug, clap::Args, Clone)]
pub struct ShowOptions {
    /// Numeric location id
    #[arg(value_name = "ID")]
    pub id: String,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, clap::Args, Clone)]
pub struct MediaOptions {
    /// Numeric location id
    #[arg(value_name = "ID")]
    pub id: String,

    /// Maximum number of posts to read
    #[arg(short, long, env = "GRAMFETCH_QUANTITY", default_value = "12")]
    pub quantity: usize,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

pub async fn run(cmd: Commands, global: crate::Global) -> Result<()> {
    let client = global.client()?;

    match cmd {
        Commands::Show(options) => {
            if global.verbose {
                eprintln!("Fetching location {}...", options.id);
            }

            let location = client
                .location_by_id(&options.id)
                .await
                .wrap_err_with(|| f!("Failed to read location {}", options.id))?;

            if options.json {
                print_json(&location)?;
            } else {
                print!("{}", format_location(&location));
            }
        }
        Commands::Media(options) => {
            if global.verbose {
                eprintln!(
                    "Fetching up to {} posts at location {}...",
                    options.quantity, options.id
                );
            }

            let items = client
                .location_media(&options.id, options.quantity)
                .await
                .wrap_err_with(|| f!("Failed to read posts at location {}", options.id))?;

            if options.json {
                print_json(&items)?;
            } else {
                print!(
                    "{}",
                    format_media_list(&f!("location {}", options.id), &items)
                );
            }
        }
        Commands::Top(options) => {
            let slots = client
                .location_top_media(&options.id)
                .await
                .wrap_err_with(|| f!("Failed to read top posts of location {}", options.id))?;

            if options.json {
                print_json(&slots)?;
            } else {
                print!(
                    "{}",
                    format_top_slots(&f!("top posts at location {}", options.id), &slots)
                );
            }
        }
    }

    Ok(())
}

fn format_location(location: &Location) -> String {
    let mut result = String::new();

    result.push_str(&f!(
        "\n{} {}\n",
        location.name.bright_cyan().bold(),
        f!("({})", location.id).bright_black()
    ));

    if let (Some(lat), Some(lng)) = (location.lat, location.lng) {
        result.push_str(&f!("    {}: {:.4}, {:.4}\n", "Coordinates".green(), lat, lng));
    }
    if let Some(slug) = &location.slug {
        result.push_str(&f!("    {}: {}\n", "Slug".green(), slug));
    }
    if let Some(count) = location.media_count {
        result.push_str(&f!(
            "    {}: {}\n",
            "Posts".green(),
            count.to_string().bright_yellow()
        ));
    }

    if !location.top_posts.is_empty() {
        result.push_str(&format_media_list("top posts", &location.top_posts));
    }
    result.push_str(&format_media_list("recent posts", &location.media));

    result
}
