use crate::prelude::{eprintln, println, *};
use gramfetch_core::media::is_media_code;

use super::format_media_entry;

#[derive(Debug, clap::Args, Clone)]
pub struct MediaOptions {
    /// Post short code (e.g. BSRJHkUgWW1) or post URL
    #[arg(value_name = "CODE_OR_URL")]
    pub input: String,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

pub async fn run(options: MediaOptions, global: crate::Global) -> Result<()> {
    let client = global.client()?;

    let media = if is_media_code(&options.input) {
        if global.verbose {
            eprintln!("Fetching post {}...", options.input);
        }
        client.media_by_code(&options.input).await
    } else {
        if global.verbose {
            eprintln!("Fetching post from {}...", options.input);
        }
        client.media_by_url(&options.input).await
    }
    .wrap_err_with(|| f!("Failed to read post {}", options.input))?;

    if options.json {
        print_json(&media)?;
    } else {
        print!("{}", format_media_entry(1, &media));
    }

    Ok(())
}
