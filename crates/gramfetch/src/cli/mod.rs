//! Command-line front end over the `gramfetch` library
//!
//! Each submodule owns its clap options, calls the library, and renders the
//! result either as pretty JSON (`--json`) or as colored text.

use colored::Colorize;
use gramfetch::{Account, Media, MediaType};
use gramfetch_core::media::format_timestamp;

pub mod account;
pub mod location;
pub mod media;
pub mod search;
pub mod tag;

pub fn truncate_text(text: &str, max_len: usize) -> String {
    if text.chars().count() <= max_len {
        text.to_string()
    } else {
        let truncated: String = text.chars().take(max_len).collect();
        format!("{truncated}...")
    }
}

/// Comma separated verified/private markers, empty for neither
pub fn account_flags(account: &Account) -> String {
    match (account.is_verified, account.is_private) {
        (true, true) => "verified, private".to_string(),
        (true, false) => "verified".to_string(),
        (false, true) => "private".to_string(),
        (false, false) => String::new(),
    }
}

fn media_type_label(media_type: MediaType) -> &'static str {
    match media_type {
        MediaType::Image => "image",
        MediaType::Video => "video",
        MediaType::Carousel => "carousel",
    }
}

/// Render one post as a short block of colored text
pub fn format_media_entry(index: usize, media: &Media) -> String {
    let mut result = String::new();

    result.push_str(&format!(
        "\n{} {} {}\n",
        format!("[{index}]").yellow().bold(),
        media.code.white().bold(),
        format!("({})", media_type_label(media.media_type)).bright_black()
    ));

    if let Some(caption) = &media.caption {
        let first_line = caption.lines().next().unwrap_or_default();
        result.push_str(&format!("    {}\n", truncate_text(first_line, 100)));
    }

    let author = media
        .owner
        .as_ref()
        .map(|o| o.username.clone().unwrap_or_else(|| format!("id:{}", o.id)))
        .unwrap_or_else(|| "unknown".to_string());

    result.push_str(&format!(
        "    {}: {} | {}: {} | {}: {} | {}: {}\n",
        "By".green(),
        author.bright_white(),
        "Likes".green(),
        media.likes.unwrap_or(0).to_string().bright_yellow(),
        "Comments".green(),
        media.comments.unwrap_or(0).to_string().bright_magenta(),
        "Taken".green(),
        format_timestamp(media.taken_at)
            .unwrap_or_else(|| "unknown".to_string())
            .bright_black()
    ));

    result.push_str(&format!(
        "    {}: {}\n",
        "URL".green(),
        media.permalink().cyan().underline()
    ));

    if let Some(video_url) = &media.video_url {
        result.push_str(&format!("    {}: {}\n", "Video".green(), video_url.cyan()));
    } else if let Some(display_url) = &media.display_url {
        result.push_str(&format!("    {}: {}\n", "Image".green(), display_url.cyan()));
    }

    result
}

/// Render a list of posts under a header
pub fn format_media_list(title: &str, items: &[Media]) -> String {
    let mut result = String::new();

    result.push_str(&format!("\n{}\n", "=".repeat(80).bright_cyan()));
    result.push_str(&format!(
        "{}\n",
        format!("{} ({} posts)", title.to_uppercase(), items.len())
            .bright_cyan()
            .bold()
    ));
    result.push_str(&format!("{}\n", "=".repeat(80).bright_cyan()));

    if items.is_empty() {
        result.push_str(&format!("\n{}\n", "No posts found.".yellow()));
    } else {
        for (idx, media) in items.iter().enumerate() {
            result.push_str(&format_media_entry(idx + 1, media));
        }
    }

    result.push('\n');
    result
}

/// Render a fixed-slot top posts view, showing empty slots in place
pub fn format_top_slots(title: &str, slots: &[Option<Media>]) -> String {
    let mut result = String::new();

    result.push_str(&format!("\n{}\n", "=".repeat(80).bright_cyan()));
    result.push_str(&format!("{}\n", title.to_uppercase().bright_cyan().bold()));
    result.push_str(&format!("{}\n", "=".repeat(80).bright_cyan()));

    for (idx, slot) in slots.iter().enumerate() {
        match slot {
            Some(media) => result.push_str(&format_media_entry(idx + 1, media)),
            None => result.push_str(&format!(
                "\n{} {}\n",
                format!("[{}]", idx + 1).yellow().bold(),
                "(empty)".bright_black()
            )),
        }
    }

    result.push('\n');
    result
}
