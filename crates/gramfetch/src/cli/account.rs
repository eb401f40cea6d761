use crate::prelude::{eprintln, println, *};
use colored::Colorize;
use gramfetch::Account;
use prettytable::row;

use super::{account_flags, format_media_list};

/// Account commands
#[derive(Debug, clap::Subcommand)]
pub enum Commands {
    /// Show an account profile
    #[clap(name = "show")]
    Show(ShowOptions),

    /// List the most recent posts of an account
    #[clap(name = "media")]
    Media(MediaOptions),
}

#[derive(Debug, clap::Args, Clone)]
pub struct ShowOptions {
    /// Account username
    #[arg(value_name = "USERNAME")]
    pub username: String,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, clap::Args, Clone)]
pub struct MediaOptions {
    /// Account username
    #[arg(value_name = "USERNAME")]
    pub username: String,

    /// Maximum number of posts to read
    #[arg(short, long, env = "GRAMFETCH_QUANTITY", default_value = "12")]
    pub quantity: usize,

    /// Read every post the account reports, ignoring --quantity
    #[arg(long)]
    pub all: bool,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

pub async fn run(cmd: Commands, global: crate::Global) -> Result<()> {
    match cmd {
        Commands::Show(options) => show(options, global).await,
        Commands::Media(options) => media(options, global).await,
    }
}

async fn show(options: ShowOptions, global: crate::Global) -> Result<()> {
    if global.verbose {
        eprintln!("Fetching account {}...", options.username);
    }

    let client = global.client()?;
    let account = client
        .account_by_username(&options.username)
        .await
        .wrap_err_with(|| f!("Failed to read account {}", options.username))?;

    if options.json {
        print_json(&account)?;
    } else {
        output_account(&account);
    }

    Ok(())
}

async fn media(options: MediaOptions, global: crate::Global) -> Result<()> {
    let client = global.client()?;

    let items = if options.all {
        if global.verbose {
            eprintln!("Fetching every post of {}...", options.username);
        }
        client.all_account_media(&options.username).await
    } else {
        if global.verbose {
            eprintln!(
                "Fetching up to {} posts of {}...",
                options.quantity, options.username
            );
        }
        client
            .account_media(&options.username, options.quantity)
            .await
    }
    .wrap_err_with(|| f!("Failed to read posts of {}", options.username))?;

    if options.json {
        print_json(&items)?;
    } else {
        print!(
            "{}",
            format_media_list(&f!("posts by @{}", options.username), &items)
        );
    }

    Ok(())
}

fn output_account(account: &Account) {
    println!(
        "\n{} {}",
        f!("@{}", account.username).bright_cyan().bold(),
        badges(account).bright_black()
    );

    let mut table = new_table();
    for (label, value) in account_fields(account) {
        table.add_row(row![label.green(), value]);
    }

    table.printstd();
}

fn badges(account: &Account) -> String {
    let flags = account_flags(account);
    if flags.is_empty() {
        flags
    } else {
        f!("[{flags}]")
    }
}

/// Label/value pairs for the fields an account actually carries
fn account_fields(account: &Account) -> Vec<(&'static str, String)> {
    let mut fields = vec![("ID", account.id.clone())];

    let optional = [
        ("Name", account.full_name.clone()),
        ("Bio", account.biography.clone()),
        ("Website", account.external_url.clone()),
        ("Picture", account.profile_pic_url.clone()),
        ("Posts", account.media_count.map(|c| c.to_string())),
        ("Followers", account.followed_by.map(|c| c.to_string())),
        ("Following", account.follows.map(|c| c.to_string())),
    ];

    fields.extend(
        optional
            .into_iter()
            .filter_map(|(label, value)| value.map(|v| (label, v))),
    );

    fields
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_account_fields_skip_missing_values() {
        let account = Account {
            id: "787132".to_string(),
            username: "natgeo".to_string(),
            full_name: Some("National Geographic".to_string()),
            followed_by: Some(1000),
            ..Default::default()
        };

        let fields = account_fields(&account);

        assert_eq!(
            fields,
            vec![
                ("ID", "787132".to_string()),
                ("Name", "National Geographic".to_string()),
                ("Followers", "1000".to_string()),
            ]
        );
    }

    #[test]
    fn test_badges() {
        let mut account = Account::default();
        assert_eq!(badges(&account), "");

        account.is_verified = true;
        account.is_private = true;
        assert_eq!(badges(&account), "[verified, private]");
    }
}
